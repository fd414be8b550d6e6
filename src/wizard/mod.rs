//! Two-step registration wizard
//!
//! [`WizardFormValidator`] owns a [`FormSurface`] and exposes the wizard's
//! operations as plain method calls; the presentation layer wires its own
//! events to them.
//!
//! # Example
//!
//! ```rust,ignore
//! use signup::wizard::{FormStep, StepChange, WizardFormValidator};
//!
//! let mut wizard = WizardFormValidator::new(surface)?;
//! if let StepChange::Advanced { .. } = wizard.advance_to_step(FormStep::Account)? {
//!     wizard.submit()?;
//! }
//! ```

pub mod payload;
pub mod step;
pub mod surface;
pub mod validator;

#[cfg(test)]
pub(crate) mod testing;

pub use payload::Registration;
pub use step::FormStep;
pub use surface::{FormSurface, FORM_ID};
pub use validator::{StepChange, SubmitOutcome, WizardFormValidator};
