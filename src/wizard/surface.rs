//! The rendered form the wizard drives
//!
//! A [`FormSurface`] exposes the document structure the wizard expects:
//!
//! - a form element with id [`FORM_ID`]
//! - one container per step (`step-1`, `step-2`) toggled via an active marker
//! - step indicators carrying a numeric `data-step`
//! - per-field input and error-text elements (`email` / `email_error`)
//!
//! Handles are resolved once by the wizard and reused for every call.

use std::fmt;

/// Id of the registration form element
pub const FORM_ID: &str = "registration-form";

/// A document the wizard can read from and update
pub trait FormSurface {
    /// Reference to a located element
    type Handle: Copy + Eq + fmt::Debug;

    /// Locate an element by id
    fn element(&self, id: &str) -> Option<Self::Handle>;

    /// All step indicators with their `data-step` value
    fn step_indicators(&self) -> Vec<(u8, Self::Handle)>;

    /// Current value of an input element
    fn value(&self, element: Self::Handle) -> String;

    /// Replace the text content of an element
    fn set_text(&mut self, element: Self::Handle, text: &str);

    /// Add or remove the active marker on an element
    fn set_active(&mut self, element: Self::Handle, active: bool);

    /// Move input focus to an element
    fn focus(&mut self, element: Self::Handle);

    /// Present a success acknowledgment to the user
    fn acknowledge(&mut self, message: &str);

    /// Let the form's real submission proceed
    fn submit(&mut self, form: Self::Handle);
}
