//! sales-signup - two-step registration wizard
//!
//! This library provides form validation and step control for a two-step
//! account registration wizard, plus a ratatui front end that drives it.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `validation`: Field rules, messages and validation results
//! - `wizard`: The step controller and the form surface it drives
//! - `tui`: Terminal user interface
//! - `cli`: Non-interactive command handlers
//! - `logging`: JSON file logging
//!
//! # Example
//!
//! ```rust,ignore
//! use signup::tui::screen::SignupScreen;
//! use signup::wizard::{FormStep, WizardFormValidator};
//!
//! let mut wizard = WizardFormValidator::new(SignupScreen::new(true))?;
//! let change = wizard.advance_to_step(FormStep::Account)?;
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod tui;
pub mod validation;
pub mod wizard;

pub use error::{SignupError, SignupResult};
