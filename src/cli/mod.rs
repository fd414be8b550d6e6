//! CLI command handlers
//!
//! Bridges clap argument parsing with the validation and wizard layers.

pub mod validate;
pub mod wizard;

pub use validate::{handle_validate_command, StepScope, ValidateCommands};
pub use wizard::emit_registration;
