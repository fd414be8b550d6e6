//! Custom error types for sales-signup
//!
//! Field-level validation failures are plain values (see
//! [`crate::validation::Violation`]); this module only covers operational
//! errors such as a misconfigured form surface or unreadable settings.

use thiserror::Error;

use crate::wizard::FormStep;

/// The main error type for sales-signup operations
#[derive(Error, Debug)]
pub enum SignupError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// A required element is missing from the form surface
    #[error("Form is missing required element '{id}'")]
    MissingElement { id: String },

    /// A step change that the wizard does not allow from its current state
    #[error("Cannot move from step {from} to step {to}")]
    Transition { from: FormStep, to: FormStep },

    /// Submission attempted before the final step is active
    #[error("Cannot submit from step {step}")]
    SubmitOutsideFinalStep { step: FormStep },

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Values rejected by a non-interactive validation run
    #[error("Validation error: {0}")]
    Validation(String),
}

impl SignupError {
    /// Create a "missing element" error
    pub fn missing_element(id: impl Into<String>) -> Self {
        Self::MissingElement { id: id.into() }
    }

    /// Check if this is a form configuration error
    pub fn is_missing_element(&self) -> bool {
        matches!(self, Self::MissingElement { .. })
    }

    /// Check if this is a rejected step change
    pub fn is_transition(&self) -> bool {
        matches!(self, Self::Transition { .. })
    }

    /// Check if this is a premature submission
    pub fn is_premature_submit(&self) -> bool {
        matches!(self, Self::SubmitOutsideFinalStep { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for SignupError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for SignupError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for sales-signup operations
pub type SignupResult<T> = Result<T, SignupError>;
