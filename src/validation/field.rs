//! Registration form fields
//!
//! Each field owns a fixed input element id and a parallel error element id
//! (`first_name` / `first_name_error`). Declaration order is the evaluation
//! and focus priority.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::wizard::FormStep;

/// A field of the registration form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    FirstName,
    LastName,
    Email,
    Phone,
    Username,
    Password,
    ConfirmPassword,
}

impl Field {
    /// Every field, in priority order
    pub const ALL: [Field; 7] = [
        Field::FirstName,
        Field::LastName,
        Field::Email,
        Field::Phone,
        Field::Username,
        Field::Password,
        Field::ConfirmPassword,
    ];

    const PERSONAL: [Field; 4] = [Field::FirstName, Field::LastName, Field::Email, Field::Phone];
    const ACCOUNT: [Field; 3] = [Field::Username, Field::Password, Field::ConfirmPassword];

    /// Fields shown on the given step, in priority order
    pub fn for_step(step: FormStep) -> &'static [Field] {
        match step {
            FormStep::Personal => &Self::PERSONAL,
            FormStep::Account => &Self::ACCOUNT,
        }
    }

    /// Position in [`Field::ALL`]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Input element id
    pub fn id(self) -> &'static str {
        match self {
            Self::FirstName => "first_name",
            Self::LastName => "last_name",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Username => "username",
            Self::Password => "password",
            Self::ConfirmPassword => "confirm_password",
        }
    }

    /// Error-text element id
    pub fn error_id(self) -> &'static str {
        match self {
            Self::FirstName => "first_name_error",
            Self::LastName => "last_name_error",
            Self::Email => "email_error",
            Self::Phone => "phone_error",
            Self::Username => "username_error",
            Self::Password => "password_error",
            Self::ConfirmPassword => "confirm_password_error",
        }
    }

    /// Human-readable label
    pub fn label(self) -> &'static str {
        match self {
            Self::FirstName => "First name",
            Self::LastName => "Last name",
            Self::Email => "Email",
            Self::Phone => "Phone",
            Self::Username => "Username",
            Self::Password => "Password",
            Self::ConfirmPassword => "Confirm password",
        }
    }

    /// Step the field belongs to
    pub fn step(self) -> FormStep {
        match self {
            Self::FirstName | Self::LastName | Self::Email | Self::Phone => FormStep::Personal,
            Self::Username | Self::Password | Self::ConfirmPassword => FormStep::Account,
        }
    }

    /// Whether the value should be masked and wiped
    pub fn is_secret(self) -> bool {
        matches!(self, Self::Password | Self::ConfirmPassword)
    }

    /// Look up a field by its input element id
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.id() == id)
    }

    /// Look up a field by its error element id
    pub fn from_error_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.error_id() == id)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}
