//! Registration payload handed off after a successful submission
//!
//! Values are normalised the way the server expects them: email lower-cased
//! and trimmed, username trimmed, phone reduced to its digits. Passwords are
//! not included.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::validation::{Field, FieldValues};

/// A submitted registration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registration {
    /// Client-side submission id
    pub id: Uuid,
    /// When the submission passed validation
    pub submitted_at: DateTime<Utc>,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
}

impl Registration {
    /// Build a payload from validated form values
    pub fn from_values(values: &FieldValues) -> Self {
        Self {
            id: Uuid::new_v4(),
            submitted_at: Utc::now(),
            username: values.get(Field::Username).trim().to_string(),
            email: normalize_email(values.get(Field::Email)),
            first_name: values.get(Field::FirstName).to_string(),
            last_name: values.get(Field::LastName).to_string(),
            phone: normalize_phone(values.get(Field::Phone)),
        }
    }
}

/// Lower-case and trim an email address
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Keep only the ASCII digits of a phone number
pub fn normalize_phone(phone: &str) -> String {
    phone.chars().filter(char::is_ascii_digit).collect()
}
