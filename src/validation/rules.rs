//! Field rules
//!
//! The rule table is static: one [`FieldRule`] per [`Field`], each mapping
//! the violations it can report to a user-facing message. Evaluation is pure;
//! every field is checked independently and the outcome list is returned in
//! priority order.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::email::is_valid_email;
use super::field::Field;
use super::result::{FieldOutcome, ValidationResult};
use super::values::FieldValues;
use crate::wizard::FormStep;

/// Minimum password length, in UTF-16 code units
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Shown once a submission passes every rule
pub const SUCCESS_MESSAGE: &str = "Account created successfully! Redirecting to login...";

/// Why a field failed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Violation {
    /// The field is empty
    Required,
    /// The value does not look like an email address
    InvalidFormat,
    /// The password is shorter than [`MIN_PASSWORD_LENGTH`]
    TooShort,
    /// The confirmation differs from the password
    Mismatch,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Required => "required",
            Self::InvalidFormat => "invalid_format",
            Self::TooShort => "too_short",
            Self::Mismatch => "mismatch",
        };
        write!(f, "{}", name)
    }
}

/// Validation rule bound to one field
#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    /// The field this rule checks
    pub field: Field,
    /// Evaluation order; lower runs first and wins focus
    pub priority: u8,
    messages: &'static [(Violation, &'static str)],
}

impl FieldRule {
    /// Message for a violation, if this rule can report it
    pub fn message(&self, violation: Violation) -> Option<&'static str> {
        self.messages
            .iter()
            .find(|(v, _)| *v == violation)
            .map(|(_, msg)| *msg)
    }

    /// Check the field against the current values
    pub fn check(&self, values: &FieldValues) -> Option<Violation> {
        let value = values.get(self.field);
        if value.is_empty() {
            return Some(Violation::Required);
        }

        match self.field {
            Field::Email if !is_valid_email(value) => Some(Violation::InvalidFormat),
            Field::Password if value.encode_utf16().count() < MIN_PASSWORD_LENGTH => {
                Some(Violation::TooShort)
            }
            Field::ConfirmPassword if value != values.get(Field::Password) => {
                Some(Violation::Mismatch)
            }
            _ => None,
        }
    }
}

/// The rule table, indexed by [`Field::index`]
pub static RULES: [FieldRule; 7] = [
    FieldRule {
        field: Field::FirstName,
        priority: 0,
        messages: &[(Violation::Required, "Please enter your first name.")],
    },
    FieldRule {
        field: Field::LastName,
        priority: 1,
        messages: &[(Violation::Required, "Please enter your last name.")],
    },
    FieldRule {
        field: Field::Email,
        priority: 2,
        messages: &[
            (Violation::Required, "Please enter your email."),
            (Violation::InvalidFormat, "Please enter a valid email."),
        ],
    },
    FieldRule {
        field: Field::Phone,
        priority: 3,
        messages: &[(Violation::Required, "Please enter your phone number.")],
    },
    FieldRule {
        field: Field::Username,
        priority: 4,
        messages: &[(Violation::Required, "Please enter a username.")],
    },
    FieldRule {
        field: Field::Password,
        priority: 5,
        messages: &[
            (Violation::Required, "Please enter a password."),
            (
                Violation::TooShort,
                "Password must be at least 8 characters.",
            ),
        ],
    },
    FieldRule {
        field: Field::ConfirmPassword,
        priority: 6,
        messages: &[
            (Violation::Required, "Please confirm your password."),
            (Violation::Mismatch, "Passwords do not match."),
        ],
    },
];

/// Rule for a field
pub fn rule(field: Field) -> &'static FieldRule {
    &RULES[field.index()]
}

/// Evaluate the given fields, returning outcomes in priority order
pub fn evaluate(fields: &[Field], values: &FieldValues) -> ValidationResult {
    let mut rules: Vec<&FieldRule> = fields.iter().map(|f| rule(*f)).collect();
    rules.sort_by_key(|r| r.priority);

    let outcomes = rules
        .into_iter()
        .map(|r| FieldOutcome {
            field: r.field,
            violation: r.check(values),
        })
        .collect();

    ValidationResult::new(outcomes)
}

/// Evaluate every rule bound to a step
pub fn evaluate_step(step: FormStep, values: &FieldValues) -> ValidationResult {
    evaluate(Field::for_step(step), values)
}

/// Evaluate the whole form
pub fn evaluate_all(values: &FieldValues) -> ValidationResult {
    evaluate(&Field::ALL, values)
}
