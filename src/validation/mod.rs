//! Client-side validation rules
//!
//! Pure, framework-free checks for the registration and login forms. These
//! mirror server-side validation for convenience only and are never
//! authoritative.

pub mod email;
pub mod field;
pub mod login;
pub mod result;
pub mod rules;
pub mod values;

pub use email::is_valid_email;
pub use field::Field;
pub use login::{LoginField, LoginForm};
pub use result::{FieldOutcome, ValidationResult};
pub use rules::{
    evaluate, evaluate_all, evaluate_step, rule, FieldRule, Violation, MIN_PASSWORD_LENGTH,
    RULES, SUCCESS_MESSAGE,
};
pub use values::FieldValues;
