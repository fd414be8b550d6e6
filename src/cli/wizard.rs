//! Wizard CLI command
//!
//! Runs the terminal wizard and hands the submitted registration off as JSON.

use std::path::Path;

use crate::error::{SignupError, SignupResult};
use crate::wizard::Registration;

/// Write a registration as pretty JSON to `output`, or stdout when None
pub fn emit_registration(registration: &Registration, output: Option<&Path>) -> SignupResult<()> {
    let json = serde_json::to_string_pretty(registration)?;

    match output {
        Some(path) => std::fs::write(path, json + "\n").map_err(|e| {
            SignupError::Io(format!(
                "Failed to write registration to {}: {}",
                path.display(),
                e
            ))
        }),
        None => {
            println!("{}", json);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::{Field, FieldValues};
    use tempfile::TempDir;

    #[test]
    fn test_emit_to_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("registration.json");
        let values = FieldValues::new()
            .with(Field::Username, "ana")
            .with(Field::Email, "ANA@b.co");
        let registration = Registration::from_values(&values);

        emit_registration(&registration, Some(&path)).unwrap();

        let written: Registration =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written, registration);
        assert_eq!(written.email, "ana@b.co");
    }

    #[test]
    fn test_emit_to_missing_directory_fails() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing").join("out.json");
        let registration = Registration::from_values(&FieldValues::new());

        let err = emit_registration(&registration, Some(&path)).unwrap_err();
        assert!(matches!(err, SignupError::Io(_)));
    }
}
