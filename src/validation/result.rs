//! Validation results

use super::field::Field;
use super::rules::{rule, Violation};

/// Outcome of checking one field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldOutcome {
    pub field: Field,
    pub violation: Option<Violation>,
}

impl FieldOutcome {
    /// Whether the field passed
    pub fn is_valid(&self) -> bool {
        self.violation.is_none()
    }

    /// Error text for the field, empty when valid
    pub fn message(&self) -> &'static str {
        self.violation
            .and_then(|v| rule(self.field).message(v))
            .unwrap_or("")
    }
}

/// Per-field outcomes of one validation pass, in priority order
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationResult {
    outcomes: Vec<FieldOutcome>,
}

impl ValidationResult {
    pub(crate) fn new(outcomes: Vec<FieldOutcome>) -> Self {
        Self { outcomes }
    }

    /// True when every evaluated field passed
    pub fn is_valid(&self) -> bool {
        self.outcomes.iter().all(FieldOutcome::is_valid)
    }

    /// All outcomes, in priority order
    pub fn outcomes(&self) -> &[FieldOutcome] {
        &self.outcomes
    }

    /// The highest-priority failing field
    pub fn first_invalid(&self) -> Option<Field> {
        self.invalid_fields().next()
    }

    /// Failing fields, in priority order
    pub fn invalid_fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.outcomes
            .iter()
            .filter(|o| !o.is_valid())
            .map(|o| o.field)
    }

    /// Outcome for a field, if it was evaluated
    pub fn outcome(&self, field: Field) -> Option<&FieldOutcome> {
        self.outcomes.iter().find(|o| o.field == field)
    }

    /// Violation for a field (None when valid or not evaluated)
    pub fn violation(&self, field: Field) -> Option<Violation> {
        self.outcome(field).and_then(|o| o.violation)
    }

    /// Error text for a field (empty when valid or not evaluated)
    pub fn message(&self, field: Field) -> &'static str {
        self.outcome(field).map(FieldOutcome::message).unwrap_or("")
    }
}
