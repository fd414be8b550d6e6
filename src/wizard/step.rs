//! Wizard steps

use std::fmt;

use serde::{Deserialize, Serialize};

/// One page of the registration wizard
///
/// Exactly one step is active at a time; the wizard starts on
/// [`FormStep::Personal`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormStep {
    /// Step 1: name, email and phone
    #[default]
    Personal,
    /// Step 2: username and password
    Account,
}

impl FormStep {
    /// All steps in order
    pub const ALL: [FormStep; 2] = [FormStep::Personal, FormStep::Account];

    /// Step number as shown on the indicator (`data-step`)
    pub fn number(self) -> u8 {
        match self {
            Self::Personal => 1,
            Self::Account => 2,
        }
    }

    /// Parse a step number
    pub fn from_number(number: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.number() == number)
    }

    /// Id of the step container element
    pub fn container_id(self) -> &'static str {
        match self {
            Self::Personal => "step-1",
            Self::Account => "step-2",
        }
    }

    /// Title shown on the step indicator
    pub fn title(self) -> &'static str {
        match self {
            Self::Personal => "Personal details",
            Self::Account => "Account",
        }
    }

    /// The step immediately before this one
    pub fn previous(self) -> Option<Self> {
        match self {
            Self::Personal => None,
            Self::Account => Some(Self::Personal),
        }
    }

    /// The step immediately after this one
    pub fn next(self) -> Option<Self> {
        match self {
            Self::Personal => Some(Self::Account),
            Self::Account => None,
        }
    }
}

impl fmt::Display for FormStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}
