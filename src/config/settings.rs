//! User settings for sales-signup
//!
//! Persisted as `config.json` in the base directory. Every field has a
//! serde default so older or partial files keep loading.

use serde::{Deserialize, Serialize};

use super::paths::SignupPaths;
use crate::error::SignupError;

/// Which field receives focus when the first step fails validation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FocusMode {
    /// Focus the first failing field in priority order
    #[default]
    FirstInvalid,
    /// Only the leading field (first name) is ever focused on failure
    LeadingField,
}

/// User settings for sales-signup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Focus behaviour when advancing past the first step fails
    #[serde(default)]
    pub focus_mode: FocusMode,

    /// How long the success acknowledgment stays on screen
    #[serde(default = "default_notification_secs")]
    pub notification_secs: u64,

    /// Whether password inputs start masked
    #[serde(default = "default_mask_passwords")]
    pub mask_passwords: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_notification_secs() -> u64 {
    5
}

fn default_mask_passwords() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            focus_mode: FocusMode::default(),
            notification_secs: default_notification_secs(),
            mask_passwords: default_mask_passwords(),
        }
    }
}

impl Settings {
    /// Load settings from disk, writing the defaults on first run so the
    /// file is there to edit
    pub fn load_or_create(paths: &SignupPaths) -> Result<Self, SignupError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                SignupError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                SignupError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            let settings = Settings::default();
            settings.save(paths)?;
            Ok(settings)
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &SignupPaths) -> Result<(), SignupError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            SignupError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents).map_err(|e| {
            SignupError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }
}
