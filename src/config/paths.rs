//! Path management for sales-signup
//!
//! ## Path Resolution Order
//!
//! 1. `SALES_SIGNUP_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/sales-signup` or `~/.config/sales-signup`
//! 3. Windows: `%APPDATA%\sales-signup`

use std::path::PathBuf;

use crate::error::SignupError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "SALES_SIGNUP_DATA_DIR";

/// Manages all paths used by sales-signup
#[derive(Debug, Clone)]
pub struct SignupPaths {
    base_dir: PathBuf,
}

impl SignupPaths {
    /// Resolve paths from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if no home/config directory can be determined.
    pub fn new() -> Result<Self, SignupError> {
        let base_dir = if let Ok(custom) = std::env::var(DATA_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create SignupPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the directory holding JSONL log files
    pub fn log_dir(&self) -> PathBuf {
        self.base_dir.join("logs")
    }

    /// Ensure the base and log directories exist
    pub fn ensure_directories(&self) -> Result<(), SignupError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| SignupError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.log_dir())
            .map_err(|e| SignupError::Io(format!("Failed to create log directory: {}", e)))?;

        Ok(())
    }
}

#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, SignupError> {
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => {
            let home = std::env::var("HOME").map_err(|_| {
                SignupError::Config("Could not determine HOME directory".into())
            })?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("sales-signup"))
}

#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, SignupError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| SignupError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("sales-signup"))
}
