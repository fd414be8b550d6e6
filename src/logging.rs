//! Diagnostic logging
//!
//! Events go to a daily JSON Lines file under the log directory so they
//! never interfere with the terminal UI. Runs on the same day append to the
//! same file, and only the newest [`KEEP_LOG_FILES`] files are kept.
//! `RUST_LOG` overrides the default filter.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use chrono::NaiveDate;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

use crate::config::SignupPaths;
use crate::error::{SignupError, SignupResult};

/// Filter used when `RUST_LOG` is not set
pub const DEFAULT_FILTER: &str = "signup=info";

/// Number of daily log files kept
pub const KEEP_LOG_FILES: usize = 7;

const LOG_PREFIX: &str = "sales-signup-";
const LOG_SUFFIX: &str = ".jsonl";

/// Path of the log file for `date`
pub fn log_file(paths: &SignupPaths, date: NaiveDate) -> PathBuf {
    paths.log_dir().join(format!(
        "{}{}{}",
        LOG_PREFIX,
        date.format("%Y%m%d"),
        LOG_SUFFIX
    ))
}

/// Delete all but the newest `keep` log files in `dir`
///
/// Only files named like our daily logs are touched. Returns how many were
/// removed.
pub fn prune_logs(dir: &Path, keep: usize) -> SignupResult<usize> {
    let mut logs: Vec<PathBuf> = std::fs::read_dir(dir)
        .map_err(|e| SignupError::Io(format!("Failed to read log directory: {}", e)))?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| {
            path.file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|n| n.starts_with(LOG_PREFIX) && n.ends_with(LOG_SUFFIX))
        })
        .collect();

    if logs.len() <= keep {
        return Ok(0);
    }

    // YYYYMMDD names sort chronologically
    logs.sort();
    let stale = logs.len() - keep;
    for path in &logs[..stale] {
        std::fs::remove_file(path)
            .map_err(|e| SignupError::Io(format!("Failed to remove old log file: {}", e)))?;
    }
    Ok(stale)
}

/// Install the global JSON file subscriber
pub fn init(paths: &SignupPaths) -> SignupResult<PathBuf> {
    paths.ensure_directories()?;

    let path = log_file(paths, chrono::Local::now().date_naive());
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .map_err(|e| SignupError::Io(format!("Failed to open log file: {}", e)))?;

    let pruned = prune_logs(&paths.log_dir(), KEEP_LOG_FILES)?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_target(true)
                .with_writer(Mutex::new(file))
                .with_ansi(false),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into()))
        .try_init()
        .map_err(|e| SignupError::Config(format!("Failed to install logger: {}", e)))?;

    if pruned > 0 {
        tracing::debug!(pruned, "removed old log files");
    }
    Ok(path)
}
