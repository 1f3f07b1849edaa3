//! Log setup
//!
//! The terminal belongs to the UI, so log records are piped to a file.

use std::fs::{self, OpenOptions};
use crate::{config::AppConfig, JournalError, Result};

/// Install the global logger according to the configuration
pub fn init(config: &AppConfig) -> Result<()> {
    let level = config.log_level_filter()?;
    let log_path = config.log_file_path()?;

    if let Some(parent) = log_path.parent() {
        fs::create_dir_all(parent)?;
    }

    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .map_err(|e| {
            JournalError::LoggingError(format!(
                "Failed to open log file {}: {}",
                log_path.display(),
                e
            ))
        })?;

    env_logger::Builder::new()
        .filter_level(level)
        .target(env_logger::Target::Pipe(Box::new(log_file)))
        .try_init()?;

    Ok(())
}
