//! Configuration management module
//!
//! Handles loading and validation of the optional settings file. The
//! journal runs with defaults when no file is present.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use log::LevelFilter;
use serde::Deserialize;
use crate::{JournalError, Result, APP_NAME, CONFIG_FILE, LOG_FILE};

/// Which screens the journal starts with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppVariant {
    /// Exercise menu at the base, counter pushed on selection
    #[default]
    Journal,
    /// A single counter screen; Select resets in place
    Counter,
}

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Startup layout
    pub variant: AppVariant,
    /// Redraw interval of the event loop, in milliseconds
    pub tick_rate_ms: u64,
    /// Log level name (off, error, warn, info, debug, trace)
    pub log_level: String,
    /// Log file override; defaults to the data directory
    pub log_file: Option<PathBuf>,
}

const MIN_TICK_RATE_MS: u64 = 16;
const MAX_TICK_RATE_MS: u64 = 1000;

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            variant: AppVariant::Journal,
            tick_rate_ms: 250,
            log_level: "info".to_string(),
            log_file: None,
        }
    }
}

impl AppConfig {
    /// Create a configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the startup layout
    pub fn with_variant(mut self, variant: AppVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Set the redraw interval
    pub fn with_tick_rate_ms(mut self, tick_rate_ms: u64) -> Self {
        self.tick_rate_ms = tick_rate_ms;
        self
    }

    /// Set the log level name
    pub fn with_log_level(mut self, level: &str) -> Self {
        self.log_level = level.to_string();
        self
    }

    /// Send log output to a specific file
    pub fn with_log_file(mut self, path: PathBuf) -> Self {
        self.log_file = Some(path);
        self
    }

    /// Redraw interval as a duration
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }

    /// Parsed log level
    pub fn log_level_filter(&self) -> Result<LevelFilter> {
        self.log_level.parse::<LevelFilter>().map_err(|_| {
            JournalError::ConfigError(format!("Unknown log level: {}", self.log_level))
        })
    }

    /// Validate the configuration parameters
    pub fn validate(&self) -> Result<()> {
        if self.tick_rate_ms < MIN_TICK_RATE_MS || self.tick_rate_ms > MAX_TICK_RATE_MS {
            return Err(JournalError::ConfigError(format!(
                "Tick rate must be between {} and {} ms (got {})",
                MIN_TICK_RATE_MS, MAX_TICK_RATE_MS, self.tick_rate_ms
            )));
        }

        self.log_level_filter()?;

        if let Some(path) = &self.log_file {
            if path.as_os_str().is_empty() {
                return Err(JournalError::ConfigError(
                    "Log file path must not be empty".to_string(),
                ));
            }
        }

        Ok(())
    }

    /// Load configuration from the standard config file location
    /// Returns default configuration if file doesn't exist
    pub fn load() -> Result<Self> {
        let config_path = Self::config_file_path()?;
        Self::load_from(&config_path)
    }

    /// Load configuration from a specific file
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(config_path).map_err(|e| {
            JournalError::ConfigError(format!(
                "Failed to read config file {}: {}",
                config_path.display(),
                e
            ))
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| {
            JournalError::ConfigError(format!(
                "Failed to parse config file {}: {}",
                config_path.display(),
                e
            ))
        })?;

        config.validate()?;

        Ok(config)
    }

    /// Get the standard configuration file path
    /// Uses $CONFIG_HOME/workout-journal/workout-journal.toml
    pub fn config_file_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            JournalError::ConfigError("Unable to determine config directory".to_string())
        })?;

        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }

    /// Where log output goes: the configured file, or
    /// $DATA_HOME/workout-journal/workout-journal.log
    pub fn log_file_path(&self) -> Result<PathBuf> {
        if let Some(path) = &self.log_file {
            return Ok(path.clone());
        }

        let data_dir = dirs::data_dir().ok_or_else(|| {
            JournalError::ConfigError("Unable to determine data directory".to_string())
        })?;

        Ok(data_dir.join(APP_NAME).join(LOG_FILE))
    }
}
