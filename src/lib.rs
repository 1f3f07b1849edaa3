//! Workout Journal
//!
//! A small rep-counting journal rendered in a watch-sized region of the
//! terminal: an exercise menu and a counter driven by three buttons.

use std::fmt;

pub mod app;
pub mod config;
pub mod logging;
pub mod models;

// Common error types
#[derive(Debug)]
pub enum JournalError {
    /// I/O operation failed
    IoError(std::io::Error),
    /// Configuration validation or parsing error
    ConfigError(String),
    /// TUI rendering or interaction error
    TuiError(String),
    /// Logger could not be installed
    LoggingError(String),
}

impl fmt::Display for JournalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JournalError::IoError(err) => write!(f, "I/O error: {}", err),
            JournalError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            JournalError::TuiError(msg) => write!(f, "TUI error: {}", msg),
            JournalError::LoggingError(msg) => write!(f, "Logging error: {}", msg),
        }
    }
}

impl std::error::Error for JournalError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            JournalError::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for JournalError {
    fn from(err: std::io::Error) -> Self {
        JournalError::IoError(err)
    }
}

impl From<log::SetLoggerError> for JournalError {
    fn from(err: log::SetLoggerError) -> Self {
        JournalError::LoggingError(err.to_string())
    }
}

/// Result type alias for journal operations
pub type Result<T> = std::result::Result<T, JournalError>;

/// Error handling utilities
pub mod error {
    use super::JournalError;

    /// Convert error to a message suitable for printing after the terminal
    /// has been restored
    pub fn user_friendly_message(error: &JournalError) -> String {
        match error {
            JournalError::ConfigError(msg) => {
                format!("Configuration error: {}. Check your settings file.", msg)
            }
            JournalError::TuiError(_) => {
                "The terminal could not be driven. Make sure you are running in an interactive terminal."
                    .to_string()
            }
            JournalError::LoggingError(_) => {
                "Failed to set up logging. Check that the log file location is writable.".to_string()
            }
            JournalError::IoError(_) => error.to_string(),
        }
    }
}

// Common types and constants
pub const APP_NAME: &str = "workout-journal";
pub const CONFIG_FILE: &str = "workout-journal.toml";
pub const LOG_FILE: &str = "workout-journal.log";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_keeps_source() {
        let err: JournalError =
            std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed").into();
        assert!(std::error::Error::source(&err).is_some());
        assert!(err.to_string().starts_with("I/O error"));
    }

    #[test]
    fn test_user_friendly_config_message() {
        let msg = error::user_friendly_message(&JournalError::ConfigError("bad tick".into()));
        assert!(msg.contains("bad tick"));
        assert!(msg.contains("settings file"));
    }
}
