//! Error types for herosearch.
//!
//! This module defines the top-level error using `thiserror`. Domain errors
//! live next to the code that raises them and compose into [`AppError`] via
//! `From`, so `main` can propagate everything with `?`.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level application error
//!   - [`ConfigError`] - Config file could not be located, read or parsed
//!   - [`LoggingError`] - Log file could not be created
//!   - `std::io::Error` - Terminal/TUI failures
//!
//! The state machines themselves never fail: every event is either applied
//! or ignored, so no error type exists for them.

use crate::config::ConfigError;
use crate::logging::LoggingError;
use thiserror::Error;

/// Top-level application error encompassing all failure modes.
///
/// All variants are fatal. A bad config file is reported before the
/// terminal enters raw mode; a terminal error triggers cleanup and exit.
///
/// # Examples
///
/// ```no_run
/// use herosearch::model::error::AppError;
/// use herosearch::config::{load_config_with_precedence, ConfigError};
///
/// fn run_app() -> Result<(), AppError> {
///     // ConfigError automatically converts to AppError via From
///     let _config = load_config_with_precedence(None)?;
///     Ok(())
/// }
/// ```
#[derive(Debug, Error)]
pub enum AppError {
    /// The configuration file exists but could not be used.
    ///
    /// A missing default config file is not an error; this only covers
    /// explicitly requested files and files with invalid TOML.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The log file could not be opened.
    #[error("Logging error: {0}")]
    Logging(#[from] LoggingError),

    /// Terminal or TUI rendering error.
    ///
    /// Raised by crossterm/ratatui for raw mode, alternate screen, event
    /// polling or drawing failures.
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::path::PathBuf;

    #[test]
    fn app_error_from_config_error() {
        let config_err = ConfigError::ReadError {
            path: PathBuf::from("/tmp/missing.toml"),
            reason: "permission denied".to_string(),
        };
        let app_err: AppError = config_err.into();
        let msg = app_err.to_string();
        assert!(msg.contains("Configuration error"));
        assert!(msg.contains("/tmp/missing.toml"));
    }

    #[test]
    fn app_error_from_logging_error() {
        let log_err = LoggingError::DirectoryCreation {
            path: PathBuf::from("/nonexistent/logs"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"),
        };
        let app_err: AppError = log_err.into();
        let msg = app_err.to_string();
        assert!(msg.contains("Logging error"));
        assert!(msg.contains("/nonexistent/logs"));
    }

    #[test]
    fn app_error_from_io_error() {
        let io_err = io::Error::new(io::ErrorKind::BrokenPipe, "pipe broken");
        let app_err: AppError = io_err.into();
        let msg = app_err.to_string();
        assert!(msg.contains("Terminal error"));
        assert!(msg.contains("pipe broken"));
    }
}
