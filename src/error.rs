//! Error types for bootstrap operations.
//!
//! This module defines [`SetupError`], the error type used throughout the
//! crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Advisory outcomes (a missing SDK) are not errors; they are reported
//!   through the UI and the run continues
//! - Everything that stops the bootstrap is a `SetupError` variant
//! - Use `anyhow::Error` (via `SetupError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for bootstrap operations.
#[derive(Debug, Error)]
pub enum SetupError {
    /// An explicitly requested config file does not exist.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse the config file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// The project root the working directory should move to does not exist.
    #[error("Project root not found: {path}")]
    ProjectRootNotFound { path: PathBuf },

    /// An external program could not be started.
    #[error("Command not found: {command}")]
    CommandNotFound { command: String },

    /// An external program exited unsuccessfully.
    #[error("Command failed with {}: {command}", exit_description(.code))]
    CommandFailed { command: String, code: Option<i32> },

    /// A tool the bootstrap needs is missing and could not be installed.
    #[error("Missing requirement '{requirement}': {message}")]
    RequirementMissing {
        requirement: String,
        message: String,
    },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for bootstrap operations.
pub type Result<T> = std::result::Result<T, SetupError>;

fn exit_description(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {code}"),
        None => "no exit code (terminated by signal)".to_string(),
    }
}
