//! Configuration validation rules.
//!
//! Serde already rejects unknown keys and wrong types; these rules catch
//! values that parse but cannot produce a runnable invocation:
//! - Command vectors (requirement checks and installs) must name a program
//! - Requirement names must be unique
//! - The asset client and generator paths must not be empty
//! - The toolchain target must be a single non-empty argument

use crate::config::schema::SetupConfig;
use crate::error::{Result, SetupError};
use std::collections::HashSet;

/// Validation error with context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Rule identifier
    pub rule: String,
    /// Dotted path of the offending field
    pub field: String,
    /// Human-readable error message
    pub message: String,
}

impl ValidationError {
    fn new(rule: &str, field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            rule: rule.to_string(),
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Validate a configuration and return all errors.
///
/// Collects every error rather than stopping at the first one.
pub fn validate_config(config: &SetupConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    errors.extend(validate_requirements(config));
    errors.extend(validate_steps(config));

    errors
}

fn validate_requirements(config: &SetupConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for (i, req) in config.requirements.iter().enumerate() {
        let field = format!("requirements[{}]", i);

        if req.name.trim().is_empty() {
            errors.push(ValidationError::new(
                "empty-name",
                format!("{}.name", field),
                format!("{}.name must not be empty", field),
            ));
        } else if !seen.insert(req.name.as_str()) {
            errors.push(ValidationError::new(
                "duplicate-requirement",
                format!("{}.name", field),
                format!("Requirement '{}' is listed more than once", req.name),
            ));
        }

        if is_empty_command(&req.check) {
            errors.push(ValidationError::new(
                "empty-command",
                format!("{}.check", field),
                format!("Requirement '{}' has an empty check command", req.name),
            ));
        }

        if let Some(install) = &req.install {
            if is_empty_command(install) {
                errors.push(ValidationError::new(
                    "empty-command",
                    format!("{}.install", field),
                    format!("Requirement '{}' has an empty install command", req.name),
                ));
            }
        }
    }

    errors
}

fn validate_steps(config: &SetupConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if config.assets.program.trim().is_empty() {
        errors.push(ValidationError::new(
            "empty-command",
            "assets.program",
            "assets.program must not be empty",
        ));
    }

    if config.generator.executable.as_os_str().is_empty() {
        errors.push(ValidationError::new(
            "empty-command",
            "generator.executable",
            "generator.executable must not be empty",
        ));
    }

    let toolchain = &config.generator.toolchain;
    if toolchain.trim().is_empty() {
        errors.push(ValidationError::new(
            "empty-toolchain",
            "generator.toolchain",
            "generator.toolchain must not be empty",
        ));
    } else if toolchain.contains(char::is_whitespace) {
        errors.push(ValidationError::new(
            "toolchain-whitespace",
            "generator.toolchain",
            format!(
                "generator.toolchain '{}' must be a single argument without whitespace",
                toolchain
            ),
        ));
    }

    errors
}

fn is_empty_command(argv: &[String]) -> bool {
    argv.first().map_or(true, |program| program.trim().is_empty())
}

/// Validate a configuration, failing with all messages joined.
pub fn validate(config: &SetupConfig) -> Result<()> {
    let errors = validate_config(config);

    if errors.is_empty() {
        Ok(())
    } else {
        let messages: Vec<_> = errors.iter().map(|e| e.message.clone()).collect();
        Err(SetupError::ConfigValidationError {
            message: messages.join("; "),
        })
    }
}
