//! Configuration file discovery and loading.
//!
//! The config file is optional. When `--config` is given the file must
//! exist; otherwise `setup.yml` next to the start directory is used if
//! present, and the built-in defaults apply when it is not.

use crate::config::schema::SetupConfig;
use crate::error::{Result, SetupError};
use std::fs;
use std::path::{Path, PathBuf};

/// Default config file name, looked up in the start directory.
pub const CONFIG_FILE_NAME: &str = "setup.yml";

/// Find the config file to load.
///
/// Returns `Ok(None)` when no explicit path is given and no default file
/// exists.
pub fn find_config_file(start_dir: &Path, explicit: Option<&Path>) -> Result<Option<PathBuf>> {
    if let Some(path) = explicit {
        let path = if path.is_absolute() {
            path.to_path_buf()
        } else {
            start_dir.join(path)
        };
        if !path.is_file() {
            return Err(SetupError::ConfigNotFound { path });
        }
        return Ok(Some(path));
    }

    let default = start_dir.join(CONFIG_FILE_NAME);
    Ok(default.is_file().then_some(default))
}

/// Load a config file from disk.
pub fn load_config_file(path: &Path) -> Result<SetupConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            SetupError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            SetupError::Io(e)
        }
    })?;

    parse_config(&content, path)
}

/// Parse YAML content into SetupConfig.
///
/// # Arguments
///
/// * `content` - The YAML content to parse
/// * `source_path` - Path for error reporting
pub fn parse_config(content: &str, source_path: &Path) -> Result<SetupConfig> {
    if content.trim().is_empty() {
        return Ok(SetupConfig::default());
    }
    serde_yaml::from_str(content).map_err(|e| SetupError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Discover and load the config for a start directory.
///
/// Values are not validated here; command-line overrides still apply on top,
/// so callers validate the final config with [`super::validate`].
pub fn load_config(start_dir: &Path, explicit: Option<&Path>) -> Result<SetupConfig> {
    let config = match find_config_file(start_dir, explicit)? {
        Some(path) => {
            tracing::debug!("Loading config from {}", path.display());
            load_config_file(&path)?
        }
        None => {
            tracing::debug!("No config file found, using defaults");
            SetupConfig::default()
        }
    };
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_default_file_uses_defaults() {
        let temp = TempDir::new().unwrap();
        let config = load_config(temp.path(), None).unwrap();
        assert_eq!(config, SetupConfig::default());
    }

    #[test]
    fn default_file_is_discovered() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(CONFIG_FILE_NAME),
            "generator:\n  toolchain: vs2019\n",
        )
        .unwrap();

        let config = load_config(temp.path(), None).unwrap();
        assert_eq!(config.generator.toolchain, "vs2019");
    }

    #[test]
    fn explicit_file_must_exist() {
        let temp = TempDir::new().unwrap();
        let result = load_config(temp.path(), Some(Path::new("nope.yml")));
        assert!(matches!(result, Err(SetupError::ConfigNotFound { .. })));
    }

    #[test]
    fn explicit_relative_path_resolves_against_start_dir() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("ci.yml"), "assets:\n  on_failure: advisory\n").unwrap();

        let found = find_config_file(temp.path(), Some(Path::new("ci.yml"))).unwrap();
        assert_eq!(found, Some(temp.path().join("ci.yml")));
    }

    #[test]
    fn load_config_file_returns_not_found_error() {
        let result = load_config_file(Path::new("/nonexistent/setup.yml"));
        assert!(matches!(result, Err(SetupError::ConfigNotFound { .. })));
    }

    #[test]
    fn parse_config_returns_parse_error_for_invalid_yaml() {
        let result = parse_config("invalid: yaml: content: [", Path::new("setup.yml"));
        assert!(matches!(result, Err(SetupError::ConfigParseError { .. })));
    }

    #[test]
    fn parse_config_accepts_empty_file() {
        let config = parse_config("\n  \n", Path::new("setup.yml")).unwrap();
        assert_eq!(config, SetupConfig::default());
    }

    #[test]
    fn invalid_values_load_and_fail_validation() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "generator:\n  toolchain: \"\"\n").unwrap();

        let config = load_config(temp.path(), None).unwrap();
        let err = crate::config::validate(&config).unwrap_err();
        assert!(matches!(err, SetupError::ConfigValidationError { .. }));
        assert!(err.to_string().starts_with("Invalid configuration"));
        assert!(err.to_string().contains("toolchain"));
    }
}
