//! Configuration for the bootstrap sequence.
//!
//! Every input the sequence needs is an explicit field of [`SetupConfig`]
//! instead of an ambient lookup:
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Validation in [`validator`]
//!
//! # Example
//!
//! ```
//! use hazel_setup::config::{load_config, validate};
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! fs::write(temp.path().join("setup.yml"), "generator:\n  toolchain: vs2019\n").unwrap();
//!
//! let config = load_config(temp.path(), None).unwrap();
//! validate(&config).unwrap();
//! assert_eq!(config.generator.toolchain, "vs2019");
//! ```
//!
//! # Precedence
//!
//! 1. Built-in defaults
//! 2. Config file (`--config`, or `setup.yml` in the start directory)
//! 3. Command-line flags

pub mod loader;
pub mod schema;
pub mod validator;

pub use loader::{find_config_file, load_config, load_config_file, parse_config, CONFIG_FILE_NAME};
pub use schema::{
    AssetConfig, FailurePolicy, GeneratorConfig, ProjectConfig, RequirementConfig, SdkConfig,
    SetupConfig, SDK_ENV_VAR,
};
pub use validator::{validate, validate_config, ValidationError};
