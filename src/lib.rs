//! hazel-setup - Developer-machine bootstrap for the Hazel engine.
//!
//! Run once from a fresh checkout's `scripts/` directory, it confirms the
//! host tools it needs, moves to the project root, reports on the Vulkan SDK,
//! pulls large-file assets and generates the build files.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading, parsing, and validation
//! - [`error`] - Error types and result aliases
//! - [`requirements`] - Host tool checks and installation
//! - [`runner`] - Bootstrap sequence orchestration
//! - [`sdk`] - Graphics SDK presence probes
//! - [`shell`] - External process execution
//! - [`steps`] - Asset pull and build-file generation
//! - [`ui`] - Prompts, spinners, and terminal output
//! - [`workdir`] - Working-directory normalization
//!
//! # Example
//!
//! ```
//! use hazel_setup::config::SetupConfig;
//! use hazel_setup::steps::generator_invocation;
//! use std::path::Path;
//!
//! let config = SetupConfig::default();
//! let invocation = generator_invocation(&config.generator, Path::new("/work/hazel"));
//! assert_eq!(invocation.args, vec!["vs2022"]);
//! ```
//!
//! For end-to-end runs, see the integration tests.

pub mod cli;
pub mod config;
pub mod error;
pub mod requirements;
pub mod runner;
pub mod sdk;
pub mod shell;
pub mod steps;
pub mod ui;
pub mod workdir;

pub use error::{Result, SetupError};
