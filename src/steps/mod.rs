//! External bootstrap steps.
//!
//! - [`assets`] - Pull large binary assets
//! - [`generator`] - Run the vendored build-file generator
//! - [`executor`] - Shared execution and failure-policy handling
//!
//! # Example
//!
//! ```
//! use hazel_setup::config::AssetConfig;
//! use hazel_setup::shell::ScriptedRunner;
//! use hazel_setup::steps::{sync_assets, StepContext, StepStatus};
//! use hazel_setup::ui::MockUI;
//! use std::path::Path;
//!
//! let mut runner = ScriptedRunner::new();
//! let mut ui = MockUI::new();
//! let mut ctx = StepContext { runner: &mut runner, ui: &mut ui, dry_run: true };
//!
//! let result = sync_assets(&AssetConfig::default(), Path::new("/work"), &mut ctx).unwrap();
//! assert_eq!(result.status, StepStatus::Skipped);
//! ```

pub mod assets;
pub mod executor;
pub mod generator;

pub use assets::{asset_invocation, sync_assets};
pub use executor::{execute_step, StepContext, StepResult, StepStatus};
pub use generator::{generate_build_files, generator_invocation, generator_path, GENERATOR_BANNER};
