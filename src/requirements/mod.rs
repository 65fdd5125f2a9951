//! Host tool requirement checking.
//!
//! Before anything else runs, the bootstrap confirms that the tools it
//! shells out to are installed, offering to install missing ones through
//! their configured install command.
//!
//! # Modules
//!
//! - [`checker`] - Runs check commands and caches the results
//! - [`installer`] - Installs missing requirements and re-checks them
//! - [`status`] - Requirement status types

pub mod checker;
pub mod installer;
pub mod status;

pub use checker::RequirementChecker;
pub use installer::ensure_requirements;
pub use status::{RequirementReport, RequirementStatus};
