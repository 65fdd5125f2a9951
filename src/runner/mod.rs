//! Bootstrap orchestration.
//!
//! [`Bootstrap`] wires the pieces together in a single linear sequence:
//! requirements, working directory, SDK checks, asset pull, generator.
//! Every collaborator is passed in, so the whole sequence runs in tests
//! against a [`ScriptedRunner`](crate::shell::ScriptedRunner),
//! [`FixedWorkingDir`](crate::workdir::FixedWorkingDir) and
//! [`MockUI`](crate::ui::MockUI).

pub mod bootstrap;

pub use bootstrap::{Bootstrap, BootstrapOptions, BootstrapReport};
