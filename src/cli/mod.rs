//! Command-line interface for hazel-setup.
//!
//! - [`args`] - Argument definitions using clap derive macros

pub mod args;

pub use args::Cli;
