//! User-facing terminal output.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for interactive terminal usage
//! - [`NonInteractiveUI`] for CI/headless environments
//! - [`MockUI`] for tests
//!
//! # Example
//!
//! ```
//! use hazel_setup::ui::{create_ui, OutputMode};
//!
//! // Use non-interactive mode for testability
//! let mut ui = create_ui(false, OutputMode::Quiet);
//! ui.show_header("Hazel setup");
//! ui.success("Setup complete!");
//! ```

pub mod mock;
pub mod non_interactive;
pub mod output;
pub mod prompts;
pub mod spinner;
pub mod terminal;
pub mod theme;

pub use mock::{MockSpinner, MockUI};
pub use non_interactive::NonInteractiveUI;
pub use output::{format_duration, OutputMode};
pub use prompts::prompt_confirm;
pub use spinner::{live_output_callback, ProgressSpinner};
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, SetupTheme};

use indicatif::ProgressBar;

use crate::error::Result;

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Display a message to the user.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);

    /// Display a contextual hint.
    fn show_hint(&mut self, hint: &str);

    /// Ask a yes/no question.
    fn confirm(&mut self, prompt: &Prompt) -> Result<bool>;

    /// Start a spinner for an operation.
    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle>;

    /// Show a header/banner.
    fn show_header(&mut self, title: &str);

    /// Check if running in interactive mode.
    fn is_interactive(&self) -> bool;
}

/// Handle for controlling a spinner.
pub trait SpinnerHandle {
    /// Update the spinner message.
    fn set_message(&mut self, msg: &str);

    /// Mark the operation as successful.
    fn finish_success(&mut self, msg: &str);

    /// Mark the operation as failed.
    fn finish_error(&mut self, msg: &str);

    /// Underlying progress bar, for live output streaming.
    fn progress_bar(&self) -> Option<ProgressBar> {
        None
    }
}

/// A yes/no question to show to the user.
#[derive(Debug, Clone)]
pub struct Prompt {
    /// Unique key for the prompt (used for lookup in tests).
    pub key: String,
    /// The question to display.
    pub question: String,
    /// Answer used when the user just presses enter.
    pub default: bool,
}

impl Prompt {
    /// Create a confirmation prompt.
    pub fn confirm(key: impl Into<String>, question: impl Into<String>, default: bool) -> Self {
        Self {
            key: key.into(),
            question: question.into(),
            default,
        }
    }
}
