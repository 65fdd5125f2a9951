//! Non-interactive UI for CI/headless environments.

use crate::error::Result;

use super::theme::SetupTheme;
use super::{OutputMode, Prompt, SpinnerHandle, UserInterface};

/// UI implementation for non-interactive mode.
///
/// Spinners print their start line once and their final line when done.
/// Prompts take their default answer.
pub struct NonInteractiveUI {
    mode: OutputMode,
}

impl NonInteractiveUI {
    /// Create a new non-interactive UI.
    pub fn new(mode: OutputMode) -> Self {
        Self { mode }
    }
}

impl UserInterface for NonInteractiveUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", msg);
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("✓ {}", msg);
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            eprintln!("⚠ {}", msg);
        }
    }

    fn error(&mut self, msg: &str) {
        eprintln!("✗ {}", msg);
    }

    fn show_hint(&mut self, hint: &str) {
        if self.mode.shows_status() {
            println!("  {}", hint);
        }
    }

    fn confirm(&mut self, prompt: &Prompt) -> Result<bool> {
        Ok(prompt.default)
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        if self.mode.shows_spinners() {
            println!("  {}", message);
        }
        Box::new(NoopSpinner { mode: self.mode })
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_status() {
            println!("\n{}\n", title);
        }
    }

    fn is_interactive(&self) -> bool {
        false
    }
}

/// Spinner that only prints its final line (for non-interactive mode).
struct NoopSpinner {
    mode: OutputMode,
}

impl SpinnerHandle for NoopSpinner {
    fn set_message(&mut self, _msg: &str) {}

    fn finish_success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", SetupTheme::plain().format_success(msg));
        }
    }

    fn finish_error(&mut self, msg: &str) {
        eprintln!("{}", SetupTheme::plain().format_error(msg));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_interactive_is_not_interactive() {
        let ui = NonInteractiveUI::new(OutputMode::Normal);
        assert!(!ui.is_interactive());
    }

    #[test]
    fn confirm_takes_the_default() {
        let mut ui = NonInteractiveUI::new(OutputMode::Quiet);
        let yes = Prompt::confirm("install_git", "Install git?", true);
        let no = Prompt::confirm("install_git", "Install git?", false);
        assert!(ui.confirm(&yes).unwrap());
        assert!(!ui.confirm(&no).unwrap());
    }

    #[test]
    fn spinner_has_no_progress_bar() {
        let mut ui = NonInteractiveUI::new(OutputMode::Silent);
        let spinner = ui.start_spinner("Pulling assets");
        assert!(spinner.progress_bar().is_none());
    }
}
