//! External step execution.
//!
//! Runs one [`ProcessInvocation`] under a spinner, streams its output into
//! the spinner, and applies the step's [`FailurePolicy`] to the outcome.

use crate::config::FailurePolicy;
use crate::error::{Result, SetupError};
use crate::shell::{CommandRunner, InvocationOutcome, OutputCallback, OutputLine, ProcessInvocation};
use crate::ui::spinner::live_output_callback;
use crate::ui::{format_duration, OutputMode, UserInterface};

/// Status of a finished step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    /// Command ran and exited zero.
    Completed,

    /// Command failed under an advisory policy.
    Failed,

    /// Command was not run (dry run).
    Skipped,
}

/// Result of executing a step.
#[derive(Debug, Clone)]
pub struct StepResult {
    /// Step name.
    pub name: String,

    /// Command line that was (or would have been) run.
    pub command: String,

    /// How the step ended.
    pub status: StepStatus,

    /// Process outcome (None if the process never ran).
    pub outcome: Option<InvocationOutcome>,

    /// Error message (if failed).
    pub error: Option<String>,
}

impl StepResult {
    fn completed(name: &str, invocation: &ProcessInvocation, outcome: InvocationOutcome) -> Self {
        Self {
            name: name.to_string(),
            command: invocation.display(),
            status: StepStatus::Completed,
            outcome: Some(outcome),
            error: None,
        }
    }

    fn skipped(name: &str, invocation: &ProcessInvocation) -> Self {
        Self {
            name: name.to_string(),
            command: invocation.display(),
            status: StepStatus::Skipped,
            outcome: None,
            error: None,
        }
    }

    fn failed(
        name: &str,
        invocation: &ProcessInvocation,
        outcome: Option<InvocationOutcome>,
        error: &SetupError,
    ) -> Self {
        Self {
            name: name.to_string(),
            command: invocation.display(),
            status: StepStatus::Failed,
            outcome,
            error: Some(error.to_string()),
        }
    }

    /// Whether the step ran and succeeded.
    pub fn succeeded(&self) -> bool {
        self.status == StepStatus::Completed
    }
}

/// Shared state for running external steps.
pub struct StepContext<'a> {
    /// Runs the external processes.
    pub runner: &'a mut dyn CommandRunner,
    /// Receives progress and outcome messages.
    pub ui: &'a mut dyn UserInterface,
    /// Print invocations instead of running them.
    pub dry_run: bool,
}

/// Run one external step.
///
/// A non-zero exit becomes `CommandFailed` and an unstartable program
/// `CommandNotFound`. Under [`FailurePolicy::Fatal`] those errors are
/// returned; under [`FailurePolicy::Advisory`] they are reported as a
/// warning and the step comes back as failed.
pub fn execute_step(
    name: &str,
    label: &str,
    invocation: &ProcessInvocation,
    policy: FailurePolicy,
    ctx: &mut StepContext<'_>,
) -> Result<StepResult> {
    if ctx.dry_run {
        ctx.ui.message(&format!("Would run: {}", invocation.display()));
        return Ok(StepResult::skipped(name, invocation));
    }

    tracing::info!(step = name, "Running {}", invocation.display());
    let mut spinner = ctx.ui.start_spinner(label);
    let callback = output_callback(spinner.progress_bar(), label, ctx.ui.output_mode());

    let result = match callback {
        Some(callback) => ctx.runner.run_streaming(invocation, callback),
        None => ctx.runner.run(invocation),
    };

    let (outcome, error) = match result {
        Ok(outcome) if outcome.success => {
            spinner.finish_success(&format!(
                "{} ({})",
                name,
                format_duration(outcome.duration)
            ));
            return Ok(StepResult::completed(name, invocation, outcome));
        }
        Ok(outcome) => {
            let error = SetupError::CommandFailed {
                command: invocation.display(),
                code: outcome.exit_code,
            };
            (Some(outcome), error)
        }
        Err(error @ SetupError::CommandNotFound { .. }) => (None, error),
        Err(error) => {
            spinner.finish_error(name);
            return Err(error);
        }
    };

    spinner.finish_error(&format!("{} failed", name));
    if let Some(line) = outcome.as_ref().and_then(|o| o.last_error_line()) {
        ctx.ui.show_hint(line);
    }

    match policy {
        FailurePolicy::Fatal => Err(error),
        FailurePolicy::Advisory => {
            tracing::warn!(step = name, "{}", error);
            ctx.ui.warning(&error.to_string());
            Ok(StepResult::failed(name, invocation, outcome, &error))
        }
    }
}

/// Pick how child output is shown while a step runs.
///
/// Behind a live spinner the output scrolls under the spinner line. Without
/// one (headless runs) it passes straight through to stdout so CI logs keep
/// the tools' own output. Quiet and silent modes drop it.
fn output_callback(
    bar: Option<indicatif::ProgressBar>,
    label: &str,
    mode: OutputMode,
) -> Option<OutputCallback> {
    match (bar, mode) {
        (Some(bar), OutputMode::Verbose | OutputMode::Normal) => Some(live_output_callback(
            bar,
            label.to_string(),
            if mode == OutputMode::Verbose { 3 } else { 2 },
            mode == OutputMode::Verbose,
        )),
        (None, OutputMode::Verbose | OutputMode::Normal) => {
            Some(Box::new(|line: OutputLine| {
                let text = line.text().trim_end();
                if !text.is_empty() {
                    println!("    {text}");
                }
            }))
        }
        _ => None,
    }
}
