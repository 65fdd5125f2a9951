//! Scripted command runner for testing.
//!
//! `ScriptedRunner` implements [`CommandRunner`] without spawning anything.
//! It records every invocation and answers with outcomes configured per
//! program; unconfigured programs succeed with empty output.
//!
//! # Example
//!
//! ```
//! use hazel_setup::shell::{CommandRunner, ProcessInvocation, ScriptedRunner};
//!
//! let mut runner = ScriptedRunner::new();
//! runner.fail("git", 2);
//!
//! let outcome = runner.run(&ProcessInvocation::new("git").args(["lfs", "pull"])).unwrap();
//! assert!(!outcome.success);
//! assert_eq!(runner.invocations().len(), 1);
//! ```

use std::collections::{HashMap, VecDeque};
use std::path::PathBuf;
use std::time::Duration;

use crate::error::{Result, SetupError};

use super::command::{CommandRunner, InvocationOutcome, ProcessInvocation};

#[derive(Debug, Clone)]
enum Scripted {
    Outcome(InvocationOutcome),
    NotFound,
}

/// Command runner that replays configured outcomes.
#[derive(Debug, Default)]
pub struct ScriptedRunner {
    responses: HashMap<PathBuf, Scripted>,
    queues: HashMap<PathBuf, VecDeque<Scripted>>,
    invocations: Vec<ProcessInvocation>,
}

impl ScriptedRunner {
    /// Create a runner where every program succeeds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer every invocation of `program` with `outcome`.
    pub fn set_outcome(&mut self, program: impl Into<PathBuf>, outcome: InvocationOutcome) {
        self.responses
            .insert(program.into(), Scripted::Outcome(outcome));
    }

    /// Make `program` exit with `code`.
    pub fn fail(&mut self, program: impl Into<PathBuf>, code: i32) {
        self.set_outcome(
            program,
            InvocationOutcome::failure(Some(code), String::new(), String::new(), Duration::ZERO),
        );
    }

    /// Make `program` impossible to start.
    pub fn set_missing(&mut self, program: impl Into<PathBuf>) {
        self.responses.insert(program.into(), Scripted::NotFound);
    }

    /// Queue outcomes for successive invocations of `program`.
    ///
    /// Once the queue is exhausted, falls back to `set_outcome` or success.
    pub fn queue_outcomes(&mut self, program: impl Into<PathBuf>, outcomes: Vec<InvocationOutcome>) {
        let queue = outcomes.into_iter().map(Scripted::Outcome).collect();
        self.queues.insert(program.into(), queue);
    }

    /// Every invocation received, in order.
    pub fn invocations(&self) -> &[ProcessInvocation] {
        &self.invocations
    }

    /// Invocations of one program, in order.
    pub fn invocations_of(&self, program: impl Into<PathBuf>) -> Vec<&ProcessInvocation> {
        let program = program.into();
        self.invocations
            .iter()
            .filter(|inv| inv.program == program)
            .collect()
    }

    /// Command lines received, in order.
    pub fn command_lines(&self) -> Vec<String> {
        self.invocations.iter().map(|inv| inv.display()).collect()
    }
}

impl CommandRunner for ScriptedRunner {
    fn run(&mut self, invocation: &ProcessInvocation) -> Result<InvocationOutcome> {
        self.invocations.push(invocation.clone());

        let queued = self
            .queues
            .get_mut(&invocation.program)
            .and_then(|q| q.pop_front());
        let scripted = queued.or_else(|| self.responses.get(&invocation.program).cloned());

        match scripted {
            Some(Scripted::Outcome(outcome)) => Ok(outcome),
            Some(Scripted::NotFound) => Err(SetupError::CommandNotFound {
                command: invocation.display(),
            }),
            None => Ok(InvocationOutcome::success(
                String::new(),
                String::new(),
                Duration::ZERO,
            )),
        }
    }
}
