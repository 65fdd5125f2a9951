//! External process execution.
//!
//! Every external tool the bootstrap talks to is reached through a
//! [`ProcessInvocation`] handed to a [`CommandRunner`]. Programs are spawned
//! directly (no intermediate shell), so arguments reach them verbatim.

use crate::error::{Result, SetupError};
use std::ffi::OsString;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

/// Description of an external command, built right before it runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessInvocation {
    /// Program to execute (bare name resolved on PATH, or a path).
    pub program: PathBuf,

    /// Arguments passed verbatim.
    pub args: Vec<String>,

    /// Working directory (None inherits the process working directory).
    pub cwd: Option<PathBuf>,
}

impl ProcessInvocation {
    /// Create an invocation with no arguments.
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            cwd: None,
        }
    }

    /// Build from a program-plus-arguments vector. Returns None when empty.
    pub fn from_argv(argv: &[String]) -> Option<Self> {
        let (program, args) = argv.split_first()?;
        Some(Self::new(program).args(args.iter().cloned()))
    }

    /// Append one argument.
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Append several arguments.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Set the working directory.
    pub fn current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cwd = Some(dir.into());
        self
    }

    /// Human-readable command line, used in messages and errors.
    pub fn display(&self) -> String {
        let mut line = self.program.display().to_string();
        for arg in &self.args {
            line.push(' ');
            if arg.is_empty() || arg.contains(char::is_whitespace) {
                line.push_str(&format!("\"{}\"", arg));
            } else {
                line.push_str(arg);
            }
        }
        line
    }

    fn to_command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(self.args.iter().map(OsString::from));
        if let Some(cwd) = &self.cwd {
            cmd.current_dir(cwd);
        }
        cmd
    }

    fn spawn_error(&self, err: std::io::Error) -> SetupError {
        if err.kind() == std::io::ErrorKind::NotFound {
            SetupError::CommandNotFound {
                command: self.display(),
            }
        } else {
            SetupError::Io(err)
        }
    }
}

/// Result of a finished external process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationOutcome {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Standard output.
    pub stdout: String,

    /// Standard error.
    pub stderr: String,

    /// Execution duration.
    pub duration: Duration,

    /// Whether the process exited with code 0.
    pub success: bool,
}

impl InvocationOutcome {
    /// Create a success outcome.
    pub fn success(stdout: String, stderr: String, duration: Duration) -> Self {
        Self {
            exit_code: Some(0),
            stdout,
            stderr,
            duration,
            success: true,
        }
    }

    /// Create a failure outcome.
    pub fn failure(
        exit_code: Option<i32>,
        stdout: String,
        stderr: String,
        duration: Duration,
    ) -> Self {
        Self {
            exit_code,
            stdout,
            stderr,
            duration,
            success: false,
        }
    }

    fn from_output(output: &Output, duration: Duration) -> Self {
        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();
        if output.status.success() {
            Self::success(stdout, stderr, duration)
        } else {
            Self::failure(output.status.code(), stdout, stderr, duration)
        }
    }

    /// Last non-empty line of stderr, falling back to stdout.
    pub fn last_error_line(&self) -> Option<&str> {
        self.stderr
            .lines()
            .rev()
            .chain(self.stdout.lines().rev())
            .map(str::trim)
            .find(|l| !l.is_empty())
    }
}

/// Output line from a streaming execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputLine {
    Stdout(String),
    Stderr(String),
}

impl OutputLine {
    /// The line text regardless of stream.
    pub fn text(&self) -> &str {
        match self {
            Self::Stdout(s) | Self::Stderr(s) => s,
        }
    }
}

/// Callback for streaming output.
pub type OutputCallback = Box<dyn Fn(OutputLine) + Send>;

/// Seam between the bootstrap sequence and the operating system.
///
/// Production code uses [`SystemRunner`]; tests substitute
/// [`ScriptedRunner`](super::ScriptedRunner).
pub trait CommandRunner {
    /// Run to completion, capturing stdout and stderr.
    fn run(&mut self, invocation: &ProcessInvocation) -> Result<InvocationOutcome>;

    /// Run to completion, forwarding each output line to `callback` as it
    /// arrives. Output is captured as well.
    fn run_streaming(
        &mut self,
        invocation: &ProcessInvocation,
        callback: OutputCallback,
    ) -> Result<InvocationOutcome> {
        let outcome = self.run(invocation)?;
        for line in outcome.stdout.lines() {
            callback(OutputLine::Stdout(line.to_string()));
        }
        for line in outcome.stderr.lines() {
            callback(OutputLine::Stderr(line.to_string()));
        }
        Ok(outcome)
    }
}

/// Runs invocations as real child processes.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&mut self, invocation: &ProcessInvocation) -> Result<InvocationOutcome> {
        execute(invocation)
    }

    fn run_streaming(
        &mut self,
        invocation: &ProcessInvocation,
        callback: OutputCallback,
    ) -> Result<InvocationOutcome> {
        execute_streaming(invocation, callback)
    }
}

/// Execute an invocation and capture its output.
pub fn execute(invocation: &ProcessInvocation) -> Result<InvocationOutcome> {
    let start = Instant::now();
    tracing::debug!("Executing: {}", invocation.display());

    let output = invocation
        .to_command()
        .stdin(Stdio::null())
        .output()
        .map_err(|e| invocation.spawn_error(e))?;

    Ok(InvocationOutcome::from_output(&output, start.elapsed()))
}

/// Execute an invocation with streaming output.
pub fn execute_streaming(
    invocation: &ProcessInvocation,
    callback: OutputCallback,
) -> Result<InvocationOutcome> {
    let start = Instant::now();
    tracing::debug!("Executing (streaming): {}", invocation.display());

    let mut cmd = invocation.to_command();
    cmd.stdin(Stdio::null());
    cmd.stdout(Stdio::piped());
    cmd.stderr(Stdio::piped());

    let mut child = cmd.spawn().map_err(|e| invocation.spawn_error(e))?;

    let stdout = child
        .stdout
        .take()
        .ok_or_else(|| anyhow::anyhow!("stdout pipe unavailable"))?;
    let stderr = child
        .stderr
        .take()
        .ok_or_else(|| anyhow::anyhow!("stderr pipe unavailable"))?;

    let (tx, rx) = mpsc::channel();
    let tx_stdout = tx.clone();
    let tx_stderr = tx;

    let stdout_handle = thread::spawn(move || {
        let reader = BufReader::new(stdout);
        let mut output = String::new();
        for line in reader.lines().map_while(std::result::Result::ok) {
            output.push_str(&line);
            output.push('\n');
            let _ = tx_stdout.send(OutputLine::Stdout(line));
        }
        output
    });

    let stderr_handle = thread::spawn(move || {
        let reader = BufReader::new(stderr);
        let mut output = String::new();
        for line in reader.lines().map_while(std::result::Result::ok) {
            output.push_str(&line);
            output.push('\n');
            let _ = tx_stderr.send(OutputLine::Stderr(line));
        }
        output
    });

    for line in rx {
        callback(line);
    }

    let stdout_output = stdout_handle.join().unwrap_or_default();
    let stderr_output = stderr_handle.join().unwrap_or_default();

    let status = child.wait()?;
    let duration = start.elapsed();

    if status.success() {
        Ok(InvocationOutcome::success(
            stdout_output,
            stderr_output,
            duration,
        ))
    } else {
        Ok(InvocationOutcome::failure(
            status.code(),
            stdout_output,
            stderr_output,
            duration,
        ))
    }
}

/// Run an invocation and report only whether it exited successfully.
///
/// Spawn failures count as failure.
pub fn execute_check(runner: &mut dyn CommandRunner, invocation: &ProcessInvocation) -> bool {
    runner
        .run(invocation)
        .map(|outcome| outcome.success)
        .unwrap_or(false)
}

/// Resolve `path` against `base` unless it is absolute.
pub fn resolve_against(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}
