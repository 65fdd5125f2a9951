//! External process execution and platform detection.

pub mod command;
pub mod mock;
pub mod platform;

pub use command::{
    execute, execute_check, execute_streaming, resolve_against, CommandRunner, InvocationOutcome,
    OutputCallback, OutputLine, ProcessInvocation, SystemRunner,
};
pub use mock::ScriptedRunner;
pub use platform::{is_ci, with_exe_suffix};
