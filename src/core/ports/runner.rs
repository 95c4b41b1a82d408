//! Subprocess port
//!
//! Defines how the evaluator finds and runs external programs (git and the
//! build command).

use std::path::{Path, PathBuf};

/// Captured result of a finished subprocess
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommandOutput {
    /// Whether the process exited successfully
    pub success: bool,
    /// Exit code, if the process was not killed by a signal
    pub code: Option<i32>,
    /// Combined stdout and stderr, in the order the process wrote them
    pub output: String,
}

impl CommandOutput {
    /// Human description of how the process ended
    #[must_use]
    pub fn status_text(&self) -> String {
        self.code
            .map_or_else(|| "terminated by signal".to_string(), |c| format!("exit status {c}"))
    }
}

/// Runs external programs
///
/// Implementations must inherit the caller's environment and working
/// directory and block until the process exits.
pub trait CommandRunner {
    /// Resolve a program name to an executable on the search path
    fn locate(&self, program: &str) -> Option<PathBuf>;

    /// Run a resolved program to completion and capture its output
    fn run(&self, program: &Path, args: &[String]) -> std::io::Result<CommandOutput>;
}
