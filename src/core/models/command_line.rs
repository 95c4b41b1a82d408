//! The build command to run when a watched path matches HEAD

use thiserror::Error;

/// Errors from splitting a command string
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandLineError {
    /// Nothing but whitespace
    #[error("command is empty")]
    Empty,

    /// Unbalanced quotes or a dangling escape
    #[error("cannot split command {0:?}: unbalanced quotes")]
    Unbalanced(String),
}

/// A program plus its arguments
///
/// Parsed with shell word rules, so `make "build all"` yields the single
/// argument `build all`. No other shell features (pipes, globbing,
/// variable expansion) are interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    raw: String,
    program: String,
    args: Vec<String>,
}

impl CommandLine {
    /// Split a command string into program and arguments
    pub fn parse(raw: &str) -> Result<Self, CommandLineError> {
        let mut words = shell_words::split(raw)
            .map_err(|_| CommandLineError::Unbalanced(raw.to_string()))?
            .into_iter();
        let program = words.next().ok_or(CommandLineError::Empty)?;

        Ok(Self {
            raw: raw.to_string(),
            program,
            args: words.collect(),
        })
    }

    /// The first word, looked up on the search path
    #[must_use]
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Everything after the program
    #[must_use]
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// The command as the user wrote it
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }
}

impl std::fmt::Display for CommandLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.raw)
    }
}
