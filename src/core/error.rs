//! Error types for configuration and evaluation

use std::path::PathBuf;

use thiserror::Error;

use super::models::CommandLineError;
use super::ports::FetchError;

/// Invalid or incomplete configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// `-cmd` missing or empty
    #[error("missing required flag -cmd")]
    MissingCommand,

    /// `-url` missing or empty
    #[error("missing required flag -url")]
    MissingUrl,

    /// `-urlPath` missing while a real URL is set
    #[error("missing required flag -urlPath (required unless -url none)")]
    MissingUrlPath,

    /// The command string could not be split
    #[error("invalid -cmd: {0}")]
    Command(#[from] CommandLineError),

    /// Config file could not be read
    #[error("cannot read config file {path}: {source}")]
    ReadFile {
        /// File that was requested
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Config file is not valid TOML for this tool
    #[error("invalid config file {path}: {source}")]
    ParseFile {
        /// File that was requested
        path: PathBuf,
        /// Underlying TOML error
        source: toml::de::Error,
    },
}

/// Fatal errors raised while evaluating a trigger
#[derive(Debug, Error)]
pub enum TriggerError {
    /// git is not on the search path
    #[error("git is not installed, please install git and try again")]
    GitNotFound,

    /// The build command's program is not on the search path
    #[error("cmd {program} is not installed, please install cmd and try again")]
    CommandNotFound {
        /// Program that failed to resolve
        program: String,
    },

    /// A subprocess could not be started
    #[error("cannot start {command}: {source}")]
    Spawn {
        /// Command line that was attempted
        command: String,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// A subprocess exited unsuccessfully
    #[error("{context} ({command}): {status}")]
    Subprocess {
        /// What the subprocess was for
        context: &'static str,
        /// Command line that ran
        command: String,
        /// How it ended
        status: String,
        /// Combined stdout and stderr
        output: String,
    },

    /// The download could not be started or was refused
    #[error("Error fetching url {url}: {source}")]
    Network {
        /// Requested URL
        url: String,
        /// Underlying fetch error
        source: FetchError,
    },

    /// The destination file could not be created or written
    #[error("Error writing file {}: {source}", path.display())]
    Filesystem {
        /// Destination path
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl TriggerError {
    /// Stable name for machine-readable output
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::GitNotFound | Self::CommandNotFound { .. } => "executable_not_found",
            Self::Spawn { .. } | Self::Subprocess { .. } => "subprocess",
            Self::Network { .. } => "network",
            Self::Filesystem { .. } => "filesystem",
        }
    }

    /// Output captured from a failed subprocess, if any
    #[must_use]
    pub fn captured_output(&self) -> Option<&str> {
        match self {
            Self::Subprocess { output, .. } => Some(output),
            _ => None,
        }
    }
}
