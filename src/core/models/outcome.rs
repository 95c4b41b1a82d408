//! What a single evaluation ended up doing

use std::path::PathBuf;

use super::CommitHash;

/// Result of a successful evaluation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A watched path was touched by HEAD and the command succeeded
    Built {
        /// HEAD at evaluation time
        head: CommitHash,
        /// The first watched path that matched
        path: String,
        /// Combined stdout and stderr of the command
        output: String,
    },
    /// Nothing matched and the URL was `none`
    Skipped {
        /// HEAD at evaluation time
        head: CommitHash,
    },
    /// Nothing matched and the artifact was saved
    Downloaded {
        /// HEAD at evaluation time
        head: CommitHash,
        /// Source URL
        url: String,
        /// Destination file
        dest: PathBuf,
        /// Bytes written to `dest`
        bytes: u64,
    },
}

impl Outcome {
    /// HEAD hash the decision was made against
    #[must_use]
    pub const fn head(&self) -> &CommitHash {
        match self {
            Self::Built { head, .. } | Self::Skipped { head } | Self::Downloaded { head, .. } => {
                head
            },
        }
    }

    /// Short action name used in reports
    #[must_use]
    pub const fn action(&self) -> &'static str {
        match self {
            Self::Built { .. } => "built",
            Self::Skipped { .. } => "skipped",
            Self::Downloaded { .. } => "downloaded",
        }
    }
}
