//! Validated trigger configuration

use std::path::PathBuf;

use super::CommandLine;

/// Sentinel URL meaning "do nothing when nothing matched"
pub const NO_URL: &str = "none";

/// What to do when no watched path matches HEAD
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Download {
    /// URL was `none`: exit successfully without doing anything
    Skip,
    /// Fetch `url` and save the body to `dest`
    Fetch {
        /// Source URL
        url: String,
        /// Destination file, created or truncated
        dest: PathBuf,
    },
}

impl Download {
    /// Interpret a `-url` value and its destination
    ///
    /// Only the exact spelling `none` may omit the destination. Once a
    /// destination is present, `none` in any case means [`Download::Skip`].
    /// Returns `None` when the destination is required but missing.
    #[must_use]
    pub fn from_parts(url: &str, dest: Option<PathBuf>) -> Option<Self> {
        if url == NO_URL {
            return Some(Self::Skip);
        }
        let dest = dest?;
        if url.eq_ignore_ascii_case(NO_URL) {
            return Some(Self::Skip);
        }
        Some(Self::Fetch {
            url: url.to_string(),
            dest,
        })
    }
}

/// Everything the evaluator needs for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerConfig {
    /// Command to run on a match
    pub command: CommandLine,
    /// Action when nothing matches
    pub download: Download,
    /// Watched paths, checked in order
    pub paths: Vec<String>,
}
