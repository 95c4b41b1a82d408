//! Commit identifiers
//!
//! A [`CommitHash`] is whatever git prints for a revision, trimmed of the
//! trailing newline. Comparison ignores ASCII case so that an abbreviated
//! uppercase HEAD and a lowercase `git log` hash still agree.

use serde::Serialize;

/// A commit identifier as printed by git
#[derive(Debug, Clone, Default, Eq, Serialize)]
#[serde(transparent)]
pub struct CommitHash(String);

impl CommitHash {
    /// Build a hash from raw git output
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        Self(raw.trim().to_string())
    }

    /// The hash text
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when git printed nothing (path has no history)
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl PartialEq for CommitHash {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq_ignore_ascii_case(&other.0)
    }
}

impl std::fmt::Display for CommitHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
