//! Git history queries
//!
//! Only two questions are ever asked of git: what HEAD is, and which
//! commit last touched a given path.

use std::path::PathBuf;

use crate::core::TriggerError;
use crate::core::models::CommitHash;
use crate::core::ports::CommandRunner;
use crate::output::Reporter;

use super::exec::run_checked;

/// Name of the version-control executable
pub const GIT: &str = "git";

const HASH_ERROR: &str = "Error getting git hash";

/// Git queries over a [`CommandRunner`]
#[derive(Debug)]
pub struct GitHistory<'a, R: ?Sized> {
    runner: &'a R,
    git: PathBuf,
    reporter: Reporter,
}

impl<'a, R: CommandRunner + ?Sized> GitHistory<'a, R> {
    /// Resolve git on the search path
    ///
    /// # Errors
    ///
    /// Returns [`TriggerError::GitNotFound`] when git cannot be found.
    pub fn locate(runner: &'a R, reporter: Reporter) -> Result<Self, TriggerError> {
        let git = runner.locate(GIT).ok_or(TriggerError::GitNotFound)?;
        log::debug!("resolved git to {}", git.display());
        Ok(Self {
            runner,
            git,
            reporter,
        })
    }

    /// Hash of the checked-out revision
    pub fn head(&self) -> Result<CommitHash, TriggerError> {
        self.query(&["rev-parse", "HEAD"])
    }

    /// Hash of the most recent commit touching `path`
    ///
    /// Empty when the path has no history.
    pub fn last_commit(&self, path: &str) -> Result<CommitHash, TriggerError> {
        self.query(&["log", "-n", "1", "--pretty=format:%H", "--", path])
    }

    fn query(&self, args: &[&str]) -> Result<CommitHash, TriggerError> {
        let args: Vec<String> = args.iter().map(|a| (*a).to_string()).collect();
        let output = run_checked(self.runner, self.reporter, &self.git, &args, HASH_ERROR)?;
        Ok(CommitHash::parse(&output))
    }
}
