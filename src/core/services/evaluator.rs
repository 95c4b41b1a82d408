//! The trigger decision
//!
//! Compares each watched path's last commit against HEAD. The first path
//! touched by HEAD triggers the build command; if none was, the configured
//! artifact is downloaded instead (or nothing happens for `-url none`).

use std::fs::File;
use std::io;
use std::path::Path;

use crate::core::TriggerError;
use crate::core::models::{CommitHash, Download, Outcome, TriggerConfig};
use crate::core::ports::{CommandRunner, Fetcher};
use crate::output::Reporter;

use super::exec::run_checked;
use super::history::GitHistory;

const CMD_ERROR: &str = "Error running cmd";

/// Runs one trigger evaluation against injected effects
#[derive(Debug)]
pub struct TriggerEvaluator<'a, R: ?Sized, F: ?Sized> {
    runner: &'a R,
    fetcher: &'a F,
    reporter: Reporter,
}

impl<'a, R, F> TriggerEvaluator<'a, R, F>
where
    R: CommandRunner + ?Sized,
    F: Fetcher + ?Sized,
{
    /// Create an evaluator
    #[must_use]
    pub const fn new(runner: &'a R, fetcher: &'a F, reporter: Reporter) -> Self {
        Self {
            runner,
            fetcher,
            reporter,
        }
    }

    /// Evaluate the trigger and perform the chosen action
    ///
    /// Both executables are resolved before git is queried, so a missing
    /// build tool fails fast. Any failing git query aborts the run.
    pub fn evaluate(&self, config: &TriggerConfig) -> Result<Outcome, TriggerError> {
        let history = GitHistory::locate(self.runner, self.reporter)?;

        let program = config.command.program();
        let program_path = self
            .runner
            .locate(program)
            .ok_or_else(|| TriggerError::CommandNotFound {
                program: program.to_string(),
            })?;
        log::debug!("resolved {program} to {}", program_path.display());

        let head = history.head()?;
        self.reporter.trace(format_args!("latest hash: {head}"));

        if let Some(path) = self.first_match(&history, &head, &config.paths)? {
            return self.build(config, &program_path, head, path);
        }

        match &config.download {
            Download::Skip => {
                self.reporter.trace("FALSE: exiting gracefully no url set");
                Ok(Outcome::Skipped { head })
            },
            Download::Fetch { url, dest } => self.download(head, url, dest),
        }
    }

    /// First watched path whose last commit is HEAD
    fn first_match(
        &self,
        history: &GitHistory<'_, R>,
        head: &CommitHash,
        paths: &[String],
    ) -> Result<Option<String>, TriggerError> {
        for path in paths {
            let hash = history.last_commit(path)?;
            self.reporter.trace(format_args!("{path} hash: {hash}"));
            if hash == *head {
                self.reporter
                    .trace(format_args!("TRUE: {path} was updated, triggering cmd"));
                return Ok(Some(path.clone()));
            }
        }
        Ok(None)
    }

    fn build(
        &self,
        config: &TriggerConfig,
        program: &Path,
        head: CommitHash,
        path: String,
    ) -> Result<Outcome, TriggerError> {
        self.reporter
            .status(format_args!("Running cmd: {}", config.command));

        let output = run_checked(
            self.runner,
            self.reporter,
            program,
            config.command.args(),
            CMD_ERROR,
        )?;
        self.reporter.status(format_args!("Output: {output}"));

        Ok(Outcome::Built { head, path, output })
    }

    /// Fetch `url` into `dest`
    ///
    /// The destination is only opened once the server has answered 200.
    fn download(&self, head: CommitHash, url: &str, dest: &Path) -> Result<Outcome, TriggerError> {
        self.reporter.trace(format_args!("FALSE: Fetching url: {url}"));

        let mut body = self.fetcher.fetch(url).map_err(|source| TriggerError::Network {
            url: url.to_string(),
            source,
        })?;
        self.reporter.trace(format_args!("Downloaded url: {url}"));

        let fs_error = |source| TriggerError::Filesystem {
            path: dest.to_path_buf(),
            source,
        };
        let mut file = File::create(dest).map_err(fs_error)?;
        let bytes = io::copy(&mut body, &mut file).map_err(fs_error)?;
        log::debug!("wrote {bytes} bytes to {}", dest.display());

        self.reporter
            .status(format_args!("Saved url to: {}", dest.display()));

        Ok(Outcome::Downloaded {
            head,
            url: url.to_string(),
            dest: dest.to_path_buf(),
            bytes,
        })
    }
}
