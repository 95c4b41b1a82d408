//! Output formatting for human and JSON modes
//!
//! Human mode prints `[runifnew]`-prefixed lines as the evaluation goes:
//! trace lines only with `-v`, status lines always. JSON mode stays quiet
//! until the end and prints a single object describing the outcome or the
//! error.

use std::fmt::Display;
use std::path::PathBuf;

use serde::Serialize;

use crate::core::models::Outcome;
use crate::core::{ConfigError, TriggerError};

/// Prefix for every human-readable line
pub const PREFIX: &str = "[runifnew]";

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Prints progress according to verbosity and output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Reporter {
    verbose: bool,
    mode: OutputMode,
}

impl Reporter {
    /// Create a reporter
    #[must_use]
    pub const fn new(verbose: bool, mode: OutputMode) -> Self {
        Self { verbose, mode }
    }

    /// Print a trace line (verbose human mode only)
    pub fn trace(&self, message: impl Display) {
        if self.verbose && self.mode == OutputMode::Human {
            println!("{PREFIX} {message}");
        }
    }

    /// Print a status line (always in human mode)
    pub fn status(&self, message: impl Display) {
        if self.mode == OutputMode::Human {
            println!("{PREFIX} {message}");
        }
    }

    /// Print the final outcome
    ///
    /// Human mode has already reported everything through status lines.
    pub fn render_outcome(&self, outcome: &Outcome) {
        if self.mode == OutputMode::Json {
            if let Some(json) = to_json(&OutcomeReport::from(outcome)) {
                println!("{json}");
            }
        }
    }

    /// Print a fatal error
    pub fn render_error(&self, report: &ErrorReport) {
        match self.mode {
            OutputMode::Human => {
                println!("{PREFIX} {}", report.error);
                if let Some(output) = &report.output {
                    println!("{PREFIX} Output: {output}");
                }
            },
            OutputMode::Json => {
                if let Some(json) = to_json(report) {
                    println!("{json}");
                }
            },
        }
    }
}

/// Pretty-print `value`, logging instead when it cannot be serialized
fn to_json(value: &impl Serialize) -> Option<String> {
    match serde_json::to_string_pretty(value) {
        Ok(json) => Some(json),
        Err(e) => {
            log::error!("cannot serialize JSON report: {e}");
            None
        },
    }
}

/// Serializable summary of a successful run
#[derive(Debug, Serialize)]
pub struct OutcomeReport {
    /// `built`, `skipped` or `downloaded`
    pub action: &'static str,
    /// HEAD hash the decision was made against
    pub head: String,
    /// Watched path that matched
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Captured command output
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    /// Downloaded URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Download destination
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dest: Option<PathBuf>,
    /// Bytes written to the destination
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bytes: Option<u64>,
}

impl From<&Outcome> for OutcomeReport {
    fn from(outcome: &Outcome) -> Self {
        let mut report = Self {
            action: outcome.action(),
            head: outcome.head().to_string(),
            path: None,
            output: None,
            url: None,
            dest: None,
            bytes: None,
        };
        match outcome {
            Outcome::Built { path, output, .. } => {
                report.path = Some(path.clone());
                report.output = Some(output.clone());
            },
            Outcome::Downloaded {
                url, dest, bytes, ..
            } => {
                report.url = Some(url.clone());
                report.dest = Some(dest.clone());
                report.bytes = Some(*bytes);
            },
            Outcome::Skipped { .. } => {},
        }
        report
    }
}

/// Serializable description of a fatal error
#[derive(Debug, Serialize)]
pub struct ErrorReport {
    /// Human-readable message
    pub error: String,
    /// Error category
    pub kind: &'static str,
    /// Output of the failed subprocess
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
}

impl From<&TriggerError> for ErrorReport {
    fn from(err: &TriggerError) -> Self {
        Self {
            error: err.to_string(),
            kind: err.kind(),
            output: err.captured_output().map(str::to_string),
        }
    }
}

impl From<&ConfigError> for ErrorReport {
    fn from(err: &ConfigError) -> Self {
        Self {
            error: err.to_string(),
            kind: "configuration",
            output: None,
        }
    }
}
