//! Configuration loading and validation
//!
//! Settings come from command-line flags and, optionally, a TOML file:
//!
//! ```toml
//! cmd = "cargo build --release"
//! url = "https://example.com/artifacts/app"
//! url_path = "target/release/app"
//! paths = ["src", "Cargo.lock"]
//! verbose = false
//! ```
//!
//! Flags override file values. Positional paths replace the file's `paths`
//! when at least one is given.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::core::ConfigError;
use crate::core::models::{CommandLine, Download, TriggerConfig};

/// Contents of a `--config` file
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    /// Command to run on a match
    #[serde(default)]
    pub cmd: Option<String>,
    /// Download URL or `none`
    #[serde(default)]
    pub url: Option<String>,
    /// Download destination
    #[serde(default, alias = "urlPath")]
    pub url_path: Option<PathBuf>,
    /// Watched paths
    #[serde(default)]
    pub paths: Vec<String>,
    /// Verbose tracing
    #[serde(default)]
    pub verbose: bool,
}

impl FileConfig {
    /// Read and parse a config file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content).map_err(|source| ConfigError::ParseFile {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse config file contents
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}

/// Unvalidated settings gathered from flags and files
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawConfig {
    /// `-cmd`
    pub cmd: Option<String>,
    /// `-url`
    pub url: Option<String>,
    /// `-urlPath`
    pub url_path: Option<PathBuf>,
    /// Positional watched paths
    pub paths: Vec<String>,
    /// `-v`
    pub verbose: bool,
}

impl RawConfig {
    /// Fill anything unset here from `file`
    #[must_use]
    pub fn merge_file(self, file: FileConfig) -> Self {
        Self {
            cmd: self.cmd.or(file.cmd),
            url: self.url.or(file.url),
            url_path: self.url_path.or(file.url_path),
            paths: if self.paths.is_empty() {
                file.paths
            } else {
                self.paths
            },
            verbose: self.verbose || file.verbose,
        }
    }

    /// Check required settings and build a [`TriggerConfig`]
    ///
    /// `cmd` and `url` must be non-empty and `url_path` is required unless
    /// the URL is exactly `none`.
    pub fn validate(&self) -> Result<TriggerConfig, ConfigError> {
        let cmd = non_empty(self.cmd.as_deref()).ok_or(ConfigError::MissingCommand)?;
        let url = non_empty(self.url.as_deref()).ok_or(ConfigError::MissingUrl)?;
        let dest = self
            .url_path
            .clone()
            .filter(|p| !p.as_os_str().is_empty());
        let download = Download::from_parts(url, dest).ok_or(ConfigError::MissingUrlPath)?;
        let command = CommandLine::parse(cmd)?;

        Ok(TriggerConfig {
            command,
            download,
            paths: self.paths.clone(),
        })
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
