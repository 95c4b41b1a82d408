//! CLI definitions and entry point

use std::ffi::OsString;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use clap::error::ErrorKind;

use runifnew::adapters::{HttpFetcher, SystemRunner};
use runifnew::config::{FileConfig, RawConfig};
use runifnew::core::ConfigError;
use runifnew::core::models::{Download, TriggerConfig};
use runifnew::core::services::TriggerEvaluator;
use runifnew::output::{ErrorReport, OutputMode, Reporter};

/// Short usage printed on configuration errors
pub const USAGE: &str = "Usage: runifnew -cmd [build] -url [https://download] -urlPath bin/test [folders...]
This program runs build if the git version on folders... matches the latest commit, otherwise it fetches the download url. (You can set -url none to do nothing if matches)";

/// Long flags that may also be spelled with a single dash
const LONG_FLAGS: &[&str] = &[
    "cmd", "url", "urlPath", "verbose", "json", "config", "help", "version",
];

/// Long flags that consume the following argument as their value
const VALUE_FLAGS: &[&str] = &["cmd", "url", "urlPath", "config"];

/// runifnew - build if changed, otherwise download
#[derive(Parser, Debug)]
#[command(
    name = "runifnew",
    version,
    about = "Run a build if watched paths changed in the latest commit, otherwise fetch a prebuilt artifact",
    long_about = "Compares the last commit touching each watched path against HEAD.\n\n\
                  If any path was touched by HEAD, the -cmd command runs.\n\
                  Otherwise the -url is downloaded to -urlPath (or nothing happens for -url none).",
    override_usage = "runifnew -cmd <COMMAND> -url <URL|none> -urlPath <PATH> [-v] [PATHS]..."
)]
pub struct Cli {
    /// Command to execute when a watched path changed in HEAD
    #[arg(long = "cmd", value_name = "COMMAND", allow_hyphen_values = true)]
    pub cmd: Option<String>,

    /// URL to fetch otherwise, or `none` to do nothing
    #[arg(long = "url", value_name = "URL")]
    pub url: Option<String>,

    /// Path to save the URL to (required unless -url none)
    #[arg(long = "urlPath", value_name = "PATH")]
    pub url_path: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long)]
    pub json: bool,

    /// TOML file with default settings
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Paths to check against the latest commit
    ///
    /// Flag parsing stops at the first path; later arguments are all paths.
    #[arg(trailing_var_arg = true)]
    pub paths: Vec<String>,
}

impl Cli {
    /// Flag values, completed from the config file if one was given
    pub fn raw_config(&self) -> Result<RawConfig, ConfigError> {
        let raw = RawConfig {
            cmd: self.cmd.clone(),
            url: self.url.clone(),
            url_path: self.url_path.clone(),
            paths: self.paths.clone(),
            verbose: self.verbose,
        };

        match &self.config {
            Some(path) => Ok(raw.merge_file(FileConfig::load(path)?)),
            None => Ok(raw),
        }
    }

    const fn output_mode(&self) -> OutputMode {
        if self.json {
            OutputMode::Json
        } else {
            OutputMode::Human
        }
    }
}

/// Rewrite Go-style `-flag` spellings to `--flag`
///
/// Only the known long flags are touched, and nothing after `--` or after
/// the first positional argument.
pub fn normalize_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let mut args = args.into_iter();
    let mut out: Vec<OsString> = args.next().into_iter().collect();
    let mut expects_value = false;

    for arg in args.by_ref() {
        if expects_value {
            expects_value = false;
            out.push(arg);
            continue;
        }
        let Some(text) = arg.to_str() else {
            out.push(arg);
            break;
        };
        if text == "--" || text == "-" || !text.starts_with('-') {
            out.push(arg);
            break;
        }

        let (dashes, rest) = match text.strip_prefix("--") {
            Some(rest) => (2, rest),
            None => (1, &text[1..]),
        };
        let (name, inline_value) = match rest.split_once('=') {
            Some((name, _)) => (name, true),
            None => (rest, false),
        };
        expects_value = !inline_value && VALUE_FLAGS.contains(&name);
        if dashes == 1 && LONG_FLAGS.contains(&name) {
            out.push(OsString::from(format!("-{text}")));
        } else {
            out.push(arg);
        }
    }

    out.extend(args);
    out
}

/// Run the CLI
pub fn run() -> ExitCode {
    let args: Vec<OsString> = std::env::args_os().collect();

    if args.get(1).is_some_and(|a| a == "version") {
        println!("runifnew version: {}", runifnew::VERSION);
        return ExitCode::SUCCESS;
    }

    let cli = match Cli::try_parse_from(normalize_args(args)) {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = err.print();
            return ExitCode::SUCCESS;
        },
        Err(err) => {
            let _ = err.print();
            println!("{USAGE}");
            return ExitCode::FAILURE;
        },
    };
    let mode = cli.output_mode();

    let raw = match cli.raw_config() {
        Ok(raw) => raw,
        Err(err) => return config_failure(&err, mode),
    };

    if raw.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("runifnew=debug"))
            .init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let config = match raw.validate() {
        Ok(config) => config,
        Err(err) => return config_failure(&err, mode),
    };

    let reporter = Reporter::new(raw.verbose, mode);
    trace_plan(reporter, &config);

    let runner = SystemRunner::new();
    let fetcher = HttpFetcher::new();
    match TriggerEvaluator::new(&runner, &fetcher, reporter).evaluate(&config) {
        Ok(outcome) => {
            reporter.render_outcome(&outcome);
            ExitCode::SUCCESS
        },
        Err(err) => {
            log::debug!("evaluation failed: {err:?}");
            reporter.render_error(&ErrorReport::from(&err));
            ExitCode::FAILURE
        },
    }
}

fn trace_plan(reporter: Reporter, config: &TriggerConfig) {
    reporter.trace(format_args!("If TRUE, run: {}", config.command));
    match &config.download {
        Download::Skip => reporter.trace("If FALSE, do nothing (-url none)"),
        Download::Fetch { url, dest } => reporter.trace(format_args!(
            "If FALSE, fetch: {url} and save to: {}",
            dest.display()
        )),
    }
}

fn config_failure(err: &ConfigError, mode: OutputMode) -> ExitCode {
    Reporter::new(false, mode).render_error(&ErrorReport::from(err));
    if mode == OutputMode::Human {
        println!("{USAGE}");
    }
    ExitCode::FAILURE
}
