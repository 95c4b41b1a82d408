//! Subprocess adapter
//!
//! Implements `CommandRunner` with `std::process`.
//!
//! - [`lookup`] - Executable search on `PATH`

pub mod lookup;

use std::ffi::OsString;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::{Child, Command, ExitStatus};

use crate::core::ports::{CommandOutput, CommandRunner};

/// Runs programs as real child processes
#[derive(Debug, Clone, Default)]
pub struct SystemRunner {
    /// Search path override; `None` reads `PATH` at lookup time
    search_path: Option<OsString>,
}

impl SystemRunner {
    /// Create a runner that searches the process `PATH`
    #[must_use]
    pub const fn new() -> Self {
        Self { search_path: None }
    }

    /// Create a runner with an explicit search path
    #[must_use]
    pub fn with_search_path(search_path: impl Into<OsString>) -> Self {
        Self {
            search_path: Some(search_path.into()),
        }
    }
}

impl CommandRunner for SystemRunner {
    fn locate(&self, program: &str) -> Option<PathBuf> {
        let search_path = self
            .search_path
            .clone()
            .or_else(|| std::env::var_os("PATH"));
        lookup::find_executable(program, search_path.as_deref())
    }

    fn run(&self, program: &Path, args: &[String]) -> std::io::Result<CommandOutput> {
        // stdout and stderr share one pipe so the captured text keeps the
        // order the child wrote it in.
        let (mut reader, writer) = std::io::pipe()?;
        let mut child = Command::new(program)
            .args(args)
            .stdout(writer.try_clone()?)
            .stderr(writer)
            .spawn()?;
        log::debug!("spawned {} (pid {})", program.display(), child.id());

        let (status, buf) = collect(&mut child, &mut reader)?;
        log::debug!("{} finished with {status}", program.display());

        Ok(CommandOutput {
            success: status.success(),
            code: status.code(),
            output: String::from_utf8_lossy(&buf).into_owned(),
        })
    }
}

/// Drain `reader` and reap `child`
///
/// The child is always waited on, and killed first if reading fails.
fn collect(child: &mut Child, reader: &mut impl Read) -> std::io::Result<(ExitStatus, Vec<u8>)> {
    let mut buf = Vec::new();
    if let Err(err) = reader.read_to_end(&mut buf) {
        log::debug!("reading output of pid {} failed: {err}", child.id());
        let _ = child.kill();
        let _ = child.wait();
        return Err(err);
    }
    Ok((child.wait()?, buf))
}
