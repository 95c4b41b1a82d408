//! Executable lookup on the search path
//!
//! A program name containing a path separator is checked as given;
//! otherwise every directory of the search path is probed in order.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// Find `program` on `search_path` (a `PATH`-style list)
#[must_use]
pub fn find_executable(program: &str, search_path: Option<&OsStr>) -> Option<PathBuf> {
    if program.is_empty() {
        return None;
    }

    if program.contains(std::path::MAIN_SEPARATOR) || program.contains('/') {
        let candidate = PathBuf::from(program);
        return candidates(&candidate).into_iter().find(|p| is_executable(p));
    }

    let search_path = search_path?;
    std::env::split_paths(search_path)
        .map(|dir| {
            // An empty PATH entry means the current directory
            if dir.as_os_str().is_empty() {
                PathBuf::from(".").join(program)
            } else {
                dir.join(program)
            }
        })
        .flat_map(|base| candidates(&base))
        .inspect(|p| log::trace!("probing {}", p.display()))
        .find(|p| is_executable(p))
}

#[cfg(unix)]
fn candidates(base: &Path) -> Vec<PathBuf> {
    vec![base.to_path_buf()]
}

#[cfg(not(unix))]
fn candidates(base: &Path) -> Vec<PathBuf> {
    if base.extension().is_some() {
        return vec![base.to_path_buf()];
    }
    let exts = std::env::var("PATHEXT").unwrap_or_else(|_| ".COM;.EXE;.BAT;.CMD".to_string());
    exts.split(';')
        .filter(|e| !e.is_empty())
        .map(|e| {
            let mut name = base.as_os_str().to_os_string();
            name.push(e);
            PathBuf::from(name)
        })
        .collect()
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    std::fs::metadata(path).is_ok_and(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    std::fs::metadata(path).is_ok_and(|m| m.is_file())
}
