//! Integration tests for the runifnew CLI
//!
//! These tests run the real binary inside temporary git repositories, with
//! a local tiny_http server standing in for the artifact host.

#![cfg(unix)]

#[path = "../common/mod.rs"]
#[allow(dead_code)]
mod common;

use std::fs;
use std::thread::{self, JoinHandle};

use assert_cmd::cargo;
use predicates::prelude::*;
use tempfile::TempDir;

use common::git_repo::TempGitRepo;

/// Helper function to create a runifnew command
fn runifnew() -> assert_cmd::Command {
    assert_cmd::Command::new(cargo::cargo_bin!("runifnew"))
}

/// Repository where HEAD touched `changed.txt` but not `stable.txt`
fn setup_repo() -> TempGitRepo {
    let repo = TempGitRepo::new();
    repo.commit_file("stable.txt", "stable\n", "Add stable file");
    repo.commit_file("changed.txt", "changed\n", "Add changed file");
    repo
}

/// Serve a single request with `status` and `body`
fn serve_once(status: u16, body: &'static [u8]) -> (String, JoinHandle<()>) {
    let server = tiny_http::Server::http("127.0.0.1:0").expect("Failed to bind test server");
    let addr = server
        .server_addr()
        .to_ip()
        .expect("Test server has no IP address");
    let handle = thread::spawn(move || {
        if let Ok(request) = server.recv() {
            let response = tiny_http::Response::from_data(body.to_vec()).with_status_code(status);
            let _ = request.respond(response);
        }
    });
    (format!("http://{addr}/artifact.bin"), handle)
}

// =============================================================================
// Argument handling
// =============================================================================

#[test]
fn test_version_subcommand() {
    runifnew()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "runifnew version: {}",
            env!("CARGO_PKG_VERSION")
        )));
}

#[test]
fn test_help() {
    runifnew()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Compares the last commit touching each watched path"));
}

#[test]
fn test_missing_cmd_prints_usage() {
    let temp = TempDir::new().unwrap();

    runifnew()
        .args(["-url", "none", "src"])
        .current_dir(temp.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Usage: runifnew -cmd"))
        .stdout(predicate::str::contains("missing required flag -cmd"));
}

#[test]
fn test_missing_url_prints_usage() {
    let temp = TempDir::new().unwrap();

    runifnew()
        .args(["-cmd", "touch built.marker", "src"])
        .current_dir(temp.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Usage: runifnew -cmd"));

    assert!(!temp.path().join("built.marker").exists());
}

#[test]
fn test_url_without_url_path_fails() {
    runifnew()
        .args(["-cmd", "true", "-url", "http://127.0.0.1:9/x"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("-urlPath"));
}

#[test]
fn test_uppercase_none_without_url_path_fails() {
    let repo = setup_repo();

    runifnew()
        .args(["-cmd", "true", "-url", "NONE", "stable.txt"])
        .current_dir(repo.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Usage: runifnew -cmd"));
}

#[test]
fn test_uppercase_none_with_url_path_skips() {
    let repo = setup_repo();

    runifnew()
        .args(["-cmd", "touch built.marker", "-url", "NONE", "-urlPath", "bin.out"])
        .arg("stable.txt")
        .current_dir(repo.path())
        .assert()
        .success();

    assert!(!repo.path().join("bin.out").exists());
    assert!(!repo.path().join("built.marker").exists());
}

#[test]
fn test_unknown_flag_fails_with_status_one() {
    runifnew()
        .args(["-cmd", "true", "-url", "none", "--bogus"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Usage: runifnew"));
}

// =============================================================================
// Build branch
// =============================================================================

#[test]
fn test_changed_path_runs_command() {
    let repo = setup_repo();

    runifnew()
        .args(["-cmd", "touch built.marker", "-url", "none", "changed.txt"])
        .current_dir(repo.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("[runifnew] Running cmd: touch built.marker"));

    assert!(repo.path().join("built.marker").exists());
}

#[test]
fn test_first_match_wins() {
    let repo = setup_repo();

    runifnew()
        .args(["-v", "-cmd", "touch built.marker", "-url", "none"])
        .args(["stable.txt", "changed.txt", "missing.txt"])
        .current_dir(repo.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("TRUE: changed.txt was updated"))
        .stdout(predicate::str::contains("missing.txt hash").not());
}

#[test]
fn test_quoted_command_argument() {
    let repo = setup_repo();

    runifnew()
        .args(["-cmd", "sh -c 'echo hello world > out.txt'", "-url", "none", "changed.txt"])
        .current_dir(repo.path())
        .assert()
        .success();

    let content = fs::read_to_string(repo.path().join("out.txt")).unwrap();
    assert_eq!(content, "hello world\n");
}

#[test]
fn test_failing_command_shows_output() {
    let repo = setup_repo();

    runifnew()
        .args(["-cmd", "sh -c 'echo boom; exit 3'", "-url", "none", "changed.txt"])
        .current_dir(repo.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Error running cmd"))
        .stdout(predicate::str::contains("boom"));
}

#[test]
fn test_command_not_installed() {
    let repo = setup_repo();

    runifnew()
        .args(["-cmd", "runifnew-no-such-tool --flag", "-url", "none", "changed.txt"])
        .current_dir(repo.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "cmd runifnew-no-such-tool is not installed",
        ));
}

// =============================================================================
// No-match branch
// =============================================================================

#[test]
fn test_unchanged_path_with_none_does_nothing() {
    let repo = setup_repo();

    runifnew()
        .args(["-cmd", "touch built.marker", "-url", "none", "stable.txt"])
        .current_dir(repo.path())
        .assert()
        .success();

    assert!(!repo.path().join("built.marker").exists());
}

#[test]
fn test_unchanged_path_downloads_artifact() {
    let repo = setup_repo();
    let body: &'static [u8] = b"\x7fELF prebuilt artifact bytes\x00\x01\x02";
    let (url, server) = serve_once(200, body);

    runifnew()
        .args(["-cmd", "touch built.marker", "-url", url.as_str(), "-urlPath", "bin.out"])
        .arg("stable.txt")
        .current_dir(repo.path())
        .env("NO_PROXY", "127.0.0.1")
        .env("no_proxy", "127.0.0.1")
        .assert()
        .success()
        .stdout(predicate::str::contains("[runifnew] Saved url to: bin.out"));

    server.join().unwrap();
    assert_eq!(fs::read(repo.path().join("bin.out")).unwrap(), body);
    assert!(!repo.path().join("built.marker").exists());
}

#[test]
fn test_download_not_found_leaves_no_file() {
    let repo = setup_repo();
    let (url, server) = serve_once(404, b"not found");

    runifnew()
        .args(["-cmd", "true", "-url", url.as_str(), "-urlPath", "bin.out", "stable.txt"])
        .current_dir(repo.path())
        .env("NO_PROXY", "127.0.0.1")
        .env("no_proxy", "127.0.0.1")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("status code: 404"));

    server.join().unwrap();
    assert!(!repo.path().join("bin.out").exists());
}

// =============================================================================
// Git failures, verbosity, output modes
// =============================================================================

#[test]
fn test_outside_repository_fails() {
    let temp = TempDir::new().unwrap();

    runifnew()
        .args(["-cmd", "true", "-url", "none", "src"])
        .current_dir(temp.path())
        .env("GIT_CEILING_DIRECTORIES", temp.path().parent().unwrap())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Error getting git hash"));
}

#[test]
fn test_verbose_traces_hashes() {
    let repo = setup_repo();
    let head = repo.head();

    runifnew()
        .args(["-v", "-cmd", "true", "-url", "none", "stable.txt"])
        .current_dir(repo.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("[runifnew] latest hash: {head}")))
        .stdout(predicate::str::contains("[runifnew] stable.txt hash:"))
        .stdout(predicate::str::contains("FALSE: exiting gracefully no url set"));
}

#[test]
fn test_quiet_by_default() {
    let repo = setup_repo();

    runifnew()
        .args(["-cmd", "true", "-url", "none", "stable.txt"])
        .current_dir(repo.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("latest hash").not());
}

#[test]
fn test_flags_after_paths_are_paths() {
    let repo = setup_repo();

    runifnew()
        .args(["-cmd", "touch built.marker", "-url", "none", "stable.txt", "-v"])
        .current_dir(repo.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("latest hash").not());

    assert!(!repo.path().join("built.marker").exists());
}

#[test]
fn test_json_outcome() {
    let repo = setup_repo();
    let head = repo.head();

    let output = runifnew()
        .args(["--json", "-cmd", "true", "-url", "none", "stable.txt"])
        .current_dir(repo.path())
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["action"], "skipped");
    assert_eq!(json["head"], head.as_str());
}

#[test]
fn test_config_file() {
    let repo = setup_repo();
    repo.write_file(
        "runifnew.toml",
        r#"
cmd = "touch built.marker"
url = "none"
paths = ["changed.txt"]
"#,
    );

    runifnew()
        .args(["--config", "runifnew.toml"])
        .current_dir(repo.path())
        .assert()
        .success();

    assert!(repo.path().join("built.marker").exists());
}
