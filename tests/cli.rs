//! Integration tests for top-level CLI behavior.

use std::path::Path;
use std::process::Command;

fn run_tasklens(dir: &Path, args: &[&str]) -> std::process::Output {
    let bin = env!("CARGO_BIN_EXE_tasklens");
    Command::new(bin)
        .args(args)
        .current_dir(dir)
        .env_remove("TASKLENS_CHAT_URL")
        .output()
        .expect("failed to run tasklens binary")
}

fn empty_workspace(name: &str) -> std::path::PathBuf {
    let dir = std::env::temp_dir().join(name);
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn help_lists_subcommands() {
    let dir = empty_workspace("tasklens_cli_help");
    let output = run_tasklens(&dir, &["--help"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("status"));
    assert!(stdout.contains("run-phase"));
    assert!(stdout.contains("annotate"));
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn invalid_subcommand_exits_with_error() {
    let dir = empty_workspace("tasklens_cli_invalid");
    let output = run_tasklens(&dir, &["nonsense"]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(stderr.contains("unrecognized subcommand"));
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn run_without_line_shows_usage_error() {
    let dir = empty_workspace("tasklens_cli_run_no_line");
    let output = run_tasklens(&dir, &["run", "demo"]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(stderr.contains("--line"));
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn status_for_missing_change_fails() {
    let dir = empty_workspace("tasklens_cli_status_missing");
    let output = run_tasklens(&dir, &["status", "demo"]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(stderr.contains("Failed to read task list"));
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn malformed_config_fails_with_context() {
    let dir = empty_workspace("tasklens_cli_bad_config");
    std::fs::write(dir.join(".tasklens.yaml"), "root_dir: [unclosed\n").unwrap();
    let output = run_tasklens(&dir, &["status", "demo"]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(stderr.contains(".tasklens.yaml"));
    let _ = std::fs::remove_dir_all(&dir);
}
