use std::fs;
use std::process::{Command, Output};

use tempfile::TempDir;

const EXPECTED_STDOUT: &str = "11.5\n15\n18\n15\n";

// Runs the binary in an empty directory so no stray `.env` is picked up.
fn run(dir: &TempDir, envs: &[(&str, &str)], args: &[&str]) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_coupon-reduce"));
    cmd.current_dir(dir.path())
        .env_remove("RUST_LOG")
        .env_remove("LOG_LEVEL")
        .env_remove("APP_ENV")
        .args(args);
    for (key, value) in envs {
        cmd.env(key, value);
    }
    cmd.output().expect("Failed to run coupon-reduce")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

#[test]
fn test_plain_run_prints_four_totals() {
    let dir = TempDir::new().unwrap();
    let output = run(&dir, &[], &[]);

    assert!(output.status.success());
    assert_eq!(stdout(&output), EXPECTED_STDOUT);
}

#[test]
fn test_debug_logging_stays_off_stdout() {
    let dir = TempDir::new().unwrap();
    let output = run(&dir, &[("RUST_LOG", "debug")], &[]);

    assert!(output.status.success());
    assert_eq!(stdout(&output), EXPECTED_STDOUT);
    assert!(String::from_utf8_lossy(&output.stderr).contains("reduce"));
}

#[test]
fn test_log_level_directive_list_is_accepted() {
    let dir = TempDir::new().unwrap();
    let output = run(&dir, &[("LOG_LEVEL", "info,hyper=warn")], &[]);

    assert!(output.status.success());
    assert_eq!(stdout(&output), EXPECTED_STDOUT);
}

#[test]
fn test_invalid_log_level_still_prints_totals() {
    let dir = TempDir::new().unwrap();
    let output = run(&dir, &[("LOG_LEVEL", "app=loud")], &[]);

    assert!(output.status.success());
    assert_eq!(stdout(&output), EXPECTED_STDOUT);
    assert!(String::from_utf8_lossy(&output.stderr).contains("Ignoring invalid LOG_LEVEL"));
}

#[test]
fn test_invalid_level_alongside_rust_log() {
    let dir = TempDir::new().unwrap();
    let output = run(&dir, &[("RUST_LOG", "debug"), ("LOG_LEVEL", "app=loud")], &[]);

    assert!(output.status.success());
    assert_eq!(stdout(&output), EXPECTED_STDOUT);
}

#[test]
fn test_dotenv_file_cannot_break_run() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(".env"), "LOG_LEVEL=\"app=loud\"\nAPP_ENV=production\n").unwrap();
    let output = run(&dir, &[], &[]);

    assert!(output.status.success());
    assert_eq!(stdout(&output), EXPECTED_STDOUT);
}

#[test]
fn test_unknown_argument_is_usage_error() {
    let dir = TempDir::new().unwrap();
    let output = run(&dir, &[], &["--verbose"]);

    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
}
