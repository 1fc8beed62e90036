//! Integration tests for the CLI binary.
//!
//! Drives the `mfp` binary against a temporary state directory.
//!
//! This test is registered as a [[test]] in the mindflow-progress-cli crate
//! so that CARGO_BIN_EXE_mfp is available.

use std::path::Path;
use std::process::{Command, Output};

/// Get a Command pointing to the `mfp` binary.
fn mfp_binary() -> Command {
    Command::new(env!("CARGO_BIN_EXE_mfp"))
}

/// Run `mfp --state-dir <dir> <args>`.
fn mfp(state_dir: &Path, args: &[&str]) -> Output {
    mfp_binary()
        .arg("--state-dir")
        .arg(state_dir)
        .args(args)
        .output()
        .expect("failed to execute mfp")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn cli_responds_to_help() {
    let output = mfp_binary()
        .arg("--help")
        .output()
        .expect("failed to execute mfp --help");

    assert!(
        output.status.success(),
        "mfp --help should exit with success, stderr: {}",
        stderr(&output)
    );
    assert!(stdout(&output).contains("Usage"));
}

#[test]
fn cli_responds_to_version() {
    let output = mfp_binary()
        .arg("--version")
        .output()
        .expect("failed to execute mfp --version");

    assert!(output.status.success());
    assert!(stdout(&output).contains("mfp"));
}

#[test]
fn cli_exits_with_error_on_unknown_flag() {
    let output = mfp_binary()
        .arg("--nonexistent-flag")
        .output()
        .expect("failed to execute mfp");

    assert!(!output.status.success());
}

#[test]
fn cli_fresh_status_shows_default_learner() {
    let dir = tempfile::tempdir().unwrap();
    let output = mfp(dir.path(), &["status"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let out = stdout(&output);
    assert!(out.contains("Alex Johnson"));
    assert!(out.contains("ATMT_0.1"));
    assert!(out.contains("locked"));
}

#[test]
fn cli_refuses_locked_enrollment_without_force() {
    let dir = tempfile::tempdir().unwrap();

    let refused = mfp(dir.path(), &["enroll", "ATMT_4"]);
    assert!(!refused.status.success());
    assert!(stderr(&refused).contains("prerequisites"));

    let forced = mfp(dir.path(), &["enroll", "ATMT_4", "--force"]);
    assert!(forced.status.success(), "stderr: {}", stderr(&forced));
    assert!(stdout(&forced).contains("Enrolled in ATMT_4"));
}

#[test]
fn cli_completion_issues_verifiable_certificate() {
    let dir = tempfile::tempdir().unwrap();

    let output = mfp(dir.path(), &["complete", "ATMT_0.1", "100", "--no-wait"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("Unlocked ATMT_1"));

    let output = mfp(dir.path(), &["enroll", "ATMT_1"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let output = mfp(dir.path(), &["complete", "ATMT_1", "88", "--no-wait"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("Issued MF-"));

    let output = mfp(dir.path(), &["--json", "certificates"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let certificates: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    let certificates = certificates.as_array().unwrap();
    assert_eq!(certificates.len(), 1);
    assert_eq!(certificates[0]["moduleCode"], "ATMT_1");
    let token = certificates[0]["verificationToken"].as_str().unwrap().to_string();

    let output = mfp(dir.path(), &["verify", &token]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let out = stdout(&output);
    assert!(out.contains("Alex Johnson"));
    assert!(out.contains("Integrity: OK"));
}

#[test]
fn cli_master_code_completion_issues_nothing() {
    let dir = tempfile::tempdir().unwrap();

    let output = mfp(dir.path(), &["complete", "MASTER", "10", "--no-wait"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(!stdout(&output).contains("Issued"));

    let output = mfp(dir.path(), &["--json", "certificates"]);
    let certificates: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert!(certificates.as_array().unwrap().is_empty());
}

#[test]
fn cli_verify_unknown_token_fails() {
    let dir = tempfile::tempdir().unwrap();
    let output = mfp(dir.path(), &["verify", "not-a-token"]);

    assert!(!output.status.success());
    assert!(stderr(&output).contains("credential not recognized"));
}

#[test]
fn cli_profile_rename_persists() {
    let dir = tempfile::tempdir().unwrap();

    let output = mfp(dir.path(), &["profile", "--name", "Priya Raman"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let output = mfp(dir.path(), &["profile"]);
    assert!(stdout(&output).contains("Priya Raman"));
}

#[test]
fn cli_quote_installments() {
    let output = mfp_binary()
        .args(["--json", "quote", "ATMT_1", "--plan", "installments"])
        .output()
        .expect("failed to execute mfp quote");

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let quote: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(quote["payments"], 3);
    assert_eq!(quote["amount_per_payment"], 107);
}
