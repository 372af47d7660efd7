//! CLI integration tests using the REAL promoter binary

mod common;

use common::promoter_cmd;
use predicates::prelude::*;

#[test]
fn test_help_output() {
    promoter_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("sync"))
        .stdout(predicate::str::contains("bundle"))
        .stdout(predicate::str::contains("compare"));
}

#[test]
fn test_version_output() {
    promoter_cmd()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("promoter"))
        .stdout(predicate::str::contains("Build info"))
        .stdout(predicate::str::contains("Minimum Rust version: 1.85"));
}

#[test]
fn test_missing_subcommand_fails() {
    promoter_cmd().assert().failure();
}

#[test]
fn test_compare_orders_numerically() {
    promoter_cmd()
        .args(["compare", "1.10.0", "1.9.0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1.10.0 > 1.9.0"));
}

#[test]
fn test_compare_pads_missing_segments() {
    promoter_cmd()
        .args(["compare", "1.2", "1.2.0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1.2 = 1.2.0"));
}

#[test]
fn test_compare_snapshot_equal_to_release() {
    promoter_cmd()
        .args(["compare", "1.2.0-SNAPSHOT", "1.2.0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1.2.0-SNAPSHOT = 1.2.0"))
        .stdout(predicate::str::contains("snapshot"));
}

#[test]
fn test_compare_rejects_malformed_version() {
    promoter_cmd()
        .args(["compare", "1.x", "1.0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid version"))
        .stderr(predicate::str::contains("non-numeric segment"));
}

#[test]
fn test_completions_bash() {
    promoter_cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("promoter"));
}

#[test]
fn test_completions_unknown_shell() {
    promoter_cmd()
        .args(["completions", "tcsh"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown shell: tcsh"));
}
