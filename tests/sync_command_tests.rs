//! Integration tests for `promoter sync`

mod common;

use common::TestWorkspace;
use predicates::prelude::*;

fn foo_bar_workspace() -> TestWorkspace {
    let workspace = TestWorkspace::new();
    workspace.write_manifest("dev.yaml", &[("foo", "1.0.0"), ("bar", "2.0.0")]);
    workspace.write_manifest("prod.yaml", &[("foo", "1.0.0")]);
    workspace
}

#[test]
fn test_sync_skip_old_versions_prints_cleared_packages() {
    let workspace = foo_bar_workspace();

    workspace
        .cmd()
        .args(["sync", "-s", "dev.yaml", "-d", "prod.yaml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("name: bar"))
        .stdout(predicate::str::contains("name: foo").not())
        .stderr(predicate::str::contains(
            "STRATEGY | PASS | Source.Version > Destination.Version",
        ))
        .stderr(predicate::str::contains("PACKAGE | SKIP | foo (1.0.0) > (1.0.0)"))
        .stderr(predicate::str::contains("PACKAGE | PASS | bar (2.0.0) > (missing)"));
}

#[test]
fn test_sync_force_latest_versions_aborts_on_regression() {
    let workspace = foo_bar_workspace();

    workspace
        .cmd()
        .args([
            "sync",
            "-s",
            "dev.yaml",
            "-d",
            "prod.yaml",
            "--strategy",
            "force-latest-versions",
            "--output",
            "cleared.yaml",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("PACKAGE | FAIL | foo (1.0.0) > (1.0.0)"))
        .stderr(predicate::str::contains("Package 'foo' (1.0.0)"))
        .stderr(predicate::str::contains("bar (2.0.0)").not());

    assert!(!workspace.file_exists("cleared.yaml"));
}

#[test]
fn test_sync_snapshot_destination_is_replaceable() {
    let workspace = TestWorkspace::new();
    workspace.write_manifest("dev.yaml", &[("app", "1.2.0")]);
    workspace.write_manifest("prod.yaml", &[("app", "1.2.0-SNAPSHOT")]);

    workspace
        .cmd()
        .args([
            "sync",
            "-s",
            "dev.yaml",
            "-d",
            "prod.yaml",
            "--strategy",
            "force-latest-versions",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("name: app"))
        .stderr(predicate::str::contains(
            "PACKAGE | PASS | app (1.2.0) > (1.2.0-SNAPSHOT)",
        ));
}

#[test]
fn test_sync_uses_latest_destination_version() {
    let workspace = TestWorkspace::new();
    workspace.write_manifest("dev.yaml", &[("app", "1.5.0")]);
    workspace.write_manifest("prod.yaml", &[("app", "1.0.0"), ("app", "2.0.0")]);

    workspace
        .cmd()
        .args(["sync", "-s", "dev.yaml", "-d", "prod.yaml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("name: app").not())
        .stderr(predicate::str::contains("PACKAGE | SKIP | app (1.5.0) > (2.0.0)"));
}

#[test]
fn test_sync_strategy_from_config() {
    let workspace = foo_bar_workspace();
    workspace.write_file("promoter.yaml", "strategy: force-latest-versions\n");

    workspace
        .cmd()
        .args(["sync", "-s", "dev.yaml", "-d", "prod.yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not newer than the destination"));

    // the flag wins over the configuration
    workspace
        .cmd()
        .args([
            "sync",
            "-s",
            "dev.yaml",
            "-d",
            "prod.yaml",
            "--strategy",
            "skip-old-versions",
        ])
        .assert()
        .success();
}

#[test]
fn test_sync_writes_json_output() {
    let workspace = foo_bar_workspace();

    workspace
        .cmd()
        .args(["sync", "-s", "dev.yaml", "-d", "prod.yaml", "-o", "out/cleared.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cleared"))
        .stdout(predicate::str::contains("1 of 2 packages (skip-old-versions)"));

    let written: serde_json::Value =
        serde_json::from_str(&workspace.read_file("out/cleared.json")).unwrap();
    assert_eq!(
        written,
        serde_json::json!([{"name": "bar", "version": "2.0.0", "snapshot": false}])
    );
}

#[test]
fn test_sync_reads_wrapped_json_manifests() {
    let workspace = TestWorkspace::new();
    workspace.write_file(
        "dev.json",
        r#"{"packages": [{"name": "lib", "version": "3.1"}]}"#,
    );
    workspace.write_file("prod.json", r#"{"packages": [{"name": "lib", "version": "3.0.9"}]}"#);

    workspace
        .cmd()
        .args(["sync", "-s", "dev.json", "-d", "prod.json", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""name": "lib""#))
        .stdout(predicate::str::contains(r#""version": "3.1""#));
}

#[test]
fn test_sync_rejects_malformed_version() {
    let workspace = TestWorkspace::new();
    workspace.write_manifest("dev.yaml", &[("foo", "1.x")]);
    workspace.write_manifest("prod.yaml", &[]);

    workspace
        .cmd()
        .args(["sync", "-s", "dev.yaml", "-d", "prod.yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("dev.yaml"))
        .stderr(predicate::str::contains("non-numeric segment"));
}

#[test]
fn test_sync_missing_manifest() {
    let workspace = TestWorkspace::new();
    workspace.write_manifest("prod.yaml", &[]);

    workspace
        .cmd()
        .args(["sync", "-s", "nope.yaml", "-d", "prod.yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read package manifest"));
}
