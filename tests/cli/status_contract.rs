use crate::harness::TestContext;
use crate::harness::test_context::VALID_GEMINI;
use predicates::prelude::*;

#[test]
fn status_without_snapshot_reports_no_valid_key() {
    let ctx = TestContext::new();

    ctx.cli()
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("No validated API key"))
        .stdout(predicate::str::contains("Product Detector"));
}

#[test]
fn status_reads_validated_snapshot() {
    let ctx = TestContext::new();
    ctx.write_snapshot(VALID_GEMINI);

    ctx.cli()
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("API keys ready: gemini"));
}

#[test]
fn status_as_json() {
    let ctx = TestContext::new();
    ctx.write_snapshot(VALID_GEMINI);

    let output = ctx.cli().args(["status", "--format", "json"]).output().unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["has_valid_keys"], true);
    assert_eq!(value["valid_providers"][0], "gemini");
}

#[test]
fn corrupt_snapshot_is_treated_as_empty() {
    let ctx = TestContext::new();
    ctx.write_snapshot("{ not json");

    ctx.cli()
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("No validated API key"));
}

#[test]
fn invalid_config_is_reported() {
    let ctx = TestContext::new();
    ctx.write_config("[gemini]\nunknown_field = 1\n");

    ctx.cli().arg("status").assert().failure().stderr(predicate::str::contains("Error:"));
}
