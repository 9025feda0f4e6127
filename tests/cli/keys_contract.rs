use crate::harness::test_context::VALID_GEMINI;
use crate::harness::{TestContext, gemini_server};
use predicates::prelude::*;

#[test]
fn accepted_key_is_persisted() {
    let mut server = gemini_server::start();
    let mock = gemini_server::expect_request(
        &mut server,
        "AIza-good",
        200,
        &gemini_server::text_response("ok"),
    );
    let ctx = TestContext::new().with_api_url(server.url());

    ctx.cli()
        .args(["keys", "set", "gemini", "--key", "AIza-good"])
        .assert()
        .success()
        .stdout(predicate::str::contains("gemini key is valid and saved"));

    mock.assert();
    let snapshot: serde_json::Value =
        serde_json::from_str(&ctx.read_snapshot().expect("snapshot written")).unwrap();
    assert_eq!(snapshot["gemini"]["key"], "AIza-good");
    assert_eq!(snapshot["gemini"]["status"], "valid");
    assert_eq!(snapshot["gemini"]["provider"], "gemini");
}

#[test]
fn rejected_key_leaves_snapshot_untouched() {
    let mut server = gemini_server::start();
    let mock = gemini_server::expect_request(
        &mut server,
        "AIza-bad",
        403,
        r#"{"error":{"code":403,"message":"API key not valid"}}"#,
    );
    let ctx = TestContext::new().with_api_url(server.url());
    ctx.write_snapshot(VALID_GEMINI);

    ctx.cli()
        .args(["keys", "set", "gemini", "--key", "AIza-bad"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Key validation failed"))
        .stderr(predicate::str::contains("API key not valid").not());

    mock.assert();
    assert_eq!(ctx.read_snapshot().as_deref(), Some(VALID_GEMINI));
}

#[test]
fn provider_without_probe_is_not_persisted() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["keys", "set", "openai", "--key", "sk-test"])
        .assert()
        .success()
        .stdout(predicate::str::contains("validation is not available"));

    assert!(ctx.read_snapshot().is_none());
}

#[test]
fn unknown_provider_is_rejected() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["keys", "set", "mistral", "--key", "x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("mistral"));
}

#[test]
fn test_without_stored_key_fails() {
    let ctx = TestContext::new();

    ctx.cli().args(["keys", "test", "gemini"]).assert().failure();
}

#[test]
fn mock_mode_leaves_stored_keys_untouched() {
    let ctx = TestContext::new();
    ctx.write_snapshot(VALID_GEMINI);

    ctx.cli()
        .args(["--mock", "keys", "set", "gemini", "--key", "demo-key"])
        .assert()
        .success()
        .stdout(predicate::str::contains("gemini key is valid"));

    assert_eq!(ctx.read_snapshot().as_deref(), Some(VALID_GEMINI));
}

#[test]
fn mock_mode_without_stored_keys_writes_nothing() {
    let ctx = TestContext::new();

    ctx.cli().args(["--mock", "keys", "set", "gemini", "--key", "anything"]).assert().success();

    assert!(ctx.read_snapshot().is_none());
}

#[test]
fn list_never_prints_secrets() {
    let ctx = TestContext::new();
    ctx.write_snapshot(VALID_GEMINI);

    ctx.cli()
        .args(["keys", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("gemini"))
        .stdout(predicate::str::contains("cohere"))
        .stdout(predicate::str::contains("sha256:"))
        .stdout(predicate::str::contains("AIza-stored").not());
}

#[test]
fn list_links_key_console_for_providers_without_valid_key() {
    let ctx = TestContext::new();
    ctx.write_snapshot(VALID_GEMINI);

    ctx.cli()
        .args(["keys", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("https://platform.openai.com/api-keys"))
        .stdout(predicate::str::contains("https://dashboard.cohere.ai/api-keys"))
        .stdout(predicate::str::contains("makersuite.google.com").not());
}
