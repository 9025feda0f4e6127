use crate::harness::test_context::VALID_GEMINI;
use crate::harness::{TestContext, gemini_server};
use predicates::prelude::*;

const PRODUCT_ARGS: [&str; 9] = [
    "products",
    "--niche",
    "fitness",
    "--audience",
    "women 30-45",
    "--channel",
    "facebook",
    "--budget",
    "500",
];

#[test]
fn prompt_preview_needs_no_key() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(PRODUCT_ARGS)
        .arg("--prompt-preview")
        .assert()
        .success()
        .stdout(predicate::str::contains("fitness"))
        .stdout(predicate::str::contains("$500"))
        .stdout(predicate::str::contains("=== PRODUCTO"));
}

#[test]
fn requires_a_validated_key() {
    let ctx = TestContext::new();

    ctx.cli()
        .arg("--mock")
        .args(PRODUCT_ARGS)
        .assert()
        .failure()
        .stderr(predicate::str::contains("No validated API key"));
}

#[test]
fn mock_mode_lists_products() {
    let ctx = TestContext::new();
    ctx.write_snapshot(VALID_GEMINI);

    ctx.cli()
        .arg("--mock")
        .args(PRODUCT_ARGS)
        .assert()
        .success()
        .stdout(predicate::str::contains("#1 Keto Fit Pro 30"));
}

#[test]
fn live_response_is_parsed() {
    let mut server = gemini_server::start();
    let text = "=== PRODUCTO 1 ===\nNOMBRE: Yoga Flow\nSCORE: 7.5\nGRAVITY: abc\n\
                PAIN_POINTS: back pain, stress\n";
    let mock = gemini_server::expect_request(
        &mut server,
        "AIza-stored",
        200,
        &gemini_server::text_response(text),
    );
    let ctx = TestContext::new().with_api_url(server.url());
    ctx.write_snapshot(VALID_GEMINI);

    let output = ctx.cli().args(PRODUCT_ARGS).args(["--format", "json"]).output().unwrap();
    assert!(output.status.success());
    mock.assert();

    let products: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(products[0]["id"], 1);
    assert_eq!(products[0]["name"], "Yoga Flow");
    assert_eq!(products[0]["score"], 7.5);
    assert_eq!(products[0]["gravity"], 120.0);
    assert_eq!(products[0]["painPoints"][1], "stress");
}

#[test]
fn provider_failure_shows_generic_message() {
    let mut server = gemini_server::start();
    let _mock = gemini_server::expect_request(
        &mut server,
        "AIza-stored",
        500,
        r#"{"error":{"message":"backend exploded"}}"#,
    );
    let ctx = TestContext::new().with_api_url(server.url());
    ctx.write_snapshot(VALID_GEMINI);

    ctx.cli()
        .args(PRODUCT_ARGS)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error generating products"))
        .stderr(predicate::str::contains("backend exploded").not());
}
