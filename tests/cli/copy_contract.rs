use crate::harness::test_context::VALID_GEMINI;
use crate::harness::{TestContext, gemini_server};
use predicates::prelude::*;

const COPY_ARGS: [&str; 9] = [
    "copy",
    "--product",
    "Keto Fit Pro 30",
    "--pain-points",
    "no time to cook",
    "--triggers",
    "urgency",
    "--platform",
    "facebook",
];

#[test]
fn prompt_preview_contains_sections() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(COPY_ARGS)
        .arg("--prompt-preview")
        .assert()
        .success()
        .stdout(predicate::str::contains("no time to cook"))
        .stdout(predicate::str::contains("=== EMAIL MARKETING ==="));
}

#[test]
fn mock_mode_renders_every_channel() {
    let ctx = TestContext::new();
    ctx.write_snapshot(VALID_GEMINI);

    ctx.cli()
        .arg("--mock")
        .args(COPY_ARGS)
        .assert()
        .success()
        .stdout(predicate::str::contains("== Facebook Ads =="))
        .stdout(predicate::str::contains("== Google Ads =="))
        .stdout(predicate::str::contains("== Email Marketing =="));
}

#[test]
fn live_response_is_parsed_into_yaml() {
    let mut server = gemini_server::start();
    let text = "=== FACEBOOK ADS ===\nHEADLINES:\nFirst headline\nSecond headline\n\
                CTAS:\nBuy now\n=== GOOGLE ADS ===\nDESCRIPTIONS:\nShort description\n";
    let mock = gemini_server::expect_request(
        &mut server,
        "AIza-stored",
        200,
        &gemini_server::text_response(text),
    );
    let ctx = TestContext::new().with_api_url(server.url());
    ctx.write_snapshot(VALID_GEMINI);

    let output = ctx.cli().args(COPY_ARGS).args(["--format", "yaml"]).output().unwrap();
    assert!(output.status.success());
    mock.assert();

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("- First headline"));
    assert!(stdout.contains("- Buy now"));
    assert!(stdout.contains("- Short description"));
}

#[test]
fn malformed_response_shows_generic_message() {
    let mut server = gemini_server::start();
    let _mock =
        gemini_server::expect_request(&mut server, "AIza-stored", 200, r#"{"candidates":[]}"#);
    let ctx = TestContext::new().with_api_url(server.url());
    ctx.write_snapshot(VALID_GEMINI);

    ctx.cli()
        .args(COPY_ARGS)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error generating copy"));
}
