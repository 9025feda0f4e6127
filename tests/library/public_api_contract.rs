use crate::harness::gemini_server;
use marketinsight::app::commands::{copy, keys, products, status};
use marketinsight::domain::ConfigSources;
use marketinsight::{ClientMode, KeyStatus, ProductBrief, create_context_with};
use tempfile::TempDir;

fn sources(dir: &TempDir, api_url: Option<String>) -> ConfigSources {
    ConfigSources {
        data_dir: dir.path().to_path_buf(),
        config_path: None,
        api_url_override: api_url,
    }
}

#[test]
fn key_lifecycle_then_generation_contract() {
    let mut server = gemini_server::start();
    let probe = gemini_server::expect_request(
        &mut server,
        "AIza-lib",
        200,
        &gemini_server::text_response("ok"),
    );
    let dir = TempDir::new().unwrap();

    let ctx = create_context_with(&sources(&dir, Some(server.url())), ClientMode::Live)
        .expect("context");
    assert!(!status::execute(&ctx).has_valid_keys);

    assert_eq!(keys::set(&ctx, "gemini", "AIza-lib").unwrap(), KeyStatus::Valid);
    probe.assert();
    probe.remove();

    let generation = gemini_server::expect_request(
        &mut server,
        "AIza-lib",
        200,
        &gemini_server::text_response("=== PRODUCTO 1 ===\nNOMBRE: Pilates Home\n"),
    );
    let reopened =
        create_context_with(&sources(&dir, Some(server.url())), ClientMode::Live).unwrap();
    let found = products::execute(&reopened, &ProductBrief::default()).unwrap();
    generation.assert();

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].name, "Pilates Home");
    assert_eq!(found[0].score, 8.5);
}

#[test]
fn mock_context_generates_copy_offline() {
    let dir = TempDir::new().unwrap();
    let ctx = create_context_with(&sources(&dir, None), ClientMode::Mock).unwrap();
    keys::set(&ctx, "gemini", "any").unwrap();

    let result = copy::execute(&ctx, &Default::default()).unwrap();
    assert!(!result.is_empty());
    assert_eq!(result.facebook.primary_texts.len(), 2);
}
