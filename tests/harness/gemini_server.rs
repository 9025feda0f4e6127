//! Stub Gemini endpoint built on mockito.

use mockito::{Matcher, Mock, Server, ServerGuard};

pub(crate) const GENERATE_PATH: &str = "/models/gemini-pro:generateContent";

pub(crate) fn start() -> ServerGuard {
    Server::new()
}

/// JSON body of a successful `generateContent` response.
pub(crate) fn text_response(text: &str) -> String {
    serde_json::json!({
        "candidates": [{ "content": { "role": "model", "parts": [{ "text": text }] } }]
    })
    .to_string()
}

/// Expect one request for `secret` answered with `status` and `body`.
pub(crate) fn expect_request(
    server: &mut ServerGuard,
    secret: &str,
    status: usize,
    body: &str,
) -> Mock {
    server
        .mock("POST", GENERATE_PATH)
        .match_query(Matcher::UrlEncoded("key".into(), secret.into()))
        .with_status(status)
        .with_header("content-type", "application/json")
        .with_body(body)
        .expect(1)
        .create()
}
