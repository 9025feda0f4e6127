//! Gemini `generateContent` client implementation using reqwest.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::{AppError, GeminiApiConfig};
use crate::ports::GenerationClient;

const DEFAULT_STATUS_MESSAGE: &str = "Gemini API request failed";

/// HTTP transport for the Gemini API.
///
/// One request per call; no retries.
#[derive(Clone)]
pub struct HttpGeminiClient {
    endpoint: Url,
    config: GeminiApiConfig,
    client: Client,
}

impl std::fmt::Debug for HttpGeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpGeminiClient")
            .field("endpoint", &self.endpoint)
            .field("model", &self.config.model)
            .finish()
    }
}

impl HttpGeminiClient {
    pub fn new(config: &GeminiApiConfig) -> Result<Self, AppError> {
        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build().map_err(|e| AppError::ProviderError {
            message: format!("Failed to create HTTP client: {}", e),
            status: None,
        })?;

        Ok(Self { endpoint: generate_content_url(config)?, config: config.clone(), client })
    }

    fn send_request(&self, secret: &str, request: &ApiRequest) -> Result<String, AppError> {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut().append_pair("key", secret);

        tracing::debug!(
            endpoint = %self.endpoint,
            max_output_tokens = request.generation_config.max_output_tokens,
            "sending generateContent request"
        );

        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .json(request)
            .send()
            .map_err(|e| AppError::ProviderError {
                // The URL carries the secret; keep it out of the message.
                message: format!("HTTP request failed: {}", e.without_url()),
                status: None,
            })?;

        let status = response.status();
        let body_text = response.text().unwrap_or_default();
        tracing::debug!(status = status.as_u16(), "generateContent responded");

        if status.is_success() {
            let api_response: ApiResponse = serde_json::from_str(&body_text).map_err(|e| {
                AppError::MalformedResponseError(format!("response is not valid JSON: {}", e))
            })?;
            return api_response.into_text();
        }

        let message = extract_error_message(&body_text).unwrap_or_else(|| {
            if status.as_u16() == 429 {
                "Rate limited".to_string()
            } else if status.is_server_error() {
                "Server error".to_string()
            } else {
                DEFAULT_STATUS_MESSAGE.to_string()
            }
        });

        Err(AppError::ProviderError { message, status: Some(status.as_u16()) })
    }
}

/// `{api_url}/models/{model}:generateContent`
fn generate_content_url(config: &GeminiApiConfig) -> Result<Url, AppError> {
    let mut url = config.api_url.clone();
    url.path_segments_mut()
        .map_err(|_| AppError::InvalidConfig("gemini.api_url must be a base URL".to_string()))?
        .pop_if_empty()
        .push("models")
        .push(&format!("{}:generateContent", config.model));
    Ok(url)
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ApiRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

impl ApiRequest {
    fn user_prompt(prompt: &str, generation_config: GenerationConfig) -> Self {
        Self {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part { text: Some(prompt.to_string()) }],
            }],
            generation_config,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    max_output_tokens: u32,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<Content>,
}

impl ApiResponse {
    /// Walk `candidates[0].content.parts[0].text`, naming the first missing step.
    fn into_text(self) -> Result<String, AppError> {
        let candidate = self
            .candidates
            .into_iter()
            .next()
            .ok_or_else(|| AppError::MalformedResponseError("no candidates".into()))?;
        let content = candidate
            .content
            .ok_or_else(|| AppError::MalformedResponseError("candidate has no content".into()))?;
        let part = content
            .parts
            .into_iter()
            .next()
            .ok_or_else(|| AppError::MalformedResponseError("content has no parts".into()))?;
        part.text.ok_or_else(|| AppError::MalformedResponseError("part has no text".into()))
    }
}

fn extract_error_message(body: &str) -> Option<String> {
    if body.trim().is_empty() {
        return None;
    }

    let parsed = serde_json::from_str::<serde_json::Value>(body).ok()?;

    if let Some(msg) = parsed
        .get("error")
        .and_then(|error| error.get("message"))
        .and_then(|message| message.as_str())
    {
        return Some(msg.to_string());
    }

    parsed.get("message").and_then(|message| message.as_str()).map(ToOwned::to_owned)
}

impl GenerationClient for HttpGeminiClient {
    fn generate(&self, secret: &str, prompt: &str) -> Result<String, AppError> {
        let request = ApiRequest::user_prompt(
            prompt,
            GenerationConfig {
                temperature: Some(self.config.temperature),
                max_output_tokens: self.config.max_output_tokens,
            },
        );
        self.send_request(secret, &request)
    }

    fn probe(&self, secret: &str) -> Result<(), AppError> {
        let request = ApiRequest::user_prompt(
            &self.config.probe_prompt,
            GenerationConfig {
                temperature: None,
                max_output_tokens: self.config.probe_max_output_tokens,
            },
        );

        match self.send_request(secret, &request) {
            Ok(_) => Ok(()),
            // A success status is enough for a probe; a tiny token cap may leave no text.
            Err(AppError::MalformedResponseError(_)) => Ok(()),
            Err(err) => Err(err),
        }
    }
}
