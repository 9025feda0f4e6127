//! Application configuration domain models.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::AppError;

/// Configuration loaded from `config.toml` in the data directory.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Key snapshot storage configuration.
    #[serde(default)]
    pub storage: StorageConfig,
    /// Gemini API configuration.
    #[serde(default)]
    pub gemini: GeminiApiConfig,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        self.gemini.validate()?;
        Ok(())
    }
}

/// Where the key snapshot lives.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StorageConfig {
    /// Explicit snapshot path; defaults to the data directory.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// Gemini API configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeminiApiConfig {
    /// API base URL (the version root, without `/models`).
    #[serde(default = "default_api_url")]
    pub api_url: Url,
    /// Model name used for generation and probes.
    #[serde(default = "default_model")]
    pub model: String,
    /// Sampling temperature for generation.
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    /// Output token budget for generation.
    #[serde(default = "default_max_output_tokens")]
    pub max_output_tokens: u32,
    /// Prompt sent by validation probes.
    #[serde(default = "default_probe_prompt")]
    pub probe_prompt: String,
    /// Output token cap for validation probes.
    #[serde(default = "default_probe_max_output_tokens")]
    pub probe_max_output_tokens: u32,
    /// Request timeout in seconds; the transport default applies when unset.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Default for GeminiApiConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            model: default_model(),
            temperature: default_temperature(),
            max_output_tokens: default_max_output_tokens(),
            probe_prompt: default_probe_prompt(),
            probe_max_output_tokens: default_probe_max_output_tokens(),
            timeout_secs: None,
        }
    }
}

impl GeminiApiConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if !matches!(self.api_url.scheme(), "http" | "https") {
            return Err(AppError::InvalidConfig(format!(
                "gemini.api_url must be http(s), got '{}'",
                self.api_url
            )));
        }
        if self.api_url.cannot_be_a_base() {
            return Err(AppError::InvalidConfig("gemini.api_url must be a base URL".to_string()));
        }
        if self.model.trim().is_empty() {
            return Err(AppError::InvalidConfig("gemini.model must not be empty".to_string()));
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(AppError::InvalidConfig(
                "gemini.temperature must be between 0.0 and 2.0".to_string(),
            ));
        }
        if self.max_output_tokens == 0 {
            return Err(AppError::InvalidConfig(
                "gemini.max_output_tokens must be greater than 0".to_string(),
            ));
        }
        if self.probe_max_output_tokens == 0 {
            return Err(AppError::InvalidConfig(
                "gemini.probe_max_output_tokens must be greater than 0".to_string(),
            ));
        }
        if self.timeout_secs == Some(0) {
            return Err(AppError::InvalidConfig(
                "gemini.timeout_secs must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

fn default_api_url() -> Url {
    Url::parse("https://generativelanguage.googleapis.com/v1beta")
        .expect("Default API URL must be valid")
}

fn default_model() -> String {
    "gemini-pro".to_string()
}

fn default_temperature() -> f32 {
    0.2
}

fn default_max_output_tokens() -> u32 {
    8192
}

fn default_probe_prompt() -> String {
    "Test connection".to_string()
}

fn default_probe_max_output_tokens() -> u32 {
    5
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_gemini_generation_settings() {
        let config = GeminiApiConfig::default();
        assert_eq!(config.api_url.as_str(), "https://generativelanguage.googleapis.com/v1beta");
        assert_eq!(config.model, "gemini-pro");
        assert_eq!(config.temperature, 0.2);
        assert_eq!(config.max_output_tokens, 8192);
        assert_eq!(config.probe_max_output_tokens, 5);
        assert!(config.timeout_secs.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_zero_timeout() {
        let config = GeminiApiConfig { timeout_secs: Some(0), ..GeminiApiConfig::default() };
        assert!(matches!(config.validate(), Err(AppError::InvalidConfig(_))));
    }

    #[test]
    fn rejects_non_http_url() {
        let config = GeminiApiConfig {
            api_url: Url::parse("ftp://example.com/v1").unwrap(),
            ..GeminiApiConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
