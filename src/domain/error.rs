use std::io;

use thiserror::Error;

/// Library-wide error type for marketinsight operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Configuration values failed validation.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    /// Persisted key snapshot could not be decoded.
    #[error("Stored API keys are unreadable: {0}")]
    StorageReadError(String),

    /// Provider identifier is not part of the catalog.
    #[error("Unknown provider '{0}'. Known providers: gemini, openai, together, cohere")]
    UnknownProvider(String),

    /// No secret stored for the provider.
    #[error("No API key configured for '{0}'")]
    MissingKey(String),

    /// No provider has a validated key.
    #[error("No validated API key. Run 'marketinsight keys set gemini' first.")]
    NoValidProvider,

    /// Provider has no generation implementation.
    #[error("Provider '{0}' does not support text generation yet")]
    ProviderNotSupported(String),

    /// Provider answered with a non-success status, or the request never completed.
    #[error("Provider request failed{}: {message}", status_suffix(.status))]
    ProviderError { message: String, status: Option<u16> },

    /// Provider answered successfully but the payload lacks the expected fields.
    #[error("Malformed provider response: {0}")]
    MalformedResponseError(String),

    /// Prompt template rendering failed.
    #[error("Prompt rendering failed: {0}")]
    PromptRenderError(String),

    /// JSON serialization failure.
    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML serialization failure.
    #[error("YAML serialization failed: {0}")]
    YamlSerialization(#[from] serde_yaml::Error),

    /// Interactive prompt failed or was cancelled.
    #[error("Interactive input failed: {0}")]
    Interactive(String),
}

fn status_suffix(status: &Option<u16>) -> String {
    status.map(|code| format!(" (status {})", code)).unwrap_or_default()
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// Whether the failure came from talking to the provider.
    pub fn is_provider_failure(&self) -> bool {
        matches!(self, AppError::ProviderError { .. } | AppError::MalformedResponseError(_))
    }

    /// Provide an `io::ErrorKind`-like view for callers mapping to exit codes.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::Configuration(_)
            | AppError::InvalidConfig(_)
            | AppError::TomlParseError(_)
            | AppError::StorageReadError(_)
            | AppError::UnknownProvider(_)
            | AppError::PromptRenderError(_)
            | AppError::Serialization(_)
            | AppError::YamlSerialization(_) => io::ErrorKind::InvalidInput,
            AppError::MissingKey(_) | AppError::NoValidProvider => io::ErrorKind::NotFound,
            AppError::ProviderNotSupported(_) => io::ErrorKind::Unsupported,
            AppError::ProviderError { .. } | AppError::MalformedResponseError(_) => {
                io::ErrorKind::Other
            }
            AppError::Interactive(_) => io::ErrorKind::Interrupted,
        }
    }
}
