//! Catalog of supported language-model providers.

use serde::Serialize;

use crate::domain::AppError;

pub const GEMINI: &str = "gemini";

/// Static description of a provider the user can store a key for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProviderInfo {
    pub id: &'static str,
    pub display_name: &'static str,
    /// Free-tier allowance shown next to the provider.
    pub free_tier: &'static str,
    /// Where to create a key.
    pub instructions: &'static str,
    pub console_url: &'static str,
    pub key_placeholder: &'static str,
    /// Whether a validation probe and generation client exist.
    pub probe_supported: bool,
}

pub const PROVIDERS: &[ProviderInfo] = &[
    ProviderInfo {
        id: GEMINI,
        display_name: "Google Gemini Pro",
        free_tier: "60 requests/minute free",
        instructions: "makersuite.google.com -> API Key -> Create API key",
        console_url: "https://makersuite.google.com/app/apikey",
        key_placeholder: "AIzaSy...",
        probe_supported: true,
    },
    ProviderInfo {
        id: "openai",
        display_name: "OpenAI GPT-3.5",
        free_tier: "$5 initial credit",
        instructions: "platform.openai.com -> API Keys -> Create new secret key",
        console_url: "https://platform.openai.com/api-keys",
        key_placeholder: "sk-...",
        probe_supported: false,
    },
    ProviderInfo {
        id: "together",
        display_name: "Together.ai",
        free_tier: "$25 initial credit",
        instructions: "api.together.xyz -> Settings -> API Keys -> New API Key",
        console_url: "https://api.together.xyz/settings/api-keys",
        key_placeholder: "together-...",
        probe_supported: false,
    },
    ProviderInfo {
        id: "cohere",
        display_name: "Cohere Command",
        free_tier: "1000 calls/month free",
        instructions: "dashboard.cohere.ai -> API Keys -> Create API Key",
        console_url: "https://dashboard.cohere.ai/api-keys",
        key_placeholder: "co-...",
        probe_supported: false,
    },
];

/// Look up a provider by id (exact, lowercase).
pub fn find_provider(id: &str) -> Result<&'static ProviderInfo, AppError> {
    PROVIDERS
        .iter()
        .find(|provider| provider.id == id)
        .ok_or_else(|| AppError::UnknownProvider(id.to_string()))
}
