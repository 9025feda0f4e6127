use std::collections::BTreeMap;

use crate::adapters::HttpGeminiClient;
use crate::domain::{AppError, GEMINI, GeminiApiConfig};
use crate::ports::{GenerationClient, MockGenerationClient};

type SharedClient = Box<dyn GenerationClient + Send + Sync>;

/// Generation clients keyed by provider id.
///
/// Providers without an entry have no probe or generation implementation.
#[derive(Default)]
pub struct ProviderClients {
    clients: BTreeMap<String, SharedClient>,
}

impl std::fmt::Debug for ProviderClients {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderClients").field("providers", &self.clients.keys()).finish()
    }
}

impl ProviderClients {
    pub fn new() -> Self {
        Self::default()
    }

    /// Live HTTP clients for every implemented provider.
    pub fn http(config: &GeminiApiConfig) -> Result<Self, AppError> {
        Ok(Self::new().with(GEMINI, HttpGeminiClient::new(config)?))
    }

    /// Offline clients returning canned responses.
    pub fn mock() -> Self {
        Self::new().with(GEMINI, MockGenerationClient)
    }

    pub fn with<C>(mut self, provider_id: &str, client: C) -> Self
    where
        C: GenerationClient + Send + Sync + 'static,
    {
        self.clients.insert(provider_id.to_string(), Box::new(client));
        self
    }

    pub fn get(&self, provider_id: &str) -> Option<&(dyn GenerationClient + Send + Sync)> {
        self.clients.get(provider_id).map(|client| client.as_ref())
    }
}
