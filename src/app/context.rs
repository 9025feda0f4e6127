use crate::app::services::{KeyStore, KeyValidator, ProviderClients};
use crate::domain::{AppError, PromptBuilder};
use crate::ports::KeyStorage;

/// Application context holding dependencies for command execution.
#[derive(Debug)]
pub struct AppContext<S: KeyStorage> {
    keys: KeyStore<S>,
    clients: ProviderClients,
    prompts: PromptBuilder,
}

impl<S: KeyStorage> AppContext<S> {
    /// Create a new application context, loading the key snapshot from `storage`.
    pub fn new(storage: S, clients: ProviderClients) -> Result<Self, AppError> {
        Ok(Self { keys: KeyStore::load(storage), clients, prompts: PromptBuilder::new()? })
    }

    /// Get a reference to the key store.
    pub fn keys(&self) -> &KeyStore<S> {
        &self.keys
    }

    /// Get a reference to the provider clients.
    pub fn clients(&self) -> &ProviderClients {
        &self.clients
    }

    /// Get a reference to the prompt builder.
    pub fn prompts(&self) -> &PromptBuilder {
        &self.prompts
    }

    /// Validator bound to this context's clients.
    pub fn validator(&self) -> KeyValidator<'_> {
        KeyValidator::new(&self.clients)
    }
}
