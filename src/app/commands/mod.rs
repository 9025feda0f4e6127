pub mod copy;
pub mod keys;
pub mod products;
pub mod status;

use crate::app::AppContext;
use crate::domain::{AppError, PROVIDERS};
use crate::ports::{GenerationClient, KeyStorage};

/// A user-triggered operation.
///
/// Every externally visible failure of an action collapses to one message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    DetectProducts,
    GenerateCopy,
    TestKey,
}

impl Action {
    pub fn failure_message(self) -> &'static str {
        match self {
            Action::DetectProducts => "Error generating products. Check your API key.",
            Action::GenerateCopy => "Error generating copy. Check your API key.",
            Action::TestKey => "Key validation failed. Check the key and try again.",
        }
    }
}

/// Provider, secret and client used for a generation request.
pub(crate) struct Credentials<'a> {
    pub provider_id: String,
    pub secret: String,
    pub client: &'a (dyn GenerationClient + Send + Sync),
}

/// Pick the first validated provider, in catalog order.
pub(crate) fn active_credentials<S: KeyStorage>(
    ctx: &AppContext<S>,
) -> Result<Credentials<'_>, AppError> {
    let valid = ctx.keys().valid_providers();
    let provider_id = PROVIDERS
        .iter()
        .map(|provider| provider.id.to_string())
        .find(|id| valid.contains(id))
        .or_else(|| valid.first().cloned())
        .ok_or(AppError::NoValidProvider)?;

    let secret = ctx
        .keys()
        .get(&provider_id)
        .map(|key| key.secret)
        .ok_or_else(|| AppError::MissingKey(provider_id.clone()))?;
    let client = ctx
        .clients()
        .get(&provider_id)
        .ok_or_else(|| AppError::ProviderNotSupported(provider_id.clone()))?;

    tracing::debug!(provider = %provider_id, "selected provider for generation");
    Ok(Credentials { provider_id, secret, client })
}
