use crate::app::services::key_store::{KeyStore, ProbeOutcome};
use crate::app::services::provider_clients::ProviderClients;
use crate::domain::{AppError, KeyStatus, find_provider};
use crate::ports::KeyStorage;

/// Probes provider keys and records the outcome in the key store.
#[derive(Debug, Clone, Copy)]
pub struct KeyValidator<'a> {
    clients: &'a ProviderClients,
}

impl<'a> KeyValidator<'a> {
    pub fn new(clients: &'a ProviderClients) -> Self {
        Self { clients }
    }

    /// Validate the stored key for `provider_id`.
    ///
    /// Sends exactly one probe when the provider has an implementation and
    /// returns the resulting status. Transport failures and rejected keys both
    /// resolve to `invalid`. Providers without a probe stay `unset` and no
    /// request is made.
    pub fn validate<S: KeyStorage>(
        &self,
        store: &KeyStore<S>,
        provider_id: &str,
    ) -> Result<KeyStatus, AppError> {
        let provider = find_provider(provider_id)?;
        match store.get(provider.id) {
            Some(key) if !key.secret.is_empty() => {}
            _ => return Err(AppError::MissingKey(provider.id.to_string())),
        }

        let client = match self.clients.get(provider.id) {
            Some(client) if provider.probe_supported => client,
            _ => {
                tracing::info!(provider = provider.id, "no validation probe for provider");
                return Ok(store.status(provider.id));
            }
        };

        let ticket = store.begin_probe(provider.id)?;
        let status = match client.probe(ticket.secret()) {
            Ok(()) => KeyStatus::Valid,
            Err(err) => {
                tracing::debug!(provider = provider.id, error = %err, "probe rejected");
                KeyStatus::Invalid
            }
        };

        match store.finish_probe(ticket, status)? {
            ProbeOutcome::Applied(status) => Ok(status),
            ProbeOutcome::Superseded => Ok(store.status(provider.id)),
        }
    }
}
