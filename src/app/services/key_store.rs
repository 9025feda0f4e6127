//! In-memory key collection mirrored to durable storage.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::domain::{ApiKey, ApiKeyCollection, AppError, KeyStatus};
use crate::ports::KeyStorage;

/// Proof that a probe was started for a provider.
///
/// Only the most recently issued ticket for a provider may settle its status.
#[derive(Debug)]
pub struct ProbeTicket {
    provider_id: String,
    secret: String,
    id: u64,
}

impl ProbeTicket {
    pub fn provider_id(&self) -> &str {
        &self.provider_id
    }

    pub fn secret(&self) -> &str {
        &self.secret
    }
}

/// Result of settling a probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeOutcome {
    Applied(KeyStatus),
    /// A newer probe or key edit replaced this one; nothing changed.
    Superseded,
}

#[derive(Debug, Default)]
struct StoreState {
    keys: ApiKeyCollection,
    in_flight: HashMap<String, u64>,
    next_ticket: u64,
}

/// Key collection guarded by a mutex.
///
/// Read-modify-persist sequences run under the lock, so a settled probe and
/// the snapshot written for it cannot interleave with another update.
#[derive(Debug)]
pub struct KeyStore<S: KeyStorage> {
    storage: S,
    state: Mutex<StoreState>,
}

impl<S: KeyStorage> KeyStore<S> {
    /// Load the persisted collection, falling back to empty when it is absent or unreadable.
    pub fn load(storage: S) -> Self {
        let keys = match read_collection(&storage) {
            Ok(keys) => keys,
            Err(err) => {
                tracing::warn!(error = %err, "ignoring stored API keys");
                ApiKeyCollection::new()
            }
        };
        tracing::debug!(entries = keys.len(), "key store loaded");

        Self { storage, state: Mutex::new(StoreState { keys, ..StoreState::default() }) }
    }

    fn lock(&self) -> MutexGuard<'_, StoreState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Copy of the current collection.
    pub fn collection(&self) -> ApiKeyCollection {
        self.lock().keys.clone()
    }

    pub fn get(&self, provider_id: &str) -> Option<ApiKey> {
        self.lock().keys.get(provider_id).cloned()
    }

    pub fn status(&self, provider_id: &str) -> KeyStatus {
        self.lock().keys.get(provider_id).map(|key| key.status).unwrap_or_default()
    }

    pub fn has_valid_keys(&self) -> bool {
        self.lock().keys.has_valid_keys()
    }

    pub fn valid_providers(&self) -> Vec<String> {
        self.lock().keys.valid_providers()
    }

    /// Upsert a key with status `unset`. Not persisted.
    ///
    /// Any probe in flight for the provider is superseded.
    pub fn update(&self, provider_id: &str, secret: &str) {
        let mut state = self.lock();
        state.keys.insert(ApiKey::unset(provider_id, secret));
        if state.in_flight.remove(provider_id).is_some() {
            tracing::debug!(provider = provider_id, "key edited while a probe was in flight");
        }
    }

    /// Write the whole collection, replacing the previous snapshot.
    pub fn persist(&self) -> Result<(), AppError> {
        let state = self.lock();
        self.write(&state.keys)
    }

    /// Mark the provider as `testing` and hand out a ticket for the probe.
    pub fn begin_probe(&self, provider_id: &str) -> Result<ProbeTicket, AppError> {
        let mut state = self.lock();
        let secret = match state.keys.get(provider_id) {
            Some(key) if !key.secret.is_empty() => key.secret.clone(),
            _ => return Err(AppError::MissingKey(provider_id.to_string())),
        };

        state.next_ticket += 1;
        let id = state.next_ticket;
        state.in_flight.insert(provider_id.to_string(), id);
        if let Some(key) = state.keys.get_mut(provider_id) {
            key.status = KeyStatus::Testing;
        }

        Ok(ProbeTicket { provider_id: provider_id.to_string(), secret, id })
    }

    /// Apply a probe result if the ticket is still current.
    ///
    /// A `valid` result is persisted before the lock is released and only
    /// takes effect in memory once the write succeeded. A failed write leaves
    /// the key `unset`. Other results stay in memory.
    pub fn finish_probe(
        &self,
        ticket: ProbeTicket,
        status: KeyStatus,
    ) -> Result<ProbeOutcome, AppError> {
        let mut state = self.lock();
        if state.in_flight.get(&ticket.provider_id) != Some(&ticket.id) {
            tracing::debug!(provider = %ticket.provider_id, "discarding superseded probe result");
            return Ok(ProbeOutcome::Superseded);
        }
        state.in_flight.remove(&ticket.provider_id);

        if state.keys.get(&ticket.provider_id).is_none() {
            return Ok(ProbeOutcome::Superseded);
        }

        if status == KeyStatus::Valid {
            let mut settled = state.keys.clone();
            set_status(&mut settled, &ticket.provider_id, status);
            if let Err(err) = self.write(&settled) {
                tracing::warn!(provider = %ticket.provider_id, error = %err, "valid key not saved");
                set_status(&mut state.keys, &ticket.provider_id, KeyStatus::Unset);
                return Err(err);
            }
            state.keys = settled;
        } else {
            set_status(&mut state.keys, &ticket.provider_id, status);
        }

        tracing::info!(provider = %ticket.provider_id, status = %status, "key validation settled");
        Ok(ProbeOutcome::Applied(status))
    }

    fn write(&self, keys: &ApiKeyCollection) -> Result<(), AppError> {
        let snapshot = serde_json::to_string(keys)?;
        self.storage.write_snapshot(&snapshot)
    }
}

fn set_status(keys: &mut ApiKeyCollection, provider_id: &str, status: KeyStatus) {
    if let Some(key) = keys.get_mut(provider_id) {
        key.status = status;
    }
}

fn read_collection<S: KeyStorage>(storage: &S) -> Result<ApiKeyCollection, AppError> {
    let Some(raw) = storage.read_snapshot()? else {
        return Ok(ApiKeyCollection::new());
    };
    let mut keys: ApiKeyCollection =
        serde_json::from_str(&raw).map_err(|err| AppError::StorageReadError(err.to_string()))?;
    keys.settle_stale_probes();
    Ok(keys)
}
