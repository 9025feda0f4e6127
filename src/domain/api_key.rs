//! API key records and the persisted key collection.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Validation state of a stored key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyStatus {
    /// Stored but never validated (or edited since the last probe).
    #[default]
    #[serde(rename = "not_configured", alias = "unset")]
    Unset,
    Valid,
    Invalid,
    /// A probe is outstanding.
    Testing,
}

impl KeyStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            KeyStatus::Unset => "unset",
            KeyStatus::Valid => "valid",
            KeyStatus::Invalid => "invalid",
            KeyStatus::Testing => "testing",
        }
    }
}

impl std::fmt::Display for KeyStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A provider secret and its validation state.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiKey {
    #[serde(rename = "key")]
    pub secret: String,
    pub status: KeyStatus,
    #[serde(rename = "provider")]
    pub provider_id: String,
}

impl ApiKey {
    pub fn unset(provider_id: &str, secret: &str) -> Self {
        Self {
            secret: secret.to_string(),
            status: KeyStatus::Unset,
            provider_id: provider_id.to_string(),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.status == KeyStatus::Valid
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiKey")
            .field("secret", &"[REDACTED]")
            .field("status", &self.status)
            .field("provider_id", &self.provider_id)
            .finish()
    }
}

/// Mapping from provider id to its key, persisted as one snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApiKeyCollection {
    entries: BTreeMap<String, ApiKey>,
}

impl ApiKeyCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, provider_id: &str) -> Option<&ApiKey> {
        self.entries.get(provider_id)
    }

    pub fn get_mut(&mut self, provider_id: &str) -> Option<&mut ApiKey> {
        self.entries.get_mut(provider_id)
    }

    pub fn insert(&mut self, key: ApiKey) {
        self.entries.insert(key.provider_id.clone(), key);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ApiKey)> {
        self.entries.iter().map(|(id, key)| (id.as_str(), key))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True when at least one provider holds a validated key.
    pub fn has_valid_keys(&self) -> bool {
        self.entries.values().any(ApiKey::is_valid)
    }

    /// Provider ids with a validated key, in ascending id order.
    pub fn valid_providers(&self) -> Vec<String> {
        self.entries.iter().filter(|(_, key)| key.is_valid()).map(|(id, _)| id.clone()).collect()
    }

    /// Reset entries left in `testing` by an earlier process.
    pub(crate) fn settle_stale_probes(&mut self) {
        for key in self.entries.values_mut() {
            if key.status == KeyStatus::Testing {
                key.status = KeyStatus::Unset;
            }
        }
    }
}
