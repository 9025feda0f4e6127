//! Key management: list, set and test provider keys.

use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::app::AppContext;
use crate::domain::{AppError, KeyStatus, PROVIDERS, find_provider};
use crate::ports::KeyStorage;

/// One row of the key overview. Never carries the secret itself.
#[derive(Debug, Clone, Serialize)]
pub struct KeySummary {
    pub provider: String,
    pub display_name: String,
    pub free_tier: String,
    /// Page where a key for the provider is created.
    pub console_url: String,
    pub status: KeyStatus,
    /// Short digest identifying the stored secret.
    pub fingerprint: Option<String>,
    pub probe_supported: bool,
}

/// Summaries for every catalog provider, in catalog order.
pub fn list<S: KeyStorage>(ctx: &AppContext<S>) -> Vec<KeySummary> {
    let keys = ctx.keys().collection();
    PROVIDERS
        .iter()
        .map(|provider| {
            let stored = keys.get(provider.id);
            KeySummary {
                provider: provider.id.to_string(),
                display_name: provider.display_name.to_string(),
                free_tier: provider.free_tier.to_string(),
                console_url: provider.console_url.to_string(),
                status: stored.map(|key| key.status).unwrap_or_default(),
                fingerprint: stored
                    .filter(|key| !key.secret.is_empty())
                    .map(|key| fingerprint(&key.secret)),
                probe_supported: provider.probe_supported,
            }
        })
        .collect()
}

/// Store a key and validate it right away.
///
/// The key is only written to disk once a probe accepts it. An empty secret
/// leaves an `unset` entry and skips validation.
pub fn set<S: KeyStorage>(
    ctx: &AppContext<S>,
    provider_id: &str,
    secret: &str,
) -> Result<KeyStatus, AppError> {
    let provider = find_provider(provider_id)?;
    let secret = secret.trim();
    ctx.keys().update(provider.id, secret);

    if secret.is_empty() {
        return Ok(KeyStatus::Unset);
    }
    ctx.validator().validate(ctx.keys(), provider.id)
}

/// Re-validate the stored key for a provider.
pub fn test<S: KeyStorage>(ctx: &AppContext<S>, provider_id: &str) -> Result<KeyStatus, AppError> {
    ctx.validator().validate(ctx.keys(), provider_id)
}

fn fingerprint(secret: &str) -> String {
    let digest = Sha256::digest(secret.as_bytes());
    let hex: String = digest.iter().take(6).map(|byte| format!("{:02x}", byte)).collect();
    format!("sha256:{}", hex)
}
