//! API facade for the application.
//!
//! Each function resolves configuration from the environment, opens the key
//! store and runs one command.

use crate::adapters::FilesystemKeyStorage;
use crate::app::AppContext;
use crate::app::commands;
use crate::app::services::ProviderClients;
use crate::domain::configuration::{key_snapshot_path, load_config};
use crate::domain::{ConfigSources, CopyBrief, KeyStatus, ProductBrief};

pub use crate::app::commands::Action;
pub use crate::app::commands::keys::KeySummary;
pub use crate::app::commands::status::{ModuleInfo, StatusReport};
pub use crate::app::output::OutputFormat;
pub use crate::domain::{AppError, CopyResult, Product};

/// Which generation clients a context is built with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClientMode {
    /// Real HTTP requests to the provider.
    #[default]
    Live,
    /// Canned responses, no network. The key snapshot is read but never written.
    Mock,
    /// No clients at all; for commands that never reach a provider.
    Offline,
}

/// Build a context from process environment and configuration files.
pub fn create_context(mode: ClientMode) -> Result<AppContext<FilesystemKeyStorage>, AppError> {
    create_context_with(&ConfigSources::from_env()?, mode)
}

/// Build a context from explicit configuration sources.
pub fn create_context_with(
    sources: &ConfigSources,
    mode: ClientMode,
) -> Result<AppContext<FilesystemKeyStorage>, AppError> {
    let config = load_config(sources)?;
    let path = key_snapshot_path(&config, sources);
    let storage = match mode {
        ClientMode::Mock => FilesystemKeyStorage::read_only(path),
        ClientMode::Live | ClientMode::Offline => FilesystemKeyStorage::new(path),
    };
    tracing::debug!(path = %storage.path().display(), ?mode, "opening key store");

    let clients = match mode {
        ClientMode::Live => ProviderClients::http(&config.gemini)?,
        ClientMode::Mock => ProviderClients::mock(),
        ClientMode::Offline => ProviderClients::new(),
    };
    AppContext::new(storage, clients)
}

/// Dashboard summary: whether any key is validated and which modules exist.
pub fn status() -> Result<StatusReport, AppError> {
    let ctx = create_context(ClientMode::Offline)?;
    Ok(commands::status::execute(&ctx))
}

// =============================================================================
// Key API
// =============================================================================

pub fn list_keys() -> Result<Vec<KeySummary>, AppError> {
    let ctx = create_context(ClientMode::Offline)?;
    Ok(commands::keys::list(&ctx))
}

/// Store a key for `provider_id` and validate it. Only accepted keys are persisted.
pub fn set_key(provider_id: &str, secret: &str, mode: ClientMode) -> Result<KeyStatus, AppError> {
    let ctx = create_context(mode)?;
    commands::keys::set(&ctx, provider_id, secret)
}

/// Re-validate the stored key for `provider_id`.
pub fn test_key(provider_id: &str, mode: ClientMode) -> Result<KeyStatus, AppError> {
    let ctx = create_context(mode)?;
    commands::keys::test(&ctx, provider_id)
}

// =============================================================================
// Generation API
// =============================================================================

pub fn detect_products(brief: &ProductBrief, mode: ClientMode) -> Result<Vec<Product>, AppError> {
    let ctx = create_context(mode)?;
    commands::products::execute(&ctx, brief)
}

pub fn preview_products(brief: &ProductBrief) -> Result<String, AppError> {
    let ctx = create_context(ClientMode::Offline)?;
    commands::products::preview(&ctx, brief)
}

pub fn generate_copy(brief: &CopyBrief, mode: ClientMode) -> Result<CopyResult, AppError> {
    let ctx = create_context(mode)?;
    commands::copy::execute(&ctx, brief)
}

pub fn preview_copy(brief: &CopyBrief) -> Result<String, AppError> {
    let ctx = create_context(ClientMode::Offline)?;
    commands::copy::preview(&ctx, brief)
}
