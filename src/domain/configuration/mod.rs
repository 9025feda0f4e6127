pub mod app_config;
pub mod loader;

pub use app_config::{AppConfig, GeminiApiConfig, StorageConfig};
pub use loader::{ConfigSources, key_snapshot_path, load_config, parse_config_content};
