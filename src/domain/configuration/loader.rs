//! Configuration loading from the data directory and environment.

use std::fs;
use std::path::{Path, PathBuf};

use url::Url;

use crate::domain::{AppConfig, AppError};

/// Overrides the data directory (`$HOME/.marketinsight` by default).
pub const DATA_DIR_ENV: &str = "MARKETINSIGHT_HOME";
/// Points at an explicit config file.
pub const CONFIG_PATH_ENV: &str = "MARKETINSIGHT_CONFIG";
/// Overrides `gemini.api_url`.
pub const GEMINI_API_URL_ENV: &str = "MARKETINSIGHT_GEMINI_API_URL";

pub const DATA_DIR_NAME: &str = ".marketinsight";
pub const CONFIG_FILE: &str = "config.toml";
/// Namespaced snapshot holding every stored key.
pub const KEY_SNAPSHOT_FILE: &str = "marketinsight_api_keys.json";

/// Where configuration comes from, resolved once per process.
#[derive(Debug, Clone)]
pub struct ConfigSources {
    pub data_dir: PathBuf,
    pub config_path: Option<PathBuf>,
    pub api_url_override: Option<String>,
}

impl ConfigSources {
    /// Resolve sources from process environment variables.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Resolve sources through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let data_dir = match non_empty(DATA_DIR_ENV) {
            Some(dir) => PathBuf::from(dir),
            None => {
                let home = non_empty("HOME").or_else(|| non_empty("USERPROFILE")).ok_or_else(
                    || {
                        AppError::config_error(format!(
                            "Cannot locate a home directory; set {}",
                            DATA_DIR_ENV
                        ))
                    },
                )?;
                PathBuf::from(home).join(DATA_DIR_NAME)
            }
        };

        Ok(Self {
            data_dir,
            config_path: non_empty(CONFIG_PATH_ENV).map(PathBuf::from),
            api_url_override: non_empty(GEMINI_API_URL_ENV),
        })
    }
}

/// Load configuration: explicit file, else `<data dir>/config.toml` when present, else defaults.
pub fn load_config(sources: &ConfigSources) -> Result<AppConfig, AppError> {
    let mut config = match &sources.config_path {
        Some(path) => {
            if !path.exists() {
                return Err(AppError::config_error(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
            read_config_file(path)?
        }
        None => {
            let default_path = sources.data_dir.join(CONFIG_FILE);
            if default_path.exists() { read_config_file(&default_path)? } else { AppConfig::default() }
        }
    };

    if let Some(raw) = &sources.api_url_override {
        config.gemini.api_url = Url::parse(raw).map_err(|err| {
            AppError::InvalidConfig(format!("{} is not a valid URL: {}", GEMINI_API_URL_ENV, err))
        })?;
    }

    config.validate()?;
    Ok(config)
}

/// Parse configuration from string content.
pub fn parse_config_content(content: &str) -> Result<AppConfig, AppError> {
    let config: AppConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}

/// Path of the key snapshot file for this configuration.
pub fn key_snapshot_path(config: &AppConfig, sources: &ConfigSources) -> PathBuf {
    config.storage.path.clone().unwrap_or_else(|| sources.data_dir.join(KEY_SNAPSHOT_FILE))
}

fn read_config_file(path: &Path) -> Result<AppConfig, AppError> {
    tracing::debug!(path = %path.display(), "loading config");
    let content = fs::read_to_string(path)?;
    parse_config_content(&content)
}
