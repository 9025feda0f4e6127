pub mod api_key;
pub mod configuration;
pub mod copy_result;
pub mod error;
pub mod parsing;
pub mod product;
pub mod prompt;
pub mod provider;

pub use api_key::{ApiKey, ApiKeyCollection, KeyStatus};
pub use configuration::{AppConfig, ConfigSources, GeminiApiConfig, StorageConfig};
pub use copy_result::{CopyResult, EmailCopy, FacebookCopy, GoogleCopy};
pub use error::AppError;
pub use parsing::{parse_copy, parse_products};
pub use product::{Product, ScoreBand};
pub use prompt::{CopyBrief, ProductBrief, PromptBuilder};
pub use provider::{GEMINI, PROVIDERS, ProviderInfo, find_provider};
