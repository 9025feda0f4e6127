//! Text-generation client port definition.

use crate::domain::AppError;
use crate::domain::parsing::copy_parser::FACEBOOK_SENTINEL;

static MOCK_PRODUCTS: &str = include_str!("../assets/mock/products.txt");
static MOCK_COPY: &str = include_str!("../assets/mock/copy.txt");

/// Port for a provider's text-generation endpoint.
pub trait GenerationClient {
    /// Send one prompt and return the raw model text.
    fn generate(&self, secret: &str, prompt: &str) -> Result<String, AppError>;

    /// Send a minimal-cost request; `Ok` means the provider accepted the secret.
    fn probe(&self, secret: &str) -> Result<(), AppError>;
}

/// Offline client returning canned, well-formed responses.
///
/// Copy prompts (those carrying the Facebook section sentinel) get the copy
/// fixture; every other prompt gets the product fixture.
#[derive(Debug, Clone, Default)]
pub struct MockGenerationClient;

impl GenerationClient for MockGenerationClient {
    fn generate(&self, _secret: &str, prompt: &str) -> Result<String, AppError> {
        tracing::info!(prompt_chars = prompt.chars().count(), "mock generation");
        if prompt.contains(FACEBOOK_SENTINEL) {
            Ok(MOCK_COPY.to_string())
        } else {
            Ok(MOCK_PRODUCTS.to_string())
        }
    }

    fn probe(&self, _secret: &str) -> Result<(), AppError> {
        tracing::info!("mock probe accepted");
        Ok(())
    }
}
