//! Product detector.

use crate::app::AppContext;
use crate::app::commands::active_credentials;
use crate::domain::{AppError, Product, ProductBrief, parse_products};
use crate::ports::KeyStorage;

/// Render the product discovery prompt without calling a provider.
pub fn preview<S: KeyStorage>(
    ctx: &AppContext<S>,
    brief: &ProductBrief,
) -> Result<String, AppError> {
    ctx.prompts().product_prompt(brief)
}

/// Ask the active provider for product candidates and parse its answer.
///
/// A response without any usable block yields an empty list, not an error.
pub fn execute<S: KeyStorage>(
    ctx: &AppContext<S>,
    brief: &ProductBrief,
) -> Result<Vec<Product>, AppError> {
    let credentials = active_credentials(ctx)?;
    let prompt = ctx.prompts().product_prompt(brief)?;

    let response = credentials.client.generate(&credentials.secret, &prompt)?;
    let products = parse_products(&response);
    tracing::info!(
        provider = %credentials.provider_id,
        products = products.len(),
        "product detection finished"
    );
    Ok(products)
}
