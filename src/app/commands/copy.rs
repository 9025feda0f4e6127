//! Copy generator.

use crate::app::AppContext;
use crate::app::commands::active_credentials;
use crate::domain::{AppError, CopyBrief, CopyResult, parse_copy};
use crate::ports::KeyStorage;

/// Render the copy generation prompt without calling a provider.
pub fn preview<S: KeyStorage>(ctx: &AppContext<S>, brief: &CopyBrief) -> Result<String, AppError> {
    ctx.prompts().copy_prompt(brief)
}

pub fn execute<S: KeyStorage>(
    ctx: &AppContext<S>,
    brief: &CopyBrief,
) -> Result<CopyResult, AppError> {
    let credentials = active_credentials(ctx)?;
    let prompt = ctx.prompts().copy_prompt(brief)?;

    let response = credentials.client.generate(&credentials.secret, &prompt)?;
    let copy = parse_copy(&response);
    if copy.is_empty() {
        tracing::warn!(provider = %credentials.provider_id, "response contained no copy sections");
    }
    Ok(copy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MemoryKeyStorage;
    use crate::app::services::ProviderClients;

    fn brief() -> CopyBrief {
        CopyBrief {
            product: "Keto Fit Pro 30".into(),
            pain_points: "no time to cook".into(),
            triggers: "urgency".into(),
            platform: "facebook".into(),
        }
    }

    #[test]
    fn mock_provider_yields_every_section() {
        let storage = MemoryKeyStorage::with_snapshot(
            r#"{"gemini":{"key":"X","status":"valid","provider":"gemini"}}"#,
        );
        let ctx = AppContext::new(storage, ProviderClients::mock()).unwrap();

        let copy = execute(&ctx, &brief()).unwrap();
        assert_eq!(copy.facebook.headlines.len(), 3);
        assert_eq!(copy.google.descriptions.len(), 2);
        assert_eq!(copy.email.bodies.len(), 1);
    }

    #[test]
    fn preview_embeds_brief() {
        let ctx = AppContext::new(MemoryKeyStorage::new(), ProviderClients::new()).unwrap();
        let prompt = preview(&ctx, &brief()).unwrap();
        assert!(prompt.contains("no time to cook"));
        assert!(prompt.contains("=== FACEBOOK ADS ==="));
    }
}
