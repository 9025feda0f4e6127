use include_dir::{Dir, include_dir};
use minijinja::{Environment, UndefinedBehavior, context};
use serde::Serialize;

use crate::domain::AppError;

static PROMPTS_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets/prompts");

const PRODUCT_TEMPLATE: &str = "product_discovery.txt";
const COPY_TEMPLATE: &str = "copy_generation.txt";

/// Inputs of the product detector form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProductBrief {
    pub niche: String,
    pub audience: String,
    pub channel: String,
    pub budget: String,
}

/// Inputs of the copy generator form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CopyBrief {
    pub product: String,
    pub pain_points: String,
    pub triggers: String,
    pub platform: String,
}

/// Renders the embedded prompt templates.
///
/// Values are substituted verbatim: no escaping, no validation, empty strings
/// stay empty. Undefined variables are render errors.
pub struct PromptBuilder {
    env: Environment<'static>,
}

impl std::fmt::Debug for PromptBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PromptBuilder").finish_non_exhaustive()
    }
}

impl PromptBuilder {
    pub fn new() -> Result<Self, AppError> {
        let mut env = Environment::new();
        env.set_keep_trailing_newline(true);
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_auto_escape_callback(|_| minijinja::AutoEscape::None);

        for name in [PRODUCT_TEMPLATE, COPY_TEMPLATE] {
            let source = PROMPTS_DIR
                .get_file(name)
                .and_then(|file| file.contents_utf8())
                .ok_or_else(|| AppError::PromptRenderError(format!("missing template {}", name)))?;
            env.add_template(name, source).map_err(|err| {
                AppError::PromptRenderError(format!("invalid template {}: {}", name, err))
            })?;
        }

        Ok(Self { env })
    }

    pub fn product_prompt(&self, brief: &ProductBrief) -> Result<String, AppError> {
        self.render(
            PRODUCT_TEMPLATE,
            context! {
                niche => brief.niche,
                audience => brief.audience,
                channel => brief.channel,
                budget => brief.budget,
            },
        )
    }

    pub fn copy_prompt(&self, brief: &CopyBrief) -> Result<String, AppError> {
        self.render(
            COPY_TEMPLATE,
            context! {
                product => brief.product,
                pain_points => brief.pain_points,
                triggers => brief.triggers,
                platform => brief.platform,
            },
        )
    }

    fn render(&self, name: &str, ctx: minijinja::Value) -> Result<String, AppError> {
        let template = self
            .env
            .get_template(name)
            .map_err(|err| AppError::PromptRenderError(format!("{}: {}", name, err)))?;
        template.render(ctx).map_err(|err| AppError::PromptRenderError(format!("{}: {}", name, err)))
    }
}

/// Render the product discovery prompt.
pub fn build_product_prompt(
    niche: &str,
    audience: &str,
    channel: &str,
    budget: &str,
) -> Result<String, AppError> {
    PromptBuilder::new()?.product_prompt(&ProductBrief {
        niche: niche.to_string(),
        audience: audience.to_string(),
        channel: channel.to_string(),
        budget: budget.to_string(),
    })
}

/// Render the copy generation prompt.
pub fn build_copy_prompt(
    product: &str,
    pain_points: &str,
    triggers: &str,
    platform: &str,
) -> Result<String, AppError> {
    PromptBuilder::new()?.copy_prompt(&CopyBrief {
        product: product.to_string(),
        pain_points: pain_points.to_string(),
        triggers: triggers.to_string(),
        platform: platform.to_string(),
    })
}
