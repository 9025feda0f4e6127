//! Product and copy generation commands.

use clap::Args;

use crate::app::api::{self, ClientMode, OutputFormat};
use crate::app::output::{render_copy, render_products};
use crate::domain::{AppError, CopyBrief, ProductBrief};

#[derive(Args)]
pub struct ProductArgs {
    /// Market niche
    #[arg(long, default_value = "")]
    niche: String,
    /// Target audience
    #[arg(long, default_value = "")]
    audience: String,
    /// Traffic channel
    #[arg(long, default_value = "facebook")]
    channel: String,
    /// Monthly budget in dollars
    #[arg(long, default_value = "")]
    budget: String,
    /// Print the prompt without calling a provider
    #[arg(long)]
    prompt_preview: bool,
}

#[derive(Args)]
pub struct CopyArgs {
    /// Product name
    #[arg(long, default_value = "")]
    product: String,
    /// Customer pain points
    #[arg(long, default_value = "")]
    pain_points: String,
    /// Psychological triggers to use
    #[arg(long, default_value = "")]
    triggers: String,
    /// Target platform
    #[arg(long, default_value = "facebook")]
    platform: String,
    /// Print the prompt without calling a provider
    #[arg(long)]
    prompt_preview: bool,
}

pub fn run_products(
    args: ProductArgs,
    mode: ClientMode,
    format: OutputFormat,
) -> Result<(), AppError> {
    let brief = ProductBrief {
        niche: args.niche,
        audience: args.audience,
        channel: args.channel,
        budget: args.budget,
    };

    if args.prompt_preview {
        print!("{}", api::preview_products(&brief)?);
        return Ok(());
    }

    let products = api::detect_products(&brief, mode)?;
    print!("{}", render_products(&products, format)?);
    Ok(())
}

pub fn run_copy(args: CopyArgs, mode: ClientMode, format: OutputFormat) -> Result<(), AppError> {
    let brief = CopyBrief {
        product: args.product,
        pain_points: args.pain_points,
        triggers: args.triggers,
        platform: args.platform,
    };

    if args.prompt_preview {
        print!("{}", api::preview_copy(&brief)?);
        return Ok(());
    }

    let copy = api::generate_copy(&brief, mode)?;
    print!("{}", render_copy(&copy, format)?);
    Ok(())
}
