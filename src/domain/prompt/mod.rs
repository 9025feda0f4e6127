//! Prompt templates for product discovery and copy generation.

mod builder;

pub use builder::{
    CopyBrief, ProductBrief, PromptBuilder, build_copy_prompt, build_product_prompt,
};
