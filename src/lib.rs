//! marketinsight: affiliate product research and ad copy generation backed by LLM providers.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

pub use app::api::{
    ClientMode, KeySummary, OutputFormat, StatusReport, create_context, create_context_with,
    detect_products, generate_copy, list_keys, preview_copy, preview_products, set_key, status,
    test_key,
};
pub use domain::{
    ApiKey, AppError, CopyBrief, CopyResult, KeyStatus, Product, ProductBrief, parse_copy,
    parse_products,
};
