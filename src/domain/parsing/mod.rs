//! Best-effort parsers for model output.

pub mod copy_parser;
pub mod grammar;
pub mod product_parser;

pub use copy_parser::parse_copy;
pub use product_parser::parse_products;
