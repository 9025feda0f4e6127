use crate::domain::parsing::grammar::{
    FieldPolicy, FieldRule, FieldShape, blocks, extract_fields,
};
use crate::domain::product::{DEFAULT_GRAVITY, DEFAULT_SCORE, Product};

/// Delimiter opening each product block.
pub const PRODUCT_SENTINEL: &str = "=== PRODUCTO";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ProductField {
    Name,
    Description,
    Price,
    Commission,
    Score,
    Gravity,
    Epc,
    Cvr,
    PainPoints,
    Emotions,
    Triggers,
}

const fn rule(
    label: &'static str,
    field: ProductField,
    shape: FieldShape,
    policy: FieldPolicy,
) -> FieldRule<ProductField> {
    FieldRule { label, field, shape, policy }
}

const PRODUCT_RULES: &[FieldRule<ProductField>] = &[
    rule("NOMBRE", ProductField::Name, FieldShape::Text, FieldPolicy::Required),
    rule("DESCRIPCIÓN", ProductField::Description, FieldShape::Text, FieldPolicy::Optional),
    rule("PRECIO", ProductField::Price, FieldShape::Text, FieldPolicy::Optional),
    rule("COMISIÓN", ProductField::Commission, FieldShape::Text, FieldPolicy::Optional),
    rule("SCORE", ProductField::Score, FieldShape::Number, FieldPolicy::Fallback(DEFAULT_SCORE)),
    rule(
        "GRAVITY",
        ProductField::Gravity,
        FieldShape::Number,
        FieldPolicy::Fallback(DEFAULT_GRAVITY),
    ),
    rule("EPC", ProductField::Epc, FieldShape::Text, FieldPolicy::Optional),
    rule("CVR", ProductField::Cvr, FieldShape::Text, FieldPolicy::Optional),
    rule("PAIN_POINTS", ProductField::PainPoints, FieldShape::List, FieldPolicy::Optional),
    rule("EMOCIONES", ProductField::Emotions, FieldShape::List, FieldPolicy::Optional),
    rule("TRIGGERS", ProductField::Triggers, FieldShape::List, FieldPolicy::Optional),
];

/// Parse `=== PRODUCTO` blocks into products, in source order.
///
/// Blocks without a NOMBRE are dropped; `id` keeps the source block index,
/// so ids have gaps where blocks were dropped.
pub fn parse_products(response: &str) -> Vec<Product> {
    blocks(response, PRODUCT_SENTINEL)
        .filter_map(|(index, block)| {
            let Some(fields) = extract_fields(block, PRODUCT_RULES) else {
                tracing::debug!(block = index, "dropping product block without NOMBRE");
                return None;
            };

            Some(Product {
                id: index,
                name: fields.text(ProductField::Name),
                description: fields.text(ProductField::Description),
                price: fields.text(ProductField::Price),
                commission: fields.text(ProductField::Commission),
                score: fields.number(ProductField::Score),
                gravity: fields.number(ProductField::Gravity),
                epc: fields.text(ProductField::Epc),
                cvr: fields.text(ProductField::Cvr),
                pain_points: fields.list(ProductField::PainPoints),
                emotions: fields.list(ProductField::Emotions),
                triggers: fields.list(ProductField::Triggers),
            })
        })
        .collect()
}
