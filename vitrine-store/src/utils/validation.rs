//! Input validation helpers
//!
//! Runs before anything reaches the catalog: a rejected input never
//! mutates it.

use shared::{AppError, ErrorCode, Product, ProductCreate, VariantInput};
use std::collections::HashSet;

// ── Text length limits ──────────────────────────────────────────────

/// Product names
pub const MAX_NAME_LEN: usize = 200;

/// Size and color labels
pub const MAX_SHORT_TEXT_LEN: usize = 100;

// ── Field validators ────────────────────────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::required(field));
    }
    if value.chars().count() > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.chars().count()
        ))
        .with_detail("field", field));
    }
    Ok(())
}

/// Validate that a price is a finite number greater than zero.
pub fn validate_price(price: f64) -> Result<(), AppError> {
    if !price.is_finite() || price <= 0.0 {
        return Err(AppError::new(ErrorCode::ProductInvalidPrice).with_detail("field", "Price"));
    }
    Ok(())
}

// ── Payload validators ──────────────────────────────────────────────

pub fn validate_product_create(data: &ProductCreate) -> Result<(), AppError> {
    validate_required_text(&data.name, "Product name", MAX_NAME_LEN)
}

pub fn validate_variant_input(input: &VariantInput) -> Result<(), AppError> {
    validate_required_text(&input.size, "Size", MAX_SHORT_TEXT_LEN)?;
    validate_required_text(&input.color, "Color", MAX_SHORT_TEXT_LEN)?;
    validate_price(input.price)
}

/// Validate a full product value (name and every variant).
///
/// Variant ids must be unique within the product.
pub fn validate_product(product: &Product) -> Result<(), AppError> {
    validate_required_text(&product.name, "Product name", MAX_NAME_LEN)?;
    let mut seen = HashSet::new();
    for variant in &product.variants {
        if !seen.insert(variant.id.as_str()) {
            return Err(
                AppError::validation(format!("Duplicate variant id {}", variant.id))
                    .with_detail("product_id", product.id.as_str())
                    .with_detail("variant_id", variant.id.as_str()),
            );
        }
        validate_required_text(&variant.size, "Size", MAX_SHORT_TEXT_LEN)?;
        validate_required_text(&variant.color, "Color", MAX_SHORT_TEXT_LEN)?;
        validate_price(variant.price)?;
    }
    Ok(())
}
