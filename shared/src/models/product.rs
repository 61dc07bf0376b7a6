//! Product Model

use serde::{Deserialize, Serialize};

/// Size presets offered by front ends (the set is open; any non-empty size is accepted)
pub const SIZE_PRESETS: [&str; 4] = ["S", "M", "L", "XL"];

/// Color presets offered by front ends (the set is open; any non-empty color is accepted)
pub const COLOR_PRESETS: [&str; 8] = [
    "Red", "Blue", "Black", "White", "Green", "Yellow", "Purple", "Orange",
];

/// Default size for a new variant
pub const DEFAULT_SIZE: &str = "M";

/// Default color for a new variant
pub const DEFAULT_COLOR: &str = "Red";

/// Variant entity: a purchasable size/color/price configuration of a product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Variant {
    pub id: String,
    pub size: String,
    pub color: String,
    pub price: f64,
}

impl Variant {
    /// Build a variant with a freshly generated id
    pub fn new(input: VariantInput) -> Self {
        Self {
            id: crate::util::new_id(),
            size: input.size,
            color: input.color,
            price: input.price,
        }
    }

    /// Full-field replacement, keeping the id
    pub fn replaced(&self, input: VariantInput) -> Self {
        Self {
            id: self.id.clone(),
            size: input.size,
            color: input.color,
            price: input.price,
        }
    }
}

/// Variant fields supplied by the add/edit variant form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariantInput {
    pub size: String,
    pub color: String,
    pub price: f64,
}

impl VariantInput {
    pub fn new(size: impl Into<String>, color: impl Into<String>, price: f64) -> Self {
        Self {
            size: size.into(),
            color: color.into(),
            price,
        }
    }
}

/// Product entity
///
/// Owns its variants: deleting a product discards them.
/// Variant order is insertion order; size/color combinations may repeat.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub variants: Vec<Variant>,
}

impl Product {
    /// Build a product with a freshly generated id and no variants
    pub fn new(data: ProductCreate) -> Self {
        Self {
            id: crate::util::new_id(),
            name: data.name,
            variants: Vec::new(),
        }
    }

    /// Look up a variant by id
    pub fn variant(&self, variant_id: &str) -> Option<&Variant> {
        self.variants.iter().find(|v| v.id == variant_id)
    }

    /// New product value with `variant` appended
    pub fn with_variant(&self, variant: Variant) -> Self {
        let mut next = self.clone();
        next.variants.push(variant);
        next
    }

    /// New product value with the matching variant replaced (no-op if absent)
    pub fn with_variant_replaced(&self, variant_id: &str, input: VariantInput) -> Self {
        let variants = self
            .variants
            .iter()
            .map(|v| {
                if v.id == variant_id {
                    v.replaced(input.clone())
                } else {
                    v.clone()
                }
            })
            .collect();
        Self {
            id: self.id.clone(),
            name: self.name.clone(),
            variants,
        }
    }

    /// New product value without the matching variant (no-op if absent)
    pub fn without_variant(&self, variant_id: &str) -> Self {
        Self {
            id: self.id.clone(),
            name: self.name.clone(),
            variants: self
                .variants
                .iter()
                .filter(|v| v.id != variant_id)
                .cloned()
                .collect(),
        }
    }

    /// Lowest and highest variant price, if any variants exist
    pub fn price_range(&self) -> Option<(f64, f64)> {
        self.variants.iter().fold(None, |acc, v| match acc {
            None => Some((v.price, v.price)),
            Some((lo, hi)) => Some((lo.min(v.price), hi.max(v.price))),
        })
    }
}

/// Create product payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductCreate {
    pub name: String,
}

impl ProductCreate {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}
