//! Catalog Store
//!
//! The catalog is an ordered sequence of products (insertion order is
//! display order). [`ops`] holds the pure mutation functions;
//! [`CatalogStore`] owns the current value, persists it on every change and
//! publishes it to subscribers.
//!
//! # Mutation Flow
//!
//! ```text
//! store.add_variant(product_id, input)
//!     ├─ 1. Validate input (rejects before touching the catalog)
//!     ├─ 2. ops::add_variant(&current, ...) -> new Catalog
//!     ├─ 3. replace(new)
//!     │     ├─ save to storage (full overwrite)
//!     │     └─ publish to watch subscribers
//!     └─ 4. Return the created variant
//! ```

pub mod ops;
mod store;

pub use store::CatalogStore;

use serde::{Deserialize, Serialize};
use shared::Product;

/// Ordered product sequence; the single source of truth for front ends
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn into_products(self) -> Vec<Product> {
        self.products
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Product> {
        self.products.iter()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Look up a product by id
    pub fn get(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Aggregate counts for status lines
    pub fn stats(&self) -> CatalogStats {
        let mut stats = CatalogStats {
            products: self.products.len(),
            ..CatalogStats::default()
        };
        for product in &self.products {
            stats.variants += product.variants.len();
            if let Some((lo, hi)) = product.price_range() {
                stats.min_price = Some(stats.min_price.map_or(lo, |m| m.min(lo)));
                stats.max_price = Some(stats.max_price.map_or(hi, |m| m.max(hi)));
            }
        }
        stats
    }
}

impl From<Vec<Product>> for Catalog {
    fn from(products: Vec<Product>) -> Self {
        Self { products }
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Product;
    type IntoIter = std::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.products.iter()
    }
}

/// Catalog summary
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CatalogStats {
    pub products: usize,
    pub variants: usize,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{ProductCreate, Variant, VariantInput};

    #[test]
    fn test_serializes_as_plain_array() {
        let catalog = Catalog::new();
        assert_eq!(serde_json::to_string(&catalog).unwrap(), "[]");

        let parsed: Catalog = serde_json::from_str("[]").unwrap();
        assert!(parsed.is_empty());
    }

    #[test]
    fn test_stats() {
        let shoe = Product::new(ProductCreate::new("Shoe"))
            .with_variant(Variant::new(VariantInput::new("M", "Red", 20.0)))
            .with_variant(Variant::new(VariantInput::new("L", "Red", 35.0)));
        let hat = Product::new(ProductCreate::new("Hat"))
            .with_variant(Variant::new(VariantInput::new("S", "Blue", 9.5)));
        let bare = Product::new(ProductCreate::new("Scarf"));

        let stats = Catalog::from(vec![shoe, hat, bare]).stats();
        assert_eq!(stats.products, 3);
        assert_eq!(stats.variants, 3);
        assert_eq!(stats.min_price, Some(9.5));
        assert_eq!(stats.max_price, Some(35.0));

        assert_eq!(Catalog::new().stats(), CatalogStats::default());
    }
}
