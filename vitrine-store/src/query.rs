//! Query Layer
//!
//! Derived, read-only views over a [`Catalog`]: text search, an optional
//! variant-count filter and name sorting. Always filter-then-sort, always
//! recomputed from scratch; the catalog itself is never reordered.

use crate::catalog::Catalog;
use icu_collator::{Collator, CollatorOptions};
use serde::{Deserialize, Serialize};
use shared::Product;
use std::cmp::Ordering;

/// Name sort state, cycled by a single toggle action
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// Insertion order
    #[default]
    Unsorted,
    Ascending,
    Descending,
}

impl SortOrder {
    /// `Unsorted -> Ascending -> Descending -> Unsorted`
    pub fn toggle(self) -> Self {
        match self {
            SortOrder::Unsorted => SortOrder::Ascending,
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Unsorted,
        }
    }

    /// Toggle button label
    pub fn label(self) -> &'static str {
        match self {
            SortOrder::Unsorted => "Sort",
            SortOrder::Ascending => "A-Z",
            SortOrder::Descending => "Z-A",
        }
    }
}

/// Structural filter applied alongside the text search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductFilter {
    #[default]
    All,
    /// Products with more than one variant
    MultipleVariants,
}

impl ProductFilter {
    pub fn matches(self, product: &Product) -> bool {
        match self {
            ProductFilter::All => true,
            ProductFilter::MultipleVariants => product.variants.len() > 1,
        }
    }
}

/// Full query state of a listing
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogQuery {
    pub search: String,
    pub sort: SortOrder,
    pub filter: ProductFilter,
}

impl CatalogQuery {
    pub fn new(search: impl Into<String>) -> Self {
        Self {
            search: search.into(),
            ..Self::default()
        }
    }

    pub fn sorted(mut self, sort: SortOrder) -> Self {
        self.sort = sort;
        self
    }

    pub fn filtered(mut self, filter: ProductFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Compute the view: search, then structural filter, then sort
    pub fn apply<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Product> {
        let matched = filter_products(catalog.products(), &self.search)
            .into_iter()
            .filter(|p| self.filter.matches(p))
            .collect();
        sort_products(matched, self.sort)
    }
}

/// Keep products whose name, or any variant's size, color or price,
/// contains `query` (case-insensitive). Empty query keeps everything.
pub fn filter_products<'a>(products: &'a [Product], query: &str) -> Vec<&'a Product> {
    let needle = query.to_lowercase();
    if needle.is_empty() {
        return products.iter().collect();
    }
    products
        .iter()
        .filter(|p| product_matches(p, &needle))
        .collect()
}

fn product_matches(product: &Product, needle: &str) -> bool {
    if product.name.to_lowercase().contains(needle) {
        return true;
    }
    product.variants.iter().any(|v| {
        v.size.to_lowercase().contains(needle)
            || v.color.to_lowercase().contains(needle)
            || format_price(v.price).contains(needle)
    })
}

/// Reorder by name. Descending is the exact reverse of ascending.
pub fn sort_products(mut products: Vec<&Product>, order: SortOrder) -> Vec<&Product> {
    if order == SortOrder::Unsorted {
        return products;
    }
    let collator = name_collator();
    products.sort_by(|a, b| compare_with(collator.as_ref(), &a.name, &b.name));
    if order == SortOrder::Descending {
        products.reverse();
    }
    products
}

/// Locale-aware name comparison (CLDR root collation).
///
/// Accents and case are secondary and tertiary differences: `"Émile"`
/// sorts with the e's and `"apple"` comes just before `"Apple"`. Names
/// the collator considers equal fall back to code point order.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    compare_with(name_collator().as_ref(), a, b)
}

fn name_collator() -> Option<Collator> {
    match Collator::try_new(&Default::default(), CollatorOptions::new()) {
        Ok(collator) => Some(collator),
        Err(e) => {
            tracing::warn!(error = %e, "Collator unavailable, sorting by code point");
            None
        }
    }
}

fn compare_with(collator: Option<&Collator>, a: &str, b: &str) -> Ordering {
    match collator {
        Some(collator) => collator.compare(a, b).then_with(|| a.cmp(b)),
        None => a.cmp(b),
    }
}

/// Shortest decimal form of a price (`20.0` -> `"20"`, `9.5` -> `"9.5"`)
pub fn format_price(price: f64) -> String {
    price.to_string()
}
