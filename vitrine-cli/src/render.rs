//! Catalog rendering for the terminal.

use shared::Product;
use tabled::settings::Style;
use tabled::{Table, Tabled};
use vitrine_store::CatalogStats;

#[derive(Tabled)]
struct ProductRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Variants")]
    variants: usize,
    #[tabled(rename = "Price")]
    price: String,
    #[tabled(rename = "Sizes")]
    sizes: String,
    #[tabled(rename = "Colors")]
    colors: String,
}

impl From<&Product> for ProductRow {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            variants: product.variants.len(),
            price: price_range(product),
            sizes: distinct(product.variants.iter().map(|v| v.size.as_str())),
            colors: distinct(product.variants.iter().map(|v| v.color.as_str())),
        }
    }
}

/// One table row per product.
pub fn grid(products: &[&Product]) -> String {
    if products.is_empty() {
        return "No products found".to_string();
    }
    let rows: Vec<ProductRow> = products.iter().map(|p| ProductRow::from(*p)).collect();
    Table::new(rows).with(Style::rounded()).to_string()
}

/// One block per product with every variant spelled out.
pub fn list(products: &[&Product]) -> String {
    if products.is_empty() {
        return "No products found".to_string();
    }
    let mut out = String::new();
    for product in products {
        out.push_str(&format!("{}  ({})\n", product.name, product.id));
        if product.variants.is_empty() {
            out.push_str("    no variants\n");
        }
        for v in &product.variants {
            out.push_str(&format!(
                "    {:<4} {:<8} {:>10}  [{}]\n",
                v.size,
                v.color,
                money(v.price),
                v.id
            ));
        }
    }
    out.trim_end().to_string()
}

/// Footer line under a listing.
pub fn footer(shown: usize, total: usize) -> String {
    if shown == total {
        format!("{total} products total")
    } else {
        format!("{shown} of {total} products shown")
    }
}

pub fn stats(stats: &CatalogStats) -> String {
    let range = match (stats.min_price, stats.max_price) {
        (Some(lo), Some(hi)) => format!("{} - {}", money(lo), money(hi)),
        _ => "-".to_string(),
    };
    format!(
        "{:<12} {}\n{:<12} {}\n{:<12} {}",
        "Products", stats.products, "Variants", stats.variants, "Price range", range
    )
}

fn money(price: f64) -> String {
    format!("${price:.2}")
}

fn price_range(product: &Product) -> String {
    match product.price_range() {
        None => "-".to_string(),
        Some((lo, hi)) if lo == hi => money(lo),
        Some((lo, hi)) => format!("{} - {}", money(lo), money(hi)),
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> String {
    let mut seen: Vec<&str> = Vec::new();
    for v in values {
        if !seen.contains(&v) {
            seen.push(v);
        }
    }
    seen.join(", ")
}
