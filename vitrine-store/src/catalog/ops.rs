//! Pure catalog operations
//!
//! Every function takes the current catalog by reference and returns a new
//! value. Unknown ids are silent no-ops. Variant operations build a new
//! [`Product`] and route it through [`update`].

use super::Catalog;
use shared::{Product, Variant, VariantInput};

/// Append a product to the end of the catalog
pub fn add(catalog: &Catalog, product: Product) -> Catalog {
    let mut products = catalog.products.clone();
    products.push(product);
    Catalog { products }
}

/// Append several products at once
pub fn append_all(catalog: &Catalog, incoming: Vec<Product>) -> Catalog {
    let mut products = catalog.products.clone();
    products.extend(incoming);
    Catalog { products }
}

/// Replace the product with the same id, keeping its position
pub fn update(catalog: &Catalog, product: Product) -> Catalog {
    let products = catalog
        .products
        .iter()
        .map(|p| {
            if p.id == product.id {
                product.clone()
            } else {
                p.clone()
            }
        })
        .collect();
    Catalog { products }
}

/// Remove the product with the given id
pub fn delete(catalog: &Catalog, id: &str) -> Catalog {
    Catalog {
        products: catalog
            .products
            .iter()
            .filter(|p| p.id != id)
            .cloned()
            .collect(),
    }
}

/// Append a variant to one product
pub fn add_variant(catalog: &Catalog, product_id: &str, variant: Variant) -> Catalog {
    match catalog.get(product_id) {
        Some(product) => update(catalog, product.with_variant(variant)),
        None => catalog.clone(),
    }
}

/// Replace all fields of one variant, keeping its id and position
pub fn update_variant(
    catalog: &Catalog,
    product_id: &str,
    variant_id: &str,
    fields: VariantInput,
) -> Catalog {
    match catalog.get(product_id) {
        Some(product) => update(catalog, product.with_variant_replaced(variant_id, fields)),
        None => catalog.clone(),
    }
}

/// Remove one variant from one product
pub fn remove_variant(catalog: &Catalog, product_id: &str, variant_id: &str) -> Catalog {
    match catalog.get(product_id) {
        Some(product) => update(catalog, product.without_variant(variant_id)),
        None => catalog.clone(),
    }
}
