use super::{Catalog, ops};
use crate::storage::CatalogStorage;
use crate::utils::validation::{
    validate_product, validate_product_create, validate_variant_input,
};
use shared::util::now_millis;
use shared::{AppError, AppResult, Product, ProductCreate, Variant, VariantInput};
use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::watch;

/// Stateful owner of the catalog
///
/// Holds the current value, writes it through to storage on every change
/// and publishes it to subscribers. Exclusively owned: all mutations take
/// `&mut self`.
///
/// A failed save does not fail the mutation. The change is kept in memory,
/// [`is_dirty`](Self::is_dirty) turns true and [`flush`](Self::flush)
/// retries the write.
pub struct CatalogStore {
    storage: CatalogStorage,
    tx: watch::Sender<Arc<Catalog>>,
    /// Last save failed; the in-memory catalog is ahead of storage
    dirty: bool,
    last_saved_at: Option<i64>,
}

impl std::fmt::Debug for CatalogStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogStore")
            .field("products", &self.tx.borrow().len())
            .field("dirty", &self.dirty)
            .finish()
    }
}

impl CatalogStore {
    /// Hydrate once from storage
    pub fn open(storage: CatalogStorage) -> Self {
        let catalog = storage.load();
        tracing::info!(products = catalog.len(), "Catalog store opened");
        let (tx, _) = watch::channel(Arc::new(catalog));
        Self {
            storage,
            tx,
            dirty: false,
            last_saved_at: None,
        }
    }

    /// Current catalog value
    pub fn snapshot(&self) -> Arc<Catalog> {
        self.tx.borrow().clone()
    }

    /// Receive every new catalog value (latest-value semantics)
    pub fn subscribe(&self) -> watch::Receiver<Arc<Catalog>> {
        self.tx.subscribe()
    }

    /// Whether the durable copy lags behind the in-memory catalog
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Timestamp (ms) of the last successful save in this session
    pub fn last_saved_at(&self) -> Option<i64> {
        self.last_saved_at
    }

    // ========== Products ==========

    pub fn add_product(&mut self, data: ProductCreate) -> AppResult<Product> {
        validate_product_create(&data)?;

        let product = Product::new(data);
        let next = ops::add(&self.snapshot(), product.clone());
        self.replace(next);

        tracing::info!(product_id = %product.id, name = %product.name, "Product added");
        Ok(product)
    }

    /// Replace a product by id. Returns `false` when no product matched.
    pub fn update_product(&mut self, product: Product) -> AppResult<bool> {
        validate_product(&product)?;

        let current = self.snapshot();
        if current.get(&product.id).is_none() {
            return Ok(false);
        }
        let product_id = product.id.clone();
        self.replace(ops::update(&current, product));

        tracing::info!(product_id = %product_id, "Product updated");
        Ok(true)
    }

    /// Remove a product and its variants. Returns `false` when no product matched.
    pub fn delete_product(&mut self, id: &str) -> bool {
        let current = self.snapshot();
        if current.get(id).is_none() {
            return false;
        }
        self.replace(ops::delete(&current, id));

        tracing::info!(product_id = %id, "Product deleted");
        true
    }

    /// Append products in one write (demo import)
    ///
    /// Rejects the whole batch if any product id is already in the catalog
    /// or repeats within the batch.
    pub fn append_products(&mut self, products: Vec<Product>) -> AppResult<usize> {
        let current = self.snapshot();
        let mut ids: HashSet<&str> = current.iter().map(|p| p.id.as_str()).collect();
        for product in &products {
            validate_product(product)?;
            if !ids.insert(product.id.as_str()) {
                return Err(
                    AppError::validation(format!("Duplicate product id {}", product.id))
                        .with_detail("product_id", product.id.as_str()),
                );
            }
        }
        let count = products.len();
        if count == 0 {
            return Ok(0);
        }
        self.replace(ops::append_all(&current, products));

        tracing::info!(count, "Products appended");
        Ok(count)
    }

    /// Drop every product
    pub fn clear(&mut self) {
        let removed = self.snapshot().len();
        self.replace(Catalog::new());
        tracing::info!(removed, "Catalog cleared");
    }

    // ========== Variants ==========

    /// Add a variant to a product. Returns `None` when no product matched.
    pub fn add_variant(
        &mut self,
        product_id: &str,
        input: VariantInput,
    ) -> AppResult<Option<Variant>> {
        validate_variant_input(&input)?;

        let current = self.snapshot();
        if current.get(product_id).is_none() {
            return Ok(None);
        }
        let variant = Variant::new(input);
        self.replace(ops::add_variant(&current, product_id, variant.clone()));

        tracing::info!(product_id = %product_id, variant_id = %variant.id, "Variant added");
        Ok(Some(variant))
    }

    /// Replace a variant's fields. Returns `false` when product or variant is absent.
    pub fn update_variant(
        &mut self,
        product_id: &str,
        variant_id: &str,
        input: VariantInput,
    ) -> AppResult<bool> {
        validate_variant_input(&input)?;

        let current = self.snapshot();
        if !has_variant(&current, product_id, variant_id) {
            return Ok(false);
        }
        self.replace(ops::update_variant(&current, product_id, variant_id, input));

        tracing::info!(product_id = %product_id, variant_id = %variant_id, "Variant updated");
        Ok(true)
    }

    /// Remove a variant. Returns `false` when product or variant is absent.
    pub fn remove_variant(&mut self, product_id: &str, variant_id: &str) -> bool {
        let current = self.snapshot();
        if !has_variant(&current, product_id, variant_id) {
            return false;
        }
        self.replace(ops::remove_variant(&current, product_id, variant_id));

        tracing::info!(product_id = %product_id, variant_id = %variant_id, "Variant removed");
        true
    }

    // ========== Persistence ==========

    /// Re-attempt a failed save. No-op when storage is current.
    pub fn flush(&mut self) -> AppResult<()> {
        if !self.dirty {
            return Ok(());
        }
        let current = self.snapshot();
        self.storage.save(&current).map_err(AppError::from)?;
        self.dirty = false;
        self.last_saved_at = Some(now_millis());
        tracing::info!(products = current.len(), "Catalog flushed");
        Ok(())
    }

    /// Single choke point for every mutation: save, then publish.
    fn replace(&mut self, next: Catalog) {
        match self.storage.save(&next) {
            Ok(()) => {
                self.dirty = false;
                self.last_saved_at = Some(now_millis());
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to persist catalog; keeping in-memory state");
                self.dirty = true;
            }
        }
        self.tx.send_replace(Arc::new(next));
    }
}

fn has_variant(catalog: &Catalog, product_id: &str, variant_id: &str) -> bool {
    catalog
        .get(product_id)
        .is_some_and(|p| p.variant(variant_id).is_some())
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::ErrorCode;

    fn store() -> (CatalogStore, CatalogStorage) {
        let storage = CatalogStorage::in_memory().unwrap();
        (CatalogStore::open(storage.clone()), storage)
    }

    #[test]
    fn test_add_product_persists() {
        let (mut store, storage) = store();
        let shoe = store.add_product(ProductCreate::new("Shoe")).unwrap();

        assert!(shoe.variants.is_empty());
        assert_eq!(store.snapshot().len(), 1);
        assert_eq!(storage.load(), *store.snapshot());
        assert!(store.last_saved_at().is_some());
        assert!(!store.is_dirty());
    }

    #[test]
    fn test_validation_failure_leaves_catalog_untouched() {
        let (mut store, storage) = store();
        let shoe = store.add_product(ProductCreate::new("Shoe")).unwrap();
        let before = store.snapshot();

        let err = store.add_product(ProductCreate::new("")).unwrap_err();
        assert_eq!(err.code, ErrorCode::RequiredField);

        let err = store
            .add_variant(&shoe.id, VariantInput::new("M", "Red", 0.0))
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ProductInvalidPrice);

        let blank = Product {
            name: " ".into(),
            ..shoe.clone()
        };
        assert!(store.update_product(blank).is_err());

        assert_eq!(*store.snapshot(), *before);
        assert_eq!(storage.load(), *before);
    }

    #[test]
    fn test_hat_scenario() {
        let (mut store, _) = store();
        let hat = store.add_product(ProductCreate::new("Hat")).unwrap();
        let variant = store
            .add_variant(&hat.id, VariantInput::new("L", "Blue", 15.0))
            .unwrap()
            .unwrap();

        let snapshot = store.snapshot();
        let hat = snapshot.get(&hat.id).unwrap();
        assert_eq!(hat.variants, vec![variant.clone()]);
        assert_eq!(variant.size, "L");
        assert_eq!(variant.color, "Blue");
        assert_eq!(variant.price, 15.0);
        assert_ne!(variant.id, hat.id);
    }

    #[test]
    fn test_unknown_ids_report_no_change() {
        let (mut store, _) = store();
        let shoe = store.add_product(ProductCreate::new("Shoe")).unwrap();
        let before = store.snapshot();

        assert!(!store.delete_product("missing"));
        assert!(store
            .add_variant("missing", VariantInput::new("M", "Red", 1.0))
            .unwrap()
            .is_none());
        assert!(!store
            .update_variant(&shoe.id, "missing", VariantInput::new("M", "Red", 1.0))
            .unwrap());
        assert!(!store.remove_variant(&shoe.id, "missing"));
        assert!(!store.update_product(Product::new(ProductCreate::new("Ghost"))).unwrap());

        assert!(Arc::ptr_eq(&before, &store.snapshot()));
    }

    #[test]
    fn test_delete_twice() {
        let (mut store, storage) = store();
        let shoe = store.add_product(ProductCreate::new("Shoe")).unwrap();
        store.add_product(ProductCreate::new("Hat")).unwrap();

        assert!(store.delete_product(&shoe.id));
        let once = store.snapshot();
        assert!(!store.delete_product(&shoe.id));
        assert_eq!(*store.snapshot(), *once);
        assert_eq!(storage.load(), *once);
    }

    #[test]
    fn test_rename_keeps_variants_and_position() {
        let (mut store, _) = store();
        store.add_product(ProductCreate::new("A")).unwrap();
        let b = store.add_product(ProductCreate::new("B")).unwrap();
        store.add_product(ProductCreate::new("C")).unwrap();
        store
            .add_variant(&b.id, VariantInput::new("S", "Black", 5.0))
            .unwrap();

        let mut renamed = store.snapshot().get(&b.id).unwrap().clone();
        renamed.name = "Bee".into();
        assert!(store.update_product(renamed).unwrap());

        let snapshot = store.snapshot();
        let names: Vec<&str> = snapshot.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["A", "Bee", "C"]);
        assert_eq!(snapshot.products()[1].variants.len(), 1);
    }

    #[test]
    fn test_subscriber_sees_latest_value() {
        let (mut store, _) = store();
        let mut rx = store.subscribe();
        assert!(rx.borrow_and_update().is_empty());

        store.add_product(ProductCreate::new("Shoe")).unwrap();
        store.add_product(ProductCreate::new("Hat")).unwrap();

        assert!(rx.has_changed().unwrap());
        assert_eq!(rx.borrow_and_update().len(), 2);
    }

    #[test]
    fn test_reopen_hydrates_from_storage() {
        let (mut store, storage) = store();
        let shoe = store.add_product(ProductCreate::new("Shoe")).unwrap();
        store
            .add_variant(&shoe.id, VariantInput::new("M", "Red", 20.0))
            .unwrap();
        drop(store);

        let reopened = CatalogStore::open(storage);
        let snapshot = reopened.snapshot();
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot.products()[0].variants[0].price, 20.0);
    }

    #[test]
    fn test_clear_and_append() {
        let (mut store, storage) = store();
        store.add_product(ProductCreate::new("Old")).unwrap();
        store.clear();
        assert!(store.snapshot().is_empty());
        assert!(storage.load().is_empty());

        assert_eq!(store.append_products(Vec::new()).unwrap(), 0);
        let added = store
            .append_products(vec![
                Product::new(ProductCreate::new("X")),
                Product::new(ProductCreate::new("Y")),
            ])
            .unwrap();
        assert_eq!(added, 2);
        assert_eq!(storage.load().len(), 2);
    }

    #[test]
    fn test_append_rejects_duplicate_product_ids() {
        let (mut store, storage) = store();
        let shoe = store.add_product(ProductCreate::new("Shoe")).unwrap();
        let before = store.snapshot();

        let err = store.append_products(vec![shoe.clone()]).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);

        let hat = Product::new(ProductCreate::new("Hat"));
        let err = store
            .append_products(vec![hat.clone(), hat.clone()])
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);

        assert_eq!(*store.snapshot(), *before);
        assert_eq!(storage.load(), *before);
    }

    #[test]
    fn test_update_rejects_duplicate_variant_ids() {
        let (mut store, _) = store();
        let shoe = store.add_product(ProductCreate::new("Shoe")).unwrap();
        let variant = Variant::new(VariantInput::new("M", "Red", 20.0));

        let doubled = shoe.with_variant(variant.clone()).with_variant(variant);
        let err = store.update_product(doubled).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert!(store.snapshot().get(&shoe.id).unwrap().variants.is_empty());
    }

    #[test]
    fn test_flush_when_clean_is_noop() {
        let (mut store, _) = store();
        assert!(store.flush().is_ok());
        assert!(store.last_saved_at().is_none());
    }
}
