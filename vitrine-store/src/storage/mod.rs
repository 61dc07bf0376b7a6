//! Persistence Adapter
//!
//! Mirrors the whole catalog into a local key-value store under one fixed
//! key. Every save is a full overwrite; there is no versioning and no
//! migration of older shapes.

mod error;
mod redb_store;

pub use error::{StorageError, StorageResult};
pub use redb_store::RedbStore;

use crate::catalog::Catalog;
use std::sync::Arc;

/// Fixed key under which the catalog is stored
pub const STORAGE_KEY: &str = "products";

/// Minimal string key-value store (the "local storage" seam)
pub trait KeyValueStore: Send + Sync {
    /// Read the raw value at `key`
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Overwrite the value at `key`
    fn set(&self, key: &str, value: &str) -> StorageResult<()>;
}

/// Catalog persistence over any [`KeyValueStore`]
#[derive(Clone)]
pub struct CatalogStorage {
    kv: Arc<dyn KeyValueStore>,
}

impl std::fmt::Debug for CatalogStorage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogStorage")
            .field("key", &STORAGE_KEY)
            .finish()
    }
}

impl CatalogStorage {
    pub fn new(kv: Arc<dyn KeyValueStore>) -> Self {
        Self { kv }
    }

    /// Open the redb file at `path`
    pub fn open(path: impl AsRef<std::path::Path>) -> StorageResult<Self> {
        Ok(Self::new(Arc::new(RedbStore::open(path)?)))
    }

    /// In-memory storage (nothing survives the process)
    pub fn in_memory() -> StorageResult<Self> {
        Ok(Self::new(Arc::new(RedbStore::open_in_memory()?)))
    }

    /// Load the stored catalog.
    ///
    /// Never fails: a missing key, an unreadable store or a value that does
    /// not parse as a product list all yield an empty catalog.
    pub fn load(&self) -> Catalog {
        let raw = match self.kv.get(STORAGE_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                tracing::debug!("No stored catalog, starting empty");
                return Catalog::default();
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to read stored catalog, starting empty");
                return Catalog::default();
            }
        };

        match serde_json::from_str::<Catalog>(&raw) {
            Ok(catalog) => {
                tracing::debug!(products = catalog.len(), "Loaded catalog from storage");
                catalog
            }
            Err(e) => {
                tracing::warn!(error = %e, "Stored catalog is corrupt, starting empty");
                Catalog::default()
            }
        }
    }

    /// Serialize the full catalog and overwrite the stored value
    pub fn save(&self, catalog: &Catalog) -> StorageResult<()> {
        let raw = serde_json::to_string(catalog)?;
        self.kv.set(STORAGE_KEY, &raw)?;
        tracing::trace!(products = catalog.len(), bytes = raw.len(), "Catalog saved");
        Ok(())
    }

    /// Raw access for diagnostics and tests
    pub fn raw(&self) -> StorageResult<Option<String>> {
        self.kv.get(STORAGE_KEY)
    }
}
