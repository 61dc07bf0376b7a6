//! Vitrine catalog core
//!
//! A local product/variant catalog: the [`CatalogStore`] owns the data and
//! writes it through to an embedded key-value file on every change; the
//! [`query`] module derives filtered and sorted views; the demo importer
//! seeds the catalog from a public endpoint.
//!
//! # Module layout
//!
//! ```text
//! vitrine-store/
//! ├── catalog/    # Catalog value, pure ops, CatalogStore
//! ├── storage/    # KeyValueStore seam, redb backend, CatalogStorage
//! ├── query       # search, filter, sort
//! ├── services/   # demo-data import
//! ├── core/       # Config
//! └── utils/      # validation, logging
//! ```

pub mod catalog;
pub mod core;
pub mod query;
pub mod services;
pub mod storage;
pub mod utils;

pub use catalog::{Catalog, CatalogStats, CatalogStore};
pub use core::Config;
pub use query::{CatalogQuery, ProductFilter, SortOrder};
pub use services::DemoImporter;
pub use storage::{CatalogStorage, KeyValueStore, RedbStore, STORAGE_KEY};
