//! Demo-data import
//!
//! Fetches a small product list from a public endpoint and appends it to
//! the catalog in one write. Any failure leaves the catalog untouched; the
//! caller may simply retry.

use crate::catalog::CatalogStore;
use crate::core::Config;
use serde::Deserialize;
use shared::models::{DEFAULT_COLOR, DEFAULT_SIZE};
use shared::{AppError, AppResult, Product, ProductCreate, Variant, VariantInput};
use std::time::Duration;
use thiserror::Error;

/// Import failures
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("Demo import request failed: {0}")]
    Network(#[source] reqwest::Error),

    #[error("Demo import timed out after {0:?}")]
    Timeout(Duration),

    #[error("Demo endpoint returned HTTP {0}")]
    Status(u16),

    #[error("Demo endpoint returned an unexpected body: {0}")]
    InvalidFormat(String),
}

impl From<ImportError> for AppError {
    fn from(err: ImportError) -> Self {
        match &err {
            ImportError::Network(_) | ImportError::Status(_) => AppError::network(err.to_string()),
            ImportError::Timeout(_) => AppError::timeout(err.to_string()),
            ImportError::InvalidFormat(_) => AppError::invalid_format(err.to_string()),
        }
    }
}

/// `{products: [{title, price}, ...]}`
#[derive(Debug, Deserialize)]
struct DemoProductsResponse {
    products: Vec<DemoItem>,
}

/// One remote product; extra fields are ignored
#[derive(Debug, Clone, Deserialize)]
pub struct DemoItem {
    pub title: String,
    pub price: f64,
}

/// Map remote items to products with a single default variant
/// (size `M`, color `Red`, price rounded to the nearest integer).
pub fn map_demo_items(items: Vec<DemoItem>) -> Vec<Product> {
    items
        .into_iter()
        .map(|item| {
            let variant = Variant::new(VariantInput::new(
                DEFAULT_SIZE,
                DEFAULT_COLOR,
                item.price.round(),
            ));
            Product::new(ProductCreate::new(item.title)).with_variant(variant)
        })
        .collect()
}

/// HTTP client for the demo-data endpoint
#[derive(Debug, Clone)]
pub struct DemoImporter {
    client: reqwest::Client,
    url: String,
    timeout: Duration,
}

impl DemoImporter {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, ImportError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(ImportError::Network)?;
        Ok(Self {
            client,
            url: url.into(),
            timeout,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, ImportError> {
        Self::new(config.demo_import_url.clone(), config.import_timeout())
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetch and map the remote products. Touches nothing locally.
    pub async fn fetch(&self) -> Result<Vec<Product>, ImportError> {
        let resp = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        if !resp.status().is_success() {
            return Err(ImportError::Status(resp.status().as_u16()));
        }

        let body = resp.text().await.map_err(|e| self.classify(e))?;
        let parsed: DemoProductsResponse =
            serde_json::from_str(&body).map_err(|e| ImportError::InvalidFormat(e.to_string()))?;

        Ok(map_demo_items(parsed.products))
    }

    /// Fetch, then append everything in one store write.
    ///
    /// Returns the appended products. On any error the store is untouched.
    pub async fn import_into(&self, store: &mut CatalogStore) -> AppResult<Vec<Product>> {
        tracing::info!(url = %self.url, "Importing demo products");

        let products = match self.fetch().await {
            Ok(products) => products,
            Err(e) => {
                tracing::warn!(url = %self.url, error = %e, "Demo import failed");
                return Err(e.into());
            }
        };

        store.append_products(products.clone())?;
        tracing::info!(count = products.len(), "Demo products imported");
        Ok(products)
    }

    fn classify(&self, e: reqwest::Error) -> ImportError {
        if e.is_timeout() {
            ImportError::Timeout(self.timeout)
        } else if e.is_decode() {
            ImportError::InvalidFormat(e.to_string())
        } else {
            ImportError::Network(e)
        }
    }
}
