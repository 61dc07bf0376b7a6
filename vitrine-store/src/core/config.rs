use std::path::PathBuf;
use std::time::Duration;

/// Default demo-data endpoint
pub const DEFAULT_DEMO_IMPORT_URL: &str = "https://dummyjson.com/products?limit=5";

/// Catalog database file name inside the work directory
pub const CATALOG_DB_FILE: &str = "catalog.redb";

/// Runtime configuration
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | WORK_DIR | .vitrine | Directory holding the catalog database |
/// | DEMO_IMPORT_URL | https://dummyjson.com/products?limit=5 | Demo-data endpoint |
/// | IMPORT_TIMEOUT_MS | 10000 | Import request timeout (ms) |
/// | LOG_LEVEL | info | Default log level |
/// | LOG_DIR | (unset) | Daily-rolling log file directory |
///
/// # Example
///
/// ```ignore
/// WORK_DIR=/tmp/shop LOG_LEVEL=debug vitrine list
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Working directory for the catalog database
    pub work_dir: String,
    /// Demo-data import endpoint
    pub demo_import_url: String,
    /// Import request timeout (ms)
    pub import_timeout_ms: u64,
    /// Default log level (`RUST_LOG` wins when set)
    pub log_level: String,
    /// Optional log file directory
    pub log_dir: Option<String>,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Unset or unparsable values fall back to defaults.
    pub fn from_env() -> Self {
        Self {
            work_dir: std::env::var("WORK_DIR").unwrap_or_else(|_| ".vitrine".into()),
            demo_import_url: std::env::var("DEMO_IMPORT_URL")
                .unwrap_or_else(|_| DEFAULT_DEMO_IMPORT_URL.into()),
            import_timeout_ms: std::env::var("IMPORT_TIMEOUT_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10_000),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok().filter(|d| !d.is_empty()),
        }
    }

    /// Override selected fields, typically from command-line flags
    pub fn with_overrides(mut self, work_dir: Option<String>, log_level: Option<String>) -> Self {
        if let Some(dir) = work_dir {
            self.work_dir = dir;
        }
        if let Some(level) = log_level {
            self.log_level = level;
        }
        self
    }

    /// Path of the catalog database file
    pub fn catalog_db_path(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join(CATALOG_DB_FILE)
    }

    pub fn import_timeout(&self) -> Duration {
        Duration::from_millis(self.import_timeout_ms)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
