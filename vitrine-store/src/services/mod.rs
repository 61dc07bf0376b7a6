//! Service layer
//!
//! - [`DemoImporter`] - one-shot demo-data import over HTTP

pub mod demo_import;

pub use demo_import::{DemoImporter, ImportError};
