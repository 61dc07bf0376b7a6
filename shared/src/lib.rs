//! Shared types for the Vitrine workspace
//!
//! Entity models, the unified error system and small utilities used by
//! the catalog store and its front ends.

pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use error::{AppError, AppResult, ErrorCategory, ErrorCode};
pub use models::{Product, ProductCreate, Variant, VariantInput};
