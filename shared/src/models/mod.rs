//! Data models
//!
//! Shared between the catalog store and its front ends.
//! All IDs are opaque strings generated by [`crate::util::new_id`].

pub mod product;

// Re-exports
pub use product::*;
