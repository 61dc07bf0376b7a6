//! Utilities: input validation and logging setup

pub mod logger;
pub mod validation;

pub use shared::{AppError, AppResult, ErrorCategory, ErrorCode};
