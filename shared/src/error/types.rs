//! Application error type

use super::codes::ErrorCode;
use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;

/// Application error with structured error code and details
///
/// This is the primary error type across the workspace, providing:
/// - Standardized error codes via [`ErrorCode`]
/// - Human-readable messages
/// - Optional structured details (offending field, ids, ...)
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct AppError {
    /// The error code identifying the type of error
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details (field-level errors, context, etc.)
    pub details: Option<HashMap<String, Value>>,
}

impl AppError {
    /// Create a new error with the default message for the error code
    pub fn new(code: ErrorCode) -> Self {
        Self {
            message: code.message().to_string(),
            code,
            details: None,
        }
    }

    /// Create a new error with a custom message
    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    /// Add a detail entry to this error
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Whether the error was caused by user input (as opposed to the system)
    pub fn is_user_error(&self) -> bool {
        !matches!(self.code.category(), super::ErrorCategory::System)
    }

    // ==================== Convenience constructors ====================

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::ValidationFailed, msg)
    }

    /// Create a required-field error
    pub fn required(field: impl Into<String>) -> Self {
        let f = field.into();
        Self::with_message(ErrorCode::RequiredField, format!("{} is required", f))
            .with_detail("field", f)
    }

    /// Create a product not found error
    pub fn product_not_found(id: impl Into<String>) -> Self {
        let id = id.into();
        Self::with_message(ErrorCode::ProductNotFound, format!("Product {} not found", id))
            .with_detail("product_id", id)
    }

    /// Create a variant not found error
    pub fn variant_not_found(product_id: impl Into<String>, variant_id: impl Into<String>) -> Self {
        let variant_id = variant_id.into();
        Self::with_message(
            ErrorCode::VariantNotFound,
            format!("Variant {} not found", variant_id),
        )
        .with_detail("product_id", product_id.into())
        .with_detail("variant_id", variant_id)
    }

    /// Create a network error
    pub fn network(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::NetworkError, msg)
    }

    /// Create a timeout error
    pub fn timeout(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::TimeoutError, msg)
    }

    /// Create an invalid format error
    pub fn invalid_format(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::InvalidFormat, msg)
    }
}

/// Type alias for Result with AppError
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_new() {
        let err = AppError::new(ErrorCode::VariantNotFound);
        assert_eq!(err.code, ErrorCode::VariantNotFound);
        assert_eq!(err.message, "Variant not found");
        assert!(err.details.is_none());
    }

    #[test]
    fn test_app_error_with_detail() {
        let err = AppError::validation("Price must be a positive number")
            .with_detail("field", "price")
            .with_detail("value", -1.5);

        assert_eq!(err.code, ErrorCode::ValidationFailed);
        let details = err.details.unwrap();
        assert_eq!(details.get("field").unwrap(), "price");
        assert_eq!(details.get("value").unwrap(), -1.5);
    }

    #[test]
    fn test_app_error_convenience_constructors() {
        let err = AppError::required("name");
        assert_eq!(err.code, ErrorCode::RequiredField);
        assert_eq!(err.message, "name is required");
        assert_eq!(err.details.as_ref().unwrap().get("field").unwrap(), "name");

        let err = AppError::product_not_found("p-1");
        assert_eq!(err.code, ErrorCode::ProductNotFound);
        assert_eq!(err.message, "Product p-1 not found");

        let err = AppError::variant_not_found("p-1", "v-9");
        assert_eq!(err.code, ErrorCode::VariantNotFound);
        let details = err.details.unwrap();
        assert_eq!(details.get("product_id").unwrap(), "p-1");
        assert_eq!(details.get("variant_id").unwrap(), "v-9");

        assert_eq!(AppError::timeout("slow").code, ErrorCode::TimeoutError);
        assert_eq!(AppError::network("down").code, ErrorCode::NetworkError);
    }

    #[test]
    fn test_user_error_classification() {
        assert!(AppError::required("size").is_user_error());
        assert!(AppError::product_not_found("x").is_user_error());
        assert!(!AppError::network("down").is_user_error());
        assert!(!AppError::timeout("fetch").is_user_error());
    }

    #[test]
    fn test_app_error_display() {
        let err = AppError::with_message(ErrorCode::ProductNotFound, "Product abc not found");
        assert_eq!(format!("{}", err), "Product abc not found");
    }
}
