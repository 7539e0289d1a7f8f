//! # Error Types
//!
//! Domain-specific error types for storefront-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  storefront-core errors (this file)                                    │
//! │  ├── CoreError        - Unknown ids, bad catalog data                  │
//! │  └── ValidationError  - Field-level validation failures                │
//! │                                                                         │
//! │  App errors (apps/storefront)                                          │
//! │  ├── ConfigError      - Config file / env problems                     │
//! │  └── ApiError         - What the renderer sees (serialized)            │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → Renderer               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Removing something that is not there (a cart line, a favorite) is never an
//! error. Errors only arise when an unknown id would be *introduced* into the
//! session, or when a catalog file is malformed.

use thiserror::Error;

use crate::types::ProductId;

// =============================================================================
// Core Error
// =============================================================================

/// Core domain errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Product id is not in the catalog.
    ///
    /// ## When This Occurs
    /// - The renderer sends a stale or made-up id to `add_to_cart`
    /// - `open_product` for an id that was never rendered
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    /// Category id is neither `all` nor declared by the catalog.
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// Two catalog records share one id.
    #[error("Duplicate product id {0} in catalog")]
    DuplicateProduct(ProductId),

    /// Catalog JSON could not be parsed.
    #[error("Invalid catalog data: {0}")]
    CatalogFormat(String),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl From<serde_json::Error> for CoreError {
    fn from(err: serde_json::Error) -> Self {
        CoreError::CatalogFormat(err.to_string())
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Invalid format (e.g. category id with spaces).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Duplicate value (e.g. two categories with one id).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;
