//! # Error Types
//!
//! Domain-specific error types for smartcart-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  smartcart-core errors (this file)                                     │
//! │  ├── CoreError        - Cart operation outcomes the user must see      │
//! │  └── ValidationError  - Field validation failures                      │
//! │                                                                         │
//! │  smartcart-catalog errors (separate crate)                             │
//! │  └── CatalogLoadError - Startup catalog failures (fatal)               │
//! │                                                                         │
//! │  Scanner app errors                                                    │
//! │  └── AppError         - What the operator sees (code + message)        │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → AppError → diagnostic line        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every `CoreError` is recoverable: the cart is left exactly as it was
//! before the failed operation.

use thiserror::Error;

use crate::money::Money;

// =============================================================================
// Core Error
// =============================================================================

/// Cart and catalog lookup errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// The scanned barcode is not in the catalog.
    ///
    /// ## User Workflow
    /// ```text
    /// Scan "999"
    ///      │
    ///      ▼
    /// catalog.get("999") → None
    ///      │
    ///      ▼
    /// ProductNotFound("999")
    ///      │
    ///      ▼
    /// UI shows: "Unknown product: 999" (cart unchanged)
    /// ```
    #[error("Unknown product: {0}")]
    ProductNotFound(String),

    /// A remove/increment/decrement was requested but no cart line is
    /// identified (nothing selected, index out of range, barcode not in cart).
    #[error("No cart line selected")]
    NoSelection,

    /// Line quantity would exceed the maximum allowed.
    #[error("Quantity {requested} exceeds maximum allowed ({max})")]
    QuantityTooLarge { requested: u64, max: u32 },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    Negative { field: String },

    /// Value is above its upper bound.
    #[error("{field} must be at most {max}")]
    TooLarge { field: String, max: Money },

    /// Invalid format (e.g., a price that is not a decimal number).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Duplicate value (e.g., the same barcode twice in a catalog).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

impl ValidationError {
    pub(crate) fn required(field: &str) -> Self {
        ValidationError::Required {
            field: field.to_string(),
        }
    }

    pub(crate) fn invalid_format(field: &str, reason: &str) -> Self {
        ValidationError::InvalidFormat {
            field: field.to_string(),
            reason: reason.to_string(),
        }
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
