//! # App Error Type
//!
//! Unified error type for scanner commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Smart Cart                             │
//! │                                                                         │
//! │  Startup                         Input loop                             │
//! │  ───────                         ──────────                             │
//! │                                                                         │
//! │  CatalogLoadError                CoreError / bad command                │
//! │        │                                │                               │
//! │        ▼                                ▼                               │
//! │  AppError { CatalogError }       AppError { NotFound, NoSelection, … } │
//! │        │                                │                               │
//! │        ▼                                ▼                               │
//! │  print + exit(1)                 print "! message", keep reading        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each error carries a machine-readable `code` and a human-readable
//! `message`, so a graphical front end can branch on the code.

use serde::Serialize;
use smartcart_catalog::CatalogLoadError;
use smartcart_core::CoreError;

/// Error returned from scanner commands.
///
/// ## Serialization
/// ```json
/// {
///   "code": "NOT_FOUND",
///   "message": "Unknown product: 999"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for command responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Scanned barcode is not in the catalog
    NotFound,

    /// Remove/modify with no line identified
    NoSelection,

    /// Input validation failed
    ValidationError,

    /// Line quantity limit reached
    QuantityLimit,

    /// Input line is not a recognised command
    InvalidCommand,

    /// Catalog could not be loaded. Only raised before the session starts,
    /// so it always ends the program
    CatalogError,
}

impl AppError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        AppError {
            code,
            message: message.into(),
        }
    }

    /// Creates an invalid command error.
    pub fn invalid_command(message: impl Into<String>) -> Self {
        AppError::new(ErrorCode::InvalidCommand, message)
    }
}

/// Converts core errors to app errors.
impl From<CoreError> for AppError {
    fn from(err: CoreError) -> Self {
        let code = match &err {
            CoreError::ProductNotFound(_) => ErrorCode::NotFound,
            CoreError::NoSelection => ErrorCode::NoSelection,
            CoreError::QuantityTooLarge { .. } => ErrorCode::QuantityLimit,
            CoreError::Validation(_) => ErrorCode::ValidationError,
        };
        AppError::new(code, err.to_string())
    }
}

/// Converts catalog load errors to app errors.
impl From<CatalogLoadError> for AppError {
    fn from(err: CatalogLoadError) -> Self {
        tracing::error!(error = %err, "Catalog load failed");
        AppError::new(ErrorCode::CatalogError, err.to_string())
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::*;
    use smartcart_core::ValidationError;

    #[test]
    fn test_core_error_mapping() {
        let err = AppError::from(CoreError::ProductNotFound("999".to_string()));
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "Unknown product: 999");

        assert_eq!(AppError::from(CoreError::NoSelection).code, ErrorCode::NoSelection);
        assert_eq!(
            AppError::from(CoreError::Validation(ValidationError::Required {
                field: "barcode".to_string()
            }))
            .code,
            ErrorCode::ValidationError
        );
    }

    #[test]
    fn test_catalog_error_mapping() {
        let err = AppError::from(CatalogLoadError::MissingColumn {
            column: "price",
            found: vec![],
        });
        assert_eq!(err.code, ErrorCode::CatalogError);
    }

    #[test]
    fn test_serialization() {
        let err = AppError::from(CoreError::NoSelection);
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "NO_SELECTION");
        assert_eq!(json["message"], "No cart line selected");
    }
}
