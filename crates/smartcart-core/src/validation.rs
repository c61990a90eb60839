//! # Validation Module
//!
//! Field validation shared by the catalog loader and the scanner.
//!
//! ## Validation Layers
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: CSV reader (smartcart-catalog)                               │
//! │  └── Structure: header row, required columns, quoting                  │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── barcode: present, bounded, printable                              │
//! │  ├── name: present, bounded                                            │
//! │  └── price: not negative, at most MAX_PRICE                            │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Catalog / Cart                                               │
//! │  └── Uniqueness of barcodes, quantity limits                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::money::Money;
use crate::{MAX_BARCODE_LEN, MAX_PRICE, MAX_PRODUCT_NAME_LEN};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a barcode and returns it trimmed.
///
/// ## Rules
/// - Surrounding whitespace is removed (scanners often append a newline)
/// - Must not be empty
/// - At most [`MAX_BARCODE_LEN`] characters
/// - No control characters
///
/// The content is otherwise opaque: leading zeros and letters are kept.
///
/// ## Example
/// ```rust
/// use smartcart_core::validation::validate_barcode;
///
/// assert_eq!(validate_barcode(" 00123\n").unwrap(), "00123");
/// assert!(validate_barcode("   ").is_err());
/// ```
pub fn validate_barcode(barcode: &str) -> ValidationResult<&str> {
    let barcode = barcode.trim();

    if barcode.is_empty() {
        return Err(ValidationError::required("barcode"));
    }

    if barcode.chars().count() > MAX_BARCODE_LEN {
        return Err(ValidationError::TooLong {
            field: "barcode".to_string(),
            max: MAX_BARCODE_LEN,
        });
    }

    if barcode.chars().any(char::is_control) {
        return Err(ValidationError::invalid_format(
            "barcode",
            "must not contain control characters",
        ));
    }

    Ok(barcode)
}

/// Validates a product name and returns it trimmed.
///
/// ## Example
/// ```rust
/// use smartcart_core::validation::validate_product_name;
///
/// assert_eq!(validate_product_name(" Soap ").unwrap(), "Soap");
/// assert!(validate_product_name("").is_err());
/// ```
pub fn validate_product_name(name: &str) -> ValidationResult<&str> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::required("name"));
    }

    if name.chars().count() > MAX_PRODUCT_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_PRODUCT_NAME_LEN,
        });
    }

    Ok(name)
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a catalog price. Zero is allowed (free items); anything above
/// [`MAX_PRICE`] is rejected.
pub fn validate_price(price: Money) -> ValidationResult<Money> {
    if price.is_negative() {
        return Err(ValidationError::Negative {
            field: "price".to_string(),
        });
    }

    if price > MAX_PRICE {
        return Err(ValidationError::TooLarge {
            field: "price".to_string(),
            max: MAX_PRICE,
        });
    }

    Ok(price)
}

/// Parses and validates a catalog price field.
///
/// ## Example
/// ```rust
/// use smartcart_core::validation::parse_price;
///
/// assert_eq!(parse_price("45.50").unwrap().cents(), 4550);
/// assert!(parse_price("-1").is_err());
/// assert!(parse_price("free").is_err());
/// ```
pub fn parse_price(raw: &str) -> ValidationResult<Money> {
    validate_price(raw.parse()?)
}

// =============================================================================
// Unit Tests
// =============================================================================
