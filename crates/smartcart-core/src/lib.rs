//! # smartcart-core: Pure Business Logic for Smart Cart
//!
//! This crate is the heart of Smart Cart. It holds the catalog and cart
//! logic as plain data and pure functions, with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Smart Cart Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Scanner front end (apps/scanner)             │   │
//! │  │    barcode line ──► Command ──► Session ──► rendered snapshot   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ smartcart-core (THIS CRATE) ★                   │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   cart    │  │ validation│  │   │
//! │  │   │  Product  │  │   Money   │  │   Cart    │  │   rules   │  │   │
//! │  │   │  Snapshot │  │           │  │ CartLine  │  │           │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                        ┌───────────┐                           │   │
//! │  │                        │  catalog  │                           │   │
//! │  │                        │  Catalog  │                           │   │
//! │  │                        └───────────┘                           │   │
//! │  │   NO I/O • NO FILES • NO EVENT LOOP • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                ▲                                        │
//! │  ┌─────────────────────────────┴───────────────────────────────────┐   │
//! │  │               smartcart-catalog (File Layer)                    │   │
//! │  │                 products.csv ──► Catalog                        │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, LineSelector, CartSnapshot)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`catalog`] - Read-only barcode → product mapping
//! - [`cart`] - Quantity-aggregated cart
//! - [`error`] - Domain error types
//! - [`validation`] - Field validation rules
//!
//! ## Example Usage
//!
//! ```rust
//! use smartcart_core::{Cart, Catalog, Money, Product};
//!
//! let catalog: Catalog = vec![
//!     Product::new("001", "Soap", Money::from_cents(2500)),
//!     Product::new("002", "Bread", Money::from_cents(4550)),
//! ]
//! .into_iter()
//! .collect();
//!
//! let mut cart = Cart::new();
//! cart.scan("001", &catalog).unwrap();
//! cart.scan("001", &catalog).unwrap();
//! cart.scan("002", &catalog).unwrap();
//!
//! assert_eq!(cart.total(), Money::from_cents(9550));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{Cart, CartLine};
pub use catalog::{Catalog, CatalogBuilder};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum quantity of a single cart line.
///
/// ## Business Reason
/// Prevents a stuck scanner key from turning one product into a runaway line.
pub const MAX_ITEM_QUANTITY: u32 = 999;

/// Maximum catalog price ($999,999.99).
///
/// Bounds a line subtotal at `MAX_PRICE × MAX_ITEM_QUANTITY` (about 10^11
/// cents), so cart totals stay far inside `i64`.
pub const MAX_PRICE: Money = Money::from_cents(99_999_999);

/// Maximum barcode length accepted from the catalog or the scanner.
pub const MAX_BARCODE_LEN: usize = 64;

/// Maximum product name length.
pub const MAX_PRODUCT_NAME_LEN: usize = 200;
