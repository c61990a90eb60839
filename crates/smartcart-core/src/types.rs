//! # Domain Types
//!
//! Core domain types used throughout Smart Cart.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │  LineSelector   │   │  CartSnapshot   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  barcode (key)  │   │  Index(usize)   │   │  lines          │       │
//! │  │  name           │   │  Barcode(str)   │   │  item_count     │       │
//! │  │  price (Money)  │   └─────────────────┘   │  total          │       │
//! │  └─────────────────┘                         └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐                             │
//! │  │ DuplicatePolicy │   │   CartStatus    │                             │
//! │  │  Reject         │   │   Empty         │                             │
//! │  │  Overwrite      │   │   NonEmpty      │                             │
//! │  └─────────────────┘   └─────────────────┘                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Barcodes are opaque strings: `"001"` and `"1"` are different products.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Product
// =============================================================================

/// A product available for scanning. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Product {
    /// Barcode - unique catalog key, never coerced to a number.
    pub barcode: String,

    /// Display name shown in the cart.
    pub name: String,

    /// Unit price.
    pub price: Money,
}

impl Product {
    /// Creates a product.
    pub fn new(barcode: impl Into<String>, name: impl Into<String>, price: Money) -> Self {
        Product {
            barcode: barcode.into(),
            name: name.into(),
            price,
        }
    }
}

// =============================================================================
// Duplicate Policy
// =============================================================================

/// What the catalog does when the same barcode appears twice.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
    /// Fail the load.
    Reject,
    /// Last row wins; the replacement is reported.
    #[default]
    Overwrite,
}

// =============================================================================
// Line Selection
// =============================================================================

/// Identifies one cart line for removal or quantity changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineSelector {
    /// Zero-based position in display order.
    Index(usize),
    /// Barcode of the line's product.
    Barcode(String),
}

impl LineSelector {
    /// Selects by barcode.
    pub fn barcode(barcode: impl Into<String>) -> Self {
        LineSelector::Barcode(barcode.into())
    }
}

// =============================================================================
// Cart Status
// =============================================================================

/// The cart's only states. Every operation moves between these two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum CartStatus {
    Empty,
    NonEmpty,
}

// =============================================================================
// Snapshot (UI output boundary)
// =============================================================================

/// One rendered cart line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct LineView {
    /// Zero-based position in the cart.
    pub position: u32,
    pub barcode: String,
    pub name: String,
    pub unit_price: Money,
    pub quantity: u32,
    /// unit_price × quantity
    pub subtotal: Money,
}

/// Everything a UI needs to draw the cart after a mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartSnapshot {
    pub lines: Vec<LineView>,
    /// Number of distinct lines.
    pub item_count: u32,
    /// Sum of quantities.
    pub total_quantity: u64,
    pub total: Money,
    pub status: CartStatus,
}

impl CartSnapshot {
    /// Serializes the snapshot for a web or desktop front end.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
