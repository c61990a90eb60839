//! # Cart
//!
//! The quantity-aggregated shopping cart.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  User Action              Operation              State Change           │
//! │  ───────────              ─────────              ────────────           │
//! │                                                                         │
//! │  Scan barcode ───────────► scan() ──────────────► qty += 1 / new line  │
//! │                                                                         │
//! │  Press "+" on a line ────► increment_line() ────► qty += 1             │
//! │                                                                         │
//! │  Press "-" on a line ────► decrement_line() ────► qty -= 1 (1 → gone)  │
//! │                                                                         │
//! │  Remove selected line ───► remove_line() ───────► line gone            │
//! │                                                                         │
//! │  Clear ──────────────────► clear() ─────────────► no lines             │
//! │                                                                         │
//! │  Any of the above ───────► total() ─────────────► Σ price × qty        │
//! │                                                                         │
//! │  NOTE: A failed operation never changes the cart.                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - Lines are unique by barcode (scanning again increases quantity)
//! - Every line has `1 <= quantity <= MAX_ITEM_QUANTITY`
//! - Lines keep the order in which their product was first scanned
//! - `total()` is always recomputed from the lines, never kept as a running sum

use indexmap::map::Entry;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{CartSnapshot, CartStatus, LineSelector, LineView, Product};
use crate::validation::validate_barcode;
use crate::MAX_ITEM_QUANTITY;

// =============================================================================
// Cart Line
// =============================================================================

/// One product in the cart and how many of it were scanned.
///
/// ## Price Freezing
/// Name and unit price are copied from the product when the line is created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub barcode: String,
    pub name: String,
    pub unit_price: Money,
    pub quantity: u32,
}

impl CartLine {
    /// Creates a line with quantity 1.
    pub fn from_product(product: &Product) -> Self {
        CartLine {
            barcode: product.barcode.clone(),
            name: product.name.clone(),
            unit_price: product.price,
            quantity: 1,
        }
    }

    /// unit_price × quantity
    #[inline]
    pub fn subtotal(&self) -> Money {
        self.unit_price.multiply_quantity(self.quantity)
    }

    fn increment(&mut self) -> CoreResult<()> {
        if self.quantity >= MAX_ITEM_QUANTITY {
            return Err(CoreError::QuantityTooLarge {
                requested: u64::from(self.quantity) + 1,
                max: MAX_ITEM_QUANTITY,
            });
        }
        self.quantity += 1;
        Ok(())
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The cart for one session.
///
/// Serializes for logging and export. It is never deserialized: a cart is
/// only built by scanning, which keeps every line at `1..=MAX_ITEM_QUANTITY`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Cart {
    lines: IndexMap<String, CartLine>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart::default()
    }

    /// Adds one unit of the scanned product.
    ///
    /// ## Behavior
    /// - Barcode is trimmed before lookup
    /// - Known barcode already in cart: quantity increases by 1
    /// - Known barcode not in cart: new line with quantity 1 at the end
    ///
    /// ## Errors
    /// - `Validation` for blank input
    /// - `ProductNotFound` for a barcode missing from the catalog
    /// - `QuantityTooLarge` when the line is already at the maximum
    ///
    /// The cart is unchanged on every error.
    pub fn scan(&mut self, barcode: &str, catalog: &Catalog) -> CoreResult<&CartLine> {
        let barcode = validate_barcode(barcode)?;
        let product = catalog
            .get(barcode)
            .ok_or_else(|| CoreError::ProductNotFound(barcode.to_string()))?;

        let line = match self.lines.entry(product.barcode.clone()) {
            Entry::Occupied(entry) => {
                let line = entry.into_mut();
                line.increment()?;
                line
            }
            Entry::Vacant(entry) => entry.insert(CartLine::from_product(product)),
        };

        Ok(line)
    }

    /// Removes the selected line entirely, whatever its quantity.
    ///
    /// ## Errors
    /// `NoSelection` when nothing is selected or the selection matches no line.
    pub fn remove_line(&mut self, selection: Option<LineSelector>) -> CoreResult<CartLine> {
        let position = self.resolve(selection)?;
        self.lines
            .shift_remove_index(position)
            .map(|(_, line)| line)
            .ok_or(CoreError::NoSelection)
    }

    /// Adds one unit to the selected line.
    pub fn increment_line(&mut self, selection: Option<LineSelector>) -> CoreResult<&CartLine> {
        let position = self.resolve(selection)?;
        let (_, line) = self
            .lines
            .get_index_mut(position)
            .ok_or(CoreError::NoSelection)?;
        line.increment()?;
        Ok(line)
    }

    /// Takes one unit off the selected line.
    ///
    /// ## Returns
    /// - `Ok(None)` when the line is still in the cart
    /// - `Ok(Some(line))` when the line was at quantity 1 and got removed
    pub fn decrement_line(
        &mut self,
        selection: Option<LineSelector>,
    ) -> CoreResult<Option<CartLine>> {
        let position = self.resolve(selection)?;
        let (_, line) = self
            .lines
            .get_index_mut(position)
            .ok_or(CoreError::NoSelection)?;

        if line.quantity > 1 {
            line.quantity -= 1;
            return Ok(None);
        }

        Ok(self.lines.shift_remove_index(position).map(|(_, line)| line))
    }

    /// Clears all lines from the cart.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Sum of every line's subtotal, computed on each call.
    pub fn total(&self) -> Money {
        self.lines.values().map(CartLine::subtotal).sum()
    }

    /// Lines in display order.
    pub fn lines(&self) -> impl Iterator<Item = &CartLine> {
        self.lines.values()
    }

    /// Returns the selected line, if any.
    pub fn line(&self, selection: &LineSelector) -> Option<&CartLine> {
        match selection {
            LineSelector::Index(index) => self.lines.get_index(*index).map(|(_, line)| line),
            LineSelector::Barcode(barcode) => self.lines.get(barcode.trim()),
        }
    }

    /// Returns the number of distinct lines.
    pub fn item_count(&self) -> usize {
        self.lines.len()
    }

    /// Returns the total quantity of all lines.
    pub fn total_quantity(&self) -> u64 {
        self.lines.values().map(|l| u64::from(l.quantity)).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn status(&self) -> CartStatus {
        if self.is_empty() {
            CartStatus::Empty
        } else {
            CartStatus::NonEmpty
        }
    }

    /// Builds the render-ready view of the cart.
    pub fn snapshot(&self) -> CartSnapshot {
        let lines = self
            .lines
            .values()
            .enumerate()
            .map(|(position, line)| LineView {
                position: position as u32,
                barcode: line.barcode.clone(),
                name: line.name.clone(),
                unit_price: line.unit_price,
                quantity: line.quantity,
                subtotal: line.subtotal(),
            })
            .collect();

        CartSnapshot {
            lines,
            item_count: self.item_count() as u32,
            total_quantity: self.total_quantity(),
            total: self.total(),
            status: self.status(),
        }
    }

    /// Maps a selection to a line position.
    fn resolve(&self, selection: Option<LineSelector>) -> CoreResult<usize> {
        match selection.ok_or(CoreError::NoSelection)? {
            LineSelector::Index(index) if index < self.lines.len() => Ok(index),
            LineSelector::Index(_) => Err(CoreError::NoSelection),
            LineSelector::Barcode(barcode) => self
                .lines
                .get_index_of(barcode.trim())
                .ok_or(CoreError::NoSelection),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;

    fn test_catalog() -> Catalog {
        vec![
            Product::new("001", "Soap", Money::from_cents(2500)),
            Product::new("002", "Bread", Money::from_cents(4550)),
            Product::new("0003", "Milk", Money::from_cents(199)),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_scan_adds_line() {
        let catalog = test_catalog();
        let mut cart = Cart::new();

        let line = cart.scan("001", &catalog).unwrap();
        assert_eq!(line.name, "Soap");
        assert_eq!(line.quantity, 1);

        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.total(), Money::from_cents(2500));
        assert_eq!(cart.status(), CartStatus::NonEmpty);
    }

    #[test]
    fn test_scan_same_product_increases_quantity() {
        let catalog = test_catalog();
        let mut cart = Cart::new();

        cart.scan("001", &catalog).unwrap();
        let line = cart.scan("001", &catalog).unwrap();
        assert_eq!(line.quantity, 2);

        assert_eq!(cart.item_count(), 1); // Still one line
        assert_eq!(cart.total_quantity(), 2);
    }

    #[test]
    fn test_scan_trims_input() {
        let catalog = test_catalog();
        let mut cart = Cart::new();

        cart.scan("  0003\n", &catalog).unwrap();
        assert_eq!(cart.lines().next().map(|l| l.barcode.as_str()), Some("0003"));
    }

    #[test]
    fn test_scan_unknown_leaves_cart_unchanged() {
        let catalog = test_catalog();
        let mut cart = Cart::new();
        cart.scan("002", &catalog).unwrap();
        let before = cart.snapshot();

        let err = cart.scan("999", &catalog).unwrap_err();
        assert_eq!(err, CoreError::ProductNotFound("999".to_string()));
        assert_eq!(cart.snapshot(), before);

        // Numeric coercion would have matched "0003"
        assert!(matches!(
            cart.scan("3", &catalog),
            Err(CoreError::ProductNotFound(_))
        ));
    }

    #[test]
    fn test_cart_serializes_lines_in_order() {
        let catalog = test_catalog();
        let mut cart = Cart::new();
        cart.scan("002", &catalog).unwrap();
        cart.scan("001", &catalog).unwrap();

        let json = serde_json::to_string(&cart).unwrap();
        let bread = json.find("\"002\"").unwrap();
        let soap = json.find("\"001\"").unwrap();
        assert!(bread < soap);
    }

    #[test]
    fn test_scan_blank_is_validation_error() {
        let catalog = test_catalog();
        let mut cart = Cart::new();

        assert!(matches!(
            cart.scan("   ", &catalog),
            Err(CoreError::Validation(ValidationError::Required { .. }))
        ));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_scan_stops_at_max_quantity() {
        let catalog = test_catalog();
        let mut cart = Cart::new();
        for _ in 0..MAX_ITEM_QUANTITY {
            cart.scan("0003", &catalog).unwrap();
        }

        let err = cart.scan("0003", &catalog).unwrap_err();
        assert!(matches!(err, CoreError::QuantityTooLarge { max, .. } if max == MAX_ITEM_QUANTITY));
        assert_eq!(cart.total_quantity(), u64::from(MAX_ITEM_QUANTITY));
    }

    #[test]
    fn test_most_expensive_lines_total_exactly() {
        let mut builder = crate::CatalogBuilder::new(crate::DuplicatePolicy::Reject);
        for barcode in ["A", "B", "C"] {
            builder
                .add(Product::new(barcode, "Gold", crate::MAX_PRICE))
                .unwrap();
        }
        let catalog = builder.build();

        let mut cart = Cart::new();
        for barcode in ["A", "B", "C"] {
            for _ in 0..MAX_ITEM_QUANTITY {
                cart.scan(barcode, &catalog).unwrap();
            }
        }

        let expected = crate::MAX_PRICE.cents() * i64::from(MAX_ITEM_QUANTITY) * 3;
        assert_eq!(cart.total().cents(), expected);
    }

    #[test]
    fn test_overflowing_price_never_reaches_cart() {
        let mut builder = crate::CatalogBuilder::new(crate::DuplicatePolicy::Overwrite);
        let price: Money = "50000000000000000".parse().unwrap();

        let err = builder
            .add(Product::new("001", "Bullion", price))
            .unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::TooLarge { .. })
        ));
        assert!(builder.is_empty());
    }

    #[test]
    fn test_worked_example() {
        let catalog = test_catalog();
        let mut cart = Cart::new();

        cart.scan("001", &catalog).unwrap();
        cart.scan("001", &catalog).unwrap();
        cart.scan("002", &catalog).unwrap();

        let snapshot = cart.snapshot();
        assert_eq!(snapshot.lines.len(), 2);
        assert_eq!(snapshot.lines[0].name, "Soap");
        assert_eq!(snapshot.lines[0].quantity, 2);
        assert_eq!(snapshot.lines[0].subtotal, Money::from_cents(5000));
        assert_eq!(snapshot.lines[1].name, "Bread");
        assert_eq!(snapshot.lines[1].subtotal, Money::from_cents(4550));
        assert_eq!(snapshot.total, Money::from_cents(9550));

        let removed = cart.remove_line(Some(LineSelector::Index(0))).unwrap();
        assert_eq!(removed.name, "Soap");
        assert_eq!(cart.total(), Money::from_cents(4550));

        assert!(matches!(
            cart.scan("999", &catalog),
            Err(CoreError::ProductNotFound(_))
        ));
        assert_eq!(cart.total(), Money::from_cents(4550));
    }

    #[test]
    fn test_total_matches_price_times_count() {
        let catalog = test_catalog();
        let mut cart = Cart::new();
        let scans = ["002", "0003", "001", "0003", "002", "0003", "001"];

        for barcode in scans {
            cart.scan(barcode, &catalog).unwrap();
        }

        let expected: Money = scans
            .iter()
            .filter_map(|b| catalog.get(b))
            .map(|p| p.price)
            .sum();
        assert_eq!(cart.total(), expected);
        assert_eq!(cart.total_quantity(), scans.len() as u64);
        // First-scan order is kept
        let order: Vec<_> = cart.lines().map(|l| l.barcode.as_str()).collect();
        assert_eq!(order, vec!["002", "0003", "001"]);
    }

    #[test]
    fn test_remove_line_by_barcode() {
        let catalog = test_catalog();
        let mut cart = Cart::new();
        cart.scan("001", &catalog).unwrap();
        cart.scan("001", &catalog).unwrap();
        cart.scan("002", &catalog).unwrap();

        let before_total = cart.total();
        let removed = cart.remove_line(Some(LineSelector::barcode("001"))).unwrap();

        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.total(), before_total - removed.subtotal());
    }

    #[test]
    fn test_remove_without_selection_is_noop() {
        let catalog = test_catalog();
        let mut cart = Cart::new();
        cart.scan("001", &catalog).unwrap();
        let before = cart.snapshot();

        assert_eq!(cart.remove_line(None), Err(CoreError::NoSelection));
        assert_eq!(
            cart.remove_line(Some(LineSelector::Index(5))),
            Err(CoreError::NoSelection)
        );
        assert_eq!(
            cart.remove_line(Some(LineSelector::barcode("002"))),
            Err(CoreError::NoSelection)
        );
        assert_eq!(cart.snapshot(), before);

        let mut empty = Cart::new();
        assert_eq!(empty.remove_line(Some(LineSelector::Index(0))), Err(CoreError::NoSelection));
    }

    #[test]
    fn test_decrement_removes_at_one() {
        let catalog = test_catalog();
        let mut cart = Cart::new();
        cart.scan("001", &catalog).unwrap();
        cart.scan("001", &catalog).unwrap();

        assert_eq!(cart.decrement_line(Some(LineSelector::Index(0))).unwrap(), None);
        assert_eq!(cart.total_quantity(), 1);

        let removed = cart.decrement_line(Some(LineSelector::Index(0))).unwrap();
        assert_eq!(removed.map(|l| l.barcode), Some("001".to_string()));
        assert!(cart.is_empty());
        assert_eq!(cart.status(), CartStatus::Empty);
    }

    #[test]
    fn test_increment_then_decrement_restores_state() {
        let catalog = test_catalog();
        let mut cart = Cart::new();
        cart.scan("001", &catalog).unwrap();
        cart.scan("002", &catalog).unwrap();
        let before = cart.snapshot();

        for _ in 0..3 {
            cart.increment_line(Some(LineSelector::barcode("002"))).unwrap();
        }
        assert_eq!(cart.line(&LineSelector::barcode("002")).map(|l| l.quantity), Some(4));
        for _ in 0..3 {
            cart.decrement_line(Some(LineSelector::barcode("002"))).unwrap();
        }

        assert_eq!(cart.snapshot(), before);
    }

    #[test]
    fn test_increment_without_selection() {
        let mut cart = Cart::new();
        assert!(matches!(cart.increment_line(None), Err(CoreError::NoSelection)));
        assert!(matches!(cart.decrement_line(None), Err(CoreError::NoSelection)));
    }

    #[test]
    fn test_clear() {
        let catalog = test_catalog();
        let mut cart = Cart::new();
        cart.scan("001", &catalog).unwrap();
        cart.scan("002", &catalog).unwrap();
        assert!(!cart.is_empty());

        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.total(), Money::zero());
        assert_eq!(cart.snapshot().lines.len(), 0);

        // Clearing an empty cart is fine too
        cart.clear();
        assert_eq!(cart.total(), Money::zero());
    }

    #[test]
    fn test_line_keeps_price_at_scan_time() {
        let old_catalog = test_catalog();
        let new_catalog: Catalog = vec![Product::new("001", "Soap", Money::from_cents(3000))]
            .into_iter()
            .collect();
        let mut cart = Cart::new();

        cart.scan("001", &old_catalog).unwrap();
        cart.scan("001", &new_catalog).unwrap();

        assert_eq!(cart.total(), Money::from_cents(5000));
    }
}
