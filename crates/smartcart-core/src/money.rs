//! # Money Module
//!
//! Provides the `Money` type for handling monetary values exactly.
//!
//! ## Cents, Not Floats
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Parsing                                                                │
//! │    "45.50" ──► 4550 cents          (never routed through f64)           │
//! │    "45.5"  ──► 4550 cents          (one digit means tenths)             │
//! │    "45.505" ──► InvalidFormat      (no silent rounding)                 │
//! │                                                                         │
//! │  Totals                                                                 │
//! │    Cart.total = Σ unit_price × quantity, recomputed on demand.          │
//! │    There is no running balance to drift after a remove.                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use smartcart_core::money::Money;
//!
//! let price: Money = "45.50".parse().unwrap();
//! assert_eq!(price.cents(), 4550);
//!
//! let doubled = price * 2;
//! assert_eq!(doubled, Money::from_cents(9100));
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use std::str::FromStr;
use ts_rs::TS;

use crate::error::ValidationError;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents).
///
/// ## Design Decisions
/// - **i64 (signed)**: Subtraction of subtotals never underflows
/// - **Newtype over i64**: Copy, hashable, ordered like plain cents
/// - **Derives**: Full serde support for JSON snapshots
///
/// ## Where Money is Used
/// ```text
/// products.csv "price" ──► Product.price ──► CartLine.unit_price
///                                                  │
///                                    × quantity    ▼
///                                           CartLine.subtotal ──► Cart.total
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use smartcart_core::money::Money;
    ///
    /// let price = Money::from_cents(2500); // Represents 25.00
    /// assert_eq!(price.cents(), 2500);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit portion.
    ///
    /// ## Example
    /// ```rust
    /// use smartcart_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(4550).major(), 45);
    /// assert_eq!(Money::from_cents(-550).major(), -5);
    /// ```
    #[inline]
    pub const fn major(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit portion (always 0-99).
    #[inline]
    pub const fn minor(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies money by a line quantity.
    ///
    /// ## Example
    /// ```rust
    /// use smartcart_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(2500);
    /// assert_eq!(unit_price.multiply_quantity(2).cents(), 5000);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: u32) -> Self {
        Money(self.0 * qty as i64)
    }
}

// =============================================================================
// Parsing
// =============================================================================

/// Parses a plain decimal amount such as `"25"`, `"45.5"` or `"45.50"`.
///
/// ## Rules
/// - Surrounding whitespace is ignored
/// - Optional leading sign
/// - At most two fractional digits (`"1.999"` is rejected, never rounded)
/// - No exponents, no thousands separators, no currency symbols
///
/// The digits go straight to cents without passing through a float.
impl FromStr for Money {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ValidationError::required("price"));
        }

        let (negative, digits) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s.strip_prefix('+').unwrap_or(s)),
        };

        let (major, minor) = digits.split_once('.').unwrap_or((digits, ""));

        if major.is_empty() && minor.is_empty() {
            return Err(ValidationError::invalid_format("price", "not a number"));
        }
        if !major.bytes().all(|b| b.is_ascii_digit()) || !minor.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(ValidationError::invalid_format(
                "price",
                "not a decimal number",
            ));
        }
        if minor.len() > 2 {
            return Err(ValidationError::invalid_format(
                "price",
                "more than two decimal places",
            ));
        }

        let too_large = || ValidationError::invalid_format("price", "amount too large");

        let major_units: i64 = if major.is_empty() {
            0
        } else {
            major.parse().map_err(|_| too_large())?
        };

        // "5" after the point is fifty cents, not five
        let minor_units: i64 = match minor.len() {
            0 => 0,
            1 => minor.parse::<i64>().map_err(|_| too_large())? * 10,
            _ => minor.parse().map_err(|_| too_large())?,
        };

        let cents = major_units
            .checked_mul(100)
            .and_then(|c| c.checked_add(minor_units))
            .ok_or_else(too_large)?;

        Ok(Money(if negative { -cents } else { cents }))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money with a dollar sign and two decimals.
///
/// ## Note
/// This is for debugging and logs. The scanner formats amounts through its
/// configuration (symbol, decimals, trailing-zero trimming).
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}${}.{:02}", sign, self.major().abs(), self.minor())
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by a quantity.
impl Mul<u32> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: u32) -> Self {
        self.multiply_quantity(qty)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
