//! # Catalog
//!
//! The read-only barcode → product mapping built once at startup.
//!
//! A [`Catalog`] has no mutating methods. It is assembled through a
//! [`CatalogBuilder`], which is where the duplicate-barcode policy lives,
//! and is then only read by the cart.

use std::collections::hash_map::{Entry, HashMap};

use crate::error::{CoreResult, ValidationError};
use crate::types::{DuplicatePolicy, Product};
use crate::validation::validate_price;

// =============================================================================
// Catalog
// =============================================================================

/// Known products keyed by barcode.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    products: HashMap<String, Product>,
}

impl Catalog {
    /// Looks up a product by exact barcode.
    #[inline]
    pub fn get(&self, barcode: &str) -> Option<&Product> {
        self.products.get(barcode)
    }

    #[inline]
    pub fn contains(&self, barcode: &str) -> bool {
        self.products.contains_key(barcode)
    }

    /// Number of distinct barcodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Iterates over products in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.values()
    }
}

/// Collects products with last-write-wins semantics.
impl FromIterator<Product> for Catalog {
    fn from_iter<I: IntoIterator<Item = Product>>(iter: I) -> Self {
        Catalog {
            products: iter
                .into_iter()
                .map(|product| (product.barcode.clone(), product))
                .collect(),
        }
    }
}

// =============================================================================
// Builder
// =============================================================================

/// Accumulates products and applies a [`DuplicatePolicy`].
///
/// ## Duplicate Handling
/// ```text
/// add(001 Soap)        ──► inserted                     Ok(None)
/// add(001 Soap Bar)    ──┬─ Overwrite ──► replaced       Ok(Some(Soap))
///                        └─ Reject    ──► Duplicate error, builder unchanged
/// ```
#[derive(Debug, Default)]
pub struct CatalogBuilder {
    policy: DuplicatePolicy,
    products: HashMap<String, Product>,
}

impl CatalogBuilder {
    pub fn new(policy: DuplicatePolicy) -> Self {
        CatalogBuilder {
            policy,
            products: HashMap::new(),
        }
    }

    /// Adds a product.
    ///
    /// ## Returns
    /// - `Ok(None)` for a new barcode
    /// - `Ok(Some(previous))` when [`DuplicatePolicy::Overwrite`] replaced an entry
    /// - `Err(Validation(Duplicate))` when [`DuplicatePolicy::Reject`] refuses it
    /// - `Err(Validation(..))` for a negative price or one above [`MAX_PRICE`](crate::MAX_PRICE)
    pub fn add(&mut self, product: Product) -> CoreResult<Option<Product>> {
        validate_price(product.price)?;

        match self.products.entry(product.barcode.clone()) {
            Entry::Vacant(entry) => {
                entry.insert(product);
                Ok(None)
            }
            Entry::Occupied(mut entry) => match self.policy {
                DuplicatePolicy::Overwrite => Ok(Some(entry.insert(product))),
                DuplicatePolicy::Reject => Err(ValidationError::Duplicate {
                    field: "barcode".to_string(),
                    value: product.barcode,
                }
                .into()),
            },
        }
    }

    /// Number of distinct barcodes added so far.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Freezes the builder into a read-only catalog.
    pub fn build(self) -> Catalog {
        Catalog {
            products: self.products,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
