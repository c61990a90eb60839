//! # Catalog Loader
//!
//! Reads `barcode,name,price` records into a [`Catalog`].
//!
//! ## How Loading Works
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    products.csv → Catalog                               │
//! │                                                                         │
//! │  header row ──► locate "barcode", "name", "price" (exact, any order)   │
//! │       │          missing one? ──► MissingColumn                        │
//! │       ▼                                                                 │
//! │  each record ──► trim + validate fields                                │
//! │       │          bad field?   ──► InvalidRecord { line }               │
//! │       ▼                                                                 │
//! │  CatalogBuilder::add                                                   │
//! │       │          duplicate + Reject    ──► DuplicateBarcode { line }   │
//! │       │          duplicate + Overwrite ──► warn!, later row wins       │
//! │       ▼                                                                 │
//! │  Catalog (only returned once every record succeeded)                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fs::File;
use std::io::Read;

use csv::StringRecord;
use smartcart_core::validation::{parse_price, validate_barcode, validate_product_name};
use smartcart_core::{Catalog, CatalogBuilder, DuplicatePolicy, Product, ValidationError};
use tracing::{debug, info, warn};

use crate::config::LoadConfig;
use crate::error::{CatalogLoadError, CatalogResult};

/// Header names every catalog must carry (case-sensitive).
pub const REQUIRED_COLUMNS: [&str; 3] = ["barcode", "name", "price"];

/// Loads the catalog file named by `config`.
///
/// ## Errors
/// - `Io` if the file cannot be opened
/// - any error of [`load_reader`]
pub fn load(config: &LoadConfig) -> CatalogResult<Catalog> {
    debug!(path = %config.path.display(), policy = ?config.duplicate_policy, "Loading catalog");

    let file = File::open(&config.path).map_err(|source| CatalogLoadError::Io {
        path: config.path.clone(),
        source,
    })?;

    let catalog = load_reader(file, config.duplicate_policy)?;

    info!(
        path = %config.path.display(),
        products = catalog.len(),
        "Catalog loaded"
    );
    Ok(catalog)
}

/// Loads a catalog from any reader producing CSV text.
///
/// ## Example
/// ```rust
/// use smartcart_catalog::load_reader;
/// use smartcart_core::DuplicatePolicy;
///
/// let csv = "barcode,name,price\n001,Soap,25.00\n002,Bread,45.50\n";
/// let catalog = load_reader(csv.as_bytes(), DuplicatePolicy::Overwrite).unwrap();
///
/// assert_eq!(catalog.len(), 2);
/// assert_eq!(catalog.get("001").unwrap().price.cents(), 2500);
/// ```
pub fn load_reader<R: Read>(reader: R, policy: DuplicatePolicy) -> CatalogResult<Catalog> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(reader);

    let columns = Columns::locate(reader.headers()?)?;
    let mut builder = CatalogBuilder::new(policy);
    let mut rows: u64 = 0;

    for result in reader.records() {
        let record = result?;
        let line = record.position().map(|p| p.line()).unwrap_or_default();

        let product = columns
            .product(&record)
            .map_err(|source| CatalogLoadError::invalid_record(line, source))?;
        let barcode = product.barcode.clone();

        match builder.add(product) {
            Ok(None) => {}
            Ok(Some(previous)) => {
                warn!(
                    barcode = %barcode,
                    line,
                    replaced = %previous.name,
                    "Duplicate barcode in catalog, later row wins"
                );
            }
            Err(_) => return Err(CatalogLoadError::DuplicateBarcode { barcode, line }),
        }
        rows += 1;
    }

    debug!(rows, distinct = builder.len(), "Catalog records parsed");
    Ok(builder.build())
}

// =============================================================================
// Column Mapping
// =============================================================================

/// Positions of the required columns in the header row.
#[derive(Debug, Clone, Copy)]
struct Columns {
    barcode: usize,
    name: usize,
    price: usize,
}

impl Columns {
    fn locate(headers: &StringRecord) -> CatalogResult<Self> {
        let find = |column: &'static str| {
            headers
                .iter()
                .position(|header| header == column)
                .ok_or_else(|| CatalogLoadError::MissingColumn {
                    column,
                    found: headers.iter().map(String::from).collect(),
                })
        };

        Ok(Columns {
            barcode: find(REQUIRED_COLUMNS[0])?,
            name: find(REQUIRED_COLUMNS[1])?,
            price: find(REQUIRED_COLUMNS[2])?,
        })
    }

    fn product(&self, record: &StringRecord) -> Result<Product, ValidationError> {
        let field = |index: usize| record.get(index).unwrap_or_default();

        let barcode = validate_barcode(field(self.barcode))?;
        let name = validate_product_name(field(self.name))?;
        let price = parse_price(field(self.price))?;

        Ok(Product::new(barcode, name, price))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
