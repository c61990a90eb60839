//! # smartcart-catalog: Catalog File Layer for Smart Cart
//!
//! Loads the product catalog from a CSV file, once, at startup.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Smart Cart Startup                               │
//! │                                                                         │
//! │  Scanner app: run()                                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 smartcart-catalog (THIS CRATE)                  │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │  LoadConfig   │    │    loader     │    │    error     │  │   │
//! │  │   │  (config.rs)  │───►│  (loader.rs)  │───►│ CatalogLoad- │  │   │
//! │  │   │  path, policy │    │  csv → rows   │    │ Error        │  │   │
//! │  │   └───────────────┘    └───────┬───────┘    └──────────────┘  │   │
//! │  │                                │                               │   │
//! │  └────────────────────────────────┼───────────────────────────────┘   │
//! │                                   ▼                                     │
//! │                       smartcart_core::Catalog                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## File Format
//! ```text
//! barcode,name,price
//! 001,Soap,25.00
//! 002,"Bread, whole wheat",45.50
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use smartcart_catalog::{load, LoadConfig};
//!
//! let catalog = load(&LoadConfig::new("products.csv"))?;
//! println!("{} products", catalog.len());
//! # Ok::<(), smartcart_catalog::CatalogLoadError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod config;
pub mod error;
pub mod loader;

// =============================================================================
// Re-exports
// =============================================================================

pub use config::LoadConfig;
pub use error::{CatalogLoadError, CatalogResult};
pub use loader::{load, load_reader, REQUIRED_COLUMNS};

/// Catalog file used when no path is given.
pub const DEFAULT_CATALOG_FILE: &str = "products.csv";
