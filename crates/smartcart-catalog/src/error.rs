//! # Catalog Load Error Types
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  std::io::Error / csv::Error / ValidationError                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  CatalogLoadError (this module) ← Adds path / line context             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  AppError (scanner app) ← Printed, startup aborted                     │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every variant is fatal: the loader never hands back a partial catalog.

use std::path::PathBuf;

use smartcart_core::ValidationError;
use thiserror::Error;

/// Catalog loading errors.
#[derive(Debug, Error)]
pub enum CatalogLoadError {
    /// The file could not be opened.
    ///
    /// ## When This Occurs
    /// - File does not exist (wrong working directory, typo in path)
    /// - Permission denied
    #[error("Cannot read catalog {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not well-formed delimited text.
    ///
    /// ## When This Occurs
    /// - A record has more or fewer fields than the header
    /// - Invalid UTF-8
    /// - Read failure midway through the file
    #[error("Malformed catalog: {0}")]
    Csv(#[from] csv::Error),

    /// The header row lacks one of `barcode`, `name`, `price`.
    #[error("Catalog is missing required column '{column}' (found: {found:?})")]
    MissingColumn {
        column: &'static str,
        found: Vec<String>,
    },

    /// A field failed validation (empty barcode, bad price, ...).
    #[error("Invalid record on line {line}: {source}")]
    InvalidRecord {
        line: u64,
        #[source]
        source: ValidationError,
    },

    /// A barcode appeared twice and the duplicate policy is `Reject`.
    #[error("Duplicate barcode '{barcode}' on line {line}")]
    DuplicateBarcode { barcode: String, line: u64 },
}

impl CatalogLoadError {
    /// Creates an InvalidRecord error for a given line.
    pub fn invalid_record(line: u64, source: ValidationError) -> Self {
        CatalogLoadError::InvalidRecord { line, source }
    }
}

/// Result type for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogLoadError>;
