//! # Load Configuration
//!
//! Where the catalog lives and how duplicate barcodes are treated.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use smartcart_core::DuplicatePolicy;

use crate::DEFAULT_CATALOG_FILE;

/// Catalog load configuration.
///
/// ## Example
/// ```rust
/// use smartcart_catalog::LoadConfig;
/// use smartcart_core::DuplicatePolicy;
///
/// let config = LoadConfig::new("./data/products.csv")
///     .duplicate_policy(DuplicatePolicy::Reject);
/// assert_eq!(config.path.to_str(), Some("./data/products.csv"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadConfig {
    /// Path to the CSV file.
    /// Default: `products.csv` in the working directory
    pub path: PathBuf,

    /// Default: `Overwrite` (last row wins, with a warning)
    pub duplicate_policy: DuplicatePolicy,
}

impl LoadConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        LoadConfig {
            path: path.into(),
            duplicate_policy: DuplicatePolicy::default(),
        }
    }

    /// Sets the duplicate barcode policy.
    pub fn duplicate_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.duplicate_policy = policy;
        self
    }
}

impl Default for LoadConfig {
    fn default() -> Self {
        LoadConfig::new(DEFAULT_CATALOG_FILE)
    }
}
