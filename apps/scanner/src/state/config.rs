//! # Configuration State
//!
//! Application configuration resolved once at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Command line: one optional positional argument, the catalog path
//! 2. Defaults (this file)
//!
//! Configuration is read-only after initialization.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use smartcart_catalog::LoadConfig;
use smartcart_core::Money;

/// Usage text printed for `--help` and argument errors.
pub const USAGE: &str = "\
Usage: smartcart [CATALOG]

Arguments:
  [CATALOG]  Product catalog CSV with barcode,name,price columns (default: products.csv)

Options:
  -h, --help  Show this help message

Logging is controlled with RUST_LOG (default: warn,smartcart=info).";

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    /// Catalog file and duplicate barcode policy
    pub catalog: LoadConfig,

    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// Show `$25` instead of `$25.00` and `$45.5` instead of `$45.50`
    pub trim_trailing_zeros: bool,

    /// Printed before reading each input line; empty disables it
    pub prompt: String,
}

/// What the command line asked for.
#[derive(Debug, Clone)]
pub enum Invocation {
    Run(AppConfig),
    Help,
}

/// Command line errors.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Unknown option: {0}")]
    UnknownOption(String),

    #[error("Unexpected argument: {0} (only one catalog path is accepted)")]
    UnexpectedArgument(String),
}

impl Default for AppConfig {
    /// ## Default Values
    /// - Catalog: `products.csv`, duplicates overwrite
    /// - Currency: `$`, always two decimals
    /// - Prompt: `Scan Barcode: `
    fn default() -> Self {
        AppConfig {
            catalog: LoadConfig::default(),
            currency_symbol: "$".to_string(),
            trim_trailing_zeros: false,
            prompt: "Scan Barcode: ".to_string(),
        }
    }
}

impl AppConfig {
    /// Resolves configuration from command line arguments (program name
    /// already stripped).
    ///
    /// ## Example
    /// ```rust
    /// use smartcart_scanner::state::{AppConfig, Invocation};
    ///
    /// let args = vec!["shop.csv".to_string()];
    /// match AppConfig::from_args(args).unwrap() {
    ///     Invocation::Run(config) => assert_eq!(config.catalog.path.to_str(), Some("shop.csv")),
    ///     Invocation::Help => unreachable!(),
    /// }
    /// ```
    pub fn from_args<I>(args: I) -> Result<Invocation, ConfigError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = AppConfig::default();
        let mut path: Option<String> = None;

        for arg in args {
            if arg == "-h" || arg == "--help" {
                return Ok(Invocation::Help);
            }
            // "-" alone is a legal file name
            if arg.starts_with('-') && arg.len() > 1 {
                return Err(ConfigError::UnknownOption(arg));
            }
            if path.is_some() {
                return Err(ConfigError::UnexpectedArgument(arg));
            }
            path = Some(arg);
        }

        if let Some(path) = path {
            config.catalog.path = PathBuf::from(path);
        }

        Ok(Invocation::Run(config))
    }

    /// Formats an amount for display.
    ///
    /// ## Example
    /// ```rust
    /// use smartcart_core::Money;
    /// use smartcart_scanner::state::AppConfig;
    ///
    /// let mut config = AppConfig::default();
    /// assert_eq!(config.format_currency(Money::from_cents(4550)), "$45.50");
    ///
    /// config.trim_trailing_zeros = true;
    /// assert_eq!(config.format_currency(Money::from_cents(4550)), "$45.5");
    /// assert_eq!(config.format_currency(Money::from_cents(2500)), "$25");
    /// ```
    pub fn format_currency(&self, amount: Money) -> String {
        let digits = format!("{}.{:02}", amount.major().abs(), amount.minor());
        let digits = if self.trim_trailing_zeros {
            digits.trim_end_matches('0').trim_end_matches('.')
        } else {
            digits.as_str()
        };

        format!(
            "{}{}{}",
            if amount.is_negative() { "-" } else { "" },
            self.currency_symbol,
            digits
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_config(args: &[&str]) -> AppConfig {
        match AppConfig::from_args(args.iter().map(|s| s.to_string())).unwrap() {
            Invocation::Run(config) => config,
            Invocation::Help => panic!("expected run"),
        }
    }

    #[test]
    fn test_default_catalog_path() {
        let config = run_config(&[]);
        assert_eq!(config.catalog.path, PathBuf::from("products.csv"));
    }

    #[test]
    fn test_catalog_path_argument() {
        let config = run_config(&["data/shop.csv"]);
        assert_eq!(config.catalog.path, PathBuf::from("data/shop.csv"));
    }

    #[test]
    fn test_help_flag() {
        assert!(matches!(
            AppConfig::from_args(vec!["--help".to_string()]),
            Ok(Invocation::Help)
        ));
    }

    #[test]
    fn test_rejects_extra_arguments() {
        assert_eq!(
            AppConfig::from_args(vec!["a.csv".to_string(), "b.csv".to_string()]).unwrap_err(),
            ConfigError::UnexpectedArgument("b.csv".to_string())
        );
        assert_eq!(
            AppConfig::from_args(vec!["--fullscreen".to_string()]).unwrap_err(),
            ConfigError::UnknownOption("--fullscreen".to_string())
        );
    }

    #[test]
    fn test_format_currency() {
        let config = AppConfig::default();
        assert_eq!(config.format_currency(Money::from_cents(9550)), "$95.50");
        assert_eq!(config.format_currency(Money::from_cents(100)), "$1.00");
        assert_eq!(config.format_currency(Money::from_cents(1)), "$0.01");
        assert_eq!(config.format_currency(Money::zero()), "$0.00");
        assert_eq!(config.format_currency(Money::from_cents(-1234)), "-$12.34");
    }

    #[test]
    fn test_format_currency_trimmed() {
        let config = AppConfig {
            trim_trailing_zeros: true,
            ..AppConfig::default()
        };
        assert_eq!(config.format_currency(Money::from_cents(9550)), "$95.5");
        assert_eq!(config.format_currency(Money::from_cents(10000)), "$100");
        assert_eq!(config.format_currency(Money::from_cents(1005)), "$10.05");
        assert_eq!(config.format_currency(Money::zero()), "$0");
    }
}
