//! # Sample Catalog Generator
//!
//! Writes a `products.csv` with deterministic test products for development.
//!
//! ## Usage
//! ```bash
//! # Generate 50 products into ./products.csv (default)
//! cargo run -p smartcart-catalog --bin gen-catalog
//!
//! # Generate a custom amount somewhere else
//! cargo run -p smartcart-catalog --bin gen-catalog -- --count 500 --out ./data/products.csv
//! ```
//!
//! ## Generated Products
//! - Barcodes: zero-padded, e.g. `00001` (exercises leading-zero handling)
//! - Names: `{product} {size}` across a few grocery categories
//! - Prices: 0.99 - 19.99, some with a single trailing zero (e.g. `4.50`)

use std::env;
use std::path::PathBuf;

use smartcart_catalog::{load, LoadConfig, DEFAULT_CATALOG_FILE};
use smartcart_core::Money;

/// Product names used to build the sample catalog.
const PRODUCTS: &[&str] = &[
    "Soap",
    "Bread",
    "Milk",
    "Eggs",
    "Butter",
    "Coffee",
    "Tea",
    "Rice",
    "Pasta",
    "Apples",
    "Bananas",
    "Orange Juice",
    "Cheddar",
    "Yogurt",
    "Chips",
    "Cookies",
    "Toothpaste",
    "Shampoo",
];

/// Size suffixes and their price add-on in cents.
const SIZES: &[(&str, i64)] = &[("Small", 0), ("Regular", 150), ("Family", 400)];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    let mut count: usize = 50;
    let mut out = PathBuf::from(DEFAULT_CATALOG_FILE);

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--count" | "-c" => match args.get(i + 1) {
                Some(raw) => {
                    count = parse_count(raw).unwrap_or_else(|| {
                        eprintln!("Ignoring invalid --count value: {raw} (using {count})");
                        count
                    });
                    i += 1;
                }
                None => eprintln!("Ignoring --count without a value (using {count})"),
            },
            "--out" | "-o" => {
                if i + 1 < args.len() {
                    out = PathBuf::from(&args[i + 1]);
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Smart Cart Sample Catalog Generator");
                println!();
                println!("Usage: gen-catalog [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -c, --count <N>     Number of products to generate (default: 50)");
                println!("  -o, --out <PATH>    Output file (default: {DEFAULT_CATALOG_FILE})");
                println!("  -h, --help          Show this help message");
                return Ok(());
            }
            other => {
                eprintln!("Ignoring unknown argument: {other}");
            }
        }
        i += 1;
    }

    let mut writer = csv::Writer::from_path(&out)?;
    writer.write_record(["barcode", "name", "price"])?;

    let mut generated = 0;
    for seed in 0..count {
        let (name, price) = generate_product(seed);
        let barcode = format!("{:05}", seed + 1);
        writer.write_record([barcode.as_str(), name.as_str(), price.as_str()])?;
        generated += 1;
    }
    writer.flush()?;

    // Read it back through the real loader so a broken file never ships
    let catalog = load(&LoadConfig::new(&out))?;

    println!("✓ Wrote {} products to {}", generated, out.display());
    println!("✓ Catalog reloads with {} barcodes", catalog.len());

    Ok(())
}

/// Parses a `--count` value; zero or non-numeric yields `None`.
fn parse_count(raw: &str) -> Option<usize> {
    raw.parse().ok().filter(|&n: &usize| n > 0)
}

/// Builds the name and CSV price text for one product.
fn generate_product(seed: usize) -> (String, String) {
    let product = PRODUCTS[seed % PRODUCTS.len()];
    let (size, addon) = SIZES[(seed / PRODUCTS.len()) % SIZES.len()];

    let base = 99 + ((seed as i64 * 37) % 1500);
    let price = Money::from_cents(base + addon);

    let name = if seed < PRODUCTS.len() * SIZES.len() {
        format!("{product} {size}")
    } else {
        format!("{product} {size} #{}", seed / (PRODUCTS.len() * SIZES.len()) + 1)
    };

    (name, format!("{}.{:02}", price.major(), price.minor()))
}
