//! Text rendering for the scanner.
//!
//! ```text
//! 1. Soap x2 - $50.00
//! 2. Bread x1 - $45.50
//! Total: $95.50
//! ```

use std::io::{self, Write};

use smartcart_core::CartSnapshot;

use crate::commands::{CartEvent, CartResponse, Outcome};
use crate::error::AppError;
use crate::state::AppConfig;

/// Command list printed for `help`.
pub const HELP: &str = "\
Commands:
  <barcode>             add one unit of the product
  rm [N], remove [N]    remove line N
  + [N], inc [N]        add one unit to line N
  - [N], dec [N]        take one unit off line N (removes the line at 0)
  clear                 empty the cart
  list, ls              show the cart
  total                 show the total
  json                  print the cart as JSON
  help, ?               show this list
  quit, exit, q         end the session
N is the line number shown by list, or #barcode.";

/// Writes the result of a command.
pub fn render_outcome<W: Write>(
    out: &mut W,
    config: &AppConfig,
    outcome: &Outcome,
) -> io::Result<()> {
    match outcome {
        Outcome::Cart(response) => {
            render_event(out, config, &response.event)?;
            render_cart(out, config, &response.cart)
        }
        Outcome::Total(response) => render_total(out, config, &response.cart),
        Outcome::Json(response) => render_json(out, response),
        Outcome::Help => writeln!(out, "{}", HELP),
        Outcome::Quit => Ok(()),
    }
}

/// One-line summary of what just happened. Nothing for read-only requests.
fn render_event<W: Write>(out: &mut W, config: &AppConfig, event: &CartEvent) -> io::Result<()> {
    match event {
        CartEvent::Scanned { name, quantity } => writeln!(out, "+ {} (x{})", name, quantity),
        CartEvent::Incremented { name, quantity } => writeln!(out, "+ {} (x{})", name, quantity),
        CartEvent::Decremented { name, quantity } => writeln!(out, "- {} (x{})", name, quantity),
        CartEvent::Removed { name, subtotal } => {
            writeln!(out, "- {} ({})", name, config.format_currency(*subtotal))
        }
        CartEvent::Cleared => writeln!(out, "Cart cleared"),
        CartEvent::Viewed => Ok(()),
    }
}

/// Writes every line followed by the total.
pub fn render_cart<W: Write>(
    out: &mut W,
    config: &AppConfig,
    cart: &CartSnapshot,
) -> io::Result<()> {
    if cart.lines.is_empty() {
        writeln!(out, "(cart is empty)")?;
    }

    for line in &cart.lines {
        writeln!(
            out,
            "{}. {} x{} - {}",
            line.position + 1,
            line.name,
            line.quantity,
            config.format_currency(line.subtotal)
        )?;
    }

    render_total(out, config, cart)
}

pub fn render_total<W: Write>(
    out: &mut W,
    config: &AppConfig,
    cart: &CartSnapshot,
) -> io::Result<()> {
    writeln!(out, "Total: {}", config.format_currency(cart.total))
}

fn render_json<W: Write>(out: &mut W, response: &CartResponse) -> io::Result<()> {
    let json = serde_json::to_string_pretty(&response.cart)?;
    writeln!(out, "{}", json)
}

/// Writes a recoverable command error.
pub fn render_error<W: Write>(out: &mut W, error: &AppError) -> io::Result<()> {
    writeln!(out, "! {}", error.message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use smartcart_core::{Cart, Money, Product};

    fn cart() -> Cart {
        let catalog = vec![
            Product::new("001", "Soap", Money::from_cents(2500)),
            Product::new("002", "Bread", Money::from_cents(4550)),
        ]
        .into_iter()
        .collect();

        let mut cart = Cart::new();
        cart.scan("001", &catalog).unwrap();
        cart.scan("001", &catalog).unwrap();
        cart.scan("002", &catalog).unwrap();
        cart
    }

    fn rendered(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_render_cart() {
        let config = AppConfig::default();
        let snapshot = cart().snapshot();

        let text = rendered(|out| render_cart(out, &config, &snapshot));
        assert_eq!(text, "1. Soap x2 - $50.00\n2. Bread x1 - $45.50\nTotal: $95.50\n");
    }

    #[test]
    fn test_render_empty_cart() {
        let config = AppConfig::default();
        let snapshot = Cart::new().snapshot();

        let text = rendered(|out| render_cart(out, &config, &snapshot));
        assert_eq!(text, "(cart is empty)\nTotal: $0.00\n");
    }

    #[test]
    fn test_render_json() {
        let snapshot = cart().snapshot();
        let response = CartResponse {
            event: CartEvent::Viewed,
            cart: snapshot,
        };

        let text = rendered(|out| render_json(out, &response));
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["itemCount"], 2);
        assert_eq!(value["lines"][0]["name"], "Soap");
        assert_eq!(value["lines"][0]["quantity"], 2);
    }

    #[test]
    fn test_render_error() {
        let error = AppError::from(smartcart_core::CoreError::ProductNotFound("999".to_string()));
        let text = rendered(|out| render_error(out, &error));
        assert_eq!(text, "! Unknown product: 999\n");
    }
}
