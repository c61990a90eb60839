//! # Scanner Commands Module
//!
//! Every line read from the scanner becomes one [`Command`].
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── Parsing and dispatch
//! └── cart.rs     ◄─── Cart manipulation
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  stdin line: "rm 2"                                                     │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  interpret(&session, "rm 2")   (not a catalog barcode, so parse it)     │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Command::Remove(Some(LineSelector::Index(1)))                          │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  execute(&mut session, command)                                         │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  cart::remove_from_cart ──► Outcome::Cart(CartResponse)                 │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  display::render_outcome                                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Input Grammar
//! | Input                  | Command                                |
//! |------------------------|----------------------------------------|
//! | anything else          | scan that barcode                      |
//! | `rm [N]`, `remove [N]` | remove line N                          |
//! | `+ [N]`, `inc [N]`     | one more of line N                     |
//! | `- [N]`, `dec [N]`     | one fewer of line N                    |
//! | `clear`                | empty the cart                         |
//! | `list`, `ls`           | print the cart                         |
//! | `total`                | print the total                        |
//! | `json`                 | print the cart snapshot as JSON        |
//! | `help`, `?`            | print the command list                 |
//! | `quit`, `exit`, `q`    | end the session                        |
//!
//! `N` is a 1-based line number as shown by `list`, or `#barcode`.
//! Without `N` nothing is selected and the command reports it.
//!
//! A line that is exactly a catalog barcode is always a scan, even when it
//! spells a keyword (a product coded `q` is scanned, not a quit). See
//! [`interpret`].

pub mod cart;

use smartcart_core::LineSelector;

use crate::error::AppError;
use crate::state::Session;

pub use cart::{CartEvent, CartResponse};

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Scan(String),
    Remove(Option<LineSelector>),
    Increment(Option<LineSelector>),
    Decrement(Option<LineSelector>),
    Clear,
    List,
    Total,
    Json,
    Help,
    Quit,
}

/// Result of executing a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The cart changed or was requested.
    Cart(CartResponse),
    /// Only the total was requested.
    Total(CartResponse),
    /// JSON snapshot requested.
    Json(CartResponse),
    Help,
    Quit,
}

/// Turns an input line into a command for this session.
///
/// Catalog barcodes win over keywords; everything else goes through
/// [`parse`].
pub fn interpret(session: &Session, input: &str) -> Result<Command, AppError> {
    let input = input.trim();
    if session.catalog().contains(input) {
        return Ok(Command::Scan(input.to_string()));
    }
    parse(input)
}

/// Parses one trimmed, non-empty input line without looking at the catalog.
///
/// ## Example
/// ```rust
/// use smartcart_core::LineSelector;
/// use smartcart_scanner::commands::{parse, Command};
///
/// assert_eq!(parse("001").unwrap(), Command::Scan("001".to_string()));
/// assert_eq!(
///     parse("rm 2").unwrap(),
///     Command::Remove(Some(LineSelector::Index(1)))
/// );
/// assert_eq!(parse("rm").unwrap(), Command::Remove(None));
/// ```
pub fn parse(input: &str) -> Result<Command, AppError> {
    let input = input.trim();
    let mut parts = input.split_whitespace();
    let word = parts.next().unwrap_or_default();
    let argument = parts.next();

    if parts.next().is_some() {
        return match word {
            "rm" | "remove" | "+" | "inc" | "-" | "dec" => Err(AppError::invalid_command(
                format!("Too many arguments: {}", input),
            )),
            // Barcodes never contain whitespace; treat the line as a scan
            // and let validation/lookup report it
            _ => Ok(Command::Scan(input.to_string())),
        };
    }

    let command = match word {
        "rm" | "remove" => Command::Remove(parse_selector(argument)?),
        "+" | "inc" => Command::Increment(parse_selector(argument)?),
        "-" | "dec" => Command::Decrement(parse_selector(argument)?),
        "clear" if argument.is_none() => Command::Clear,
        "list" | "ls" if argument.is_none() => Command::List,
        "total" if argument.is_none() => Command::Total,
        "json" if argument.is_none() => Command::Json,
        "help" | "?" if argument.is_none() => Command::Help,
        "quit" | "exit" | "q" if argument.is_none() => Command::Quit,
        _ => Command::Scan(input.to_string()),
    };

    Ok(command)
}

/// Parses the optional line argument.
///
/// - missing → no selection
/// - `N` (1-based) → `Index(N - 1)`; `0` selects nothing
/// - `#code` → `Barcode(code)`
fn parse_selector(argument: Option<&str>) -> Result<Option<LineSelector>, AppError> {
    let Some(argument) = argument else {
        return Ok(None);
    };

    if let Some(barcode) = argument.strip_prefix('#') {
        if barcode.is_empty() {
            return Err(AppError::invalid_command("Expected a barcode after '#'"));
        }
        return Ok(Some(LineSelector::barcode(barcode)));
    }

    let number: usize = argument.parse().map_err(|_| {
        AppError::invalid_command(format!(
            "Expected a line number or #barcode, got '{}'",
            argument
        ))
    })?;

    Ok(number.checked_sub(1).map(LineSelector::Index))
}

/// Executes a command against the session.
pub fn execute(session: &mut Session, command: Command) -> Result<Outcome, AppError> {
    let outcome = match command {
        Command::Scan(barcode) => Outcome::Cart(cart::scan_barcode(session, &barcode)?),
        Command::Remove(selection) => Outcome::Cart(cart::remove_from_cart(session, selection)?),
        Command::Increment(selection) => {
            Outcome::Cart(cart::increment_cart_line(session, selection)?)
        }
        Command::Decrement(selection) => {
            Outcome::Cart(cart::decrement_cart_line(session, selection)?)
        }
        Command::Clear => Outcome::Cart(cart::clear_cart(session)),
        Command::List => Outcome::Cart(cart::get_cart(session)),
        Command::Total => Outcome::Total(cart::get_cart(session)),
        Command::Json => Outcome::Json(cart::get_cart(session)),
        Command::Help => Outcome::Help,
        Command::Quit => Outcome::Quit,
    };

    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use smartcart_core::{Money, Product};

    #[test]
    fn test_parse_scan() {
        assert_eq!(parse("001").unwrap(), Command::Scan("001".to_string()));
        assert_eq!(parse("  4006381333931 ").unwrap(), Command::Scan("4006381333931".to_string()));
    }

    #[test]
    fn test_parse_keywords() {
        assert_eq!(parse("clear").unwrap(), Command::Clear);
        assert_eq!(parse("ls").unwrap(), Command::List);
        assert_eq!(parse("total").unwrap(), Command::Total);
        assert_eq!(parse("json").unwrap(), Command::Json);
        assert_eq!(parse("?").unwrap(), Command::Help);
        assert_eq!(parse("q").unwrap(), Command::Quit);
        assert_eq!(parse("exit").unwrap(), Command::Quit);
    }

    #[test]
    fn test_parse_selectors() {
        assert_eq!(parse("rm").unwrap(), Command::Remove(None));
        assert_eq!(
            parse("remove 3").unwrap(),
            Command::Remove(Some(LineSelector::Index(2)))
        );
        assert_eq!(
            parse("+ #001").unwrap(),
            Command::Increment(Some(LineSelector::Barcode("001".to_string())))
        );
        assert_eq!(
            parse("dec 1").unwrap(),
            Command::Decrement(Some(LineSelector::Index(0)))
        );
        // Line 0 does not exist
        assert_eq!(parse("rm 0").unwrap(), Command::Remove(None));
    }

    #[test]
    fn test_parse_invalid_selector() {
        let err = parse("rm two").unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidCommand);

        assert_eq!(parse("rm #").unwrap_err().code, ErrorCode::InvalidCommand);
        assert_eq!(parse("rm 1 2").unwrap_err().code, ErrorCode::InvalidCommand);
    }

    #[test]
    fn test_keyword_with_argument_is_a_scan() {
        // "total 5" is not a command; it falls through to a barcode lookup
        assert_eq!(parse("total5").unwrap(), Command::Scan("total5".to_string()));
        assert_eq!(parse("clear 1").unwrap(), Command::Scan("clear 1".to_string()));
    }

    #[test]
    fn test_interpret_prefers_catalog_barcodes() {
        let session = Session::new(
            vec![
                Product::new("q", "Quinoa", Money::from_cents(899)),
                Product::new("+", "Plus Size Tee", Money::from_cents(1500)),
            ]
            .into_iter()
            .collect(),
        );

        assert_eq!(interpret(&session, "q").unwrap(), Command::Scan("q".to_string()));
        assert_eq!(interpret(&session, " + ").unwrap(), Command::Scan("+".to_string()));
        // Keywords that are not barcodes keep their meaning
        assert_eq!(interpret(&session, "quit").unwrap(), Command::Quit);
        assert_eq!(interpret(&session, "+ 1").unwrap(), Command::Increment(Some(LineSelector::Index(0))));
    }

    #[test]
    fn test_execute_flow() {
        let mut session = Session::new(
            vec![
                Product::new("001", "Soap", Money::from_cents(2500)),
                Product::new("002", "Bread", Money::from_cents(4550)),
            ]
            .into_iter()
            .collect(),
        );

        for line in ["001", "001", "002"] {
            execute(&mut session, parse(line).unwrap()).unwrap();
        }

        match execute(&mut session, parse("total").unwrap()).unwrap() {
            Outcome::Total(response) => assert_eq!(response.cart.total, Money::from_cents(9550)),
            other => panic!("unexpected outcome: {:?}", other),
        }

        let err = execute(&mut session, parse("999").unwrap()).unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);

        match execute(&mut session, parse("rm 1").unwrap()).unwrap() {
            Outcome::Cart(response) => assert_eq!(response.cart.total, Money::from_cents(4550)),
            other => panic!("unexpected outcome: {:?}", other),
        }

        assert_eq!(execute(&mut session, Command::Quit).unwrap(), Outcome::Quit);
    }
}
