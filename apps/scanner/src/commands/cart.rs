//! # Cart Commands
//!
//! Handlers for every cart action the operator can trigger.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Lifecycle                                       │
//! │                                                                         │
//! │  ┌──────────┐   scan_barcode        ┌──────────┐                       │
//! │  │  Empty   │──────────────────────►│ NonEmpty │◄──┐ scan_barcode      │
//! │  │          │◄──────────────────────│          │───┘ increment / decr. │
//! │  └──────────┘   clear_cart,         └──────────┘     remove (not last) │
//! │                 remove / decrement                                      │
//! │                 of the last line                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every handler returns the full cart after the change, so the display is
//! redrawn from authoritative state each time.

use serde::Serialize;
use smartcart_core::{CartLine, CartSnapshot, LineSelector, Money};
use tracing::debug;

use crate::error::AppError;
use crate::state::Session;

/// What a command did to the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CartEvent {
    /// A product was scanned; `quantity` is the line's new quantity.
    Scanned { name: String, quantity: u32 },
    Incremented { name: String, quantity: u32 },
    Decremented { name: String, quantity: u32 },
    /// The whole line is gone.
    Removed { name: String, subtotal: Money },
    Cleared,
    /// Read-only request.
    Viewed,
}

/// Cart response: what happened plus the cart afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub event: CartEvent,
    pub cart: CartSnapshot,
}

impl CartResponse {
    fn new(event: CartEvent, session: &Session) -> Self {
        CartResponse {
            event,
            cart: session.with_cart(|c| c.snapshot()),
        }
    }
}

/// Gets the current cart contents.
pub fn get_cart(session: &Session) -> CartResponse {
    debug!("get_cart command");
    CartResponse::new(CartEvent::Viewed, session)
}

/// Adds one unit of the scanned product.
///
/// ## User Workflow
/// ```text
/// Scanner types "001⏎"
///        │
///        ▼
/// scan_barcode("001")
///        │
///        ├── unknown? → NOT_FOUND diagnostic, cart unchanged
///        │
///        └── known    → Soap x1 (or x2, x3 … if already in cart)
/// ```
pub fn scan_barcode(session: &mut Session, barcode: &str) -> Result<CartResponse, AppError> {
    debug!(barcode = %barcode, "scan_barcode command");

    let event = session.with_cart_mut(|cart, catalog| {
        let line = cart.scan(barcode, catalog)?;
        Ok::<CartEvent, AppError>(CartEvent::Scanned {
            name: line.name.clone(),
            quantity: line.quantity,
        })
    })?;

    Ok(CartResponse::new(event, session))
}

/// Removes the selected line entirely.
pub fn remove_from_cart(
    session: &mut Session,
    selection: Option<LineSelector>,
) -> Result<CartResponse, AppError> {
    debug!(?selection, "remove_from_cart command");

    let removed = session.with_cart_mut(|cart, _| cart.remove_line(selection))?;
    Ok(CartResponse::new(removed_event(removed), session))
}

/// Adds one unit to the selected line.
pub fn increment_cart_line(
    session: &mut Session,
    selection: Option<LineSelector>,
) -> Result<CartResponse, AppError> {
    debug!(?selection, "increment_cart_line command");

    let event = session.with_cart_mut(|cart, _| {
        let line = cart.increment_line(selection)?;
        Ok::<CartEvent, AppError>(CartEvent::Incremented {
            name: line.name.clone(),
            quantity: line.quantity,
        })
    })?;

    Ok(CartResponse::new(event, session))
}

/// Takes one unit off the selected line; a line at quantity 1 is removed.
pub fn decrement_cart_line(
    session: &mut Session,
    selection: Option<LineSelector>,
) -> Result<CartResponse, AppError> {
    debug!(?selection, "decrement_cart_line command");

    let event = session.with_cart_mut(|cart, _| {
        // Resolve the name up front; the line may not survive the decrement
        let name = selection
            .as_ref()
            .and_then(|s| cart.line(s))
            .map(|line| line.name.clone());

        match cart.decrement_line(selection.clone())? {
            Some(removed) => Ok::<CartEvent, AppError>(removed_event(removed)),
            None => {
                let quantity = selection
                    .as_ref()
                    .and_then(|s| cart.line(s))
                    .map(|line| line.quantity)
                    .unwrap_or_default();
                Ok(CartEvent::Decremented {
                    name: name.unwrap_or_default(),
                    quantity,
                })
            }
        }
    })?;

    Ok(CartResponse::new(event, session))
}

/// Clears all lines from the cart.
pub fn clear_cart(session: &mut Session) -> CartResponse {
    debug!("clear_cart command");

    session.with_cart_mut(|cart, _| cart.clear());
    CartResponse::new(CartEvent::Cleared, session)
}

fn removed_event(line: CartLine) -> CartEvent {
    CartEvent::Removed {
        subtotal: line.subtotal(),
        name: line.name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use smartcart_core::{CartStatus, Product};

    fn session() -> Session {
        Session::new(
            vec![
                Product::new("001", "Soap", Money::from_cents(2500)),
                Product::new("002", "Bread", Money::from_cents(4550)),
            ]
            .into_iter()
            .collect(),
        )
    }

    #[test]
    fn test_scan_reports_new_quantity() {
        let mut session = session();

        scan_barcode(&mut session, "001").unwrap();
        let response = scan_barcode(&mut session, "001").unwrap();

        assert_eq!(
            response.event,
            CartEvent::Scanned {
                name: "Soap".to_string(),
                quantity: 2
            }
        );
        assert_eq!(response.cart.total, Money::from_cents(5000));
    }

    #[test]
    fn test_scan_unknown_is_not_found() {
        let mut session = session();
        scan_barcode(&mut session, "002").unwrap();

        let err = scan_barcode(&mut session, "999").unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(get_cart(&session).cart.total, Money::from_cents(4550));
    }

    #[test]
    fn test_remove_reports_subtotal() {
        let mut session = session();
        scan_barcode(&mut session, "001").unwrap();
        scan_barcode(&mut session, "001").unwrap();
        scan_barcode(&mut session, "002").unwrap();

        let response = remove_from_cart(&mut session, Some(LineSelector::Index(0))).unwrap();
        assert_eq!(
            response.event,
            CartEvent::Removed {
                name: "Soap".to_string(),
                subtotal: Money::from_cents(5000)
            }
        );
        assert_eq!(response.cart.total, Money::from_cents(4550));
    }

    #[test]
    fn test_remove_without_selection() {
        let mut session = session();
        scan_barcode(&mut session, "001").unwrap();

        let err = remove_from_cart(&mut session, None).unwrap_err();
        assert_eq!(err.code, ErrorCode::NoSelection);
        assert_eq!(get_cart(&session).cart.item_count, 1);
    }

    #[test]
    fn test_increment_and_decrement() {
        let mut session = session();
        scan_barcode(&mut session, "002").unwrap();

        let response = increment_cart_line(&mut session, Some(LineSelector::Index(0))).unwrap();
        assert_eq!(
            response.event,
            CartEvent::Incremented {
                name: "Bread".to_string(),
                quantity: 2
            }
        );

        let response = decrement_cart_line(&mut session, Some(LineSelector::Index(0))).unwrap();
        assert_eq!(
            response.event,
            CartEvent::Decremented {
                name: "Bread".to_string(),
                quantity: 1
            }
        );

        let response = decrement_cart_line(&mut session, Some(LineSelector::Index(0))).unwrap();
        assert!(matches!(response.event, CartEvent::Removed { .. }));
        assert_eq!(response.cart.status, CartStatus::Empty);
    }

    #[test]
    fn test_clear() {
        let mut session = session();
        scan_barcode(&mut session, "001").unwrap();
        scan_barcode(&mut session, "002").unwrap();

        let response = clear_cart(&mut session);
        assert_eq!(response.event, CartEvent::Cleared);
        assert_eq!(response.cart.total, Money::zero());
        assert!(response.cart.lines.is_empty());
    }
}
