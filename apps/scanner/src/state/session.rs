//! # Session State
//!
//! Owns the catalog and the cart for one checkout session.
//!
//! ## Ownership
//! The session is created after the catalog has loaded and is dropped when
//! the input loop ends. Nothing is global: commands receive the session by
//! reference.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Session Lifecycle                                    │
//! │                                                                         │
//! │  load catalog ──► Session::new ──► commands (with_cart / with_cart_mut)│
//! │                                          │                              │
//! │                                          ▼                              │
//! │                                  EOF / quit ──► Session::finish        │
//! │                                                                         │
//! │  NOTE: single-threaded. The session is borrowed mutably by exactly     │
//! │        one command at a time, so no Mutex is needed.                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use smartcart_core::{Cart, Catalog};
use tracing::info;

/// One checkout session.
#[derive(Debug)]
pub struct Session {
    catalog: Catalog,
    cart: Cart,
    started_at: DateTime<Utc>,
}

impl Session {
    /// Starts a session with an empty cart.
    pub fn new(catalog: Catalog) -> Self {
        let started_at = Utc::now();
        info!(products = catalog.len(), %started_at, "Session started");

        Session {
            catalog,
            cart: Cart::new(),
            started_at,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Executes a function with read access to the cart.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let total = session.with_cart(|cart| cart.total());
    /// ```
    pub fn with_cart<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Cart) -> R,
    {
        f(&self.cart)
    }

    /// Executes a function with write access to the cart and read access to
    /// the catalog.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// session.with_cart_mut(|cart, catalog| cart.scan("001", catalog))?;
    /// ```
    pub fn with_cart_mut<F, R>(&mut self, f: F) -> R
    where
        F: FnOnce(&mut Cart, &Catalog) -> R,
    {
        f(&mut self.cart, &self.catalog)
    }

    /// Ends the session. The cart is discarded.
    pub fn finish(self) {
        let duration = Utc::now() - self.started_at;
        info!(
            lines = self.cart.item_count(),
            total = %self.cart.total(),
            seconds = duration.num_seconds(),
            "Session ended"
        );
    }
}
