//! # State Module
//!
//! Application state for the scanner.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────────────────┐        ┌──────────────────────────┐      │
//! │  │        Session           │        │        AppConfig         │      │
//! │  │                          │        │                          │      │
//! │  │  Catalog (read-only)     │        │  catalog path + policy   │      │
//! │  │  Cart    (mutable)       │        │  currency formatting     │      │
//! │  │  started_at              │        │  prompt                  │      │
//! │  └──────────────────────────┘        └──────────────────────────┘      │
//! │                                                                         │
//! │  Session: mutated only by commands, one at a time                      │
//! │  AppConfig: read-only after startup                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod session;

pub use config::{AppConfig, ConfigError, Invocation, USAGE};
pub use session::Session;
