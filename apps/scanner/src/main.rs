//! # Smart Cart Scanner Entry Point
//!
//! ## Startup Sequence
//! 1. Initialize tracing (logging, to stderr)
//! 2. Read the optional catalog path argument
//! 3. Load the catalog (abort with a diagnostic on failure)
//! 4. Create the session (empty cart)
//! 5. Read barcodes and commands from stdin until EOF or `quit`

use std::process::ExitCode;

fn main() -> ExitCode {
    // The actual setup is in lib.rs for better testability
    smartcart_scanner::run()
}
