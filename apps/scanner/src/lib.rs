//! # Smart Cart Scanner
//!
//! Line-oriented checkout front end: a barcode scanner acting as a keyboard
//! types a code and presses Enter, the cart is updated and redrawn.
//!
//! ## Module Organization
//! ```text
//! smartcart_scanner/
//! ├── lib.rs          ◄─── You are here (startup & input loop)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── config.rs   ◄─── Command line and display configuration
//! │   └── session.rs  ◄─── Catalog + cart for one checkout
//! ├── commands/
//! │   ├── mod.rs      ◄─── Input parsing and dispatch
//! │   └── cart.rs     ◄─── Cart manipulation commands
//! ├── display.rs      ◄─── Text rendering
//! └── error.rs        ◄─── App error type for commands
//! ```
//!
//! ## Output Streams
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Where Output Goes                                    │
//! │                                                                         │
//! │  stdout ◄── prompt, cart lines, totals, "! message" diagnostics         │
//! │  stderr ◄── tracing logs (RUST_LOG) and fatal startup errors            │
//! │                                                                         │
//! │  Piping stdout keeps a clean transcript of the session.                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod commands;
pub mod display;
pub mod error;
pub mod state;

use std::env;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use commands::Outcome;
use error::AppError;
use state::{AppConfig, ConfigError, Invocation, Session, USAGE};

/// Runs the scanner application.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter, written to stderr             │
/// │     • Default: warn,smartcart=info; override with RUST_LOG              │
/// │                                                                         │
/// │  2. Parse Arguments ──────────────────────────────────────────────────► │
/// │     • Optional catalog path (default products.csv)                      │
/// │     • --help prints usage and exits 0; bad arguments exit 2             │
/// │                                                                         │
/// │  3. Load Catalog ─────────────────────────────────────────────────────► │
/// │     • Any load error is fatal: message on stderr, exit 1                │
/// │                                                                         │
/// │  4. Input Loop ───────────────────────────────────────────────────────► │
/// │     • One command per stdin line until EOF or quit                      │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() -> ExitCode {
    init_tracing();

    let config = match AppConfig::from_args(env::args().skip(1)) {
        Ok(Invocation::Run(config)) => config,
        Ok(Invocation::Help) => {
            println!("{}", USAGE);
            return ExitCode::SUCCESS;
        }
        Err(err) => return usage_error(err),
    };

    info!(path = %config.catalog.path.display(), "Starting Smart Cart scanner");

    let mut session = match open_session(&config) {
        Ok(session) => session,
        Err(err) => {
            eprintln!("{}", err.message);
            return ExitCode::FAILURE;
        }
    };
    let stdin = io::stdin();
    let stdout = io::stdout();

    let result = run_loop(&config, &mut session, stdin.lock(), stdout.lock());
    session.finish();

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("I/O error: {}", err);
            ExitCode::FAILURE
        }
    }
}

/// Reads commands from `input` until EOF or `quit`, writing results to
/// `output`.
///
/// Blank lines are ignored. Command errors are printed and the loop
/// continues; only I/O errors end it early.
pub fn run_loop<R, W>(
    config: &AppConfig,
    session: &mut Session,
    input: R,
    mut output: W,
) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    let mut lines = input.lines();

    loop {
        if !config.prompt.is_empty() {
            write!(output, "{}", config.prompt)?;
            output.flush()?;
        }

        let Some(line) = lines.next() else {
            debug!("End of input");
            break;
        };
        let line = line?;
        let line = line.trim();

        if line.is_empty() {
            continue;
        }

        match commands::interpret(session, line)
            .and_then(|command| commands::execute(session, command)) {
            Ok(Outcome::Quit) => break,
            Ok(outcome) => display::render_outcome(&mut output, config, &outcome)?,
            Err(err) => {
                warn!(input = %line, error = %err, "Command failed");
                display::render_error(&mut output, &err)?;
            }
        }
        output.flush()?;
    }

    Ok(())
}

/// Loads the configured catalog and starts a session over it.
///
/// Any failure here is a `CATALOG_ERROR` and ends the program before the
/// first prompt.
pub fn open_session(config: &AppConfig) -> Result<Session, AppError> {
    let catalog = smartcart_catalog::load(&config.catalog)?;
    Ok(Session::new(catalog))
}

fn usage_error(err: ConfigError) -> ExitCode {
    eprintln!("{}\n\n{}", err, USAGE);
    ExitCode::from(2)
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=smartcart=trace` - Show trace for smartcart crates only
/// - Default: WARN, INFO for smartcart crates
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,smartcart=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
