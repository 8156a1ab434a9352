//! Expense Splitter - Command-Line Binary
//!
//! Reads commands from stdin, one per line, and prints replies to stdout.
//! Logs go to stderr.
//!
//! # Usage
//!
//! ```bash
//! # Interactive
//! cargo run --bin splitter
//!
//! # Scripted, with US dollars and banker's rounding
//! printf 'person A\nperson B\nexpense A, 100, Dinner\nsettle\n' \
//!     | SPLIT_CURRENCY=USD SPLIT_ROUNDING=half_even cargo run --bin splitter
//! ```
//!
//! # Environment Variables
//!
//! * `SPLIT_CURRENCY` - Display currency code (default: INR)
//! * `SPLIT_LOG_LEVEL` - Log level: trace, debug, info, warn, error (default: info)
//! * `SPLIT_LOG_FORMAT` - text or json (default: text)
//! * `SPLIT_EPSILON` - Zero threshold for settlement (default: 0.000000001)
//! * `SPLIT_DECIMAL_PLACES` - Fraction digits on payments (default: 2)
//! * `SPLIT_ROUNDING` - half_up or half_even (default: half_up)

use std::io::{self, BufRead, Write};

use anyhow::Context;
use interface_cli::{CliConfig, Reply, Session};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Main entry point for the splitter.
///
/// # Errors
///
/// Returns an error if:
/// - Configuration cannot be loaded from environment
/// - Configured currency or settlement policy is invalid
/// - stdin or stdout fails
fn main() -> anyhow::Result<()> {
    // Load .env file if present (useful for local development)
    dotenvy::dotenv().ok();

    let config = CliConfig::from_env().context("failed to load SPLIT_* configuration")?;

    init_tracing(&config.log_level, config.json_logs());

    let mut session = Session::from_config(&config).context("invalid configuration")?;

    tracing::info!(
        ledger_id = %session.ledger().id(),
        currency = %config.currency,
        "Starting expense splitter"
    );

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();

    for line in stdin.lock().lines() {
        let line = line.context("failed to read from stdin")?;

        match session.execute(&line) {
            Ok(Reply::Quit) => break,
            Ok(Reply::Lines(lines)) => {
                for text in lines {
                    writeln!(stdout, "{}", text)?;
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "command failed");
                writeln!(stdout, "Error: {}", e)?;
            }
        }
        stdout.flush()?;
    }

    tracing::info!("Expense splitter finished");
    Ok(())
}

/// Initializes the tracing subscriber for structured logging on stderr.
///
/// # Arguments
///
/// * `log_level` - The minimum log level to output (trace, debug, info, warn, error)
/// * `json` - Emit JSON lines instead of human-readable text
fn init_tracing(log_level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let (text_layer, json_layer) = if json {
        (None, Some(fmt::layer().json().with_writer(io::stderr)))
    } else {
        (Some(fmt::layer().with_target(true).with_writer(io::stderr)), None)
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(text_layer)
        .with(json_layer)
        .init();
}
