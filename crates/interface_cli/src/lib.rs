//! Command-Line Interface Layer
//!
//! Drives a split ledger from text commands, one line at a time.
//!
//! # Architecture
//!
//! - **Config**: Display currency, log level and settlement policy from the environment
//! - **Session**: Owns the ledger and dispatches commands
//! - **Presenter**: Renders expenses, balances and payments as text
//! - **Error Handling**: Consistent session errors
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_cli::{Reply, Session};
//!
//! let mut session = Session::from_config(&config)?;
//! if let Reply::Lines(lines) = session.execute("settle")? {
//!     lines.iter().for_each(|l| println!("{l}"));
//! }
//! ```

pub mod config;
pub mod error;
pub mod presenter;
pub mod session;

pub use config::CliConfig;
pub use error::SessionError;
pub use presenter::Presenter;
pub use session::{Reply, Session};
