//! Session error handling

use core_kernel::CoreError;
use domain_split::SplitError;
use thiserror::Error;

/// Session error types
///
/// Rejected input that the ledger simply skips (a duplicate name, an amount
/// that is not a number) is reported as a notice in the reply, not as an
/// error.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Unknown command '{0}', type 'help' for a list of commands")]
    UnknownCommand(String),

    #[error("Usage: {0}")]
    Usage(&'static str),

    #[error(transparent)]
    Split(#[from] SplitError),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Failed to render report: {0}")]
    Json(#[from] serde_json::Error),
}
