//! Split domain errors

use core_kernel::ExpenseId;
use thiserror::Error;

/// Errors that can occur in the split domain
///
/// Malformed input to `Ledger::add_person` / `Ledger::add_expense` is not an
/// error; those calls are skipped. The variants here are failures a host has
/// to act on.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SplitError {
    /// An expense names a payer who is not a participant of the ledger
    #[error("Expense {expense_id} references unknown participant '{payer}'")]
    UnknownPayer {
        payer: String,
        expense_id: ExpenseId,
    },

    /// Participant name is empty after trimming
    #[error("Invalid participant: {0}")]
    InvalidParticipant(String),

    /// Participant name appears more than once
    #[error("Duplicate participant: {0}")]
    DuplicateParticipant(String),

    /// Expense is missing a payer or a description
    #[error("Invalid expense: {0}")]
    InvalidExpense(String),

    /// Settlement policy parameters are out of range
    #[error("Invalid settlement policy: {0}")]
    InvalidPolicy(String),

    /// Decimal arithmetic overflowed
    #[error("Calculation overflow: {0}")]
    Overflow(String),
}
