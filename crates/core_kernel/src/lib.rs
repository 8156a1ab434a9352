//! Core Kernel - Foundational types for the expense splitter
//!
//! This crate provides the building blocks shared by the split engine and
//! the command-line collaborator:
//! - Display currency and money formatting
//! - Rounding modes used when settlement amounts are emitted
//! - Strongly-typed identifiers for ledgers and expenses

pub mod money;
pub mod identifiers;
pub mod error;

pub use money::{Money, Currency, MoneyError, RoundingMode};
pub use identifiers::{LedgerId, ExpenseId};
pub use error::CoreError;
