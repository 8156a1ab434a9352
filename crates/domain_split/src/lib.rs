//! Split Domain - Shared Expense Ledger and Settlement Engine
//!
//! This crate records who paid what within a group and derives, on demand,
//! how far each person is from an equal share and which payments would
//! square everyone up.
//!
//! # Model
//!
//! - **Ledger**: the only mutable state; participant names in insertion
//!   order plus the expenses recorded against them
//! - **Balance**: `paid - equal share` per participant, never stored
//! - **SettlementPlan**: debtor-to-creditor payments that zero every balance
//!
//! Balances and plans are recomputed from the ledger on every call, so
//! there is nothing to invalidate when the ledger changes.
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_split::{Ledger, compute_settlement_plan};
//!
//! let mut ledger = Ledger::new();
//! ledger.add_person("Asha");
//! ledger.add_person("Ben");
//! ledger.add_expense("Asha", "100", "Dinner");
//!
//! let plan = compute_settlement_plan(&ledger)?;
//! // Ben should pay 50.00 to Asha
//! ```

pub mod ledger;
pub mod balance;
pub mod settlement;
pub mod engine;
pub mod report;
pub mod error;

pub use ledger::{Ledger, Expense};
pub use balance::{Balance, BalanceStatus};
pub use settlement::{SettlementInstruction, SettlementPlan, SettlementPolicy};
pub use engine::{SettlementEngine, compute_balances, compute_settlement_plan};
pub use report::SplitReport;
pub use error::SplitError;
