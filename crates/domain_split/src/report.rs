//! Serializable snapshot of a split
//!
//! Bundles the raw ledger facts with everything derived from them, for
//! hosts that want to hand one document to a renderer or export it.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::LedgerId;
use crate::balance::Balance;
use crate::engine::SettlementEngine;
use crate::error::SplitError;
use crate::ledger::{Expense, Ledger};
use crate::settlement::SettlementPlan;

/// Full derived view of a ledger
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitReport {
    /// Ledger the report was built from
    pub ledger_id: LedgerId,
    /// Participant names in insertion order
    pub participants: Vec<String>,
    /// Recorded expenses in insertion order
    pub expenses: Vec<Expense>,
    /// Sum of all expense amounts
    pub total_spent: Decimal,
    /// Equal share, absent when there are no participants
    pub share_per_person: Option<Decimal>,
    /// Balances per participant
    pub balances: Vec<Balance>,
    /// Suggested payments
    pub plan: SettlementPlan,
}

impl SplitReport {
    /// Builds a report using `engine`
    ///
    /// # Errors
    ///
    /// Propagates `SplitError::UnknownPayer` from the engine
    pub fn build(ledger: &Ledger, engine: &SettlementEngine) -> Result<Self, SplitError> {
        Ok(Self {
            ledger_id: ledger.id(),
            participants: ledger.participants().to_vec(),
            expenses: ledger.expenses().to_vec(),
            total_spent: ledger.total_spent(),
            share_per_person: ledger.share_per_person(),
            balances: engine.compute_balances(ledger)?,
            plan: engine.compute_settlement_plan(ledger)?,
        })
    }

    /// Renders the report as pretty-printed JSON
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
