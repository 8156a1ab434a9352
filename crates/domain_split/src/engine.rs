//! Settlement engine
//!
//! Pure queries over a ledger snapshot. Nothing is cached: each call derives
//! its result from the ledger as it is right now, so calling twice without
//! touching the ledger returns identical results.

use tracing::{debug, instrument};

use crate::balance::{self, Balance};
use crate::error::SplitError;
use crate::ledger::Ledger;
use crate::settlement::{self, SettlementPlan, SettlementPolicy};

/// Computes balances and settlement plans under a fixed policy
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SettlementEngine {
    policy: SettlementPolicy,
}

impl SettlementEngine {
    /// Creates an engine with the given policy
    pub fn new(policy: SettlementPolicy) -> Self {
        Self { policy }
    }

    /// Returns the engine's policy
    pub fn policy(&self) -> &SettlementPolicy {
        &self.policy
    }

    /// Per-participant balances relative to an equal split
    ///
    /// Balances follow participant insertion order and keep full decimal
    /// precision.
    ///
    /// # Errors
    ///
    /// Returns `SplitError::UnknownPayer` if an expense names a payer that is
    /// not a participant
    #[instrument(level = "debug", skip_all, fields(ledger_id = %ledger.id()))]
    pub fn compute_balances(&self, ledger: &Ledger) -> Result<Vec<Balance>, SplitError> {
        let balances = balance::tally(ledger)?;
        debug!(count = balances.len(), "computed balances");
        Ok(balances)
    }

    /// Payments that zero every balance
    ///
    /// # Errors
    ///
    /// Propagates any error from [`SettlementEngine::compute_balances`]
    #[instrument(level = "debug", skip_all, fields(ledger_id = %ledger.id()))]
    pub fn compute_settlement_plan(&self, ledger: &Ledger) -> Result<SettlementPlan, SplitError> {
        let balances = balance::tally(ledger)?;
        let plan = settlement::plan(&balances, &self.policy);
        debug!(instructions = plan.len(), "computed settlement plan");
        Ok(plan)
    }
}

/// [`SettlementEngine::compute_balances`] with the default policy
pub fn compute_balances(ledger: &Ledger) -> Result<Vec<Balance>, SplitError> {
    SettlementEngine::default().compute_balances(ledger)
}

/// [`SettlementEngine::compute_settlement_plan`] with the default policy
pub fn compute_settlement_plan(ledger: &Ledger) -> Result<SettlementPlan, SplitError> {
    SettlementEngine::default().compute_settlement_plan(ledger)
}
