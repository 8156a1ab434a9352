//! Participant and expense ledger
//!
//! The ledger is the single source of truth for a split. It is mutated only
//! through `add_person`, `add_expense` / `record_expense` and `reset`; every
//! balance and settlement figure is derived from it on demand.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::str::FromStr;
use tracing::debug;

use core_kernel::{ExpenseId, LedgerId};
use crate::balance::Balance;
use crate::engine::SettlementEngine;
use crate::error::SplitError;
use crate::settlement::SettlementPlan;

/// A single recorded expense
///
/// Expenses are immutable once recorded. The payer is referenced by
/// participant name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique expense identifier
    pub id: ExpenseId,
    /// Name of the participant who paid
    pub payer: String,
    /// Amount paid; the sign is not constrained
    pub amount: Decimal,
    /// What the money was spent on
    pub description: String,
    /// When the expense was recorded
    pub recorded_at: DateTime<Utc>,
}

impl Expense {
    /// Creates a new expense
    ///
    /// Payer and description are trimmed and must be non-empty.
    ///
    /// # Errors
    ///
    /// Returns `SplitError::InvalidExpense` if the payer or the description
    /// is empty
    pub fn new(
        payer: &str,
        amount: Decimal,
        description: &str,
    ) -> Result<Self, SplitError> {
        let expense = Self {
            id: ExpenseId::new_v7(),
            payer: payer.trim().to_string(),
            amount,
            description: description.trim().to_string(),
            recorded_at: Utc::now(),
        };
        expense.validate()?;
        Ok(expense)
    }

    /// Checks the field invariants of an expense
    pub fn validate(&self) -> Result<(), SplitError> {
        if self.payer.trim().is_empty() {
            return Err(SplitError::InvalidExpense("payer is empty".to_string()));
        }
        if self.description.trim().is_empty() {
            return Err(SplitError::InvalidExpense("description is empty".to_string()));
        }
        Ok(())
    }
}

/// Serialized form of a [`Ledger`]
///
/// Deserializing a ledger goes through this snapshot so that restored state
/// passes the same participant and expense checks as `Ledger::from_parts`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerSnapshot {
    pub id: LedgerId,
    pub participants: Vec<String>,
    pub expenses: Vec<Expense>,
}

/// The mutable record of participants and expenses
///
/// # Invariants
///
/// - Participant names are non-empty, trimmed and unique
/// - Participants and expenses keep insertion order
/// - Every expense has a non-empty payer and description
///
/// That every payer is also a participant is NOT enforced on insert; the
/// settlement engine reports `SplitError::UnknownPayer` when it is violated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "LedgerSnapshot", into = "LedgerSnapshot")]
pub struct Ledger {
    id: LedgerId,
    participants: Vec<String>,
    expenses: Vec<Expense>,
}

impl Ledger {
    /// Creates an empty ledger
    pub fn new() -> Self {
        Self {
            id: LedgerId::new_v7(),
            participants: Vec::new(),
            expenses: Vec::new(),
        }
    }

    /// Rebuilds a ledger from previously captured participants and expenses
    ///
    /// # Errors
    ///
    /// - `SplitError::InvalidParticipant` for an empty name
    /// - `SplitError::DuplicateParticipant` for a repeated name
    /// - `SplitError::InvalidExpense` for an expense without payer or description
    pub fn from_parts(
        participants: Vec<String>,
        expenses: Vec<Expense>,
    ) -> Result<Self, SplitError> {
        Self::restore(LedgerId::new_v7(), participants, expenses)
    }

    fn restore(
        id: LedgerId,
        participants: Vec<String>,
        expenses: Vec<Expense>,
    ) -> Result<Self, SplitError> {
        let mut seen = HashSet::with_capacity(participants.len());
        let mut names = Vec::with_capacity(participants.len());

        for name in participants {
            let name = name.trim().to_string();
            if name.is_empty() {
                return Err(SplitError::InvalidParticipant(
                    "participant name is empty".to_string(),
                ));
            }
            if !seen.insert(name.clone()) {
                return Err(SplitError::DuplicateParticipant(name));
            }
            names.push(name);
        }

        for expense in &expenses {
            expense.validate()?;
        }

        Ok(Self {
            id,
            participants: names,
            expenses,
        })
    }

    /// Returns the ledger identifier
    pub fn id(&self) -> LedgerId {
        self.id
    }

    /// Participant names in insertion order
    pub fn participants(&self) -> &[String] {
        &self.participants
    }

    /// Recorded expenses in insertion order
    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    /// Returns true if there are neither participants nor expenses
    pub fn is_empty(&self) -> bool {
        self.participants.is_empty() && self.expenses.is_empty()
    }

    /// Returns true if `name` (trimmed) is a participant
    pub fn has_participant(&self, name: &str) -> bool {
        let name = name.trim();
        self.participants.iter().any(|p| p == name)
    }

    /// Adds a participant
    ///
    /// The name is trimmed first. Empty and already-present names are
    /// skipped. Returns whether the participant was added.
    pub fn add_person(&mut self, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() {
            debug!(ledger_id = %self.id, "skipping participant: empty name");
            return false;
        }
        if self.has_participant(name) {
            debug!(ledger_id = %self.id, name, "skipping participant: duplicate name");
            return false;
        }

        self.participants.push(name.to_string());
        true
    }

    /// Adds an expense from raw form input
    ///
    /// `amount` is parsed as a decimal (plain or scientific notation). The
    /// expense is skipped if the payer is empty, the amount does not parse,
    /// or the description is empty. Returns the new expense id when recorded.
    pub fn add_expense(
        &mut self,
        payer: &str,
        amount: &str,
        description: &str,
    ) -> Option<ExpenseId> {
        let Some(amount) = parse_amount(amount) else {
            debug!(ledger_id = %self.id, amount, "skipping expense: amount is not a number");
            return None;
        };
        self.record_expense(payer, amount, description)
    }

    /// Adds an expense with an already-parsed amount
    ///
    /// Same rules as [`Ledger::add_expense`] apart from parsing.
    pub fn record_expense(
        &mut self,
        payer: &str,
        amount: Decimal,
        description: &str,
    ) -> Option<ExpenseId> {
        match Expense::new(payer, amount, description) {
            Ok(expense) => {
                let id = expense.id;
                self.expenses.push(expense);
                Some(id)
            }
            Err(e) => {
                debug!(ledger_id = %self.id, error = %e, "skipping expense");
                None
            }
        }
    }

    /// Clears all participants and expenses
    pub fn reset(&mut self) {
        debug!(
            ledger_id = %self.id,
            participants = self.participants.len(),
            expenses = self.expenses.len(),
            "resetting ledger"
        );
        self.participants.clear();
        self.expenses.clear();
    }

    /// Sum of all recorded expense amounts
    pub fn total_spent(&self) -> Decimal {
        self.expenses
            .iter()
            .fold(Decimal::ZERO, |acc, e| acc.saturating_add(e.amount))
    }

    /// Equal share per participant, or `None` without participants
    pub fn share_per_person(&self) -> Option<Decimal> {
        if self.participants.is_empty() {
            return None;
        }
        self.total_spent()
            .checked_div(Decimal::from(self.participants.len()))
    }

    /// Computes balances with the default settlement policy
    pub fn balances(&self) -> Result<Vec<Balance>, SplitError> {
        SettlementEngine::default().compute_balances(self)
    }

    /// Computes the settlement plan with the default settlement policy
    pub fn settlement_plan(&self) -> Result<SettlementPlan, SplitError> {
        SettlementEngine::default().compute_settlement_plan(self)
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

impl TryFrom<LedgerSnapshot> for Ledger {
    type Error = SplitError;

    fn try_from(snapshot: LedgerSnapshot) -> Result<Self, Self::Error> {
        Self::restore(snapshot.id, snapshot.participants, snapshot.expenses)
    }
}

impl From<Ledger> for LedgerSnapshot {
    fn from(ledger: Ledger) -> Self {
        Self {
            id: ledger.id,
            participants: ledger.participants,
            expenses: ledger.expenses,
        }
    }
}

fn parse_amount(raw: &str) -> Option<Decimal> {
    let raw = raw.trim();
    // rust_decimal skips digit separators; "1_000" is not a number here
    if raw.is_empty() || raw.contains('_') {
        return None;
    }
    Decimal::from_str(raw)
        .or_else(|_| Decimal::from_scientific(raw))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_add_person_trims_and_rejects_blank() {
        let mut ledger = Ledger::new();

        assert!(ledger.add_person("  Asha "));
        assert!(!ledger.add_person("   "));
        assert!(!ledger.add_person(""));

        assert_eq!(ledger.participants(), &["Asha".to_string()]);
    }

    #[test]
    fn test_add_person_rejects_duplicate() {
        let mut ledger = Ledger::new();

        assert!(ledger.add_person("Ben"));
        assert!(!ledger.add_person(" Ben"));

        assert_eq!(ledger.participants().len(), 1);
    }

    #[test]
    fn test_add_expense_parses_amount() {
        let mut ledger = Ledger::new();
        ledger.add_person("Asha");

        assert!(ledger.add_expense("Asha", " 12.50 ", "Cab").is_some());
        assert!(ledger.add_expense("Asha", "1e2", "Hotel").is_some());

        let amounts: Vec<_> = ledger.expenses().iter().map(|e| e.amount).collect();
        assert_eq!(amounts, vec![dec!(12.50), dec!(100)]);
    }

    #[test]
    fn test_add_expense_skips_invalid_input() {
        let mut ledger = Ledger::new();
        ledger.add_person("Asha");

        assert!(ledger.add_expense("", "10", "Snacks").is_none());
        assert!(ledger.add_expense("Asha", "ten", "Snacks").is_none());
        assert!(ledger.add_expense("Asha", "", "Snacks").is_none());
        assert!(ledger.add_expense("Asha", "NaN", "Snacks").is_none());
        assert!(ledger.add_expense("Asha", "1_000", "Snacks").is_none());
        assert!(ledger.add_expense("Asha", "_5", "Snacks").is_none());
        assert!(ledger.add_expense("Asha", "10", "  ").is_none());

        assert!(ledger.expenses().is_empty());
    }

    #[test]
    fn test_expense_text_is_stored_trimmed() {
        let mut ledger = Ledger::new();
        ledger.add_person("Asha");

        assert!(ledger.add_expense("  Asha ", "10", "  Late dinner \n").is_some());

        let expense = &ledger.expenses()[0];
        assert_eq!(expense.payer, "Asha");
        assert_eq!(expense.description, "Late dinner");
    }

    #[test]
    fn test_amount_sign_is_not_validated() {
        let mut ledger = Ledger::new();
        ledger.add_person("Asha");

        assert!(ledger.add_expense("Asha", "-20", "Refund").is_some());
        assert!(ledger.add_expense("Asha", "0", "Free sample").is_some());
        assert_eq!(ledger.expenses().len(), 2);
    }

    #[test]
    fn test_reset_keeps_identity() {
        let mut ledger = Ledger::new();
        let id = ledger.id();
        ledger.add_person("Asha");
        ledger.add_expense("Asha", "10", "Tea");

        ledger.reset();

        assert!(ledger.is_empty());
        assert_eq!(ledger.id(), id);
    }

    #[test]
    fn test_share_per_person() {
        let mut ledger = Ledger::new();
        assert_eq!(ledger.share_per_person(), None);

        ledger.add_person("A");
        ledger.add_person("B");
        ledger.add_expense("A", "90", "x");
        ledger.add_expense("B", "30", "y");

        assert_eq!(ledger.total_spent(), dec!(120));
        assert_eq!(ledger.share_per_person(), Some(dec!(60)));
    }

    #[test]
    fn test_from_parts_rejects_duplicates() {
        let result = Ledger::from_parts(vec!["A".into(), "A ".into()], Vec::new());
        assert_eq!(result, Err(SplitError::DuplicateParticipant("A".to_string())));
    }
}
