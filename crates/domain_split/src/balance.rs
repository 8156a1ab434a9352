//! Equal-share balances
//!
//! A balance is what a participant paid minus an equal share of everything
//! the group spent. Positive balances are owed money by the group, negative
//! balances owe the group.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::warn;

use core_kernel::RoundingMode;
use crate::error::SplitError;
use crate::ledger::Ledger;

/// Net position of one participant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Balance {
    /// Participant name
    pub name: String,
    /// Paid minus equal share, at full precision
    pub balance: Decimal,
}

/// Display classification of a balance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BalanceStatus {
    /// The group owes this participant
    Owed,
    /// This participant owes the group
    Owes,
    /// Nothing owed either way
    Settled,
}

impl Balance {
    /// Classifies the balance after half-up rounding to `dp` places
    ///
    /// Rounding first keeps tiny residues from division out of the
    /// owed/owes buckets.
    pub fn status(&self, dp: u32) -> BalanceStatus {
        let rounded = RoundingMode::HalfUp.round(self.balance, dp);
        if rounded.is_zero() {
            BalanceStatus::Settled
        } else if rounded.is_sign_positive() {
            BalanceStatus::Owed
        } else {
            BalanceStatus::Owes
        }
    }
}

/// Derives balances for every participant in insertion order
///
/// Returns an empty list when the ledger has no participants or no
/// expenses.
pub(crate) fn tally(ledger: &Ledger) -> Result<Vec<Balance>, SplitError> {
    let participants = ledger.participants();
    let expenses = ledger.expenses();

    if participants.is_empty() || expenses.is_empty() {
        return Ok(Vec::new());
    }

    let index: HashMap<&str, usize> = participants
        .iter()
        .enumerate()
        .map(|(i, name)| (name.as_str(), i))
        .collect();
    let mut paid = vec![Decimal::ZERO; participants.len()];
    let mut total = Decimal::ZERO;

    for expense in expenses {
        let Some(&slot) = index.get(expense.payer.as_str()) else {
            warn!(
                ledger_id = %ledger.id(),
                expense_id = %expense.id,
                payer = %expense.payer,
                "expense references unknown participant"
            );
            return Err(SplitError::UnknownPayer {
                payer: expense.payer.clone(),
                expense_id: expense.id,
            });
        };

        paid[slot] = checked_add(paid[slot], expense.amount)?;
        total = checked_add(total, expense.amount)?;
    }

    let share = total
        .checked_div(Decimal::from(participants.len()))
        .ok_or_else(|| SplitError::Overflow("equal share".to_string()))?;

    participants
        .iter()
        .zip(paid)
        .map(|(name, paid)| {
            let balance = paid
                .checked_sub(share)
                .ok_or_else(|| SplitError::Overflow(format!("balance of {}", name)))?;
            Ok(Balance {
                name: name.clone(),
                balance,
            })
        })
        .collect()
}

fn checked_add(a: Decimal, b: Decimal) -> Result<Decimal, SplitError> {
    a.checked_add(b)
        .ok_or_else(|| SplitError::Overflow(format!("{} + {}", a, b)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn balance(balance: Decimal) -> Balance {
        Balance {
            name: "A".to_string(),
            balance,
        }
    }

    #[test]
    fn test_status_classification() {
        assert_eq!(balance(dec!(50)).status(2), BalanceStatus::Owed);
        assert_eq!(balance(dec!(-0.01)).status(2), BalanceStatus::Owes);
        assert_eq!(balance(dec!(0)).status(2), BalanceStatus::Settled);
    }

    #[test]
    fn test_status_ignores_sub_cent_residue() {
        assert_eq!(balance(dec!(-0.0000000001)).status(2), BalanceStatus::Settled);
        assert_eq!(balance(dec!(0.004)).status(2), BalanceStatus::Settled);
        assert_eq!(balance(dec!(0.005)).status(2), BalanceStatus::Owed);
    }

    #[test]
    fn test_tally_zero_fills_non_payers() {
        let mut ledger = Ledger::new();
        ledger.add_person("A");
        ledger.add_person("B");
        ledger.add_person("C");
        ledger.add_expense("B", "30", "Snacks");

        let balances = tally(&ledger).unwrap();

        assert_eq!(balances.len(), 3);
        assert_eq!(balances[0].balance, dec!(-10));
        assert_eq!(balances[1].balance, dec!(20));
        assert_eq!(balances[2].balance, dec!(-10));
    }

    #[test]
    fn test_tally_unknown_payer() {
        let mut ledger = Ledger::new();
        ledger.add_person("A");
        let expense_id = ledger.add_expense("Z", "10", "Ghost").unwrap();

        let result = tally(&ledger);

        assert_eq!(
            result,
            Err(SplitError::UnknownPayer {
                payer: "Z".to_string(),
                expense_id,
            })
        );
    }
}
