//! Property-Based Test Generators
//!
//! Provides proptest strategies for participant names, amounts, and whole
//! ledgers whose payers are always participants.

use domain_split::Ledger;
use proptest::prelude::*;
use rust_decimal::Decimal;

/// Strategy for generating names
pub fn name_strategy() -> impl Strategy<Value = String> {
    "[A-Z][a-z]{2,10}".prop_map(|s| s)
}

/// Strategy for generating between 1 and `max` distinct participant names
pub fn participant_names_strategy(max: usize) -> impl Strategy<Value = Vec<String>> {
    proptest::collection::btree_set(name_strategy(), 1..=max.max(1))
        .prop_map(|names| names.into_iter().collect())
}

/// Strategy for generating positive amounts with two decimal places
pub fn positive_amount_strategy() -> impl Strategy<Value = Decimal> {
    (1i64..10_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy for generating amounts with two decimal places that may be zero or negative
pub fn amount_strategy() -> impl Strategy<Value = Decimal> {
    (-10_000_000i64..10_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy for generating ledgers with up to `max_participants` people and
/// between 1 and `max_expenses` positive expenses, each paid by a participant
pub fn ledger_strategy(max_participants: usize, max_expenses: usize) -> impl Strategy<Value = Ledger> {
    ledger_with_amounts(max_participants, max_expenses, positive_amount_strategy)
}

/// Like [`ledger_strategy`], but amounts may also be zero or negative (refunds)
pub fn mixed_sign_ledger_strategy(
    max_participants: usize,
    max_expenses: usize,
) -> impl Strategy<Value = Ledger> {
    ledger_with_amounts(max_participants, max_expenses, amount_strategy)
}

fn ledger_with_amounts<F, S>(
    max_participants: usize,
    max_expenses: usize,
    amounts: F,
) -> impl Strategy<Value = Ledger>
where
    F: Fn() -> S + Copy + 'static,
    S: Strategy<Value = Decimal> + 'static,
{
    participant_names_strategy(max_participants)
        .prop_flat_map(move |names| {
            let count = names.len();
            let expenses = proptest::collection::vec(
                (0..count, amounts()),
                1..=max_expenses.max(1),
            );
            (Just(names), expenses)
        })
        .prop_map(|(names, expenses)| {
            let mut ledger = Ledger::new();
            for name in &names {
                ledger.add_person(name);
            }
            for (index, (payer, amount)) in expenses.into_iter().enumerate() {
                ledger.record_expense(&names[payer], amount, &format!("Expense {}", index + 1));
            }
            ledger
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    proptest! {
        #[test]
        fn positive_amount_is_always_positive(amount in positive_amount_strategy()) {
            prop_assert!(amount > Decimal::ZERO);
            prop_assert!(amount.scale() <= 2);
        }

        #[test]
        fn participant_names_are_distinct(names in participant_names_strategy(8)) {
            let mut sorted = names.clone();
            sorted.dedup();
            prop_assert_eq!(sorted.len(), names.len());
            prop_assert!(!names.is_empty() && names.len() <= 8);
        }

        #[test]
        fn amount_stays_within_cents(amount in amount_strategy()) {
            prop_assert!(amount.scale() <= 2);
            prop_assert!(amount.abs() < Decimal::new(100_000, 0));
        }

        #[test]
        fn generated_ledger_payers_are_participants(ledger in ledger_strategy(6, 10)) {
            prop_assert!(!ledger.expenses().is_empty());
            for expense in ledger.expenses() {
                prop_assert!(ledger.has_participant(&expense.payer));
            }
        }
    }
}
