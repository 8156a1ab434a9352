//! Custom Test Assertions
//!
//! Provides specialized assertion helpers for balances and settlement plans
//! that give more meaningful error messages than standard assertions.

use std::collections::HashMap;

use domain_split::{Balance, SettlementPlan};
use rust_decimal::Decimal;

/// Asserts that a decimal value is approximately equal to another
pub fn assert_decimal_approx_eq(actual: Decimal, expected: Decimal, tolerance: Decimal) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "Decimals differ by more than tolerance: actual={}, expected={}, diff={}, tolerance={}",
        actual,
        expected,
        diff,
        tolerance
    );
}

/// Asserts that balances match `(name, amount)` pairs in order
pub fn assert_balances_eq(actual: &[Balance], expected: &[(&str, Decimal)], tolerance: Decimal) {
    let names: Vec<&str> = actual.iter().map(|b| b.name.as_str()).collect();
    let expected_names: Vec<&str> = expected.iter().map(|(name, _)| *name).collect();
    assert_eq!(names, expected_names, "Balance order mismatch");

    for (balance, (name, amount)) in actual.iter().zip(expected) {
        let diff = (balance.balance - amount).abs();
        assert!(
            diff <= tolerance,
            "Balance for {} is {}, expected {} (tolerance {})",
            name,
            balance.balance,
            amount,
            tolerance
        );
    }
}

/// Asserts that balances sum to zero within a tolerance
pub fn assert_balances_sum_to_zero(balances: &[Balance], tolerance: Decimal) {
    let sum: Decimal = balances.iter().map(|b| b.balance).sum();
    assert!(
        sum.abs() <= tolerance,
        "Balances sum to {}, expected zero within {}",
        sum,
        tolerance
    );
}

/// Asserts that executing `plan` leaves every balance within `tolerance` of zero
///
/// Each payment raises the payer's balance by the amount and lowers the
/// receiver's balance by the same amount.
pub fn assert_plan_settles(balances: &[Balance], plan: &SettlementPlan, tolerance: Decimal) {
    let mut remaining: HashMap<&str, Decimal> = balances
        .iter()
        .map(|b| (b.name.as_str(), b.balance))
        .collect();

    for instruction in plan {
        assert!(
            instruction.amount > Decimal::ZERO,
            "Instruction {} -> {} has non-positive amount {}",
            instruction.from,
            instruction.to,
            instruction.amount
        );
        let from = remaining
            .get_mut(instruction.from.as_str())
            .unwrap_or_else(|| panic!("Payer {} has no balance", instruction.from));
        *from += instruction.amount;
        let to = remaining
            .get_mut(instruction.to.as_str())
            .unwrap_or_else(|| panic!("Receiver {} has no balance", instruction.to));
        *to -= instruction.amount;
    }

    for (name, balance) in remaining {
        assert!(
            balance.abs() <= tolerance,
            "{} is left with {} after settlement (tolerance {})",
            name,
            balance,
            tolerance
        );
    }
}

/// Asserts that a plan needs at most `participants - 1` payments
pub fn assert_plan_within_bound(plan: &SettlementPlan, participants: usize) {
    let bound = participants.saturating_sub(1);
    assert!(
        plan.len() <= bound,
        "Plan has {} payments, expected at most {} for {} participants",
        plan.len(),
        bound,
        participants
    );
}

/// Asserts that a result is Ok and returns the value
#[macro_export]
macro_rules! assert_ok {
    ($result:expr) => {
        match $result {
            Ok(value) => value,
            Err(e) => panic!("Expected Ok, got Err: {:?}", e),
        }
    };
    ($result:expr, $msg:expr) => {
        match $result {
            Ok(value) => value,
            Err(e) => panic!("{}: {:?}", $msg, e),
        }
    };
}

/// Asserts that a result is Err and returns the error
#[macro_export]
macro_rules! assert_err {
    ($result:expr) => {
        match $result {
            Ok(value) => panic!("Expected Err, got Ok: {:?}", value),
            Err(e) => e,
        }
    };
    ($result:expr, $msg:expr) => {
        match $result {
            Ok(value) => panic!("{}: got Ok({:?})", $msg, value),
            Err(e) => e,
        }
    };
}

/// Asserts that an error matches a specific variant
#[macro_export]
macro_rules! assert_err_variant {
    ($result:expr, $pattern:pat) => {
        match $result {
            Ok(value) => panic!("Expected Err matching {}, got Ok({:?})", stringify!($pattern), value),
            Err(ref e) => {
                assert!(
                    matches!(e, $pattern),
                    "Error {:?} does not match pattern {}",
                    e,
                    stringify!($pattern)
                );
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn balance(name: &str, amount: Decimal) -> Balance {
        Balance {
            name: name.to_string(),
            balance: amount,
        }
    }

    #[test]
    fn test_assert_decimal_approx_eq() {
        assert_decimal_approx_eq(dec!(100.001), dec!(100.002), dec!(0.01));
    }

    #[test]
    #[should_panic(expected = "sum to")]
    fn test_assert_balances_sum_to_zero_fails() {
        assert_balances_sum_to_zero(&[balance("A", dec!(1)), balance("B", dec!(-0.5))], dec!(0.01));
    }

    #[test]
    fn test_empty_plan_settles_even_balances() {
        let balances = [balance("A", dec!(0)), balance("B", dec!(0.001))];
        assert_plan_settles(&balances, &SettlementPlan::default(), dec!(0.01));
    }

    #[test]
    #[should_panic(expected = "left with")]
    fn test_empty_plan_does_not_settle_open_balances() {
        let balances = [balance("A", dec!(5)), balance("B", dec!(-5))];
        assert_plan_settles(&balances, &SettlementPlan::default(), dec!(0.01));
    }

    #[test]
    fn test_plan_bound_for_single_participant() {
        assert_plan_within_bound(&SettlementPlan::default(), 1);
        assert_plan_within_bound(&SettlementPlan::default(), 0);
    }
}
