//! Settlement planning
//!
//! Turns a set of balances into debtor-to-creditor payments using greedy
//! two-cursor matching. Debtors and creditors are each visited in
//! participant order; every step settles the smaller of the two open
//! positions, so at least one cursor advances per instruction and a plan
//! never has more than `participants - 1` entries.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use core_kernel::RoundingMode;
use crate::balance::Balance;
use crate::error::SplitError;

/// Largest scale rust_decimal can represent
const MAX_DECIMAL_PLACES: u32 = 28;

/// Numeric knobs of the settlement engine
///
/// - `epsilon`: magnitudes at or below this are treated as zero, both when
///   partitioning balances and when deciding whether a cursor advances
/// - `decimal_places` / `rounding`: how emitted instruction amounts are
///   rounded (balances themselves are never rounded)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettlementPolicy {
    epsilon: Decimal,
    decimal_places: u32,
    rounding: RoundingMode,
}

impl Default for SettlementPolicy {
    fn default() -> Self {
        Self {
            epsilon: dec!(0.000000001),
            decimal_places: 2,
            rounding: RoundingMode::HalfUp,
        }
    }
}

impl SettlementPolicy {
    /// Creates a policy
    ///
    /// # Errors
    ///
    /// Returns `SplitError::InvalidPolicy` if `epsilon` is negative or
    /// `decimal_places` exceeds 28
    pub fn new(
        epsilon: Decimal,
        decimal_places: u32,
        rounding: RoundingMode,
    ) -> Result<Self, SplitError> {
        if epsilon.is_sign_negative() && !epsilon.is_zero() {
            return Err(SplitError::InvalidPolicy(format!(
                "epsilon must not be negative, got {}",
                epsilon
            )));
        }
        if decimal_places > MAX_DECIMAL_PLACES {
            return Err(SplitError::InvalidPolicy(format!(
                "decimal places must be at most {}, got {}",
                MAX_DECIMAL_PLACES, decimal_places
            )));
        }

        Ok(Self {
            epsilon,
            decimal_places,
            rounding,
        })
    }

    /// Zero threshold
    pub fn epsilon(&self) -> Decimal {
        self.epsilon
    }

    /// Fraction digits kept on instruction amounts
    pub fn decimal_places(&self) -> u32 {
        self.decimal_places
    }

    /// Rounding mode for instruction amounts
    pub fn rounding(&self) -> RoundingMode {
        self.rounding
    }

    /// Returns true if `value` is within epsilon of zero
    pub fn is_negligible(&self, value: Decimal) -> bool {
        value.abs() <= self.epsilon
    }

    /// Rounds an instruction amount
    pub fn round(&self, value: Decimal) -> Decimal {
        self.rounding.round(value, self.decimal_places)
    }
}

/// One payment of a settlement plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettlementInstruction {
    /// Debtor who pays
    pub from: String,
    /// Creditor who receives
    pub to: String,
    /// Rounded, strictly positive amount
    pub amount: Decimal,
}

/// Ordered payments that bring every balance to zero
///
/// An empty plan means everyone is settled.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SettlementPlan {
    instructions: Vec<SettlementInstruction>,
}

impl SettlementPlan {
    /// Returns true if no payments are needed
    pub fn is_settled(&self) -> bool {
        self.instructions.is_empty()
    }

    /// Number of payments
    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    /// Same as [`SettlementPlan::is_settled`]
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// Payments in order
    pub fn instructions(&self) -> &[SettlementInstruction] {
        &self.instructions
    }

    /// Iterates over the payments
    pub fn iter(&self) -> std::slice::Iter<'_, SettlementInstruction> {
        self.instructions.iter()
    }
}

impl IntoIterator for SettlementPlan {
    type Item = SettlementInstruction;
    type IntoIter = std::vec::IntoIter<SettlementInstruction>;

    fn into_iter(self) -> Self::IntoIter {
        self.instructions.into_iter()
    }
}

impl<'a> IntoIterator for &'a SettlementPlan {
    type Item = &'a SettlementInstruction;
    type IntoIter = std::slice::Iter<'a, SettlementInstruction>;

    fn into_iter(self) -> Self::IntoIter {
        self.instructions.iter()
    }
}

/// An open debtor or creditor position
struct Position<'a> {
    name: &'a str,
    remaining: Decimal,
}

/// Greedy two-cursor matching over `balances`
pub(crate) fn plan(balances: &[Balance], policy: &SettlementPolicy) -> SettlementPlan {
    let mut debtors = Vec::new();
    let mut creditors = Vec::new();

    for entry in balances {
        if policy.is_negligible(entry.balance) {
            continue;
        }
        let position = Position {
            name: &entry.name,
            remaining: entry.balance.abs(),
        };
        if entry.balance.is_sign_negative() {
            debtors.push(position);
        } else {
            creditors.push(position);
        }
    }

    let mut instructions = Vec::with_capacity(debtors.len() + creditors.len());
    let (mut i, mut j) = (0, 0);

    while i < debtors.len() && j < creditors.len() {
        let debtor = &mut debtors[i];
        let creditor = &mut creditors[j];
        let amount = debtor.remaining.min(creditor.remaining);
        let rounded = policy.round(amount);

        if rounded.is_zero() {
            debug!(from = debtor.name, to = creditor.name, %amount, "dropping sub-unit transfer");
        } else {
            instructions.push(SettlementInstruction {
                from: debtor.name.to_string(),
                to: creditor.name.to_string(),
                amount: rounded,
            });
        }

        debtor.remaining -= amount;
        creditor.remaining -= amount;

        if policy.is_negligible(debtor.remaining) {
            i += 1;
        }
        if policy.is_negligible(creditor.remaining) {
            j += 1;
        }
    }

    // Only reachable when balances do not net to zero within epsilon, which
    // happens once the equal share loses precision near Decimal::MAX.
    if i < debtors.len() || j < creditors.len() {
        let largest = debtors[i..]
            .iter()
            .chain(&creditors[j..])
            .map(|p| p.remaining)
            .max()
            .unwrap_or_default();
        warn!(
            open_debtors = debtors.len() - i,
            open_creditors = creditors.len() - j,
            %largest,
            "settlement finished with unmatched residue"
        );
    }

    SettlementPlan { instructions }
}
