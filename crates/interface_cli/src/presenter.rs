//! Text rendering of ledger entries, balances and payments

use rust_decimal::Decimal;

use core_kernel::{Currency, Money};
use domain_split::{Balance, BalanceStatus, Expense, SettlementInstruction, SettlementPlan};

/// Shown when a settlement plan has no payments
pub const ALL_SETTLED: &str = "All settled up!";

/// Formats amounts in a fixed display currency
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Presenter {
    currency: Currency,
}

impl Presenter {
    pub fn new(currency: Currency) -> Self {
        Self { currency }
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Amount with currency symbol, rounded to the currency's precision
    pub fn money(&self, amount: Decimal) -> String {
        Money::new(amount, self.currency).to_string()
    }

    /// `"<payer> paid <money> for <description>"`
    pub fn expense(&self, expense: &Expense) -> String {
        format!(
            "{} paid {} for {}",
            expense.payer,
            self.money(expense.amount),
            expense.description
        )
    }

    /// `"<name> is owed|owes|is settled <money>"`, amount shown unsigned
    pub fn balance(&self, balance: &Balance) -> String {
        let verb = match balance.status(self.currency.decimal_places()) {
            BalanceStatus::Owed => "is owed",
            BalanceStatus::Owes => "owes",
            BalanceStatus::Settled => "is settled",
        };
        format!("{} {} {}", balance.name, verb, self.money(balance.balance.abs()))
    }

    /// `"<from> should pay <money> to <to>"`
    pub fn instruction(&self, instruction: &SettlementInstruction) -> String {
        format!(
            "{} should pay {} to {}",
            instruction.from,
            self.money(instruction.amount),
            instruction.to
        )
    }

    /// One line per payment, or [`ALL_SETTLED`] for an empty plan
    pub fn plan(&self, plan: &SettlementPlan) -> Vec<String> {
        if plan.is_settled() {
            return vec![ALL_SETTLED.to_string()];
        }
        plan.iter().map(|i| self.instruction(i)).collect()
    }
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
    fn test_balance_lines() {
        let presenter = Presenter::default();

        assert_eq!(presenter.balance(&balance("A", dec!(50))), "A is owed ₹50.00");
        assert_eq!(presenter.balance(&balance("B", dec!(-10))), "B owes ₹10.00");
        assert_eq!(presenter.balance(&balance("C", dec!(0.001))), "C is settled ₹0.00");
        assert_eq!(presenter.balance(&balance("D", dec!(-0.004))), "D is settled ₹0.00");
    }

    #[test]
    fn test_balance_uses_currency_precision() {
        let presenter = Presenter::new(Currency::JPY);

        assert_eq!(presenter.balance(&balance("A", dec!(0.4))), "A is settled ¥0");
        assert_eq!(presenter.balance(&balance("B", dec!(-33.5))), "B owes ¥34");
    }

    #[test]
    fn test_instruction_line() {
        let instruction = SettlementInstruction {
            from: "B".to_string(),
            to: "A".to_string(),
            amount: dec!(10),
        };

        assert_eq!(Presenter::default().instruction(&instruction), "B should pay ₹10.00 to A");
    }

    #[test]
    fn test_empty_plan() {
        assert_eq!(Presenter::default().plan(&SettlementPlan::default()), vec![ALL_SETTLED]);
    }
}
