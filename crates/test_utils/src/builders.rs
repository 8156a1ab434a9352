//! Test Data Builders
//!
//! Builder for ledgers so tests only spell out the participants and
//! expenses they care about.

use domain_split::Ledger;
use rust_decimal::Decimal;

/// Builder for constructing test ledgers
///
/// Expenses are recorded through `Ledger::record_expense`, so a payer that
/// was never added as a participant ends up in the ledger as-is. That is how
/// tests reach the unknown-payer path.
#[derive(Debug, Default)]
pub struct TestLedgerBuilder {
    participants: Vec<String>,
    expenses: Vec<(String, Decimal, String)>,
}

impl TestLedgerBuilder {
    /// Creates an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one participant
    pub fn participant(mut self, name: impl Into<String>) -> Self {
        self.participants.push(name.into());
        self
    }

    /// Adds several participants in order
    pub fn participants<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.participants.extend(names.into_iter().map(Into::into));
        self
    }

    /// Adds an expense with an explicit description
    pub fn expense(
        mut self,
        payer: impl Into<String>,
        amount: Decimal,
        description: impl Into<String>,
    ) -> Self {
        self.expenses.push((payer.into(), amount, description.into()));
        self
    }

    /// Adds an expense with a generated description
    pub fn paid(self, payer: impl Into<String>, amount: Decimal) -> Self {
        let description = format!("Test expense {}", self.expenses.len() + 1);
        self.expense(payer, amount, description)
    }

    /// Builds the ledger
    ///
    /// # Panics
    ///
    /// Panics if a participant or expense is rejected by the ledger, which
    /// means the test itself is malformed
    pub fn build(self) -> Ledger {
        let mut ledger = Ledger::new();

        for name in &self.participants {
            assert!(ledger.add_person(name), "participant '{}' was rejected", name);
        }

        for (payer, amount, description) in &self.expenses {
            assert!(
                ledger.record_expense(payer, *amount, description).is_some(),
                "expense '{}' by '{}' was rejected",
                description,
                payer
            );
        }

        ledger
    }
}
