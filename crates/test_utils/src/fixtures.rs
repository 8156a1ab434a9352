//! Pre-built Test Fixtures
//!
//! Ready-to-use ledgers for the standard split scenarios. Balances noted on
//! each fixture are the expected equal-share results.

use domain_split::Ledger;
use rust_decimal_macros::dec;

use crate::builders::TestLedgerBuilder;

/// Fixture ledgers
pub struct LedgerFixtures;

impl LedgerFixtures {
    /// A and B; A paid 100. Balances A +50, B -50.
    pub fn two_people_one_expense() -> Ledger {
        TestLedgerBuilder::new()
            .participants(["A", "B"])
            .expense("A", dec!(100), "x")
            .build()
    }

    /// A, B and C; A paid 90, B paid 30. Share 40, balances A +50, B -10, C -40.
    pub fn three_people_two_payers() -> Ledger {
        TestLedgerBuilder::new()
            .participants(["A", "B", "C"])
            .expense("A", dec!(90), "x")
            .expense("B", dec!(30), "y")
            .build()
    }

    /// One creditor whose credit is exactly the two debtors' combined debt.
    /// A paid 120, B paid 30. Share 50, balances A +70, B -20, C -50.
    pub fn one_creditor_two_debtors() -> Ledger {
        TestLedgerBuilder::new()
            .participants(["A", "B", "C"])
            .expense("A", dec!(120), "Hotel")
            .expense("B", dec!(30), "Fuel")
            .build()
    }

    /// A paid 100 for three people, so the share does not terminate.
    pub fn non_terminating_share() -> Ledger {
        TestLedgerBuilder::new()
            .participants(["A", "B", "C"])
            .expense("A", dec!(100), "Dinner")
            .build()
    }

    /// Everyone paid the same, nobody owes anything.
    pub fn already_even() -> Ledger {
        TestLedgerBuilder::new()
            .participants(["A", "B", "C"])
            .expense("A", dec!(25.50), "Cab")
            .expense("B", dec!(25.50), "Snacks")
            .expense("C", dec!(25.50), "Tickets")
            .build()
    }

    /// A paid 100, B took a 40 refund, C paid nothing.
    /// Share 20, balances A +80, B -60, C -20.
    pub fn with_refund() -> Ledger {
        TestLedgerBuilder::new()
            .participants(["A", "B", "C"])
            .expense("A", dec!(100), "Groceries")
            .expense("B", dec!(-40), "Returned tickets")
            .expense("C", dec!(0), "Free entry")
            .build()
    }

    /// Participants but no expenses
    pub fn participants_only() -> Ledger {
        TestLedgerBuilder::new()
            .participants(["A", "B"])
            .build()
    }

    /// An expense whose payer "Z" is not a participant
    pub fn unknown_payer() -> Ledger {
        TestLedgerBuilder::new()
            .participants(["A", "B"])
            .expense("A", dec!(40), "Lunch")
            .expense("Z", dec!(10), "Ghost")
            .build()
    }
}
