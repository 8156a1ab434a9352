//! Command session
//!
//! A session owns one ledger and turns text commands into ledger calls.
//! Each command produces the lines to print; nothing is written directly.

use tracing::{debug, info};

use domain_split::{Ledger, SettlementEngine, SplitReport};

use crate::config::CliConfig;
use crate::error::SessionError;
use crate::presenter::Presenter;

const PERSON_USAGE: &str = "person <name>";
const EXPENSE_USAGE: &str = "expense <payer>, <amount>, <description>";

const HELP: &[&str] = &[
    "Commands:",
    "  person <name>                              add a participant",
    "  expense <payer>, <amount>, <description>   record an expense",
    "  expenses                                   list expenses",
    "  balances                                   show who owes and who is owed",
    "  settle                                     suggest payments",
    "  report                                     print the full split as JSON",
    "  reset                                      clear participants and expenses",
    "  help                                       show this help",
    "  quit | exit                                leave",
];

/// Outcome of a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Lines to print, possibly none
    Lines(Vec<String>),
    /// The session should end
    Quit,
}

impl Reply {
    fn line(text: impl Into<String>) -> Self {
        Reply::Lines(vec![text.into()])
    }

    /// Printed lines, empty for [`Reply::Quit`]
    pub fn lines(&self) -> &[String] {
        match self {
            Reply::Lines(lines) => lines,
            Reply::Quit => &[],
        }
    }

    pub fn is_quit(&self) -> bool {
        matches!(self, Reply::Quit)
    }
}

/// Interactive session over a single ledger
#[derive(Debug, Default)]
pub struct Session {
    ledger: Ledger,
    engine: SettlementEngine,
    presenter: Presenter,
}

impl Session {
    /// Creates a session with an empty ledger
    pub fn new(engine: SettlementEngine, presenter: Presenter) -> Self {
        Self {
            ledger: Ledger::new(),
            engine,
            presenter,
        }
    }

    /// Creates a session from loaded configuration
    pub fn from_config(config: &CliConfig) -> Result<Self, SessionError> {
        let engine = SettlementEngine::new(config.to_policy()?);
        let presenter = Presenter::new(config.display_currency()?);
        Ok(Self::new(engine, presenter))
    }

    /// Continues an existing ledger
    pub fn with_ledger(mut self, ledger: Ledger) -> Self {
        self.ledger = ledger;
        self
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Parses and runs one command line
    ///
    /// Blank lines yield an empty reply.
    ///
    /// # Errors
    ///
    /// - `SessionError::UnknownCommand` for an unrecognised command word
    /// - `SessionError::Usage` when required arguments are missing
    /// - `SessionError::Split` when the ledger cannot be settled
    pub fn execute(&mut self, line: &str) -> Result<Reply, SessionError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(Reply::Lines(Vec::new()));
        }

        let (command, args) = match line.split_once(char::is_whitespace) {
            Some((command, args)) => (command, args.trim()),
            None => (line, ""),
        };
        let command = command.to_ascii_lowercase();
        debug!(ledger_id = %self.ledger.id(), command = %command, "executing command");

        match command.as_str() {
            "person" => self.add_person(args),
            "expense" => self.add_expense(args),
            "expenses" => Ok(self.list_expenses()),
            "balances" => self.show_balances(),
            "settle" => self.show_plan(),
            "report" => self.report(),
            "reset" => {
                self.ledger.reset();
                info!(ledger_id = %self.ledger.id(), "ledger reset");
                Ok(Reply::line("Cleared all participants and expenses"))
            }
            "help" => Ok(Reply::Lines(HELP.iter().map(|l| l.to_string()).collect())),
            "quit" | "exit" => Ok(Reply::Quit),
            _ => Err(SessionError::UnknownCommand(command)),
        }
    }

    fn add_person(&mut self, name: &str) -> Result<Reply, SessionError> {
        if name.is_empty() {
            return Err(SessionError::Usage(PERSON_USAGE));
        }

        if self.ledger.add_person(name) {
            Ok(Reply::line(format!("Added {}", name)))
        } else {
            Ok(Reply::line(format!("{} is already a participant", name)))
        }
    }

    fn add_expense(&mut self, args: &str) -> Result<Reply, SessionError> {
        let mut parts = args.splitn(3, ',').map(str::trim);
        let (Some(payer), Some(amount), Some(description)) = (parts.next(), parts.next(), parts.next())
        else {
            return Err(SessionError::Usage(EXPENSE_USAGE));
        };
        if payer.is_empty() {
            return Err(SessionError::Usage(EXPENSE_USAGE));
        }

        // The ledger accepts any payer; here only participants may pay.
        if !self.ledger.has_participant(payer) {
            return Ok(Reply::line(format!(
                "{} is not a participant, add them with 'person {}' first",
                payer, payer
            )));
        }

        let recorded = self.ledger.add_expense(payer, amount, description);
        match recorded.and_then(|id| self.ledger.expenses().iter().find(|e| e.id == id)) {
            Some(expense) => Ok(Reply::line(self.presenter.expense(expense))),
            None => Ok(Reply::line(
                "Expense skipped: amount must be a number and description must not be empty",
            )),
        }
    }

    fn list_expenses(&self) -> Reply {
        if self.ledger.expenses().is_empty() {
            return Reply::line("No expenses yet");
        }
        Reply::Lines(
            self.ledger
                .expenses()
                .iter()
                .map(|e| self.presenter.expense(e))
                .collect(),
        )
    }

    fn show_balances(&self) -> Result<Reply, SessionError> {
        let balances = self.engine.compute_balances(&self.ledger)?;
        if balances.is_empty() {
            return Ok(Reply::line("No balances yet"));
        }
        Ok(Reply::Lines(
            balances.iter().map(|b| self.presenter.balance(b)).collect(),
        ))
    }

    fn show_plan(&self) -> Result<Reply, SessionError> {
        let plan = self.engine.compute_settlement_plan(&self.ledger)?;
        Ok(Reply::Lines(self.presenter.plan(&plan)))
    }

    fn report(&self) -> Result<Reply, SessionError> {
        let report = SplitReport::build(&self.ledger, &self.engine)?;
        Ok(Reply::line(report.to_json_pretty()?))
    }
}
