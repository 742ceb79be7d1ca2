use super::account::Account;
use super::history::{HistoryEntry, TIMESTAMP_FORMAT};
use super::{AccountNumber, Amount};
use std::fmt;

/// Read-only view of an account: its history in execution order, and its balance.
#[derive(Debug, Clone)]
pub struct Statement<'a> {
    pub agency: &'a str,
    pub number: AccountNumber,
    pub holder: &'a str,
    pub entries: &'a [HistoryEntry],
    pub balance: Amount,
}

impl<'a> Statement<'a> {
    pub fn new(account: &'a Account, holder: &'a str) -> Self {
        Self {
            agency: account.agency(),
            number: account.number(),
            holder,
            entries: account.history().entries(),
            balance: account.balance(),
        }
    }
}

impl fmt::Display for Statement<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Agency:\t{}", self.agency)?;
        writeln!(f, "Account:\t{}", self.number)?;
        writeln!(f, "Holder:\t{}", self.holder)?;

        if self.entries.is_empty() {
            writeln!(f, "\nNo transactions recorded.")?;
        }
        for entry in self.entries {
            writeln!(f, "\n{}:", entry.kind)?;
            writeln!(f, "\t{:.2}", entry.amount)?;
            writeln!(f, "\tDate: {}", entry.timestamp.format(TIMESTAMP_FORMAT))?;
        }

        write!(f, "\nBalance:\n\t{:.2}", self.balance)
    }
}
