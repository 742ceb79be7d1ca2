use super::transaction::Kind;
use super::Amount;
use chrono::{DateTime, Local};

pub const TIMESTAMP_FORMAT: &str = "%d-%m-%Y %H:%M:%S";

#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    pub kind: Kind,
    pub amount: Amount,
    pub timestamp: DateTime<Local>,
}

/// Append-only record of the transactions executed against one account.
///
/// Entries are kept in execution order, which is also the order a statement
/// displays them in. There is no way to remove or reorder an entry.
#[derive(Debug, Clone, Default)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub(super) fn record(&mut self, kind: Kind, amount: Amount, timestamp: DateTime<Local>) {
        self.entries.push(HistoryEntry {
            kind,
            amount,
            timestamp,
        });
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of recorded entries of the given kind.
    pub fn count(&self, kind: Kind) -> usize {
        self.entries.iter().filter(|entry| entry.kind == kind).count()
    }
}
