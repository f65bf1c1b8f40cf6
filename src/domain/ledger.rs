use serde::{Deserialize, Serialize};

use super::{Cents, LedgerEntry};

/// The ordered, append-only collection of completed calculations.
/// Insertion order is append order: the ledger is an audit trail, not a
/// date-sorted index. Serializes transparently as an array of entries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ledger {
    entries: Vec<LedgerEntry>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a completed entry. This is the only way the ledger grows.
    pub fn append(&mut self, entry: LedgerEntry) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[LedgerEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all entries' interest. Entries hold whole cents, so the total
    /// is exact and already rounded to two fractional digits.
    pub fn total_interest_cents(&self) -> Cents {
        self.entries.iter().map(|e| e.interest_cents).sum()
    }
}
