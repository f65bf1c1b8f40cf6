/// What happens to persisted history when a session opens.
///
/// Both policies exist in the wild for this kind of tool: one keeps the
/// ledger across sessions, the other starts every session from a blank
/// slate. The choice is explicit configuration, not an accident of wiring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HistoryPolicy {
    /// Restore persisted history on open.
    #[default]
    Durable,
    /// Overwrite persisted history with an empty ledger on open.
    SessionScoped,
}

/// Ledger behavior configuration.
#[derive(Debug, Clone)]
pub struct LedgerConfig {
    pub history: HistoryPolicy,
    /// When true, saving an entry without a payer name is a validation error.
    pub require_payer: bool,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl LedgerConfig {
    /// Default setup: durable history, payer name required on save.
    pub fn new() -> Self {
        Self {
            history: HistoryPolicy::Durable,
            require_payer: true,
        }
    }

    pub fn with_history(mut self, history: HistoryPolicy) -> Self {
        self.history = history;
        self
    }

    pub fn with_optional_payer(mut self) -> Self {
        self.require_payer = false;
        self
    }
}
