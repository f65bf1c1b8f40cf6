use tracing::{debug, warn};

use crate::domain::{Cents, Ledger, LedgerEntry};
use crate::storage::{KeyValueStore, SqliteStore};

use super::{AppError, EntryDraft, HistoryPolicy, LedgerConfig};

/// Fixed, well-known key under which the serialized ledger lives in the
/// injected key-value store.
pub const LEDGER_KEY: &str = "interest_history";

/// Application service for the interest ledger. This is the primary
/// interface for any client (CLI, TUI, embedding, ...).
///
/// Holds the current session's ledger in memory and writes it through to the
/// injected key-value store as one whole-value overwrite after every change.
/// There is no partial-write recovery: a ledger that fails to deserialize on
/// open is treated as absent.
pub struct LedgerService<S: KeyValueStore> {
    store: S,
    config: LedgerConfig,
    ledger: Ledger,
}

impl LedgerService<SqliteStore> {
    /// Initialize a new database at the given path and open a session.
    pub async fn init(database_path: &str, config: LedgerConfig) -> Result<Self, AppError> {
        let db_url = format!("sqlite:{}?mode=rwc", database_path);
        let store = SqliteStore::init(&db_url).await?;
        Self::open(store, config).await
    }

    /// Open a session over an existing database.
    pub async fn connect(database_path: &str, config: LedgerConfig) -> Result<Self, AppError> {
        let db_url = format!("sqlite:{}", database_path);
        let store = SqliteStore::connect(&db_url).await?;
        Self::open(store, config).await
    }
}

impl<S: KeyValueStore> LedgerService<S> {
    /// Open a session over any key-value store, applying the configured
    /// history policy.
    pub async fn open(store: S, config: LedgerConfig) -> Result<Self, AppError> {
        let ledger = match config.history {
            HistoryPolicy::Durable => Self::restore(&store).await?,
            HistoryPolicy::SessionScoped => {
                // Session-scoped history starts blank and says so on disk.
                let ledger = Ledger::new();
                Self::persist(&store, &ledger).await?;
                ledger
            }
        };

        Ok(Self {
            store,
            config,
            ledger,
        })
    }

    /// Read the persisted ledger. Absent or malformed state yields an empty
    /// ledger without failing; the malformed case is a local recovery, never
    /// surfaced to the user.
    async fn restore(store: &S) -> Result<Ledger, AppError> {
        match store.get(LEDGER_KEY).await? {
            None => Ok(Ledger::new()),
            Some(bytes) => match serde_json::from_slice(&bytes) {
                Ok(ledger) => Ok(ledger),
                Err(err) => {
                    warn!(%err, "persisted ledger is malformed, starting empty");
                    Ok(Ledger::new())
                }
            },
        }
    }

    /// Serialize the full entry sequence and overwrite the stored value.
    async fn persist(store: &S, ledger: &Ledger) -> Result<(), AppError> {
        let bytes = serde_json::to_vec(ledger).map_err(anyhow::Error::from)?;
        store.set(LEDGER_KEY, &bytes).await?;
        debug!(entries = ledger.len(), "persisted ledger");
        Ok(())
    }

    /// Validate a draft, append the resulting entry, and persist the whole
    /// ledger. On validation failure the ledger is left untouched.
    pub async fn record_entry(&mut self, draft: EntryDraft) -> Result<LedgerEntry, AppError> {
        let entry = draft.validate(&self.config)?;
        self.ledger.append(entry.clone());
        Self::persist(&self.store, &self.ledger).await?;
        Ok(entry)
    }

    /// Clear the ledger and overwrite the persisted state with an empty
    /// sequence.
    pub async fn reset(&mut self) -> Result<(), AppError> {
        self.ledger = Ledger::new();
        Self::persist(&self.store, &self.ledger).await
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn entries(&self) -> &[LedgerEntry] {
        self.ledger.entries()
    }

    pub fn total_interest_cents(&self) -> Cents {
        self.ledger.total_interest_cents()
    }

    pub fn config(&self) -> &LedgerConfig {
        &self.config
    }
}
