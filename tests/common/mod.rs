// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use anyhow::Result;
use fenus::application::{EntryDraft, LedgerConfig, LedgerService};
use fenus::storage::{MemoryStore, SqliteStore};
use tempfile::TempDir;

/// Helper to create a test service backed by a temporary SQLite database
pub async fn sqlite_service() -> Result<(LedgerService<SqliteStore>, TempDir)> {
    sqlite_service_with_config(LedgerConfig::new()).await
}

pub async fn sqlite_service_with_config(
    config: LedgerConfig,
) -> Result<(LedgerService<SqliteStore>, TempDir)> {
    let temp_dir = TempDir::new()?;
    let db_path = temp_dir.path().join("test.db");
    let service = LedgerService::init(db_path.to_str().unwrap(), config).await?;
    Ok((service, temp_dir))
}

/// Reopen a session over a database created by `sqlite_service`
pub async fn reopen(
    temp_dir: &TempDir,
    config: LedgerConfig,
) -> Result<LedgerService<SqliteStore>> {
    let db_path = temp_dir.path().join("test.db");
    Ok(LedgerService::connect(db_path.to_str().unwrap(), config).await?)
}

/// Helper to create a test service over an in-memory key-value store
pub async fn memory_service() -> Result<LedgerService<MemoryStore>> {
    Ok(LedgerService::open(MemoryStore::new(), LedgerConfig::new()).await?)
}

/// Fully populated draft for a known calculation:
/// 1000.00 at 5% over 2024-01-01..2024-03-13 (73 days) = 10.00
pub fn sample_draft(name: &str) -> EntryDraft {
    draft(Some(name), "1000", "5", "2024-01-01", "2024-03-13")
}

pub fn draft(
    name: Option<&str>,
    amount: &str,
    rate: &str,
    start: &str,
    end: &str,
) -> EntryDraft {
    EntryDraft {
        payer_name: name.map(Into::into),
        principal: Some(amount.into()),
        annual_rate: Some(rate.into()),
        start_date: Some(start.into()),
        end_date: Some(end.into()),
    }
}
