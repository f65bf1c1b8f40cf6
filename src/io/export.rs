use std::io::Write;

use anyhow::Result;

use crate::application::{AppError, LedgerService};
use crate::domain::{format_cents, format_display_date, format_rate, Ledger};
use crate::storage::KeyValueStore;

/// Sheet name handed to the tabular writer alongside the table.
pub const SHEET_NAME: &str = "Interest History";

/// Conventional artifact file name for the exported ledger.
pub const DEFAULT_EXPORT_FILE: &str = "interest-history.csv";

/// Display headers for the export, one per entry field plus the total-row
/// label. Labels are a presentation concern only: swapping them (e.g. for a
/// localized artifact) never changes what gets persisted or how.
#[derive(Debug, Clone)]
pub struct ColumnLabels {
    pub payer: String,
    pub principal: String,
    pub rate: String,
    pub start_date: String,
    pub end_date: String,
    pub day_count: String,
    pub interest: String,
    pub total: String,
}

impl Default for ColumnLabels {
    fn default() -> Self {
        Self {
            payer: "Name".into(),
            principal: "Amount".into(),
            rate: "Interest Rate".into(),
            start_date: "Start Date".into(),
            end_date: "End Date".into(),
            day_count: "No of Days".into(),
            interest: "Calculated Interest".into(),
            total: "Total".into(),
        }
    }
}

impl ColumnLabels {
    fn header(&self) -> Vec<String> {
        vec![
            self.payer.clone(),
            self.principal.clone(),
            self.rate.clone(),
            self.start_date.clone(),
            self.end_date.clone(),
            self.day_count.clone(),
            self.interest.clone(),
        ]
    }
}

/// Transient tabular projection of a ledger: ordered column headers plus
/// rows of display-formatted cells. Produced on demand, never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// The injected writer capability: takes a finished table and a sheet name
/// and encodes them into whatever artifact format it owns.
pub trait TabularWriter {
    fn write_table(&mut self, sheet_name: &str, table: &ExportTable) -> Result<()>;
}

/// CSV-encoding tabular writer. CSV has no sheet concept, so the sheet name
/// is accepted and ignored.
pub struct CsvTabularWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> CsvTabularWriter<W> {
    pub fn new(inner: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(inner),
        }
    }
}

impl<W: Write> TabularWriter for CsvTabularWriter<W> {
    fn write_table(&mut self, _sheet_name: &str, table: &ExportTable) -> Result<()> {
        self.writer.write_record(&table.columns)?;
        for row in &table.rows {
            self.writer.write_record(row)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

/// Project a ledger into an export table: one row per entry plus a final
/// total row. Pure: the ledger is read, never changed.
///
/// An empty ledger fails with `EmptyLedger`; an artifact consisting of a
/// lone total row would be misleading.
pub fn ledger_to_table(ledger: &Ledger, labels: &ColumnLabels) -> Result<ExportTable, AppError> {
    if ledger.is_empty() {
        return Err(AppError::EmptyLedger);
    }

    let mut rows: Vec<Vec<String>> = ledger
        .entries()
        .iter()
        .map(|entry| {
            vec![
                entry.payer_name.clone().unwrap_or_default(),
                format_cents(entry.principal_cents),
                format_rate(entry.annual_rate_bps),
                format_display_date(entry.start_date),
                format_display_date(entry.end_date),
                entry.day_count.to_string(),
                format_cents(entry.interest_cents),
            ]
        })
        .collect();

    // Synthetic total row: numeric columns blank, interest carries the sum.
    rows.push(vec![
        labels.total.clone(),
        String::new(),
        String::new(),
        String::new(),
        String::new(),
        String::new(),
        format_cents(ledger.total_interest_cents()),
    ]);

    Ok(ExportTable {
        columns: labels.header(),
        rows,
    })
}

/// Exporter for projecting a session's ledger into external artifacts.
pub struct Exporter<'a, S: KeyValueStore> {
    service: &'a LedgerService<S>,
}

impl<'a, S: KeyValueStore> Exporter<'a, S> {
    pub fn new(service: &'a LedgerService<S>) -> Self {
        Self { service }
    }

    /// Build the export table for the current ledger.
    pub fn to_table(&self, labels: &ColumnLabels) -> Result<ExportTable, AppError> {
        ledger_to_table(self.service.ledger(), labels)
    }

    /// Export the ledger as CSV. Returns the number of entry rows written
    /// (the total row is not counted).
    pub fn export_csv<W: Write>(&self, writer: W, labels: &ColumnLabels) -> Result<usize> {
        let table = self.to_table(labels)?;
        let mut csv_writer = CsvTabularWriter::new(writer);
        csv_writer.write_table(SHEET_NAME, &table)?;
        Ok(table.rows.len() - 1)
    }
}
