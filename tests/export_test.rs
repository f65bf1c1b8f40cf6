mod common;

use anyhow::Result;
use common::{draft, memory_service, sample_draft};
use fenus::application::AppError;
use fenus::io::{ColumnLabels, Exporter};

#[tokio::test]
async fn test_export_has_entry_rows_plus_total() -> Result<()> {
    let mut service = memory_service().await?;
    for name in ["Alice", "Bob", "Carol", "Dave"] {
        service.record_entry(sample_draft(name)).await?;
    }

    let table = Exporter::new(&service).to_table(&ColumnLabels::default())?;
    assert_eq!(table.rows.len(), 5);

    // Each sample entry accrues 10.00
    let total = table.rows.last().unwrap();
    assert_eq!(total[0], "Total");
    assert_eq!(total[6], "40.00");
    Ok(())
}

#[tokio::test]
async fn test_export_total_matches_mixed_entries() -> Result<()> {
    let mut service = memory_service().await?;
    service.record_entry(sample_draft("Alice")).await?; // 10.00
    service
        .record_entry(draft(Some("Bob"), "1000", "10", "2023-01-01", "2023-12-31"))
        .await?; // 100.00
    service
        .record_entry(draft(Some("Carol"), "250.50", "7.25", "2024-04-01", "2024-04-30"))
        .await?;

    let table = Exporter::new(&service).to_table(&ColumnLabels::default())?;
    let total = table.rows.last().unwrap();

    let expected = service.total_interest_cents();
    assert_eq!(total[6], fenus::format_cents(expected));
    Ok(())
}

#[tokio::test]
async fn test_export_empty_ledger_fails() -> Result<()> {
    let service = memory_service().await?;
    let err = Exporter::new(&service)
        .to_table(&ColumnLabels::default())
        .unwrap_err();
    assert!(matches!(err, AppError::EmptyLedger));
    Ok(())
}

#[tokio::test]
async fn test_export_does_not_mutate_ledger() -> Result<()> {
    let mut service = memory_service().await?;
    service.record_entry(sample_draft("Alice")).await?;
    let before = service.ledger().clone();

    let exporter = Exporter::new(&service);
    exporter.to_table(&ColumnLabels::default())?;
    exporter.to_table(&ColumnLabels::default())?;

    assert_eq!(service.ledger(), &before);
    Ok(())
}

#[tokio::test]
async fn test_export_csv_artifact() -> Result<()> {
    let mut service = memory_service().await?;
    service.record_entry(sample_draft("Alice")).await?;
    service.record_entry(sample_draft("Bob")).await?;

    let mut out = Vec::new();
    let count = Exporter::new(&service).export_csv(&mut out, &ColumnLabels::default())?;
    assert_eq!(count, 2);

    let text = String::from_utf8(out)?;
    let lines: Vec<_> = text.lines().collect();
    assert_eq!(lines.len(), 4); // header + 2 entries + total
    assert_eq!(
        lines[0],
        "Name,Amount,Interest Rate,Start Date,End Date,No of Days,Calculated Interest"
    );
    assert!(lines[1].starts_with("Alice,1000.00,5.00,01/01/2024,13/03/2024,73,10.00"));
    assert_eq!(lines[3], "Total,,,,,,20.00");
    Ok(())
}
