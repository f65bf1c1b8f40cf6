use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::application::{EntryDraft, HistoryPolicy, LedgerConfig, LedgerService};
use crate::domain::{
    days_between, format_cents, format_display_date, format_rate, parse_cents, parse_input_date,
    parse_rate, simple_interest,
};
use crate::io::{ColumnLabels, Exporter};
use crate::storage::SqliteStore;

/// Fenus - Simple Interest Ledger
#[derive(Parser)]
#[command(name = "fenus")]
#[command(about = "A local-first ledger of simple-interest calculations")]
#[command(version)]
pub struct Cli {
    /// Database file path
    #[arg(short, long, default_value = "fenus.db")]
    pub database: String,

    /// Discard any persisted history and start a fresh session
    #[arg(long, global = true)]
    pub fresh: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize a new database
    Init,

    /// Count the inclusive days between two dates
    Days {
        /// Start date (YYYY-MM-DD)
        start: String,

        /// End date (YYYY-MM-DD)
        end: String,
    },

    /// Compute simple interest without recording it
    Interest {
        /// Principal amount (e.g., "1000" or "1000.00")
        amount: String,

        /// Annual interest rate in percent (e.g., "5" or "5.25")
        rate: String,

        /// Number of days (omit to derive from --start/--end)
        #[arg(long)]
        days: Option<i64>,

        /// Start date (YYYY-MM-DD)
        #[arg(long)]
        start: Option<String>,

        /// End date (YYYY-MM-DD)
        #[arg(long)]
        end: Option<String>,
    },

    /// Record a calculation in the ledger
    Add {
        /// Principal amount (e.g., "1000" or "1000.00")
        amount: String,

        /// Annual interest rate in percent (e.g., "5" or "5.25")
        rate: String,

        /// Start date (YYYY-MM-DD)
        #[arg(long)]
        start: String,

        /// End date (YYYY-MM-DD)
        #[arg(long)]
        end: String,

        /// Payer name
        #[arg(short, long)]
        name: Option<String>,
    },

    /// List all recorded entries
    List,

    /// Show the total accrued interest
    Total,

    /// Export the ledger as CSV
    Export {
        /// Output file ("-" for stdout)
        #[arg(short, long, default_value = crate::io::DEFAULT_EXPORT_FILE)]
        output: String,
    },

    /// Clear the ledger and its persisted state
    Reset,
}

impl Cli {
    fn config(&self) -> LedgerConfig {
        let history = if self.fresh {
            HistoryPolicy::SessionScoped
        } else {
            HistoryPolicy::Durable
        };
        LedgerConfig::new().with_history(history)
    }

    pub async fn run(self) -> Result<()> {
        let config = self.config();
        let database = self.database;

        match self.command {
            Commands::Init => {
                LedgerService::init(&database, config).await?;
                println!("Database initialized: {}", database);
            }

            Commands::Days { ref start, ref end } => {
                let start = parse_input_date(start)
                    .with_context(|| format!("Invalid date '{}'. Use YYYY-MM-DD", start))?;
                let end = parse_input_date(end)
                    .with_context(|| format!("Invalid date '{}'. Use YYYY-MM-DD", end))?;
                println!("Number of days: {}", days_between(start, end));
            }

            Commands::Interest {
                ref amount,
                ref rate,
                days,
                ref start,
                ref end,
            } => {
                let principal = parse_cents(amount)
                    .context("Invalid amount format. Use '1000.00' or '1000'")?;
                let rate_bps =
                    parse_rate(rate).context("Invalid rate format. Use '5' or '5.25'")?;
                anyhow::ensure!(principal >= 0, "Amount must not be negative");
                anyhow::ensure!(rate_bps >= 0, "Rate must not be negative");

                let days = match (days, start, end) {
                    (Some(days), _, _) => {
                        anyhow::ensure!(days >= 0, "Day count must not be negative");
                        days
                    }
                    (None, Some(start), Some(end)) => {
                        let start = parse_input_date(start)
                            .with_context(|| format!("Invalid date '{}'. Use YYYY-MM-DD", start))?;
                        let end = parse_input_date(end)
                            .with_context(|| format!("Invalid date '{}'. Use YYYY-MM-DD", end))?;
                        days_between(start, end)
                    }
                    _ => anyhow::bail!("Provide either --days or both --start and --end"),
                };

                println!("Number of days: {}", days);
                println!(
                    "Calculated interest: {}",
                    format_cents(simple_interest(principal, rate_bps, days))
                );
            }

            Commands::Add {
                amount,
                rate,
                start,
                end,
                name,
            } => {
                let mut service = LedgerService::connect(&database, config.clone()).await?;
                let draft = EntryDraft {
                    payer_name: name,
                    principal: Some(amount),
                    annual_rate: Some(rate),
                    start_date: Some(start),
                    end_date: Some(end),
                };

                let entry = service.record_entry(draft).await?;
                println!(
                    "Recorded entry: {} at {}% over {} days -> {}",
                    format_cents(entry.principal_cents),
                    format_rate(entry.annual_rate_bps),
                    entry.day_count,
                    format_cents(entry.interest_cents)
                );
            }

            Commands::List => {
                let service = LedgerService::connect(&database, config.clone()).await?;
                run_list_command(&service);
            }

            Commands::Total => {
                let service = LedgerService::connect(&database, config.clone()).await?;
                println!(
                    "Total interest: {} ({} entries)",
                    format_cents(service.total_interest_cents()),
                    service.entries().len()
                );
            }

            Commands::Export { output } => {
                let service = LedgerService::connect(&database, config.clone()).await?;
                run_export_command(&service, &output)?;
            }

            Commands::Reset => {
                let mut service = LedgerService::connect(&database, config.clone()).await?;
                service.reset().await?;
                println!("Ledger cleared.");
            }
        }

        Ok(())
    }
}

fn run_list_command(service: &LedgerService<SqliteStore>) {
    let entries = service.entries();
    if entries.is_empty() {
        println!("No entries recorded.");
        return;
    }

    println!(
        "{:<20} {:>12} {:>8} {:>12} {:>12} {:>6} {:>12}",
        "NAME", "AMOUNT", "RATE", "START", "END", "DAYS", "INTEREST"
    );
    println!("{}", "-".repeat(88));
    for entry in entries {
        println!(
            "{:<20} {:>12} {:>8} {:>12} {:>12} {:>6} {:>12}",
            entry.payer_name.as_deref().unwrap_or("-"),
            format_cents(entry.principal_cents),
            format_rate(entry.annual_rate_bps),
            format_display_date(entry.start_date),
            format_display_date(entry.end_date),
            entry.day_count,
            format_cents(entry.interest_cents)
        );
    }
    println!("{}", "-".repeat(88));
    println!(
        "{:<20} {:>75}",
        "Total",
        format_cents(service.total_interest_cents())
    );
}

fn run_export_command(service: &LedgerService<SqliteStore>, output: &str) -> Result<()> {
    use std::fs::File;
    use std::io::{stdout, Write};

    let exporter = Exporter::new(service);

    // "-" streams to stdout instead of a file
    let writer: Box<dyn Write> = if output == "-" {
        Box::new(stdout())
    } else {
        let file = File::create(output)
            .with_context(|| format!("Failed to create output file: {}", output))?;
        Box::new(file)
    };

    let count = exporter.export_csv(writer, &ColumnLabels::default())?;
    if output != "-" {
        eprintln!("Exported {} entries to {}", count, output);
    }

    Ok(())
}
