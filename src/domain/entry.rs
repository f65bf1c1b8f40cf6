use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{days_between, simple_interest, BasisPoints, Cents};

/// One completed interest calculation. Entries are immutable once created;
/// the ledger only ever grows or is replaced wholesale.
///
/// Field names double as the stable persistence schema: the serialized form
/// uses these identifiers regardless of display language, so a ledger written
/// under one set of column labels stays parseable under another.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerEntry {
    /// Who the interest is owed by (optional depending on configuration)
    pub payer_name: Option<String>,
    /// Principal amount in cents (always positive)
    pub principal_cents: Cents,
    /// Annual rate in basis points (never negative)
    pub annual_rate_bps: BasisPoints,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Inclusive days between start and end
    pub day_count: i64,
    /// Derived: simple interest over `day_count`, in cents
    pub interest_cents: Cents,
}

impl LedgerEntry {
    /// Create a new entry, deriving `day_count` and `interest_cents` from the
    /// supplied fields.
    pub fn new(
        payer_name: Option<String>,
        principal_cents: Cents,
        annual_rate_bps: BasisPoints,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Self {
        assert!(principal_cents > 0, "Principal must be positive");
        assert!(annual_rate_bps >= 0, "Rate must not be negative");
        assert!(end_date >= start_date, "End date must not precede start date");

        let day_count = days_between(start_date, end_date);
        let interest_cents = simple_interest(principal_cents, annual_rate_bps, day_count);

        Self {
            payer_name,
            principal_cents,
            annual_rate_bps,
            start_date,
            end_date,
            day_count,
            interest_cents,
        }
    }
}
