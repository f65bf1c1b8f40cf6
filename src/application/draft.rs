use chrono::NaiveDate;

use crate::domain::{
    days_between, parse_cents, parse_input_date, parse_rate, simple_interest, Cents, LedgerEntry,
};

use super::{AppError, LedgerConfig};

/// Raw field values as supplied by the input surface, before any parsing.
///
/// The original tool derived "is a computation ready" from the emptiness of
/// form fields; here readiness is an explicit predicate over the draft, so
/// no rendering state leaks into the business rules. Whitespace-only values
/// count as absent.
#[derive(Debug, Clone, Default)]
pub struct EntryDraft {
    pub payer_name: Option<String>,
    pub principal: Option<String>,
    pub annual_rate: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

impl EntryDraft {
    /// Live day-count preview. `Some` only when both dates parse; a reversed
    /// range shows as 0 rather than an error, mirroring what the user sees
    /// while still editing.
    pub fn day_count(&self) -> Option<i64> {
        let start = parse_input_date(present(&self.start_date)?).ok()?;
        let end = parse_input_date(present(&self.end_date)?).ok()?;
        Some(days_between(start, end))
    }

    /// Live interest preview. `Some` only when principal, rate, and both
    /// dates are all present and parseable; partial input does not compute
    /// (callers keep whatever they last displayed).
    pub fn interest_preview(&self) -> Option<Cents> {
        let principal = parse_cents(present(&self.principal)?).ok()?;
        let rate = parse_rate(present(&self.annual_rate)?).ok()?;
        let days = self.day_count()?;
        if principal < 0 || rate < 0 {
            return None;
        }
        Some(simple_interest(principal, rate, days))
    }

    /// The save-time gate: every required field must be present and valid,
    /// or the whole draft is rejected with the full list of offenders.
    pub fn validate(&self, config: &LedgerConfig) -> Result<LedgerEntry, AppError> {
        let mut bad: Vec<&str> = Vec::new();

        let payer = present(&self.payer_name).map(str::to_string);
        if config.require_payer && payer.is_none() {
            bad.push("name");
        }

        let principal = present(&self.principal)
            .and_then(|s| parse_cents(s).ok())
            .filter(|&c| c > 0);
        if principal.is_none() {
            bad.push("principal");
        }

        let rate = present(&self.annual_rate)
            .and_then(|s| parse_rate(s).ok())
            .filter(|&r| r >= 0);
        if rate.is_none() {
            bad.push("rate");
        }

        let start = present(&self.start_date).and_then(|s| parse_input_date(s).ok());
        if start.is_none() {
            bad.push("start_date");
        }

        let end = present(&self.end_date).and_then(|s| parse_input_date(s).ok());
        match (start, end) {
            (_, None) => bad.push("end_date"),
            (Some(start), Some(end)) if end < start => bad.push("end_date"),
            _ => {}
        }

        if !bad.is_empty() {
            return Err(AppError::validation(bad));
        }

        // `bad` is empty, so every field below is Some
        let (start, end): (NaiveDate, NaiveDate) = (start.unwrap(), end.unwrap());
        Ok(LedgerEntry::new(
            payer,
            principal.unwrap(),
            rate.unwrap(),
            start,
            end,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_draft() -> EntryDraft {
        EntryDraft {
            payer_name: Some("Alice".into()),
            principal: Some("1000".into()),
            annual_rate: Some("5".into()),
            start_date: Some("2024-01-01".into()),
            end_date: Some("2024-03-13".into()),
        }
    }

    #[test]
    fn test_day_count_requires_both_dates() {
        let mut draft = full_draft();
        assert_eq!(draft.day_count(), Some(73));

        draft.end_date = None;
        assert_eq!(draft.day_count(), None);

        draft.end_date = Some("   ".into());
        assert_eq!(draft.day_count(), None);
    }

    #[test]
    fn test_day_count_reversed_range_previews_as_zero() {
        let mut draft = full_draft();
        draft.start_date = Some("2024-06-01".into());
        draft.end_date = Some("2024-05-01".into());
        assert_eq!(draft.day_count(), Some(0));
    }

    #[test]
    fn test_interest_preview_when_ready() {
        assert_eq!(full_draft().interest_preview(), Some(1_000));
    }

    #[test]
    fn test_interest_preview_absent_on_partial_input() {
        let mut draft = full_draft();
        draft.principal = None;
        assert_eq!(draft.interest_preview(), None);

        let mut draft = full_draft();
        draft.annual_rate = Some("5.2.1".into());
        assert_eq!(draft.interest_preview(), None);
    }

    #[test]
    fn test_validate_accepts_complete_draft() {
        let entry = full_draft().validate(&LedgerConfig::new()).unwrap();
        assert_eq!(entry.payer_name.as_deref(), Some("Alice"));
        assert_eq!(entry.principal_cents, 100_000);
        assert_eq!(entry.annual_rate_bps, 500);
        assert_eq!(entry.day_count, 73);
        assert_eq!(entry.interest_cents, 1_000);
    }

    #[test]
    fn test_validate_names_every_offending_field() {
        let draft = EntryDraft {
            payer_name: None,
            principal: Some("-5".into()),
            annual_rate: Some("abc".into()),
            start_date: Some("2024-01-01".into()),
            end_date: None,
        };
        let err = draft.validate(&LedgerConfig::new()).unwrap_err();
        match err {
            AppError::Validation { fields } => {
                assert_eq!(fields, ["name", "principal", "rate", "end_date"]);
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_rejects_reversed_range() {
        let mut draft = full_draft();
        draft.start_date = Some("2024-06-01".into());
        draft.end_date = Some("2024-05-01".into());
        let err = draft.validate(&LedgerConfig::new()).unwrap_err();
        assert!(matches!(err, AppError::Validation { fields } if fields == ["end_date"]));
    }

    #[test]
    fn test_validate_payer_optional_by_config() {
        let mut draft = full_draft();
        draft.payer_name = None;

        assert!(draft.validate(&LedgerConfig::new()).is_err());

        let entry = draft
            .validate(&LedgerConfig::new().with_optional_payer())
            .unwrap();
        assert_eq!(entry.payer_name, None);
    }

    #[test]
    fn test_validate_rejects_zero_principal() {
        let mut draft = full_draft();
        draft.principal = Some("0".into());
        let err = draft.validate(&LedgerConfig::new()).unwrap_err();
        assert!(matches!(err, AppError::Validation { fields } if fields == ["principal"]));
    }

    #[test]
    fn test_validate_accepts_zero_rate() {
        let mut draft = full_draft();
        draft.annual_rate = Some("0".into());
        let entry = draft.validate(&LedgerConfig::new()).unwrap();
        assert_eq!(entry.interest_cents, 0);
    }
}
