use chrono::NaiveDate;

/// Inclusive day count between two calendar dates, ignoring time-of-day.
/// Both endpoints count, so `days_between(d, d) == 1`.
/// A reversed range (end before start) clamps to 0.
pub fn days_between(start: NaiveDate, end: NaiveDate) -> i64 {
    (end.signed_duration_since(start).num_days() + 1).max(0)
}

/// Parse a date from the input surface (ISO 8601, YYYY-MM-DD).
pub fn parse_input_date(input: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
}

/// Format a date for display and export (DD/MM/YYYY).
pub fn format_display_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_same_day_counts_as_one() {
        assert_eq!(days_between(d("2024-03-15"), d("2024-03-15")), 1);
    }

    #[test]
    fn test_inclusive_range() {
        assert_eq!(days_between(d("2024-01-01"), d("2024-01-31")), 31);
        assert_eq!(days_between(d("2023-01-01"), d("2023-12-31")), 365);
        // Leap year: the count is pure calendar arithmetic
        assert_eq!(days_between(d("2024-01-01"), d("2024-12-31")), 366);
    }

    #[test]
    fn test_reversed_range_clamps_to_zero() {
        assert_eq!(days_between(d("2024-03-15"), d("2024-03-14")), 0);
        assert_eq!(days_between(d("2024-03-15"), d("2020-01-01")), 0);
    }

    #[test]
    fn test_parse_input_date() {
        assert_eq!(parse_input_date("2024-03-15"), Ok(d("2024-03-15")));
        assert_eq!(parse_input_date(" 2024-03-15 "), Ok(d("2024-03-15")));
        assert!(parse_input_date("15/03/2024").is_err());
        assert!(parse_input_date("not a date").is_err());
        assert!(parse_input_date("").is_err());
    }

    #[test]
    fn test_format_display_date() {
        assert_eq!(format_display_date(d("2024-03-05")), "05/03/2024");
    }
}
