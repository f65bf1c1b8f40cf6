use std::fmt;

/// Annual interest rates are kept as integer basis points (hundredths of a
/// percent), mirroring the cents representation used for money.
/// 5.25% = 525 bps.
pub type BasisPoints = i64;

/// Format basis points as a percent string with two fractional digits.
/// Example: 525 -> "5.25", 1000 -> "10.00"
pub fn format_rate(bps: BasisPoints) -> String {
    let sign = if bps < 0 { "-" } else { "" };
    let abs = bps.abs();
    format!("{}{}.{:02}", sign, abs / 100, abs % 100)
}

/// Parse a percent string into basis points.
/// Example: "5" -> 500, "5.2" -> 520, "5.25" -> 525
///
/// More than two fractional digits are truncated, not rounded.
pub fn parse_rate(input: &str) -> Result<BasisPoints, ParseRateError> {
    let input = input.trim().trim_end_matches('%').trim();
    let (negative, digits) = match input.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, input),
    };

    let (whole, fraction) = match digits.split_once('.') {
        Some((w, f)) => (w, f),
        None => (digits, ""),
    };

    if whole.is_empty() && fraction.is_empty() {
        return Err(ParseRateError::InvalidFormat);
    }

    // Only bare digits past this point: a second sign such as "--5" or "+5"
    // must not sneak through i64's own sign handling.
    if !whole.chars().all(|c| c.is_ascii_digit())
        || !fraction.chars().all(|c| c.is_ascii_digit())
    {
        return Err(ParseRateError::InvalidFormat);
    }

    let percent: i64 = if whole.is_empty() {
        0
    } else {
        whole.parse().map_err(|_| ParseRateError::InvalidFormat)?
    };

    let fraction: String = fraction.chars().take(2).collect();
    let hundredths: i64 = match fraction.len() {
        0 => 0,
        1 => {
            10 * fraction
                .parse::<i64>()
                .map_err(|_| ParseRateError::InvalidFormat)?
        }
        _ => fraction.parse().map_err(|_| ParseRateError::InvalidFormat)?,
    };

    let bps = percent
        .checked_mul(100)
        .and_then(|b| b.checked_add(hundredths))
        .ok_or(ParseRateError::InvalidFormat)?;
    Ok(if negative { -bps } else { bps })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseRateError {
    InvalidFormat,
}

impl fmt::Display for ParseRateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseRateError::InvalidFormat => write!(f, "invalid rate format"),
        }
    }
}

impl std::error::Error for ParseRateError {}
