use super::{BasisPoints, Cents};

/// Fixed year length for the simple-interest formula. The domain deliberately
/// uses a flat 365-day year with no leap-year adjustment.
pub const DAYS_PER_YEAR: i64 = 365;

const BPS_PER_UNIT: i64 = 10_000;

/// Simple interest on `principal` at `rate` per annum over `days` days:
///
///   principal * rate/10000 * days/365
///
/// Computed exactly in integer arithmetic and rounded to whole cents,
/// half away from zero. All inputs must be non-negative.
pub fn simple_interest(principal: Cents, rate: BasisPoints, days: i64) -> Cents {
    assert!(
        principal >= 0 && rate >= 0 && days >= 0,
        "simple_interest inputs must be non-negative"
    );

    let numerator = principal as i128 * rate as i128 * days as i128;
    let denominator = (BPS_PER_UNIT * DAYS_PER_YEAR) as i128;
    ((numerator + denominator / 2) / denominator) as Cents
}
