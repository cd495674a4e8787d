//! Time-of-day to hours conversion.
//!
//! This module provides [`hours_between`], used when a member's hours are
//! entered as a start and end time instead of being typed.

use chrono::NaiveTime;
use rust_decimal::Decimal;

use super::round_currency;

const SECONDS_PER_DAY: i64 = 24 * 60 * 60;

/// Returns the hours elapsed from `start` to `end`.
///
/// An `end` earlier than `start` is read as the next day, so the interval
/// crosses midnight instead of being rejected. Elapsed time is counted in
/// whole minutes (partial minutes are dropped), divided by 60 and rounded
/// to two decimal places.
///
/// Equal start and end times yield zero hours, not 24.
///
/// # Examples
///
/// ```
/// use split_engine::calculation::hours_between;
/// use chrono::NaiveTime;
/// use rust_decimal::Decimal;
///
/// let t = |h, m| NaiveTime::from_hms_opt(h, m, 0).unwrap();
///
/// assert_eq!(hours_between(t(9, 0), t(17, 0)), Decimal::new(8, 0));
/// assert_eq!(hours_between(t(23, 0), t(1, 0)), Decimal::new(2, 0));
/// assert_eq!(hours_between(t(10, 0), t(10, 0)), Decimal::ZERO);
/// ```
pub fn hours_between(start: NaiveTime, end: NaiveTime) -> Decimal {
    let mut seconds = end.signed_duration_since(start).num_seconds();
    if end < start {
        seconds += SECONDS_PER_DAY;
    }

    let minutes = seconds / 60;
    if minutes <= 0 {
        return round_currency(Decimal::ZERO);
    }

    round_currency(Decimal::from(minutes) / Decimal::from(60))
}
