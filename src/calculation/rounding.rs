//! Rounding policy for money and hours.
//!
//! Every rounded value in the engine goes through [`round_currency`], so
//! allocations and derived hours share a single policy: two decimal places,
//! midpoints rounded away from zero.

use rust_decimal::{Decimal, RoundingStrategy};

/// Number of decimal places kept for amounts and derived hours.
pub const DECIMAL_PLACES: u32 = 2;

/// Rounds a value to two decimal places, half away from zero.
///
/// The result always carries a scale of exactly two, so `60` comes back as
/// `60.00`.
///
/// # Examples
///
/// ```
/// use split_engine::calculation::round_currency;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(round_currency(Decimal::from_str("0.125").unwrap()).to_string(), "0.13");
/// assert_eq!(round_currency(Decimal::from_str("-0.125").unwrap()).to_string(), "-0.13");
/// assert_eq!(round_currency(Decimal::new(60, 0)).to_string(), "60.00");
/// ```
pub fn round_currency(value: Decimal) -> Decimal {
    let mut rounded =
        value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(DECIMAL_PLACES);
    rounded
}
