//! Calculation logic for the split engine.
//!
//! This module contains the pure functions behind a split: proportional
//! allocation of the total by hours, conversion of a time-of-day range into
//! hours, and the shared two-decimal rounding policy.

mod allocation;
mod rounding;
mod time_conversion;

pub use allocation::{allocate, total_hours};
pub use rounding::{DECIMAL_PLACES, round_currency};
pub use time_conversion::hours_between;
