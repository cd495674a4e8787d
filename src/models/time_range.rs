//! Time-of-day range model.
//!
//! A [`TimeRange`] records the start and end of a stretch of work as
//! time-of-day values, without dates. Ranges whose end is earlier than their
//! start are read as crossing midnight.

use chrono::NaiveTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::hours_between;
use crate::error::{EngineError, EngineResult};

const TIME_FORMAT: &str = "%H:%M";

/// A start/end pair of time-of-day values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
    /// When the work started.
    pub start: NaiveTime,
    /// When the work ended. May be earlier than `start`.
    pub end: NaiveTime,
}

impl TimeRange {
    /// Creates a range from two time-of-day values.
    pub fn new(start: NaiveTime, end: NaiveTime) -> Self {
        Self { start, end }
    }

    /// Parses a range from two `HH:MM` strings.
    ///
    /// # Examples
    ///
    /// ```
    /// use split_engine::models::TimeRange;
    ///
    /// let range = TimeRange::parse("23:00", "01:00").unwrap();
    /// assert!(range.crosses_midnight());
    ///
    /// assert!(TimeRange::parse("9am", "17:00").is_err());
    /// ```
    pub fn parse(start: &str, end: &str) -> EngineResult<Self> {
        Ok(Self {
            start: parse_time(start)?,
            end: parse_time(end)?,
        })
    }

    /// Returns true if the range wraps past midnight.
    pub fn crosses_midnight(&self) -> bool {
        self.end < self.start
    }

    /// Returns the elapsed hours, rounded to two decimal places.
    pub fn hours(&self) -> Decimal {
        hours_between(self.start, self.end)
    }

    /// Formats the range as `HH:MM–HH:MM`.
    ///
    /// # Examples
    ///
    /// ```
    /// use split_engine::models::TimeRange;
    ///
    /// let range = TimeRange::parse("09:05", "17:30").unwrap();
    /// assert_eq!(range.label(), "09:05–17:30");
    /// ```
    pub fn label(&self) -> String {
        format!(
            "{}–{}",
            self.start.format(TIME_FORMAT),
            self.end.format(TIME_FORMAT)
        )
    }
}

fn parse_time(value: &str) -> EngineResult<NaiveTime> {
    NaiveTime::parse_from_str(value.trim(), TIME_FORMAT).map_err(|e| EngineError::InvalidTime {
        value: value.to_string(),
        message: format!("expected HH:MM ({})", e),
    })
}
