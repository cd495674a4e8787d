//! Member model and related types.
//!
//! This module defines the [`Member`] record held on a roster, its opaque
//! [`MemberId`], and the [`MemberPatch`] used to edit it.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::TimeRange;

/// Opaque, stable identifier for a roster member.
///
/// Ids are generated once when a member is created and never change or get
/// reused, so they are safe to use as render keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemberId(Uuid);

impl MemberId {
    /// Generates a fresh random id.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for MemberId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for MemberId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl FromStr for MemberId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One participant in the split.
///
/// `hours` is either typed directly or derived from `time_range`; a member
/// never carries a range that disagrees with its hours. `amount` is owned by
/// the allocation step and is overwritten on every recomputation.
///
/// # Example
///
/// ```
/// use split_engine::models::Member;
/// use rust_decimal::Decimal;
///
/// let member = Member::new();
/// assert!(member.name.is_empty());
/// assert_eq!(member.hours, None);
/// assert_eq!(member.hours_or_zero(), Decimal::ZERO);
/// assert_eq!(member.amount, Decimal::ZERO);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    /// Unique identifier, fixed for the member's lifetime.
    pub id: MemberId,
    /// Display label. May be empty and need not be unique.
    pub name: String,
    /// Hours contributed, or `None` if not yet entered.
    pub hours: Option<Decimal>,
    /// The time-of-day interval the hours were derived from, if any.
    pub time_range: Option<TimeRange>,
    /// Computed share of the total.
    pub amount: Decimal,
}

impl Member {
    /// Creates an empty member with a freshly generated id.
    pub fn new() -> Self {
        Self {
            id: MemberId::new(),
            name: String::new(),
            hours: None,
            time_range: None,
            amount: Decimal::ZERO,
        }
    }

    /// Returns the member's hours, treating "not entered" as zero.
    pub fn hours_or_zero(&self) -> Decimal {
        self.hours.unwrap_or(Decimal::ZERO)
    }

    /// Merges a patch into this member.
    ///
    /// The merge is shallow: only the fields present in the patch are
    /// overwritten. Typed hours clear any stored time range; a time range
    /// replaces the hours with the range's elapsed time. Typed hours below
    /// zero are clamped to zero.
    pub fn apply(&mut self, patch: MemberPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }

        match patch.hours {
            Some(HoursEntry::Direct(hours)) => {
                self.hours = Some(hours.max(Decimal::ZERO));
                self.time_range = None;
            }
            Some(HoursEntry::Range(range)) => {
                self.hours = Some(range.hours());
                self.time_range = Some(range);
            }
            None => {}
        }
    }
}

impl Default for Member {
    fn default() -> Self {
        Self::new()
    }
}

/// How a member's hours are being set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HoursEntry {
    /// Hours typed directly.
    Direct(Decimal),
    /// Hours derived from a time-of-day interval.
    Range(TimeRange),
}

/// A partial update to a [`Member`].
///
/// Fields left as `None` are not touched.
///
/// # Example
///
/// ```
/// use split_engine::models::{HoursEntry, MemberPatch};
/// use rust_decimal::Decimal;
///
/// let patch = MemberPatch::name("Alice").with_hours(HoursEntry::Direct(Decimal::new(5, 0)));
/// assert_eq!(patch.name.as_deref(), Some("Alice"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberPatch {
    /// New display name.
    #[serde(default)]
    pub name: Option<String>,
    /// New hours, typed or range-derived.
    #[serde(default)]
    pub hours: Option<HoursEntry>,
}

impl MemberPatch {
    /// A patch that only renames the member.
    pub fn name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            hours: None,
        }
    }

    /// A patch that only sets typed hours.
    pub fn direct_hours(hours: Decimal) -> Self {
        Self {
            name: None,
            hours: Some(HoursEntry::Direct(hours)),
        }
    }

    /// A patch that only sets hours from a time range.
    pub fn time_range(range: TimeRange) -> Self {
        Self {
            name: None,
            hours: Some(HoursEntry::Range(range)),
        }
    }

    /// Adds an hours entry to this patch.
    pub fn with_hours(mut self, hours: HoursEntry) -> Self {
        self.hours = Some(hours);
        self
    }

    /// Returns true if the patch changes nothing.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.hours.is_none()
    }
}
