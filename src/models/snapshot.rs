//! Read-only view of a roster.
//!
//! The [`RosterSnapshot`] is what the presentation layer renders after every
//! mutation. It is an owned copy, so nothing done to it can reach back into
//! the roster.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Member, MemberId};

/// The state of a roster at one point in time.
///
/// # Example
///
/// ```
/// use split_engine::roster::RosterManager;
/// use rust_decimal::Decimal;
///
/// let roster = RosterManager::new(3);
/// let snapshot = roster.snapshot();
///
/// assert_eq!(snapshot.members.len(), 3);
/// assert_eq!(snapshot.total, Decimal::ZERO);
/// assert_eq!(snapshot.total_hours, Decimal::ZERO);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterSnapshot {
    /// The amount being split.
    pub total: Decimal,
    /// Sum of all members' hours.
    pub total_hours: Decimal,
    /// Sum of all members' amounts. May differ from `total` by rounding.
    pub allocated_total: Decimal,
    /// Members in roster order.
    pub members: Vec<Member>,
}

impl RosterSnapshot {
    /// Looks up a member by id.
    pub fn member(&self, id: MemberId) -> Option<&Member> {
        self.members.iter().find(|m| m.id == id)
    }

    /// Returns the difference between the total and what was allocated.
    ///
    /// Independent per-member rounding can leave up to one cent per member
    /// unallocated or over-allocated. The remainder is reported, not
    /// redistributed.
    pub fn rounding_difference(&self) -> Decimal {
        if self.total_hours > Decimal::ZERO {
            self.total.saturating_sub(self.allocated_total)
        } else {
            Decimal::ZERO
        }
    }
}
