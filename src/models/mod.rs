//! Core data models for the split engine.
//!
//! This module contains the domain models shared by the allocation logic,
//! the roster manager, and the HTTP boundary.

mod member;
mod snapshot;
mod time_range;

pub use member::{HoursEntry, Member, MemberId, MemberPatch};
pub use snapshot::RosterSnapshot;
pub use time_range::TimeRange;
