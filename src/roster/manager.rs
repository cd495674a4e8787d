//! Roster management.
//!
//! This module provides the [`RosterManager`], which owns the member list
//! and the total for one session and is the only way to change either.

use rust_decimal::Decimal;
use tracing::{debug, info, warn};

use crate::calculation::{allocate, total_hours};
use crate::config::SessionConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::{Member, MemberId, MemberPatch, RosterSnapshot};

/// Number of empty members a new session starts with.
pub const DEFAULT_MEMBER_COUNT: usize = 5;

/// Largest roster a session can hold. Larger sizes are clamped to this.
pub const MEMBER_COUNT_LIMIT: usize = 10_000;

/// Owns the roster and the total for a single session.
///
/// Every mutating method finishes by recomputing all members' amounts, so
/// once a call returns the amounts always match the current hours and total.
/// Mutations build the new member list and allocate it before anything is
/// stored; if any step panics the roster keeps its previous state.
/// Reads hand out borrows or owned snapshots; members cannot be changed from
/// outside except through [`set_total`](Self::set_total),
/// [`resize`](Self::resize) and [`patch_member`](Self::patch_member).
///
/// # Example
///
/// ```
/// use split_engine::models::MemberPatch;
/// use split_engine::roster::RosterManager;
/// use rust_decimal::Decimal;
///
/// let mut roster = RosterManager::new(2);
/// let ids: Vec<_> = roster.members().iter().map(|m| m.id).collect();
///
/// roster.patch_member(ids[0], MemberPatch::direct_hours(Decimal::from(1))).unwrap();
/// roster.patch_member(ids[1], MemberPatch::direct_hours(Decimal::from(3))).unwrap();
/// roster.set_total(Some(Decimal::from(100)));
///
/// let snapshot = roster.snapshot();
/// assert_eq!(snapshot.members[0].amount, Decimal::from(25));
/// assert_eq!(snapshot.members[1].amount, Decimal::from(75));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterManager {
    members: Vec<Member>,
    total: Decimal,
}

impl RosterManager {
    /// Creates a session with `initial_count` empty members and a zero total.
    ///
    /// Counts above [`MEMBER_COUNT_LIMIT`] are clamped to it.
    pub fn new(initial_count: usize) -> Self {
        let members: Vec<Member> = (0..initial_count.min(MEMBER_COUNT_LIMIT))
            .map(|_| Member::new())
            .collect();
        Self {
            members: allocate(&members, Decimal::ZERO),
            total: Decimal::ZERO,
        }
    }

    /// Creates a session sized by the configured default member count.
    pub fn from_config(config: &SessionConfig) -> Self {
        Self::new(config.default_member_count)
    }

    /// Returns the current total.
    pub fn total(&self) -> Decimal {
        self.total
    }

    /// Returns the members in roster order.
    pub fn members(&self) -> &[Member] {
        &self.members
    }

    /// Returns the number of members.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns true if the roster has no members.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Looks up a member by id.
    pub fn member(&self, id: MemberId) -> Option<&Member> {
        self.members.iter().find(|m| m.id == id)
    }

    /// Returns an owned copy of the current state.
    pub fn snapshot(&self) -> RosterSnapshot {
        RosterSnapshot {
            total: self.total,
            total_hours: total_hours(&self.members),
            allocated_total: self
                .members
                .iter()
                .fold(Decimal::ZERO, |sum, m| sum.saturating_add(m.amount)),
            members: self.members.clone(),
        }
    }

    /// Sets the total and recomputes every member's amount against it.
    ///
    /// `None` is treated as zero. The sign is not checked.
    pub fn set_total(&mut self, value: Option<Decimal>) {
        let total = value.unwrap_or(Decimal::ZERO);
        info!(total = %total, "Total updated");

        let allocated = allocate(&self.members, total);
        self.members = allocated;
        self.total = total;
    }

    /// Grows or shrinks the roster to `count` members.
    ///
    /// Growing appends empty members with fresh ids. Shrinking drops members
    /// from the tail; their data is gone for good, and growing again adds new
    /// empty members rather than restoring them. A negative `count` is
    /// ignored and leaves the roster untouched. Counts above
    /// [`MEMBER_COUNT_LIMIT`] are clamped to it.
    pub fn resize(&mut self, count: i64) {
        let Ok(requested) = usize::try_from(count) else {
            debug!(requested = count, "Ignoring negative member count");
            return;
        };

        let count = requested.min(MEMBER_COUNT_LIMIT);
        if count < requested {
            warn!(requested, limit = MEMBER_COUNT_LIMIT, "Member count clamped");
        }

        let previous = self.members.len();
        let mut members = self.members.clone();
        if count > previous {
            members.extend((previous..count).map(|_| Member::new()));
        } else {
            members.truncate(count);
        }

        info!(from = previous, to = count, "Roster resized");
        self.commit(members);
    }

    /// Applies a patch to the member with the given id and recomputes.
    ///
    /// Returns the updated member. If no member has that id the roster is
    /// left unchanged and [`EngineError::MemberNotFound`] is returned.
    pub fn patch_member(&mut self, id: MemberId, patch: MemberPatch) -> EngineResult<&Member> {
        let index = self
            .members
            .iter()
            .position(|m| m.id == id)
            .ok_or(EngineError::MemberNotFound { id })?;

        let mut members = self.members.clone();
        members[index].apply(patch);
        info!(member_id = %id, hours = ?members[index].hours, "Member updated");

        self.commit(members);
        self.members
            .get(index)
            .ok_or(EngineError::MemberNotFound { id })
    }

    /// Allocates the current total over a staged member list, then stores it.
    fn commit(&mut self, staged: Vec<Member>) {
        self.members = allocate(&staged, self.total);
    }
}

impl Default for RosterManager {
    fn default() -> Self {
        Self::new(DEFAULT_MEMBER_COUNT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{HoursEntry, TimeRange};
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn ids(roster: &RosterManager) -> Vec<MemberId> {
        roster.members().iter().map(|m| m.id).collect()
    }

    fn amounts(roster: &RosterManager) -> Vec<Decimal> {
        roster.members().iter().map(|m| m.amount).collect()
    }

    fn roster_with_hours(hours: &[&str]) -> RosterManager {
        let mut roster = RosterManager::new(hours.len());
        for (id, h) in ids(&roster).into_iter().zip(hours) {
            roster
                .patch_member(id, MemberPatch::direct_hours(dec(h)))
                .unwrap();
        }
        roster
    }

    #[test]
    fn test_default_has_five_empty_members() {
        let roster = RosterManager::default();
        assert_eq!(roster.len(), DEFAULT_MEMBER_COUNT);
        assert_eq!(roster.total(), Decimal::ZERO);
        assert!(roster.members().iter().all(|m| m.name.is_empty()));
        assert!(roster.members().iter().all(|m| m.hours.is_none()));
    }

    #[test]
    fn test_from_config_uses_default_member_count() {
        let config = SessionConfig {
            default_member_count: 3,
            max_member_count: 10,
        };
        assert_eq!(RosterManager::from_config(&config).len(), 3);
    }

    #[test]
    fn test_new_members_have_unique_ids() {
        let roster = RosterManager::new(50);
        let mut seen = ids(&roster);
        seen.sort_by_key(|id| id.to_string());
        seen.dedup();
        assert_eq!(seen.len(), 50);
    }

    /// RM-001: end-to-end split
    #[test]
    fn test_end_to_end_split() {
        let mut roster = roster_with_hours(&["2", "3", "5"]);
        roster.set_total(Some(dec("300")));

        assert_eq!(amounts(&roster), vec![dec("60"), dec("90"), dec("150")]);
        let snapshot = roster.snapshot();
        assert_eq!(snapshot.total_hours, dec("10"));
        assert_eq!(snapshot.allocated_total, dec("300"));
        assert_eq!(snapshot.rounding_difference(), Decimal::ZERO);
    }

    /// RM-002: setting the total recomputes with the new value
    #[test]
    fn test_set_total_recomputes_immediately() {
        let mut roster = roster_with_hours(&["1", "1"]);
        roster.set_total(Some(dec("10")));
        assert_eq!(amounts(&roster), vec![dec("5"), dec("5")]);

        roster.set_total(Some(dec("30")));
        assert_eq!(amounts(&roster), vec![dec("15"), dec("15")]);
    }

    /// RM-003: clearing the total
    #[test]
    fn test_set_total_none_clamps_to_zero() {
        let mut roster = roster_with_hours(&["1", "1"]);
        roster.set_total(Some(dec("10")));
        roster.set_total(None);

        assert_eq!(roster.total(), Decimal::ZERO);
        assert_eq!(amounts(&roster), vec![dec("0"), dec("0")]);
    }

    /// RM-004: growing appends empty members after existing ones
    #[test]
    fn test_resize_grow_appends_at_tail() {
        let mut roster = roster_with_hours(&["2", "2"]);
        roster.set_total(Some(dec("40")));
        let before = ids(&roster);

        roster.resize(4);

        let after = ids(&roster);
        assert_eq!(after.len(), 4);
        assert_eq!(&after[..2], &before[..]);
        assert!(roster.members()[2].hours.is_none());
        assert!(roster.members()[3].name.is_empty());
        assert_eq!(
            amounts(&roster),
            vec![dec("20"), dec("20"), dec("0"), dec("0")]
        );
    }

    /// RM-005: shrinking drops the tail and reallocates
    #[test]
    fn test_resize_shrink_truncates_tail() {
        let mut roster = roster_with_hours(&["1", "1", "2"]);
        roster.set_total(Some(dec("40")));
        let before = ids(&roster);

        roster.resize(2);

        assert_eq!(ids(&roster), before[..2].to_vec());
        assert_eq!(amounts(&roster), vec![dec("20"), dec("20")]);
    }

    /// RM-006: negative counts are ignored
    #[test]
    fn test_resize_negative_is_noop() {
        let mut roster = roster_with_hours(&["1", "2"]);
        roster.set_total(Some(dec("9")));
        let before = roster.clone();

        roster.resize(-1);

        assert_eq!(roster, before);
    }

    /// RM-007: resizing to the same count twice is stable
    #[test]
    fn test_resize_is_idempotent() {
        let mut roster = RosterManager::new(2);
        roster.resize(6);
        let first = roster.snapshot();

        roster.resize(6);

        assert_eq!(roster.snapshot(), first);
    }

    /// RM-008: truncation is destructive
    #[test]
    fn test_regrow_does_not_restore_truncated_members() {
        let mut roster = roster_with_hours(&["1", "2", "3", "4"]);
        let original = ids(&roster);

        roster.resize(2);
        roster.resize(4);

        let regrown = ids(&roster);
        assert_eq!(&regrown[..2], &original[..2]);
        assert!(!regrown[2..].iter().any(|id| original.contains(id)));
        assert!(roster.members()[2..].iter().all(|m| m.hours.is_none()));
    }

    #[test]
    fn test_resize_to_zero() {
        let mut roster = roster_with_hours(&["1"]);
        roster.set_total(Some(dec("10")));

        roster.resize(0);

        assert!(roster.is_empty());
        assert_eq!(roster.snapshot().allocated_total, Decimal::ZERO);
    }

    /// RM-009: direct hours clear a stored time range
    #[test]
    fn test_direct_hours_clear_time_range() {
        let mut roster = RosterManager::new(1);
        let id = ids(&roster)[0];
        let range = TimeRange::parse("09:00", "17:00").unwrap();

        roster
            .patch_member(id, MemberPatch::time_range(range))
            .unwrap();
        assert_eq!(roster.member(id).unwrap().time_range, Some(range));
        assert_eq!(roster.member(id).unwrap().hours, Some(dec("8")));

        roster
            .patch_member(id, MemberPatch::direct_hours(dec("5")))
            .unwrap();
        let member = roster.member(id).unwrap();
        assert_eq!(member.time_range, None);
        assert_eq!(member.hours, Some(dec("5")));
    }

    /// RM-010: range-derived hours feed the allocation
    #[test]
    fn test_range_hours_are_allocated() {
        let mut roster = RosterManager::new(2);
        let ids = ids(&roster);
        roster.set_total(Some(dec("100")));

        roster
            .patch_member(
                ids[0],
                MemberPatch::time_range(TimeRange::parse("22:00", "01:00").unwrap()),
            )
            .unwrap();
        roster
            .patch_member(ids[1], MemberPatch::direct_hours(dec("1")))
            .unwrap();

        assert_eq!(amounts(&roster), vec![dec("75"), dec("25")]);
    }

    /// RM-011: unknown ids are reported and change nothing
    #[test]
    fn test_patch_unknown_member_is_error() {
        let mut roster = roster_with_hours(&["1"]);
        let before = roster.clone();
        let stranger = MemberId::new();

        let err = roster
            .patch_member(stranger, MemberPatch::name("ghost"))
            .unwrap_err();

        assert!(matches!(err, EngineError::MemberNotFound { id } if id == stranger));
        assert_eq!(roster, before);
    }

    #[test]
    fn test_patch_name_only_keeps_amounts() {
        let mut roster = roster_with_hours(&["1", "3"]);
        roster.set_total(Some(dec("8")));
        let id = ids(&roster)[1];

        let member = roster.patch_member(id, MemberPatch::name("Zoe")).unwrap();

        assert_eq!(member.name, "Zoe");
        assert_eq!(member.amount, dec("6"));
    }

    #[test]
    fn test_patch_returns_recomputed_member() {
        let mut roster = roster_with_hours(&["1", "1"]);
        roster.set_total(Some(dec("10")));
        let id = ids(&roster)[0];

        let member = roster
            .patch_member(id, MemberPatch::default().with_hours(HoursEntry::Direct(dec("3"))))
            .unwrap();

        assert_eq!(member.amount, dec("7.5"));
    }

    #[test]
    fn test_patch_keeps_order() {
        let mut roster = roster_with_hours(&["1", "1", "1"]);
        let before = ids(&roster);

        roster
            .patch_member(before[1], MemberPatch::direct_hours(dec("9")))
            .unwrap();

        assert_eq!(ids(&roster), before);
    }

    #[test]
    fn test_snapshot_is_detached() {
        let mut roster = roster_with_hours(&["1"]);
        let mut snapshot = roster.snapshot();
        snapshot.members[0].amount = dec("123");
        snapshot.members.clear();

        assert_eq!(roster.len(), 1);
        roster.set_total(Some(dec("1")));
        assert_eq!(roster.members()[0].amount, dec("1"));
    }

    #[test]
    fn test_resize_clamps_to_member_count_limit() {
        let mut roster = RosterManager::new(1);
        let first = ids(&roster)[0];

        roster.resize(i64::MAX);

        assert_eq!(roster.len(), MEMBER_COUNT_LIMIT);
        assert_eq!(ids(&roster)[0], first);
    }

    #[test]
    fn test_new_clamps_to_member_count_limit() {
        assert_eq!(RosterManager::new(usize::MAX).len(), MEMBER_COUNT_LIMIT);
    }

    #[test]
    fn test_max_total_keeps_amounts_in_step() {
        let mut roster = roster_with_hours(&["2", "3"]);
        roster.set_total(Some(dec("100")));

        roster.set_total(Some(Decimal::MAX));

        let snapshot = roster.snapshot();
        assert_eq!(snapshot.total, Decimal::MAX);
        assert_eq!(
            amounts(&roster),
            vec![
                dec("31691265005705735037417580134"),
                dec("47536897508558602556126370201"),
            ]
        );
        assert_eq!(snapshot.allocated_total, Decimal::MAX);
        assert_eq!(snapshot.rounding_difference(), Decimal::ZERO);
    }

    #[test]
    fn test_huge_hours_do_not_overflow() {
        let mut roster = RosterManager::new(2);
        roster.set_total(Some(dec("100")));
        let huge = dec("50000000000000000000000000000");

        for id in ids(&roster) {
            roster
                .patch_member(id, MemberPatch::direct_hours(huge))
                .unwrap();
        }

        assert_eq!(amounts(&roster), vec![dec("50"), dec("50")]);
        assert_eq!(roster.snapshot().total_hours, Decimal::MAX);
    }

    #[test]
    fn test_amounts_never_stale_after_any_mutation() {
        let mut roster = RosterManager::default();
        let id = ids(&roster)[0];

        roster.set_total(Some(dec("50")));
        roster
            .patch_member(id, MemberPatch::direct_hours(dec("2")))
            .unwrap();
        assert_eq!(roster.member(id).unwrap().amount, dec("50"));

        roster.resize(1);
        assert_eq!(roster.members()[0].amount, dec("50"));

        roster
            .patch_member(id, MemberPatch::direct_hours(Decimal::ZERO))
            .unwrap();
        assert_eq!(roster.members()[0].amount, Decimal::ZERO);
    }
}
