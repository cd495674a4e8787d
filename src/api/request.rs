//! Request types for the split engine API.
//!
//! This module defines the JSON request bodies for the session endpoints and
//! their conversion into domain types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{HoursEntry, MemberPatch, TimeRange};

/// Request body for `PUT /session/total`.
///
/// A missing or null `total` clears the total to zero.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SetTotalRequest {
    /// The new total.
    #[serde(default)]
    pub total: Option<Decimal>,
}

/// Request body for `PUT /session/members/count`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResizeRequest {
    /// The requested number of members. Negative values are ignored.
    pub count: i64,
}

/// A time-of-day range in a request, as two `HH:MM` strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeRangeRequest {
    /// Start time, `HH:MM`.
    pub start: String,
    /// End time, `HH:MM`.
    pub end: String,
}

/// Request body for `PATCH /session/members/:id`.
///
/// Every field is optional. `hours` and `time_range` are two ways of setting
/// the same value and may not be sent together. To clear typed hours send
/// `"hours": "0"`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PatchMemberRequest {
    /// New display name.
    #[serde(default)]
    pub name: Option<String>,
    /// Hours typed directly.
    #[serde(default)]
    pub hours: Option<Decimal>,
    /// Interval to derive hours from.
    #[serde(default)]
    pub time_range: Option<TimeRangeRequest>,
}

impl TryFrom<TimeRangeRequest> for TimeRange {
    type Error = EngineError;

    fn try_from(req: TimeRangeRequest) -> EngineResult<Self> {
        TimeRange::parse(&req.start, &req.end)
    }
}

impl TryFrom<PatchMemberRequest> for MemberPatch {
    type Error = EngineError;

    fn try_from(req: PatchMemberRequest) -> EngineResult<Self> {
        let hours = match (req.hours, req.time_range) {
            (Some(_), Some(_)) => {
                return Err(EngineError::InvalidPatch {
                    message: "hours and time_range cannot be set together".to_string(),
                });
            }
            (Some(hours), None) => Some(HoursEntry::Direct(hours)),
            (None, Some(range)) => Some(HoursEntry::Range(range.try_into()?)),
            (None, None) => None,
        };

        Ok(MemberPatch {
            name: req.name,
            hours,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_deserialize_set_total_with_string() {
        let req: SetTotalRequest = serde_json::from_str(r#"{"total": "300.50"}"#).unwrap();
        assert_eq!(req.total, Some(dec("300.50")));
    }

    #[test]
    fn test_deserialize_set_total_null_and_missing() {
        let null: SetTotalRequest = serde_json::from_str(r#"{"total": null}"#).unwrap();
        let missing: SetTotalRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(null.total, None);
        assert_eq!(missing.total, None);
    }

    #[test]
    fn test_deserialize_resize_negative() {
        let req: ResizeRequest = serde_json::from_str(r#"{"count": -3}"#).unwrap();
        assert_eq!(req.count, -3);
    }

    #[test]
    fn test_patch_with_name_only() {
        let req: PatchMemberRequest = serde_json::from_str(r#"{"name": "Ann"}"#).unwrap();
        let patch = MemberPatch::try_from(req).unwrap();
        assert_eq!(patch, MemberPatch::name("Ann"));
    }

    #[test]
    fn test_patch_with_direct_hours() {
        let req: PatchMemberRequest = serde_json::from_str(r#"{"hours": "4.5"}"#).unwrap();
        let patch = MemberPatch::try_from(req).unwrap();
        assert_eq!(patch.hours, Some(HoursEntry::Direct(dec("4.5"))));
    }

    #[test]
    fn test_patch_with_time_range() {
        let req: PatchMemberRequest =
            serde_json::from_str(r#"{"time_range": {"start": "22:00", "end": "02:00"}}"#)
                .unwrap();
        let patch = MemberPatch::try_from(req).unwrap();

        match patch.hours {
            Some(HoursEntry::Range(range)) => {
                assert_eq!(range.label(), "22:00–02:00");
                assert_eq!(range.hours(), dec("4"));
            }
            other => panic!("expected range entry, got {:?}", other),
        }
    }

    #[test]
    fn test_patch_with_both_sources_is_rejected() {
        let req = PatchMemberRequest {
            name: None,
            hours: Some(dec("1")),
            time_range: Some(TimeRangeRequest {
                start: "09:00".to_string(),
                end: "10:00".to_string(),
            }),
        };

        assert!(matches!(
            MemberPatch::try_from(req),
            Err(EngineError::InvalidPatch { .. })
        ));
    }

    #[test]
    fn test_patch_with_bad_time_is_rejected() {
        let req = PatchMemberRequest {
            time_range: Some(TimeRangeRequest {
                start: "nine".to_string(),
                end: "10:00".to_string(),
            }),
            ..Default::default()
        };

        assert!(matches!(
            MemberPatch::try_from(req),
            Err(EngineError::InvalidTime { .. })
        ));
    }

    #[test]
    fn test_empty_patch() {
        let req: PatchMemberRequest = serde_json::from_str("{}").unwrap();
        assert!(MemberPatch::try_from(req).unwrap().is_empty());
    }
}
