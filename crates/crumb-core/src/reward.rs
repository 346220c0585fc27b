//! Reward computation for task completion.
//!
//! The backend is the source of truth: it computes `RewardInfo` when a task
//! transitions to completed and returns it in the status-update envelope.
//! [`RewardInfo::preview`] reproduces the same rules locally so the client can
//! show the expected outcome before the round-trip confirms it.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Points awarded for completing a task on or before its due date.
pub const ON_TIME_POINTS: i64 = 10;

/// Outcome of a task completion, as computed by the backend at
/// status-transition time. Ephemeral: merged transiently into view state,
/// never persisted client-side.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct RewardInfo {
    pub points_earned: i64,
    pub is_late: bool,
    pub current_streak: i64,
}

impl RewardInfo {
    /// Local preview of the reward a completion would earn, before the backend
    /// confirms. On-time completion earns [`ON_TIME_POINTS`] and extends the
    /// streak; late completion earns nothing and resets it. A task with no due
    /// date counts as late; there is no deadline to beat.
    #[must_use]
    pub fn preview(
        due_date: Option<DateTime<Utc>>,
        now: DateTime<Utc>,
        current_streak: i64,
    ) -> Self {
        let on_time = due_date.is_some_and(|due| now <= due);
        if on_time {
            Self {
                points_earned: ON_TIME_POINTS,
                is_late: false,
                current_streak: current_streak + 1,
            }
        } else {
            Self {
                points_earned: 0,
                is_late: true,
                current_streak: 0,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    use super::*;

    fn due() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 10, 0, 0, 0).unwrap()
    }

    #[test]
    fn on_time_completion_earns_points_and_extends_streak() {
        let now = Utc.with_ymd_and_hms(2024, 1, 9, 12, 0, 0).unwrap();
        let reward = RewardInfo::preview(Some(due()), now, 3);
        assert_eq!(reward.points_earned, ON_TIME_POINTS);
        assert!(!reward.is_late);
        assert_eq!(reward.current_streak, 4);
    }

    #[test]
    fn completion_exactly_at_due_date_is_on_time() {
        let reward = RewardInfo::preview(Some(due()), due(), 0);
        assert!(!reward.is_late);
        assert_eq!(reward.points_earned, ON_TIME_POINTS);
    }

    #[test]
    fn late_completion_earns_nothing_and_resets_streak() {
        let now = Utc.with_ymd_and_hms(2024, 1, 11, 0, 0, 0).unwrap();
        let reward = RewardInfo::preview(Some(due()), now, 7);
        assert_eq!(reward.points_earned, 0);
        assert!(reward.is_late);
        assert_eq!(reward.current_streak, 0);
    }

    #[test]
    fn missing_due_date_counts_as_late() {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let reward = RewardInfo::preview(None, now, 2);
        assert!(reward.is_late);
        assert_eq!(reward.points_earned, 0);
    }
}
