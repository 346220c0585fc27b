//! Response envelopes returned by the backend API.
//!
//! Most endpoints return an entity or a collection directly; the envelopes here
//! cover the endpoints that wrap their payload.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{Task, User};
use crate::reward::RewardInfo;

/// Response from `POST /auth/login`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct LoginResponse {
    pub token: String,
    pub user: User,
}

/// Response from `PUT /tasks/:id/status`.
///
/// `reward_info` is present only when the transition completed the task.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct TaskStatusUpdate {
    pub task: Task,
    #[serde(default)]
    pub reward_info: Option<RewardInfo>,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn status_update_envelope_without_reward() {
        let json = r#"{
            "task": {
                "id": "t1",
                "title": "Prep croissant dough",
                "status": "on_hold",
                "priority": "medium",
                "created_at": "2024-01-05T08:00:00Z",
                "updated_at": "2024-01-06T08:00:00Z"
            }
        }"#;
        let envelope: TaskStatusUpdate = serde_json::from_str(json).expect("deserialize");
        assert_eq!(envelope.task.id, "t1");
        assert!(envelope.reward_info.is_none());
    }

    #[test]
    fn status_update_envelope_with_reward() {
        let json = r#"{
            "task": {
                "id": "t1",
                "title": "Prep croissant dough",
                "status": "completed",
                "priority": "medium",
                "created_at": "2024-01-05T08:00:00Z",
                "updated_at": "2024-01-06T08:00:00Z"
            },
            "reward_info": {"points_earned": 10, "is_late": false, "current_streak": 2}
        }"#;
        let envelope: TaskStatusUpdate = serde_json::from_str(json).expect("deserialize");
        let reward = envelope.reward_info.expect("reward present");
        assert_eq!(reward.points_earned, 10);
        assert_eq!(reward.current_streak, 2);
    }
}
