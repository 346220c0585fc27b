use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::UserRole;

/// A CRM user.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    #[serde(default)]
    pub reward_points: i64,
    #[serde(default)]
    pub current_streak: i64,
    pub created_at: DateTime<Utc>,
}

/// Aggregate reward standing returned by `GET /users/rewards`.
///
/// Backend-owned; the client refreshes this on a poll interval and never
/// computes it locally.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct UserRewards {
    pub total_points: i64,
    pub current_streak: i64,
    #[serde(default)]
    pub last_completed_at: Option<DateTime<Utc>>,
}
