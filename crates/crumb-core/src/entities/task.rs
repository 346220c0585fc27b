use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::Comment;
use crate::enums::{TaskPriority, TaskStatus};
use crate::errors::CoreError;

/// Embedded reference to the user a task is assigned to.
///
/// The backend denormalizes the assignee into task payloads rather than
/// returning a bare id.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct UserRef {
    pub id: String,
    pub name: String,
}

/// Embedded reference to the project a task belongs to.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TaskRef {
    pub id: String,
    pub name: String,
}

/// A bakery work item: an order to fulfil, a batch to bake, a delivery to run.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Task {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    #[serde(default)]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub assigned_to: Option<UserRef>,
    #[serde(default)]
    pub project: Option<TaskRef>,
    #[serde(default)]
    pub comments: Vec<Comment>,
    #[serde(default)]
    pub reward_points: i64,
    #[serde(default)]
    pub current_streak: i64,
    /// Set by the backend when the task was completed on or before its due date.
    #[serde(default)]
    pub is_on_time: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Check a status change against the state machine before sending it,
    /// so the backend's refusal can be reported without a round trip.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidTransition` when the current status does
    /// not allow `to`.
    pub fn validate_transition(&self, to: TaskStatus) -> Result<(), CoreError> {
        if self.status.can_transition_to(to) {
            Ok(())
        } else {
            Err(CoreError::InvalidTransition {
                id: self.id.clone(),
                from: self.status,
                to,
            })
        }
    }
}

/// Fields for creating a task via `POST /tasks`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TaskDraft {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub priority: TaskPriority,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,
}

/// Partial update for `PUT /tasks/:id`. `None` fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TaskPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<TaskPriority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,
}
