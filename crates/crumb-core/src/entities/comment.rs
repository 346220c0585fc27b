use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::task::UserRef;

/// A comment on a task. Ordered oldest-first within `Task::comments`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Comment {
    pub id: String,
    pub text: String,
    #[serde(default)]
    pub user: Option<UserRef>,
    pub created_at: DateTime<Utc>,
}
