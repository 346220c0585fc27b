use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::NotificationKind;

/// A user-facing notification.
///
/// Locally inserted (optimistic) notifications carry a `tmp-` prefixed id until
/// the backend confirms them; see `Notification::is_local`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Notification {
    pub id: String,
    pub kind: NotificationKind,
    pub message: String,
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    /// Prefix used for client-assigned ids on optimistic inserts.
    pub const LOCAL_ID_PREFIX: &'static str = "tmp-";

    /// Whether this notification was inserted locally and is still awaiting
    /// backend confirmation.
    #[must_use]
    pub fn is_local(&self) -> bool {
        self.id.starts_with(Self::LOCAL_ID_PREFIX)
    }
}
