//! `/notifications` endpoints.

use crumb_core::entities::Notification;

use crate::error::ApiError;
use crate::gateway::Gateway;

impl Gateway {
    /// `GET /notifications`
    ///
    /// # Errors
    ///
    /// Returns the normalized `ApiError` from the backend.
    pub async fn list_notifications(&self) -> Result<Vec<Notification>, ApiError> {
        self.get("/notifications").await
    }

    /// `PUT /notifications/:id/read`: returns the updated notification.
    ///
    /// # Errors
    ///
    /// Returns the normalized `ApiError` from the backend.
    pub async fn mark_notification_read(&self, id: &str) -> Result<Notification, ApiError> {
        self.put(&format!("/notifications/{id}/read"), None::<&()>)
            .await
    }

    /// `PUT /notifications/read-all`
    ///
    /// # Errors
    ///
    /// Returns the normalized `ApiError` from the backend.
    pub async fn mark_all_notifications_read(&self) -> Result<(), ApiError> {
        // Backend replies 200 with an empty body.
        let response: serde_json::Value = self
            .put("/notifications/read-all", None::<&()>)
            .await
            .or_else(|error| match error {
                // Tolerate an empty 200 body
                ApiError::Decode(_) => Ok(serde_json::Value::Null),
                other => Err(other),
            })?;
        drop(response);
        Ok(())
    }
}
