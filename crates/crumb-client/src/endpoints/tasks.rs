//! `/tasks` endpoints.

use serde_json::json;

use crumb_core::entities::{Task, TaskDraft, TaskPatch};
use crumb_core::enums::TaskStatus;
use crumb_core::responses::TaskStatusUpdate;

use crate::error::ApiError;
use crate::gateway::Gateway;

impl Gateway {
    /// `GET /tasks`
    ///
    /// # Errors
    ///
    /// Returns the normalized `ApiError` from the backend.
    pub async fn list_tasks(&self) -> Result<Vec<Task>, ApiError> {
        self.get("/tasks").await
    }

    /// `GET /tasks/mine`: tasks assigned to the authenticated user.
    ///
    /// # Errors
    ///
    /// Returns the normalized `ApiError` from the backend.
    pub async fn my_tasks(&self) -> Result<Vec<Task>, ApiError> {
        self.get("/tasks/mine").await
    }

    /// `GET /tasks/:id`
    ///
    /// # Errors
    ///
    /// A missing task surfaces as `ApiError::Validation` with the backend's
    /// message; the caller decides how to render "not found".
    pub async fn task(&self, id: &str) -> Result<Task, ApiError> {
        self.get(&format!("/tasks/{id}")).await
    }

    /// `POST /tasks`
    ///
    /// # Errors
    ///
    /// Returns the normalized `ApiError` from the backend.
    pub async fn create_task(&self, draft: &TaskDraft) -> Result<Task, ApiError> {
        self.post("/tasks", draft).await
    }

    /// `PUT /tasks/:id`
    ///
    /// # Errors
    ///
    /// Returns the normalized `ApiError` from the backend.
    pub async fn update_task(&self, id: &str, patch: &TaskPatch) -> Result<Task, ApiError> {
        self.put(&format!("/tasks/{id}"), Some(patch)).await
    }

    /// `DELETE /tasks/:id`
    ///
    /// # Errors
    ///
    /// Returns the normalized `ApiError` from the backend.
    pub async fn delete_task(&self, id: &str) -> Result<(), ApiError> {
        self.delete(&format!("/tasks/{id}")).await
    }

    /// `PUT /tasks/:id/status`: returns the updated task plus reward info when
    /// the transition completed the task.
    ///
    /// # Errors
    ///
    /// Returns the normalized `ApiError` from the backend.
    pub async fn update_task_status(
        &self,
        id: &str,
        status: TaskStatus,
    ) -> Result<TaskStatusUpdate, ApiError> {
        self.put(&format!("/tasks/{id}/status"), Some(&json!({"status": status})))
            .await
    }

    /// `POST /tasks/:id/comments`: returns the task with the comment appended.
    ///
    /// # Errors
    ///
    /// Returns the normalized `ApiError` from the backend.
    pub async fn add_comment(&self, id: &str, text: &str) -> Result<Task, ApiError> {
        self.post(&format!("/tasks/{id}/comments"), &json!({"text": text}))
            .await
    }
}
