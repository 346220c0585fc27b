//! Backend access traits consumed by the slices.
//!
//! Defined here (on the consumer side) so slices can be driven by in-memory
//! fakes in tests. [`crumb_client::Gateway`] implements all of them by
//! delegating to its typed endpoint wrappers.

use crumb_client::{ApiError, Gateway};
use crumb_core::entities::{Notification, Project, Task, TaskDraft, TaskPatch, User, UserRewards};
use crumb_core::enums::TaskStatus;
use crumb_core::responses::TaskStatusUpdate;

#[allow(async_fn_in_trait)]
pub trait TasksApi {
    async fn list_tasks(&self) -> Result<Vec<Task>, ApiError>;
    async fn my_tasks(&self) -> Result<Vec<Task>, ApiError>;
    async fn task(&self, id: &str) -> Result<Task, ApiError>;
    async fn create_task(&self, draft: &TaskDraft) -> Result<Task, ApiError>;
    async fn update_task(&self, id: &str, patch: &TaskPatch) -> Result<Task, ApiError>;
    async fn delete_task(&self, id: &str) -> Result<(), ApiError>;
    async fn update_task_status(
        &self,
        id: &str,
        status: TaskStatus,
    ) -> Result<TaskStatusUpdate, ApiError>;
    async fn add_comment(&self, id: &str, text: &str) -> Result<Task, ApiError>;
}

#[allow(async_fn_in_trait)]
pub trait ProjectsApi {
    async fn list_projects(&self) -> Result<Vec<Project>, ApiError>;
    async fn my_projects(&self) -> Result<Vec<Project>, ApiError>;
}

#[allow(async_fn_in_trait)]
pub trait UsersApi {
    async fn list_users(&self) -> Result<Vec<User>, ApiError>;
    async fn user(&self, id: &str) -> Result<User, ApiError>;
    async fn user_rewards(&self) -> Result<UserRewards, ApiError>;
}

#[allow(async_fn_in_trait)]
pub trait NotificationsApi {
    async fn list_notifications(&self) -> Result<Vec<Notification>, ApiError>;
    async fn mark_notification_read(&self, id: &str) -> Result<Notification, ApiError>;
    async fn mark_all_notifications_read(&self) -> Result<(), ApiError>;
}

impl TasksApi for Gateway {
    async fn list_tasks(&self) -> Result<Vec<Task>, ApiError> {
        Self::list_tasks(self).await
    }
    async fn my_tasks(&self) -> Result<Vec<Task>, ApiError> {
        Self::my_tasks(self).await
    }
    async fn task(&self, id: &str) -> Result<Task, ApiError> {
        Self::task(self, id).await
    }
    async fn create_task(&self, draft: &TaskDraft) -> Result<Task, ApiError> {
        Self::create_task(self, draft).await
    }
    async fn update_task(&self, id: &str, patch: &TaskPatch) -> Result<Task, ApiError> {
        Self::update_task(self, id, patch).await
    }
    async fn delete_task(&self, id: &str) -> Result<(), ApiError> {
        Self::delete_task(self, id).await
    }
    async fn update_task_status(
        &self,
        id: &str,
        status: TaskStatus,
    ) -> Result<TaskStatusUpdate, ApiError> {
        Self::update_task_status(self, id, status).await
    }
    async fn add_comment(&self, id: &str, text: &str) -> Result<Task, ApiError> {
        Self::add_comment(self, id, text).await
    }
}

impl ProjectsApi for Gateway {
    async fn list_projects(&self) -> Result<Vec<Project>, ApiError> {
        Self::list_projects(self).await
    }
    async fn my_projects(&self) -> Result<Vec<Project>, ApiError> {
        Self::my_projects(self).await
    }
}

impl UsersApi for Gateway {
    async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        Self::list_users(self).await
    }
    async fn user(&self, id: &str) -> Result<User, ApiError> {
        Self::user(self, id).await
    }
    async fn user_rewards(&self) -> Result<UserRewards, ApiError> {
        Self::user_rewards(self).await
    }
}

impl NotificationsApi for Gateway {
    async fn list_notifications(&self) -> Result<Vec<Notification>, ApiError> {
        Self::list_notifications(self).await
    }
    async fn mark_notification_read(&self, id: &str) -> Result<Notification, ApiError> {
        Self::mark_notification_read(self, id).await
    }
    async fn mark_all_notifications_read(&self) -> Result<(), ApiError> {
        Self::mark_all_notifications_read(self).await
    }
}
