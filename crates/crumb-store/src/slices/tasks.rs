//! Task slice: collection cache, single-task cache, and the reward preview.

use chrono::{DateTime, Utc};

use crumb_client::ApiError;
use crumb_core::entities::{Task, TaskDraft, TaskPatch};
use crumb_core::enums::TaskStatus;
use crumb_core::responses::TaskStatusUpdate;
use crumb_core::reward::RewardInfo;

use crate::api::TasksApi;
use crate::lifecycle::RequestState;

/// State for the tasks resource family.
///
/// `tasks` and `current` are independently refreshable caches; they are not
/// guaranteed consistent with each other at any instant.
#[derive(Debug)]
pub struct TaskSlice<G> {
    gateway: G,
    pub tasks: RequestState<Vec<Task>>,
    pub current: RequestState<Task>,
    last_reward: Option<RewardInfo>,
}

impl<G> TaskSlice<G> {
    pub fn new(gateway: G) -> Self {
        Self {
            gateway,
            tasks: RequestState::new(),
            current: RequestState::new(),
            last_reward: None,
        }
    }

    /// Reward info from the most recent completion, merged transiently.
    #[must_use]
    pub const fn last_reward(&self) -> Option<&RewardInfo> {
        self.last_reward.as_ref()
    }

    /// Local preview of what completing the current task would earn, before
    /// the backend confirms.
    #[must_use]
    pub fn preview_completion(&self, now: DateTime<Utc>) -> Option<RewardInfo> {
        self.current
            .data()
            .map(|task| RewardInfo::preview(task.due_date, now, task.current_streak))
    }

    /// Replace-by-id merge of a confirmed entity into both caches.
    fn merge(&mut self, task: Task) {
        if let Some(items) = self.tasks.data_mut() {
            if let Some(slot) = items.iter_mut().find(|t| t.id == task.id) {
                *slot = task.clone();
            } else {
                items.push(task.clone());
            }
        }
        if self.current.data().is_some_and(|c| c.id == task.id) {
            self.current.set(task);
        }
    }
}

impl<G: TasksApi> TaskSlice<G> {
    /// Fetch the full task collection into `tasks`.
    pub async fn fetch_all(&mut self) {
        let ticket = self.tasks.begin();
        let outcome = self.gateway.list_tasks().await;
        self.tasks
            .resolve(ticket, outcome.map_err(|e| e.message().to_string()));
    }

    /// Fetch the authenticated user's tasks into `tasks`.
    pub async fn fetch_mine(&mut self) {
        let ticket = self.tasks.begin();
        let outcome = self.gateway.my_tasks().await;
        self.tasks
            .resolve(ticket, outcome.map_err(|e| e.message().to_string()));
    }

    /// Fetch one task into `current`. A backend "not found" lands as a failed
    /// phase with the backend's message; the caller decides how to render it.
    pub async fn fetch_by_id(&mut self, id: &str) {
        let ticket = self.current.begin();
        let outcome = self.gateway.task(id).await;
        self.current
            .resolve(ticket, outcome.map_err(|e| e.message().to_string()));
    }

    /// Create a task and merge the confirmed entity into the caches.
    ///
    /// # Errors
    ///
    /// Mutation failures are returned to the caller, never stored: slice state
    /// is not rolled back, and any optimistic UI change is the caller's to
    /// revert.
    pub async fn create(&mut self, draft: &TaskDraft) -> Result<Task, ApiError> {
        let task = self.gateway.create_task(draft).await?;
        self.merge(task.clone());
        Ok(task)
    }

    /// Update a task and merge the confirmed entity.
    ///
    /// # Errors
    ///
    /// Returned to the caller; see [`Self::create`].
    pub async fn update(&mut self, id: &str, patch: &TaskPatch) -> Result<Task, ApiError> {
        let task = self.gateway.update_task(id, patch).await?;
        self.merge(task.clone());
        Ok(task)
    }

    /// Delete a task, dropping it from both caches.
    ///
    /// # Errors
    ///
    /// Returned to the caller; see [`Self::create`].
    pub async fn delete(&mut self, id: &str) -> Result<(), ApiError> {
        self.gateway.delete_task(id).await?;
        if let Some(items) = self.tasks.data_mut() {
            items.retain(|t| t.id != id);
        }
        if self.current.data().is_some_and(|c| c.id == id) {
            self.current.reset();
        }
        Ok(())
    }

    /// Change a task's status. On completion the backend's reward info is kept
    /// in `last_reward` for transient display.
    ///
    /// # Errors
    ///
    /// Returned to the caller; see [`Self::create`].
    pub async fn update_status(
        &mut self,
        id: &str,
        status: TaskStatus,
    ) -> Result<TaskStatusUpdate, ApiError> {
        let envelope = self.gateway.update_task_status(id, status).await?;
        self.merge(envelope.task.clone());
        if envelope.reward_info.is_some() {
            self.last_reward = envelope.reward_info.clone();
        }
        Ok(envelope)
    }

    /// Add a comment; the backend returns the task with the comment appended.
    ///
    /// # Errors
    ///
    /// Returned to the caller; see [`Self::create`].
    pub async fn add_comment(&mut self, id: &str, text: &str) -> Result<Task, ApiError> {
        let task = self.gateway.add_comment(id, text).await?;
        self.merge(task.clone());
        Ok(task)
    }
}
