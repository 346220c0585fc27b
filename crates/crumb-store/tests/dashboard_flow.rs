//! End-to-end store flow against an in-memory backend: fetch every slice,
//! assemble the dashboard snapshot, then clear session data.

use std::sync::{Arc, Mutex};

use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;

use crumb_client::ApiError;
use crumb_core::entities::{Notification, Project, Task, TaskDraft, TaskPatch, User, UserRewards};
use crumb_core::enums::{NotificationKind, ProjectStatus, TaskPriority, TaskStatus};
use crumb_core::responses::TaskStatusUpdate;
use crumb_store::Store;
use crumb_store::api::{NotificationsApi, ProjectsApi, TasksApi, UsersApi};

#[derive(Clone, Default)]
struct FakeGateway {
    inner: Arc<Mutex<Backend>>,
}

#[derive(Default)]
struct Backend {
    tasks: Vec<Task>,
    projects: Vec<Project>,
    rewards: Option<UserRewards>,
    notifications: Vec<Notification>,
}

fn unsupported() -> ApiError {
    ApiError::Server {
        status: 500,
        message: "not wired in this test".to_string(),
    }
}

impl TasksApi for FakeGateway {
    async fn list_tasks(&self) -> Result<Vec<Task>, ApiError> {
        Ok(self.inner.lock().unwrap().tasks.clone())
    }
    async fn my_tasks(&self) -> Result<Vec<Task>, ApiError> {
        self.list_tasks().await
    }
    async fn task(&self, id: &str) -> Result<Task, ApiError> {
        self.inner
            .lock()
            .unwrap()
            .tasks
            .iter()
            .find(|t| t.id == id)
            .cloned()
            .ok_or_else(|| ApiError::Validation {
                status: 404,
                message: "Task not found".to_string(),
            })
    }
    async fn create_task(&self, _draft: &TaskDraft) -> Result<Task, ApiError> {
        Err(unsupported())
    }
    async fn update_task(&self, _id: &str, _patch: &TaskPatch) -> Result<Task, ApiError> {
        Err(unsupported())
    }
    async fn delete_task(&self, _id: &str) -> Result<(), ApiError> {
        Err(unsupported())
    }
    async fn update_task_status(
        &self,
        id: &str,
        status: TaskStatus,
    ) -> Result<TaskStatusUpdate, ApiError> {
        let mut backend = self.inner.lock().unwrap();
        let task = backend
            .tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(unsupported)?;
        task.status = status;
        Ok(TaskStatusUpdate {
            task: task.clone(),
            reward_info: None,
        })
    }
    async fn add_comment(&self, _id: &str, _text: &str) -> Result<Task, ApiError> {
        Err(unsupported())
    }
}

impl ProjectsApi for FakeGateway {
    async fn list_projects(&self) -> Result<Vec<Project>, ApiError> {
        Ok(self.inner.lock().unwrap().projects.clone())
    }
    async fn my_projects(&self) -> Result<Vec<Project>, ApiError> {
        self.list_projects().await
    }
}

impl UsersApi for FakeGateway {
    async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        Ok(Vec::new())
    }
    async fn user(&self, _id: &str) -> Result<User, ApiError> {
        Err(unsupported())
    }
    async fn user_rewards(&self) -> Result<UserRewards, ApiError> {
        self.inner
            .lock()
            .unwrap()
            .rewards
            .clone()
            .ok_or_else(unsupported)
    }
}

impl NotificationsApi for FakeGateway {
    async fn list_notifications(&self) -> Result<Vec<Notification>, ApiError> {
        Ok(self.inner.lock().unwrap().notifications.clone())
    }
    async fn mark_notification_read(&self, _id: &str) -> Result<Notification, ApiError> {
        Err(unsupported())
    }
    async fn mark_all_notifications_read(&self) -> Result<(), ApiError> {
        Ok(())
    }
}

fn seeded_gateway() -> FakeGateway {
    let at = Utc.with_ymd_and_hms(2024, 2, 1, 9, 0, 0).unwrap();
    let task = |id: &str, status: TaskStatus| Task {
        id: id.to_string(),
        title: format!("task {id}"),
        description: None,
        status,
        priority: TaskPriority::Medium,
        due_date: None,
        assigned_to: None,
        project: None,
        comments: Vec::new(),
        reward_points: 0,
        current_streak: 0,
        is_on_time: false,
        created_at: at,
        updated_at: at,
    };
    let gateway = FakeGateway::default();
    {
        let mut backend = gateway.inner.lock().unwrap();
        backend.tasks = vec![
            task("t1", TaskStatus::Pending),
            task("t2", TaskStatus::InProgress),
            task("t3", TaskStatus::Completed),
        ];
        backend.projects = vec![Project {
            id: "p1".to_string(),
            name: "Spring menu".to_string(),
            description: None,
            status: ProjectStatus::Active,
            created_at: at,
            updated_at: at,
        }];
        backend.rewards = Some(UserRewards {
            total_points: 40,
            current_streak: 4,
            last_completed_at: None,
        });
        backend.notifications = vec![
            Notification {
                id: "n1".to_string(),
                kind: NotificationKind::TaskAssigned,
                message: "New task assigned".to_string(),
                read: false,
                created_at: at,
            },
            Notification {
                id: "n2".to_string(),
                kind: NotificationKind::System,
                message: "Welcome".to_string(),
                read: true,
                created_at: at,
            },
        ];
    }
    gateway
}

#[tokio::test]
async fn snapshot_reflects_every_fetched_slice() {
    let gateway = seeded_gateway();
    let mut store = Store::new(&gateway);

    store.tasks.fetch_all().await;
    store.projects.fetch_all().await;
    store.users.fetch_rewards().await;
    store.notifications.fetch_all().await;

    let snapshot = store.dashboard();
    assert_eq!(snapshot.tasks.total, 3);
    assert_eq!(snapshot.tasks.pending, 1);
    assert_eq!(snapshot.tasks.in_progress, 1);
    assert_eq!(snapshot.tasks.completed, 1);
    assert_eq!(snapshot.projects.total, 1);
    assert_eq!(snapshot.projects.active, 1);
    assert_eq!(snapshot.rewards.map(|r| r.total_points), Some(40));
    assert_eq!(snapshot.unread_notifications, 1);
}

#[tokio::test]
async fn status_change_is_visible_in_the_next_snapshot() {
    let gateway = seeded_gateway();
    let mut store = Store::new(&gateway);
    store.tasks.fetch_all().await;

    store
        .tasks
        .update_status("t1", TaskStatus::InProgress)
        .await
        .expect("status update");

    let snapshot = store.dashboard();
    assert_eq!(snapshot.tasks.pending, 0);
    assert_eq!(snapshot.tasks.in_progress, 2);
}

#[tokio::test]
async fn clearing_session_data_empties_the_snapshot() {
    let gateway = seeded_gateway();
    let mut store = Store::new(&gateway);
    store.tasks.fetch_all().await;
    store.users.fetch_rewards().await;
    store.notifications.fetch_all().await;

    store.clear_session_data();

    let snapshot = store.dashboard();
    assert_eq!(snapshot.tasks.total, 0);
    assert!(snapshot.rewards.is_none());
    assert_eq!(snapshot.unread_notifications, 0);
}
