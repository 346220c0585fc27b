//! Derived dashboard counts, computed from the cached collections.

use serde::Serialize;

use crumb_core::entities::{Project, Task, UserRewards};
use crumb_core::enums::{ProjectStatus, TaskStatus};

/// Per-status task counts for the dashboard header.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TaskStats {
    pub total: usize,
    pub completed: usize,
    pub in_progress: usize,
    pub pending: usize,
    pub on_hold: usize,
    pub overdue: usize,
}

/// Per-status project counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ProjectStats {
    pub total: usize,
    pub completed: usize,
    pub active: usize,
    pub pending: usize,
}

/// Everything the dashboard view renders, assembled from cached slice data
/// without any network round trip.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardSnapshot {
    pub tasks: TaskStats,
    pub projects: ProjectStats,
    pub rewards: Option<UserRewards>,
    pub unread_notifications: usize,
}

#[must_use]
pub fn task_stats(tasks: &[Task]) -> TaskStats {
    let mut stats = TaskStats {
        total: tasks.len(),
        ..TaskStats::default()
    };
    for task in tasks {
        match task.status {
            TaskStatus::Completed => stats.completed += 1,
            TaskStatus::InProgress => stats.in_progress += 1,
            TaskStatus::Pending => stats.pending += 1,
            TaskStatus::OnHold => stats.on_hold += 1,
            TaskStatus::Overdue => stats.overdue += 1,
        }
    }
    stats
}

#[must_use]
pub fn project_stats(projects: &[Project]) -> ProjectStats {
    let mut stats = ProjectStats {
        total: projects.len(),
        ..ProjectStats::default()
    };
    for project in projects {
        match project.status {
            ProjectStatus::Completed => stats.completed += 1,
            ProjectStatus::Active => stats.active += 1,
            ProjectStatus::Pending => stats.pending += 1,
        }
    }
    stats
}
