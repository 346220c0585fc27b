//! The composed client-side store: one slice per resource family.

use crate::slices::{NotificationSlice, ProjectSlice, TaskSlice, UserSlice};
use crate::stats::{DashboardSnapshot, project_stats, task_stats};

/// All slices behind one handle. Each slice owns its own clone of the gateway,
/// so they refresh independently.
#[derive(Debug)]
pub struct Store<G> {
    pub tasks: TaskSlice<G>,
    pub projects: ProjectSlice<G>,
    pub users: UserSlice<G>,
    pub notifications: NotificationSlice<G>,
}

impl<G: Clone> Store<G> {
    pub fn new(gateway: &G) -> Self {
        Self {
            tasks: TaskSlice::new(gateway.clone()),
            projects: ProjectSlice::new(gateway.clone()),
            users: UserSlice::new(gateway.clone()),
            notifications: NotificationSlice::new(gateway.clone()),
        }
    }
}

impl<G> Store<G> {
    /// Assemble the dashboard from cached data only. Slices that were never
    /// fetched contribute empty counts.
    #[must_use]
    pub fn dashboard(&self) -> DashboardSnapshot {
        DashboardSnapshot {
            tasks: task_stats(self.tasks.tasks.data().map_or(&[], Vec::as_slice)),
            projects: project_stats(self.projects.projects.data().map_or(&[], Vec::as_slice)),
            rewards: self.users.rewards.data().cloned(),
            unread_notifications: self.notifications.unread_count(),
        }
    }

    /// Drop everything session-scoped. Called on logout and after a forced
    /// sign-out.
    pub fn clear_session_data(&mut self) {
        self.tasks.tasks.reset();
        self.tasks.current.reset();
        self.projects.projects.reset();
        self.users.users.reset();
        self.users.current.reset();
        self.users.rewards.reset();
        self.notifications.clear();
    }
}
