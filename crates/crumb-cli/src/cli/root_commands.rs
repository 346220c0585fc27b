use clap::Subcommand;

use crate::cli::subcommands::{
    AuthCommands, NotificationCommands, ProjectCommands, TaskCommands, UserCommands, WatchArgs,
};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Authentication and session.
    Auth {
        #[command(subcommand)]
        action: AuthCommands,
    },
    /// Tasks.
    Task {
        #[command(subcommand)]
        action: TaskCommands,
    },
    /// Projects.
    Project {
        #[command(subcommand)]
        action: ProjectCommands,
    },
    /// Users and rewards.
    User {
        #[command(subcommand)]
        action: UserCommands,
    },
    /// Notifications.
    Notification {
        #[command(subcommand)]
        action: NotificationCommands,
    },
    /// One-shot dashboard snapshot.
    Dashboard,
    /// Live dashboard with background polling.
    Watch(WatchArgs),
}
