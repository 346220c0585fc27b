mod auth;
mod notification;
mod project;
mod task;
mod user;
mod watch;

pub use auth::{AuthCommands, AuthLoginArgs};
pub use notification::NotificationCommands;
pub use project::ProjectCommands;
pub use task::{TaskCommands, TaskCreateArgs, TaskStatusArgs, TaskUpdateArgs};
pub use user::UserCommands;
pub use watch::WatchArgs;
