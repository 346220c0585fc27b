//! One state slice per resource family.

mod notifications;
mod projects;
mod tasks;
mod users;

pub use notifications::NotificationSlice;
pub use projects::ProjectSlice;
pub use tasks::TaskSlice;
pub use users::UserSlice;
