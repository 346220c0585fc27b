//! Entity structs for the bakery-CRM domain.

mod comment;
mod notification;
mod project;
mod task;
mod user;

pub use comment::Comment;
pub use notification::Notification;
pub use project::Project;
pub use task::{Task, TaskDraft, TaskPatch, TaskRef, UserRef};
pub use user::{User, UserRewards};
