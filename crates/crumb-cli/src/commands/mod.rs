pub mod auth;
pub mod dashboard;
pub mod dispatch;
pub mod notification;
pub mod project;
pub mod shared;
pub mod task;
pub mod user;
pub mod watch;
