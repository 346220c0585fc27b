//! Typed endpoint wrappers, grouped by resource family.

mod auth;
mod notifications;
mod projects;
mod tasks;
mod users;
