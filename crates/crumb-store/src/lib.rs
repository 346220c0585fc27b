//! # crumb-store
//!
//! Client-side state for the Crumb dashboard: one independently reducible
//! slice per resource family (tasks, projects, users, notifications), each
//! tracking the idle/loading/succeeded/failed lifecycle of its async
//! operations.
//!
//! Slices call the backend through the consumer-defined traits in [`api`], so
//! every slice is testable against an in-memory fake. [`crumb_client::Gateway`]
//! implements all of them.
//!
//! Ordering: every fetch takes a monotonic ticket from its [`RequestState`]
//! slot; a resolution is discarded when a newer fetch for the same slot was
//! issued after it, so out-of-order network responses cannot clobber fresher
//! data.

pub mod api;
pub mod lifecycle;
pub mod poller;
pub mod slices;
pub mod stats;
mod store;

pub use lifecycle::{Phase, RequestState};
pub use poller::Poller;
pub use slices::{NotificationSlice, ProjectSlice, TaskSlice, UserSlice};
pub use stats::{DashboardSnapshot, ProjectStats, TaskStats};
pub use store::Store;
