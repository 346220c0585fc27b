//! Domain errors raised by crumb-core types.
//!
//! Transport-level errors (`ApiError`) live in `crumb-client`; configuration
//! and session errors live in their respective crates.

use thiserror::Error;

use crate::enums::TaskStatus;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A status change the task state machine does not allow.
    #[error("cannot move task '{id}' from '{from}' to '{to}'")]
    InvalidTransition {
        id: String,
        from: TaskStatus,
        to: TaskStatus,
    },
}
