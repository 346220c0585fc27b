//! # crumb-core
//!
//! Core types shared across all Crumb crates:
//! - Entity structs for the bakery-CRM domain (tasks, projects, users, notifications)
//! - Status enums with state machine transitions
//! - Reward computation previews mirroring the backend's on-time/late rules
//! - Domain error types
//! - Response envelopes returned by the backend API

pub mod entities;
pub mod enums;
pub mod errors;
pub mod responses;
pub mod reward;
