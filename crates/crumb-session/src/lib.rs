//! # crumb-session
//!
//! Session token storage for the Crumb client.
//!
//! A [`SessionStore`] is an explicit, constructor-injected context; there is no
//! ambient global token lookup. Every gateway holds its own store, which makes
//! testing with multiple concurrent sessions possible.
//!
//! Storage tiers on load: OS keyring → `CRUMB_SESSION__TOKEN` env var → file
//! (`~/.crumb/credentials` by default, mode 0600 on Unix).

mod error;
mod store;

pub use error::SessionError;
pub use store::{SessionStore, TokenSource};
