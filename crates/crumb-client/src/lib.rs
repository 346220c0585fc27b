//! # crumb-client
//!
//! The HTTP gateway for the Crumb backend: one configured client wrapping all
//! network calls to a single origin.
//!
//! - Injects `Authorization: Bearer <token>` from the owned [`SessionStore`]
//!   on every outgoing request. A missing token is not an error at this layer;
//!   the backend rejects unauthenticated requests itself.
//! - On any 401 response, clears the session token and fires the configured
//!   unauthorized hook, regardless of which in-flight request triggered it.
//!   The hook is suppressed when the current route is already the login route.
//! - Normalizes every failure into an [`ApiError`] whose `message()` is always
//!   a non-empty string, so callers never branch on transport-specific shapes.
//!
//! Typed endpoint wrappers live in [`endpoints`]; the core `send` machinery in
//! [`gateway`].

mod endpoints;
mod error;
mod gateway;

pub use crumb_session::SessionStore;
pub use error::{
    ApiError, FALLBACK_ERROR_MESSAGE, NETWORK_ERROR_MESSAGE, UNKNOWN_ERROR_MESSAGE,
};
pub use gateway::{Gateway, LOGIN_ROUTE};
