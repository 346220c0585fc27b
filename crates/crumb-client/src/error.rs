//! Normalized API errors.
//!
//! Every failure mode collapses into a variant carrying a non-empty message,
//! so callers can always surface `error.message()` without branching on the
//! underlying transport shape.

use thiserror::Error;

/// Message used when no response was received at all.
pub const NETWORK_ERROR_MESSAGE: &str =
    "Network error or server unavailable. Please check your connection.";

/// Message used when an error response carried no usable body.
pub const UNKNOWN_ERROR_MESSAGE: &str = "Unknown error occurred";

/// Message synthesized when a structured error body lacks a `message` field.
pub const FALLBACK_ERROR_MESSAGE: &str = "An error occurred";

#[derive(Debug, Error)]
pub enum ApiError {
    /// No response received (connect failure, timeout, aborted body).
    #[error("{message}")]
    Network { message: String },

    /// 401; the session was cleared as a side effect of this error.
    #[error("{message}")]
    Auth { message: String },

    /// 4xx other than 401; the backend's message is surfaced verbatim.
    #[error("{message}")]
    Validation { status: u16, message: String },

    /// 5xx with a structured or synthesized message.
    #[error("{message}")]
    Server { status: u16, message: String },

    /// A 2xx response whose body did not match the expected shape.
    #[error("unexpected response shape: {0}")]
    Decode(String),

    /// Client-side failure outside the request path (session storage, setup).
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    /// The user-facing message. Always non-empty.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Network { message }
            | Self::Auth { message }
            | Self::Validation { message, .. }
            | Self::Server { message, .. } => message,
            Self::Decode(message) | Self::Internal(message) => message,
        }
    }

    /// HTTP status code, when a response was received.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Auth { .. } => Some(401),
            Self::Validation { status, .. } | Self::Server { status, .. } => Some(*status),
            Self::Network { .. } | Self::Decode(_) | Self::Internal(_) => None,
        }
    }
}

/// Extract a message from a raw error-response body.
///
/// Rules, in order:
/// - JSON object with a non-empty string `message` → that message
/// - JSON object without one → [`FALLBACK_ERROR_MESSAGE`]
/// - JSON string → the string itself
/// - anything else non-empty → the trimmed raw text
/// - empty body → [`UNKNOWN_ERROR_MESSAGE`]
#[must_use]
pub fn normalize_body_message(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return UNKNOWN_ERROR_MESSAGE.to_string();
    }

    match serde_json::from_str::<serde_json::Value>(trimmed) {
        Ok(serde_json::Value::Object(map)) => map
            .get("message")
            .and_then(serde_json::Value::as_str)
            .filter(|m| !m.is_empty())
            .map_or_else(|| FALLBACK_ERROR_MESSAGE.to_string(), ToString::to_string),
        Ok(serde_json::Value::String(s)) if !s.is_empty() => s,
        Ok(_) => FALLBACK_ERROR_MESSAGE.to_string(),
        Err(_) => trimmed.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn object_with_message_is_surfaced_verbatim() {
        let message = normalize_body_message(r#"{"message": "Task not found"}"#);
        assert_eq!(message, "Task not found");
    }

    #[test]
    fn object_without_message_gets_fallback() {
        assert_eq!(normalize_body_message("{}"), FALLBACK_ERROR_MESSAGE);
        assert_eq!(
            normalize_body_message(r#"{"code": 500}"#),
            FALLBACK_ERROR_MESSAGE
        );
    }

    #[test]
    fn empty_message_field_gets_fallback() {
        assert_eq!(
            normalize_body_message(r#"{"message": ""}"#),
            FALLBACK_ERROR_MESSAGE
        );
    }

    #[test]
    fn empty_body_gets_unknown_error() {
        assert_eq!(normalize_body_message(""), UNKNOWN_ERROR_MESSAGE);
        assert_eq!(normalize_body_message("   \n"), UNKNOWN_ERROR_MESSAGE);
    }

    #[test]
    fn plain_text_body_is_kept() {
        assert_eq!(normalize_body_message("Bad Gateway"), "Bad Gateway");
    }

    #[test]
    fn json_string_body_is_kept() {
        assert_eq!(normalize_body_message(r#""service down""#), "service down");
    }

    #[test]
    fn message_is_never_empty() {
        for body in ["", "{}", "null", "[]", r#"{"message":""}"#, "plain"] {
            assert!(!normalize_body_message(body).is_empty(), "body: {body:?}");
        }
    }
}
