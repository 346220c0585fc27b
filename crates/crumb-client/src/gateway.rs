//! The configured HTTP client and its request/response machinery.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use reqwest::{Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crumb_session::SessionStore;

use crate::error::{ApiError, NETWORK_ERROR_MESSAGE, normalize_body_message};

/// Route the unauthorized hook navigates to. The hook is suppressed when the
/// current route is already this one.
pub const LOGIN_ROUTE: &str = "/login";

type UnauthorizedHook = Arc<dyn Fn() + Send + Sync>;

/// One configured client wrapping all calls to a single backend origin.
///
/// Cheap to clone; clones share the connection pool, session store, route
/// state, and unauthorized hook.
#[derive(Clone)]
pub struct Gateway {
    http: reqwest::Client,
    base_url: String,
    session: SessionStore,
    route: Arc<Mutex<String>>,
    on_unauthorized: UnauthorizedHook,
}

impl Gateway {
    /// Build a gateway for `base_url` with a per-request timeout.
    ///
    /// The session store is constructor-injected, with no ambient token
    /// lookup, so tests can run multiple gateways with independent sessions.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Internal` if the underlying HTTP client cannot be
    /// constructed.
    pub fn new(
        base_url: impl Into<String>,
        timeout_secs: u64,
        session: SessionStore,
    ) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| ApiError::Internal(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url: base_url.into(),
            session,
            route: Arc::new(Mutex::new(String::from("/"))),
            on_unauthorized: Arc::new(|| {}),
        })
    }

    /// Replace the hook fired when a 401 forces a logout.
    #[must_use]
    pub fn with_unauthorized_hook(mut self, hook: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_unauthorized = Arc::new(hook);
        self
    }

    /// Record the route the user is currently on. A 401 while on
    /// [`LOGIN_ROUTE`] does not fire the hook again.
    pub fn set_route(&self, route: impl Into<String>) {
        *self.lock_route() = route.into();
    }

    #[must_use]
    pub fn current_route(&self) -> String {
        self.lock_route().clone()
    }

    #[must_use]
    pub const fn session(&self) -> &SessionStore {
        &self.session
    }

    fn lock_route(&self) -> std::sync::MutexGuard<'_, String> {
        self.route.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Global 401 side effect: clear the token and navigate to the login
    /// route, firing the hook at most once until the route changes again.
    fn handle_unauthorized(&self) {
        if let Err(error) = self.session.delete() {
            tracing::warn!(%error, "failed to clear session token after 401");
        }
        let mut route = self.lock_route();
        if *route != LOGIN_ROUTE {
            *route = LOGIN_ROUTE.to_string();
            (self.on_unauthorized)();
        }
    }

    // --- Request core ---

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.send(Method::GET, path, None::<&()>).await
    }

    pub(crate) async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        self.send(Method::POST, path, Some(body)).await
    }

    pub(crate) async fn put<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: Option<&B>,
    ) -> Result<T, ApiError> {
        self.send(Method::PUT, path, body).await
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let response = self.dispatch(Method::DELETE, path, None::<&()>).await?;
        if response.status().is_success() {
            return Ok(());
        }
        Err(self.error_from_response(response).await)
    }

    /// Issue a request and decode the JSON payload.
    pub(crate) async fn send<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<T, ApiError> {
        let response = self.dispatch(method, path, body).await?;

        if response.status().is_success() {
            let bytes = response.bytes().await.map_err(|error| {
                tracing::debug!(%error, path, "response body aborted mid-read");
                ApiError::Network {
                    message: NETWORK_ERROR_MESSAGE.to_string(),
                }
            })?;
            return serde_json::from_slice(&bytes).map_err(|e| ApiError::Decode(e.to_string()));
        }

        Err(self.error_from_response(response).await)
    }

    async fn dispatch<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<reqwest::Response, ApiError> {
        let url = format!("{}{path}", self.base_url);
        let mut request = self.http.request(method, &url);

        // Unauthenticated requests pass through; the backend rejects them.
        if let Some(token) = self.session.load() {
            request = request.bearer_auth(token);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        request.send().await.map_err(|error| {
            tracing::debug!(%error, %url, "no response received");
            ApiError::Network {
                message: NETWORK_ERROR_MESSAGE.to_string(),
            }
        })
    }

    /// Classify a non-success response, running the 401 side effect first.
    async fn error_from_response(&self, response: reqwest::Response) -> ApiError {
        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            self.handle_unauthorized();
        }

        let body = response.text().await.unwrap_or_default();
        let message = normalize_body_message(&body);
        tracing::debug!(status = status.as_u16(), %message, "request failed");

        if status == StatusCode::UNAUTHORIZED {
            ApiError::Auth { message }
        } else if status.is_client_error() {
            ApiError::Validation {
                status: status.as_u16(),
                message,
            }
        } else {
            ApiError::Server {
                status: status.as_u16(),
                message,
            }
        }
    }
}

impl std::fmt::Debug for Gateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Gateway")
            .field("base_url", &self.base_url)
            .field("route", &self.current_route())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn test_gateway() -> (tempfile::TempDir, Gateway) {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let session = SessionStore::new("crumb-cli-test", tmp.path().join("credentials"));
        let gateway =
            Gateway::new("http://127.0.0.1:1/api", 1, session).expect("gateway builds");
        (tmp, gateway)
    }

    #[test]
    fn route_defaults_to_root() {
        let (_tmp, gateway) = test_gateway();
        assert_eq!(gateway.current_route(), "/");
    }

    #[test]
    fn set_route_is_visible_across_clones() {
        let (_tmp, gateway) = test_gateway();
        let clone = gateway.clone();
        gateway.set_route("/tasks/t1");
        assert_eq!(clone.current_route(), "/tasks/t1");
    }

    #[test]
    fn unauthorized_hook_fires_once_then_suppressed() {
        use std::sync::atomic::{AtomicUsize, Ordering};

        let fired = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&fired);
        let (_tmp, gateway) = test_gateway();
        let gateway = gateway.with_unauthorized_hook(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        gateway.handle_unauthorized();
        assert_eq!(fired.load(Ordering::SeqCst), 1);
        assert_eq!(gateway.current_route(), LOGIN_ROUTE);

        // Already on /login, redirect suppressed
        gateway.handle_unauthorized();
        assert_eq!(fired.load(Ordering::SeqCst), 1);

        // Navigating away re-arms the hook
        gateway.set_route("/");
        gateway.handle_unauthorized();
        assert_eq!(fired.load(Ordering::SeqCst), 2);
    }
}
