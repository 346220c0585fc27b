//! `/auth` endpoints and session lifecycle.

use serde_json::json;

use crumb_core::responses::LoginResponse;

use crate::error::ApiError;
use crate::gateway::Gateway;

impl Gateway {
    /// `POST /auth/login`. On success the returned token is persisted into the
    /// session store, so subsequent requests authenticate automatically.
    ///
    /// # Errors
    ///
    /// Returns the normalized `ApiError` from the backend, or
    /// `ApiError::Internal` if the token cannot be persisted.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ApiError> {
        let response: LoginResponse = self
            .post("/auth/login", &json!({"email": email, "password": password}))
            .await?;
        self.session()
            .store(&response.token)
            .map_err(|e| ApiError::Internal(e.to_string()))?;
        Ok(response)
    }

    /// Destroy the local session. Client-side only; the backend token is
    /// stateless and simply expires.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Internal` if the stored credentials cannot be removed.
    pub fn logout(&self) -> Result<(), ApiError> {
        self.session()
            .delete()
            .map_err(|e| ApiError::Internal(e.to_string()))
    }
}
