//! `/users` endpoints.

use crumb_core::entities::{User, UserRewards};

use crate::error::ApiError;
use crate::gateway::Gateway;

impl Gateway {
    /// `GET /users`
    ///
    /// # Errors
    ///
    /// Returns the normalized `ApiError` from the backend.
    pub async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        self.get("/users").await
    }

    /// `GET /users/:id`
    ///
    /// # Errors
    ///
    /// Returns the normalized `ApiError` from the backend.
    pub async fn user(&self, id: &str) -> Result<User, ApiError> {
        self.get(&format!("/users/{id}")).await
    }

    /// `GET /users/rewards`: the authenticated user's reward standing.
    /// Polled in the background for freshness.
    ///
    /// # Errors
    ///
    /// Returns the normalized `ApiError` from the backend.
    pub async fn user_rewards(&self) -> Result<UserRewards, ApiError> {
        self.get("/users/rewards").await
    }
}
