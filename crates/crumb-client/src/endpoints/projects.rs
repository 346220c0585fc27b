//! `/projects` endpoints.

use crumb_core::entities::Project;

use crate::error::ApiError;
use crate::gateway::Gateway;

impl Gateway {
    /// `GET /projects`
    ///
    /// # Errors
    ///
    /// Returns the normalized `ApiError` from the backend.
    pub async fn list_projects(&self) -> Result<Vec<Project>, ApiError> {
        self.get("/projects").await
    }

    /// `GET /projects/mine`: projects the authenticated user has tasks in.
    ///
    /// # Errors
    ///
    /// Returns the normalized `ApiError` from the backend.
    pub async fn my_projects(&self) -> Result<Vec<Project>, ApiError> {
        self.get("/projects/mine").await
    }
}
