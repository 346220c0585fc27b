//! Project slice: collection cache only; projects are read-only in this
//! client.

use crate::api::ProjectsApi;
use crate::lifecycle::RequestState;

use crumb_core::entities::Project;

#[derive(Debug)]
pub struct ProjectSlice<G> {
    gateway: G,
    pub projects: RequestState<Vec<Project>>,
}

impl<G> ProjectSlice<G> {
    pub fn new(gateway: G) -> Self {
        Self {
            gateway,
            projects: RequestState::new(),
        }
    }
}

impl<G: ProjectsApi> ProjectSlice<G> {
    pub async fn fetch_all(&mut self) {
        let ticket = self.projects.begin();
        let outcome = self.gateway.list_projects().await;
        self.projects
            .resolve(ticket, outcome.map_err(|e| e.message().to_string()));
    }

    pub async fn fetch_mine(&mut self) {
        let ticket = self.projects.begin();
        let outcome = self.gateway.my_projects().await;
        self.projects
            .resolve(ticket, outcome.map_err(|e| e.message().to_string()));
    }
}
