//! User slice: directory, selected user, and the polled reward standing.

use crate::api::UsersApi;
use crate::lifecycle::RequestState;

use crumb_core::entities::{User, UserRewards};

#[derive(Debug)]
pub struct UserSlice<G> {
    gateway: G,
    pub users: RequestState<Vec<User>>,
    pub current: RequestState<User>,
    pub rewards: RequestState<UserRewards>,
}

impl<G> UserSlice<G> {
    pub fn new(gateway: G) -> Self {
        Self {
            gateway,
            users: RequestState::new(),
            current: RequestState::new(),
            rewards: RequestState::new(),
        }
    }
}

impl<G: UsersApi> UserSlice<G> {
    pub async fn fetch_all(&mut self) {
        let ticket = self.users.begin();
        let outcome = self.gateway.list_users().await;
        self.users
            .resolve(ticket, outcome.map_err(|e| e.message().to_string()));
    }

    pub async fn fetch_by_id(&mut self, id: &str) {
        let ticket = self.current.begin();
        let outcome = self.gateway.user(id).await;
        self.current
            .resolve(ticket, outcome.map_err(|e| e.message().to_string()));
    }

    /// Refresh the reward standing. Called on demand after a completion and on
    /// a poll interval in the background.
    pub async fn fetch_rewards(&mut self) {
        let ticket = self.rewards.begin();
        let outcome = self.gateway.user_rewards().await;
        self.rewards
            .resolve(ticket, outcome.map_err(|e| e.message().to_string()));
    }
}
