//! Background refresh intervals. 30s defaults, overridable per deployment.

use serde::{Deserialize, Serialize};

const fn default_refresh_secs() -> u64 {
    30
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PollingConfig {
    /// Interval between background reward refreshes, in seconds.
    #[serde(default = "default_refresh_secs")]
    pub reward_refresh_secs: u64,

    /// Interval between background notification refreshes, in seconds.
    #[serde(default = "default_refresh_secs")]
    pub notification_refresh_secs: u64,
}

impl Default for PollingConfig {
    fn default() -> Self {
        Self {
            reward_refresh_secs: default_refresh_secs(),
            notification_refresh_secs: default_refresh_secs(),
        }
    }
}
