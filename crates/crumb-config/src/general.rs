//! General application configuration.

use serde::{Deserialize, Serialize};

const fn default_limit() -> u32 {
    20
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Default result limit for list commands.
    #[serde(default = "default_limit")]
    pub default_limit: u32,

    /// Route the client considers "current" at startup. The gateway suppresses
    /// its login redirect when this is already the login route.
    #[serde(default)]
    pub start_route: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
            start_route: String::new(),
        }
    }
}
