//! Backend API configuration.

use serde::{Deserialize, Serialize};

fn default_base_url() -> String {
    "https://api.bakerycrm.shop/api".to_string()
}

const fn default_timeout_secs() -> u64 {
    10
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Base origin for all API calls, including the `/api` path prefix.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_production_origin() {
        let config = ApiConfig::default();
        assert_eq!(config.base_url, "https://api.bakerycrm.shop/api");
        assert_eq!(config.timeout_secs, 10);
    }
}
