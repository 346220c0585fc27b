//! # crumb-config
//!
//! Layered configuration loading for Crumb using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`CRUMB_*` prefix, `__` as separator)
//! 2. Project-level `.crumb/config.toml`
//! 3. User-level `~/.config/crumb/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `CRUMB_API__BASE_URL` -> `api.base_url`,
//! `CRUMB_POLLING__REWARD_REFRESH_SECS` -> `polling.reward_refresh_secs`, etc.
//! The `__` (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use crumb_config::CrumbConfig;
//!
//! // Load from all sources (dotenvy + TOML + env):
//! let config = CrumbConfig::load_with_dotenv().expect("config");
//! println!("API origin: {}", config.api.base_url);
//! ```

mod api;
mod error;
mod general;
mod polling;

pub use api::ApiConfig;
pub use error::ConfigError;
pub use general::GeneralConfig;
pub use polling::PollingConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CrumbConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub polling: PollingConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl CrumbConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] if you need
    /// `.env` file loading.
    ///
    /// Precedence (highest to lowest):
    /// 1. Environment variables (`CRUMB_*` prefix)
    /// 2. `.crumb/config.toml` (project-local)
    /// 3. `~/.config/crumb/config.toml` (user-global)
    /// 4. Default values
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Figment` if extraction fails.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load configuration with `.env` file support.
    ///
    /// Calls `dotenvy` to load the `.env` file from the workspace root before
    /// building the figment. This is the typical entry point for the CLI and
    /// tests.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Figment` if extraction fails.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        Self::load_dotenv_from_workspace();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add additional
    /// providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".crumb/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment = figment.merge(Env::prefixed("CRUMB_").split("__"));

        figment
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("crumb").join("config.toml"))
    }

    /// Load `.env` from the workspace root.
    ///
    /// Walks up from `CARGO_MANIFEST_DIR` (if available) or current dir looking
    /// for a `.env` file. Silently does nothing if no `.env` is found.
    fn load_dotenv_from_workspace() {
        if let Ok(manifest_dir) = std::env::var("CARGO_MANIFEST_DIR") {
            let mut dir = PathBuf::from(manifest_dir);
            // Walk up at most 3 levels (crate -> crates/ -> workspace root)
            for _ in 0..3 {
                let env_path = dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                    return;
                }
                if !dir.pop() {
                    break;
                }
            }
        }

        // Fallback: try current directory
        let _ = dotenvy::dotenv();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_loads() {
        let config = CrumbConfig::default();
        assert_eq!(config.api.base_url, "https://api.bakerycrm.shop/api");
        assert_eq!(config.polling.reward_refresh_secs, 30);
    }

    #[test]
    fn figment_builds_without_files() {
        let figment = CrumbConfig::figment();
        let config: CrumbConfig = figment.extract().expect("should extract defaults");
        assert_eq!(config.api.timeout_secs, 10);
        assert_eq!(config.polling.notification_refresh_secs, 30);
    }
}
