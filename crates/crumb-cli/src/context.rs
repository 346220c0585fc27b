use anyhow::Context;

use crumb_client::Gateway;
use crumb_config::CrumbConfig;
use crumb_session::SessionStore;
use crumb_store::Store;

/// Everything a command handler needs: config, the shared gateway, and the
/// slice store built on it.
#[derive(Debug)]
pub struct AppContext {
    pub config: CrumbConfig,
    pub gateway: Gateway,
    pub store: Store<Gateway>,
}

impl AppContext {
    /// Build the context from loaded config. The session store lives under
    /// `~/.crumb`, falling back to the OS keyring where available.
    pub fn init(config: CrumbConfig) -> anyhow::Result<Self> {
        let session = SessionStore::from_home().context("failed to locate session store")?;
        let gateway = Gateway::new(
            config.api.base_url.clone(),
            config.api.timeout_secs,
            session,
        )
        .context("failed to initialize API gateway")?
        .with_unauthorized_hook(|| {
            eprintln!("session expired or invalid; run 'crumb auth login'");
        });

        if !config.general.start_route.is_empty() {
            gateway.set_route(&config.general.start_route);
        }

        let store = Store::new(&gateway);
        Ok(Self {
            config,
            gateway,
            store,
        })
    }
}
