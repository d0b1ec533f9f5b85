use std::sync::Arc;

use admin_api::{ApiClient, ApiConfig};
use anyhow::{Context, Result};
use common_access::AccessGate;
use common_session::{FileStorage, SessionStore};
use tracing::{info, warn};

use crate::config::ConsoleConfig;

/// Everything the console's views depend on, initialized once at
/// startup and passed down explicitly. There is no ambient global.
pub struct AppContext {
    pub store: Arc<SessionStore>,
    pub gate: AccessGate,
    pub api: ApiClient,
    pub config: ConsoleConfig,
}

impl AppContext {
    /// Wire storage, store, client and gate, rehydrate the persisted
    /// session, and, for a rehydrated super-admin, fetch the
    /// authoritative permission copy. Refresh failure is logged and
    /// never clears the session.
    pub async fn bootstrap(config: ConsoleConfig) -> Result<Self> {
        let storage = Arc::new(FileStorage::new(&config.session_file));
        let store = Arc::new(SessionStore::new(storage));

        let api_config = ApiConfig::new(&config.api_base_url)
            .with_timeout(config.http_timeout)
            .with_offline_fallback(config.offline_fallback);
        let api = ApiClient::new(api_config, Arc::clone(&store))
            .context("Failed to construct API client")?;
        let gate = AccessGate::new(Arc::clone(&store));

        let context = Self {
            store,
            gate,
            api,
            config,
        };

        context.store.rehydrate();
        if context.store.is_authenticated() {
            info!("restored persisted session");
        }
        context.refresh_super_admin_permissions().await;

        Ok(context)
    }

    async fn refresh_super_admin_permissions(&self) {
        let Some(session) = self.store.snapshot() else {
            return;
        };
        if !session.is_super_admin() {
            return;
        }

        match self.api.refresh_permissions().await {
            Ok(permissions) => {
                let count = permissions.len();
                if let Err(err) = self
                    .store
                    .replace_permissions(permissions.into_iter().collect())
                {
                    warn!(error = %err, "failed to persist refreshed permissions");
                } else {
                    info!(count, "replaced permissions with authoritative copy");
                }
            }
            Err(err) => {
                warn!(error = %err, "super admin permission refresh failed; keeping session");
            }
        }
    }
}
