//! Application state shared across handlers.

use std::sync::Arc;

use mongodb::Database;

use crate::config::AdminConfig;
use crate::services::assets::AssetCdnClient;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: AdminConfig,
    db: Database,
    assets: AssetCdnClient,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub fn new(config: AdminConfig, db: Database) -> Self {
        let assets = AssetCdnClient::new(config.asset_cdn.clone());

        Self {
            inner: Arc::new(AppStateInner { config, db, assets }),
        }
    }

    /// Get a reference to the admin configuration.
    #[must_use]
    pub fn config(&self) -> &AdminConfig {
        &self.inner.config
    }

    /// Get a reference to the database handle.
    #[must_use]
    pub fn db(&self) -> &Database {
        &self.inner.db
    }

    /// Get a reference to the asset CDN client.
    #[must_use]
    pub fn assets(&self) -> &AssetCdnClient {
        &self.inner.assets
    }
}
