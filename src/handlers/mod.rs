pub mod api;
pub mod assets;
pub mod health;

use reqwest::Client;
use std::sync::Arc;

use crate::client::AirtableClient;
use crate::config::{AppConfig, AssetSource};
use crate::services::assets::AssetResolver;
use crate::services::relay::FormRelay;
use crate::services::store::{AssetStore, DirectoryStore, RemoteStore};

// Shared, read-only resources handed to every request
pub struct AppState {
    pub relay: FormRelay,
    pub assets: AssetResolver,
}

impl AppState {
    pub fn new(relay: FormRelay, assets: AssetResolver) -> Self {
        Self { relay, assets }
    }

    /// Wire the relay and the asset store from configuration. Both share one
    /// HTTP connection pool.
    pub fn from_config(config: &AppConfig) -> Self {
        let http = Client::new();

        let store: Arc<dyn AssetStore> = match &config.assets {
            AssetSource::Directory(dir) => Arc::new(DirectoryStore::new(dir.clone())),
            AssetSource::Origin(origin) => Arc::new(RemoteStore::new(http.clone(), origin.clone())),
        };

        let client = AirtableClient::with_client(http, config.airtable.clone());

        Self::new(FormRelay::new(client), AssetResolver::new(store))
    }
}
