use axum::http::StatusCode;
use std::sync::Arc;
use tracing::debug;

use crate::error::AssetError;
use crate::services::store::{AssetStore, StoredAsset};

pub const NOT_FOUND_PAGE: &str = "/404.html";

/// Maps request paths onto store lookups with the site's fallback rules.
#[derive(Clone)]
pub struct AssetResolver {
    store: Arc<dyn AssetStore>,
}

impl AssetResolver {
    pub fn new(store: Arc<dyn AssetStore>) -> Self {
        Self { store }
    }

    /// Resolve a request path to the response the site should send.
    ///
    /// Lookup order: the inferred path, the same path without `.html`, then
    /// the custom `/404.html` served with status 404. When none exists the
    /// store's own not-found answer is returned.
    pub async fn resolve(&self, request_path: &str) -> Result<StoredAsset, AssetError> {
        let path = infer_asset_path(request_path);
        let asset = self.store.fetch(&path).await?;
        if !asset.is_not_found() {
            return Ok(asset);
        }

        if let Some(bare) = path.strip_suffix(".html") {
            debug!("{} not found, trying {}", path, bare);
            let alternative = self.store.fetch(bare).await?;
            if !alternative.is_not_found() {
                return Ok(alternative);
            }
        }

        let not_found_page = self.store.fetch(NOT_FOUND_PAGE).await?;
        if !not_found_page.is_not_found() {
            return Ok(not_found_page.with_status(StatusCode::NOT_FOUND));
        }

        Ok(asset)
    }
}

/// `/` becomes `/index.html`; a path without any `.` gets `.html` appended.
pub fn infer_asset_path(request_path: &str) -> String {
    if request_path == "/" {
        return "/index.html".to_string();
    }
    if request_path.contains('.') {
        request_path.to_string()
    } else {
        format!("{}.html", request_path)
    }
}

#[cfg(test)]
#[path = "assets_test.rs"]
mod assets_test;
