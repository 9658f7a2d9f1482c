//! Asset stores backing the static site.
//!
//! A store answers a path lookup the way an HTTP file service would: a
//! status, headers and a body. A missing file is a normal `404` answer, not an
//! error; `AssetError` is reserved for the store itself failing.

use async_trait::async_trait;
use axum::body::Bytes;
use axum::http::header::{self, HeaderMap, HeaderValue};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use percent_encoding::percent_decode_str;
use reqwest::Client;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};
use tokio::fs;
use tracing::{debug, warn};

use crate::error::AssetError;

const INDEX_FILE: &str = "index.html";

/// Status, headers and body of one store lookup.
#[derive(Debug, Clone)]
pub struct StoredAsset {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl StoredAsset {
    pub fn ok(content_type: &'static str, body: impl Into<Bytes>) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(header::CONTENT_TYPE, HeaderValue::from_static(content_type));
        Self {
            status: StatusCode::OK,
            headers,
            body: body.into(),
        }
    }

    pub fn not_found() -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("text/plain; charset=utf-8"),
        );
        Self {
            status: StatusCode::NOT_FOUND,
            headers,
            body: Bytes::from_static(b"Not Found"),
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status == StatusCode::NOT_FOUND
    }

    /// Same headers and body under a different status.
    pub fn with_status(mut self, status: StatusCode) -> Self {
        self.status = status;
        self
    }
}

impl IntoResponse for StoredAsset {
    fn into_response(self) -> Response {
        (self.status, self.headers, self.body).into_response()
    }
}

/// Read-only, path-addressed file service.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AssetStore: Send + Sync {
    async fn fetch(&self, path: &str) -> Result<StoredAsset, AssetError>;
}

/// Serves files below a local directory.
pub struct DirectoryStore {
    root: PathBuf,
}

impl DirectoryStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Relative file path for a percent-encoded request path, or `None` if it
    /// is not valid UTF-8 once decoded or tries to leave the root.
    fn relative_path(path: &str) -> Option<PathBuf> {
        let decoded = percent_decode_str(path).decode_utf8().ok()?;
        let relative = Path::new(decoded.trim_start_matches('/'));
        if relative
            .components()
            .all(|component| matches!(component, Component::Normal(_)))
        {
            Some(relative.to_path_buf())
        } else {
            None
        }
    }
}

#[async_trait]
impl AssetStore for DirectoryStore {
    async fn fetch(&self, path: &str) -> Result<StoredAsset, AssetError> {
        let Some(relative) = Self::relative_path(path) else {
            warn!("Rejected asset path outside the site root: {}", path);
            return Ok(StoredAsset::not_found());
        };

        let mut file_path = self.root.join(relative);
        if fs::metadata(&file_path).await.map(|m| m.is_dir()).unwrap_or(false) {
            file_path = file_path.join(INDEX_FILE);
        }

        match fs::read(&file_path).await {
            Ok(content) => {
                let extension = file_path.extension().and_then(|e| e.to_str());
                Ok(StoredAsset::ok(content_type(extension), content))
            }
            Err(e) if matches!(e.kind(), ErrorKind::NotFound | ErrorKind::NotADirectory) => {
                debug!("No asset at {}", file_path.display());
                Ok(StoredAsset::not_found())
            }
            Err(source) => Err(AssetError::Io {
                path: file_path.display().to_string(),
                source,
            }),
        }
    }
}

/// Proxies lookups to an HTTP origin such as a public bucket endpoint.
pub struct RemoteStore {
    client: Client,
    origin: String,
}

impl RemoteStore {
    pub fn new(client: Client, origin: impl Into<String>) -> Self {
        let origin = origin.into().trim_end_matches('/').to_string();
        Self { client, origin }
    }
}

#[async_trait]
impl AssetStore for RemoteStore {
    async fn fetch(&self, path: &str) -> Result<StoredAsset, AssetError> {
        let url = format!("{}{}", self.origin, path);
        debug!("Fetching asset from origin: {}", url);

        let res = self.client.get(&url).send().await?;
        let status = res.status();
        let mut headers = res.headers().clone();
        for name in [header::CONNECTION, header::TRANSFER_ENCODING] {
            headers.remove(name);
        }
        let body = res.bytes().await?;

        Ok(StoredAsset {
            status,
            headers,
            body,
        })
    }
}

/// Content type from a file extension.
pub fn content_type(extension: Option<&str>) -> &'static str {
    let extension = extension.map(str::to_ascii_lowercase);
    match extension.as_deref() {
        Some("html" | "htm") => "text/html; charset=utf-8",
        Some("css") => "text/css; charset=utf-8",
        Some("js" | "mjs") => "application/javascript; charset=utf-8",
        Some("json") => "application/json",
        Some("txt") => "text/plain; charset=utf-8",
        Some("xml") => "application/xml",
        Some("svg") => "image/svg+xml",
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("avif") => "image/avif",
        Some("ico") => "image/x-icon",
        Some("woff") => "font/woff",
        Some("woff2") => "font/woff2",
        Some("ttf") => "font/ttf",
        Some("pdf") => "application/pdf",
        Some("mp4") => "video/mp4",
        Some("webmanifest") => "application/manifest+json",
        _ => "application/octet-stream",
    }
}
