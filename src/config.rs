use dotenv::dotenv;
use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use tracing::info;

use crate::error::ConfigError;

pub const DEFAULT_API_ENDPOINT: &str = "https://api.airtable.com/v0";
pub const DEFAULT_TABLE_NAME: &str = "Form Submissions";
pub const DEFAULT_SUBMIT_PATH: &str = "/api/submit-form";
const DEFAULT_SITE_DIR: &str = "public";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

/// Credentials and location of the Airtable table receiving submissions.
#[derive(Debug, Clone)]
pub struct AirtableConfig {
    pub access_token: String,
    pub base_id: String,
    pub api_endpoint: String,
    pub table_name: String,
}

/// Where static assets are read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetSource {
    Directory(PathBuf),
    Origin(String),
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub airtable: AirtableConfig,
    pub assets: AssetSource,
    pub submit_path: String,
    pub bind_addr: SocketAddr,
    pub is_production: bool,
    /// Mount `GET /api/submissions`. Off unless explicitly enabled outside
    /// production, since the route returns submitter contact details.
    pub list_submissions: bool,
}

impl AppConfig {
    /// Load configuration from `.env` and the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build the configuration from any variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let airtable = AirtableConfig {
            access_token: get("AIRTABLE_ACCESS_TOKEN")
                .ok_or(ConfigError::Missing("AIRTABLE_ACCESS_TOKEN"))?,
            base_id: get("AIRTABLE_BASE_ID").ok_or(ConfigError::Missing("AIRTABLE_BASE_ID"))?,
            api_endpoint: get("AIRTABLE_API_ENDPOINT")
                .unwrap_or_else(|| DEFAULT_API_ENDPOINT.to_string()),
            table_name: get("AIRTABLE_TABLE_NAME")
                .unwrap_or_else(|| DEFAULT_TABLE_NAME.to_string()),
        };

        let assets = match get("ASSET_ORIGIN") {
            Some(origin) => AssetSource::Origin(origin),
            None => AssetSource::Directory(PathBuf::from(
                get("SITE_DIR").unwrap_or_else(|| DEFAULT_SITE_DIR.to_string()),
            )),
        };

        let submit_path = get("SUBMIT_FORM_PATH").unwrap_or_else(|| DEFAULT_SUBMIT_PATH.to_string());
        if !submit_path.starts_with('/') {
            return Err(ConfigError::Invalid {
                name: "SUBMIT_FORM_PATH",
                reason: format!("'{}' must start with '/'", submit_path),
            });
        }

        let bind_addr = get("BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::Invalid {
                name: "BIND_ADDR",
                reason: e.to_string(),
            })?;

        let is_production = get("ENVIRONMENT")
            .map(|val| val.to_lowercase() == "production")
            .unwrap_or(false);

        let list_submissions = !is_production
            && get("ENABLE_SUBMISSION_LISTING")
                .map(|val| val.to_lowercase() == "true")
                .unwrap_or(false);

        Ok(Self {
            airtable,
            assets,
            submit_path,
            bind_addr,
            is_production,
            list_submissions,
        })
    }

    /// The relay owns the root path, so no static site is served.
    pub fn relay_only(&self) -> bool {
        self.submit_path == "/"
    }

    pub fn log_summary(&self) {
        info!(
            "Relaying form submissions to base {} table '{}'",
            self.airtable.base_id, self.airtable.table_name
        );
        match &self.assets {
            AssetSource::Directory(dir) => info!("Serving static files from {}", dir.display()),
            AssetSource::Origin(origin) => info!("Serving static files from origin {}", origin),
        }
        if self.is_production {
            info!("Running in PRODUCTION mode - restricting available endpoints");
        } else {
            info!("Running in DEVELOPMENT mode");
        }
    }
}
