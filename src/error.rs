use axum::http::StatusCode;
use thiserror::Error;

/// Failures of the form submission relay.
///
/// Every variant ends up in the same JSON failure envelope; the variants only
/// exist so logs and tests can tell the causes apart.
#[derive(Debug, Error)]
pub enum RelayError {
    /// The form body could not be decoded.
    #[error("Invalid form data: {0}")]
    MalformedInput(String),

    /// Airtable answered with a non-success status. The body is kept for the
    /// server-side log only.
    #[error("Airtable error: {}", .status.as_u16())]
    ExternalApi { status: StatusCode, body: String },

    /// Airtable could not be reached or its answer could not be read.
    #[error("Failed to reach Airtable: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Invalid Airtable endpoint: {0}")]
    Endpoint(String),
}

impl RelayError {
    /// Upstream status for `ExternalApi` failures.
    pub fn upstream_status(&self) -> Option<StatusCode> {
        match self {
            RelayError::ExternalApi { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// The asset store could not be contacted or failed while reading.
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("asset store I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("asset origin unreachable: {0}")]
    Origin(#[from] reqwest::Error),
}

/// Startup configuration problems.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set in environment")]
    Missing(&'static str),

    #[error("invalid value for {name}: {reason}")]
    Invalid { name: &'static str, reason: String },
}
