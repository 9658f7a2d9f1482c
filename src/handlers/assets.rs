use axum::{
    extract::State,
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use tracing::error;

use crate::handlers::AppState;

// Fallback handler serving the static site
pub async fn serve_asset(State(state): State<Arc<AppState>>, uri: Uri) -> Response {
    match state.assets.resolve(uri.path()).await {
        Ok(asset) => asset.into_response(),
        Err(err) => {
            error!("Error serving file {}: {}", uri.path(), err);
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
        }
    }
}
