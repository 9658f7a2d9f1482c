use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tracing::info;

use crate::config::AppConfig;
use crate::handlers::api::{list_submissions, method_not_allowed, preflight, submit_form};
use crate::handlers::assets::serve_asset;
use crate::handlers::health::health_check;
use crate::handlers::AppState;

/// Router with the relay mounted at the configured path.
///
/// When the relay owns `/` the static site fallback is not mounted.
pub fn create_router(app_state: Arc<AppState>, config: &AppConfig) -> Router {
    let mut router = Router::new();

    // Health check is always available
    router = router.route("/health", get(health_check));

    // Form relay is always available
    router = router.route(
        &config.submit_path,
        post(submit_form)
            .options(preflight)
            .fallback(method_not_allowed),
    );

    // Stored submissions carry contact details, so listing is opt-in
    if config.list_submissions {
        router = router.route("/api/submissions", get(list_submissions));
        info!("Submission listing enabled");
    }

    if config.relay_only() {
        info!("Form relay mounted at root - static site disabled");
    } else {
        router = router.fallback(serve_asset);
    }

    router.with_state(app_state)
}
