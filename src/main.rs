use std::process;
use std::sync::Arc;
use std::time::Duration;

use axum::{error_handling::HandleErrorLayer, http::StatusCode};
use tower::{BoxError, ServiceBuilder};
use tower_http::trace::TraceLayer;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use pizzabox_site_service::{create_router, AppConfig, AppState};

// Error handler
async fn handle_error(error: BoxError) -> (StatusCode, String) {
    if error.is::<tower::timeout::error::Elapsed>() {
        (
            StatusCode::REQUEST_TIMEOUT,
            "Request took too long".to_string(),
        )
    } else if error.is::<tower::load_shed::error::Overloaded>() {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            "Service is overloaded".to_string(),
        )
    } else {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal Server Error".to_string(),
        )
    }
}

#[tokio::main]
async fn main() {
    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            error!("Invalid configuration: {}", err);
            process::exit(1);
        }
    };
    config.log_summary();

    // Create shared application state
    let app_state = Arc::new(AppState::from_config(&config));

    let app = create_router(app_state, &config).layer(
        ServiceBuilder::new()
            .layer(HandleErrorLayer::new(handle_error))
            .load_shed()
            .concurrency_limit(64)
            .timeout(Duration::from_secs(10))
            .layer(TraceLayer::new_for_http()),
    );

    info!("Server listening on {}", config.bind_addr);

    let listener = match tokio::net::TcpListener::bind(config.bind_addr).await {
        Ok(listener) => listener,
        Err(err) => {
            error!("Failed to bind to {}: {}", config.bind_addr, err);
            process::exit(1);
        }
    };

    // Set up signal handler for graceful shutdown
    let shutdown = async {
        let ctrl_c = async {
            if let Err(err) = tokio::signal::ctrl_c().await {
                error!("Failed to install Ctrl+C handler: {}", err);
                std::future::pending::<()>().await;
            }
        };

        #[cfg(unix)]
        let terminate = async {
            match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
                Ok(mut signal) => {
                    signal.recv().await;
                }
                Err(err) => {
                    error!("Failed to install SIGTERM handler: {}", err);
                    std::future::pending::<()>().await;
                }
            }
        };

        #[cfg(not(unix))]
        let terminate = std::future::pending::<()>();

        tokio::select! {
            _ = ctrl_c => {
                info!("Received interrupt signal, starting graceful shutdown");
            },
            _ = terminate => {
                info!("Received terminate signal, starting graceful shutdown");
            },
        }
    };

    info!("Server is ready to accept connections");
    if let Err(err) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
    {
        error!("Server error: {}", err);
        process::exit(1);
    }

    info!("Server has been gracefully shut down");
}
