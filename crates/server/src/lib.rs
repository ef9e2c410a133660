use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use movies_api_core::{Config, VERSION};

pub mod error;
pub mod json;
pub mod params;
pub mod routes;

use routes::{healthcheck, movies};

/// Shared application context handed to every handler
pub struct AppState {
    pub config: Config,
    pub version: &'static str,
}

/// Creates the application state from loaded configuration
pub fn create_app_state(config: Config) -> Arc<AppState> {
    Arc::new(AppState {
        config,
        version: VERSION,
    })
}

/// Creates the router with all routes configured
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/v1/healthcheck", get(healthcheck::healthcheck))
        .route("/v1/movies", post(movies::create))
        .route("/v1/movies/{id}", get(movies::show))
        .fallback(routes::not_found)
        .method_not_allowed_fallback(routes::method_not_allowed)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Starts the server and blocks until shutdown
pub async fn start_server(config: Config) -> anyhow::Result<()> {
    let addr = config.server_addr();
    tracing::info!(
        "Starting movies API {} in {} mode",
        VERSION,
        config.env
    );

    let app = create_router(create_app_state(config));

    tracing::info!("Server listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
