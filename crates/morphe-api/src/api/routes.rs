//! Router definition

use axum::{
  Router,
  routing::{get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::handlers::{health_check, post_morpheme_analysis};
use super::state::AppState;
use crate::errors::ApiError;

/// Morpheme analysis route
pub const ANALYSIS_PATH: &str = "/api/morpheme-analysis";

/// Health check route
pub const HEALTH_PATH: &str = "/health";

/// Creates the API router
///
/// # Arguments
/// * `state` - Application state
///
/// # Returns
/// Configured Router with request tracing and permissive CORS
pub fn create_router(state: AppState) -> Router {
  Router::new()
    .route(ANALYSIS_PATH, post(post_morpheme_analysis))
    .route(HEALTH_PATH, get(health_check))
    .layer(TraceLayer::new_for_http())
    .layer(CorsLayer::permissive())
    .with_state(state)
}

/// Starts the server
///
/// # Arguments
/// * `state` - Application state
///
/// # Errors
/// Returns an error if binding or serving fails
pub async fn run_server(state: AppState) -> crate::errors::Result<()> {
  let addr = state.config.bind_addr.clone();
  let listener = tokio::net::TcpListener::bind(&addr)
    .await
    .map_err(|e| ApiError::config(format!("failed to bind {addr}: {e}")))?;

  tracing::info!("server listening on http://{}", addr);

  let router = create_router(state);

  axum::serve(listener, router)
    .await
    .map_err(|e| ApiError::internal(format!("server error: {e}")))?;

  Ok(())
}
