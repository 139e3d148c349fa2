//! HTTP handler definitions

use std::time::Instant;

use axum::{Json, extract::State};
use tracing::{debug, error, info};

use crate::errors::ApiError;
use crate::models::{HealthResponse, MorphemeAnalysisRequest, MorphemeAnalysisResponse};

use super::state::AppState;

/// POST /api/morpheme-analysis endpoint
///
/// Tags English text and breaks every token into morphemes.
///
/// # Request Body
/// ```json
/// { "text": "text to analyze" }
/// ```
///
/// # Response
/// - 200 OK: `{"success": true, "result": [...]}`
/// - 400 Bad Request: input error (missing text, text too long)
/// - 500 Internal Server Error: internal error
pub async fn post_morpheme_analysis(
  State(state): State<AppState>,
  Json(request): Json<MorphemeAnalysisRequest>,
) -> Result<Json<MorphemeAnalysisResponse>, ApiError> {
  debug!(text_len = request.text.as_ref().map(String::len), "morpheme analysis request received");

  // Tagging is CPU bound; keep it off the async workers
  let service = state.service.clone();
  let started = Instant::now();

  let response =
    tokio::task::spawn_blocking(move || service.analyze(request)).await.map_err(|e| {
      error!(error = %e, "spawn_blocking failed");
      ApiError::internal("failed to run the analysis task")
    })??;

  info!(
    token_count = response.result.len(),
    elapsed_ms = started.elapsed().as_millis() as u64,
    "morpheme analysis completed"
  );

  Ok(Json(response))
}

/// Health check endpoint
///
/// Confirms the server is running.
pub async fn health_check() -> Json<HealthResponse> {
  Json(HealthResponse::ok())
}
