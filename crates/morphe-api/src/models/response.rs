//! Response model definition

use morphe::models::TokenAnalysis;
use serde::Serialize;

/// Morpheme analysis response
///
/// `{"success": true, "result": [...]}`
#[derive(Debug, Serialize)]
pub struct MorphemeAnalysisResponse {
  /// Always `true`; failures use the error envelope
  pub success: bool,
  /// One entry per token, in input order
  pub result: Vec<TokenAnalysis>,
}

impl MorphemeAnalysisResponse {
  /// Successful response
  #[must_use]
  pub fn ok(result: Vec<TokenAnalysis>) -> Self {
    Self { success: true, result }
  }
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
  /// `"ok"` while the server is up
  pub status: &'static str,
}

impl HealthResponse {
  /// Healthy
  #[must_use]
  pub fn ok() -> Self {
    Self { status: "ok" }
  }
}
