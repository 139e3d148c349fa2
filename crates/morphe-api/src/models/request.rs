//! Request model definition

use serde::Deserialize;

/// Morpheme analysis request
///
/// `text` is optional at the JSON level so that a missing field is reported as
/// `invalid_input` rather than as an extractor rejection.
#[derive(Debug, Default, Deserialize)]
pub struct MorphemeAnalysisRequest {
  /// Text to analyze
  #[serde(default)]
  pub text: Option<String>,
}

impl MorphemeAnalysisRequest {
  /// Request carrying `text`
  pub fn new(text: impl Into<String>) -> Self {
    Self { text: Some(text.into()) }
  }
}
