//! Morpheme Analysis Service

use morphe::lexicon::LexiconManager;
use morphe::service::MorphemeAnalyzer;
use tracing::info;

use crate::config::MAX_TEXT_LENGTH;
use crate::config::{Config, LexiconSource};
use crate::errors::{ApiError, Result};
use crate::models::{MorphemeAnalysisRequest, MorphemeAnalysisResponse};

/// Common interface for the morpheme analysis service
///
/// This trait allows swapping the production implementation (`MorpheApiServiceFull`)
/// with test stubs.
pub trait MorpheApiService: Send + Sync {
  /// Executes morpheme analysis
  ///
  /// # Errors
  /// - Input error (missing text, length exceeded)
  /// - Internal error
  fn analyze(&self, request: MorphemeAnalysisRequest) -> Result<MorphemeAnalysisResponse>;
}

/// Builds the lexicon manager for a configured source
///
/// Conversion is done in the service layer so that the config layer stays free of
/// lexicon loading.
fn lexicon_manager_for(source: &LexiconSource) -> Result<LexiconManager> {
  let manager = match source {
    LexiconSource::Builtin => LexiconManager::builtin(),
    LexiconSource::Cache => LexiconManager::with_default_cache()
      .map_err(|e| ApiError::config(format!("Failed to prepare lexicon cache: {e}")))?,
    LexiconSource::Path(path) => LexiconManager::from_local_path(path)
      .map_err(|e| ApiError::config(format!("Failed to open lexicon: {e}")))?,
  };
  Ok(manager)
}

/// Morpheme Analysis Service
#[derive(Debug, Clone)]
pub struct MorpheApiServiceFull {
  analyzer: MorphemeAnalyzer,
}

impl MorpheApiServiceFull {
  /// Initializes the service
  ///
  /// # Arguments
  /// * `config` - Configuration (including lexicon source)
  ///
  /// # Errors
  /// Returns an error if the lexicon cannot be loaded
  pub fn new(config: &Config) -> Result<Self> {
    let manager = lexicon_manager_for(&config.lexicon)?;
    info!(?manager, "loading lexicon");

    let analyzer = MorphemeAnalyzer::from_lexicon_manager(&manager)
      .map_err(|e| ApiError::config(format!("Failed to load lexicon: {e}")))?;

    Ok(Self { analyzer })
  }

  /// Wraps an already built analyzer
  #[must_use]
  pub fn from_analyzer(analyzer: MorphemeAnalyzer) -> Self {
    Self { analyzer }
  }

  /// Executes morpheme analysis
  ///
  /// # Errors
  /// - If the request has no text
  /// - If text exceeds maximum length
  /// - If tagging fails
  pub fn analyze(&self, request: MorphemeAnalysisRequest) -> Result<MorphemeAnalysisResponse> {
    let text = request.text.ok_or_else(|| ApiError::invalid_input("No text provided"))?;

    let text_bytes = text.len();
    if text_bytes > MAX_TEXT_LENGTH {
      return Err(ApiError::text_too_long(text_bytes, MAX_TEXT_LENGTH));
    }

    let result = self.analyzer.analyze(&text)?;

    Ok(MorphemeAnalysisResponse::ok(result))
  }
}

/// Production implementation of trait `MorpheApiService`
impl MorpheApiService for MorpheApiServiceFull {
  fn analyze(&self, request: MorphemeAnalysisRequest) -> Result<MorphemeAnalysisResponse> {
    // Note: Writing `self.analyze(...)` would recursively call the trait method,
    // so explicitly call the inherent method.
    MorpheApiServiceFull::analyze(self, request)
  }
}
