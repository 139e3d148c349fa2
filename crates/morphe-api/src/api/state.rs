//! API State Definition

use std::sync::Arc;

use crate::config::Config;
use crate::service::MorpheApiService;

/// Application State
///
/// State shared across the entire server.
/// Contains configuration and service.
#[derive(Clone)]
pub struct AppState {
  /// Configuration
  pub config: Config,
  /// Morpheme Analysis Service
  ///
  /// - Production: `Arc::new(MorpheApiServiceFull::new(&config)?)`
  /// - Test: `Arc::new(StubMorpheApiService)`
  pub service: Arc<dyn MorpheApiService>,
}

impl AppState {
  /// Creates a new AppState
  #[must_use]
  pub fn new(config: Config, service: Arc<dyn MorpheApiService>) -> Self {
    Self { config, service }
  }
}
