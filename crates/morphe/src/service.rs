// crates/morphe/src/service.rs

//! MorphemeAnalyzer: the morphe crate's facade.
//!
//! - Tagger (`Arc<dyn Tagger>`, injected)
//! - Morpheme segmenter (stateless)
//!
//! Callers such as the HTTP server only need this struct.

use std::fmt;
use std::sync::Arc;
use std::time::Instant;

use tracing::debug;

use crate::errors::MorpheResult;
use crate::lexicon::LexiconManager;
use crate::models::TokenAnalysis;
use crate::morpheme::analyze_tokens;
use crate::tagger::{RuleTagger, Tagger};

/// Tag → segment pipeline
#[derive(Clone)]
pub struct MorphemeAnalyzer {
  tagger: Arc<dyn Tagger>,
}

impl MorphemeAnalyzer {
  /// Constructs an analyzer over an already built tagger
  pub fn new(tagger: Arc<dyn Tagger>) -> Self {
    Self { tagger }
  }

  /// Loads the lexicon through `manager` and builds a [`RuleTagger`] over it.
  ///
  /// # Errors
  /// - The lexicon file cannot be read or parsed
  pub fn from_lexicon_manager(manager: &LexiconManager) -> MorpheResult<Self> {
    let lexicon = manager.load()?;
    Ok(Self::new(Arc::new(RuleTagger::new(lexicon))))
  }

  /// Tags `text` and segments every token.
  ///
  /// Tokens keep the tagger's order. A tagger failure aborts the whole call;
  /// there are no partial results.
  pub fn analyze(&self, text: &str) -> MorpheResult<Vec<TokenAnalysis>> {
    let started = Instant::now();

    let tokens = self.tagger.tag(text)?;
    let analyses = analyze_tokens(tokens);

    debug!(
      text_len = text.len(),
      token_count = analyses.len(),
      elapsed_ms = started.elapsed().as_millis() as u64,
      "analysis completed"
    );

    Ok(analyses)
  }
}

impl fmt::Debug for MorphemeAnalyzer {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("MorphemeAnalyzer").finish_non_exhaustive()
  }
}
