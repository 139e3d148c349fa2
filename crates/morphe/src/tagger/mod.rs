//! tagger module
//!
//! The segmenter only needs tagged tokens; how they are produced is behind the
//! [`Tagger`] trait.
pub mod lemmatizer;
pub mod rule_tagger;
pub mod tokenization;

use crate::errors::TaggerError;
use crate::models::Token;

/// Re-exports
pub use rule_tagger::RuleTagger;
pub use tokenization::tokenize;

/// Tokenizer + part-of-speech tagger
///
/// Implementations must be immutable after construction so that one instance can
/// be shared across request handlers behind `Arc<dyn Tagger>`.
pub trait Tagger: Send + Sync {
  /// Splits `text` into tokens, left to right, each with lemma, POS, fine tag,
  /// morphological features and stop-word flag.
  ///
  /// Empty or whitespace-only text yields an empty list.
  fn tag(&self, text: &str) -> Result<Vec<Token>, TaggerError>;
}
