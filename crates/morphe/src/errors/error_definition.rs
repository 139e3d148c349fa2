//! Error definitions

use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

/// Configuration errors (lexicon source selection etc.)
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum ConfigError {
  /// The lexicon source is neither a known keyword nor an existing file
  #[error("invalid lexicon source: {value} (expected builtin, cache or a path to a lexicon file)")]
  InvalidLexiconSource {
    /// Raw value that was given
    value: String,
  },
}

/// Lexicon (tagger model) errors
///
/// The lexicon is loaded once at startup, so every variant here is a startup failure.
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum LexiconError {
  /// The OS has no cache directory for this user
  #[error("lexicon cache directory not found")]
  CacheDirNotFound,

  /// Creating the cache directory failed
  #[error("failed to create lexicon cache directory {path:?}: {source}")]
  CacheDirCreationFailed {
    /// Directory that could not be created
    path: PathBuf,
    /// Underlying IO error
    #[source]
    source: Arc<io::Error>,
  },

  /// An explicitly configured lexicon file does not exist
  #[error("lexicon file not found: {0}")]
  LexiconNotFound(PathBuf),

  /// Reading the lexicon file failed
  #[error("failed to read lexicon file {path:?}: {source}")]
  Read {
    /// Lexicon file path
    path: PathBuf,
    /// Underlying IO error
    #[source]
    source: Arc<io::Error>,
  },

  /// A line of the lexicon file is malformed
  #[error("malformed lexicon entry at {path:?}:{line}: {reason}")]
  Parse {
    /// Lexicon file path
    path: PathBuf,
    /// 1-based line number
    line: usize,
    /// What is wrong with the line
    reason: String,
  },
}

/// Tagger errors
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum TaggerError {
  /// Caused by the lexicon
  #[error("lexicon error: {0}")]
  Lexicon(#[from] LexiconError),

  /// The input text cannot be tagged
  #[error("invalid input text for tagging: {reason}")]
  InvalidInput {
    /// Why the input was rejected
    reason: String,
  },
}

/// Umbrella error
/// Public APIs of this crate return this error
/// Use as `MorpheResult<T>` = `Result<T, MorpheError>`
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum MorpheError {
  /// Lexicon errors
  #[error(transparent)]
  Lexicon(#[from] LexiconError),

  /// Tagger errors
  #[error(transparent)]
  Tagger(#[from] TaggerError),

  /// Configuration errors
  #[error(transparent)]
  Config(#[from] ConfigError),
}

/// Standard Result alias of the morphe crate
pub type MorpheResult<T> = Result<T, MorpheError>;

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn parse_error_mentions_line() {
    let err = LexiconError::Parse {
      path: PathBuf::from("en.tsv"),
      line: 7,
      reason: "expected at least 4 columns".to_string(),
    };
    let msg = err.to_string();
    assert!(msg.contains("en.tsv"));
    assert!(msg.contains(":7"));
  }

  #[test]
  fn tagger_error_wraps_lexicon_error() {
    let err: TaggerError = LexiconError::CacheDirNotFound.into();
    assert!(matches!(err, TaggerError::Lexicon(LexiconError::CacheDirNotFound)));
  }

  #[test]
  fn umbrella_error_is_transparent() {
    let err: MorpheError = TaggerError::InvalidInput { reason: "nul byte".to_string() }.into();
    assert_eq!(err.to_string(), "invalid input text for tagging: nul byte");
  }
}
