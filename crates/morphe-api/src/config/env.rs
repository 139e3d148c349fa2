//! Config loading from environment variables

use std::path::PathBuf;
use std::str::FromStr;

use morphe::errors::ConfigError;

use super::constants::{BIND_ADDR_ENV, DEFAULT_BIND_ADDR, DEFAULT_LEXICON_SOURCE, LEXICON_ENV};
use crate::errors::ApiError;

/// Where the tagger lexicon comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexiconSource {
  /// Built-in lexicon only
  Builtin,
  /// `en.tsv` in the OS cache directory when present
  Cache,
  /// Explicit lexicon file
  Path(PathBuf),
}

impl FromStr for LexiconSource {
  type Err = ConfigError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim().to_lowercase().as_str() {
      "builtin" => Ok(Self::Builtin),
      "cache" => Ok(Self::Cache),
      _ => {
        let path = PathBuf::from(s.trim());
        if path.is_file() {
          Ok(Self::Path(path))
        } else {
          Err(ConfigError::InvalidLexiconSource { value: s.to_string() })
        }
      }
    }
  }
}

/// API Server Configuration
#[derive(Debug, Clone)]
pub struct Config {
  /// Bind address (e.g. "127.0.0.1:5000")
  pub bind_addr: String,
  /// Lexicon source
  pub lexicon: LexiconSource,
}

impl Config {
  /// Loads configuration from environment variables
  ///
  /// # Errors
  /// Returns an error if environment variable values are invalid
  pub fn from_env() -> crate::errors::Result<Self> {
    Self::from_lookup(|key| std::env::var(key).ok())
  }

  /// Loads configuration through `lookup` (variable name → value)
  ///
  /// # Errors
  /// Returns an error if the lexicon source is invalid
  pub fn from_lookup<F>(lookup: F) -> crate::errors::Result<Self>
  where
    F: Fn(&str) -> Option<String>,
  {
    let bind_addr = lookup(BIND_ADDR_ENV).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());

    let lexicon_str = lookup(LEXICON_ENV).unwrap_or_else(|| DEFAULT_LEXICON_SOURCE.to_string());
    let lexicon =
      LexiconSource::from_str(&lexicon_str).map_err(|e| ApiError::config(e.to_string()))?;

    Ok(Self { bind_addr, lexicon })
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::collections::HashMap;

  fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> =
      pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
    move |key| map.get(key).cloned()
  }

  #[test]
  fn lexicon_source_keywords() {
    assert_eq!(LexiconSource::from_str("builtin").unwrap(), LexiconSource::Builtin);
    assert_eq!(LexiconSource::from_str("CACHE").unwrap(), LexiconSource::Cache);
    assert_eq!(LexiconSource::from_str(" cache ").unwrap(), LexiconSource::Cache);
  }

  #[test]
  fn lexicon_source_existing_path() {
    let file = tempfile::NamedTempFile::new().unwrap();
    let source = LexiconSource::from_str(file.path().to_str().unwrap()).unwrap();
    assert_eq!(source, LexiconSource::Path(file.path().to_path_buf()));
  }

  #[test]
  fn lexicon_source_invalid() {
    let err = LexiconSource::from_str("/nonexistent/lexicon.tsv").unwrap_err();
    assert!(err.to_string().contains("/nonexistent/lexicon.tsv"));
  }

  #[test]
  fn config_defaults() {
    let config = Config::from_lookup(|_| None).unwrap();
    assert_eq!(config.bind_addr, DEFAULT_BIND_ADDR);
    assert_eq!(config.lexicon, LexiconSource::Cache);
  }

  #[test]
  fn config_from_values() {
    let config =
      Config::from_lookup(lookup_from(&[(BIND_ADDR_ENV, "0.0.0.0:8080"), (LEXICON_ENV, "builtin")]))
        .unwrap();
    assert_eq!(config.bind_addr, "0.0.0.0:8080");
    assert_eq!(config.lexicon, LexiconSource::Builtin);
  }

  #[test]
  fn config_invalid_lexicon_is_config_error() {
    let err = Config::from_lookup(lookup_from(&[(LEXICON_ENV, "spacy-large")])).unwrap_err();
    assert_eq!(err.code(), "config_error");
  }

  #[test]
  fn config_from_env_defaults() {
    // remove_var is unsafe in Rust 2024, so this only checks that loading works
    // with whatever the environment holds
    if let Ok(config) = Config::from_env() {
      assert!(!config.bind_addr.is_empty());
    }
  }
}
