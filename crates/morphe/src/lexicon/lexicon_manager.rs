//! Lexicon Management Module
//!
//! Decides where the lexicon comes from and loads it once.
//! - `builtin`: built-in table only
//! - cache: `en.tsv` in the cache directory when present, otherwise built-in only
//! - local path: an explicit TSV file that must exist
//!
//! Nothing is downloaded; the user lexicon file is provisioned by the operator.

use crate::errors::LexiconError;
use crate::lexicon::Lexicon;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};
use tracing::info;

/// File name of the user lexicon inside the cache directory
pub const LEXICON_FILE_NAME: &str = "en.tsv";

/// Lexicon manager structure
pub struct LexiconManager {
  /// Lexicon cache directory (`None` for the built-in lexicon)
  cache_dir: Option<PathBuf>,

  /// User lexicon file path
  /// For cache-backed managers the file may not exist yet
  lexicon_path: Option<PathBuf>,

  /// Whether `lexicon_path` must exist
  required: bool,

  /// Cache of the loaded lexicon (initialized only once at the first load)
  /// LexiconError implements Clone so it can hold Result
  lexicon: OnceLock<Result<Arc<Lexicon>, LexiconError>>,
}

impl LexiconManager {
  /// Manager for the built-in lexicon only
  pub fn builtin() -> Self {
    Self { cache_dir: None, lexicon_path: None, required: false, lexicon: OnceLock::new() }
  }

  /// Manager using the OS cache directory
  pub fn with_default_cache() -> Result<Self, LexiconError> {
    let cache_dir = default_cache_dir()?;
    Self::with_cache_dir(cache_dir)
  }

  /// Manager using an explicit cache directory
  /// The directory is created if it does not exist
  pub fn with_cache_dir<P: AsRef<Path>>(dir: P) -> Result<Self, LexiconError> {
    let cache_dir = dir.as_ref().to_path_buf();

    std::fs::create_dir_all(&cache_dir).map_err(|e| LexiconError::CacheDirCreationFailed {
      path: cache_dir.clone(),
      source: Arc::new(e),
    })?;

    let lexicon_path = cache_dir.join(LEXICON_FILE_NAME);

    Ok(Self {
      cache_dir: Some(cache_dir),
      lexicon_path: Some(lexicon_path),
      required: false,
      lexicon: OnceLock::new(),
    })
  }

  /// Manager using a local lexicon file
  pub fn from_local_path<P: AsRef<Path>>(path: P) -> Result<Self, LexiconError> {
    let path = path.as_ref().to_path_buf();

    if !path.is_file() {
      return Err(LexiconError::LexiconNotFound(path));
    }

    let cache_dir = path.parent().map(Path::to_path_buf).unwrap_or_else(|| PathBuf::from("."));

    Ok(Self {
      cache_dir: Some(cache_dir),
      lexicon_path: Some(path),
      required: true,
      lexicon: OnceLock::new(),
    })
  }

  /// Returns the cache directory, if any
  pub fn cache_dir(&self) -> Option<&Path> {
    self.cache_dir.as_deref()
  }

  /// Returns the user lexicon path, if any
  pub fn lexicon_path(&self) -> Option<&Path> {
    self.lexicon_path.as_deref()
  }

  /// Load lexicon
  /// - Reads and parses the lexicon on the first call
  /// - Returns a clone of `Arc<Lexicon>` from the second call onwards
  /// - If an error occurs on the first call, caches the error and keeps returning it
  pub fn load(&self) -> Result<Arc<Lexicon>, LexiconError> {
    self.lexicon.get_or_init(|| self.load_inner().map(Arc::new)).clone()
  }

  fn load_inner(&self) -> Result<Lexicon, LexiconError> {
    match &self.lexicon_path {
      Some(path) if path.is_file() => {
        let lexicon = Lexicon::with_user_entries(path)?;
        info!(path = %path.display(), entries = lexicon.len(), "lexicon loaded");
        Ok(lexicon)
      }
      Some(path) if self.required => Err(LexiconError::LexiconNotFound(path.clone())),
      Some(path) => {
        info!(path = %path.display(), "no user lexicon found, using built-in lexicon");
        Ok(Lexicon::builtin())
      }
      None => {
        info!("using built-in lexicon");
        Ok(Lexicon::builtin())
      }
    }
  }
}

/// Returns the default cache directory path according to the OS
///
/// | OS      | Example Path                                   |
/// |---------|------------------------------------------------|
/// | Linux   | `~/.cache/morphe/lexicon`                      |
/// | macOS   | `~/Library/Caches/morphe/lexicon`              |
/// | Windows | `C:\Users\{user}\AppData\Local\morphe\lexicon` |
fn default_cache_dir() -> Result<PathBuf, LexiconError> {
  let base = dirs::cache_dir().ok_or(LexiconError::CacheDirNotFound)?;

  Ok(base.join("morphe").join("lexicon"))
}

/// Shows only meta information, not the lexicon table
impl fmt::Debug for LexiconManager {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("LexiconManager")
      .field("cache_dir", &self.cache_dir)
      .field("lexicon_path", &self.lexicon_path)
      .field("required", &self.required)
      .field("lexicon_initialized", &self.lexicon.get().is_some())
      .finish()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn builtin_manager_has_no_paths() {
    let manager = LexiconManager::builtin();
    assert!(manager.cache_dir().is_none());
    assert!(manager.lexicon_path().is_none());

    let lexicon = manager.load().unwrap();
    assert!(lexicon.lookup("the").is_some());
  }

  #[test]
  fn load_returns_the_same_arc() {
    let manager = LexiconManager::builtin();
    let a = manager.load().unwrap();
    let b = manager.load().unwrap();
    assert!(Arc::ptr_eq(&a, &b));
  }

  #[test]
  fn debug_shows_initialized_flag() {
    let manager = LexiconManager::builtin();
    assert!(format!("{manager:?}").contains("lexicon_initialized: false"));
    manager.load().unwrap();
    assert!(format!("{manager:?}").contains("lexicon_initialized: true"));
  }
}
