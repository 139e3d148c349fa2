//! Lexicon loading integration tests

use std::fs;
use std::sync::Arc;

use tempfile::TempDir;

use morphe::errors::LexiconError;
use morphe::lexicon::{LEXICON_FILE_NAME, LexiconManager};
use morphe::models::UPos;

const USER_LEXICON: &str = "\
# form\tPOS\tTAG\tlemma\tmorph
octopi\tNOUN\tNNS\toctopus\tNumber=Plur
Rustacean\tPROPN\tNNP\tRustacean
like\tVERB\tVBP\tlike\tTense=Pres|VerbForm=Fin
";

/// A missing file given explicitly is an error at construction.
#[test]
fn from_local_path_with_nonexistent_file() {
  let err = LexiconManager::from_local_path("/nonexistent/path/to/en.tsv").unwrap_err();
  assert!(matches!(err, LexiconError::LexiconNotFound(_)), "unexpected error: {err:?}");
}

#[test]
fn from_local_path_loads_user_entries_over_builtin() {
  let dir = TempDir::new().unwrap();
  let path = dir.path().join("custom.tsv");
  fs::write(&path, USER_LEXICON).unwrap();

  let manager = LexiconManager::from_local_path(&path).unwrap();
  assert_eq!(manager.lexicon_path(), Some(path.as_path()));
  assert_eq!(manager.cache_dir(), Some(dir.path()));

  let lexicon = manager.load().unwrap();
  assert_eq!(lexicon.lookup("octopi").unwrap().lemma, "octopus");
  assert_eq!(lexicon.lookup("rustacean").unwrap().pos, UPos::Propn);
  assert_eq!(lexicon.lookup("like").unwrap().pos, UPos::Verb);
  // built-in entries are still there
  assert_eq!(lexicon.lookup("the").unwrap().tag, "DT");
}

#[test]
fn cache_dir_without_lexicon_file_falls_back_to_builtin() {
  let dir = TempDir::new().unwrap();
  let cache_dir = dir.path().join("nested").join("lexicon");

  let manager = LexiconManager::with_cache_dir(&cache_dir).unwrap();
  assert!(cache_dir.is_dir(), "cache dir should be created");
  assert_eq!(manager.lexicon_path(), Some(cache_dir.join(LEXICON_FILE_NAME).as_path()));

  let lexicon = manager.load().unwrap();
  assert!(lexicon.lookup("octopi").is_none());
  assert!(lexicon.lookup("the").is_some());
}

#[test]
fn cache_dir_with_lexicon_file_is_loaded() {
  let dir = TempDir::new().unwrap();
  fs::write(dir.path().join(LEXICON_FILE_NAME), USER_LEXICON).unwrap();

  let manager = LexiconManager::with_cache_dir(dir.path()).unwrap();
  let lexicon = manager.load().unwrap();
  assert_eq!(lexicon.lookup("OCTOPI").unwrap().lemma, "octopus");
}

#[test]
fn malformed_file_error_is_cached() {
  let dir = TempDir::new().unwrap();
  let path = dir.path().join("broken.tsv");
  fs::write(&path, "ok\tNOUN\tNN\tok\nbroken line\n").unwrap();

  let manager = LexiconManager::from_local_path(&path).unwrap();

  let first = manager.load().unwrap_err();
  assert!(matches!(first, LexiconError::Parse { line: 2, .. }), "unexpected error: {first:?}");

  // fixing the file does not change the cached result
  fs::write(&path, "ok\tNOUN\tNN\tok\n").unwrap();
  let second = manager.load().unwrap_err();
  assert_eq!(first.to_string(), second.to_string());
}

#[test]
fn removed_local_file_is_reported_on_load() {
  let dir = TempDir::new().unwrap();
  let path = dir.path().join("gone.tsv");
  fs::write(&path, USER_LEXICON).unwrap();

  let manager = LexiconManager::from_local_path(&path).unwrap();
  fs::remove_file(&path).unwrap();

  let err = manager.load().unwrap_err();
  assert!(matches!(err, LexiconError::LexiconNotFound(_)));
}

#[test]
fn loaded_lexicon_is_shared() {
  let dir = TempDir::new().unwrap();
  let manager = LexiconManager::with_cache_dir(dir.path()).unwrap();

  let a = manager.load().unwrap();
  let b = manager.load().unwrap();
  assert!(Arc::ptr_eq(&a, &b));
}

/// Loads from the OS cache directory.
///
/// Depends on the machine's cache directory, so excluded from normal runs:
/// ```bash
/// cargo test -p morphe --test lexicon_tests -- --ignored
/// ```
#[test]
#[ignore = "touches the user's cache directory"]
fn load_from_default_cache() {
  let manager = LexiconManager::with_default_cache().unwrap();
  let lexicon = manager.load().unwrap();
  assert!(!lexicon.is_empty());
}
