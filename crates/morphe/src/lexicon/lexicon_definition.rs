//! Lexicon Definition
//!
//! The lexicon is the tagger's model: a map from lowercased word forms to their
//! part of speech, fine tag, lemma and morphological features. It consists of the
//! built-in English table, optionally overridden by a user TSV file:
//!
//! ```text
//! # form   POS    TAG   lemma    [morph]
//! octopi   NOUN   NNS   octopus  Number=Plur
//! ```

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use tracing::debug;

use super::builtin::BUILTIN_ENTRIES;
use crate::errors::LexiconError;
use crate::models::UPos;

/// Lexical information for one word form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexEntry {
  /// Coarse part of speech
  pub pos: UPos,

  /// Fine-grained (Penn Treebank) tag
  pub tag: String,

  /// Dictionary form
  pub lemma: String,

  /// Morphological features (may be empty)
  pub morph: String,
}

impl LexEntry {
  /// Constructor for LexEntry
  pub fn new(
    pos: UPos,
    tag: impl Into<String>,
    lemma: impl Into<String>,
    morph: impl Into<String>,
  ) -> Self {
    Self { pos, tag: tag.into(), lemma: lemma.into(), morph: morph.into() }
  }
}

/// Word form → [`LexEntry`] table
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
  entries: HashMap<String, LexEntry>,
}

impl Lexicon {
  /// Empty lexicon. Every word is left to the tagger's shape rules.
  pub fn empty() -> Self {
    Self::default()
  }

  /// Built-in closed-class vocabulary and irregular forms
  pub fn builtin() -> Self {
    let entries = BUILTIN_ENTRIES
      .iter()
      .map(|&(form, pos, tag, lemma, morph)| (form.to_string(), LexEntry::new(pos, tag, lemma, morph)))
      .collect();

    Self { entries }
  }

  /// Built-in lexicon overridden by the entries of the TSV file at `path`
  pub fn with_user_entries<P: AsRef<Path>>(path: P) -> Result<Self, LexiconError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)
      .map_err(|e| LexiconError::Read { path: path.to_path_buf(), source: Arc::new(e) })?;

    let user_entries = Self::parse_user_lexicon(path, &text)?;
    debug!(path = %path.display(), entries = user_entries.len(), "user lexicon parsed");

    let mut lexicon = Self::builtin();
    lexicon.extend(user_entries);
    Ok(lexicon)
  }

  /// Parses user lexicon text
  ///
  /// `path` is only used for error reporting. Blank lines and lines starting
  /// with `#` are skipped; forms are lowercased.
  pub fn parse_user_lexicon(
    path: &Path,
    text: &str,
  ) -> Result<Vec<(String, LexEntry)>, LexiconError> {
    let mut entries = Vec::new();

    for (idx, raw) in text.lines().enumerate() {
      let line = raw.trim_end_matches('\r');
      if line.trim().is_empty() || line.trim_start().starts_with('#') {
        continue;
      }

      let parse_err = |reason: String| LexiconError::Parse {
        path: path.to_path_buf(),
        line: idx + 1,
        reason,
      };

      let cols: Vec<&str> = line.split('\t').map(str::trim).collect();
      if cols.len() < 4 || cols.len() > 5 {
        return Err(parse_err(format!("expected 4 or 5 tab-separated columns, got {}", cols.len())));
      }

      let form = cols[0];
      if form.is_empty() {
        return Err(parse_err("empty form".to_string()));
      }
      let pos = cols[1].parse::<UPos>().map_err(parse_err)?;
      let tag = cols[2];
      if tag.is_empty() {
        return Err(parse_err("empty tag".to_string()));
      }
      let lemma = cols[3];
      if lemma.is_empty() {
        return Err(parse_err("empty lemma".to_string()));
      }
      let morph = cols.get(4).copied().unwrap_or("");

      entries.push((form.to_lowercase(), LexEntry::new(pos, tag, lemma, morph)));
    }

    Ok(entries)
  }

  /// Inserts or replaces an entry. The form is lowercased.
  pub fn insert(&mut self, form: &str, entry: LexEntry) {
    self.entries.insert(form.to_lowercase(), entry);
  }

  /// Case-insensitive lookup
  pub fn lookup(&self, form: &str) -> Option<&LexEntry> {
    self.entries.get(&form.to_lowercase())
  }

  /// Number of distinct forms
  pub fn len(&self) -> usize {
    self.entries.len()
  }

  /// `true` when the lexicon has no entries
  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }
}

impl Extend<(String, LexEntry)> for Lexicon {
  fn extend<T: IntoIterator<Item = (String, LexEntry)>>(&mut self, iter: T) {
    for (form, entry) in iter {
      self.insert(&form, entry);
    }
  }
}
