//! Affix-stripping morpheme segmenter
//!
//! Splits a word into at most one prefix, a root and at most one suffix using the
//! fixed tables in [`affixes`](super::affixes). This is a heuristic, not a
//! morphological analysis: `running` becomes `runn` + `ing`.

use tracing::trace;

use super::affixes::{PREFIXES, SUFFIXES};
use crate::models::{Morpheme, Token, TokenAnalysis};

/// Breaks one surface form into morphemes.
///
/// 1. Lowercase the surface form.
/// 2. Words of two characters or less, or containing any non-alphabetic
///    character, are returned as a single root.
/// 3. Strip the first prefix (table order) that leaves at least two characters.
/// 4. Strip the first suffix (table order) from the remainder that leaves at
///    least two characters.
///
/// Always returns between one and three morphemes, all lowercase.
///
/// ```
/// use morphe::morpheme::analyze_morphemes;
///
/// let texts: Vec<_> = analyze_morphemes("Rewriting").into_iter().map(|m| m.text).collect();
/// assert_eq!(texts, ["re", "writ", "ing"]);
/// ```
pub fn analyze_morphemes(surface: &str) -> Vec<Morpheme> {
  let lowered = surface.to_lowercase();

  if char_len(&lowered) <= 2 || !lowered.chars().all(char::is_alphabetic) {
    return vec![Morpheme::root(lowered)];
  }

  let mut morphemes = Vec::with_capacity(3);
  let mut word = lowered.as_str();

  if let Some(prefix) = first_fit(PREFIXES, word, |w, p| w.starts_with(p)) {
    morphemes.push(Morpheme::prefix(prefix));
    word = &word[prefix.len()..];
  }

  match first_fit(SUFFIXES, word, |w, s| w.ends_with(s)) {
    Some(suffix) => {
      morphemes.push(Morpheme::root(&word[..word.len() - suffix.len()]));
      morphemes.push(Morpheme::suffix(suffix));
    }
    None => morphemes.push(Morpheme::root(word)),
  }

  // Never return an empty breakdown.
  if morphemes.is_empty() {
    morphemes.push(Morpheme::root(lowered.as_str()));
  }

  trace!(surface, morphemes = morphemes.len(), "segmented");
  morphemes
}

/// Segments every token, keeping the tagger's order.
pub fn analyze_tokens<I>(tokens: I) -> Vec<TokenAnalysis>
where
  I: IntoIterator<Item = Token>,
{
  tokens
    .into_iter()
    .map(|token| {
      let morphemes = analyze_morphemes(&token.text);
      TokenAnalysis::new(token, morphemes)
    })
    .collect()
}

/// First affix in table order that matches `word` and leaves a remainder of two or more chars.
fn first_fit(
  table: &'static [&'static str],
  word: &str,
  matches: impl Fn(&str, &str) -> bool,
) -> Option<&'static str> {
  let word_len = char_len(word);
  table.iter().copied().find(|affix| matches(word, affix) && word_len > char_len(affix) + 1)
}

fn char_len(s: &str) -> usize {
  s.chars().count()
}
