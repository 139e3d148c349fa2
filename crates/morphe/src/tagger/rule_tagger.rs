//! Lexicon + heuristic English tagger
//!
//! - Immutable after construction, `Send + Sync`
//! - Lexicon hit wins; unknown words are tagged from their shape, suffix and
//!   the previous token

use std::collections::HashSet;
use std::sync::Arc;

use stop_words::{LANGUAGE, get};
use tracing::debug;

use super::Tagger;
use super::lemmatizer::{adjective_lemma, noun_lemma, verb_lemma};
use super::tokenization::{is_clitic, tokenize};
use crate::errors::TaggerError;
use crate::lexicon::{LexEntry, Lexicon};
use crate::models::{Token, UPos};

/// Suffixes that mark an unknown word as an adjective
const ADJECTIVE_SUFFIXES: &[&str] =
  &["ful", "less", "ous", "ive", "able", "ible", "ical", "ic", "ish"];

/// Suffixes that mark an unknown word as a noun
const NOUN_SUFFIXES: &[&str] =
  &["tion", "sion", "ment", "ness", "ity", "ism", "ance", "ence", "ship", "hood"];

/// Rule-based tagger over a shared [`Lexicon`]
#[derive(Debug, Clone)]
pub struct RuleTagger {
  lexicon: Arc<Lexicon>,
  stop_words: HashSet<String>,
}

/// Tagging result for one token before it becomes a [`Token`]
struct Tagged {
  pos: UPos,
  tag: String,
  lemma: String,
  morph: String,
}

impl Tagged {
  fn new(pos: UPos, tag: &str, lemma: impl Into<String>, morph: &str) -> Self {
    Self { pos, tag: tag.to_string(), lemma: lemma.into(), morph: morph.to_string() }
  }
}

impl RuleTagger {
  /// Constructs a tagger from a shared lexicon (`LexiconManager::load()`).
  pub fn new(lexicon: Arc<Lexicon>) -> Self {
    let stop_words = get(LANGUAGE::English)
      .iter()
      .map(|s| s.to_string())
      .chain(["n't", "'s", "'re", "'ll", "'ve", "'d", "'m"].iter().map(|s| s.to_string()))
      .collect();

    Self { lexicon, stop_words }
  }

  /// Tagger over the built-in lexicon
  pub fn builtin() -> Self {
    Self::new(Arc::new(Lexicon::builtin()))
  }

  /// Shared lexicon
  pub fn lexicon(&self) -> &Arc<Lexicon> {
    &self.lexicon
  }

  /// Case-insensitive stop word check (typographic apostrophes are normalised)
  pub fn is_stop_word(&self, word: &str) -> bool {
    let lower = word.to_lowercase().replace('\u{2019}', "'");
    self.stop_words.contains(&lower)
  }

  fn tag_word(&self, word: &str, prev: Option<&Token>, sentence_start: bool) -> Tagged {
    if !word.chars().any(char::is_alphanumeric) {
      return tag_symbol(word);
    }

    let lower = word.to_lowercase().replace('\u{2019}', "'");

    if let Some(entry) = self.lexicon.lookup(&lower) {
      return tag_known(&lower, entry, prev);
    }

    if let Some(tagged) = tag_number(word) {
      return tagged;
    }

    let first_upper = word.chars().next().is_some_and(char::is_uppercase);
    let acronym = word.chars().count() > 1 && word.chars().all(|c| !c.is_lowercase());
    if acronym || (first_upper && !sentence_start) {
      return Tagged::new(UPos::Propn, "NNP", word, "Number=Sing");
    }

    tag_unknown(&lower, prev)
  }
}

impl Tagger for RuleTagger {
  fn tag(&self, text: &str) -> Result<Vec<Token>, TaggerError> {
    if text.contains('\0') {
      return Err(TaggerError::InvalidInput { reason: "text contains a NUL byte".to_string() });
    }

    let words = tokenize(text);
    let mut tokens: Vec<Token> = Vec::with_capacity(words.len());
    let mut sentence_start = true;

    for word in words {
      let tagged = self.tag_word(word, tokens.last(), sentence_start);

      sentence_start = match tagged.tag.as_str() {
        "." => true,
        "``" | "-LRB-" => sentence_start,
        _ => false,
      };

      let is_stop = self.is_stop_word(word);
      tokens.push(Token::new(word, tagged.lemma, tagged.pos, tagged.tag, tagged.morph, is_stop));
    }

    debug!(text_len = text.len(), token_count = tokens.len(), "tagged");
    Ok(tokens)
  }
}

/// Punctuation and symbols
fn tag_symbol(word: &str) -> Tagged {
  let (pos, tag, morph) = match word {
    "." | "!" | "?" | "..." | "!!" | "??" | "\u{2026}" => (UPos::Punct, ".", "PunctType=Peri"),
    "," => (UPos::Punct, ",", "PunctType=Comm"),
    ":" | ";" | "--" | "\u{2014}" | "\u{2013}" => (UPos::Punct, ":", ""),
    "(" | "[" | "{" => (UPos::Punct, "-LRB-", "PunctSide=Ini|PunctType=Brck"),
    ")" | "]" | "}" => (UPos::Punct, "-RRB-", "PunctSide=Fin|PunctType=Brck"),
    "\"" | "``" | "\u{201c}" => (UPos::Punct, "``", "PunctSide=Ini|PunctType=Quot"),
    "''" | "\u{201d}" | "'" | "\u{2018}" | "\u{2019}" => (UPos::Punct, "''", "PunctType=Quot"),
    "-" => (UPos::Punct, "HYPH", "PunctType=Dash"),
    "&" => (UPos::Cconj, "CC", "ConjType=Cmp"),
    "$" | "\u{20ac}" | "\u{a3}" | "\u{a5}" => (UPos::Sym, "$", ""),
    "%" | "+" | "=" | "<" | ">" | "*" | "/" | "#" | "@" | "^" | "~" | "|" => {
      (UPos::Sym, "SYM", "")
    }
    _ if word.chars().all(|c| matches!(c, '.' | '!' | '?')) => (UPos::Punct, ".", "PunctType=Peri"),
    _ => (UPos::Punct, "NFP", ""),
  };
  Tagged::new(pos, tag, word, morph)
}

/// Lexicon hit, with the few context fixes a single entry per form cannot express
fn tag_known(lower: &str, entry: &LexEntry, prev: Option<&Token>) -> Tagged {
  let after_subject = prev.is_some_and(is_subject);

  // it's / that's / he's → be
  if lower == "'s" && prev.is_some_and(|p| matches!(p.pos, UPos::Pron | UPos::Det | UPos::Sconj)) {
    return Tagged::new(
      UPos::Aux,
      "VBZ",
      "be",
      "Mood=Ind|Number=Sing|Person=3|Tense=Pres|VerbForm=Fin",
    );
  }

  // "I like", "they like"
  if lower == "like" && after_subject {
    return Tagged::new(UPos::Verb, "VBP", "like", "Tense=Pres|VerbForm=Fin");
  }

  // "that" is SCONJ after a verb, DET elsewhere
  if lower == "that" && !prev.is_some_and(|p| matches!(p.pos, UPos::Verb | UPos::Aux)) {
    return Tagged::new(UPos::Det, "DT", "that", "Number=Sing|PronType=Dem");
  }

  let lemma = if entry.pos == UPos::Propn || entry.lemma == "I" {
    entry.lemma.clone()
  } else {
    entry.lemma.to_lowercase()
  };

  Tagged::new(entry.pos, &entry.tag, lemma, &entry.morph)
}

/// Numerals (`42`, `3.14`, `1,000`) and digit ordinals (`21st`)
fn tag_number(word: &str) -> Option<Tagged> {
  let first = word.chars().next()?;
  if !first.is_ascii_digit() {
    return None;
  }

  if word.chars().all(|c| c.is_ascii_digit() || matches!(c, '.' | ',' | ':' | '/' | '-')) {
    return Some(Tagged::new(UPos::Num, "CD", word, "NumType=Card"));
  }

  let lower = word.to_lowercase();
  let digits = lower.trim_end_matches(|c: char| c.is_ascii_alphabetic());
  let tail = &lower[digits.len()..];
  if digits.chars().all(|c| c.is_ascii_digit()) && matches!(tail, "st" | "nd" | "rd" | "th") {
    return Some(Tagged::new(UPos::Adj, "JJ", lower, "Degree=Pos|NumType=Ord"));
  }

  None
}

/// Shape, suffix and left-context rules for words the lexicon does not know.
/// `w` is lowercase.
fn tag_unknown(w: &str, prev: Option<&Token>) -> Tagged {
  let len = w.chars().count();
  let prev_tag = prev.map(|p| p.tag.as_str()).unwrap_or("");
  let after_det = prev.is_some_and(|p| {
    matches!(p.pos, UPos::Det | UPos::Adj | UPos::Num) || p.tag == "PRP$" || p.tag == "POS"
  });
  let after_to = prev.is_some_and(|p| p.tag == "TO");
  let after_modal = prev_tag == "MD" || prev.is_some_and(|p| p.lemma == "not" && p.tag == "RB");
  let after_have = prev.is_some_and(|p| p.lemma == "have");
  let after_be = prev.is_some_and(|p| p.lemma == "be");
  let after_subject = prev.is_some_and(is_subject);
  let noun_like = NOUN_SUFFIXES.iter().any(|s| w.ends_with(s));

  if (after_to || after_modal) && !after_det && !noun_like {
    return Tagged::new(UPos::Verb, "VB", w, "VerbForm=Inf");
  }

  if len > 4 && w.ends_with("ing") {
    if after_det {
      return Tagged::new(UPos::Noun, "NN", w, "Number=Sing");
    }
    return Tagged::new(
      UPos::Verb,
      "VBG",
      verb_lemma(w),
      "Aspect=Prog|Tense=Pres|VerbForm=Part",
    );
  }

  if len > 4 && w.ends_with("ed") {
    if after_have || after_be {
      return Tagged::new(
        UPos::Verb,
        "VBN",
        verb_lemma(w),
        "Aspect=Perf|Tense=Past|VerbForm=Part",
      );
    }
    if after_det {
      return Tagged::new(UPos::Adj, "JJ", w, "Degree=Pos");
    }
    return Tagged::new(UPos::Verb, "VBD", verb_lemma(w), "Tense=Past|VerbForm=Fin");
  }

  if len > 4 && w.ends_with("ly") && !after_det {
    return Tagged::new(UPos::Adv, "RB", w, "");
  }

  if len > 5 && w.ends_with("est") {
    return Tagged::new(UPos::Adj, "JJS", adjective_lemma(w), "Degree=Sup");
  }

  if len > 4 && ADJECTIVE_SUFFIXES.iter().any(|s| w.ends_with(s)) {
    return Tagged::new(UPos::Adj, "JJ", w, "Degree=Pos");
  }

  if noun_like {
    return Tagged::new(UPos::Noun, "NN", w, "Number=Sing");
  }

  let plural_shape = len > 3
    && w.ends_with('s')
    && !w.ends_with("ss")
    && !w.ends_with("us")
    && !w.ends_with("is");

  if plural_shape {
    let third_person_subject = prev.is_some_and(|p| {
      (p.pos == UPos::Pron && p.morph.contains("Person=3") && !p.morph.contains("Number=Plur"))
        || p.pos == UPos::Propn
        || p.tag == "NN"
    });
    if third_person_subject {
      return Tagged::new(
        UPos::Verb,
        "VBZ",
        verb_lemma(w),
        "Number=Sing|Person=3|Tense=Pres|VerbForm=Fin",
      );
    }
    return Tagged::new(UPos::Noun, "NNS", noun_lemma(w), "Number=Plur");
  }

  if after_subject {
    return Tagged::new(UPos::Verb, "VBP", w, "Tense=Pres|VerbForm=Fin");
  }

  Tagged::new(UPos::Noun, "NN", w, "Number=Sing")
}

/// Nominative or caseless personal pronoun (`I`, `you`, `it`, `they`)
fn is_subject(token: &Token) -> bool {
  token.tag == "PRP"
    && !token.morph.contains("Case=Acc")
    && !token.morph.contains("Poss=Yes")
    && !is_clitic(&token.text)
}
