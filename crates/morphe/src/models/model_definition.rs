//! Data Model Definition
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Coarse part-of-speech tag (Universal Dependencies tag set).
///
/// Serialized upper-case (`"NOUN"`, `"PROPN"`, ...), which is also the form
/// accepted by [`FromStr`] when reading a user lexicon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum UPos {
  /// Adjective
  Adj,
  /// Adposition
  Adp,
  /// Adverb
  Adv,
  /// Auxiliary verb
  Aux,
  /// Coordinating conjunction
  Cconj,
  /// Determiner
  Det,
  /// Interjection
  Intj,
  /// Noun
  Noun,
  /// Numeral
  Num,
  /// Particle
  Part,
  /// Pronoun
  Pron,
  /// Proper noun
  Propn,
  /// Punctuation
  Punct,
  /// Subordinating conjunction
  Sconj,
  /// Symbol
  Sym,
  /// Verb
  Verb,
  /// Other
  X,
}

impl UPos {
  /// Returns the upper-case tag name.
  pub fn as_str(&self) -> &'static str {
    match self {
      UPos::Adj => "ADJ",
      UPos::Adp => "ADP",
      UPos::Adv => "ADV",
      UPos::Aux => "AUX",
      UPos::Cconj => "CCONJ",
      UPos::Det => "DET",
      UPos::Intj => "INTJ",
      UPos::Noun => "NOUN",
      UPos::Num => "NUM",
      UPos::Part => "PART",
      UPos::Pron => "PRON",
      UPos::Propn => "PROPN",
      UPos::Punct => "PUNCT",
      UPos::Sconj => "SCONJ",
      UPos::Sym => "SYM",
      UPos::Verb => "VERB",
      UPos::X => "X",
    }
  }
}

impl fmt::Display for UPos {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for UPos {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.to_ascii_uppercase().as_str() {
      "ADJ" => Ok(UPos::Adj),
      "ADP" => Ok(UPos::Adp),
      "ADV" => Ok(UPos::Adv),
      "AUX" => Ok(UPos::Aux),
      "CCONJ" => Ok(UPos::Cconj),
      "DET" => Ok(UPos::Det),
      "INTJ" => Ok(UPos::Intj),
      "NOUN" => Ok(UPos::Noun),
      "NUM" => Ok(UPos::Num),
      "PART" => Ok(UPos::Part),
      "PRON" => Ok(UPos::Pron),
      "PROPN" => Ok(UPos::Propn),
      "PUNCT" => Ok(UPos::Punct),
      "SCONJ" => Ok(UPos::Sconj),
      "SYM" => Ok(UPos::Sym),
      "VERB" => Ok(UPos::Verb),
      "X" => Ok(UPos::X),
      _ => Err(format!("unknown part-of-speech tag: {s}")),
    }
  }
}

/// One tagged token as produced by a [`Tagger`](crate::tagger::Tagger).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
  /// Surface form as it appears in the input
  pub text: String,

  /// Dictionary form
  pub lemma: String,

  /// Coarse part of speech
  pub pos: UPos,

  /// Fine-grained (Penn Treebank) tag
  pub tag: String,

  /// Morphological features, `Key=Value|Key=Value` (may be empty)
  pub morph: String,

  /// Whether the token is a stop word
  pub is_stop: bool,
}

impl Token {
  /// Constructor for Token
  pub fn new(
    text: impl Into<String>,
    lemma: impl Into<String>,
    pos: UPos,
    tag: impl Into<String>,
    morph: impl Into<String>,
    is_stop: bool,
  ) -> Self {
    Self {
      text: text.into(),
      lemma: lemma.into(),
      pos,
      tag: tag.into(),
      morph: morph.into(),
      is_stop,
    }
  }
}

/// Morpheme classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MorphemeKind {
  /// Stripped leading affix
  Prefix,
  /// Residual stem
  Root,
  /// Stripped trailing affix
  Suffix,
}

/// One morpheme of a word
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Morpheme {
  /// Serialized as `type` on the wire
  #[serde(rename = "type")]
  pub kind: MorphemeKind,

  /// Lowercased text assigned to this morpheme
  pub text: String,
}

impl Morpheme {
  /// Prefix morpheme
  pub fn prefix(text: impl Into<String>) -> Self {
    Self { kind: MorphemeKind::Prefix, text: text.into() }
  }

  /// Root morpheme
  pub fn root(text: impl Into<String>) -> Self {
    Self { kind: MorphemeKind::Root, text: text.into() }
  }

  /// Suffix morpheme
  pub fn suffix(text: impl Into<String>) -> Self {
    Self { kind: MorphemeKind::Suffix, text: text.into() }
  }

  /// `true` for a prefix
  pub fn is_prefix(&self) -> bool {
    self.kind == MorphemeKind::Prefix
  }

  /// `true` for a root
  pub fn is_root(&self) -> bool {
    self.kind == MorphemeKind::Root
  }

  /// `true` for a suffix
  pub fn is_suffix(&self) -> bool {
    self.kind == MorphemeKind::Suffix
  }
}

/// Analysis result for a single token
///
/// Field order matches the response body: `text, lemma, pos, tag, morph, is_stop, morphemes`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenAnalysis {
  /// Surface form
  pub text: String,

  /// Dictionary form
  pub lemma: String,

  /// Coarse part of speech
  pub pos: UPos,

  /// Fine-grained tag
  pub tag: String,

  /// Morphological features
  pub morph: String,

  /// Stop word flag
  pub is_stop: bool,

  /// Prefix, root, suffix in that order; never empty
  pub morphemes: Vec<Morpheme>,
}

impl TokenAnalysis {
  /// Combines a token with its morpheme breakdown
  pub fn new(token: Token, morphemes: Vec<Morpheme>) -> Self {
    Self {
      text: token.text,
      lemma: token.lemma,
      pos: token.pos,
      tag: token.tag,
      morph: token.morph,
      is_stop: token.is_stop,
      morphemes,
    }
  }

  /// Morpheme texts joined with `-`, e.g. `re-writ-ing`
  pub fn breakdown(&self) -> String {
    self.morphemes.iter().map(|m| m.text.as_str()).collect::<Vec<_>>().join("-")
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn upos_round_trips_through_str() {
    for pos in [UPos::Adj, UPos::Cconj, UPos::Propn, UPos::X] {
      assert_eq!(pos.as_str().parse::<UPos>().unwrap(), pos);
    }
    assert_eq!("propn".parse::<UPos>().unwrap(), UPos::Propn);
    assert!("NOUNISH".parse::<UPos>().is_err());
  }

  #[test]
  fn token_analysis_serializes_in_wire_order() {
    let token = Token::new("Cats", "cat", UPos::Noun, "NNS", "Number=Plur", false);
    let analysis = TokenAnalysis::new(token, vec![Morpheme::root("cat"), Morpheme::suffix("s")]);

    let json = serde_json::to_string(&analysis).unwrap();
    assert_eq!(
      json,
      r#"{"text":"Cats","lemma":"cat","pos":"NOUN","tag":"NNS","morph":"Number=Plur","is_stop":false,"morphemes":[{"type":"root","text":"cat"},{"type":"suffix","text":"s"}]}"#
    );
  }

  #[test]
  fn breakdown_joins_with_hyphen() {
    let token = Token::new("rewriting", "rewrite", UPos::Verb, "VBG", "VerbForm=Ger", false);
    let analysis = TokenAnalysis::new(
      token,
      vec![Morpheme::prefix("re"), Morpheme::root("writ"), Morpheme::suffix("ing")],
    );
    assert_eq!(analysis.breakdown(), "re-writ-ing");
  }

  #[test]
  fn morpheme_kind_helpers() {
    assert!(Morpheme::prefix("re").is_prefix());
    assert!(Morpheme::root("do").is_root());
    assert!(Morpheme::suffix("ing").is_suffix());
    assert!(!Morpheme::root("do").is_suffix());
  }
}
