//! crates/morphe/tests/integration_test.rs
//!
//! End-to-end integration test.
//! Verifies the entire flow: Load lexicon -> Build tagger -> Analyze text ->
//! Verify tags and morpheme breakdowns.

use std::fs;
use std::sync::Arc;

use tempfile::TempDir;

use morphe::lexicon::LexiconManager;
use morphe::models::{MorphemeKind, TokenAnalysis, UPos};
use morphe::morpheme::analyze_morphemes;
use morphe::service::MorphemeAnalyzer;
use morphe::tagger::RuleTagger;

fn analyzer() -> MorphemeAnalyzer {
  MorphemeAnalyzer::new(Arc::new(RuleTagger::builtin()))
}

fn breakdowns(result: &[TokenAnalysis]) -> Vec<String> {
  result.iter().map(TokenAnalysis::breakdown).collect()
}

#[test]
fn sentence_end_to_end() {
  let result = analyzer().analyze("The cats were running happily.").unwrap();

  let texts: Vec<_> = result.iter().map(|a| a.text.as_str()).collect();
  assert_eq!(texts, ["The", "cats", "were", "running", "happily", "."]);
  assert_eq!(breakdowns(&result), ["the", "cat-s", "were", "runn-ing", "happi-ly", "."]);

  assert_eq!(result[1].pos, UPos::Noun);
  assert_eq!(result[1].lemma, "cat");
  assert!(result[0].is_stop);
  assert!(!result[1].is_stop);
}

#[test]
fn segmenter_scenarios() {
  let cases = [
    ("disagreement", vec!["dis", "agree", "ment"]),
    ("unhappiness", vec!["un", "happines", "s"]),
    ("cats", vec!["cat", "s"]),
    ("the", vec!["the"]),
    ("a", vec!["a"]),
    ("running", vec!["runn", "ing"]),
    ("classes", vec!["classe", "s"]),
  ];

  for (word, expected) in cases {
    let texts: Vec<_> = analyze_morphemes(word).into_iter().map(|m| m.text).collect();
    assert_eq!(texts, expected, "{word}");
  }
}

#[test]
fn every_token_has_one_to_three_lowercase_morphemes() {
  let text = "Unbelievably, the REWRITTEN manuscripts weren't co-authored by 3 professors in 2021!";
  for analysis in analyzer().analyze(text).unwrap() {
    let n = analysis.morphemes.len();
    assert!((1..=3).contains(&n), "{analysis:?}");
    for morpheme in &analysis.morphemes {
      assert_eq!(morpheme.text, morpheme.text.to_lowercase());
    }
    // prefix first, suffix last
    let kinds: Vec<_> = analysis.morphemes.iter().map(|m| m.kind).collect();
    assert_eq!(kinds.iter().filter(|k| **k == MorphemeKind::Root).count(), 1);
    if n == 3 {
      assert_eq!(kinds, [MorphemeKind::Prefix, MorphemeKind::Root, MorphemeKind::Suffix]);
    }
  }
}

#[test]
fn contractions_and_punctuation_are_single_roots() {
  let result = analyzer().analyze("Don't stop!").unwrap();
  assert_eq!(breakdowns(&result), ["do", "n't", "stop", "!"]);
  for analysis in &result {
    assert_eq!(analysis.morphemes.len(), 1);
    assert!(analysis.morphemes[0].is_root());
  }
}

#[test]
fn empty_text_gives_empty_result() {
  assert!(analyzer().analyze("").unwrap().is_empty());
  assert!(analyzer().analyze(" \t\n").unwrap().is_empty());
}

#[test]
fn analyzer_from_user_lexicon() {
  let dir = TempDir::new().unwrap();
  let path = dir.path().join("en.tsv");
  fs::write(&path, "octopi\tNOUN\tNNS\toctopus\tNumber=Plur\n").unwrap();

  let manager = LexiconManager::from_local_path(&path).unwrap();
  let analyzer = MorphemeAnalyzer::from_lexicon_manager(&manager).unwrap();

  let result = analyzer.analyze("Two octopi").unwrap();
  assert_eq!(result[1].lemma, "octopus");
  assert_eq!(result[1].tag, "NNS");
  assert_eq!(result[1].breakdown(), "octopi");
}

#[test]
fn serialized_shape() {
  let result = analyzer().analyze("Cats").unwrap();
  let json = serde_json::to_value(&result).unwrap();

  assert_eq!(
    json,
    serde_json::json!([{
      "text": "Cats",
      "lemma": "cat",
      "pos": "NOUN",
      "tag": "NNS",
      "morph": "Number=Plur",
      "is_stop": false,
      "morphemes": [
        {"type": "root", "text": "cat"},
        {"type": "suffix", "text": "s"}
      ]
    }])
  );
}
