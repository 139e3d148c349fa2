//! Tagger integration tests
//!
//! Drive `RuleTagger` through the `Tagger` trait object, the way the analyzer uses it.

use std::sync::Arc;

use morphe::lexicon::{LexEntry, Lexicon};
use morphe::models::{Token, UPos};
use morphe::tagger::{RuleTagger, Tagger};

fn tagger() -> Arc<dyn Tagger> {
  Arc::new(RuleTagger::builtin())
}

fn texts(tokens: &[Token]) -> Vec<&str> {
  tokens.iter().map(|t| t.text.as_str()).collect()
}

#[test]
fn tokens_keep_surface_order() {
  let tokens = tagger().tag("Hello, world! Don't panic...").unwrap();
  assert_eq!(texts(&tokens), ["Hello", ",", "world", "!", "Do", "n't", "panic", "..."]);
}

#[test]
fn punctuation_tags() {
  let tokens = tagger().tag("(Yes), \"no\": maybe...").unwrap();
  let tags: Vec<_> = tokens.iter().map(|t| (t.text.as_str(), t.tag.as_str())).collect();
  assert_eq!(
    tags,
    [
      ("(", "-LRB-"),
      ("Yes", "UH"),
      (")", "-RRB-"),
      (",", ","),
      ("\"", "``"),
      ("no", "DT"),
      ("\"", "``"),
      (":", ":"),
      ("maybe", "RB"),
      ("...", "."),
    ]
  );
  let words = ["Yes", "no", "maybe"];
  assert!(tokens.iter().filter(|t| !words.contains(&t.text.as_str())).all(|t| t.pos == UPos::Punct));
}

#[test]
fn every_token_has_lemma_and_tag() {
  let text = "The quick brown fox jumped over 2 lazy dogs, didn't it?";
  for token in tagger().tag(text).unwrap() {
    assert!(!token.text.is_empty());
    assert!(!token.lemma.is_empty(), "{token:?}");
    assert!(!token.tag.is_empty(), "{token:?}");
  }
}

#[test]
fn proper_nouns_keep_case() {
  let tokens = tagger().tag("I met Alice in Berlin").unwrap();
  let proper: Vec<_> =
    tokens.iter().filter(|t| t.pos == UPos::Propn).map(|t| t.lemma.as_str()).collect();
  assert_eq!(proper, ["Alice", "Berlin"]);
}

#[test]
fn acronyms_are_proper_nouns_even_sentence_initially() {
  let tokens = tagger().tag("NASA launched rockets").unwrap();
  assert_eq!(tokens[0].pos, UPos::Propn);
  assert_eq!(tokens[1].tag, "VBD");
  assert_eq!(tokens[1].lemma, "launch");
}

#[test]
fn third_person_verbs_after_subject() {
  let tokens = tagger().tag("She walks and they walk").unwrap();
  assert_eq!(tokens[1].tag, "VBZ");
  assert_eq!(tokens[1].lemma, "walk");
  assert_eq!(tokens[4].tag, "VBP");
}

#[test]
fn morph_features_are_pipe_separated() {
  let tokens = tagger().tag("The cats").unwrap();
  assert_eq!(tokens[0].morph, "Definite=Def|PronType=Art");
  assert_eq!(tokens[1].morph, "Number=Plur");
}

#[test]
fn stop_word_flags() {
  let tokens = tagger().tag("It is an octopus").unwrap();
  let flags: Vec<_> = tokens.iter().map(|t| t.is_stop).collect();
  assert_eq!(flags, [true, true, true, false]);
}

#[test]
fn custom_lexicon_overrides_heuristics() {
  let mut lexicon = Lexicon::builtin();
  lexicon.insert("ferris", LexEntry::new(UPos::Propn, "NNP", "Ferris", "Number=Sing"));
  let tagger: Arc<dyn Tagger> = Arc::new(RuleTagger::new(Arc::new(lexicon)));

  let tokens = tagger.tag("ferris swims").unwrap();
  assert_eq!(tokens[0].pos, UPos::Propn);
  assert_eq!(tokens[0].lemma, "Ferris");
  assert_eq!(tokens[1].tag, "VBZ");
}

#[test]
fn tagger_is_shareable_across_threads() {
  let tagger = tagger();
  let handles: Vec<_> = (0..4)
    .map(|_| {
      let tagger = Arc::clone(&tagger);
      std::thread::spawn(move || tagger.tag("Threads share one tagger").unwrap().len())
    })
    .collect();

  for handle in handles {
    assert_eq!(handle.join().unwrap(), 4);
  }
}
