//! Affix tables
//!
//! Both tables are scanned front to back and the first candidate that passes the
//! length guard wins, so the order below is part of the observable output
//! (e.g. `"s"` sits before `"es"`, so `classes` splits as `classe` + `s`).

/// Candidate prefixes, in match order.
pub const PREFIXES: &[&str] = &[
  "un", "re", "in", "im", "dis", "pre", "post", "anti", "auto", "bi", "co", "de", "en", "ex",
  "inter", "mis", "non", "over", "semi", "sub", "super", "trans", "under",
];

/// Candidate suffixes, in match order.
pub const SUFFIXES: &[&str] = &[
  "ing", "ed", "ly", "er", "est", "s", "es", "ment", "ness", "ful", "less", "able", "ible", "al",
  "ial", "ic", "ical", "ious", "ous", "ive", "ative", "ize", "ise", "fy", "en",
];

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn table_sizes() {
    assert_eq!(PREFIXES.len(), 23);
    assert_eq!(SUFFIXES.len(), 25);
  }

  #[test]
  fn short_suffix_precedes_its_extension() {
    let pos = |s: &str| SUFFIXES.iter().position(|x| *x == s).unwrap();
    assert!(pos("s") < pos("es"));
    assert!(pos("al") < pos("ical"));
    assert!(pos("ive") < pos("ative"));
  }

  #[test]
  fn affixes_are_lowercase_ascii() {
    for affix in PREFIXES.iter().chain(SUFFIXES) {
      assert!(affix.chars().all(|c| c.is_ascii_lowercase()), "{affix}");
    }
  }
}
