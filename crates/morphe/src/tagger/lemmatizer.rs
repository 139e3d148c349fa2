//! Inflectional lemma rules
//!
//! Rule tables are tried in order; the first suffix that leaves a usable stem wins.
//! Input is expected to be lowercase.

const VOWELS: &[char] = &['a', 'e', 'i', 'o', 'u'];

/// Noun plural rules: (suffix, replacement)
const NOUN_RULES: &[(&str, &str)] = &[
  ("ies", "y"),
  ("sses", "ss"),
  ("ches", "ch"),
  ("shes", "sh"),
  ("xes", "x"),
  ("zes", "z"),
  ("s", ""),
];

/// Third person singular rules: (suffix, replacement)
const VERB_PRESENT_RULES: &[(&str, &str)] = &[
  ("ies", "y"),
  ("sses", "ss"),
  ("ches", "ch"),
  ("shes", "sh"),
  ("xes", "x"),
  ("zes", "z"),
  ("oes", "o"),
  ("s", ""),
];

/// Lemma of a plural noun (`cities` → `city`, `boxes` → `box`).
pub fn noun_lemma(word: &str) -> String {
  if word.ends_with("ss") || word.ends_with("us") || word.ends_with("is") {
    return word.to_string();
  }
  apply_rules(word, NOUN_RULES).unwrap_or_else(|| word.to_string())
}

/// Lemma of an inflected verb form (`tries`, `tried`, `running`, `hoped`).
pub fn verb_lemma(word: &str) -> String {
  if let Some(stem) = word.strip_suffix("ied").filter(|s| s.len() >= 2) {
    return format!("{stem}y");
  }
  if let Some(stem) = word.strip_suffix("ing").or_else(|| word.strip_suffix("ed")) {
    if stem.ends_with('e') && word.ends_with("eed") {
      // agreed → agree
      return format!("{stem}e");
    }
    if has_vowel(stem) {
      return restore_stem(stem);
    }
    return word.to_string();
  }
  if word.ends_with("ss") {
    return word.to_string();
  }
  apply_rules(word, VERB_PRESENT_RULES).unwrap_or_else(|| word.to_string())
}

/// Lemma of a superlative adjective (`biggest` → `big`, `happiest` → `happy`).
pub fn adjective_lemma(word: &str) -> String {
  if let Some(stem) = word.strip_suffix("iest").filter(|s| s.len() >= 2) {
    return format!("{stem}y");
  }
  match word.strip_suffix("est") {
    Some(stem) if has_vowel(stem) => restore_stem(stem),
    _ => word.to_string(),
  }
}

fn apply_rules(word: &str, rules: &[(&str, &str)]) -> Option<String> {
  rules.iter().find_map(|(suffix, replacement)| {
    word
      .strip_suffix(suffix)
      .filter(|stem| !stem.is_empty())
      .map(|stem| format!("{stem}{replacement}"))
  })
}

/// Undoes consonant doubling (`runn` → `run`) or restores a silent `e` on
/// one-syllable consonant-vowel-consonant stems (`writ` → `write`).
fn restore_stem(stem: &str) -> String {
  let chars: Vec<char> = stem.chars().collect();
  let n = chars.len();

  if n >= 3 && chars[n - 1] == chars[n - 2] && is_consonant(chars[n - 1]) {
    if matches!(chars[n - 1], 'l' | 's' | 'z' | 'f') {
      return stem.to_string();
    }
    return chars[..n - 1].iter().collect();
  }

  if n >= 3
    && syllables(&chars) == 1
    && is_consonant(chars[n - 3])
    && is_vowel(chars[n - 2])
    && is_consonant(chars[n - 1])
    && !matches!(chars[n - 1], 'w' | 'x' | 'y')
  {
    return format!("{stem}e");
  }

  stem.to_string()
}

fn is_vowel(c: char) -> bool {
  VOWELS.contains(&c)
}

fn is_consonant(c: char) -> bool {
  c.is_alphabetic() && !is_vowel(c)
}

fn has_vowel(stem: &str) -> bool {
  stem.chars().any(|c| is_vowel(c) || c == 'y')
}

/// Number of vowel groups
fn syllables(chars: &[char]) -> usize {
  let mut count = 0;
  let mut in_vowel = false;
  for &c in chars {
    let vowel = is_vowel(c);
    if vowel && !in_vowel {
      count += 1;
    }
    in_vowel = vowel;
  }
  count
}
