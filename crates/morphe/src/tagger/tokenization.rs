//! Word tokenization
//!
//! Whitespace split, then per chunk:
//! - leading and trailing punctuation peeled off, one token per run of the same char
//! - infix hyphens between letters split out (`well-known` → `well` `-` `known`)
//! - English clitics split off (`don't` → `do` `n't`, `it's` → `it` `'s`)

/// Clitics recognised after the apostrophe (lowercase, apostrophe excluded)
const CLITIC_TAILS: &[&str] = &["s", "re", "ll", "ve", "d", "m"];

/// Splits `text` into surface tokens, left to right.
pub fn tokenize(text: &str) -> Vec<&str> {
  let mut tokens = Vec::new();

  for chunk in text.split_whitespace() {
    if is_clitic(chunk) {
      tokens.push(chunk);
      continue;
    }

    let mut core = chunk;
    while let Some((run, rest)) = peel_leading(core) {
      tokens.push(run);
      core = rest;
    }

    let mut trailing = Vec::new();
    while let Some((rest, run)) = peel_trailing(core) {
      trailing.push(run);
      core = rest;
    }

    if core.is_empty() {
      tokens.extend(trailing.into_iter().rev());
      continue;
    }

    for piece in split_hyphens(core) {
      match split_clitic(piece) {
        Some((stem, clitic)) => {
          tokens.push(stem);
          tokens.push(clitic);
        }
        None => tokens.push(piece),
      }
    }

    tokens.extend(trailing.into_iter().rev());
  }

  tokens
}

/// `true` when `word` is a bare clitic such as `'s` or `n't`
pub fn is_clitic(word: &str) -> bool {
  let lower = word.to_lowercase().replace('\u{2019}', "'");
  lower == "n't" || lower.strip_prefix('\'').is_some_and(|tail| CLITIC_TAILS.contains(&tail))
}

fn is_apostrophe(c: char) -> bool {
  c == '\'' || c == '\u{2019}'
}

fn peel_leading(s: &str) -> Option<(&str, &str)> {
  let first = s.chars().next()?;
  if first.is_alphanumeric() {
    return None;
  }
  let run: usize = s.chars().take_while(|&c| c == first).map(char::len_utf8).sum();
  Some((&s[..run], &s[run..]))
}

fn peel_trailing(s: &str) -> Option<(&str, &str)> {
  let last = s.chars().next_back()?;
  if last.is_alphanumeric() {
    return None;
  }
  let run: usize = s.chars().rev().take_while(|&c| c == last).map(char::len_utf8).sum();
  let split = s.len() - run;
  Some((&s[..split], &s[split..]))
}

/// Splits on `-` when both neighbours are letters.
fn split_hyphens(word: &str) -> Vec<&str> {
  let mut pieces = Vec::new();
  let mut start = 0;
  let mut prev: Option<char> = None;
  let mut iter = word.char_indices().peekable();

  while let Some((idx, c)) = iter.next() {
    let next = iter.peek().map(|&(_, n)| n);
    let infix = c == '-'
      && prev.is_some_and(char::is_alphabetic)
      && next.is_some_and(char::is_alphabetic);

    if infix {
      pieces.push(&word[start..idx]);
      pieces.push(&word[idx..idx + 1]);
      start = idx + 1;
    }
    prev = Some(c);
  }

  if start < word.len() || pieces.is_empty() {
    pieces.push(&word[start..]);
  }
  pieces
}

/// Splits a trailing clitic off `word`, returning `(stem, clitic)`.
fn split_clitic(word: &str) -> Option<(&str, &str)> {
  let idx = word.rfind(is_apostrophe)?;
  let apostrophe_len = word[idx..].chars().next().map_or(1, char::len_utf8);
  let tail = word[idx + apostrophe_len..].to_lowercase();

  // n't: the clitic starts one byte before the apostrophe
  if tail == "t" && idx >= 2 && word[..idx].ends_with(['n', 'N']) {
    return Some((&word[..idx - 1], &word[idx - 1..]));
  }

  if idx > 0 && CLITIC_TAILS.contains(&tail.as_str()) {
    return Some((&word[..idx], &word[idx..]));
  }

  None
}
