//! Config module

mod constants;
mod env;

pub use constants::{
  BIND_ADDR_ENV, DEFAULT_BIND_ADDR, DEFAULT_LEXICON_SOURCE, LEXICON_ENV, MAX_TEXT_LENGTH,
};
pub use env::{Config, LexiconSource};
