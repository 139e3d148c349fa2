//! lexicon module
mod builtin;
pub mod lexicon_definition;
pub mod lexicon_manager;

/// Re-exports
pub use lexicon_definition::{LexEntry, Lexicon};
pub use lexicon_manager::{LEXICON_FILE_NAME, LexiconManager};
