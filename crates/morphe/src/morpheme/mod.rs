//! morpheme module
pub mod affixes;
pub mod segmenter;

/// Re-exports
pub use affixes::{PREFIXES, SUFFIXES};
pub use segmenter::{analyze_morphemes, analyze_tokens};
