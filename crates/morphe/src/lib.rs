//! morphe morpheme analysis library
//!
//! Tags English text and breaks every token into prefix, root and suffix using
//! fixed affix tables.
//!
//! ```
//! use morphe::{LexiconManager, MorphemeAnalyzer};
//!
//! let analyzer = MorphemeAnalyzer::from_lexicon_manager(&LexiconManager::builtin()).unwrap();
//! let result = analyzer.analyze("The cats").unwrap();
//! assert_eq!(result[1].breakdown(), "cat-s");
//! ```

/// Error module - MorpheError, MorpheResult and the per-component error types
pub mod errors;

/// Lexicon module - the tagger's word list and its loading
pub mod lexicon;

/// Data model module - Token, Morpheme, TokenAnalysis
pub mod models;

/// Morpheme module - affix tables and the segmenter
pub mod morpheme;

/// Service module - MorphemeAnalyzer facade
pub mod service;

/// Tagger module - Tagger trait and the rule-based implementation
pub mod tagger;

/// Re-exports
pub use errors::{MorpheError, MorpheResult};
pub use lexicon::{Lexicon, LexiconManager};
pub use models::{Morpheme, MorphemeKind, Token, TokenAnalysis, UPos};
pub use morpheme::analyze_morphemes;
pub use service::MorphemeAnalyzer;
pub use tagger::{RuleTagger, Tagger};
