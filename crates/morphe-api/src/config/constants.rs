//! API configuration constants

/// Maximum input text length (bytes)
///
/// Requests whose text exceeds this are rejected with `text_too_long`.
/// axum's default body limit (2 MB) applies before this check.
pub const MAX_TEXT_LENGTH: usize = 1_000_000;

/// Default bind address
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5000";

/// Default lexicon source
///
/// `cache`: user lexicon from the OS cache directory when present, built-in otherwise.
pub const DEFAULT_LEXICON_SOURCE: &str = "cache";

/// Environment variable holding the bind address
pub const BIND_ADDR_ENV: &str = "MORPHE_API_BIND_ADDR";

/// Environment variable holding the lexicon source
pub const LEXICON_ENV: &str = "MORPHE_LEXICON";
