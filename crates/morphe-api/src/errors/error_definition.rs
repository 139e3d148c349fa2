//! API error definitions

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use morphe::errors::{MorpheError, TaggerError};

/// Error kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiErrorKind {
  /// Invalid input
  InvalidInput,
  /// Text too long
  TextTooLong,
  /// Internal error
  Internal,
  /// Configuration error
  Config,
}

impl ApiErrorKind {
  /// Returns the error code
  #[must_use]
  pub fn code(&self) -> &'static str {
    match self {
      Self::InvalidInput => "invalid_input",
      Self::TextTooLong => "text_too_long",
      Self::Internal => "internal_error",
      Self::Config => "config_error",
    }
  }

  /// Returns the HTTP status code
  #[must_use]
  pub fn status(&self) -> StatusCode {
    match self {
      Self::InvalidInput | Self::TextTooLong => StatusCode::BAD_REQUEST,
      Self::Internal | Self::Config => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }
}

/// API error
#[derive(Debug, Error)]
pub enum ApiError {
  /// Invalid input
  #[error("{0}")]
  InvalidInput(String),

  /// Text too long
  #[error("text too long: {0} bytes (max {1} bytes)")]
  TextTooLong(usize, usize),

  /// Internal error
  #[error("{0}")]
  Internal(String),

  /// Configuration error
  #[error("configuration error: {0}")]
  Config(String),
}

impl ApiError {
  /// Returns the error kind
  #[must_use]
  pub fn kind(&self) -> ApiErrorKind {
    match self {
      Self::InvalidInput(_) => ApiErrorKind::InvalidInput,
      Self::TextTooLong(_, _) => ApiErrorKind::TextTooLong,
      Self::Internal(_) => ApiErrorKind::Internal,
      Self::Config(_) => ApiErrorKind::Config,
    }
  }

  /// Returns the error code
  #[must_use]
  pub fn code(&self) -> &'static str {
    self.kind().code()
  }

  /// Returns the HTTP status code
  #[must_use]
  pub fn status(&self) -> StatusCode {
    self.kind().status()
  }

  /// Creates an invalid input error
  #[must_use]
  pub fn invalid_input(message: impl Into<String>) -> Self {
    Self::InvalidInput(message.into())
  }

  /// Creates a text too long error
  #[must_use]
  pub fn text_too_long(actual: usize, max: usize) -> Self {
    Self::TextTooLong(actual, max)
  }

  /// Creates an internal error
  #[must_use]
  pub fn internal(message: impl Into<String>) -> Self {
    Self::Internal(message.into())
  }

  /// Creates a configuration error
  #[must_use]
  pub fn config(message: impl Into<String>) -> Self {
    Self::Config(message.into())
  }
}

/// Error response body
///
/// `{"success": false, "error": "<message>", "code": "<code>"}`
#[derive(Serialize)]
struct ErrorResponse {
  success: bool,
  error: String,
  code: &'static str,
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let status = self.status();
    let body = ErrorResponse { success: false, error: self.to_string(), code: self.code() };

    (status, Json(body)).into_response()
  }
}

/// Conversion from MorpheError to ApiError
///
/// Maps library errors to API errors.
impl From<MorpheError> for ApiError {
  fn from(err: MorpheError) -> Self {
    match err {
      MorpheError::Tagger(TaggerError::InvalidInput { reason }) => ApiError::invalid_input(reason),
      MorpheError::Lexicon(_) | MorpheError::Tagger(TaggerError::Lexicon(_)) => {
        ApiError::config(format!("lexicon error: {err}"))
      }
      MorpheError::Config(err) => ApiError::config(err.to_string()),
      // MorpheError is #[non_exhaustive]
      _ => ApiError::internal(format!("internal error: {err}")),
    }
  }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, ApiError>;
