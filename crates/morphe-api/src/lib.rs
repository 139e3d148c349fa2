//! morphe-api crate
//!
//! Web server exposing English morpheme analysis as an HTTP API.
//!
//! ## Endpoints
//! - `POST /api/morpheme-analysis` - Morpheme Analysis
//! - `GET /health` - Health Check
//!
//! ## Usage Example
//! ```bash
//! curl -X POST http://127.0.0.1:5000/api/morpheme-analysis \
//!   -H "Content-Type: application/json" \
//!   -d '{"text": "The unhappy cats were running"}'
//! ```

pub mod api;
pub mod config;
pub mod errors;
pub mod models;
pub mod service;

pub use api::AppState;
pub use config::Config;
pub use errors::{ApiError, ApiErrorKind};
pub use models::{HealthResponse, MorphemeAnalysisRequest, MorphemeAnalysisResponse};
pub use service::MorpheApiServiceFull;
