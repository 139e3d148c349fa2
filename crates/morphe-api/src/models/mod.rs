//! Models module

mod request;
mod response;

pub use request::MorphemeAnalysisRequest;
pub use response::{HealthResponse, MorphemeAnalysisResponse};
