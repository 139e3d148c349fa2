//! Service module

mod morphe_api_service;

pub use morphe_api_service::{MorpheApiService, MorpheApiServiceFull};
