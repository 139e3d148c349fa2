//! morphe-api server entry point

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use morphe_api::ApiError;
use morphe_api::api::AppState;
use morphe_api::api::run_server;
use morphe_api::config::Config;
use morphe_api::service::MorpheApiServiceFull;

#[tokio::main]
async fn main() -> Result<(), ApiError> {
  // RUST_LOG overrides the default level
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
  tracing_subscriber::registry().with(filter).with(tracing_subscriber::fmt::layer()).init();

  let config = Config::from_env()?;
  tracing::info!(lexicon = ?config.lexicon, "configuration loaded");

  let service = Arc::new(MorpheApiServiceFull::new(&config)?);
  tracing::info!("morpheme analysis service initialized");

  let state = AppState::new(config, service);

  run_server(state).await
}
