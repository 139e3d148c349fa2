//! API module

mod handlers;
mod routes;
mod state;

pub use handlers::{health_check, post_morpheme_analysis};
pub use routes::{ANALYSIS_PATH, HEALTH_PATH, create_router, run_server};
pub use state::AppState;
