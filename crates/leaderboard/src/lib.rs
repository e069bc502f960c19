pub mod config;
pub mod routes;
pub mod state;

use std::sync::Arc;

use axum::{routing::get, Router};

pub use state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/data", get(routes::data))
        .route("/display.html", get(routes::display))
        .route("/", get(routes::display))
        .with_state(Arc::new(state))
}
