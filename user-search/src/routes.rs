//! Router assembly

use axum::{routing::get, Router};

use crate::{health::health, search::search_users, state::AppState};

/// Path the search endpoint is mounted on
pub const SEARCH_PATH: &str = "/search";

/// Build the service router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(SEARCH_PATH, get(search_users))
        .route("/health", get(health))
        .with_state(state)
}
