//! Health check handler

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};

use crate::state::AppState;

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,

    /// Service name
    pub service: String,

    /// Version
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// Records held by the store, if it can be read
    #[serde(skip_serializing_if = "Option::is_none")]
    pub records: Option<usize>,
}

/// Liveness probe
///
/// Returns 200 while the store is readable, 503 otherwise.
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let records = state.store().records().map(|r| r.len());

    let (status, label) = match records {
        Ok(_) => (StatusCode::OK, "healthy"),
        Err(ref e) => {
            tracing::warn!("Health check failed: {}", e);
            (StatusCode::SERVICE_UNAVAILABLE, "unhealthy")
        }
    };

    let response = HealthResponse {
        status: label.to_string(),
        service: state.config().service.name.clone(),
        version: Some(env!("CARGO_PKG_VERSION").to_string()),
        records: records.ok(),
    };

    (status, Json(response))
}
