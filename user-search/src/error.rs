//! Error types and HTTP response conversion

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::{ErrorReason, SearchErrorResponse};
use crate::store::StoreError;

/// Result type alias using the crate error
pub type Result<T> = std::result::Result<T, Error>;

/// Error raised while configuring or running the service
///
/// Large error variants are boxed to reduce stack size
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(Box<figment::Error>),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Record store could not be loaded
    #[error("Record store error: {0}")]
    Store(#[from] StoreError),

    /// HTTP client could not be built
    #[error("HTTP client error: {0}")]
    Client(Box<reqwest::Error>),
}

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Error::Config(Box::new(err))
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Client(Box::new(err))
    }
}

/// Error returned by the search endpoint
///
/// Every variant short-circuits the request; nothing is retried.
#[derive(Debug, Error)]
pub enum SearchError {
    /// Missing or wrong bearer token
    #[error("Authentication failed: {0}")]
    Unauthorized(String),

    /// Rejected request parameter
    #[error("Bad request ({reason}): {detail}")]
    BadRequest {
        reason: ErrorReason,
        detail: String,
    },

    /// Backing store failed
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl SearchError {
    pub fn bad_request(reason: ErrorReason, detail: impl Into<String>) -> Self {
        Self::BadRequest {
            reason,
            detail: detail.into(),
        }
    }

    /// HTTP status this error is reported with
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::BadRequest { .. } => StatusCode::BAD_REQUEST,
            Self::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for SearchError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            SearchError::Unauthorized(msg) => {
                tracing::warn!("Rejected search request: {}", msg);
                status.into_response()
            }
            SearchError::BadRequest { reason, detail } => {
                tracing::warn!(%reason, "Rejected search request: {}", detail);
                (status, Json(SearchErrorResponse::from(reason))).into_response()
            }
            SearchError::Store(e) => {
                tracing::error!("Record store error: {}", e);
                (status, Json(SearchErrorResponse::new("record store unavailable"))).into_response()
            }
        }
    }
}
