//! Client-side error taxonomy
//!
//! Every failure of a `find_users` call lands in exactly one variant, so a
//! caller can decide whether to retry, re-authenticate or give up.

use reqwest::StatusCode;
use thiserror::Error;

/// Error returned by [`SearchClient::find_users`](super::SearchClient::find_users)
#[derive(Debug, Error)]
pub enum ClientError {
    /// Request rejected locally, nothing was sent
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// No response within the client timeout; carries the encoded query
    #[error("timeout for {0}")]
    Timeout(String),

    /// Connection failed or the response could not be read
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Service did not accept the access token
    #[error("bad access token")]
    BadAccessToken,

    /// Service reported an internal failure
    #[error("search server fatal error")]
    ServerFatal,

    /// Service rejected the order field
    #[error("order field {0:?} invalid")]
    BadOrderField(String),

    /// Service rejected the request for a reason this client does not know
    #[error("unknown bad request error: {0}")]
    UnknownBadRequest(String),

    /// Unrecognised status, or a bad-request body that could not be decoded
    #[error("unknown error, status {0}")]
    UnknownStatus(u16),

    /// Success status with a body that is not a user list
    #[error("cannot unpack result json: {0}")]
    Decode(#[source] serde_json::Error),
}

impl ClientError {
    /// Check if the same call might succeed later without changes
    pub fn is_retriable(&self) -> bool {
        matches!(
            self,
            Self::Timeout(_) | Self::Transport(_) | Self::ServerFatal
        )
    }

    /// Raw HTTP status, when the service answered
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::BadAccessToken => Some(StatusCode::UNAUTHORIZED.as_u16()),
            Self::ServerFatal => Some(StatusCode::INTERNAL_SERVER_ERROR.as_u16()),
            Self::BadOrderField(_) | Self::UnknownBadRequest(_) => {
                Some(StatusCode::BAD_REQUEST.as_u16())
            }
            Self::UnknownStatus(code) => Some(*code),
            Self::Decode(_) => Some(StatusCode::OK.as_u16()),
            Self::InvalidRequest(_) | Self::Timeout(_) | Self::Transport(_) => None,
        }
    }
}

/// Response statuses the client knows how to handle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseStatus {
    Success,
    BadRequest,
    Unauthorized,
    ServerError,
    Other(u16),
}

impl From<StatusCode> for ResponseStatus {
    fn from(status: StatusCode) -> Self {
        match status {
            StatusCode::OK => Self::Success,
            StatusCode::BAD_REQUEST => Self::BadRequest,
            StatusCode::UNAUTHORIZED => Self::Unauthorized,
            StatusCode::INTERNAL_SERVER_ERROR => Self::ServerError,
            other => Self::Other(other.as_u16()),
        }
    }
}
