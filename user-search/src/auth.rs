//! Bearer token check for the search endpoint
//!
//! The service holds at most one opaque access token. A request passes
//! when it presents exactly that token; there are no claims, scopes or
//! sessions.

use axum::http::{header::AUTHORIZATION, HeaderMap};

use crate::error::SearchError;

/// Extract token from Authorization header (Bearer scheme)
pub fn extract_token(headers: &HeaderMap) -> Result<&str, SearchError> {
    let auth_header = headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| SearchError::Unauthorized("Missing Authorization header".to_string()))?;

    auth_header.strip_prefix("Bearer ").ok_or_else(|| {
        SearchError::Unauthorized("Invalid Authorization header format".to_string())
    })
}

/// Check the request against the configured token
///
/// With no token configured every request is accepted.
pub fn authorize(headers: &HeaderMap, expected: Option<&str>) -> Result<(), SearchError> {
    let Some(expected) = expected else {
        return Ok(());
    };

    if extract_token(headers)? == expected {
        Ok(())
    } else {
        Err(SearchError::Unauthorized("Bad access token".to_string()))
    }
}
