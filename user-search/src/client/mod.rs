//! Typed client for the search endpoint
//!
//! ```rust,no_run
//! use user_search::client::SearchClient;
//! use user_search::model::{OrderBy, OrderField, SearchRequest};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let client = SearchClient::new("http://127.0.0.1:8080/search", Some("token".into()))?;
//!
//! let page = client
//!     .find_users(
//!         SearchRequest::new(10, 0)
//!             .with_query("Boyd")
//!             .with_order_field(OrderField::Age)
//!             .with_order_by(OrderBy::Asc),
//!     )
//!     .await?;
//!
//! println!("{} users, more: {}", page.users.len(), page.next_page);
//! # Ok(())
//! # }
//! ```

mod error;

pub use error::{ClientError, ResponseStatus};

use std::time::Duration;

use crate::{
    config::ClientConfig,
    error::Result,
    model::{
        params, ErrorReason, SearchErrorResponse, SearchRequest, SearchResponse, User,
        DEFAULT_MAX_PAGE_SIZE,
    },
};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(1);

/// Client for a single search endpoint
///
/// Each call is independent; nothing is retried.
#[derive(Debug, Clone)]
pub struct SearchClient {
    http: reqwest::Client,
    url: String,
    access_token: Option<String>,
    max_page_size: usize,
}

impl SearchClient {
    /// Create a client with the default one second timeout
    pub fn new(url: impl Into<String>, access_token: Option<String>) -> Result<Self> {
        Self::build(url.into(), access_token, DEFAULT_TIMEOUT, DEFAULT_MAX_PAGE_SIZE)
    }

    /// Create a client from configuration
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        Self::build(
            config.url.clone(),
            config.access_token.clone(),
            config.timeout(),
            config.max_page_size,
        )
    }

    fn build(
        url: String,
        access_token: Option<String>,
        timeout: Duration,
        max_page_size: usize,
    ) -> Result<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http,
            url,
            access_token,
            max_page_size,
        })
    }

    /// Override the page size requests are clamped to
    #[must_use]
    pub fn with_max_page_size(mut self, max_page_size: usize) -> Self {
        self.max_page_size = max_page_size;
        self
    }

    /// Endpoint this client calls
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Search for users
    ///
    /// Negative `limit` or `offset` fail locally without a call. A `limit`
    /// above the page size is clamped to it. One record more than the
    /// effective limit is requested; if it arrives it is dropped and
    /// `next_page` is set.
    pub async fn find_users(
        &self,
        request: SearchRequest,
    ) -> std::result::Result<SearchResponse, ClientError> {
        let limit = usize::try_from(request.limit).map_err(|_| {
            ClientError::InvalidRequest(format!("limit must be >= 0, got {}", request.limit))
        })?;
        let limit = limit.min(self.max_page_size);

        let offset = usize::try_from(request.offset).map_err(|_| {
            ClientError::InvalidRequest(format!("offset must be >= 0, got {}", request.offset))
        })?;

        let query = [
            (params::LIMIT, limit.saturating_add(1).to_string()),
            (params::OFFSET, offset.to_string()),
            (params::QUERY, request.query.clone()),
            (params::ORDER_FIELD, request.order_field.clone()),
            (params::ORDER_BY, request.order_by.as_wire().to_string()),
        ];

        let mut builder = self.http.get(&self.url).query(&query);
        if let Some(token) = &self.access_token {
            builder = builder.bearer_auth(token);
        }
        let call = builder.build()?;
        let encoded = call.url().query().unwrap_or_default().to_string();

        tracing::debug!(url = %self.url, query = %encoded, "Sending search request");

        let response = self.http.execute(call).await.map_err(|e| {
            if e.is_timeout() {
                ClientError::Timeout(encoded.clone())
            } else {
                ClientError::Transport(e)
            }
        })?;

        let status = response.status();
        let body = response.bytes().await.map_err(|e| {
            if e.is_timeout() {
                ClientError::Timeout(encoded.clone())
            } else {
                ClientError::Transport(e)
            }
        })?;

        match ResponseStatus::from(status) {
            ResponseStatus::Success => {}
            ResponseStatus::Unauthorized => return Err(ClientError::BadAccessToken),
            ResponseStatus::ServerError => return Err(ClientError::ServerFatal),
            ResponseStatus::BadRequest => {
                return Err(bad_request_error(&body, status.as_u16(), request.order_field))
            }
            ResponseStatus::Other(code) => {
                tracing::warn!("Search endpoint answered with unexpected status {}", code);
                return Err(ClientError::UnknownStatus(code));
            }
        }

        let mut users: Vec<User> = serde_json::from_slice(&body).map_err(ClientError::Decode)?;

        let next_page = users.len() > limit;
        users.truncate(limit);

        Ok(SearchResponse { users, next_page })
    }
}

fn bad_request_error(body: &[u8], status: u16, order_field: String) -> ClientError {
    let Ok(parsed) = serde_json::from_slice::<SearchErrorResponse>(body) else {
        tracing::warn!("Undecodable bad request body");
        return ClientError::UnknownStatus(status);
    };

    match ErrorReason::from_wire(&parsed.error) {
        Some(ErrorReason::BadOrderField) => ClientError::BadOrderField(order_field),
        _ => ClientError::UnknownBadRequest(parsed.error),
    }
}
