//! Query parameter parsing
//!
//! All parameters arrive as strings. Parsing stops at the first invalid
//! parameter, checked in the order `limit`, `offset`, `order_by`.

use serde::Deserialize;

use crate::error::SearchError;
use crate::model::{ErrorReason, OrderBy};

/// Raw query parameters as received on the wire
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchParams {
    pub limit: Option<String>,
    pub offset: Option<String>,
    pub query: Option<String>,
    pub order_field: Option<String>,
    pub order_by: Option<String>,
}

/// Validated search query
///
/// `order_field` stays a string here: it is only validated when the
/// query actually asks for ordering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub limit: usize,
    pub offset: usize,
    pub query: String,
    pub order_field: String,
    pub order_by: OrderBy,
}

impl SearchParams {
    /// Validate the raw parameters
    ///
    /// # Example
    ///
    /// ```rust
    /// use user_search::model::OrderBy;
    /// use user_search::search::SearchParams;
    ///
    /// let params = SearchParams {
    ///     limit: Some("10".into()),
    ///     offset: Some("0".into()),
    ///     order_by: Some("-1".into()),
    ///     ..Default::default()
    /// };
    ///
    /// let query = params.parse().unwrap();
    /// assert_eq!(query.limit, 10);
    /// assert_eq!(query.order_by, OrderBy::Desc);
    /// assert_eq!(query.query, "");
    /// ```
    pub fn parse(self) -> Result<SearchQuery, SearchError> {
        let limit = parse_count(self.limit.as_deref(), ErrorReason::BadLimit, "limit")?;
        let offset = parse_count(self.offset.as_deref(), ErrorReason::BadOffset, "offset")?;
        let order_by = parse_order_by(self.order_by.as_deref())?;

        Ok(SearchQuery {
            limit,
            offset,
            query: self.query.unwrap_or_default(),
            order_field: self.order_field.unwrap_or_default(),
            order_by,
        })
    }
}

fn parse_count(raw: Option<&str>, reason: ErrorReason, name: &str) -> Result<usize, SearchError> {
    let raw = raw.ok_or_else(|| SearchError::bad_request(reason, format!("{name} is required")))?;

    let value: i64 = raw
        .parse()
        .map_err(|e| SearchError::bad_request(reason, format!("{name} {raw:?}: {e}")))?;

    usize::try_from(value)
        .map_err(|_| SearchError::bad_request(reason, format!("{name} must be >= 0, got {value}")))
}

fn parse_order_by(raw: Option<&str>) -> Result<OrderBy, SearchError> {
    let reason = ErrorReason::BadOrderBy;
    let raw = raw.ok_or_else(|| SearchError::bad_request(reason, "order_by is required"))?;

    let value: i64 = raw
        .parse()
        .map_err(|e| SearchError::bad_request(reason, format!("order_by {raw:?}: {e}")))?;

    OrderBy::from_wire(value).ok_or_else(|| {
        SearchError::bad_request(reason, format!("order_by must be -1, 0 or 1, got {value}"))
    })
}
