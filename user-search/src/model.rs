//! Wire vocabulary shared by the search service and the search client
//!
//! Order direction, order field and bad-request reason codes are closed
//! enums here so both sides agree on the exact wire values.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Largest page the service hands out; the client clamps to this
pub const DEFAULT_MAX_PAGE_SIZE: usize = 25;

/// Query parameter names
pub mod params {
    pub const LIMIT: &str = "limit";
    pub const OFFSET: &str = "offset";
    pub const QUERY: &str = "query";
    pub const ORDER_FIELD: &str = "order_field";
    pub const ORDER_BY: &str = "order_by";
}

/// A user record as held by the record store
///
/// `name` is the first and last name joined without a separator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct User {
    pub id: i64,
    pub name: String,
    pub age: u32,
    pub about: String,
    pub gender: String,
}

/// Ordering direction
///
/// # Example
///
/// ```rust
/// use user_search::model::OrderBy;
///
/// assert_eq!(OrderBy::from_wire(-1), Some(OrderBy::Desc));
/// assert_eq!(OrderBy::Asc.as_wire(), 1);
/// assert_eq!(OrderBy::from_wire(5), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrderBy {
    /// Descending (wire value `-1`)
    Desc,
    /// Store order, no sorting (wire value `0`)
    #[default]
    AsIs,
    /// Ascending (wire value `1`)
    Asc,
}

impl OrderBy {
    /// Decode the integer wire value
    #[must_use]
    pub const fn from_wire(value: i64) -> Option<Self> {
        match value {
            -1 => Some(Self::Desc),
            0 => Some(Self::AsIs),
            1 => Some(Self::Asc),
            _ => None,
        }
    }

    /// Integer wire value
    #[must_use]
    pub const fn as_wire(&self) -> i64 {
        match self {
            Self::Desc => -1,
            Self::AsIs => 0,
            Self::Asc => 1,
        }
    }
}

impl fmt::Display for OrderBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Desc => write!(f, "desc"),
            Self::AsIs => write!(f, "as-is"),
            Self::Asc => write!(f, "asc"),
        }
    }
}

/// Field the result set can be sorted by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrderField {
    Id,
    Age,
    /// Also selected by an empty field name
    #[default]
    Name,
}

impl OrderField {
    /// Wire spelling
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Id => "Id",
            Self::Age => "Age",
            Self::Name => "Name",
        }
    }
}

impl fmt::Display for OrderField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderField {
    type Err = ErrorReason;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Id" => Ok(Self::Id),
            "Age" => Ok(Self::Age),
            "Name" | "" => Ok(Self::Name),
            _ => Err(ErrorReason::BadOrderField),
        }
    }
}

/// Reason codes carried in the `Error` field of a bad-request body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorReason {
    BadOrderField,
    BadOrderBy,
    BadLimit,
    BadOffset,
}

impl ErrorReason {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::BadOrderField => "ErrorBadOrderField",
            Self::BadOrderBy => "ErrorBadOrderBy",
            Self::BadLimit => "ErrorBadLimit",
            Self::BadOffset => "ErrorBadOffset",
        }
    }

    /// Look up a reason code received over the wire
    #[must_use]
    pub fn from_wire(code: &str) -> Option<Self> {
        [
            Self::BadOrderField,
            Self::BadOrderBy,
            Self::BadLimit,
            Self::BadOffset,
        ]
        .into_iter()
        .find(|reason| reason.as_str() == code)
    }
}

impl fmt::Display for ErrorReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body of a 400 response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchErrorResponse {
    #[serde(rename = "Error")]
    pub error: String,
}

impl SearchErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

impl From<ErrorReason> for SearchErrorResponse {
    fn from(reason: ErrorReason) -> Self {
        Self::new(reason.as_str())
    }
}

/// Request built by a client caller
///
/// `limit` and `offset` are signed so that a negative value can be
/// rejected locally instead of being unrepresentable.
///
/// # Example
///
/// ```rust
/// use user_search::model::{OrderBy, OrderField, SearchRequest};
///
/// let request = SearchRequest::new(10, 0)
///     .with_query("Boyd")
///     .with_order_field(OrderField::Age)
///     .with_order_by(OrderBy::Desc);
///
/// assert_eq!(request.order_field, "Age");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchRequest {
    pub limit: i64,
    pub offset: i64,
    /// Substring filter, empty matches everything
    pub query: String,
    /// Passed through verbatim; the service validates it
    pub order_field: String,
    pub order_by: OrderBy,
}

impl SearchRequest {
    #[must_use]
    pub fn new(limit: i64, offset: i64) -> Self {
        Self {
            limit,
            offset,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    /// Accepts an [`OrderField`] or any raw string
    #[must_use]
    pub fn with_order_field(mut self, field: impl ToString) -> Self {
        self.order_field = field.to_string();
        self
    }

    #[must_use]
    pub fn with_order_by(mut self, order_by: OrderBy) -> Self {
        self.order_by = order_by;
        self
    }
}

/// Page of users returned to a client caller
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchResponse {
    pub users: Vec<User>,
    /// More matching records exist past this page
    pub next_page: bool,
}
