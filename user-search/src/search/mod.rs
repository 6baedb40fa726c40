//! Search service
//!
//! Turns loosely-typed query parameters into a validated [`SearchQuery`],
//! runs it against a [`RecordStore`](crate::store::RecordStore) and serves
//! the result over HTTP.
//!
//! ## Submodules
//! - **`query`**: wire parameter parsing and validation.
//! - **`engine`**: filtering, ordering and pagination.
//! - **`handlers`**: axum request handler.

pub mod engine;
pub mod handlers;
pub mod query;

pub use engine::execute;
pub use handlers::search_users;
pub use query::{SearchParams, SearchQuery};
