//! # user-search
//!
//! A read-only user record search service and the typed client that talks to it.
//!
//! ## Features
//!
//! - **Search service**: substring filtering, single-field ordering and offset/limit
//!   pagination over an in-memory record store, served with axum
//! - **Search client**: local request validation, page-size clamping, a one-record
//!   probe for `next_page`, and a closed error taxonomy separating local, transport
//!   and protocol failures
//! - **Bearer token check**: one opaque token compared for equality
//! - **Configuration**: figment layering of defaults, TOML files and environment
//! - **Graceful shutdown**: SIGTERM and SIGINT drain in-flight requests
//!
//! ## Example
//!
//! ```rust,no_run
//! use user_search::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = Config::load()?;
//!     init_tracing(&config)?;
//!
//!     let state = AppState::load(config.clone())?;
//!
//!     Server::new(config).serve(router(state)).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod health;
pub mod model;
pub mod observability;
pub mod routes;
pub mod search;
pub mod server;
pub mod state;
pub mod store;

#[cfg(test)]
mod test_support;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::client::{ClientError, SearchClient};
    pub use crate::config::{ClientConfig, Config, SearchConfig, ServiceConfig};
    pub use crate::error::{Error, Result, SearchError};
    pub use crate::model::{
        ErrorReason, OrderBy, OrderField, SearchRequest, SearchResponse, User,
        DEFAULT_MAX_PAGE_SIZE,
    };
    pub use crate::observability::init_tracing;
    pub use crate::routes::{router, SEARCH_PATH};
    pub use crate::server::Server;
    pub use crate::state::AppState;
    pub use crate::store::{MemoryStore, RecordStore, StoreError};

    pub use tracing::{debug, error, info, warn};
}
