//! HTTP handler for the search endpoint

use axum::{
    extract::{Query, State},
    http::HeaderMap,
    Json,
};

use crate::{
    auth::authorize,
    error::SearchError,
    model::User,
    search::{engine::execute, query::SearchParams},
    state::AppState,
};

/// Search users
///
/// Auth runs first, then parameter validation, then the store query.
/// Responds with a JSON array of users.
pub async fn search_users(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<User>>, SearchError> {
    authorize(&headers, state.access_token())?;

    let query = params.parse()?;
    let users = execute(state.store(), &query)?;

    tracing::debug!(
        query = %query.query,
        order_field = %query.order_field,
        order_by = %query.order_by,
        limit = query.limit,
        offset = query.offset,
        "Search returned {} users",
        users.len()
    );

    Ok(Json(users))
}
