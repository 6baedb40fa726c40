//! Query execution: filter, order, paginate
//!
//! Filtering is a linear, case-sensitive substring scan over the
//! concatenated name and the `about` text. Sorting is stable, so records
//! with equal keys keep their store order.

use std::cmp::Ordering;

use crate::error::SearchError;
use crate::model::{OrderBy, OrderField, User};
use crate::search::query::SearchQuery;
use crate::store::RecordStore;

/// Run a validated query against a store
///
/// The order field is only checked when ordering is requested, so an
/// unknown field with [`OrderBy::AsIs`] is accepted.
pub fn execute<S>(store: &S, query: &SearchQuery) -> Result<Vec<User>, SearchError>
where
    S: RecordStore + ?Sized,
{
    let records = store.records()?;

    let mut found: Vec<&User> = records
        .iter()
        .filter(|user| matches(user, &query.query))
        .collect();

    if query.order_by != OrderBy::AsIs {
        let field: OrderField = query.order_field.parse().map_err(|reason| {
            SearchError::bad_request(reason, format!("unknown order field {:?}", query.order_field))
        })?;
        sort_users(&mut found, field, query.order_by);
    }

    Ok(found
        .into_iter()
        .skip(query.offset)
        .take(query.limit)
        .cloned()
        .collect())
}

fn matches(user: &User, needle: &str) -> bool {
    user.name.contains(needle) || user.about.contains(needle)
}

fn sort_users(users: &mut [&User], field: OrderField, order_by: OrderBy) {
    let key = |a: &User, b: &User| -> Ordering {
        match field {
            OrderField::Id => a.id.cmp(&b.id),
            OrderField::Age => a.age.cmp(&b.age),
            OrderField::Name => a.name.cmp(&b.name),
        }
    };

    match order_by {
        OrderBy::Asc => users.sort_by(|a, b| key(a, b)),
        OrderBy::Desc => users.sort_by(|a, b| key(b, a)),
        OrderBy::AsIs => {}
    }
}
