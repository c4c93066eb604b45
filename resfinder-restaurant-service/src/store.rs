use diesel::prelude::*;
pub use diesel::result::{ConnectionError, Error as QueryError};

use crate::{establish_connection, models::Restaurant, schema};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to connect to database: {0}")]
    Connection(#[from] ConnectionError),
    #[error("restaurant query failed: {0}")]
    Query(#[from] QueryError),
}

/// Read-only access to the `restaurants` relation.
///
/// The connection string is passed on every call because it is resolved at
/// request time rather than at startup.
pub trait RestaurantStore: Send + Sync {
    /// Rows whose name, location or aliases match the `LIKE` pattern,
    /// case-insensitively, ordered by name and capped at `limit`.
    fn search(
        &self,
        database_url: &str,
        pattern: &str,
        limit: i64,
    ) -> Result<Vec<Restaurant>, StoreError>;
}

/// Wraps a query in `%` so it matches anywhere in a column.
///
/// `%` and `_` inside the query keep their wildcard meaning.
pub fn search_pattern(query: &str) -> String {
    format!("%{query}%")
}

#[derive(Default)]
pub struct PgRestaurantStore {}

impl RestaurantStore for PgRestaurantStore {
    fn search(
        &self,
        database_url: &str,
        pattern: &str,
        limit: i64,
    ) -> Result<Vec<Restaurant>, StoreError> {
        use schema::restaurants::dsl::*;

        let conn = &mut establish_connection(database_url)?;
        let results = restaurants
            .filter(
                name.ilike(pattern)
                    .or(location.ilike(pattern))
                    .or(aliases.is_not_null().and(aliases.ilike(pattern))),
            )
            .order(name.asc())
            .limit(limit)
            .select(Restaurant::as_select())
            .load(conn)?;

        Ok(results)
    }
}
