use diesel::prelude::*;
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use std::error::Error;

pub mod models;
pub mod schema;
pub mod store;

pub use store::{search_pattern, PgRestaurantStore, QueryError, RestaurantStore, StoreError};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("./migrations");

pub fn establish_connection(database_url: &str) -> ConnectionResult<PgConnection> {
    PgConnection::establish(database_url)
}

/// Applies every pending migration and returns the versions applied.
pub fn run_pending_migrations(database_url: &str) -> Result<Vec<String>, Box<dyn Error + Send + Sync>> {
    let mut conn = establish_connection(database_url)?;
    let applied = conn.run_pending_migrations(MIGRATIONS)?;
    Ok(applied.into_iter().map(|v| v.to_string()).collect())
}
