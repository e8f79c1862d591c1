//! Database operations for the storefront `SQLite` database.
//!
//! ## Tables
//!
//! - `users` - Site accounts with Argon2 password hashes
//! - `categories`, `products` - Catalog (products soft-deleted via `active`)
//! - `carts`, `cart_items` - One cart per identity, one line per product
//! - `orders`, `order_items` - Immutable order ledger
//! - `tower_sessions` - Session storage (owned by the session store, which
//!   creates it at startup)
//!
//! # Migrations
//!
//! Migrations are stored in `crates/server/migrations/` and run via:
//! ```bash
//! cargo run -p paper-lantern-cli -- migrate
//! ```

use std::str::FromStr;
use std::time::Duration;

use secrecy::ExposeSecret;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use thiserror::Error;

pub mod carts;
pub mod catalog;
pub mod orders;
pub mod users;

/// Embedded migrations, shared by the CLI and the test suite.
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");

/// Errors returned by the repository layer.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Underlying database failure.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A unique constraint was violated.
    #[error("conflict: {0}")]
    Conflict(String),

    /// The referenced entity does not exist.
    #[error("not found")]
    NotFound,

    /// A stored value failed to parse back into its domain type.
    #[error("data corruption: {0}")]
    DataCorruption(String),
}

/// Create a `SQLite` connection pool with sensible defaults.
///
/// The database file is created if missing and opened in WAL mode with
/// foreign keys enforced.
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(
    database_url: &secrecy::SecretString,
) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url.expose_secret())?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .foreign_keys(true)
        .busy_timeout(Duration::from_secs(5));

    SqlitePoolOptions::new()
        .max_connections(10)
        .acquire_timeout(Duration::from_secs(10))
        .connect_with(options)
        .await
}
