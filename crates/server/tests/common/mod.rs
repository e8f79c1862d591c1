//! Shared helpers for server tests.
//!
//! Tests run against an in-memory `SQLite` database with the real migrations
//! applied, so repository behavior (constraints included) matches production.

#![allow(dead_code)]

use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;

use paper_lantern_core::{Price, ProductId};
use paper_lantern_server::db::MIGRATOR;
use paper_lantern_server::db::catalog::{ProductInput, ProductRepository};

/// Create a migrated in-memory database.
///
/// A single connection keeps the in-memory database alive for the pool's
/// lifetime (each `SQLite` `:memory:` connection is its own database).
pub async fn test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .min_connections(1)
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("failed to open in-memory database");

    MIGRATOR.run(&pool).await.expect("failed to run migrations");

    pool
}

/// Insert an active product and return its id.
pub async fn seed_product(pool: &SqlitePool, name: &str, price: &str) -> ProductId {
    ProductRepository::new(pool)
        .create(&ProductInput {
            name: name.to_string(),
            price: Price::parse(price).expect("invalid price in test"),
            description: Some(format!("{name} description")),
            image: None,
            category_id: None,
        })
        .await
        .expect("failed to seed product")
}
