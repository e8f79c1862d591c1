//! Order ledger repository.
//!
//! Orders are written once by checkout and never mutated except for the
//! one-way pending -> fulfilled transition.

use sqlx::SqlitePool;

use paper_lantern_core::{Email, OrderId};

use super::RepositoryError;
use crate::models::{Order, OrderItem};

/// Repository for order database operations.
pub struct OrderRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> OrderRepository<'a> {
    /// Create a new order repository.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List an identity's orders, newest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_for(&self, email: &Email) -> Result<Vec<Order>, RepositoryError> {
        let orders = sqlx::query_as::<_, Order>(
            r"
            SELECT id, user_email, total_cents, created_at, status
            FROM orders
            WHERE user_email = ?
            ORDER BY created_at DESC, id DESC
            ",
        )
        .bind(email.as_str())
        .fetch_all(self.pool)
        .await?;

        Ok(orders)
    }

    /// List every order, newest first (admin view).
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_all(&self) -> Result<Vec<Order>, RepositoryError> {
        let orders = sqlx::query_as::<_, Order>(
            r"
            SELECT id, user_email, total_cents, created_at, status
            FROM orders
            ORDER BY created_at DESC, id DESC
            ",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(orders)
    }

    /// List the lines of an order.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn items_for(&self, order_id: OrderId) -> Result<Vec<OrderItem>, RepositoryError> {
        let items = sqlx::query_as::<_, OrderItem>(
            r"
            SELECT id, order_id, product_id, quantity, price_cents
            FROM order_items
            WHERE order_id = ?
            ORDER BY id
            ",
        )
        .bind(order_id)
        .fetch_all(self.pool)
        .await?;

        Ok(items)
    }

    /// Mark an order fulfilled.
    ///
    /// The transition is one-way; marking an already-fulfilled order again is
    /// a no-op that still succeeds.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the order doesn't exist.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn mark_fulfilled(&self, order_id: OrderId) -> Result<(), RepositoryError> {
        let result = sqlx::query("UPDATE orders SET status = 'fulfilled' WHERE id = ?")
            .bind(order_id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
