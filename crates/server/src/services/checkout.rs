//! Checkout engine.
//!
//! Converts a non-empty cart into an immutable order plus line items, then
//! empties the cart. The whole sequence runs in one transaction: either the
//! order, its lines, and the cart clear all land, or none do.

use sqlx::{Row, SqlitePool};
use thiserror::Error;

use paper_lantern_core::{Email, OrderId};

/// Errors that can occur while placing an order.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// The cart has no lines.
    #[error("cart is empty")]
    EmptyCart,

    /// The order total overflowed the cents range.
    #[error("order total out of range")]
    TotalOverflow,

    /// Underlying database failure.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Checkout service.
pub struct CheckoutService<'a> {
    pool: &'a SqlitePool,
}

impl<'a> CheckoutService<'a> {
    /// Create a new checkout service.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Place an order from the identity's cart.
    ///
    /// Loads the cart lines joined with the *current* product prices, computes
    /// the total, creates the order row with status pending, captures one
    /// order line per cart line, and deletes the cart lines - all inside one
    /// transaction. The transaction opens with a write so concurrent checkouts
    /// for the same identity serialize; the loser re-reads an empty cart and
    /// fails with [`CheckoutError::EmptyCart`] instead of billing twice.
    ///
    /// # Errors
    ///
    /// Returns `CheckoutError::EmptyCart` if the cart has no lines, and
    /// `CheckoutError::Database` if any statement fails (nothing is committed
    /// in that case).
    pub async fn place_order(&self, email: &Email) -> Result<OrderId, CheckoutError> {
        let mut tx = self.pool.begin().await?;

        // First statement is a write so the transaction takes the write lock
        // up front; it doubles as the lazy cart creation the cart manager does.
        sqlx::query("INSERT INTO carts (user_email) VALUES (?) ON CONFLICT (user_email) DO NOTHING")
            .bind(email.as_str())
            .execute(&mut *tx)
            .await?;

        let cart_id: i64 = sqlx::query("SELECT id FROM carts WHERE user_email = ?")
            .bind(email.as_str())
            .fetch_one(&mut *tx)
            .await?
            .try_get("id")?;

        let lines: Vec<(i64, i64, i64)> = sqlx::query_as(
            r"
            SELECT products.id, products.price_cents, cart_items.quantity
            FROM cart_items
            JOIN products ON cart_items.product_id = products.id
            WHERE cart_items.cart_id = ?
            ORDER BY cart_items.id
            ",
        )
        .bind(cart_id)
        .fetch_all(&mut *tx)
        .await?;

        if lines.is_empty() {
            // Dropping the transaction rolls back the no-op cart insert.
            return Err(CheckoutError::EmptyCart);
        }

        let mut total_cents: i64 = 0;
        for (_, price_cents, quantity) in &lines {
            let line_total = price_cents
                .checked_mul(*quantity)
                .ok_or(CheckoutError::TotalOverflow)?;
            total_cents = total_cents
                .checked_add(line_total)
                .ok_or(CheckoutError::TotalOverflow)?;
        }

        let order_id: i64 = sqlx::query(
            "INSERT INTO orders (user_email, total_cents) VALUES (?, ?) RETURNING id",
        )
        .bind(email.as_str())
        .bind(total_cents)
        .fetch_one(&mut *tx)
        .await?
        .try_get("id")?;

        for (product_id, price_cents, quantity) in &lines {
            sqlx::query(
                r"
                INSERT INTO order_items (order_id, product_id, quantity, price_cents)
                VALUES (?, ?, ?, ?)
                ",
            )
            .bind(order_id)
            .bind(product_id)
            .bind(quantity)
            .bind(price_cents)
            .execute(&mut *tx)
            .await?;
        }

        sqlx::query("DELETE FROM cart_items WHERE cart_id = ?")
            .bind(cart_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(OrderId::new(order_id))
    }
}
