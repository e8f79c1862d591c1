//! Cart repository.
//!
//! One cart per customer identity, lazily created on first access. Mutations
//! are always scoped by cart id so a caller can only touch lines in their own
//! cart.

use sqlx::{Row, SqlitePool};

use paper_lantern_core::{CartId, CartItemId, Email, ProductId};

use super::RepositoryError;
use crate::models::{Cart, CartItemView};

/// Repository for cart database operations.
pub struct CartRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> CartRepository<'a> {
    /// Create a new cart repository.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Get the cart for an identity, creating an empty one if none exists.
    ///
    /// Concurrent first-access is safe: the insert tolerates the UNIQUE
    /// conflict on `user_email` and the follow-up read returns whichever row
    /// won.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if a query fails.
    pub async fn get_or_create(&self, email: &Email) -> Result<Cart, RepositoryError> {
        sqlx::query("INSERT INTO carts (user_email) VALUES (?) ON CONFLICT (user_email) DO NOTHING")
            .bind(email.as_str())
            .execute(self.pool)
            .await?;

        let row = sqlx::query("SELECT id FROM carts WHERE user_email = ?")
            .bind(email.as_str())
            .fetch_one(self.pool)
            .await?;

        Ok(Cart {
            id: CartId::new(row.try_get("id")?),
            user_email: email.clone(),
        })
    }

    /// List the cart's lines joined with product details for display.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn items(&self, cart_id: CartId) -> Result<Vec<CartItemView>, RepositoryError> {
        let items = sqlx::query_as::<_, CartItemView>(
            r"
            SELECT cart_items.id, products.id AS product_id, products.name,
                   products.price_cents, products.image, cart_items.quantity
            FROM cart_items
            JOIN products ON cart_items.product_id = products.id
            WHERE cart_items.cart_id = ?
            ORDER BY cart_items.id
            ",
        )
        .bind(cart_id)
        .fetch_all(self.pool)
        .await?;

        Ok(items)
    }

    /// Add a product to the cart, merging into an existing line if present.
    ///
    /// Quantities below 1 are floored at 1.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the product doesn't exist or is
    /// inactive. Returns `RepositoryError::Database` for other database errors.
    pub async fn add_item(
        &self,
        cart_id: CartId,
        product_id: ProductId,
        quantity: i64,
    ) -> Result<(), RepositoryError> {
        let quantity = quantity.max(1);

        let exists = sqlx::query("SELECT 1 FROM products WHERE id = ? AND active = 1")
            .bind(product_id)
            .fetch_optional(self.pool)
            .await?;
        if exists.is_none() {
            return Err(RepositoryError::NotFound);
        }

        sqlx::query(
            r"
            INSERT INTO cart_items (cart_id, product_id, quantity)
            VALUES (?, ?, ?)
            ON CONFLICT (cart_id, product_id)
            DO UPDATE SET quantity = quantity + excluded.quantity
            ",
        )
        .bind(cart_id)
        .bind(product_id)
        .bind(quantity)
        .execute(self.pool)
        .await?;

        Ok(())
    }

    /// Set the quantity of a line in the given cart, flooring at 1.
    ///
    /// The cart id scope means a caller can never update a line belonging to
    /// someone else's cart.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the line isn't in this cart.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn set_quantity(
        &self,
        cart_id: CartId,
        item_id: CartItemId,
        quantity: i64,
    ) -> Result<(), RepositoryError> {
        let quantity = quantity.max(1);

        let result = sqlx::query("UPDATE cart_items SET quantity = ? WHERE id = ? AND cart_id = ?")
            .bind(quantity)
            .bind(item_id)
            .bind(cart_id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }

    /// Remove a line from the given cart.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the line isn't in this cart.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn remove_item(
        &self,
        cart_id: CartId,
        item_id: CartItemId,
    ) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM cart_items WHERE id = ? AND cart_id = ?")
            .bind(item_id)
            .bind(cart_id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }

    /// Remove every line from the given cart.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn clear(&self, cart_id: CartId) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM cart_items WHERE cart_id = ?")
            .bind(cart_id)
            .execute(self.pool)
            .await?;

        Ok(())
    }
}
