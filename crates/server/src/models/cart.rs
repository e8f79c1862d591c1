//! Cart models.

use serde::Serialize;

use paper_lantern_core::{CartId, CartItemId, Email, Price, ProductId};

/// A customer's cart row.
#[derive(Debug, Clone)]
pub struct Cart {
    pub id: CartId,
    pub user_email: Email,
}

/// A cart line joined with product details for display.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct CartItemView {
    pub id: CartItemId,
    pub product_id: ProductId,
    pub name: String,
    #[sqlx(rename = "price_cents")]
    pub price: Price,
    pub image: Option<String>,
    pub quantity: i64,
}
