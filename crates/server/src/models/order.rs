//! Order ledger models.

use chrono::{DateTime, Utc};
use serde::Serialize;

use paper_lantern_core::{Email, OrderId, OrderItemId, OrderStatus, Price, ProductId};

/// A placed order. The total is fixed at checkout time.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub user_email: Email,
    #[sqlx(rename = "total_cents")]
    pub total: Price,
    pub created_at: DateTime<Utc>,
    pub status: OrderStatus,
}

/// One line of a placed order, with the unit price captured at checkout.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub id: OrderItemId,
    pub order_id: OrderId,
    pub product_id: ProductId,
    pub quantity: i64,
    #[sqlx(rename = "price_cents")]
    pub price: Price,
}
