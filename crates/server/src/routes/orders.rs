//! Order route handlers: checkout and the order ledger.

use axum::{
    Json,
    extract::{Path, State},
};
use serde_json::{Value, json};

use paper_lantern_core::OrderId;

use crate::db::orders::OrderRepository;
use crate::error::Result;
use crate::middleware::{RequireAdmin, RequireAuth};
use crate::models::Order;
use crate::services::checkout::CheckoutService;
use crate::state::AppState;

/// Place an order from the caller's cart.
pub async fn checkout(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
) -> Result<Json<Value>> {
    let order_id = CheckoutService::new(state.pool())
        .place_order(&user.email)
        .await?;

    tracing::info!(order_id = %order_id, "order placed");

    Ok(Json(json!({ "message": "Order placed", "orderId": order_id })))
}

/// List the caller's orders, newest first.
pub async fn list_mine(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
) -> Result<Json<Vec<Order>>> {
    let orders = OrderRepository::new(state.pool())
        .list_for(&user.email)
        .await?;

    Ok(Json(orders))
}

/// List every order (admin only).
pub async fn list_all(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> Result<Json<Vec<Order>>> {
    let orders = OrderRepository::new(state.pool()).list_all().await?;
    Ok(Json(orders))
}

/// Mark an order fulfilled (admin only).
pub async fn fulfill(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Value>> {
    OrderRepository::new(state.pool())
        .mark_fulfilled(OrderId::new(id))
        .await?;

    Ok(Json(json!({ "message": "Order marked as fulfilled" })))
}
