//! Cart route handlers.
//!
//! Every cart operation derives the identity from the live session, so a
//! caller can only ever see or mutate their own cart.

use axum::{
    Json,
    extract::{Path, State},
    extract::rejection::JsonRejection,
};
use serde::Deserialize;
use serde_json::{Value, json};

use paper_lantern_core::{CartItemId, ProductId};

use crate::db::carts::CartRepository;
use crate::error::{AppError, Result};
use crate::middleware::RequireAuth;
use crate::models::CartItemView;
use crate::state::AppState;

/// Add-to-cart request body.
#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct AddToCartRequest {
    pub product_id: Option<ProductId>,
    pub quantity: Option<i64>,
}

/// Quantity update request body.
#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateCartRequest {
    pub item_id: Option<CartItemId>,
    pub quantity: Option<i64>,
}

fn json_body<T>(payload: std::result::Result<Json<T>, JsonRejection>) -> Result<T> {
    payload
        .map(|Json(body)| body)
        .map_err(|e| AppError::Validation(e.body_text()))
}

/// Show the caller's cart lines with product details.
pub async fn show(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
) -> Result<Json<Vec<CartItemView>>> {
    let carts = CartRepository::new(state.pool());
    let cart = carts.get_or_create(&user.email).await?;
    let items = carts.items(cart.id).await?;

    Ok(Json(items))
}

/// Add a product to the caller's cart, merging quantities.
pub async fn add(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
    payload: std::result::Result<Json<AddToCartRequest>, JsonRejection>,
) -> Result<Json<Value>> {
    let req = json_body(payload)?;
    let product_id = req
        .product_id
        .ok_or_else(|| AppError::Validation("Missing fields".to_string()))?;

    let carts = CartRepository::new(state.pool());
    let cart = carts.get_or_create(&user.email).await?;
    carts
        .add_item(cart.id, product_id, req.quantity.unwrap_or(1))
        .await?;

    Ok(Json(json!({ "message": "Added to cart" })))
}

/// Set a line's quantity, floored at 1.
pub async fn update(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
    payload: std::result::Result<Json<UpdateCartRequest>, JsonRejection>,
) -> Result<Json<Value>> {
    let req = json_body(payload)?;
    let (Some(item_id), Some(quantity)) = (req.item_id, req.quantity) else {
        return Err(AppError::Validation("Missing fields".to_string()));
    };

    let carts = CartRepository::new(state.pool());
    let cart = carts.get_or_create(&user.email).await?;
    carts.set_quantity(cart.id, item_id, quantity).await?;

    Ok(Json(json!({ "message": "Quantity updated" })))
}

/// Remove a line from the caller's cart.
pub async fn remove(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Value>> {
    let carts = CartRepository::new(state.pool());
    let cart = carts.get_or_create(&user.email).await?;
    carts.remove_item(cart.id, CartItemId::new(id)).await?;

    Ok(Json(json!({ "message": "Item removed" })))
}

/// Empty the caller's cart.
pub async fn clear(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
) -> Result<Json<Value>> {
    let carts = CartRepository::new(state.pool());
    let cart = carts.get_or_create(&user.email).await?;
    carts.clear(cart.id).await?;

    Ok(Json(json!({ "message": "Cart cleared" })))
}
