//! Product route handlers.
//!
//! The public listing only ever shows active products; the admin listing and
//! the by-id lookup see everything, because order history needs deactivated
//! products to keep resolving.

use axum::{
    Json,
    extract::{Path, Query, State},
    extract::rejection::JsonRejection,
};
use serde::Deserialize;
use serde_json::{Value, json};

use paper_lantern_core::{CategoryId, Price, ProductId};

use crate::db::catalog::{ProductFilter, ProductInput, ProductRepository};
use crate::error::{AppError, Result};
use crate::middleware::RequireAdmin;
use crate::models::ProductView;
use crate::state::AppState;

/// Query parameters for the public product listing.
#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    /// Case-insensitive category name filter.
    pub category: Option<String>,
    /// Free-text search against name and description.
    pub q: Option<String>,
    /// Inclusive lower price bound.
    pub min_price: Option<Price>,
    /// Inclusive upper price bound.
    pub max_price: Option<Price>,
}

/// Product create/update request body.
#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductRequest {
    pub name: String,
    pub price: Option<Price>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub category_id: Option<CategoryId>,
    /// Only honored on update; new products start active.
    pub active: Option<bool>,
}

impl ProductRequest {
    /// Validate the request into repository input.
    fn into_input(self) -> Result<(ProductInput, Option<bool>)> {
        let name = self.name.trim().to_string();
        if name.is_empty() {
            return Err(AppError::Validation("Product name required".to_string()));
        }
        let price = self
            .price
            .ok_or_else(|| AppError::Validation("Product price required".to_string()))?;

        Ok((
            ProductInput {
                name,
                price,
                description: self.description,
                image: self.image,
                category_id: self.category_id,
            },
            self.active,
        ))
    }
}

/// Unwrap a JSON body, mapping deserialization failures to a 400 with a
/// human-readable message instead of axum's default rejection.
fn json_body<T>(payload: std::result::Result<Json<T>, JsonRejection>) -> Result<T> {
    payload
        .map(|Json(body)| body)
        .map_err(|e| AppError::Validation(e.body_text()))
}

/// List active products, optionally filtered.
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<ProductView>>> {
    let filter = ProductFilter {
        category: query.category,
        search: query.q,
        min_price: query.min_price,
        max_price: query.max_price,
    };
    let products = ProductRepository::new(state.pool())
        .list_active(&filter)
        .await?;

    Ok(Json(products))
}

/// List every product including inactive ones (admin only).
pub async fn list_all(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> Result<Json<Vec<ProductView>>> {
    let products = ProductRepository::new(state.pool()).list_all().await?;
    Ok(Json(products))
}

/// Get a single product by id, active or not.
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ProductView>> {
    let product = ProductRepository::new(state.pool())
        .get(ProductId::new(id))
        .await?
        .ok_or_else(|| AppError::NotFound("Product not found".to_string()))?;

    Ok(Json(product))
}

/// Create a product (admin only).
pub async fn create(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    payload: std::result::Result<Json<ProductRequest>, JsonRejection>,
) -> Result<Json<Value>> {
    let (input, _) = json_body(payload)?.into_input()?;

    let id = ProductRepository::new(state.pool()).create(&input).await?;

    Ok(Json(json!({ "message": "Product added", "id": id })))
}

/// Replace a product's fields (admin only).
pub async fn update(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<i64>,
    payload: std::result::Result<Json<ProductRequest>, JsonRejection>,
) -> Result<Json<Value>> {
    let (input, active) = json_body(payload)?.into_input()?;

    ProductRepository::new(state.pool())
        .update(ProductId::new(id), &input, active.unwrap_or(true))
        .await?;

    Ok(Json(json!({ "message": "Product updated" })))
}

/// Deactivate a product (admin only).
///
/// This is a soft delete: the row and its image reference survive so past
/// orders keep resolving.
pub async fn remove(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Value>> {
    ProductRepository::new(state.pool())
        .deactivate(ProductId::new(id))
        .await?;

    Ok(Json(json!({ "message": "Product deactivated" })))
}
