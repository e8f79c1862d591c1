//! Category route handlers.

use axum::{Json, extract::State};
use serde::Deserialize;
use serde_json::{Value, json};

use crate::db::catalog::CategoryRepository;
use crate::error::{AppError, Result};
use crate::middleware::RequireAdmin;
use crate::models::Category;
use crate::state::AppState;

/// Category creation request body.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct CreateCategoryRequest {
    pub name: String,
}

/// List all categories.
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Category>>> {
    let categories = CategoryRepository::new(state.pool()).list().await?;
    Ok(Json(categories))
}

/// Create a category (admin only).
pub async fn create(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Json(req): Json<CreateCategoryRequest>,
) -> Result<Json<Value>> {
    let name = req.name.trim();
    if name.is_empty() {
        return Err(AppError::Validation("Category name required".to_string()));
    }

    let category = CategoryRepository::new(state.pool()).create(name).await?;

    Ok(Json(json!({ "message": "Category added", "id": category.id })))
}
