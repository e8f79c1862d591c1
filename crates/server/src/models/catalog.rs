//! Catalog models: categories and products.

use serde::Serialize;

use paper_lantern_core::{CategoryId, Price, ProductId};

/// A product category.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
}

/// A product joined with its category name for display.
///
/// `category` is `None` for orphaned products; the front end renders those
/// as "Uncategorised".
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ProductView {
    pub id: ProductId,
    pub name: String,
    #[sqlx(rename = "price_cents")]
    pub price: Price,
    pub description: Option<String>,
    pub image: Option<String>,
    pub category_id: Option<CategoryId>,
    pub category: Option<String>,
    pub active: bool,
}
