//! Catalog repositories: categories and products.
//!
//! Public product listings always filter `active = 1`; the admin listing
//! returns every row. Deactivation is a logical delete so past order lines
//! keep resolving.

use sqlx::{QueryBuilder, Sqlite, SqlitePool};

use paper_lantern_core::{CategoryId, Price, ProductId};

use super::RepositoryError;
use crate::models::{Category, ProductView};

/// Read-side filters for the public product listing.
#[derive(Debug, Default, Clone)]
pub struct ProductFilter {
    /// Case-insensitive category name.
    pub category: Option<String>,
    /// Free-text match against product name and description.
    pub search: Option<String>,
    /// Inclusive lower price bound.
    pub min_price: Option<Price>,
    /// Inclusive upper price bound.
    pub max_price: Option<Price>,
}

/// Fields accepted when creating or replacing a product.
#[derive(Debug, Clone)]
pub struct ProductInput {
    pub name: String,
    pub price: Price,
    pub description: Option<String>,
    pub image: Option<String>,
    pub category_id: Option<CategoryId>,
}

const PRODUCT_SELECT: &str = "SELECT products.id, products.name, products.price_cents, \
     products.description, products.image, products.category_id, \
     categories.name AS category, products.active \
     FROM products \
     LEFT JOIN categories ON products.category_id = categories.id";

/// Repository for category database operations.
pub struct CategoryRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> CategoryRepository<'a> {
    /// Create a new category repository.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List all categories ordered by name.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self) -> Result<Vec<Category>, RepositoryError> {
        let categories =
            sqlx::query_as::<_, Category>("SELECT id, name FROM categories ORDER BY name")
                .fetch_all(self.pool)
                .await?;

        Ok(categories)
    }

    /// Create a new category.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the name is already taken.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn create(&self, name: &str) -> Result<Category, RepositoryError> {
        let category = sqlx::query_as::<_, Category>(
            "INSERT INTO categories (name) VALUES (?) RETURNING id, name",
        )
        .bind(name)
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(ref db_err) = e
                && db_err.is_unique_violation()
            {
                return RepositoryError::Conflict("category already exists".to_owned());
            }
            RepositoryError::Database(e)
        })?;

        Ok(category)
    }
}

/// Repository for product database operations.
pub struct ProductRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> ProductRepository<'a> {
    /// Create a new product repository.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List active products, optionally filtered by category name and
    /// free-text search.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_active(
        &self,
        filter: &ProductFilter,
    ) -> Result<Vec<ProductView>, RepositoryError> {
        let mut query = QueryBuilder::<Sqlite>::new(PRODUCT_SELECT);
        query.push(" WHERE products.active = 1");

        if let Some(category) = &filter.category {
            query.push(" AND LOWER(categories.name) = LOWER(");
            query.push_bind(category);
            query.push(")");
        }

        if let Some(search) = &filter.search {
            let pattern = format!("%{search}%");
            query.push(" AND (products.name LIKE ");
            query.push_bind(pattern.clone());
            query.push(" OR products.description LIKE ");
            query.push_bind(pattern);
            query.push(")");
        }

        if let Some(min_price) = filter.min_price {
            query.push(" AND products.price_cents >= ");
            query.push_bind(min_price);
        }

        if let Some(max_price) = filter.max_price {
            query.push(" AND products.price_cents <= ");
            query.push_bind(max_price);
        }

        query.push(" ORDER BY products.id");

        let products = query
            .build_query_as::<ProductView>()
            .fetch_all(self.pool)
            .await?;

        Ok(products)
    }

    /// List every product regardless of the active flag (admin view).
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_all(&self) -> Result<Vec<ProductView>, RepositoryError> {
        let products =
            sqlx::query_as::<_, ProductView>(&format!("{PRODUCT_SELECT} ORDER BY products.id"))
                .fetch_all(self.pool)
                .await?;

        Ok(products)
    }

    /// Get a product by id, active or not.
    ///
    /// Inactive products still resolve here so historical order lines can be
    /// displayed.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get(&self, id: ProductId) -> Result<Option<ProductView>, RepositoryError> {
        let product =
            sqlx::query_as::<_, ProductView>(&format!("{PRODUCT_SELECT} WHERE products.id = ?"))
                .bind(id)
                .fetch_optional(self.pool)
                .await?;

        Ok(product)
    }

    /// Create a new product, active by default.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the referenced category doesn't
    /// exist. Returns `RepositoryError::Database` for other database errors.
    pub async fn create(&self, input: &ProductInput) -> Result<ProductId, RepositoryError> {
        let row: (i64,) = sqlx::query_as(
            r"
            INSERT INTO products (name, price_cents, description, image, category_id)
            VALUES (?, ?, ?, ?, ?)
            RETURNING id
            ",
        )
        .bind(&input.name)
        .bind(input.price)
        .bind(&input.description)
        .bind(&input.image)
        .bind(input.category_id)
        .fetch_one(self.pool)
        .await
        .map_err(map_category_fk)?;

        Ok(ProductId::new(row.0))
    }

    /// Replace a product's fields, including the active flag.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the product (or referenced
    /// category) doesn't exist. Returns `RepositoryError::Database` for other
    /// database errors.
    pub async fn update(
        &self,
        id: ProductId,
        input: &ProductInput,
        active: bool,
    ) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            r"
            UPDATE products
            SET name = ?, price_cents = ?, description = ?, image = ?, category_id = ?, active = ?
            WHERE id = ?
            ",
        )
        .bind(&input.name)
        .bind(input.price)
        .bind(&input.description)
        .bind(&input.image)
        .bind(input.category_id)
        .bind(active)
        .bind(id)
        .execute(self.pool)
        .await
        .map_err(map_category_fk)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }

    /// Soft-delete a product by clearing its active flag.
    ///
    /// The row and its image reference are kept because past orders reference
    /// the product by id.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the product doesn't exist.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn deactivate(&self, id: ProductId) -> Result<(), RepositoryError> {
        let result = sqlx::query("UPDATE products SET active = 0 WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}

/// Map a foreign-key violation on `category_id` to `NotFound`.
fn map_category_fk(e: sqlx::Error) -> RepositoryError {
    if let sqlx::Error::Database(ref db_err) = e
        && db_err.is_foreign_key_violation()
    {
        return RepositoryError::NotFound;
    }
    RepositoryError::Database(e)
}
