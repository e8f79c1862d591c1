//! HTTP route handlers.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                      - Liveness check
//! GET  /health/ready                - Readiness check (verifies database)
//!
//! # Auth
//! POST /api/auth/register           - Create an account
//! POST /api/auth/login              - Login (sets session cookie)
//! GET  /api/auth/session            - Current session info
//! POST /api/auth/logout             - Destroy the session
//!
//! # Catalog (public)
//! GET  /api/categories              - List categories
//! GET  /api/products                - Active products (?category=, ?q=)
//! GET  /api/products/{id}           - Single product (active or not)
//!
//! # Cart (requires auth; identity comes from the session)
//! GET    /api/cart                  - Cart lines with product details
//! POST   /api/cart/add              - Add a product (merges quantities)
//! PUT    /api/cart/update           - Set a line's quantity (floor 1)
//! DELETE /api/cart/remove/{id}      - Remove a line
//! DELETE /api/cart/clear            - Empty the cart
//!
//! # Orders
//! POST /api/checkout                - Place an order from the cart
//! GET  /api/orders                  - Own orders, newest first
//!
//! # Admin (requires admin session)
//! GET  /api/admin/categories        - List categories
//! POST /api/admin/categories        - Create a category
//! GET  /api/admin/products          - All products, inactive included
//! POST /api/admin/products          - Create a product
//! PUT  /api/admin/products/{id}     - Replace a product's fields
//! DELETE /api/admin/products/{id}   - Deactivate a product (soft delete)
//! GET  /api/admin/orders            - All orders
//! PUT  /api/admin/orders/{id}/fulfill - Mark an order fulfilled
//! ```

pub mod auth;
pub mod cart;
pub mod categories;
pub mod orders;
pub mod products;

use axum::{
    Router,
    routing::{delete, get, post, put},
};

use crate::state::AppState;

/// Create the auth routes router.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        .route("/session", get(auth::session))
        .route("/logout", post(auth::logout))
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/add", post(cart::add))
        .route("/update", put(cart::update))
        .route("/remove/{id}", delete(cart::remove))
        .route("/clear", delete(cart::clear))
}

/// Create the admin routes router.
pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/categories",
            get(categories::list).post(categories::create),
        )
        .route("/products", get(products::list_all).post(products::create))
        .route(
            "/products/{id}",
            put(products::update).delete(products::remove),
        )
        .route("/orders", get(orders::list_all))
        .route("/orders/{id}/fulfill", put(orders::fulfill))
}

/// Create all routes for the server.
pub fn routes() -> Router<AppState> {
    Router::new()
        .nest("/api/auth", auth_routes())
        // Public catalog
        .route("/api/categories", get(categories::list))
        .route("/api/products", get(products::list))
        .route("/api/products/{id}", get(products::show))
        // Cart + checkout
        .nest("/api/cart", cart_routes())
        .route("/api/checkout", post(orders::checkout))
        .route("/api/orders", get(orders::list_mine))
        // Admin panel API
        .nest("/api/admin", admin_routes())
}
