//! Cart manager behavior: get-or-create, merge-on-add, quantity floor,
//! and identity scoping.

mod common;

use sqlx::Row;

use paper_lantern_core::{CartItemId, Email, ProductId};
use paper_lantern_server::db::RepositoryError;
use paper_lantern_server::db::carts::CartRepository;

fn email(s: &str) -> Email {
    Email::parse(s).expect("invalid email in test")
}

#[tokio::test]
async fn get_or_create_is_idempotent() {
    let pool = common::test_pool().await;
    let carts = CartRepository::new(&pool);
    let ada = email("ada@example.com");

    let first = carts.get_or_create(&ada).await.expect("get_or_create failed");
    let second = carts.get_or_create(&ada).await.expect("get_or_create failed");

    assert_eq!(first.id, second.id);
}

#[tokio::test]
async fn concurrent_first_access_creates_one_cart() {
    let pool = common::test_pool().await;
    let carts = CartRepository::new(&pool);
    let ada = email("ada@example.com");

    let (a, b) = tokio::join!(carts.get_or_create(&ada), carts.get_or_create(&ada));
    let a = a.expect("get_or_create failed");
    let b = b.expect("get_or_create failed");

    assert_eq!(a.id, b.id);

    let count: i64 = sqlx::query("SELECT COUNT(*) AS n FROM carts WHERE user_email = ?")
        .bind(ada.as_str())
        .fetch_one(&pool)
        .await
        .expect("count failed")
        .try_get("n")
        .expect("missing column");
    assert_eq!(count, 1);
}

#[tokio::test]
async fn adding_same_product_merges_into_one_line() {
    let pool = common::test_pool().await;
    let carts = CartRepository::new(&pool);
    let ada = email("ada@example.com");

    let product = common::seed_product(&pool, "Silk lantern", "10.00").await;
    let cart = carts.get_or_create(&ada).await.expect("get_or_create failed");

    for quantity in [1, 2, 3] {
        carts
            .add_item(cart.id, product, quantity)
            .await
            .expect("add_item failed");
    }

    let items = carts.items(cart.id).await.expect("items failed");
    assert_eq!(items.len(), 1, "one line per (cart, product)");
    assert_eq!(items.first().expect("missing line").quantity, 6);
}

#[tokio::test]
async fn add_rejects_missing_or_inactive_products() {
    let pool = common::test_pool().await;
    let carts = CartRepository::new(&pool);
    let ada = email("ada@example.com");

    let cart = carts.get_or_create(&ada).await.expect("get_or_create failed");

    let missing = carts.add_item(cart.id, ProductId::new(999), 1).await;
    assert!(matches!(missing, Err(RepositoryError::NotFound)));

    let product = common::seed_product(&pool, "Retired lantern", "10.00").await;
    paper_lantern_server::db::catalog::ProductRepository::new(&pool)
        .deactivate(product)
        .await
        .expect("deactivate failed");

    let inactive = carts.add_item(cart.id, product, 1).await;
    assert!(matches!(inactive, Err(RepositoryError::NotFound)));
}

#[tokio::test]
async fn set_quantity_floors_at_one() {
    let pool = common::test_pool().await;
    let carts = CartRepository::new(&pool);
    let ada = email("ada@example.com");

    let product = common::seed_product(&pool, "Silk lantern", "10.00").await;
    let cart = carts.get_or_create(&ada).await.expect("get_or_create failed");
    carts.add_item(cart.id, product, 3).await.expect("add_item failed");

    let items = carts.items(cart.id).await.expect("items failed");
    let line = items.first().expect("missing line");

    carts
        .set_quantity(cart.id, line.id, 0)
        .await
        .expect("set_quantity failed");

    let items = carts.items(cart.id).await.expect("items failed");
    assert_eq!(items.first().expect("missing line").quantity, 1);
}

#[tokio::test]
async fn mutations_are_scoped_to_the_callers_cart() {
    let pool = common::test_pool().await;
    let carts = CartRepository::new(&pool);

    let product = common::seed_product(&pool, "Silk lantern", "10.00").await;

    let ada_cart = carts
        .get_or_create(&email("ada@example.com"))
        .await
        .expect("get_or_create failed");
    let grace_cart = carts
        .get_or_create(&email("grace@example.com"))
        .await
        .expect("get_or_create failed");

    carts
        .add_item(ada_cart.id, product, 2)
        .await
        .expect("add_item failed");
    let ada_line = carts.items(ada_cart.id).await.expect("items failed")[0].id;

    // Grace cannot touch Ada's line through her own cart scope
    let update = carts.set_quantity(grace_cart.id, ada_line, 5).await;
    assert!(matches!(update, Err(RepositoryError::NotFound)));

    let remove = carts.remove_item(grace_cart.id, ada_line).await;
    assert!(matches!(remove, Err(RepositoryError::NotFound)));

    // Ada's line is untouched
    let items = carts.items(ada_cart.id).await.expect("items failed");
    assert_eq!(items.first().expect("missing line").quantity, 2);
}

#[tokio::test]
async fn remove_and_clear() {
    let pool = common::test_pool().await;
    let carts = CartRepository::new(&pool);
    let ada = email("ada@example.com");

    let lantern = common::seed_product(&pool, "Silk lantern", "10.00").await;
    let candle = common::seed_product(&pool, "Beeswax candle", "4.00").await;

    let cart = carts.get_or_create(&ada).await.expect("get_or_create failed");
    carts.add_item(cart.id, lantern, 1).await.expect("add_item failed");
    carts.add_item(cart.id, candle, 2).await.expect("add_item failed");

    let items = carts.items(cart.id).await.expect("items failed");
    assert_eq!(items.len(), 2);

    carts
        .remove_item(cart.id, items[0].id)
        .await
        .expect("remove_item failed");
    assert_eq!(carts.items(cart.id).await.expect("items failed").len(), 1);

    let unknown = carts.remove_item(cart.id, CartItemId::new(999)).await;
    assert!(matches!(unknown, Err(RepositoryError::NotFound)));

    carts.clear(cart.id).await.expect("clear failed");
    assert!(carts.items(cart.id).await.expect("items failed").is_empty());
}

#[tokio::test]
async fn cart_view_joins_product_details() {
    let pool = common::test_pool().await;
    let carts = CartRepository::new(&pool);
    let ada = email("ada@example.com");

    let product = common::seed_product(&pool, "Silk lantern", "12.50").await;
    let cart = carts.get_or_create(&ada).await.expect("get_or_create failed");
    carts.add_item(cart.id, product, 2).await.expect("add_item failed");

    let items = carts.items(cart.id).await.expect("items failed");
    let line = items.first().expect("missing line");

    assert_eq!(line.product_id, product);
    assert_eq!(line.name, "Silk lantern");
    assert_eq!(line.price.as_cents(), 1250);
    assert_eq!(line.quantity, 2);
}
