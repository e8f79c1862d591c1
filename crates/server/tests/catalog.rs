//! Catalog store behavior: categories, listings, and soft delete.

mod common;

use paper_lantern_core::{CategoryId, Price};
use paper_lantern_server::db::RepositoryError;
use paper_lantern_server::db::catalog::{
    CategoryRepository, ProductFilter, ProductInput, ProductRepository,
};

#[tokio::test]
async fn category_names_are_unique() {
    let pool = common::test_pool().await;
    let categories = CategoryRepository::new(&pool);

    categories.create("Lanterns").await.expect("create failed");
    let duplicate = categories.create("Lanterns").await;

    assert!(matches!(duplicate, Err(RepositoryError::Conflict(_))));
    assert_eq!(categories.list().await.expect("list failed").len(), 1);
}

#[tokio::test]
async fn public_listing_filters_by_category_name() {
    let pool = common::test_pool().await;
    let categories = CategoryRepository::new(&pool);
    let products = ProductRepository::new(&pool);

    let lanterns = categories.create("Lanterns").await.expect("create failed");
    let candles = categories.create("Candles").await.expect("create failed");

    for (name, category_id) in [("Silk lantern", lanterns.id), ("Beeswax candle", candles.id)] {
        products
            .create(&ProductInput {
                name: name.to_string(),
                price: Price::parse("10.00").expect("price"),
                description: None,
                image: None,
                category_id: Some(category_id),
            })
            .await
            .expect("create product failed");
    }

    let filter = ProductFilter {
        category: Some("lanterns".to_string()),
        ..ProductFilter::default()
    };
    let listed = products.list_active(&filter).await.expect("list failed");

    assert_eq!(listed.len(), 1);
    let first = listed.first().expect("missing product");
    assert_eq!(first.name, "Silk lantern");
    assert_eq!(first.category.as_deref(), Some("Lanterns"));
}

#[tokio::test]
async fn search_matches_name_and_description() {
    let pool = common::test_pool().await;
    let products = ProductRepository::new(&pool);

    common::seed_product(&pool, "Paper lantern", "12.00").await;
    common::seed_product(&pool, "Tea light", "2.00").await;

    let filter = ProductFilter {
        search: Some("lantern".to_string()),
        ..ProductFilter::default()
    };
    let listed = products.list_active(&filter).await.expect("list failed");

    assert_eq!(listed.len(), 1);
    assert_eq!(listed.first().expect("missing product").name, "Paper lantern");
}

#[tokio::test]
async fn price_bounds_narrow_the_listing() {
    let pool = common::test_pool().await;
    let products = ProductRepository::new(&pool);

    common::seed_product(&pool, "Tea light", "2.00").await;
    common::seed_product(&pool, "Paper lantern", "12.50").await;
    common::seed_product(&pool, "Storm lantern", "39.90").await;

    let filter = ProductFilter {
        min_price: Some(Price::parse("5.00").expect("price")),
        max_price: Some(Price::parse("20.00").expect("price")),
        ..ProductFilter::default()
    };
    let listed = products.list_active(&filter).await.expect("list failed");

    assert_eq!(listed.len(), 1);
    assert_eq!(listed.first().expect("missing product").name, "Paper lantern");
}

#[tokio::test]
async fn deactivated_products_leave_public_listing_but_resolve_by_id() {
    let pool = common::test_pool().await;
    let products = ProductRepository::new(&pool);

    let id = common::seed_product(&pool, "Silk lantern", "15.00").await;

    products.deactivate(id).await.expect("deactivate failed");

    let listed = products
        .list_active(&ProductFilter::default())
        .await
        .expect("list failed");
    assert!(listed.is_empty());

    // Still resolves by id for order history
    let fetched = products.get(id).await.expect("get failed");
    assert!(fetched.is_some_and(|p| !p.active));

    // And still appears in the admin listing
    let all = products.list_all().await.expect("list_all failed");
    assert_eq!(all.len(), 1);
}

#[tokio::test]
async fn deactivate_unknown_product_is_not_found() {
    let pool = common::test_pool().await;
    let products = ProductRepository::new(&pool);

    let result = products.deactivate(paper_lantern_core::ProductId::new(999)).await;
    assert!(matches!(result, Err(RepositoryError::NotFound)));
}

#[tokio::test]
async fn orphaned_products_have_no_category_name() {
    let pool = common::test_pool().await;
    let products = ProductRepository::new(&pool);

    common::seed_product(&pool, "Loose lantern", "5.00").await;

    let listed = products
        .list_active(&ProductFilter::default())
        .await
        .expect("list failed");
    let first = listed.first().expect("missing product");
    assert!(first.category.is_none());
    assert!(first.category_id.is_none());
}

#[tokio::test]
async fn create_with_unknown_category_is_not_found() {
    let pool = common::test_pool().await;
    let products = ProductRepository::new(&pool);

    let result = products
        .create(&ProductInput {
            name: "Ghost lantern".to_string(),
            price: Price::parse("9.99").expect("price"),
            description: None,
            image: None,
            category_id: Some(CategoryId::new(404)),
        })
        .await;

    assert!(matches!(result, Err(RepositoryError::NotFound)));
}

#[tokio::test]
async fn update_replaces_fields() {
    let pool = common::test_pool().await;
    let products = ProductRepository::new(&pool);

    let id = common::seed_product(&pool, "Silk lantern", "15.00").await;

    products
        .update(
            id,
            &ProductInput {
                name: "Silk lantern (large)".to_string(),
                price: Price::parse("19.50").expect("price"),
                description: Some("Hand-folded".to_string()),
                image: Some("assets/images/products/silk.jpg".to_string()),
                category_id: None,
            },
            true,
        )
        .await
        .expect("update failed");

    let updated = products
        .get(id)
        .await
        .expect("get failed")
        .expect("missing product");
    assert_eq!(updated.name, "Silk lantern (large)");
    assert_eq!(updated.price.as_cents(), 1950);
    assert_eq!(updated.image.as_deref(), Some("assets/images/products/silk.jpg"));
}
