//! Seed the catalog with demo categories and products.
//!
//! Intended for local development so the storefront has something to show.
//! The command is idempotent: it refuses to run if products already exist.

use sqlx::Row;

use paper_lantern_core::Price;
use paper_lantern_server::db;
use paper_lantern_server::db::catalog::{CategoryRepository, ProductInput, ProductRepository};

/// Demo catalog: (category, [(product, price, description)]).
const DEMO_CATALOG: &[(&str, &[(&str, &str, &str)])] = &[
    (
        "Lanterns",
        &[
            ("Silk lantern", "24.00", "Hand-folded silk over a bamboo frame"),
            ("Paper lantern", "12.50", "Classic rice-paper globe"),
            ("Storm lantern", "39.90", "Weatherproof, for the garden"),
        ],
    ),
    (
        "Candles",
        &[
            ("Beeswax candle", "5.50", "Slow-burning, lightly scented"),
            ("Tea lights (12)", "4.00", "A dozen tea lights"),
        ],
    ),
    (
        "Garlands",
        &[("Festival garland", "18.00", "Ten lanterns on a cotton cord")],
    ),
];

/// Seed the database with the demo catalog.
///
/// # Errors
///
/// Returns an error if the database is unreachable or not migrated.
pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let database_url = super::database_url()?;
    let pool = db::create_pool(&database_url).await?;

    let existing: i64 = sqlx::query("SELECT COUNT(*) AS n FROM products")
        .fetch_one(&pool)
        .await?
        .try_get("n")?;
    if existing > 0 {
        tracing::info!(products = existing, "catalog already seeded, nothing to do");
        return Ok(());
    }

    let categories = CategoryRepository::new(&pool);
    let products = ProductRepository::new(&pool);

    for (category_name, items) in DEMO_CATALOG {
        let category = categories.create(category_name).await?;

        for (name, price, description) in *items {
            products
                .create(&ProductInput {
                    name: (*name).to_string(),
                    price: Price::parse(price)?,
                    description: Some((*description).to_string()),
                    image: None,
                    category_id: Some(category.id),
                })
                .await?;
        }
    }

    tracing::info!("demo catalog seeded");
    Ok(())
}
