//! Database migration command.
//!
//! # Usage
//!
//! ```bash
//! pl-cli migrate
//! ```
//!
//! # Environment Variables
//!
//! - `LANTERN_DATABASE_URL` - `SQLite` connection string (or `DATABASE_URL`)

use paper_lantern_server::db;

/// Run database migrations.
///
/// # Errors
///
/// Returns an error if the database URL is missing, the connection fails, or
/// a migration fails to apply.
pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let database_url = super::database_url()?;

    tracing::info!("Connecting to database...");
    let pool = db::create_pool(&database_url).await?;

    tracing::info!("Running migrations...");
    db::MIGRATOR.run(&pool).await?;

    tracing::info!("Migrations complete!");
    Ok(())
}
