//! Server configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `LANTERN_DATABASE_URL` - `SQLite` connection string
//!   (e.g., `sqlite:lantern.db`); falls back to `DATABASE_URL`
//!
//! ## Optional
//! - `LANTERN_HOST` - Bind address (default: 127.0.0.1)
//! - `LANTERN_PORT` - Listen port (default: 3000)
//! - `LANTERN_BASE_URL` - Public URL (default: `http://localhost:3000`);
//!   an https URL marks session cookies as Secure
//! - `LANTERN_STATIC_DIR` - Static front-end directory (default: static)
//! - `LANTERN_ASSETS_DIR` - Product image directory (default: assets)

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use secrecy::SecretString;
use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Server application configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// `SQLite` database connection URL
    pub database_url: SecretString,
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Public base URL for the storefront
    pub base_url: String,
    /// Directory holding the static front end
    pub static_dir: PathBuf,
    /// Directory holding product images referenced by `Product.image`
    pub assets_dir: PathBuf,
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let database_url = get_database_url("LANTERN_DATABASE_URL")?;
        let host = get_env_or_default("LANTERN_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("LANTERN_HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("LANTERN_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("LANTERN_PORT".to_string(), e.to_string()))?;
        let base_url = get_env_or_default("LANTERN_BASE_URL", "http://localhost:3000");
        let static_dir = PathBuf::from(get_env_or_default("LANTERN_STATIC_DIR", "static"));
        let assets_dir = PathBuf::from(get_env_or_default("LANTERN_ASSETS_DIR", "assets"));

        Ok(Self {
            database_url,
            host,
            port,
            base_url,
            static_dir,
            assets_dir,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get database URL with fallback to generic `DATABASE_URL`.
fn get_database_url(primary_key: &str) -> Result<SecretString, ConfigError> {
    // Try primary key first (e.g., LANTERN_DATABASE_URL)
    if let Ok(value) = std::env::var(primary_key) {
        return Ok(SecretString::from(value));
    }
    // Fallback to generic DATABASE_URL
    if let Ok(value) = std::env::var("DATABASE_URL") {
        return Ok(SecretString::from(value));
    }
    Err(ConfigError::MissingEnvVar(primary_key.to_string()))
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
