//! Integration tests for Paper Lantern.
//!
//! # Running Tests
//!
//! ```bash
//! # Prepare and start the server
//! cargo run -p paper-lantern-cli -- migrate
//! cargo run -p paper-lantern-cli -- seed
//! cargo run -p paper-lantern-server
//!
//! # Run integration tests against it
//! cargo test -p paper-lantern-integration-tests -- --ignored
//! ```
//!
//! Tests are `#[ignore]`d by default because they need a running server.

/// Base URL for the server API (configurable via environment).
#[must_use]
pub fn base_url() -> String {
    std::env::var("LANTERN_BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string())
}

/// Create an HTTP client with a cookie store for session handling.
///
/// # Panics
///
/// Panics if the client cannot be constructed.
#[must_use]
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .cookie_store(true)
        .build()
        .expect("Failed to create HTTP client")
}

/// A unique email per test run so reruns don't collide on registration.
#[must_use]
pub fn unique_email(prefix: &str) -> String {
    format!("{prefix}-{}@example.com", uuid::Uuid::new_v4())
}
