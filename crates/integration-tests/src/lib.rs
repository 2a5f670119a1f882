//! Integration tests for Breadbox.
//!
//! # Running Tests
//!
//! ```bash
//! # Start a database and run migrations
//! breadbox migrate
//!
//! # Create the test tenant the suite expects
//! breadbox tenant create --id demo-tenant --slug demo-tenant
//!
//! # Start the server, then run the suite
//! cargo run -p breadbox-server &
//! cargo test -p breadbox-integration-tests -- --ignored
//! ```
//!
//! Tests live in `tests/` and are `#[ignore]`d so a plain `cargo test`
//! passes without any running services.

/// Base URL for the catalog API (configurable via environment).
#[must_use]
pub fn base_url() -> String {
    std::env::var("BREADBOX_BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string())
}

/// Tenant id the suite seeds into (must exist; see crate docs).
#[must_use]
pub fn test_tenant() -> String {
    std::env::var("BREADBOX_TEST_TENANT").unwrap_or_else(|_| "demo-tenant".to_string())
}
