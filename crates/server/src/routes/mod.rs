//! HTTP route handlers for the catalog API.
//!
//! # Route Structure
//!
//! ```text
//! GET    /health                                - Liveness check
//! GET    /health/ready                          - Readiness check (pings the pool)
//!
//! # Tenants (read-only; rows are CLI-managed)
//! GET    /tenants/{slug}                        - Tenant branding record (by slug)
//!
//! # Products (tenant-scoped)
//! GET    /tenants/{tenant}/products             - List catalog
//! POST   /tenants/{tenant}/products             - Create product
//! PUT    /tenants/{tenant}/products             - Upsert batch
//! PUT    /tenants/{tenant}/products/{id}        - Update product
//! DELETE /tenants/{tenant}/products/{id}        - Remove product
//! POST   /tenants/{tenant}/products/populate    - Seed demo catalog
//! ```

pub mod health;
pub mod products;
pub mod tenants;

use axum::{
    Router,
    routing::{get, post, put},
};

use crate::state::AppState;

/// Create the full API router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health))
        .route("/health/ready", get(health::readiness))
        .route("/tenants/{tenant}", get(tenants::show))
        .route(
            "/tenants/{tenant}/products",
            get(products::index)
                .post(products::create)
                .put(products::upsert),
        )
        .route(
            "/tenants/{tenant}/products/{id}",
            put(products::update).delete(products::remove),
        )
        .route(
            "/tenants/{tenant}/products/populate",
            post(products::populate),
        )
}
