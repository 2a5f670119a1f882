//! Seed a tenant's catalog with demo or exported product documents.
//!
//! Reads a JSON array of raw product documents (the stored document format,
//! legacy fields included) and writes them in one transaction. Without
//! `--file` the built-in demo catalog is used - the same one the server's
//! populate endpoint seeds.

use std::path::Path;

use tracing::info;

use breadbox_core::TenantId;
use breadbox_server::catalog::seed;
use breadbox_server::db::{self, ProductRepository, TenantRepository};

/// Seed a tenant's catalog.
///
/// # Errors
///
/// Returns an error if the file is missing or malformed, the tenant does
/// not exist, or the write fails.
pub async fn run(tenant: &str, file: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let products = match file {
        Some(file) => {
            let path = Path::new(file);
            if !path.exists() {
                return Err(format!("File not found: {file}").into());
            }

            info!(path = %file, "Loading catalog from file");
            let content = tokio::fs::read_to_string(path).await?;
            seed::parse_catalog(&content)?
        }
        None => {
            info!("Using built-in demo catalog");
            seed::demo_catalog()?
        }
    };

    info!(count = products.len(), "Catalog parsed");

    let database_url = super::database_url()?;
    let pool = db::create_pool(&database_url).await?;

    let tenant = TenantId::new(tenant);
    if TenantRepository::new(&pool).get(&tenant).await?.is_none() {
        return Err(format!("Tenant not found: {tenant}").into());
    }

    ProductRepository::new(&pool)
        .upsert_all(&tenant, &products)
        .await?;

    info!(tenant = %tenant, count = products.len(), "Seeding complete!");
    Ok(())
}
