//! Tenant management commands.
//!
//! Tenants are read-only over HTTP; this is the only write path for them.

use tracing::info;

use breadbox_core::{Tenant, TenantId};
use breadbox_server::db::{self, TenantRepository};

/// Create a tenant row.
///
/// # Errors
///
/// Returns an error if the hue is out of range, the database is
/// unreachable, or the id/slug is already taken.
pub async fn create(
    id: Option<String>,
    slug: String,
    color: String,
    hue: i16,
    message: String,
    phone: String,
) -> Result<(), Box<dyn std::error::Error>> {
    if !(0..=360).contains(&hue) {
        return Err(format!("hue must be between 0 and 360 (got {hue})").into());
    }

    let database_url = super::database_url()?;
    let pool = db::create_pool(&database_url).await?;

    let tenant = Tenant {
        id: id.map_or_else(TenantId::generate, TenantId::new),
        slug,
        color,
        hue,
        message,
        phone,
    };

    TenantRepository::new(&pool).create(&tenant).await?;

    info!(id = %tenant.id, slug = %tenant.slug, "Tenant created");
    Ok(())
}
