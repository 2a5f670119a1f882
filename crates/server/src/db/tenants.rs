//! Tenant repository for database operations.
//!
//! Tenants are read-only through the HTTP surface; rows are created by the
//! CLI (`breadbox tenant create`).

use sqlx::PgPool;

use breadbox_core::{Tenant, TenantId};

use super::RepositoryError;

/// Row shape for `catalog.tenant`.
#[derive(sqlx::FromRow)]
struct TenantRow {
    id: String,
    slug: String,
    color: String,
    hue: i16,
    message: String,
    phone: String,
}

impl From<TenantRow> for Tenant {
    fn from(row: TenantRow) -> Self {
        Self {
            id: TenantId::new(row.id),
            slug: row.slug,
            color: row.color,
            hue: row.hue,
            message: row.message,
            phone: row.phone,
        }
    }
}

/// Repository for tenant database operations.
pub struct TenantRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> TenantRepository<'a> {
    /// Create a new tenant repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Get a tenant by its id.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get(&self, id: &TenantId) -> Result<Option<Tenant>, RepositoryError> {
        let row: Option<TenantRow> = sqlx::query_as(
            "SELECT id, slug, color, hue, message, phone FROM catalog.tenant WHERE id = $1",
        )
        .bind(id.as_str())
        .fetch_optional(self.pool)
        .await?;

        Ok(row.map(Tenant::from))
    }

    /// Get a tenant by its storefront slug.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_by_slug(&self, slug: &str) -> Result<Option<Tenant>, RepositoryError> {
        let row: Option<TenantRow> = sqlx::query_as(
            "SELECT id, slug, color, hue, message, phone FROM catalog.tenant WHERE slug = $1",
        )
        .bind(slug)
        .fetch_optional(self.pool)
        .await?;

        Ok(row.map(Tenant::from))
    }

    /// Create a tenant row (CLI only).
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the id or slug is taken.
    pub async fn create(&self, tenant: &Tenant) -> Result<(), RepositoryError> {
        sqlx::query(
            "INSERT INTO catalog.tenant (id, slug, color, hue, message, phone)
             VALUES ($1, $2, $3, $4, $5, $6)",
        )
        .bind(tenant.id.as_str())
        .bind(&tenant.slug)
        .bind(&tenant.color)
        .bind(tenant.hue)
        .bind(&tenant.message)
        .bind(&tenant.phone)
        .execute(self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(ref db_err) = e
                && db_err.is_unique_violation()
            {
                return RepositoryError::Conflict("tenant id or slug already exists".to_owned());
            }
            RepositoryError::Database(e)
        })?;

        Ok(())
    }
}
