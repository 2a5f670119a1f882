//! Product repository for database operations.
//!
//! Products live in `catalog.product` as JSONB documents keyed by
//! `(tenant_id, id)`. Documents are cast through [`breadbox_core::cast`] on
//! the way out, so legacy rows (pre-`visibility`) read back normalized.

use sqlx::PgPool;

use breadbox_core::{Product, ProductId, TenantId, cast};

use super::RepositoryError;

/// Repository for tenant-scoped product rows.
pub struct ProductRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ProductRepository<'a> {
    /// Create a new product repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Fetch every product in a tenant's collection, cast and normalized.
    ///
    /// An unknown tenant yields an empty list, matching the document-store
    /// behavior of reading an empty subcollection.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails and
    /// `RepositoryError::DataCorruption` if a stored doc does not cast.
    pub async fn list(&self, tenant: &TenantId) -> Result<Vec<Product>, RepositoryError> {
        let rows: Vec<(String, serde_json::Value)> = sqlx::query_as(
            "SELECT id, doc FROM catalog.product WHERE tenant_id = $1 ORDER BY created_at, id",
        )
        .bind(tenant.as_str())
        .fetch_all(self.pool)
        .await?;

        rows.into_iter()
            .map(|(id, doc)| {
                let id = ProductId::new(id);
                cast::fetch(&id, doc).map_err(|e| {
                    RepositoryError::DataCorruption(format!("invalid product doc {id}: {e}"))
                })
            })
            .collect()
    }

    /// Insert a new product row.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the id already exists or the
    /// tenant does not, `RepositoryError::Database` otherwise.
    pub async fn insert(
        &self,
        tenant: &TenantId,
        product: &Product,
    ) -> Result<(), RepositoryError> {
        sqlx::query("INSERT INTO catalog.product (tenant_id, id, doc) VALUES ($1, $2, $3)")
            .bind(tenant.as_str())
            .bind(product.id.as_str())
            .bind(encode_doc(product)?)
            .execute(self.pool)
            .await
            .map_err(map_constraint)?;

        Ok(())
    }

    /// Overwrite an existing product row's document.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no such row exists.
    pub async fn update(
        &self,
        tenant: &TenantId,
        product: &Product,
    ) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            "UPDATE catalog.product SET doc = $3, updated_at = now()
             WHERE tenant_id = $1 AND id = $2",
        )
        .bind(tenant.as_str())
        .bind(product.id.as_str())
        .bind(encode_doc(product)?)
        .execute(self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }

    /// Delete a product row. Deleting an absent row is a no-op, matching
    /// document-store delete semantics.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn delete(&self, tenant: &TenantId, id: &ProductId) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM catalog.product WHERE tenant_id = $1 AND id = $2")
            .bind(tenant.as_str())
            .bind(id.as_str())
            .execute(self.pool)
            .await?;

        Ok(())
    }

    /// Write a batch of products in a single transaction, inserting new ids
    /// and overwriting existing ones. The whole batch commits or none of it
    /// does, like the original batched writes.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the tenant does not exist,
    /// `RepositoryError::Database` otherwise.
    pub async fn upsert_all(
        &self,
        tenant: &TenantId,
        products: &[Product],
    ) -> Result<(), RepositoryError> {
        let mut tx = self.pool.begin().await?;

        for product in products {
            sqlx::query(
                "INSERT INTO catalog.product (tenant_id, id, doc) VALUES ($1, $2, $3)
                 ON CONFLICT (tenant_id, id)
                 DO UPDATE SET doc = EXCLUDED.doc, updated_at = now()",
            )
            .bind(tenant.as_str())
            .bind(product.id.as_str())
            .bind(encode_doc(product)?)
            .execute(&mut *tx)
            .await
            .map_err(map_constraint)?;
        }

        tx.commit().await?;

        Ok(())
    }
}

/// Serialize a product into its stored document form.
fn encode_doc(product: &Product) -> Result<serde_json::Value, RepositoryError> {
    serde_json::to_value(product)
        .map_err(|e| RepositoryError::DataCorruption(format!("unserializable product: {e}")))
}

/// Map constraint violations onto `Conflict`.
fn map_constraint(e: sqlx::Error) -> RepositoryError {
    if let sqlx::Error::Database(ref db_err) = e {
        if db_err.is_unique_violation() {
            return RepositoryError::Conflict("product id already exists".to_owned());
        }
        if db_err.is_foreign_key_violation() {
            return RepositoryError::Conflict("tenant does not exist".to_owned());
        }
    }
    RepositoryError::Database(e)
}
