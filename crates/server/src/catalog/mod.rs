//! Tenant catalog service: cache-aside reads, cast-then-write mutations.
//!
//! Control flow for reads: check the cache, on miss fetch all rows, cast the
//! documents, fill the cache, return. Every mutation writes through the
//! repository first and then patches the cache entry in place (`add` /
//! `update` / `pluck`), so no path leaves the cache stale. Bulk seeding
//! drops the tenant entry wholesale instead of patching product by product.

pub mod cache;
pub mod seed;

use std::sync::Arc;

use serde_json::Value;
use sqlx::PgPool;
use thiserror::Error;
use tracing::{debug, instrument};

use breadbox_core::cast::CastError;
use breadbox_core::{Product, ProductId, TenantId, cast};

use crate::config::CacheConfig;
use crate::db::{ProductRepository, RepositoryError};

use cache::CatalogCache;
use seed::SeedError;

/// Errors from catalog operations.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// A document failed schema coercion.
    #[error(transparent)]
    Cast(#[from] CastError),

    /// The backing store failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    /// The seed catalog failed to load.
    #[error(transparent)]
    Seed(#[from] SeedError),
}

/// Tenant-scoped product catalog operations.
///
/// Cheaply cloneable; the pool and cache are shared behind an `Arc`.
#[derive(Clone)]
pub struct CatalogService {
    inner: Arc<CatalogServiceInner>,
}

struct CatalogServiceInner {
    pool: PgPool,
    cache: CatalogCache,
}

impl CatalogService {
    /// Create a catalog service over a pool, with cache tuning from config.
    #[must_use]
    pub fn new(pool: PgPool, cache_config: &CacheConfig) -> Self {
        Self {
            inner: Arc::new(CatalogServiceInner {
                pool,
                cache: CatalogCache::new(cache_config),
            }),
        }
    }

    fn repo(&self) -> ProductRepository<'_> {
        ProductRepository::new(&self.inner.pool)
    }

    /// List a tenant's catalog, cached or freshly fetched and cast.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the store query fails or a stored doc is
    /// corrupt.
    #[instrument(skip(self), fields(tenant = %tenant))]
    pub async fn list(&self, tenant: &TenantId) -> Result<Arc<Vec<Product>>, CatalogError> {
        if let Some(cached) = self.inner.cache.get(tenant).await {
            debug!("catalog cache hit");
            return Ok(cached);
        }

        let products = Arc::new(self.repo().list(tenant).await?);
        self.inner
            .cache
            .set(tenant.clone(), Arc::clone(&products))
            .await;
        debug!(count = products.len(), "catalog cache filled");

        Ok(products)
    }

    /// Create a product from a client draft and return the stored product.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the draft does not cast or the insert fails.
    #[instrument(skip(self, draft), fields(tenant = %tenant))]
    pub async fn create(&self, tenant: &TenantId, draft: Value) -> Result<Product, CatalogError> {
        let product = cast::create(draft)?;
        self.repo().insert(tenant, &product).await?;
        self.inner.cache.add(tenant, product.clone()).await;

        Ok(product)
    }

    /// Overwrite a product from a client edit and return the stored product.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the doc does not cast, the product does not
    /// exist, or the write fails.
    #[instrument(skip(self, doc), fields(tenant = %tenant))]
    pub async fn update(&self, tenant: &TenantId, doc: Value) -> Result<Product, CatalogError> {
        let product = cast::update(doc)?;
        self.repo().update(tenant, &product).await?;
        self.inner.cache.update(tenant, product.clone()).await;

        Ok(product)
    }

    /// Remove a product. Removing an absent product succeeds.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the delete fails.
    #[instrument(skip(self), fields(tenant = %tenant, product = %id))]
    pub async fn remove(&self, tenant: &TenantId, id: &ProductId) -> Result<(), CatalogError> {
        self.repo().delete(tenant, id).await?;
        self.inner.cache.pluck(tenant, id).await;

        Ok(())
    }

    /// Write a batch of docs atomically: entries with an id overwrite, the
    /// rest get fresh ids. Returns the committed products in input order.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if any doc does not cast or the transaction
    /// fails; a failed batch commits nothing.
    #[instrument(skip(self, docs), fields(tenant = %tenant, count = docs.len()))]
    pub async fn upsert(
        &self,
        tenant: &TenantId,
        docs: Vec<Value>,
    ) -> Result<Vec<Product>, CatalogError> {
        let products = docs
            .into_iter()
            .map(|doc| {
                let has_id = doc
                    .get("id")
                    .and_then(Value::as_str)
                    .is_some_and(|id| !id.is_empty());

                if has_id { cast::update(doc) } else { cast::create(doc) }
            })
            .collect::<Result<Vec<_>, CastError>>()?;

        self.repo().upsert_all(tenant, &products).await?;
        for product in &products {
            self.inner.cache.update(tenant, product.clone()).await;
        }

        Ok(products)
    }

    /// Bulk-seed the built-in demo catalog into a tenant's collection.
    ///
    /// Idempotent: demo ids are fixed, so re-running overwrites the same
    /// rows. The tenant's cache entry is dropped afterwards.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the seed catalog fails to load or the
    /// transaction fails.
    #[instrument(skip(self), fields(tenant = %tenant))]
    pub async fn populate(&self, tenant: &TenantId) -> Result<Vec<Product>, CatalogError> {
        let products = seed::demo_catalog()?;
        self.repo().upsert_all(tenant, &products).await?;
        self.inner.cache.remove(tenant).await;

        Ok(products)
    }
}
