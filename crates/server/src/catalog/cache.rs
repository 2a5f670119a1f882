//! In-memory per-tenant catalog cache.
//!
//! A memoization layer over catalog reads: one entry per tenant holding the
//! tenant's full (cast) product list. Mutating operations keep entries
//! consistent through the per-product maintenance ops instead of dropping
//! the whole entry, so a busy tenant's catalog is not refetched after every
//! edit. A missing entry is never an error; the next `list` refetches.
//!
//! Capacity bound and TTL come from [`CacheConfig`].

use std::sync::Arc;

use moka::future::Cache;

use breadbox_core::{Product, ProductId, TenantId};

use crate::config::CacheConfig;

/// Cache of tenant id → cast product list.
#[derive(Clone)]
pub struct CatalogCache {
    inner: Cache<TenantId, Arc<Vec<Product>>>,
}

impl CatalogCache {
    /// Build a cache from config (capacity bound + TTL).
    #[must_use]
    pub fn new(config: &CacheConfig) -> Self {
        Self {
            inner: Cache::builder()
                .max_capacity(config.capacity)
                .time_to_live(config.ttl())
                .build(),
        }
    }

    /// Get a tenant's cached catalog, if present and fresh.
    pub async fn get(&self, tenant: &TenantId) -> Option<Arc<Vec<Product>>> {
        self.inner.get(tenant).await
    }

    /// Replace a tenant's cached catalog.
    pub async fn set(&self, tenant: TenantId, products: impl Into<Arc<Vec<Product>>>) {
        self.inner.insert(tenant, products.into()).await;
    }

    /// Drop a tenant's entry entirely (bulk rewrites).
    pub async fn remove(&self, tenant: &TenantId) {
        self.inner.invalidate(tenant).await;
    }

    /// Append a product to a tenant's cached catalog. No-op when the tenant
    /// has no entry.
    pub async fn add(&self, tenant: &TenantId, product: Product) {
        let Some(cached) = self.inner.get(tenant).await else {
            return;
        };

        let mut products = cached.as_ref().clone();
        products.push(product);
        self.inner.insert(tenant.clone(), Arc::new(products)).await;
    }

    /// Replace a product in a tenant's cached catalog by id, appending it
    /// when the id is not present (upserts of new products land here too).
    /// No-op when the tenant has no entry.
    pub async fn update(&self, tenant: &TenantId, product: Product) {
        let Some(cached) = self.inner.get(tenant).await else {
            return;
        };

        let mut products = cached.as_ref().clone();
        match products.iter_mut().find(|p| p.id == product.id) {
            Some(slot) => *slot = product,
            None => products.push(product),
        }
        self.inner.insert(tenant.clone(), Arc::new(products)).await;
    }

    /// Remove a product from a tenant's cached catalog by id. No-op when
    /// the tenant has no entry or the id is absent.
    pub async fn pluck(&self, tenant: &TenantId, id: &ProductId) {
        let Some(cached) = self.inner.get(tenant).await else {
            return;
        };

        let mut products = cached.as_ref().clone();
        products.retain(|p| &p.id != id);
        self.inner.insert(tenant.clone(), Arc::new(products)).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, title: &str) -> Product {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "title": title,
            "category": "Cakes",
            "price": 120
        }))
        .expect("test product")
    }

    fn cache() -> CatalogCache {
        CatalogCache::new(&CacheConfig::default())
    }

    #[tokio::test]
    async fn test_set_then_get() {
        let cache = cache();
        let tenant = TenantId::new("blondies");

        assert!(cache.get(&tenant).await.is_none());

        cache.set(tenant.clone(), vec![product("p1", "Brownie")]).await;
        let cached = cache.get(&tenant).await.expect("entry");
        assert_eq!(cached.len(), 1);
    }

    #[tokio::test]
    async fn test_add_appends_to_existing_entry() {
        let cache = cache();
        let tenant = TenantId::new("blondies");

        cache.set(tenant.clone(), vec![product("p1", "Brownie")]).await;
        cache.add(&tenant, product("p2", "Blondie")).await;

        let cached = cache.get(&tenant).await.expect("entry");
        assert_eq!(cached.len(), 2);
        assert_eq!(cached.last().expect("p2").id.as_str(), "p2");
    }

    #[tokio::test]
    async fn test_add_is_noop_without_entry() {
        let cache = cache();
        let tenant = TenantId::new("blondies");

        cache.add(&tenant, product("p1", "Brownie")).await;
        assert!(cache.get(&tenant).await.is_none());
    }

    #[tokio::test]
    async fn test_update_replaces_by_id() {
        let cache = cache();
        let tenant = TenantId::new("blondies");

        cache.set(tenant.clone(), vec![product("p1", "Brownie")]).await;
        cache.update(&tenant, product("p1", "Fudge brownie")).await;

        let cached = cache.get(&tenant).await.expect("entry");
        assert_eq!(cached.len(), 1);
        assert_eq!(cached.first().expect("p1").title, "Fudge brownie");
    }

    #[tokio::test]
    async fn test_update_appends_unknown_id() {
        let cache = cache();
        let tenant = TenantId::new("blondies");

        cache.set(tenant.clone(), vec![product("p1", "Brownie")]).await;
        cache.update(&tenant, product("p2", "Blondie")).await;

        let cached = cache.get(&tenant).await.expect("entry");
        assert_eq!(cached.len(), 2);
    }

    #[tokio::test]
    async fn test_pluck_removes_by_id() {
        let cache = cache();
        let tenant = TenantId::new("blondies");

        cache
            .set(
                tenant.clone(),
                vec![product("p1", "Brownie"), product("p2", "Blondie")],
            )
            .await;
        cache.pluck(&tenant, &ProductId::new("p1")).await;

        let cached = cache.get(&tenant).await.expect("entry");
        assert_eq!(cached.len(), 1);
        assert_eq!(cached.first().expect("p2").id.as_str(), "p2");
    }

    #[tokio::test]
    async fn test_remove_drops_entry() {
        let cache = cache();
        let tenant = TenantId::new("blondies");

        cache.set(tenant.clone(), vec![product("p1", "Brownie")]).await;
        cache.remove(&tenant).await;

        assert!(cache.get(&tenant).await.is_none());
    }

    #[tokio::test]
    async fn test_entries_are_per_tenant() {
        let cache = cache();
        let blondies = TenantId::new("blondies");
        let corner = TenantId::new("corner-cafe");

        cache.set(blondies.clone(), vec![product("p1", "Brownie")]).await;
        cache.set(corner.clone(), vec![product("p1", "Espresso")]).await;
        cache.pluck(&blondies, &ProductId::new("p1")).await;

        assert!(cache.get(&blondies).await.expect("entry").is_empty());
        assert_eq!(cache.get(&corner).await.expect("entry").len(), 1);
    }
}
