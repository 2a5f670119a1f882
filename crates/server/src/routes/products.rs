//! Product route handlers.
//!
//! Bodies for create/update/upsert are raw JSON documents; casting happens
//! in the catalog service, so clients get the same coercions (defaulting,
//! id assignment, legacy-field stripping) regardless of transport.

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Serialize;
use serde_json::Value;

use breadbox_core::{Product, ProductId, TenantId};

use crate::db::TenantRepository;
use crate::error::{AppError, Result};
use crate::state::AppState;

/// Response for a removed product.
#[derive(Debug, Serialize)]
pub struct RemovedResponse {
    pub id: ProductId,
}

/// List a tenant's catalog.
///
/// Unknown tenants read as an empty collection, like the underlying store.
///
/// # Errors
///
/// Returns an error if the store query fails.
pub async fn index(
    State(state): State<AppState>,
    Path(tenant): Path<TenantId>,
) -> Result<Json<Vec<Product>>> {
    let products = state.catalog().list(&tenant).await?;

    Ok(Json(products.as_ref().clone()))
}

/// Create a product from a draft document.
///
/// # Errors
///
/// Returns 404 for an unknown tenant, 422 for a draft that does not cast.
pub async fn create(
    State(state): State<AppState>,
    Path(tenant): Path<TenantId>,
    Json(draft): Json<Value>,
) -> Result<Json<Product>> {
    require_tenant(&state, &tenant).await?;

    let product = state.catalog().create(&tenant, draft).await?;

    Ok(Json(product))
}

/// Update a product. The path id is authoritative and overrides any id in
/// the body.
///
/// # Errors
///
/// Returns 404 for an unknown tenant or product, 422 for a doc that does
/// not cast.
pub async fn update(
    State(state): State<AppState>,
    Path((tenant, id)): Path<(TenantId, ProductId)>,
    Json(mut doc): Json<Value>,
) -> Result<Json<Product>> {
    require_tenant(&state, &tenant).await?;

    let obj = doc
        .as_object_mut()
        .ok_or_else(|| AppError::BadRequest("product document must be a JSON object".into()))?;
    obj.insert("id".to_owned(), Value::from(id.as_str()));

    let product = state.catalog().update(&tenant, doc).await?;

    Ok(Json(product))
}

/// Remove a product, returning the removed id.
///
/// # Errors
///
/// Returns 404 for an unknown tenant.
pub async fn remove(
    State(state): State<AppState>,
    Path((tenant, id)): Path<(TenantId, ProductId)>,
) -> Result<Json<RemovedResponse>> {
    require_tenant(&state, &tenant).await?;

    state.catalog().remove(&tenant, &id).await?;

    Ok(Json(RemovedResponse { id }))
}

/// Upsert a batch of documents atomically.
///
/// # Errors
///
/// Returns 404 for an unknown tenant, 400 for an empty batch, 422 if any
/// doc does not cast.
pub async fn upsert(
    State(state): State<AppState>,
    Path(tenant): Path<TenantId>,
    Json(docs): Json<Vec<Value>>,
) -> Result<Json<Vec<Product>>> {
    require_tenant(&state, &tenant).await?;

    if docs.is_empty() {
        return Err(AppError::BadRequest("upsert batch is empty".into()));
    }

    let products = state.catalog().upsert(&tenant, docs).await?;

    Ok(Json(products))
}

/// Seed the built-in demo catalog into a tenant's collection.
///
/// # Errors
///
/// Returns 404 for an unknown tenant.
pub async fn populate(
    State(state): State<AppState>,
    Path(tenant): Path<TenantId>,
) -> Result<Json<Vec<Product>>> {
    require_tenant(&state, &tenant).await?;

    let products = state.catalog().populate(&tenant).await?;

    Ok(Json(products))
}

/// Mutations require the tenant to exist.
async fn require_tenant(state: &AppState, tenant: &TenantId) -> Result<()> {
    TenantRepository::new(state.pool())
        .get(tenant)
        .await?
        .map(|_| ())
        .ok_or_else(|| AppError::NotFound(format!("tenant {tenant}")))
}
