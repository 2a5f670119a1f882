//! Tenant route handlers.

use axum::{
    Json,
    extract::{Path, State},
};

use breadbox_core::Tenant;

use crate::db::TenantRepository;
use crate::error::{AppError, Result};
use crate::state::AppState;

/// Fetch a tenant's branding record by storefront slug.
///
/// # Errors
///
/// Returns 404 if no tenant owns the slug.
pub async fn show(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<Tenant>> {
    let tenant = TenantRepository::new(state.pool())
        .get_by_slug(&slug)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("tenant {slug}")))?;

    Ok(Json(tenant))
}
