//! Tenant (storefront/brand) domain model.

use serde::{Deserialize, Serialize};

use super::id::TenantId;

/// A distinct storefront/brand sharing the platform.
///
/// Tenants are created and edited through the CLI; the HTTP surface only
/// reads them (branding for the storefront header and contact links).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tenant {
    pub id: TenantId,
    /// URL-safe storefront handle, unique across the platform.
    pub slug: String,
    /// Brand palette name (e.g. "teal", "rose").
    pub color: String,
    /// Brand accent hue, 0-360.
    pub hue: i16,
    /// Short pitch shown on the storefront and prefilled in order messages.
    #[serde(default)]
    pub message: String,
    /// Contact phone in international format.
    #[serde(default)]
    pub phone: String,
}
