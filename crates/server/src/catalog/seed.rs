//! Demo catalog used by `populate` and CLI seeding.
//!
//! The catalog ships embedded in the binary so a fresh tenant can be seeded
//! without any external files. A couple of its documents deliberately carry
//! the legacy `available` field, so seeding exercises the same casting path
//! as reads from the store.

use serde_json::Value;

use breadbox_core::cast::CastError;
use breadbox_core::{Product, ProductId, cast};

/// Raw demo catalog documents.
const DEMO_CATALOG_JSON: &str = include_str!("../../assets/demo-catalog.json");

/// Errors while loading a catalog of raw documents.
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("catalog is not a JSON array: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("catalog entry {index} has no id")]
    MissingId { index: usize },

    #[error("catalog entry {index}: {source}")]
    Cast {
        index: usize,
        #[source]
        source: CastError,
    },
}

/// The built-in demo catalog, cast and normalized.
///
/// # Errors
///
/// Returns `SeedError` if the embedded asset is malformed; unit tests pin
/// it valid, so in practice this only fails on a corrupted build.
pub fn demo_catalog() -> Result<Vec<Product>, SeedError> {
    parse_catalog(DEMO_CATALOG_JSON)
}

/// Parse a JSON array of raw product documents into cast products.
///
/// Every document must carry its own id (seed catalogs use fixed ids so
/// seeding is idempotent). Documents go through the fetch cast, so legacy
/// fields normalize the same way stored rows do.
///
/// # Errors
///
/// Returns `SeedError` on malformed JSON, a missing id, or a document that
/// does not cast.
pub fn parse_catalog(raw: &str) -> Result<Vec<Product>, SeedError> {
    let docs: Vec<Value> = serde_json::from_str(raw)?;

    docs.into_iter()
        .enumerate()
        .map(|(index, doc)| {
            let id = doc
                .get("id")
                .and_then(Value::as_str)
                .filter(|id| !id.is_empty())
                .map(ProductId::new)
                .ok_or(SeedError::MissingId { index })?;

            cast::fetch(&id, doc).map_err(|source| SeedError::Cast { index, source })
        })
        .collect()
}
