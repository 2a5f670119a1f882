//! Schema coercion for raw catalog documents.
//!
//! Product documents arrive from two places - the backing store and client
//! request bodies - and both predate the current schema in places. The
//! casting functions here normalize a raw `serde_json::Value` into a
//! well-formed [`Product`]:
//!
//! - [`fetch`] for documents read from the store (tolerant, migrates the
//!   legacy `available` boolean into `visibility`)
//! - [`create`] for client drafts (assigns a fresh product id)
//! - [`update`] for client edits (keeps the product id, strips legacy keys)
//!
//! Unknown fields are dropped across the board.

use serde_json::Value;
use thiserror::Error;

use crate::types::{OptionGroupId, OptionItemId, Product, ProductId, SelectionKind};

/// Errors produced while casting a raw document.
#[derive(Debug, Error)]
pub enum CastError {
    /// The document is not a JSON object.
    #[error("document is not a JSON object")]
    NotAnObject,

    /// The document is missing its product id where one is required.
    #[error("document has no product id")]
    MissingId,

    /// The document does not deserialize into a product.
    #[error("invalid product document: {0}")]
    Invalid(#[from] serde_json::Error),
}

/// Cast a document read from the store into a product.
///
/// The row key is authoritative for the product id and overrides whatever id
/// the stored document carries. Documents written before `visibility`
/// existed carry an `available` boolean instead: `available == false` maps
/// to `Visibility::Unavailable`, anything else defers to the stored
/// visibility (which defaults to available).
///
/// # Errors
///
/// Returns [`CastError`] if the document is not an object or does not
/// deserialize into a product.
pub fn fetch(id: &ProductId, mut doc: Value) -> Result<Product, CastError> {
    let obj = doc.as_object_mut().ok_or(CastError::NotAnObject)?;

    let legacy_unavailable = obj
        .remove("available")
        .is_some_and(|v| v.as_bool() == Some(false));
    if legacy_unavailable {
        obj.insert("visibility".to_owned(), Value::from("unavailable"));
    }
    obj.insert("id".to_owned(), Value::from(id.as_str()));

    Ok(serde_json::from_value(doc)?)
}

/// Cast a client draft into a product ready to insert.
///
/// Any client-supplied product id is discarded and a fresh one generated.
/// Option groups and option items missing ids get them assigned, and group
/// cardinality is normalized.
///
/// # Errors
///
/// Returns [`CastError`] if the draft is not an object or does not
/// deserialize into a product.
pub fn create(mut draft: Value) -> Result<Product, CastError> {
    let obj = draft.as_object_mut().ok_or(CastError::NotAnObject)?;

    obj.remove("available");
    obj.insert(
        "id".to_owned(),
        Value::from(ProductId::generate().as_str()),
    );

    let mut product: Product = serde_json::from_value(draft)?;
    normalize_options(&mut product);

    Ok(product)
}

/// Cast a client edit into a product ready to overwrite its row.
///
/// The incoming document must carry a product id. The legacy `available`
/// key is stripped so updated rows never retain it.
///
/// # Errors
///
/// Returns [`CastError::MissingId`] if the document has no id, and the same
/// errors as [`create`] otherwise.
pub fn update(mut doc: Value) -> Result<Product, CastError> {
    let obj = doc.as_object_mut().ok_or(CastError::NotAnObject)?;

    match obj.get("id").and_then(Value::as_str) {
        Some(id) if !id.is_empty() => {}
        _ => return Err(CastError::MissingId),
    }
    obj.remove("available");

    let mut product: Product = serde_json::from_value(doc)?;
    normalize_options(&mut product);

    Ok(product)
}

/// Assign ids to option groups/items that lack them and normalize group
/// cardinality. `single` groups always accept exactly one choice.
fn normalize_options(product: &mut Product) {
    for group in &mut product.options {
        if group.id.is_empty() {
            group.id = OptionGroupId::generate();
        }
        group.count = match group.kind {
            SelectionKind::Single => 1,
            SelectionKind::Multiple => group.count.max(1),
        };
        for option in &mut group.options {
            if option.id.is_empty() {
                option.id = OptionItemId::generate();
            }
        }
    }
}
