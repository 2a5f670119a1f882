//! Catalog product domain model.
//!
//! Products are stored as JSON documents; field names stay camelCase on the
//! wire so existing catalog exports load unchanged. Customization is modeled
//! as option groups (e.g. "Toppings", pick up to 2) containing priced option
//! items.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::id::{OptionGroupId, OptionItemId, ProductId};

/// Whether a product is shown and purchasable on the storefront.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    /// Shown and purchasable.
    #[default]
    Available,
    /// Shown but marked as not purchasable right now.
    Unavailable,
    /// Not shown at all.
    Hidden,
}

/// How many choices an option group accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SelectionKind {
    /// Exactly one choice from the group.
    #[default]
    Single,
    /// Up to `count` choices from the group.
    Multiple,
}

/// A sellable catalog item belonging to a tenant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subcategory: Option<String>,
    pub price: Decimal,
    /// Pre-discount price; zero when the product is not discounted.
    #[serde(default)]
    pub original_price: Decimal,
    /// Image URL; empty when the tenant has not uploaded one.
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub visibility: Visibility,
    #[serde(default)]
    pub options: Vec<OptionGroup>,
}

/// A set of mutually related customization choices attached to a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionGroup {
    #[serde(default)]
    pub id: OptionGroupId,
    pub title: String,
    /// Selection cardinality; for `single` groups this is always 1.
    #[serde(default = "default_count")]
    pub count: u32,
    #[serde(default)]
    pub required: bool,
    #[serde(rename = "type", default)]
    pub kind: SelectionKind,
    #[serde(default)]
    pub options: Vec<OptionItem>,
}

/// A single choice within an option group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionItem {
    #[serde(default)]
    pub id: OptionItemId,
    pub title: String,
    /// Delta added to the product price when selected.
    #[serde(default)]
    pub price: Decimal,
}

const fn default_count() -> u32 {
    1
}

impl Product {
    /// True when the product should appear in storefront listings.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visibility != Visibility::Hidden
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_visibility_wire_format() {
        assert_eq!(
            serde_json::to_value(Visibility::Unavailable).expect("serialize"),
            json!("unavailable")
        );
        let parsed: Visibility = serde_json::from_value(json!("hidden")).expect("deserialize");
        assert_eq!(parsed, Visibility::Hidden);
    }

    #[test]
    fn test_product_deserializes_with_defaults() {
        let doc = json!({
            "id": "2FnpBNCoxXlt",
            "title": "Cheese scone",
            "category": "Breakfast",
            "price": 170
        });

        let product: Product = serde_json::from_value(doc).expect("deserialize");
        assert_eq!(product.visibility, Visibility::Available);
        assert!(product.options.is_empty());
        assert!(!product.featured);
        assert_eq!(product.original_price, Decimal::ZERO);
        assert_eq!(product.subcategory, None);
    }

    #[test]
    fn test_option_group_kind_uses_type_key() {
        let doc = json!({
            "id": "CkcW2Ox80",
            "title": "Sides",
            "type": "multiple",
            "count": 2,
            "options": [{"id": "4PDthHsx", "title": "Fries", "price": 0}]
        });

        let group: OptionGroup = serde_json::from_value(doc).expect("deserialize");
        assert_eq!(group.kind, SelectionKind::Multiple);
        assert_eq!(group.count, 2);
        assert!(!group.required);

        let out = serde_json::to_value(&group).expect("serialize");
        assert_eq!(out.get("type"), Some(&json!("multiple")));
    }

    #[test]
    fn test_is_visible() {
        let mut product: Product = serde_json::from_value(serde_json::json!({
            "id": "p1", "title": "Brownie", "category": "Cakes", "price": 120
        }))
        .expect("deserialize");

        assert!(product.is_visible());
        product.visibility = Visibility::Unavailable;
        assert!(product.is_visible());
        product.visibility = Visibility::Hidden;
        assert!(!product.is_visible());
    }
}
