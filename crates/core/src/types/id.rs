//! Newtype IDs for type-safe entity references.
//!
//! Catalog entities are addressed by short opaque string ids (they are
//! document keys, not sequence numbers). Use the `define_id!` macro to create
//! type-safe wrappers that prevent accidentally mixing ids from different
//! entity types.

/// Length of generated ids. Short enough to be URL-friendly, long enough
/// that collisions within a single tenant's collection are not a concern.
pub const GENERATED_ID_LEN: usize = 12;

/// Macro to define a type-safe string id wrapper.
///
/// Creates a newtype wrapper around `String` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `Default`, `PartialEq`, `Eq`, `Hash`, `Display`
/// - Conversion methods: `new()`, `as_str()`, `is_empty()`
/// - `generate()` producing a fresh random alphanumeric id
/// - `From<String>` and `From<&str>` implementations
///
/// # Example
///
/// ```rust
/// # use breadbox_core::define_id;
/// define_id!(TenantId);
/// define_id!(ProductId);
///
/// let tenant = TenantId::new("blondies");
/// let product = ProductId::generate();
///
/// // These are different types, so this won't compile:
/// // let _: TenantId = product;
/// # let _ = (tenant, product);
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            Default,
            PartialEq,
            Eq,
            Hash,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create an id from an existing string value.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Generate a fresh random id.
            #[must_use]
            pub fn generate() -> Self {
                use ::rand::Rng;

                let id: String = ::rand::rng()
                    .sample_iter(&::rand::distr::Alphanumeric)
                    .take($crate::types::id::GENERATED_ID_LEN)
                    .map(char::from)
                    .collect();

                Self(id)
            }

            /// Get the underlying string value.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// True when the id carries no value (e.g. a client draft
            /// that has not been assigned one yet).
            #[must_use]
            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_owned())
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

define_id!(TenantId);
define_id!(ProductId);
define_id!(OptionGroupId);
define_id!(OptionItemId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_has_expected_length() {
        let id = ProductId::generate();
        assert_eq!(id.as_str().len(), GENERATED_ID_LEN);
        assert!(id.as_str().chars().all(char::is_alphanumeric));
    }

    #[test]
    fn test_generate_is_unique() {
        let a = ProductId::generate();
        let b = ProductId::generate();
        assert_ne!(a, b);
    }

    #[test]
    fn test_display_and_from() {
        let id = TenantId::new("blondies");
        assert_eq!(id.to_string(), "blondies");
        assert_eq!(TenantId::from("blondies"), id);
        assert!(!id.is_empty());
        assert!(TenantId::default().is_empty());
    }

    #[test]
    fn test_serde_transparent() {
        let id = ProductId::new("2FnpBNCoxXlt");
        let json = serde_json::to_string(&id).expect("serialize");
        assert_eq!(json, "\"2FnpBNCoxXlt\"");

        let back: ProductId = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, id);
    }
}
