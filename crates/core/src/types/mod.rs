//! Core types for Breadbox.
//!
//! This module provides type-safe wrappers and the catalog domain model.

pub mod id;
pub mod product;
pub mod tenant;

pub use id::*;
pub use product::{OptionGroup, OptionItem, Product, SelectionKind, Visibility};
pub use tenant::Tenant;
