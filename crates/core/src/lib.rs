//! Breadbox Core - Shared types library.
//!
//! This crate provides common types used across all Breadbox components:
//! - `server` - Tenant-scoped catalog HTTP API
//! - `cli` - Command-line tools for migrations, tenants, and seeding
//!
//! # Architecture
//!
//! The core crate contains only types and document casting - no I/O, no
//! database access, no HTTP clients. This keeps it lightweight and allows it
//! to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype IDs and the tenant/product domain model
//! - [`cast`] - Schema coercion for raw catalog documents

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cast;
pub mod types;

pub use types::*;
