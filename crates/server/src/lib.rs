//! Breadbox server library.
//!
//! This crate provides the catalog API as a library, allowing it to be
//! tested and reused by the CLI (seeding shares the repository and demo
//! catalog code paths).

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod config;
pub mod db;
pub mod error;
pub mod routes;
pub mod state;
