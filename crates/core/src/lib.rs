//! Feira Astral Core - Shared domain types.
//!
//! This crate provides the domain model used across Feira Astral
//! components:
//! - `storefront` - Public-facing marketplace site
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients. This
//! keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - IDs, prices, categories, products, and the shopping cart

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
