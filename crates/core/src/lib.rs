//! PetSphere Core - Shared types library.
//!
//! This crate provides common types used across all PetSphere components:
//! - `catalog` - Marketplace records and the catalog filter
//! - `cli` - Command-line marketplace browser
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no global state. This keeps
//! it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, and ratings

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
