//! PetSphere Catalog - Marketplace records and catalog filtering.
//!
//! This crate is the logic core behind the marketplace tabs:
//!
//! - `shop` - Pet supply products
//! - `consult` - Veterinarians available for consultation
//! - `boarding` - Pet sitters, boarding houses, and clinics
//!
//! # Architecture
//!
//! Each tab owns one independent, immutable record list loaded once at
//! startup ([`Catalog`]). Filtering is a pure transform over that list
//! ([`filter::filter_records`]) driven by explicit parameters the screen
//! owns ([`screen::Screen`]) - no hidden globals. Card display shapes live
//! in [`view`], and user actions are injected capabilities ([`actions`])
//! that only log in this build.
//!
//! # Modules
//!
//! - [`records`] - The three record kinds (product, doctor, boarding provider)
//! - [`filter`] - Generic text + category filter with per-kind ordering
//! - [`catalog`] - In-memory store holding the record lists
//! - [`data`] - Compiled-in sample catalog
//! - [`screen`] - Per-screen filter state
//! - [`view`] - Card view models
//! - [`actions`] - Injected "selected" / "primary action" hooks

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod actions;
pub mod catalog;
pub mod data;
pub mod filter;
pub mod records;
pub mod screen;
pub mod view;

pub use actions::{CardActions, LogActions, RecordKind};
pub use catalog::Catalog;
pub use filter::{CatalogRecord, Selector, filter_records};
pub use records::{BoardingProvider, Doctor, Product, ProviderKind};
pub use screen::{FilterParams, Screen};
