//! Marketplace record kinds.
//!
//! Three flat, immutable record kinds - one per marketplace tab. Each kind
//! implements [`crate::filter::CatalogRecord`] with its own searchable
//! fields and category rule.

pub mod boarding;
pub mod doctor;
pub mod product;

pub use boarding::{BoardingProvider, ProviderKind};
pub use doctor::Doctor;
pub use product::Product;
