//! In-memory catalog store.
//!
//! Holds the three record lists for the lifetime of the process. The store
//! is cheap to clone (the lists live behind `Arc`) and never mutated after
//! construction.

use std::sync::Arc;

use crate::data;
use crate::filter::{Selector, filter_records};
use crate::records::{BoardingProvider, Doctor, Product};
use crate::screen::Screen;

/// Catalog store that holds all marketplace records in memory.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Arc<Vec<Product>>,
    doctors: Arc<Vec<Doctor>>,
    providers: Arc<Vec<BoardingProvider>>,
}

impl Catalog {
    /// Build a catalog from explicit record lists.
    #[must_use]
    pub fn new(
        products: Vec<Product>,
        doctors: Vec<Doctor>,
        providers: Vec<BoardingProvider>,
    ) -> Self {
        Self {
            products: Arc::new(products),
            doctors: Arc::new(doctors),
            providers: Arc::new(providers),
        }
    }

    /// Build a catalog from the compiled-in sample data.
    #[must_use]
    pub fn with_sample_data() -> Self {
        let catalog = Self::new(
            data::sample_products(),
            data::sample_doctors(),
            data::sample_boarding_providers(),
        );
        tracing::info!(
            products = catalog.products.len(),
            doctors = catalog.doctors.len(),
            providers = catalog.providers.len(),
            "Loaded built-in catalog"
        );
        catalog
    }

    /// All shop products.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// All consulting veterinarians.
    #[must_use]
    pub fn doctors(&self) -> &[Doctor] {
        &self.doctors
    }

    /// All boarding providers.
    #[must_use]
    pub fn providers(&self) -> &[BoardingProvider] {
        &self.providers
    }

    /// Filter products by query and category selector.
    #[must_use]
    pub fn search_products(&self, query: &str, selector: &Selector) -> Vec<Product> {
        filter_records(&self.products, query, selector)
    }

    /// Filter doctors by query and specialty selector.
    #[must_use]
    pub fn search_doctors(&self, query: &str, selector: &Selector) -> Vec<Doctor> {
        filter_records(&self.doctors, query, selector)
    }

    /// Filter boarding providers by query and kind selector.
    ///
    /// Results come back best-rated first.
    #[must_use]
    pub fn search_providers(&self, query: &str, selector: &Selector) -> Vec<BoardingProvider> {
        filter_records(&self.providers, query, selector)
    }

    /// Products currently on sale (the "Hot Deals" rail).
    #[must_use]
    pub fn discounted_products(&self) -> Vec<Product> {
        self.products
            .iter()
            .filter(|p| p.on_sale())
            .cloned()
            .collect()
    }

    /// A shop screen over this catalog's products.
    #[must_use]
    pub fn shop_screen(&self) -> Screen<Product> {
        Screen::new(Arc::clone(&self.products))
    }

    /// A consult screen over this catalog's doctors.
    #[must_use]
    pub fn consult_screen(&self) -> Screen<Doctor> {
        Screen::new(Arc::clone(&self.doctors))
    }

    /// A boarding screen over this catalog's providers.
    #[must_use]
    pub fn boarding_screen(&self) -> Screen<BoardingProvider> {
        Screen::new(Arc::clone(&self.providers))
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::with_sample_data()
    }
}
