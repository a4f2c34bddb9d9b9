//! Shop products.

use petsphere_core::{Price, ProductId, Rating};
use serde::{Deserialize, Serialize};

use crate::filter::CatalogRecord;

/// A product in the pet supply shop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Product ID.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Short description.
    pub description: String,
    /// Current price.
    pub price: Price,
    /// Pre-markdown price, when the product is on sale.
    pub original_price: Option<Price>,
    /// Category label (e.g., "Food", "Toys", "Grooming").
    pub category: String,
    /// Brand name.
    pub brand: String,
    /// Product image URL.
    pub image_url: String,
    /// Review rating.
    pub rating: Rating,
    /// Whether the product can currently be ordered.
    pub in_stock: bool,
    /// Pet types the product is for (e.g., "dog", "cat").
    pub pet_types: Vec<String>,
    /// Free-form tags.
    pub tags: Vec<String>,
}

impl Product {
    /// Whether the product is on sale (has a pre-markdown price).
    #[must_use]
    pub const fn on_sale(&self) -> bool {
        self.original_price.is_some()
    }

    /// Discount percentage against the original price, if any.
    ///
    /// A product without an original price has no discount - that is not
    /// an error, the badge just doesn't apply.
    #[must_use]
    pub fn discount_percent(&self) -> Option<u32> {
        self.original_price
            .map(|original| self.price.discount_percent_from(original))
    }
}

impl CatalogRecord for Product {
    fn search_fields(&self) -> [&str; 2] {
        [&self.name, &self.brand]
    }

    /// Case-insensitive equality on the category label.
    fn matches_selector(&self, value: &str) -> bool {
        self.category.to_lowercase() == value.to_lowercase()
    }
}
