//! Card view models.
//!
//! Display shapes handed to the rendering layer - one card per visible
//! record. Prices and ratings arrive pre-formatted; optional source fields
//! become absent badges, never errors.

use serde::Serialize;

use petsphere_core::{DoctorId, ProductId, ProviderId};

use crate::records::{BoardingProvider, Doctor, Product};

/// Product card display data.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductCardView {
    pub id: ProductId,
    pub brand: String,
    pub name: String,
    /// Formatted current price (e.g., "$24.99").
    pub price: String,
    /// Formatted pre-markdown price, when on sale.
    pub original_price: Option<String>,
    /// Discount badge percentage, when on sale.
    pub discount_percent: Option<u32>,
    /// Formatted rating line (e.g., "4.5 (128)").
    pub rating: String,
    pub in_stock: bool,
    pub image_url: String,
}

impl From<&Product> for ProductCardView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            brand: product.brand.clone(),
            name: product.name.clone(),
            price: product.price.display(),
            original_price: product.original_price.map(|p| p.display()),
            discount_percent: product.discount_percent(),
            rating: product.rating.display(),
            in_stock: product.in_stock,
            image_url: product.image_url.clone(),
        }
    }
}

/// Doctor card display data.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DoctorCardView {
    pub id: DoctorId,
    pub name: String,
    pub specialty: String,
    /// Formatted experience line (e.g., "12 years experience").
    pub experience: String,
    /// Formatted rating line.
    pub rating: String,
    /// Formatted in-clinic fee.
    pub consultation_fee: String,
    /// Formatted video consultation fee.
    pub video_consultation_fee: String,
    pub availability: Vec<String>,
    pub location: String,
    pub image_url: String,
}

impl From<&Doctor> for DoctorCardView {
    fn from(doctor: &Doctor) -> Self {
        Self {
            id: doctor.id,
            name: doctor.name.clone(),
            specialty: doctor.specialty.clone(),
            experience: format!("{} years experience", doctor.experience_years),
            rating: doctor.rating.display(),
            consultation_fee: doctor.consultation_fee.display(),
            video_consultation_fee: doctor.video_consultation_fee.display(),
            availability: doctor.availability.clone(),
            location: doctor.location.clone(),
            image_url: doctor.image_url.clone(),
        }
    }
}

/// Boarding provider card display data.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoardingCardView {
    pub id: ProviderId,
    pub name: String,
    /// Kind label (e.g., "Pet Sitter").
    pub kind: String,
    pub location: String,
    /// Formatted rating line.
    pub rating: String,
    /// Formatted daily price (e.g., "$35.00/day").
    pub price_per_day: String,
    pub services: Vec<String>,
    pub verified: bool,
    pub emergency_contact: bool,
    pub live_tracking: bool,
    pub image_url: String,
}

impl From<&BoardingProvider> for BoardingCardView {
    fn from(provider: &BoardingProvider) -> Self {
        Self {
            id: provider.id,
            name: provider.name.clone(),
            kind: provider.kind.label().to_owned(),
            location: provider.location.clone(),
            rating: provider.rating.display(),
            price_per_day: format!("{}/day", provider.price_per_day.display()),
            services: provider.services.clone(),
            verified: provider.verified,
            emergency_contact: provider.emergency_contact,
            live_tracking: provider.live_tracking,
            image_url: provider.image_url.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data;

    #[test]
    fn test_product_view_with_discount_badge() {
        let products = data::sample_products();
        let dog_food = products
            .iter()
            .find(|p| p.name.starts_with("Premium Dog Food"))
            .expect("dog food in sample data");
        let view = ProductCardView::from(dog_food);

        assert_eq!(view.price, "$24.99");
        assert_eq!(view.original_price.as_deref(), Some("$29.99"));
        assert_eq!(view.discount_percent, Some(17));
        assert_eq!(view.rating, "4.5 (128)");
    }

    #[test]
    fn test_product_view_without_discount_badge() {
        let products = data::sample_products();
        let cat_toy = products
            .iter()
            .find(|p| p.name == "Interactive Cat Feeder Toy")
            .expect("cat toy in sample data");
        let view = ProductCardView::from(cat_toy);

        assert_eq!(view.price, "$18.99");
        assert_eq!(view.original_price, None);
        assert_eq!(view.discount_percent, None);
    }

    #[test]
    fn test_doctor_view_formatting() {
        let doctors = data::sample_doctors();
        let view = DoctorCardView::from(&doctors[1]);

        assert_eq!(view.name, "Dr. Michael Chen");
        assert_eq!(view.experience, "12 years experience");
        assert_eq!(view.consultation_fee, "$85.00");
        assert_eq!(view.video_consultation_fee, "$60.00");
    }

    #[test]
    fn test_boarding_view_formatting() {
        let providers = data::sample_boarding_providers();
        let view = BoardingCardView::from(&providers[1]);

        assert_eq!(view.name, "Maria's Pet Sitting");
        assert_eq!(view.kind, "Pet Sitter");
        assert_eq!(view.price_per_day, "$25.00/day");
        assert!(view.live_tracking);
    }
}
