//! Compiled-in sample catalog.
//!
//! The marketplace ships with a small built-in data set - no network, no
//! database. Records are built once at startup and never mutated.

use petsphere_core::{DoctorId, Price, ProductId, ProviderId, Rating};

use crate::records::{BoardingProvider, Doctor, Product, ProviderKind};

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| (*s).to_owned()).collect()
}

/// The built-in shop products.
#[must_use]
pub fn sample_products() -> Vec<Product> {
    vec![
        Product {
            id: ProductId::new(1),
            name: "Premium Dog Food - Chicken & Rice".to_owned(),
            description: "High-quality nutrition for adult dogs with real chicken and brown rice"
                .to_owned(),
            price: Price::usd(2499),
            original_price: Some(Price::usd(2999)),
            category: "Food".to_owned(),
            brand: "PetNutrition".to_owned(),
            image_url: "https://images.pexels.com/photos/4790351/pexels-photo-4790351.jpeg"
                .to_owned(),
            rating: Rating::new(4.5, 128),
            in_stock: true,
            pet_types: strings(&["dog"]),
            tags: strings(&["premium", "adult", "chicken"]),
        },
        Product {
            id: ProductId::new(2),
            name: "Interactive Cat Feeder Toy".to_owned(),
            description: "Slow feeding puzzle toy that keeps cats entertained while eating"
                .to_owned(),
            price: Price::usd(1899),
            original_price: None,
            category: "Toys".to_owned(),
            brand: "FelineFun".to_owned(),
            image_url: "https://images.pexels.com/photos/7210754/pexels-photo-7210754.jpeg"
                .to_owned(),
            rating: Rating::new(4.7, 89),
            in_stock: true,
            pet_types: strings(&["cat"]),
            tags: strings(&["interactive", "puzzle", "feeding"]),
        },
        Product {
            id: ProductId::new(3),
            name: "Professional Dog Grooming Kit".to_owned(),
            description: "Complete grooming set with clippers, brushes, and accessories".to_owned(),
            price: Price::usd(4599),
            original_price: Some(Price::usd(5599)),
            category: "Grooming".to_owned(),
            brand: "GroomPro".to_owned(),
            image_url: "https://images.pexels.com/photos/6568461/pexels-photo-6568461.jpeg"
                .to_owned(),
            rating: Rating::new(4.3, 203),
            in_stock: true,
            pet_types: strings(&["dog", "cat"]),
            tags: strings(&["professional", "grooming", "complete"]),
        },
        Product {
            id: ProductId::new(4),
            name: "Natural Bird Seed Mix".to_owned(),
            description: "Premium blend of seeds and nuts for wild and pet birds".to_owned(),
            price: Price::usd(1299),
            original_price: None,
            category: "Food".to_owned(),
            brand: "WildNature".to_owned(),
            image_url: "https://images.pexels.com/photos/1661535/pexels-photo-1661535.jpeg"
                .to_owned(),
            rating: Rating::new(4.6, 156),
            in_stock: false,
            pet_types: strings(&["bird"]),
            tags: strings(&["natural", "premium", "wild"]),
        },
    ]
}

/// The built-in consulting veterinarians.
#[must_use]
pub fn sample_doctors() -> Vec<Doctor> {
    vec![
        Doctor {
            id: DoctorId::new(1),
            name: "Dr. Sarah Johnson".to_owned(),
            specialty: "Small Animal Veterinarian".to_owned(),
            experience_years: 8,
            rating: Rating::new(4.8, 234),
            consultation_fee: Price::usd(6500),
            video_consultation_fee: Price::usd(4500),
            availability: strings(&["Mon", "Wed", "Fri"]),
            bio: "Experienced veterinarian specializing in cats and dogs with focus on \
                  preventive care."
                .to_owned(),
            image_url: "https://images.pexels.com/photos/5327585/pexels-photo-5327585.jpeg"
                .to_owned(),
            location: "Downtown Veterinary Clinic".to_owned(),
        },
        Doctor {
            id: DoctorId::new(2),
            name: "Dr. Michael Chen".to_owned(),
            specialty: "Exotic Animal Specialist".to_owned(),
            experience_years: 12,
            rating: Rating::new(4.9, 187),
            consultation_fee: Price::usd(8500),
            video_consultation_fee: Price::usd(6000),
            availability: strings(&["Tue", "Thu", "Sat"]),
            bio: "Expert in exotic pets including birds, reptiles, and small mammals.".to_owned(),
            image_url: "https://images.pexels.com/photos/6749778/pexels-photo-6749778.jpeg"
                .to_owned(),
            location: "Exotic Pet Care Center".to_owned(),
        },
        Doctor {
            id: DoctorId::new(3),
            name: "Dr. Emily Rodriguez".to_owned(),
            specialty: "Emergency Veterinarian".to_owned(),
            experience_years: 6,
            rating: Rating::new(4.7, 298),
            consultation_fee: Price::usd(7500),
            video_consultation_fee: Price::usd(5000),
            availability: strings(&["Mon", "Tue", "Wed", "Thu", "Fri"]),
            bio: "Emergency care specialist available for urgent pet health situations."
                .to_owned(),
            image_url: "https://images.pexels.com/photos/5327921/pexels-photo-5327921.jpeg"
                .to_owned(),
            location: "24/7 Emergency Pet Hospital".to_owned(),
        },
    ]
}

/// The built-in boarding providers.
#[must_use]
pub fn sample_boarding_providers() -> Vec<BoardingProvider> {
    vec![
        BoardingProvider {
            id: ProviderId::new(1),
            name: "Happy Paws Boarding".to_owned(),
            kind: ProviderKind::BoardingHouse,
            location: "Central Park Area".to_owned(),
            rating: Rating::new(4.6, 142),
            image_url: "https://images.pexels.com/photos/1254140/pexels-photo-1254140.jpeg"
                .to_owned(),
            price_per_day: Price::usd(3500),
            services: strings(&[
                "24/7 care",
                "Daily walks",
                "Grooming",
                "Playtime",
                "Medical care",
            ]),
            description: "Professional boarding facility with spacious play areas and \
                          experienced staff."
                .to_owned(),
            verified: true,
            emergency_contact: true,
            live_tracking: false,
        },
        BoardingProvider {
            id: ProviderId::new(2),
            name: "Maria's Pet Sitting".to_owned(),
            kind: ProviderKind::Sitter,
            location: "Riverside District".to_owned(),
            rating: Rating::new(4.9, 89),
            image_url: "https://images.pexels.com/photos/1458925/pexels-photo-1458925.jpeg"
                .to_owned(),
            price_per_day: Price::usd(2500),
            services: strings(&["Home visits", "Dog walking", "Feeding", "Medication"]),
            description: "Caring pet sitter with 5 years experience providing in-home pet care."
                .to_owned(),
            verified: true,
            emergency_contact: true,
            live_tracking: true,
        },
        BoardingProvider {
            id: ProviderId::new(3),
            name: "VetCare Boarding Clinic".to_owned(),
            kind: ProviderKind::Clinic,
            location: "Medical District".to_owned(),
            rating: Rating::new(4.4, 203),
            image_url: "https://images.pexels.com/photos/6816862/pexels-photo-6816862.jpeg"
                .to_owned(),
            price_per_day: Price::usd(4500),
            services: strings(&[
                "Veterinary care",
                "Medical monitoring",
                "Emergency services",
                "Grooming",
            ]),
            description: "Medical boarding facility with on-site veterinarians for pets with \
                          special needs."
                .to_owned(),
            verified: true,
            emergency_contact: true,
            live_tracking: false,
        },
    ]
}
