//! Boarding and pet-care providers.

use petsphere_core::{Price, ProviderId, Rating};
use serde::{Deserialize, Serialize};

use crate::filter::CatalogRecord;

/// The kind of boarding service a provider offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProviderKind {
    /// In-home pet sitter.
    Sitter,
    /// Dedicated boarding facility.
    BoardingHouse,
    /// Veterinary clinic with boarding.
    Clinic,
}

impl ProviderKind {
    /// Human-readable label for cards.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Sitter => "Pet Sitter",
            Self::BoardingHouse => "Boarding House",
            Self::Clinic => "Vet Clinic",
        }
    }
}

impl std::fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sitter => write!(f, "sitter"),
            Self::BoardingHouse => write!(f, "boarding_house"),
            Self::Clinic => write!(f, "clinic"),
        }
    }
}

impl std::str::FromStr for ProviderKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sitter" => Ok(Self::Sitter),
            "boarding_house" => Ok(Self::BoardingHouse),
            "clinic" => Ok(Self::Clinic),
            _ => Err(format!("invalid provider kind: {s}")),
        }
    }
}

/// A pet boarding provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardingProvider {
    /// Provider ID.
    pub id: ProviderId,
    /// Business or sitter name.
    pub name: String,
    /// Service kind.
    pub kind: ProviderKind,
    /// Neighborhood or district.
    pub location: String,
    /// Review rating.
    pub rating: Rating,
    /// Cover image URL.
    pub image_url: String,
    /// Daily boarding price.
    pub price_per_day: Price,
    /// Services offered (e.g., "Daily walks", "Grooming").
    pub services: Vec<String>,
    /// Short description.
    pub description: String,
    /// Whether the provider passed identity verification.
    pub verified: bool,
    /// Whether a 24/7 emergency contact is available.
    pub emergency_contact: bool,
    /// Whether live GPS/video tracking is offered.
    pub live_tracking: bool,
}

impl CatalogRecord for BoardingProvider {
    fn search_fields(&self) -> [&str; 2] {
        [&self.name, &self.location]
    }

    /// Exact equality on the kind's wire value ("sitter",
    /// "boarding_house", "clinic"). Unknown values match nothing.
    fn matches_selector(&self, value: &str) -> bool {
        value
            .parse::<ProviderKind>()
            .is_ok_and(|kind| kind == self.kind)
    }

    /// Boarding results are shown best-rated first. The sort is stable,
    /// so providers with equal ratings keep their original relative order.
    fn rank(results: &mut [Self]) {
        results.sort_by(|a, b| b.rating.cmp_value(&a.rating));
    }
}
