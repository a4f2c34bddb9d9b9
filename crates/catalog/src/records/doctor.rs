//! Consulting veterinarians.

use petsphere_core::{DoctorId, Price, Rating};
use serde::{Deserialize, Serialize};

use crate::filter::CatalogRecord;

/// A veterinarian available for consultation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Doctor {
    /// Doctor ID.
    pub id: DoctorId,
    /// Display name (e.g., "Dr. Sarah Johnson").
    pub name: String,
    /// Specialty label (e.g., "Exotic Animal Specialist").
    pub specialty: String,
    /// Years of experience.
    pub experience_years: u32,
    /// Review rating.
    pub rating: Rating,
    /// In-clinic consultation fee.
    pub consultation_fee: Price,
    /// Video consultation fee.
    pub video_consultation_fee: Price,
    /// Weekday labels the doctor is available (e.g., "Mon", "Wed").
    pub availability: Vec<String>,
    /// Short biography.
    pub bio: String,
    /// Profile image URL.
    pub image_url: String,
    /// Practice location.
    pub location: String,
}

impl CatalogRecord for Doctor {
    fn search_fields(&self) -> [&str; 2] {
        [&self.name, &self.specialty]
    }

    /// Substring match on the specialty, with selector underscores read as
    /// spaces ("small_animal" matches "Small Animal Veterinarian").
    ///
    /// Looser than the equality rule the other record kinds use; kept
    /// as-is because the specialty chips ("exotic", "emergency") are
    /// fragments of the full specialty labels, not equal to them.
    fn matches_selector(&self, value: &str) -> bool {
        self.specialty
            .to_lowercase()
            .contains(&value.replace('_', " ").to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exotic_specialist() -> Doctor {
        Doctor {
            id: DoctorId::new(2),
            name: "Dr. Michael Chen".to_owned(),
            specialty: "Exotic Animal Specialist".to_owned(),
            experience_years: 12,
            rating: Rating::new(4.9, 187),
            consultation_fee: Price::usd(8500),
            video_consultation_fee: Price::usd(6000),
            availability: vec!["Tue".to_owned(), "Thu".to_owned()],
            bio: "Expert in exotic pets.".to_owned(),
            image_url: String::new(),
            location: "Exotic Pet Care Center".to_owned(),
        }
    }

    #[test]
    fn test_specialty_match_is_substring() {
        let doctor = exotic_specialist();
        assert!(doctor.matches_selector("exotic"));
        assert!(doctor.matches_selector("EXOTIC"));
        assert!(!doctor.matches_selector("emergency"));
    }

    #[test]
    fn test_specialty_match_reads_underscores_as_spaces() {
        let doctor = Doctor {
            specialty: "Small Animal Veterinarian".to_owned(),
            ..exotic_specialist()
        };
        assert!(doctor.matches_selector("small_animal"));
        assert!(!doctor.matches_selector("small_bird"));
    }

    #[test]
    fn test_search_fields_are_name_and_specialty() {
        let doctor = exotic_specialist();
        assert_eq!(
            doctor.search_fields(),
            ["Dr. Michael Chen", "Exotic Animal Specialist"]
        );
    }
}
