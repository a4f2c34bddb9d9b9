//! Star rating with review count.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// An average review rating plus the number of reviews behind it.
///
/// Ratings are on a 1.0-5.0 scale. The value is stored as reported by the
/// review source and is not validated here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    /// Average rating value (e.g., 4.5).
    pub value: f64,
    /// Total number of reviews.
    pub count: u32,
}

impl Rating {
    /// Create a new rating.
    #[must_use]
    pub const fn new(value: f64, count: u32) -> Self {
        Self { value, count }
    }

    /// Total ordering on the rating value (NaN sorts consistently).
    #[must_use]
    pub fn cmp_value(&self, other: &Self) -> Ordering {
        self.value.total_cmp(&other.value)
    }

    /// Format for display (e.g., "4.5 (128)").
    #[must_use]
    pub fn display(&self) -> String {
        format!("{} ({})", self.value, self.count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Rating::new(4.5, 128).display(), "4.5 (128)");
        assert_eq!(Rating::new(4.0, 12).display(), "4 (12)");
    }

    #[test]
    fn test_cmp_value() {
        let high = Rating::new(4.9, 89);
        let low = Rating::new(4.4, 203);
        assert_eq!(high.cmp_value(&low), Ordering::Greater);
        assert_eq!(low.cmp_value(&high), Ordering::Less);
        assert_eq!(high.cmp_value(&high), Ordering::Equal);
    }
}
