//! Generic catalog filtering.
//!
//! One filter serves all three marketplace tabs. A record kind plugs in by
//! implementing [`CatalogRecord`]: which text fields the search box matches
//! against, how the category selector applies, and how results are ordered
//! afterwards.

use serde::{Deserialize, Serialize};

/// The active category/type/specialty filter value.
///
/// `All` is the sentinel meaning "no category filtering" - every screen's
/// selector row starts on it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Selector {
    /// Match every record.
    #[default]
    All,
    /// Match records whose discriminator matches this value.
    Only(String),
}

impl Selector {
    /// Parse a selector from user input. "all" (any case) is the sentinel;
    /// anything else selects a category.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        if s.eq_ignore_ascii_case("all") {
            Self::All
        } else {
            Self::Only(s.to_owned())
        }
    }

    /// Whether this is the "no filtering" sentinel.
    #[must_use]
    pub const fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }
}

impl std::fmt::Display for Selector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::Only(value) => write!(f, "{value}"),
        }
    }
}

/// A record kind that the generic catalog filter can operate on.
pub trait CatalogRecord {
    /// The fields the free-text search matches against.
    fn search_fields(&self) -> [&str; 2];

    /// Whether this record's discriminator matches a non-"all" selector
    /// value. Each kind has its own matching rule; see the implementations
    /// in [`crate::records`].
    fn matches_selector(&self, value: &str) -> bool;

    /// Order a filtered result set. The default keeps filtered order;
    /// boarding providers override this to sort by rating.
    fn rank(_results: &mut [Self])
    where
        Self: Sized,
    {
    }
}

/// Filter a record list by free-text query and category selector.
///
/// A record is included iff it passes BOTH predicates:
///
/// - **Text**: case-insensitive substring match of `query` against any of
///   the record's [`search_fields`](CatalogRecord::search_fields). The
///   empty query matches everything.
/// - **Category**: [`Selector::All`] matches everything; otherwise the
///   record's [`matches_selector`](CatalogRecord::matches_selector) rule
///   decides.
///
/// The result is ordered by the kind's [`rank`](CatalogRecord::rank) hook.
/// Pure function of its inputs; runs to completion synchronously.
#[must_use]
pub fn filter_records<R>(records: &[R], query: &str, selector: &Selector) -> Vec<R>
where
    R: CatalogRecord + Clone,
{
    let needle = query.to_lowercase();

    let mut results: Vec<R> = records
        .iter()
        .filter(|record| {
            let text_match = needle.is_empty()
                || record
                    .search_fields()
                    .iter()
                    .any(|field| field.to_lowercase().contains(&needle));

            let category_match = match selector {
                Selector::All => true,
                Selector::Only(value) => record.matches_selector(value),
            };

            text_match && category_match
        })
        .cloned()
        .collect();

    R::rank(&mut results);
    results
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Snack {
        name: String,
        brand: String,
        category: String,
    }

    impl Snack {
        fn new(name: &str, brand: &str, category: &str) -> Self {
            Self {
                name: name.to_owned(),
                brand: brand.to_owned(),
                category: category.to_owned(),
            }
        }
    }

    impl CatalogRecord for Snack {
        fn search_fields(&self) -> [&str; 2] {
            [&self.name, &self.brand]
        }

        fn matches_selector(&self, value: &str) -> bool {
            self.category.to_lowercase() == value.to_lowercase()
        }
    }

    fn snacks() -> Vec<Snack> {
        vec![
            Snack::new("Beef Jerky Strips", "ChewCo", "Treats"),
            Snack::new("Salmon Bites", "OceanPet", "Treats"),
            Snack::new("Dental Sticks", "ChewCo", "Dental"),
        ]
    }

    #[test]
    fn test_empty_query_all_selector_is_identity() {
        let list = snacks();
        assert_eq!(filter_records(&list, "", &Selector::All), list);
    }

    #[test]
    fn test_text_match_is_case_insensitive_substring() {
        let list = snacks();
        let results = filter_records(&list, "JERKY", &Selector::All);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "Beef Jerky Strips");
    }

    #[test]
    fn test_text_match_covers_all_search_fields() {
        let list = snacks();
        // "chewco" only appears in the brand field
        let results = filter_records(&list, "chewco", &Selector::All);
        assert_eq!(results.len(), 2);
    }

    #[test]
    fn test_selector_and_query_combine_with_and() {
        let list = snacks();
        let results = filter_records(&list, "chewco", &Selector::parse("dental"));
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "Dental Sticks");

        // Query matches but category does not
        let none = filter_records(&list, "salmon", &Selector::parse("dental"));
        assert!(none.is_empty());
    }

    #[test]
    fn test_no_match_returns_empty_not_error() {
        let list = snacks();
        assert!(filter_records(&list, "hamster wheel", &Selector::All).is_empty());
        assert!(filter_records::<Snack>(&[], "", &Selector::All).is_empty());
    }

    #[test]
    fn test_idempotent() {
        let list = snacks();
        let once = filter_records(&list, "chewco", &Selector::All);
        let twice = filter_records(&once, "chewco", &Selector::All);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_selector_parse() {
        assert_eq!(Selector::parse("all"), Selector::All);
        assert_eq!(Selector::parse("ALL"), Selector::All);
        assert_eq!(Selector::parse("food"), Selector::Only("food".to_owned()));
        assert!(Selector::default().is_all());
    }

    #[test]
    fn test_selector_display() {
        assert_eq!(Selector::All.to_string(), "all");
        assert_eq!(Selector::parse("toys").to_string(), "toys");
    }
}
