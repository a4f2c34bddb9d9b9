//! Per-screen filter state.
//!
//! A screen owns exactly one mutable value: its current filter parameters.
//! The visible list is re-derived from those parameters on every read -
//! there is no cached result and no global state, so the search box and the
//! category chips always combine.

use std::sync::Arc;

use crate::filter::{CatalogRecord, Selector, filter_records};

/// The filter parameters a screen currently holds.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterParams {
    /// Free-text search query.
    pub query: String,
    /// Active category/type/specialty chip.
    pub selector: Selector,
}

/// One marketplace screen: a record list plus the current filter parameters.
#[derive(Debug, Clone)]
pub struct Screen<R> {
    records: Arc<Vec<R>>,
    params: FilterParams,
}

impl<R> Screen<R>
where
    R: CatalogRecord + Clone,
{
    /// Create a screen over a record list, starting unfiltered.
    #[must_use]
    pub fn new(records: Arc<Vec<R>>) -> Self {
        Self {
            records,
            params: FilterParams::default(),
        }
    }

    /// Current filter parameters.
    #[must_use]
    pub const fn params(&self) -> &FilterParams {
        &self.params
    }

    /// Update the search query, keeping the active selector.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.params.query = query.into();
    }

    /// Update the active selector, keeping the search query.
    pub fn set_selector(&mut self, selector: Selector) {
        self.params.selector = selector;
    }

    /// The records visible under the current parameters.
    #[must_use]
    pub fn visible(&self) -> Vec<R> {
        filter_records(&self.records, &self.params.query, &self.params.selector)
    }
}
