//! Integration tests for PetSphere.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p petsphere-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `catalog_search` - Filter/search/sort scenarios over the sample data
//! - `screen_flow` - Screen state and action capability flows
//!
//! The crate itself only ships test support: a [`RecordingActions`] sink
//! that captures fired card actions for assertions.

use std::sync::Mutex;

use petsphere_catalog::{CardActions, RecordKind};

/// One captured card action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedAction {
    /// Record kind the action applied to.
    pub kind: RecordKind,
    /// Display name of the record.
    pub name: String,
    /// Which hook fired: "selected" or "primary".
    pub hook: &'static str,
}

/// [`CardActions`] sink that records every fired hook.
#[derive(Debug, Default)]
pub struct RecordingActions {
    events: Mutex<Vec<CapturedAction>>,
}

impl RecordingActions {
    /// All actions captured so far, in firing order.
    #[must_use]
    pub fn captured(&self) -> Vec<CapturedAction> {
        self.events.lock().map(|e| e.clone()).unwrap_or_default()
    }

    fn push(&self, kind: RecordKind, name: &str, hook: &'static str) {
        if let Ok(mut events) = self.events.lock() {
            events.push(CapturedAction {
                kind,
                name: name.to_owned(),
                hook,
            });
        }
    }
}

impl CardActions for RecordingActions {
    fn selected(&self, kind: RecordKind, name: &str) {
        self.push(kind, name, "selected");
    }

    fn primary(&self, kind: RecordKind, name: &str) {
        self.push(kind, name, "primary");
    }
}
