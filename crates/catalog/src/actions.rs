//! Injected card action hooks.
//!
//! Every card exposes two hooks to the embedding UI: "record selected"
//! (the card was tapped) and "primary action" (add to cart / book). The
//! catalog core only knows the [`CardActions`] capability; what actually
//! happens is the integrator's business. In this build nothing is wired to
//! a real cart or booking system, so the shipped implementation just logs.

use serde::{Deserialize, Serialize};

/// Which kind of record an action applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    Product,
    Doctor,
    Boarding,
}

impl std::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Product => write!(f, "product"),
            Self::Doctor => write!(f, "doctor"),
            Self::Boarding => write!(f, "boarding"),
        }
    }
}

impl RecordKind {
    /// What the primary action means for this kind of record.
    #[must_use]
    pub const fn primary_action_label(&self) -> &'static str {
        match self {
            Self::Product => "add to cart",
            Self::Doctor => "book appointment",
            Self::Boarding => "book stay",
        }
    }
}

/// Capability a screen hands to its cards.
pub trait CardActions {
    /// The card was selected (tapped/opened).
    fn selected(&self, kind: RecordKind, name: &str);

    /// The card's primary call to action was triggered.
    fn primary(&self, kind: RecordKind, name: &str);
}

/// [`CardActions`] implementation that only logs.
///
/// Stands in for the cart/booking/payment integrations this build does not
/// ship; the action is recorded in the log and nothing else happens.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogActions;

impl CardActions for LogActions {
    fn selected(&self, kind: RecordKind, name: &str) {
        tracing::info!(%kind, name, "Record selected");
    }

    fn primary(&self, kind: RecordKind, name: &str) {
        tracing::info!(
            %kind,
            name,
            action = kind.primary_action_label(),
            "Primary action requested (not wired)"
        );
    }
}
