//! New-tab detection and repositioning.
//!
//! | Module | Description |
//! |--------|-------------|
//! | `classifier` | Four-signal heuristic ([`NewTabClassifier`]) |
//! | `reposition` | Move-to-front and scroll sequence ([`Repositioner`]) |
//!
//! [`NewTabMover`] ties the two together as a `tabs.created` handler.

// ============================================================================
// Imports
// ============================================================================

use async_trait::async_trait;
use tracing::{debug, info};

use crate::dispatch::TabEventHandler;
use crate::host::TabHost;
use crate::tabs::{EventKind, TabSnapshot};

// ============================================================================
// Submodules
// ============================================================================

mod classifier;
mod reposition;

// ============================================================================
// Re-exports
// ============================================================================

pub use classifier::{
    DEFAULT_NEW_TAB_URL_PREFIXES, DEFAULT_PLACEHOLDER_TITLES, DEFAULT_THRESHOLD,
    NewTabClassifier, NewTabScore, NewTabSignals, SIGNAL_COUNT,
};
pub(crate) use classifier::validate_threshold;
pub use reposition::{DEFAULT_SETTLE_DELAY, RepositionOutcome, Repositioner};

// ============================================================================
// NewTabMover
// ============================================================================

/// Classifies every created tab and repositions the positives.
#[derive(Debug, Clone, Default)]
pub struct NewTabMover {
    classifier: NewTabClassifier,
    repositioner: Repositioner,
}

impl NewTabMover {
    /// Creates a mover from its two parts.
    #[inline]
    #[must_use]
    pub fn new(classifier: NewTabClassifier, repositioner: Repositioner) -> Self {
        Self {
            classifier,
            repositioner,
        }
    }

    /// Returns the classifier.
    #[inline]
    #[must_use]
    pub fn classifier(&self) -> &NewTabClassifier {
        &self.classifier
    }

    /// Classifies `tab` and repositions it when positive.
    ///
    /// Returns `None` when the tab was not classified as a new-tab-button tab.
    pub async fn handle(
        &self,
        host: &dyn TabHost,
        tab: &TabSnapshot,
    ) -> Option<RepositionOutcome> {
        let score = self.classifier.score(tab);

        if score.count() < self.classifier.threshold() {
            debug!(tab_id = %tab.id, %score, "Not a new-tab-button tab");
            return None;
        }

        info!(
            tab_id = %tab.id,
            window_id = %tab.window_id,
            %score,
            "New tab detected, moving to front"
        );
        Some(self.repositioner.reposition(host, tab).await)
    }
}

#[async_trait]
impl TabEventHandler for NewTabMover {
    fn name(&self) -> &'static str {
        "new-tab-mover"
    }

    fn kinds(&self) -> &'static [EventKind] {
        &[EventKind::Created]
    }

    async fn on_created(&self, host: &dyn TabHost, tab: &TabSnapshot) {
        self.handle(host, tab).await;
    }
}

// ============================================================================
// Tests
// ============================================================================
