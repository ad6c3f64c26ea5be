//! Moves a new-tab-button tab to the front of the strip and scrolls it into view.
//!
//! The sequence is linear and attempt-once:
//!
//! 1. Move the tab to index 0. A failure aborts the sequence.
//! 2. Wait for the tab strip to settle.
//! 3. Re-query the window and activate some other unpinned tab, then the
//!    subject tab. Switching away first forces the strip to scroll even when
//!    the subject is already active. With no other unpinned tab, the subject
//!    is activated directly.
//!
//! Failures in steps 2-3 are logged and leave the move in place.

// ============================================================================
// Imports
// ============================================================================

use std::time::Duration;

use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::host::TabHost;
use crate::identifiers::TabId;
use crate::tabs::TabSnapshot;

// ============================================================================
// Constants
// ============================================================================

/// Default wait between the move and the scroll sequence.
///
/// Chosen empirically; it is a settling delay, not a synchronization point.
pub const DEFAULT_SETTLE_DELAY: Duration = Duration::from_millis(100);

/// Strip index the tab is moved to.
const FRONT_INDEX: u32 = 0;

// ============================================================================
// RepositionOutcome
// ============================================================================

/// How far the reposition sequence got.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepositionOutcome {
    /// The move failed; nothing else was attempted.
    MoveFailed {
        /// Host-supplied reason.
        reason: String,
    },

    /// The tab moved but the scroll/activate step failed.
    ScrollFailed {
        /// Host-supplied reason.
        reason: String,
    },

    /// No other unpinned tab existed; the subject was activated directly.
    ActivatedDirectly,

    /// The strip was scrolled by activating `neighbor` and then the subject.
    ScrolledVia {
        /// Tab activated first.
        neighbor: TabId,
    },
}

impl RepositionOutcome {
    /// Returns `true` if the tab ended up at the front.
    #[inline]
    #[must_use]
    pub fn moved(&self) -> bool {
        !matches!(self, Self::MoveFailed { .. })
    }

    /// Returns `true` if every step succeeded.
    #[inline]
    #[must_use]
    pub fn is_complete(&self) -> bool {
        matches!(self, Self::ActivatedDirectly | Self::ScrolledVia { .. })
    }
}

// ============================================================================
// Repositioner
// ============================================================================

/// Runs the move-then-scroll sequence against a [`TabHost`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Repositioner {
    settle_delay: Duration,
}

impl Default for Repositioner {
    fn default() -> Self {
        Self::new(DEFAULT_SETTLE_DELAY)
    }
}

impl Repositioner {
    /// Creates a repositioner with the given settle delay.
    #[inline]
    #[must_use]
    pub const fn new(settle_delay: Duration) -> Self {
        Self { settle_delay }
    }

    /// Returns the settle delay.
    #[inline]
    #[must_use]
    pub const fn settle_delay(&self) -> Duration {
        self.settle_delay
    }

    /// Moves `tab` to the front and scrolls it into view.
    ///
    /// Never fails: errors are logged and reported through the outcome.
    pub async fn reposition(&self, host: &dyn TabHost, tab: &TabSnapshot) -> RepositionOutcome {
        if let Err(e) = host.move_tab(tab.id, FRONT_INDEX).await {
            let err = Error::move_failed(tab.id, e.to_string());
            warn!(
                tab_id = %tab.id,
                window_id = %tab.window_id,
                error = %err,
                "Move to front failed"
            );
            return RepositionOutcome::MoveFailed {
                reason: e.to_string(),
            };
        }

        debug!(tab_id = %tab.id, "Moved tab to front");

        match self.scroll_into_view(host, tab).await {
            Ok(outcome) => {
                info!(tab_id = %tab.id, ?outcome, "Repositioned new tab");
                outcome
            }
            Err(e) => {
                let err = Error::reposition_failed(tab.id, e.to_string());
                warn!(
                    tab_id = %tab.id,
                    window_id = %tab.window_id,
                    error = %err,
                    "Scroll into view failed"
                );
                RepositionOutcome::ScrollFailed {
                    reason: e.to_string(),
                }
            }
        }
    }

    /// Steps 2-3: settle, re-query, activate.
    async fn scroll_into_view(
        &self,
        host: &dyn TabHost,
        tab: &TabSnapshot,
    ) -> Result<RepositionOutcome> {
        host.wait_for_layout(tab.window_id, self.settle_delay).await;

        let strip = host.query_window(tab.window_id).await?;
        let pinned = strip.iter().filter(|t| t.pinned).count();
        let neighbor = strip.iter().find(|t| !t.pinned && t.id != tab.id).map(|t| t.id);

        debug!(
            tab_id = %tab.id,
            tabs = strip.len(),
            pinned,
            ?neighbor,
            "Queried window after move"
        );

        match neighbor {
            Some(neighbor) => {
                host.activate_tab(neighbor).await?;
                host.activate_tab(tab.id).await?;
                Ok(RepositionOutcome::ScrolledVia { neighbor })
            }
            None => {
                host.activate_tab(tab.id).await?;
                Ok(RepositionOutcome::ActivatedDirectly)
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
