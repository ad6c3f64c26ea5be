//! Host tab operations.
//!
//! [`TabHost`] is the seam between tab handlers and the browser. Handlers
//! only ever see `&dyn TabHost`, so the classifier, repositioner and
//! clipboard copier run unchanged against [`RemoteHost`] (the extension over
//! WebSocket) or an in-memory host in tests.
//!
//! | Operation | Extension command |
//! |-----------|-------------------|
//! | [`TabHost::move_tab`] | `tabs.move` |
//! | [`TabHost::activate_tab`] | `tabs.activate` |
//! | [`TabHost::query_window`] | `tabs.query` |
//! | [`TabHost::query_active`] | `tabs.queryActive` |
//! | [`TabHost::execute_script`] | `scripting.executeScript` |

// ============================================================================
// Imports
// ============================================================================

use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::Result;
use crate::identifiers::{TabId, WindowId};
use crate::tabs::TabSnapshot;

// ============================================================================
// Submodules
// ============================================================================

mod remote;

#[cfg(test)]
pub(crate) mod mock;

// ============================================================================
// Re-exports
// ============================================================================

pub use remote::RemoteHost;

// ============================================================================
// TabHost
// ============================================================================

/// Tab mutation and query capabilities supplied by the browser.
///
/// Every call is attempted once; implementations do not retry.
#[async_trait]
pub trait TabHost: Send + Sync {
    /// Moves a tab to `index` within its window.
    async fn move_tab(&self, tab_id: TabId, index: u32) -> Result<()>;

    /// Makes a tab the active tab of its window.
    async fn activate_tab(&self, tab_id: TabId) -> Result<()>;

    /// Lists the tabs of a window in strip order.
    async fn query_window(&self, window_id: WindowId) -> Result<Vec<TabSnapshot>>;

    /// Returns the active tab of the last focused window.
    async fn query_active(&self) -> Result<Option<TabSnapshot>>;

    /// Evaluates a function expression in a tab, calls it with `args` and
    /// returns its (awaited) result.
    async fn execute_script(
        &self,
        tab_id: TabId,
        script: &str,
        args: Vec<Value>,
    ) -> Result<Value>;

    /// Waits until the window's tab strip has settled after a move.
    ///
    /// Browsers expose no such signal to extensions, so the default waits
    /// for `fallback`. Hosts that can observe layout completion override this.
    async fn wait_for_layout(&self, _window_id: WindowId, fallback: Duration) {
        if !fallback.is_zero() {
            tokio::time::sleep(fallback).await;
        }
    }
}
