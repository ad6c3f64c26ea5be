//! Copies the current tab's URL to the clipboard on a keyboard shortcut.
//!
//! When the configured command fires, [`ClipboardCopier`] injects a small
//! page script into the tab that writes the URL with the Clipboard API,
//! falls back to a hidden textarea + `execCommand("copy")`, and shows a
//! short toast.

// ============================================================================
// Imports
// ============================================================================

use std::borrow::Cow;

use async_trait::async_trait;
use serde_json::{Value, json};
use tracing::{debug, info, warn};

use crate::dispatch::TabEventHandler;
use crate::error::{Error, Result};
use crate::host::TabHost;
use crate::tabs::{EventKind, TabSnapshot};

// ============================================================================
// Submodules
// ============================================================================

mod assets;

// ============================================================================
// Constants
// ============================================================================

/// Default shortcut command name.
pub const DEFAULT_COPY_COMMAND: &str = "copy-url";

// ============================================================================
// ClipboardOutcome
// ============================================================================

/// Which path the page script used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClipboardOutcome {
    /// The async Clipboard API accepted the URL.
    Copied,
    /// The manual selection fallback was used.
    CopiedWithFallback,
}

impl ClipboardOutcome {
    fn from_script_result(tab: &TabSnapshot, value: &Value) -> Result<Self> {
        match value.as_str() {
            Some(assets::RESULT_CLIPBOARD) => Ok(Self::Copied),
            Some(assets::RESULT_FALLBACK) => Ok(Self::CopiedWithFallback),
            _ => Err(Error::clipboard_failed(
                tab.id,
                format!("unexpected script result: {value}"),
            )),
        }
    }
}

// ============================================================================
// ClipboardCopier
// ============================================================================

/// Handler for the copy-URL shortcut.
#[derive(Debug, Clone)]
pub struct ClipboardCopier {
    command: Cow<'static, str>,
}

impl Default for ClipboardCopier {
    fn default() -> Self {
        Self::new(DEFAULT_COPY_COMMAND)
    }
}

impl ClipboardCopier {
    /// Creates a copier bound to `command`.
    #[inline]
    #[must_use]
    pub fn new(command: impl Into<Cow<'static, str>>) -> Self {
        Self {
            command: command.into(),
        }
    }

    /// Returns the command name this copier reacts to.
    #[inline]
    #[must_use]
    pub fn command(&self) -> &str {
        &self.command
    }

    /// Copies the URL of `tab`, or of the active tab when `tab` is `None`.
    ///
    /// # Errors
    ///
    /// - [`Error::Protocol`] if there is no active tab or the query fails
    /// - [`Error::ClipboardFailed`] if the tab has no URL or the page script
    ///   fails
    pub async fn copy(
        &self,
        host: &dyn TabHost,
        tab: Option<&TabSnapshot>,
    ) -> Result<(TabSnapshot, ClipboardOutcome)> {
        let tab = match tab {
            Some(tab) => tab.clone(),
            None => host
                .query_active()
                .await?
                .ok_or_else(|| Error::protocol("No active tab to copy from"))?,
        };

        let Some(url) = tab.url.as_deref() else {
            return Err(Error::clipboard_failed(tab.id, "tab has no URL"));
        };

        debug!(tab_id = %tab.id, %url, "Injecting copy script");

        let value = host
            .execute_script(tab.id, &assets::copy_url_script(), vec![json!(url)])
            .await
            .map_err(|e| Error::clipboard_failed(tab.id, e.to_string()))?;

        let outcome = ClipboardOutcome::from_script_result(&tab, &value)?;
        Ok((tab, outcome))
    }
}

#[async_trait]
impl TabEventHandler for ClipboardCopier {
    fn name(&self) -> &'static str {
        "clipboard-copier"
    }

    fn kinds(&self) -> &'static [EventKind] {
        &[EventKind::Command]
    }

    async fn on_command(&self, host: &dyn TabHost, name: &str, tab: Option<&TabSnapshot>) {
        if name != self.command() {
            debug!(command = %name, "Ignoring command");
            return;
        }

        match self.copy(host, tab).await {
            Ok((tab, outcome)) => {
                info!(tab_id = %tab.id, url = tab.url_or_blank(), ?outcome, "Copied URL");
            }
            Err(e) => warn!(command = %name, error = %e, "Copy URL failed"),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    use crate::host::mock::{HostCall, MockHost};
    use crate::identifiers::{TabId, WindowId};

    const WINDOW: WindowId = WindowId::new(1);

    fn page(id: i32) -> TabSnapshot {
        TabSnapshot::new(TabId::new(id), WINDOW).with_url("https://example.com/docs")
    }

    #[tokio::test]
    async fn test_copies_payload_tab() {
        let host = MockHost::new().script_returns(Ok(json!("clipboard")));

        let (tab, outcome) = ClipboardCopier::default()
            .copy(&host, Some(&page(4)))
            .await
            .expect("copy");

        assert_eq!(tab.id, TabId::new(4));
        assert_eq!(outcome, ClipboardOutcome::Copied);
        assert_eq!(
            host.calls(),
            vec![HostCall::Script(
                TabId::new(4),
                vec![json!("https://example.com/docs")]
            )]
        );
    }

    #[tokio::test]
    async fn test_falls_back_to_active_tab() {
        let host = MockHost::new()
            .with_window(WINDOW, vec![page(1), page(2).with_active(true)])
            .script_returns(Ok(json!("fallback")));

        let (tab, outcome) = ClipboardCopier::default()
            .copy(&host, None)
            .await
            .expect("copy");

        assert_eq!(tab.id, TabId::new(2));
        assert_eq!(outcome, ClipboardOutcome::CopiedWithFallback);
        assert_eq!(host.calls()[0], HostCall::QueryActive);
    }

    #[tokio::test]
    async fn test_no_active_tab_is_an_error() {
        let host = MockHost::new();
        let result = ClipboardCopier::default().copy(&host, None).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_tab_without_url_is_not_injected() {
        let host = MockHost::new();
        let tab = TabSnapshot::new(TabId::new(3), WINDOW);

        let err = ClipboardCopier::default()
            .copy(&host, Some(&tab))
            .await
            .expect_err("no url");

        assert!(err.is_tab_error());
        assert!(host.calls().is_empty());
    }

    #[tokio::test]
    async fn test_script_failure_maps_to_clipboard_error() {
        let host = MockHost::new().script_returns(Err("Cannot access a chrome:// URL".into()));

        let err = ClipboardCopier::default()
            .copy(&host, Some(&page(4)))
            .await
            .expect_err("script failed");

        assert!(matches!(err, Error::ClipboardFailed { tab_id, .. } if tab_id == TabId::new(4)));
        assert!(err.to_string().contains("chrome://"));
    }

    #[tokio::test]
    async fn test_unexpected_script_result() {
        let host = MockHost::new().script_returns(Ok(Value::Null));

        let err = ClipboardCopier::default()
            .copy(&host, Some(&page(4)))
            .await
            .expect_err("null result");

        assert!(matches!(err, Error::ClipboardFailed { .. }));
    }

    #[tokio::test]
    async fn test_handler_ignores_other_commands() {
        let host = MockHost::new().script_returns(Ok(json!("clipboard")));
        let copier = ClipboardCopier::new("copy-link");

        copier.on_command(&host, "copy-url", Some(&page(1))).await;
        assert!(host.calls().is_empty());

        copier.on_command(&host, "copy-link", Some(&page(1))).await;
        assert_eq!(host.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_handler_contains_failures() {
        let host = MockHost::new().script_returns(Err("boom".into()));
        ClipboardCopier::default()
            .on_command(&host, DEFAULT_COPY_COMMAND, Some(&page(1)))
            .await;
        assert_eq!(host.calls().len(), 1);
    }
}
