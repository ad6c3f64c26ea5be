//! Tab snapshot and lifecycle payloads.

use serde::{Deserialize, Serialize};

use crate::identifiers::{TabId, WindowId};

// ============================================================================
// Constants
// ============================================================================

/// URL reported for a tab whose URL is not yet known.
pub(crate) const BLANK_URL: &str = "about:blank";

/// Title reported for a tab whose title is not yet known.
pub(crate) const PLACEHOLDER_TITLE: &str = "New Tab";

// ============================================================================
// TabSnapshot
// ============================================================================

/// State of a tab at the moment the browser delivered an event.
///
/// # Format
///
/// ```json
/// {
///   "id": 12,
///   "url": "about:blank",
///   "title": "New Tab",
///   "windowId": 1,
///   "index": 4,
///   "active": true,
///   "openerTabId": 3,
///   "pinned": false
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TabSnapshot {
    /// Tab ID.
    pub id: TabId,

    /// Current URL, absent before the first navigation commits.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Current title, absent before the page provides one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Window the tab belongs to.
    pub window_id: WindowId,

    /// Zero-based position in the tab strip.
    #[serde(default)]
    pub index: u32,

    /// Whether the tab is the active tab of its window.
    #[serde(default)]
    pub active: bool,

    /// Tab that opened this one via a link or script.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opener_tab_id: Option<TabId>,

    /// Whether the tab is pinned.
    #[serde(default)]
    pub pinned: bool,

    /// Load status, when the host reports it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<LoadStatus>,
}

impl TabSnapshot {
    /// Creates a snapshot with only the required fields set.
    #[must_use]
    pub fn new(id: TabId, window_id: WindowId) -> Self {
        Self {
            id,
            url: None,
            title: None,
            window_id,
            index: 0,
            active: false,
            opener_tab_id: None,
            pinned: false,
            status: None,
        }
    }

    /// Sets the URL.
    #[inline]
    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Sets the title.
    #[inline]
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the tab strip index.
    #[inline]
    #[must_use]
    pub fn with_index(mut self, index: u32) -> Self {
        self.index = index;
        self
    }

    /// Marks the tab active.
    #[inline]
    #[must_use]
    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Sets the opener tab.
    #[inline]
    #[must_use]
    pub fn with_opener(mut self, opener: TabId) -> Self {
        self.opener_tab_id = Some(opener);
        self
    }

    /// Marks the tab pinned.
    #[inline]
    #[must_use]
    pub fn with_pinned(mut self, pinned: bool) -> Self {
        self.pinned = pinned;
        self
    }

    /// Returns the URL, or `about:blank` when absent.
    #[inline]
    #[must_use]
    pub fn url_or_blank(&self) -> &str {
        self.url.as_deref().unwrap_or(BLANK_URL)
    }

    /// Returns the title, or `New Tab` when absent.
    #[inline]
    #[must_use]
    pub fn title_or_placeholder(&self) -> &str {
        self.title.as_deref().unwrap_or(PLACEHOLDER_TITLE)
    }
}

// ============================================================================
// LoadStatus
// ============================================================================

/// Loading state reported in tab updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadStatus {
    /// Navigation in progress.
    Loading,
    /// Load finished.
    Complete,
    /// Tab was discarded or frozen; sent by some browsers.
    Unloaded,
}

// ============================================================================
// ChangeInfo
// ============================================================================

/// Properties that changed in a `tabs.updated` notification.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeInfo {
    /// New load status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<LoadStatus>,

    /// New URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// New title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// New pinned state.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pinned: Option<bool>,
}

impl ChangeInfo {
    /// Returns `true` if this update reports the terminal load-complete state.
    #[inline]
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.status == Some(LoadStatus::Complete)
    }
}

// ============================================================================
// ActiveInfo / RemoveInfo
// ============================================================================

/// Payload of a `tabs.activated` notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveInfo {
    /// Newly active tab.
    pub tab_id: TabId,
    /// Window containing the tab.
    pub window_id: WindowId,
}

/// Payload of a `tabs.removed` notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveInfo {
    /// Window the tab was in.
    pub window_id: WindowId,
    /// Whether the tab closed because its window is closing.
    #[serde(default)]
    pub is_window_closing: bool,
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_from_browser_json() {
        let json_str = r#"{
            "id": 12,
            "url": "chrome://newtab/",
            "title": "New Tab",
            "windowId": 1,
            "index": 4,
            "active": true,
            "openerTabId": 3,
            "pinned": false,
            "status": "loading",
            "incognito": false
        }"#;

        let tab: TabSnapshot = serde_json::from_str(json_str).expect("parse snapshot");
        assert_eq!(tab.id, TabId::new(12));
        assert_eq!(tab.window_id, WindowId::new(1));
        assert_eq!(tab.index, 4);
        assert!(tab.active);
        assert_eq!(tab.opener_tab_id, Some(TabId::new(3)));
        assert_eq!(tab.status, Some(LoadStatus::Loading));
    }

    #[test]
    fn test_snapshot_minimal_json() {
        let tab: TabSnapshot =
            serde_json::from_str(r#"{"id": 5, "windowId": 2}"#).expect("parse snapshot");

        assert_eq!(tab.url, None);
        assert_eq!(tab.title, None);
        assert!(!tab.active);
        assert!(!tab.pinned);
        assert_eq!(tab.opener_tab_id, None);
    }

    #[test]
    fn test_defaults_for_missing_url_and_title() {
        let tab = TabSnapshot::new(TabId::new(1), WindowId::new(1));
        assert_eq!(tab.url_or_blank(), "about:blank");
        assert_eq!(tab.title_or_placeholder(), "New Tab");

        let tab = tab.with_url("https://example.com").with_title("Example");
        assert_eq!(tab.url_or_blank(), "https://example.com");
        assert_eq!(tab.title_or_placeholder(), "Example");
    }

    #[test]
    fn test_serialized_snapshot_uses_camel_case() {
        let tab = TabSnapshot::new(TabId::new(1), WindowId::new(2)).with_opener(TabId::new(9));
        let json = serde_json::to_string(&tab).expect("serialize");

        assert!(json.contains("\"windowId\":2"));
        assert!(json.contains("\"openerTabId\":9"));
        assert!(!json.contains("\"url\""));
    }

    #[test]
    fn test_change_info_complete() {
        let change: ChangeInfo =
            serde_json::from_str(r#"{"status": "complete"}"#).expect("parse change");
        assert!(change.is_complete());

        let change: ChangeInfo =
            serde_json::from_str(r#"{"title": "Loading..."}"#).expect("parse change");
        assert!(!change.is_complete());
    }

    #[test]
    fn test_remove_info_defaults_window_closing() {
        let info: RemoveInfo = serde_json::from_str(r#"{"windowId": 4}"#).expect("parse");
        assert!(!info.is_window_closing);
    }
}
