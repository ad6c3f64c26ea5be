//! Typed tab lifecycle events.

use std::fmt;

use crate::identifiers::{TabId, WindowId};

use super::{ActiveInfo, ChangeInfo, RemoveInfo, TabSnapshot};

// ============================================================================
// EventKind
// ============================================================================

/// Discriminant of a [`TabEvent`], used to route events to handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// `tabs.created`
    Created,
    /// `tabs.updated`
    Updated,
    /// `tabs.activated`
    Activated,
    /// `tabs.removed`
    Removed,
    /// `commands.invoked`
    Command,
}

impl EventKind {
    /// All routable kinds.
    pub const ALL: &'static [EventKind] = &[
        EventKind::Created,
        EventKind::Updated,
        EventKind::Activated,
        EventKind::Removed,
        EventKind::Command,
    ];

    /// Returns the protocol method name for this kind.
    #[must_use]
    pub const fn method(&self) -> &'static str {
        match self {
            Self::Created => "tabs.created",
            Self::Updated => "tabs.updated",
            Self::Activated => "tabs.activated",
            Self::Removed => "tabs.removed",
            Self::Command => "commands.invoked",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Created => "created",
            Self::Updated => "updated",
            Self::Activated => "activated",
            Self::Removed => "removed",
            Self::Command => "command",
        };
        f.write_str(label)
    }
}

// ============================================================================
// TabEvent
// ============================================================================

/// A decoded notification from the browser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TabEvent {
    /// A tab was created.
    Created(TabSnapshot),

    /// A tab's properties changed.
    Updated {
        /// Tab that changed.
        tab_id: TabId,
        /// What changed.
        change: ChangeInfo,
        /// Tab state after the change.
        tab: TabSnapshot,
    },

    /// The active tab of a window changed.
    Activated(ActiveInfo),

    /// A tab was closed.
    Removed {
        /// Tab that closed.
        tab_id: TabId,
        /// Removal details.
        info: RemoveInfo,
    },

    /// A keyboard shortcut declared by the extension was pressed.
    Command {
        /// Command name from the extension manifest.
        name: String,
        /// Tab that was active when the shortcut fired, if the host reports it.
        tab: Option<TabSnapshot>,
    },

    /// Any other notification.
    Unknown {
        /// Event method.
        method: String,
    },
}

impl TabEvent {
    /// Returns the routing kind, or `None` for unknown events.
    #[must_use]
    pub fn kind(&self) -> Option<EventKind> {
        match self {
            Self::Created(_) => Some(EventKind::Created),
            Self::Updated { .. } => Some(EventKind::Updated),
            Self::Activated(_) => Some(EventKind::Activated),
            Self::Removed { .. } => Some(EventKind::Removed),
            Self::Command { .. } => Some(EventKind::Command),
            Self::Unknown { .. } => None,
        }
    }

    /// Returns the tab the event is about, when there is one.
    #[must_use]
    pub fn tab_id(&self) -> Option<TabId> {
        match self {
            Self::Created(tab) => Some(tab.id),
            Self::Updated { tab_id, .. } | Self::Removed { tab_id, .. } => Some(*tab_id),
            Self::Activated(info) => Some(info.tab_id),
            Self::Command { tab, .. } => tab.as_ref().map(|t| t.id),
            Self::Unknown { .. } => None,
        }
    }

    /// Returns the window the event is about, when there is one.
    #[must_use]
    pub fn window_id(&self) -> Option<WindowId> {
        match self {
            Self::Created(tab) | Self::Updated { tab, .. } => Some(tab.window_id),
            Self::Activated(info) => Some(info.window_id),
            Self::Removed { info, .. } => Some(info.window_id),
            Self::Command { tab, .. } => tab.as_ref().map(|t| t.window_id),
            Self::Unknown { .. } => None,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_and_ids() {
        let tab = TabSnapshot::new(TabId::new(4), WindowId::new(2));
        let event = TabEvent::Created(tab);

        assert_eq!(event.kind(), Some(EventKind::Created));
        assert_eq!(event.tab_id(), Some(TabId::new(4)));
        assert_eq!(event.window_id(), Some(WindowId::new(2)));
    }

    #[test]
    fn test_removed_ids() {
        let event = TabEvent::Removed {
            tab_id: TabId::new(8),
            info: RemoveInfo {
                window_id: WindowId::new(3),
                is_window_closing: true,
            },
        };

        assert_eq!(event.kind(), Some(EventKind::Removed));
        assert_eq!(event.tab_id(), Some(TabId::new(8)));
        assert_eq!(event.window_id(), Some(WindowId::new(3)));
    }

    #[test]
    fn test_unknown_has_no_kind() {
        let event = TabEvent::Unknown {
            method: "windows.created".into(),
        };
        assert_eq!(event.kind(), None);
        assert_eq!(event.tab_id(), None);
    }

    #[test]
    fn test_method_names() {
        assert_eq!(EventKind::Created.method(), "tabs.created");
        assert_eq!(EventKind::Command.method(), "commands.invoked");
        assert_eq!(EventKind::ALL.len(), 5);
    }
}
