//! Structured logging of tab lifecycle events.
//!
//! [`EventLogger`] turns every created, loaded, activated and removed event
//! into a [`LogRecord`] and emits it at `info` level. Updates are only logged
//! once they report the terminal `complete` status.

// ============================================================================
// Imports
// ============================================================================

use std::fmt;

use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use tracing::info;

use crate::dispatch::TabEventHandler;
use crate::host::TabHost;
use crate::identifiers::{TabId, WindowId};
use crate::tabs::{ActiveInfo, ChangeInfo, EventKind, RemoveInfo, TabEvent, TabSnapshot};

// ============================================================================
// LogRecord
// ============================================================================

/// One human-readable line describing a lifecycle event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    /// Event kind.
    pub kind: EventKind,
    /// Subject tab.
    pub tab_id: TabId,
    /// Window of the subject tab.
    pub window_id: WindowId,
    /// Resolved URL (created and loaded records).
    pub url: Option<String>,
    /// Resolved title (created and loaded records).
    pub title: Option<String>,
    /// When the event was handled (created records).
    pub timestamp: Option<DateTime<Utc>>,
    /// Whether the window is closing (removed records).
    pub window_closing: Option<bool>,
}

impl LogRecord {
    /// Builds the record for `event`, or `None` if the event is not logged.
    ///
    /// Deterministic for a given `(event, now)`.
    #[must_use]
    pub fn from_event(event: &TabEvent, now: DateTime<Utc>) -> Option<Self> {
        match event {
            TabEvent::Created(tab) => Some(Self::created(tab, now)),
            TabEvent::Updated { change, tab, .. } => Self::loaded(change, tab),
            TabEvent::Activated(info) => Some(Self::activated(info)),
            TabEvent::Removed { tab_id, info } => Some(Self::removed(*tab_id, info)),
            TabEvent::Command { .. } | TabEvent::Unknown { .. } => None,
        }
    }

    fn created(tab: &TabSnapshot, now: DateTime<Utc>) -> Self {
        Self {
            kind: EventKind::Created,
            tab_id: tab.id,
            window_id: tab.window_id,
            url: Some(tab.url_or_blank().to_string()),
            title: Some(tab.title_or_placeholder().to_string()),
            timestamp: Some(now),
            window_closing: None,
        }
    }

    fn loaded(change: &ChangeInfo, tab: &TabSnapshot) -> Option<Self> {
        if !change.is_complete() {
            return None;
        }

        Some(Self {
            kind: EventKind::Updated,
            tab_id: tab.id,
            window_id: tab.window_id,
            url: Some(tab.url_or_blank().to_string()),
            title: Some(tab.title_or_placeholder().to_string()),
            timestamp: None,
            window_closing: None,
        })
    }

    fn activated(info: &ActiveInfo) -> Self {
        Self {
            kind: EventKind::Activated,
            tab_id: info.tab_id,
            window_id: info.window_id,
            url: None,
            title: None,
            timestamp: None,
            window_closing: None,
        }
    }

    fn removed(tab_id: TabId, info: &RemoveInfo) -> Self {
        Self {
            kind: EventKind::Removed,
            tab_id,
            window_id: info.window_id,
            url: None,
            title: None,
            timestamp: None,
            window_closing: Some(info.is_window_closing),
        }
    }

    /// Short label for the record's event.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self.kind {
            EventKind::Created => "tab created",
            EventKind::Updated => "tab loaded",
            EventKind::Activated => "tab activated",
            EventKind::Removed => "tab closed",
            EventKind::Command => "command",
        }
    }
}

impl fmt::Display for LogRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: id={}", self.label(), self.tab_id)?;
        if let Some(url) = &self.url {
            write!(f, " url={url}")?;
        }
        if let Some(title) = &self.title {
            write!(f, " title={title:?}")?;
        }
        write!(f, " window={}", self.window_id)?;
        if let Some(closing) = self.window_closing {
            write!(f, " window_closing={closing}")?;
        }
        if let Some(timestamp) = &self.timestamp {
            write!(
                f,
                " at={}",
                timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
            )?;
        }
        Ok(())
    }
}

// ============================================================================
// EventLogger
// ============================================================================

/// Handler that logs every lifecycle event.
#[derive(Debug, Clone, Copy, Default)]
pub struct EventLogger;

impl EventLogger {
    /// Creates a logger.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Logs `event` stamped with the current time.
    pub fn log(&self, event: &TabEvent) {
        if let Some(record) = LogRecord::from_event(event, Utc::now()) {
            info!(kind = %record.kind, tab_id = %record.tab_id, "{record}");
        }
    }
}

#[async_trait]
impl TabEventHandler for EventLogger {
    fn name(&self) -> &'static str {
        "event-logger"
    }

    fn kinds(&self) -> &'static [EventKind] {
        &[
            EventKind::Created,
            EventKind::Updated,
            EventKind::Activated,
            EventKind::Removed,
        ]
    }

    async fn on_created(&self, _host: &dyn TabHost, tab: &TabSnapshot) {
        self.log(&TabEvent::Created(tab.clone()));
    }

    async fn on_updated(
        &self,
        _host: &dyn TabHost,
        tab_id: TabId,
        change: &ChangeInfo,
        tab: &TabSnapshot,
    ) {
        // Skip the clone for the common loading-progress updates.
        if change.is_complete() {
            self.log(&TabEvent::Updated {
                tab_id,
                change: change.clone(),
                tab: tab.clone(),
            });
        }
    }

    async fn on_activated(&self, _host: &dyn TabHost, info: &ActiveInfo) {
        self.log(&TabEvent::Activated(*info));
    }

    async fn on_removed(&self, _host: &dyn TabHost, tab_id: TabId, info: &RemoveInfo) {
        self.log(&TabEvent::Removed {
            tab_id,
            info: *info,
        });
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    use chrono::TimeZone;

    use crate::dispatch::Dispatcher;
    use crate::host::mock::MockHost;
    use crate::tabs::LoadStatus;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 16, 9, 30, 5).unwrap()
    }

    fn tab() -> TabSnapshot {
        TabSnapshot::new(TabId::new(7), WindowId::new(1))
    }

    #[test]
    fn test_created_record_defaults_url_and_title() {
        let record = LogRecord::from_event(&TabEvent::Created(tab()), now()).expect("logged");

        assert_eq!(record.url.as_deref(), Some("about:blank"));
        assert_eq!(record.title.as_deref(), Some("New Tab"));
        assert_eq!(
            record.to_string(),
            "tab created: id=7 url=about:blank title=\"New Tab\" window=1 \
             at=2026-10-16T09:30:05.000Z"
        );
    }

    #[test]
    fn test_created_record_keeps_real_values() {
        let event = TabEvent::Created(tab().with_url("https://example.com").with_title("Example"));
        let record = LogRecord::from_event(&event, now()).expect("logged");

        assert_eq!(record.url.as_deref(), Some("https://example.com"));
        assert_eq!(record.title.as_deref(), Some("Example"));
        assert_eq!(record.timestamp, Some(now()));
    }

    #[test]
    fn test_loading_updates_are_not_logged() {
        let event = TabEvent::Updated {
            tab_id: TabId::new(7),
            change: ChangeInfo {
                status: Some(LoadStatus::Loading),
                ..ChangeInfo::default()
            },
            tab: tab(),
        };
        assert_eq!(LogRecord::from_event(&event, now()), None);

        let event = TabEvent::Updated {
            tab_id: TabId::new(7),
            change: ChangeInfo {
                title: Some("Example".into()),
                ..ChangeInfo::default()
            },
            tab: tab(),
        };
        assert_eq!(LogRecord::from_event(&event, now()), None);
    }

    #[test]
    fn test_complete_update_is_logged_without_timestamp() {
        let event = TabEvent::Updated {
            tab_id: TabId::new(7),
            change: ChangeInfo {
                status: Some(LoadStatus::Complete),
                ..ChangeInfo::default()
            },
            tab: tab().with_url("https://example.com/").with_title("Example Domain"),
        };

        let record = LogRecord::from_event(&event, now()).expect("logged");
        assert_eq!(
            record.to_string(),
            "tab loaded: id=7 url=https://example.com/ title=\"Example Domain\" window=1"
        );
    }

    #[test]
    fn test_activated_and_removed_records() {
        let activated = TabEvent::Activated(ActiveInfo {
            tab_id: TabId::new(3),
            window_id: WindowId::new(2),
        });
        let record = LogRecord::from_event(&activated, now()).expect("logged");
        assert_eq!(record.to_string(), "tab activated: id=3 window=2");

        let removed = TabEvent::Removed {
            tab_id: TabId::new(3),
            info: RemoveInfo {
                window_id: WindowId::new(2),
                is_window_closing: true,
            },
        };
        let record = LogRecord::from_event(&removed, now()).expect("logged");
        assert_eq!(record.to_string(), "tab closed: id=3 window=2 window_closing=true");
    }

    #[test]
    fn test_commands_are_not_logged() {
        let event = TabEvent::Command {
            name: "copy-url".into(),
            tab: None,
        };
        assert_eq!(LogRecord::from_event(&event, now()), None);
    }

    #[test]
    fn test_record_is_deterministic() {
        let event = TabEvent::Created(tab());
        assert_eq!(
            LogRecord::from_event(&event, now()),
            LogRecord::from_event(&event, now())
        );
    }

    #[tokio::test]
    async fn test_logger_never_touches_host() {
        let host = MockHost::new();
        let dispatcher = Dispatcher::new().with_handler(std::sync::Arc::new(EventLogger::new()));

        dispatcher.dispatch(&host, &TabEvent::Created(tab())).await;
        dispatcher
            .dispatch(
                &host,
                &TabEvent::Activated(ActiveInfo {
                    tab_id: TabId::new(7),
                    window_id: WindowId::new(1),
                }),
            )
            .await;

        assert!(host.calls().is_empty());
        assert_eq!(dispatcher.handler_count(EventKind::Command), 0);
    }
}
