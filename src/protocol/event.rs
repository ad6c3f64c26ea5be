//! Event message types.
//!
//! Events are notifications sent from the remote end (extension) to the
//! local end (Rust) when tab activity occurs.
//!
//! # Event Types
//!
//! | Module | Events |
//! |--------|--------|
//! | `tabs` | `created`, `updated`, `activated`, `removed` |
//! | `commands` | `invoked` |

// ============================================================================
// Imports
// ============================================================================

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{Error, Result};
use crate::identifiers::{RequestId, TabId};
use crate::tabs::{ActiveInfo, RemoveInfo, TabEvent, TabSnapshot};

// ============================================================================
// Event
// ============================================================================

/// An event notification from remote end to local end.
///
/// # Format
///
/// ```json
/// {
///   "id": "event-uuid",
///   "type": "event",
///   "method": "module.eventName",
///   "params": { ... }
/// }
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct Event {
    /// Unique identifier of the notification.
    pub id: RequestId,

    /// Event type marker (always "event").
    #[serde(rename = "type")]
    pub event_type: String,

    /// Event name in `module.eventName` format.
    pub method: String,

    /// Event-specific data.
    #[serde(default)]
    pub params: Value,
}

impl Event {
    /// Returns the module name from the method.
    #[inline]
    #[must_use]
    pub fn module(&self) -> &str {
        self.method.split('.').next().unwrap_or_default()
    }

    /// Returns the event name from the method.
    #[inline]
    #[must_use]
    pub fn event_name(&self) -> &str {
        self.method.split('.').nth(1).unwrap_or_default()
    }

    /// Parses the event into a typed [`TabEvent`].
    ///
    /// Methods this crate does not route become [`TabEvent::Unknown`].
    ///
    /// # Errors
    ///
    /// - [`Error::Json`] if the params do not match the method's payload
    /// - [`Error::Protocol`] if a required field is missing
    pub fn parse(&self) -> Result<TabEvent> {
        let event = match self.method.as_str() {
            "tabs.created" => TabEvent::Created(self.decode_params()?),

            "tabs.updated" => TabEvent::Updated {
                tab_id: self.field("tabId")?,
                change: self.field("changeInfo")?,
                tab: self.field("tab")?,
            },

            "tabs.activated" => TabEvent::Activated(self.decode_params::<ActiveInfo>()?),

            "tabs.removed" => TabEvent::Removed {
                tab_id: self.field::<TabId>("tabId")?,
                info: self.decode_params::<RemoveInfo>()?,
            },

            "commands.invoked" => TabEvent::Command {
                name: self.field("command")?,
                tab: self.optional_field::<TabSnapshot>("tab")?,
            },

            _ => TabEvent::Unknown {
                method: self.method.clone(),
            },
        };

        Ok(event)
    }
}

// ============================================================================
// Param Decoding
// ============================================================================

impl Event {
    /// Decodes the whole params object.
    #[inline]
    fn decode_params<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(T::deserialize(&self.params)?)
    }

    /// Decodes a required params field.
    fn field<T: DeserializeOwned>(&self, key: &str) -> Result<T> {
        let value = self.params.get(key).ok_or_else(|| {
            Error::protocol(format!("{} missing field: {key}", self.method))
        })?;
        Ok(T::deserialize(value)?)
    }

    /// Decodes an optional params field; `null` counts as absent.
    fn optional_field<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        match self.params.get(key) {
            None | Some(Value::Null) => Ok(None),
            Some(value) => Ok(Some(T::deserialize(value)?)),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    use crate::identifiers::WindowId;
    use crate::tabs::LoadStatus;

    fn event(json_str: &str) -> Event {
        serde_json::from_str(json_str).expect("parse event")
    }

    #[test]
    fn test_created_parsing() {
        let event = event(
            r#"{
                "id": "550e8400-e29b-41d4-a716-446655440000",
                "type": "event",
                "method": "tabs.created",
                "params": {
                    "id": 7,
                    "url": "about:blank",
                    "windowId": 1,
                    "index": 5,
                    "active": true,
                    "pinned": false
                }
            }"#,
        );

        assert_eq!(event.module(), "tabs");
        assert_eq!(event.event_name(), "created");

        match event.parse().expect("typed event") {
            TabEvent::Created(tab) => {
                assert_eq!(tab.id, TabId::new(7));
                assert_eq!(tab.index, 5);
                assert!(tab.active);
                assert_eq!(tab.title, None);
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[test]
    fn test_updated_parsing() {
        let event = event(
            r#"{
                "id": "550e8400-e29b-41d4-a716-446655440000",
                "type": "event",
                "method": "tabs.updated",
                "params": {
                    "tabId": 7,
                    "changeInfo": { "status": "complete" },
                    "tab": { "id": 7, "windowId": 1, "url": "https://example.com", "title": "Example" }
                }
            }"#,
        );

        match event.parse().expect("typed event") {
            TabEvent::Updated { tab_id, change, tab } => {
                assert_eq!(tab_id, TabId::new(7));
                assert_eq!(change.status, Some(LoadStatus::Complete));
                assert_eq!(tab.title.as_deref(), Some("Example"));
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[test]
    fn test_activated_parsing() {
        let event = event(
            r#"{
                "id": "550e8400-e29b-41d4-a716-446655440000",
                "type": "event",
                "method": "tabs.activated",
                "params": { "tabId": 3, "windowId": 2 }
            }"#,
        );

        assert_eq!(
            event.parse().expect("typed event"),
            TabEvent::Activated(ActiveInfo {
                tab_id: TabId::new(3),
                window_id: WindowId::new(2),
            })
        );
    }

    #[test]
    fn test_removed_parsing() {
        let event = event(
            r#"{
                "id": "550e8400-e29b-41d4-a716-446655440000",
                "type": "event",
                "method": "tabs.removed",
                "params": { "tabId": 3, "windowId": 2, "isWindowClosing": true }
            }"#,
        );

        match event.parse().expect("typed event") {
            TabEvent::Removed { tab_id, info } => {
                assert_eq!(tab_id, TabId::new(3));
                assert!(info.is_window_closing);
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[test]
    fn test_devtools_tab_with_sentinel_ids_parses() {
        let event = event(
            r#"{
                "id": "550e8400-e29b-41d4-a716-446655440000",
                "type": "event",
                "method": "tabs.activated",
                "params": { "tabId": -1, "windowId": -1 }
            }"#,
        );

        let parsed = event.parse().expect("typed event");
        assert_eq!(
            parsed,
            TabEvent::Activated(ActiveInfo {
                tab_id: TabId::NONE,
                window_id: WindowId::NONE,
            })
        );

        let record = crate::logger::LogRecord::from_event(&parsed, chrono::Utc::now())
            .expect("still logged");
        assert_eq!(record.to_string(), "tab activated: id=-1 window=-1");
    }

    #[test]
    fn test_command_parsing_with_null_tab() {
        let event = event(
            r#"{
                "id": "550e8400-e29b-41d4-a716-446655440000",
                "type": "event",
                "method": "commands.invoked",
                "params": { "command": "copy-url", "tab": null }
            }"#,
        );

        assert_eq!(
            event.parse().expect("typed event"),
            TabEvent::Command {
                name: "copy-url".into(),
                tab: None,
            }
        );
    }

    #[test]
    fn test_missing_field_is_protocol_error() {
        let event = event(
            r#"{
                "id": "550e8400-e29b-41d4-a716-446655440000",
                "type": "event",
                "method": "tabs.updated",
                "params": { "tabId": 7 }
            }"#,
        );

        assert!(matches!(event.parse(), Err(Error::Protocol { .. })));
    }

    #[test]
    fn test_malformed_payload_is_json_error() {
        let event = event(
            r#"{
                "id": "550e8400-e29b-41d4-a716-446655440000",
                "type": "event",
                "method": "tabs.created",
                "params": { "id": "seven" }
            }"#,
        );

        assert!(matches!(event.parse(), Err(Error::Json(_))));
    }

    #[test]
    fn test_unknown_event() {
        let event = event(
            r#"{
                "id": "550e8400-e29b-41d4-a716-446655440000",
                "type": "event",
                "method": "windows.focusChanged",
                "params": { "windowId": 1 }
            }"#,
        );

        assert_eq!(
            event.parse().expect("typed event"),
            TabEvent::Unknown {
                method: "windows.focusChanged".into(),
            }
        );
    }
}
