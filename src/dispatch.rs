//! Routes typed tab events to registered handlers.
//!
//! Each handler declares the [`EventKind`]s it cares about and implements the
//! matching `on_*` methods. The [`Dispatcher`] buckets handlers by kind at
//! registration time and calls the interested ones, in registration order,
//! for every event.
//!
//! # Example
//!
//! ```ignore
//! use tab_steward::{Dispatcher, EventKind, TabEventHandler, TabHost, TabSnapshot};
//!
//! struct Counter(std::sync::atomic::AtomicUsize);
//!
//! #[async_trait::async_trait]
//! impl TabEventHandler for Counter {
//!     fn name(&self) -> &'static str { "counter" }
//!     fn kinds(&self) -> &'static [EventKind] { &[EventKind::Created] }
//!     async fn on_created(&self, _host: &dyn TabHost, _tab: &TabSnapshot) {
//!         self.0.fetch_add(1, std::sync::atomic::Ordering::Relaxed);
//!     }
//! }
//! ```

// ============================================================================
// Imports
// ============================================================================

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use rustc_hash::FxHashMap;
use tracing::{debug, trace};

use crate::host::TabHost;
use crate::identifiers::TabId;
use crate::tabs::{ActiveInfo, ChangeInfo, EventKind, RemoveInfo, TabEvent, TabSnapshot};

// ============================================================================
// TabEventHandler
// ============================================================================

/// A consumer of tab lifecycle events.
///
/// All methods default to doing nothing. Handlers contain their own
/// failures: nothing a handler does can fail the dispatch.
#[async_trait]
pub trait TabEventHandler: Send + Sync {
    /// Name used in logs.
    fn name(&self) -> &'static str;

    /// Event kinds this handler receives.
    fn kinds(&self) -> &'static [EventKind];

    /// A tab was created.
    async fn on_created(&self, _host: &dyn TabHost, _tab: &TabSnapshot) {}

    /// A tab's properties changed.
    async fn on_updated(
        &self,
        _host: &dyn TabHost,
        _tab_id: TabId,
        _change: &ChangeInfo,
        _tab: &TabSnapshot,
    ) {
    }

    /// A tab became active.
    async fn on_activated(&self, _host: &dyn TabHost, _info: &ActiveInfo) {}

    /// A tab was closed.
    async fn on_removed(&self, _host: &dyn TabHost, _tab_id: TabId, _info: &RemoveInfo) {}

    /// A keyboard shortcut fired.
    async fn on_command(&self, _host: &dyn TabHost, _name: &str, _tab: Option<&TabSnapshot>) {}
}

// ============================================================================
// Dispatcher
// ============================================================================

/// Single entry point that fans events out to handlers by kind.
#[derive(Default)]
pub struct Dispatcher {
    routes: FxHashMap<EventKind, Vec<Arc<dyn TabEventHandler>>>,
}

impl fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut routes: Vec<_> = self
            .routes
            .iter()
            .map(|(kind, handlers)| {
                let names: Vec<_> = handlers.iter().map(|h| h.name()).collect();
                (kind.to_string(), names)
            })
            .collect();
        routes.sort();
        f.debug_struct("Dispatcher").field("routes", &routes).finish()
    }
}

impl Dispatcher {
    /// Creates a dispatcher with no handlers.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a handler for every kind it declares.
    pub fn register(&mut self, handler: Arc<dyn TabEventHandler>) {
        for kind in handler.kinds() {
            debug!(handler = handler.name(), %kind, "Registered handler");
            self.routes
                .entry(*kind)
                .or_default()
                .push(Arc::clone(&handler));
        }
    }

    /// Builder-style [`register`](Self::register).
    #[must_use]
    pub fn with_handler(mut self, handler: Arc<dyn TabEventHandler>) -> Self {
        self.register(handler);
        self
    }

    /// Returns the number of handlers receiving `kind`.
    #[must_use]
    pub fn handler_count(&self, kind: EventKind) -> usize {
        self.routes.get(&kind).map_or(0, Vec::len)
    }

    /// Delivers one event to every interested handler, in registration order.
    pub async fn dispatch(&self, host: &dyn TabHost, event: &TabEvent) {
        let Some(kind) = event.kind() else {
            if let TabEvent::Unknown { method } = event {
                debug!(%method, "Ignoring unrouted event");
            }
            return;
        };

        let Some(handlers) = self.routes.get(&kind) else {
            trace!(%kind, "No handlers for event");
            return;
        };

        for handler in handlers {
            trace!(handler = handler.name(), %kind, "Dispatching");
            match event {
                TabEvent::Created(tab) => handler.on_created(host, tab).await,
                TabEvent::Updated { tab_id, change, tab } => {
                    handler.on_updated(host, *tab_id, change, tab).await
                }
                TabEvent::Activated(info) => handler.on_activated(host, info).await,
                TabEvent::Removed { tab_id, info } => {
                    handler.on_removed(host, *tab_id, info).await
                }
                TabEvent::Command { name, tab } => {
                    handler.on_command(host, name, tab.as_ref()).await
                }
                TabEvent::Unknown { .. } => {}
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
