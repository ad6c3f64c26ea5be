//! Steward coordinator and extension sessions.
//!
//! A [`Steward`] owns the validated options and the handler table. Each call
//! to [`Steward::listen`] binds a WebSocket server; once the extension
//! connects, [`PendingSession::accept`] yields a [`Session`] whose
//! [`run`](Session::run) loop decodes events and dispatches each one on its
//! own task until the extension disconnects.

// ============================================================================
// Imports
// ============================================================================

use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::mpsc;
use tokio::task::JoinSet;
use tracing::{debug, info, warn};

use crate::clipboard::ClipboardCopier;
use crate::dispatch::{Dispatcher, TabEventHandler};
use crate::error::Result;
use crate::host::{RemoteHost, TabHost};
use crate::logger::EventLogger;
use crate::newtab::{NewTabClassifier, NewTabMover, Repositioner};
use crate::protocol::Event;
use crate::transport::{Connection, PendingServer, ReadyData};

use super::builder::StewardBuilder;
use super::options::StewardOptions;

// ============================================================================
// Steward
// ============================================================================

/// Tab steward coordinator.
///
/// Cheap to clone; clones share the handler table.
#[derive(Clone)]
pub struct Steward {
    options: Arc<StewardOptions>,
    dispatcher: Arc<Dispatcher>,
}

impl fmt::Debug for Steward {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Steward")
            .field("options", &self.options)
            .field("dispatcher", &self.dispatcher)
            .finish()
    }
}

impl Steward {
    /// Creates a configuration builder.
    #[inline]
    #[must_use]
    pub fn builder() -> StewardBuilder {
        StewardBuilder::new()
    }

    /// Creates a steward from validated options.
    ///
    /// Built-in handlers are registered first, in the order logger,
    /// repositioner, copier; `extra` handlers follow.
    pub(crate) fn new(
        options: StewardOptions,
        extra: Vec<Arc<dyn TabEventHandler>>,
    ) -> Result<Self> {
        let mut dispatcher = Dispatcher::new();

        if options.log_events {
            dispatcher.register(Arc::new(EventLogger::new()));
        }

        if options.reposition {
            let classifier = NewTabClassifier::new(options.signals.clone(), options.threshold)?;
            let repositioner = Repositioner::new(options.settle_delay);
            dispatcher.register(Arc::new(NewTabMover::new(classifier, repositioner)));
        }

        if options.clipboard {
            dispatcher.register(Arc::new(ClipboardCopier::new(options.copy_command.clone())));
        }

        for handler in extra {
            dispatcher.register(handler);
        }

        Ok(Self {
            options: Arc::new(options),
            dispatcher: Arc::new(dispatcher),
        })
    }

    /// Returns the options.
    #[inline]
    #[must_use]
    pub fn options(&self) -> &StewardOptions {
        &self.options
    }

    /// Returns the handler table.
    #[inline]
    #[must_use]
    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    /// Binds the WebSocket server the extension connects to.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`](crate::Error::Io) if binding fails.
    pub async fn listen(&self) -> Result<PendingSession> {
        let server = PendingServer::bind(self.options.ip, self.options.port)
            .await?
            .with_accept_timeout(self.options.accept_timeout);

        info!(url = %server.ws_url(), "Waiting for extension");

        Ok(PendingSession {
            server,
            options: Arc::clone(&self.options),
            dispatcher: Arc::clone(&self.dispatcher),
        })
    }
}

// ============================================================================
// PendingSession
// ============================================================================

/// A bound server waiting for the extension.
pub struct PendingSession {
    server: PendingServer,
    options: Arc<StewardOptions>,
    dispatcher: Arc<Dispatcher>,
}

impl fmt::Debug for PendingSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PendingSession")
            .field("addr", &self.server.local_addr())
            .finish_non_exhaustive()
    }
}

impl PendingSession {
    /// Returns the URL to configure in the extension.
    #[inline]
    #[must_use]
    pub fn ws_url(&self) -> String {
        self.server.ws_url()
    }

    /// Returns the bound port.
    #[inline]
    #[must_use]
    pub fn port(&self) -> u16 {
        self.server.port()
    }

    /// Waits for the extension to connect and complete the READY handshake.
    ///
    /// # Errors
    ///
    /// - [`Error::ConnectionTimeout`](crate::Error::ConnectionTimeout) if the
    ///   extension does not connect in time
    /// - [`Error::Connection`](crate::Error::Connection) if the upgrade fails
    /// - [`Error::Protocol`](crate::Error::Protocol) if the handshake fails
    pub async fn accept(self) -> Result<Session> {
        // Buffered from the first frame, including any sent ahead of READY.
        let (event_tx, event_rx) = mpsc::unbounded_channel::<Event>();
        let server = self.server.with_event_handler(Box::new(move |event| {
            let _ = event_tx.send(event);
        }));

        let (connection, ready) = server.accept().await?;
        let connection = connection.with_command_timeout(self.options.command_timeout);

        info!(
            browser = %ready.browser,
            version = %ready.version,
            "Extension connected"
        );

        Ok(Session {
            host: Arc::new(RemoteHost::new(connection.clone())),
            connection,
            dispatcher: self.dispatcher,
            ready,
            events: Mutex::new(Some(event_rx)),
        })
    }
}

// ============================================================================
// Session
// ============================================================================

/// A live connection to the extension.
pub struct Session {
    connection: Connection,
    host: Arc<RemoteHost>,
    dispatcher: Arc<Dispatcher>,
    ready: ReadyData,
    events: Mutex<Option<mpsc::UnboundedReceiver<Event>>>,
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("ready", &self.ready)
            .field("closed", &self.connection.is_closed())
            .finish_non_exhaustive()
    }
}

impl Session {
    /// Returns the handshake data the extension sent.
    #[inline]
    #[must_use]
    pub fn ready(&self) -> &ReadyData {
        &self.ready
    }

    /// Returns the host bound to this connection.
    #[inline]
    #[must_use]
    pub fn host(&self) -> &RemoteHost {
        &self.host
    }

    /// Dispatches events until the extension disconnects or
    /// [`shutdown`](Self::shutdown) is called.
    ///
    /// Every event runs on its own task, so a slow reposition never delays
    /// logging of later events. In-flight handlers are awaited before
    /// returning. Returns the number of events dispatched; a second call
    /// returns 0 immediately.
    pub async fn run(&self) -> usize {
        let events = self.events.lock().take();
        let Some(mut event_rx) = events else {
            warn!("Session is already running");
            return 0;
        };

        let mut tasks = JoinSet::new();
        let mut dispatched = 0;

        while let Some(event) = event_rx.recv().await {
            let event = match event.parse() {
                Ok(event) => event,
                Err(e) => {
                    warn!(method = %event.method, error = %e, "Dropping malformed event");
                    continue;
                }
            };

            debug!(?event, "Received event");

            let host: Arc<dyn TabHost> = Arc::clone(&self.host) as Arc<dyn TabHost>;
            let dispatcher = Arc::clone(&self.dispatcher);
            tasks.spawn(async move {
                dispatcher.dispatch(host.as_ref(), &event).await;
            });
            dispatched += 1;

            // Reap finished tasks so the set does not grow unbounded.
            while tasks.try_join_next().is_some() {}
        }

        info!(dispatched, in_flight = tasks.len(), "Extension disconnected");

        while tasks.join_next().await.is_some() {}
        dispatched
    }

    /// Closes the connection; [`run`](Self::run) returns shortly after.
    pub fn shutdown(&self) {
        self.connection.clear_event_handler();
        self.connection.shutdown();
    }
}

// ============================================================================
// Tests
// ============================================================================
