//! Tab Steward - tab lifecycle logging and new-tab repositioning.
//!
//! A browser extension forwards tab lifecycle events over a local WebSocket.
//! This crate is the other end: it decodes those events, logs them, decides
//! whether a freshly created tab came from the browser's "New Tab" button,
//! and if so moves it to the front of the tab strip and scrolls it into view.
//!
//! # Architecture
//!
//! - **Local End (Rust)**: Receives events, runs handlers, sends tab commands
//! - **Remote End (Extension)**: Listens to `chrome.tabs.*`, executes commands
//!
//! Key design principles:
//!
//! - Handlers only see the [`TabHost`] trait, never the transport
//! - Protocol uses `module.methodName` format
//! - Each event is dispatched on its own task; nothing retries
//! - Every handler failure is logged and contained
//!
//! # Quick Start
//!
//! ```no_run
//! use tab_steward::{Result, Steward};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let steward = Steward::builder().port(9222).build()?;
//!
//!     let pending = steward.listen().await?;
//!     println!("Extension URL: {}", pending.ws_url());
//!
//!     let session = pending.accept().await?;
//!     println!("Connected to {}", session.ready().browser);
//!
//!     session.run().await;
//!     Ok(())
//! }
//! ```
//!
//! # Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`clipboard`] | Copy-URL shortcut handler |
//! | [`dispatch`] | Handler trait and event router |
//! | [`error`] | Error types and [`Result`] alias |
//! | [`host`] | Tab operations seam and WebSocket binding |
//! | [`identifiers`] | Type-safe ID wrappers |
//! | [`logger`] | Lifecycle event logger |
//! | [`newtab`] | New-tab heuristic and repositioner |
//! | [`protocol`] | WebSocket message types (internal) |
//! | [`steward`] | Entry point, configuration and sessions |
//! | [`tabs`] | Tab snapshots and typed events |
//! | [`transport`] | WebSocket transport layer (internal) |

// ============================================================================
// Modules
// ============================================================================

/// Copy-URL keyboard shortcut handler.
pub mod clipboard;

/// Handler trait and event router.
pub mod dispatch;

/// Error types and result aliases.
///
/// All fallible operations return [`Result<T>`] which uses [`Error`].
pub mod error;

/// Tab operations supplied by the browser.
pub mod host;

/// Type-safe identifiers for tabs, windows and requests.
///
/// Newtype wrappers prevent mixing incompatible IDs at compile time.
pub mod identifiers;

/// Lifecycle event logger.
pub mod logger;

/// New-tab detection and repositioning.
pub mod newtab;

/// WebSocket protocol message types.
///
/// Internal module defining command/response/event structures.
pub mod protocol;

/// Steward entry point and configuration.
///
/// Use [`Steward::builder()`] to create a configured steward.
pub mod steward;

/// Tab snapshots and typed lifecycle events.
pub mod tabs;

/// WebSocket transport layer.
///
/// Internal module handling WebSocket server and connection management.
pub mod transport;

// ============================================================================
// Re-exports
// ============================================================================

// Steward types
pub use steward::{PendingSession, Session, Steward, StewardBuilder, StewardOptions};

// Handler types
pub use clipboard::{ClipboardCopier, ClipboardOutcome};
pub use dispatch::{Dispatcher, TabEventHandler};
pub use logger::{EventLogger, LogRecord};
pub use newtab::{
    NewTabClassifier, NewTabMover, NewTabScore, NewTabSignals, RepositionOutcome, Repositioner,
};

// Host types
pub use host::{RemoteHost, TabHost};

// Tab types
pub use tabs::{ActiveInfo, ChangeInfo, EventKind, LoadStatus, RemoveInfo, TabEvent, TabSnapshot};

// Error types
pub use error::{Error, Result};

// Identifier types
pub use identifiers::{RequestId, TabId, WindowId};
