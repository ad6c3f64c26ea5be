//! Error types for tab-steward.
//!
//! This module defines all error types used throughout the crate.
//!
//! # Usage
//!
//! All fallible operations return [`Result<T>`] which uses [`Error`]:
//!
//! ```ignore
//! use tab_steward::{Result, TabHost, TabId};
//!
//! async fn example(host: &dyn TabHost, tab_id: TabId) -> Result<()> {
//!     host.move_tab(tab_id, 0).await?;
//!     host.activate_tab(tab_id).await?;
//!     Ok(())
//! }
//! ```
//!
//! # Error Categories
//!
//! | Category | Variants |
//! |----------|----------|
//! | Configuration | [`Error::Config`] |
//! | Connection | [`Error::Connection`], [`Error::ConnectionTimeout`], [`Error::ConnectionClosed`] |
//! | Protocol | [`Error::Protocol`], [`Error::RequestTimeout`] |
//! | Tab operations | [`Error::TabNotFound`], [`Error::MoveFailed`], [`Error::RepositionFailed`], [`Error::ClipboardFailed`] |
//! | External | [`Error::Io`], [`Error::Json`], [`Error::WebSocket`] |

// ============================================================================
// Imports
// ============================================================================

use std::io::Error as IoError;
use std::result::Result as StdResult;

use thiserror::Error;
use tokio::sync::oneshot::error::RecvError;
use tokio_tungstenite::tungstenite::Error as WsError;

use crate::identifiers::{RequestId, TabId};

// ============================================================================
// Result Alias
// ============================================================================

/// Result type alias using crate [`enum@Error`].
///
/// All fallible operations in this crate return this type.
pub type Result<T> = StdResult<T, Error>;

// ============================================================================
// Error Enum
// ============================================================================

/// Main error type for the crate.
///
/// Each variant includes relevant context for debugging.
#[derive(Error, Debug)]
pub enum Error {
    // ========================================================================
    // Configuration Errors
    // ========================================================================
    /// Configuration error.
    ///
    /// Returned when steward configuration is invalid.
    #[error("Configuration error: {message}")]
    Config {
        /// Description of the configuration error.
        message: String,
    },

    // ========================================================================
    // Connection Errors
    // ========================================================================
    /// WebSocket connection failed.
    #[error("Connection failed: {message}")]
    Connection {
        /// Description of the connection error.
        message: String,
    },

    /// Connection timeout waiting for the extension.
    ///
    /// Returned when the extension does not connect within the timeout period.
    #[error("Connection timeout after {timeout_ms}ms")]
    ConnectionTimeout {
        /// Milliseconds waited before timeout.
        timeout_ms: u64,
    },

    /// WebSocket connection closed unexpectedly.
    #[error("Connection closed")]
    ConnectionClosed,

    // ========================================================================
    // Protocol Errors
    // ========================================================================
    /// Protocol violation or error response from the extension.
    #[error("Protocol error: {message}")]
    Protocol {
        /// Description of the protocol violation.
        message: String,
    },

    /// Command request timeout.
    #[error("Request {request_id} timed out after {timeout_ms}ms")]
    RequestTimeout {
        /// The request ID that timed out.
        request_id: RequestId,
        /// Milliseconds waited before timeout.
        timeout_ms: u64,
    },

    // ========================================================================
    // Tab Errors
    // ========================================================================
    /// Tab not found.
    ///
    /// Returned when a tab vanished between the event and the command.
    #[error("Tab not found: {tab_id}")]
    TabNotFound {
        /// The missing tab ID.
        tab_id: TabId,
    },

    /// Moving a tab to a new index failed.
    #[error("Failed to move tab {tab_id}: {message}")]
    MoveFailed {
        /// Tab that was being moved.
        tab_id: TabId,
        /// Host-supplied reason.
        message: String,
    },

    /// The deferred scroll/activate sequence failed.
    #[error("Failed to reposition tab {tab_id}: {message}")]
    RepositionFailed {
        /// Tab that was being brought into view.
        tab_id: TabId,
        /// Host-supplied reason.
        message: String,
    },

    /// Copying text to the clipboard failed in both the primary API and the
    /// selection fallback.
    #[error("Clipboard copy failed in tab {tab_id}: {message}")]
    ClipboardFailed {
        /// Tab the copy script ran in.
        tab_id: TabId,
        /// Script-supplied reason.
        message: String,
    },

    // ========================================================================
    // External Errors
    // ========================================================================
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] IoError),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// WebSocket error.
    #[error("WebSocket error: {0}")]
    WebSocket(#[from] WsError),

    /// Channel receive error.
    #[error("Channel closed")]
    ChannelClosed(#[from] RecvError),
}

// ============================================================================
// Error Constructors
// ============================================================================

impl Error {
    /// Creates a configuration error.
    #[inline]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Creates a connection error.
    #[inline]
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Creates a connection timeout error.
    #[inline]
    pub fn connection_timeout(timeout_ms: u64) -> Self {
        Self::ConnectionTimeout { timeout_ms }
    }

    /// Creates a protocol error.
    #[inline]
    pub fn protocol(message: impl Into<String>) -> Self {
        Self::Protocol {
            message: message.into(),
        }
    }

    /// Creates a request timeout error.
    #[inline]
    pub fn request_timeout(request_id: RequestId, timeout_ms: u64) -> Self {
        Self::RequestTimeout {
            request_id,
            timeout_ms,
        }
    }

    /// Creates a tab not found error.
    #[inline]
    pub fn tab_not_found(tab_id: TabId) -> Self {
        Self::TabNotFound { tab_id }
    }

    /// Creates a move failed error.
    #[inline]
    pub fn move_failed(tab_id: TabId, message: impl Into<String>) -> Self {
        Self::MoveFailed {
            tab_id,
            message: message.into(),
        }
    }

    /// Creates a reposition failed error.
    #[inline]
    pub fn reposition_failed(tab_id: TabId, message: impl Into<String>) -> Self {
        Self::RepositionFailed {
            tab_id,
            message: message.into(),
        }
    }

    /// Creates a clipboard failed error.
    #[inline]
    pub fn clipboard_failed(tab_id: TabId, message: impl Into<String>) -> Self {
        Self::ClipboardFailed {
            tab_id,
            message: message.into(),
        }
    }
}

/// Prefix of the browser's error message for a tab id that no longer exists.
const NO_TAB_PREFIX: &str = "No tab with id";

impl Error {
    /// Narrows an extension error about `tab_id` to [`Error::TabNotFound`]
    /// when the browser reports the tab as gone; other errors pass through.
    #[must_use]
    pub fn for_tab(self, tab_id: TabId) -> Self {
        match self {
            Self::Protocol { ref message } if message.starts_with(NO_TAB_PREFIX) => {
                Self::TabNotFound { tab_id }
            }
            other => other,
        }
    }
}

// ============================================================================
// Error Predicates
// ============================================================================

impl Error {
    /// Returns `true` if this is a timeout error.
    #[inline]
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(
            self,
            Self::ConnectionTimeout { .. } | Self::RequestTimeout { .. }
        )
    }

    /// Returns `true` if this is a connection error.
    #[inline]
    #[must_use]
    pub fn is_connection_error(&self) -> bool {
        matches!(
            self,
            Self::Connection { .. }
                | Self::ConnectionTimeout { .. }
                | Self::ConnectionClosed
                | Self::WebSocket(_)
        )
    }

    /// Returns `true` if this error came from a tab operation.
    #[inline]
    #[must_use]
    pub fn is_tab_error(&self) -> bool {
        matches!(
            self,
            Self::TabNotFound { .. }
                | Self::MoveFailed { .. }
                | Self::RepositionFailed { .. }
                | Self::ClipboardFailed { .. }
        )
    }
}

// ============================================================================
// Tests
// ============================================================================
