//! WebSocket transport layer.
//!
//! This module handles communication between local end (Rust) and
//! remote end (Extension) via WebSocket.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐                              ┌─────────────────┐
//! │  Session (Rust) │                              │  Extension      │
//! │                 │         WebSocket            │  (Background)   │
//! │  PendingServer  │◄────────────────────────────►│                 │
//! │  → Connection   │      127.0.0.1:PORT          │  WebSocket      │
//! │                 │                              │  Client         │
//! └─────────────────┘                              └─────────────────┘
//! ```
//!
//! # Connection Lifecycle
//!
//! 1. `PendingServer::bind` - Bind to localhost
//! 2. Extension is pointed at the WebSocket URL
//! 3. `PendingServer::accept` - Wait for extension to connect
//! 4. `Connection` - Send commands, receive responses/events
//! 5. `Connection::shutdown` - Close connection
//!
//! # Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `connection` | WebSocket connection and event loop |
//! | `server` | WebSocket server binding and acceptance |

// ============================================================================
// Submodules
// ============================================================================

/// WebSocket connection and event loop.
pub mod connection;

/// WebSocket server for extension communication.
pub mod server;

// ============================================================================
// Re-exports
// ============================================================================

pub use connection::{Connection, EventHandler, ReadyData};
pub(crate) use connection::DEFAULT_COMMAND_TIMEOUT;
pub use server::PendingServer;
pub(crate) use server::CONNECTION_TIMEOUT;
