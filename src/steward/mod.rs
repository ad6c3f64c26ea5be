//! Steward entry point.
//!
//! # Components
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Steward`] | Coordinator holding options and handlers |
//! | [`StewardBuilder`] | Fluent configuration builder |
//! | [`StewardOptions`] | Validated configuration values |
//! | [`PendingSession`] | Bound server waiting for the extension |
//! | [`Session`] | Live connection running the event loop |
//!
//! # Example
//!
//! ```no_run
//! use tab_steward::{Result, Steward};
//!
//! # async fn example() -> Result<()> {
//! let steward = Steward::builder().port(9222).build()?;
//!
//! let pending = steward.listen().await?;
//! println!("Point the extension at {}", pending.ws_url());
//!
//! let session = pending.accept().await?;
//! session.run().await;
//! # Ok(())
//! # }
//! ```

// ============================================================================
// Submodules
// ============================================================================

/// Fluent builder pattern for steward configuration.
pub mod builder;

/// Coordinator and sessions.
pub mod core;

/// Validated configuration values.
pub mod options;

// ============================================================================
// Re-exports
// ============================================================================

pub use builder::StewardBuilder;
pub use core::{PendingSession, Session, Steward};
pub use options::StewardOptions;
