//! Tab data model.
//!
//! Payloads delivered by the browser for each lifecycle notification. None of
//! these are stored beyond the handler invocation that receives them.
//!
//! | Module | Description |
//! |--------|-------------|
//! | `snapshot` | [`TabSnapshot`] and the update/activate/remove payloads |
//! | `event` | [`TabEvent`] and its [`EventKind`] discriminant |

// ============================================================================
// Submodules
// ============================================================================

mod event;
mod snapshot;

// ============================================================================
// Re-exports
// ============================================================================

pub use event::{EventKind, TabEvent};
pub use snapshot::{ActiveInfo, ChangeInfo, LoadStatus, RemoveInfo, TabSnapshot};
