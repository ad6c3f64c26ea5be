//! Type-safe identifiers for browser entities.
//!
//! Newtype wrappers prevent mixing tab IDs, window IDs and request IDs at
//! compile time. Tab and window IDs are assigned by the browser and are only
//! meaningful for the duration of one handling cycle. The browser reports
//! `-1` for tabs outside a normal strip (devtools windows, for example).

// ============================================================================
// Imports
// ============================================================================

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// TabId
// ============================================================================

/// Browser-assigned tab identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TabId(i32);

impl TabId {
    /// The browser's "no tab" sentinel (`-1`).
    pub const NONE: Self = Self(-1);

    /// Wraps a raw tab ID.
    #[inline]
    #[must_use]
    pub const fn new(id: i32) -> Self {
        Self(id)
    }

    /// Returns the raw value.
    #[inline]
    #[must_use]
    pub const fn as_i32(&self) -> i32 {
        self.0
    }

    /// Returns `true` for the [`NONE`](Self::NONE) sentinel.
    #[inline]
    #[must_use]
    pub const fn is_none(&self) -> bool {
        self.0 < 0
    }
}

impl fmt::Display for TabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// WindowId
// ============================================================================

/// Browser-assigned window identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WindowId(i32);

impl WindowId {
    /// The browser's "no window" sentinel (`-1`).
    pub const NONE: Self = Self(-1);

    /// Wraps a raw window ID.
    #[inline]
    #[must_use]
    pub const fn new(id: i32) -> Self {
        Self(id)
    }

    /// Returns the raw value.
    #[inline]
    #[must_use]
    pub const fn as_i32(&self) -> i32 {
        self.0
    }

    /// Returns `true` for the [`NONE`](Self::NONE) sentinel.
    #[inline]
    #[must_use]
    pub const fn is_none(&self) -> bool {
        self.0 < 0
    }
}

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// RequestId
// ============================================================================

/// Correlates a request with its response.
///
/// The nil UUID is reserved for the READY handshake.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequestId(Uuid);

impl RequestId {
    /// Generates a fresh random request ID.
    #[inline]
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns the reserved READY handshake ID.
    #[inline]
    #[must_use]
    pub const fn ready() -> Self {
        Self(Uuid::nil())
    }

    /// Returns `true` if this is the READY handshake ID.
    #[inline]
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.0.is_nil()
    }

    /// Returns the inner UUID.
    #[inline]
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_id_serializes_as_number() {
        let json = serde_json::to_string(&TabId::new(42)).expect("serialize");
        assert_eq!(json, "42");

        let id: TabId = serde_json::from_str("42").expect("deserialize");
        assert_eq!(id, TabId::new(42));
    }

    #[test]
    fn test_none_sentinel_deserializes() {
        let id: TabId = serde_json::from_str("-1").expect("deserialize");
        assert_eq!(id, TabId::NONE);
        assert!(id.is_none());
        assert!(!TabId::new(0).is_none());

        let window: WindowId = serde_json::from_str("-1").expect("deserialize");
        assert!(window.is_none());
        assert_eq!(window.to_string(), "-1");
    }

    #[test]
    fn test_window_id_display() {
        assert_eq!(WindowId::new(9).to_string(), "9");
    }

    #[test]
    fn test_request_id_unique() {
        assert_ne!(RequestId::generate(), RequestId::generate());
    }

    #[test]
    fn test_ready_id_is_nil() {
        let ready = RequestId::ready();
        assert!(ready.is_ready());
        assert_eq!(ready.to_string(), "00000000-0000-0000-0000-000000000000");
        assert!(!RequestId::generate().is_ready());
    }
}
