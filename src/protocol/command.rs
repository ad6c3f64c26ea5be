//! Command definitions organized by module.
//!
//! Commands follow `module.methodName` format.
//!
//! # Command Modules
//!
//! | Module | Commands |
//! |--------|----------|
//! | `tabs` | Move, activate, query |
//! | `scripting` | Script injection |

// ============================================================================
// Imports
// ============================================================================

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::identifiers::{TabId, WindowId};

// ============================================================================
// Command Wrapper
// ============================================================================

/// All protocol commands organized by module.
///
/// This enum wraps module-specific command enums for unified serialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Command {
    /// Tabs module commands.
    Tabs(TabsCommand),
    /// Scripting module commands.
    Scripting(ScriptingCommand),
}

impl Command {
    /// Returns the `module.methodName` of this command.
    #[must_use]
    pub fn method(&self) -> &'static str {
        match self {
            Self::Tabs(TabsCommand::Move { .. }) => "tabs.move",
            Self::Tabs(TabsCommand::Activate { .. }) => "tabs.activate",
            Self::Tabs(TabsCommand::Query { .. }) => "tabs.query",
            Self::Tabs(TabsCommand::QueryActive) => "tabs.queryActive",
            Self::Scripting(ScriptingCommand::ExecuteScript { .. }) => {
                "scripting.executeScript"
            }
        }
    }
}

// ============================================================================
// Tabs Commands
// ============================================================================

/// Tabs module commands for tab strip manipulation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "method", content = "params")]
pub enum TabsCommand {
    /// Move a tab to an index within its window.
    #[serde(rename = "tabs.move")]
    Move {
        /// Tab to move.
        #[serde(rename = "tabId")]
        tab_id: TabId,
        /// Target index (0 = front, after pinned tabs).
        index: u32,
    },

    /// Make a tab the active tab of its window.
    #[serde(rename = "tabs.activate")]
    Activate {
        /// Tab to activate.
        #[serde(rename = "tabId")]
        tab_id: TabId,
    },

    /// List all tabs of a window.
    #[serde(rename = "tabs.query")]
    Query {
        /// Window to list.
        #[serde(rename = "windowId")]
        window_id: WindowId,
    },

    /// Get the active tab of the last focused window.
    #[serde(rename = "tabs.queryActive")]
    QueryActive,
}

// ============================================================================
// Scripting Commands
// ============================================================================

/// Scripting module commands for page injection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "method", content = "params")]
pub enum ScriptingCommand {
    /// Evaluate a function expression in a tab, call it with `args` and return the result.
    #[serde(rename = "scripting.executeScript")]
    ExecuteScript {
        /// Target tab.
        #[serde(rename = "tabId")]
        tab_id: TabId,
        /// Function expression source.
        script: String,
        /// Positional arguments.
        args: Vec<Value>,
    },
}

// ============================================================================
// Tests
// ============================================================================
