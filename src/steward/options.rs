//! Validated steward configuration.
//!
//! Everything is set programmatically through [`StewardBuilder`]; there is
//! no config file and no environment lookup.
//!
//! [`StewardBuilder`]: super::StewardBuilder

// ============================================================================
// Imports
// ============================================================================

use std::net::{IpAddr, Ipv4Addr};
use std::time::Duration;

use crate::clipboard::DEFAULT_COPY_COMMAND;
use crate::error::{Error, Result};
use crate::newtab::{DEFAULT_SETTLE_DELAY, DEFAULT_THRESHOLD, NewTabSignals, validate_threshold};
use crate::transport::{CONNECTION_TIMEOUT, DEFAULT_COMMAND_TIMEOUT};

// ============================================================================
// StewardOptions
// ============================================================================

/// Steward configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StewardOptions {
    /// Address the WebSocket server binds to.
    pub ip: IpAddr,

    /// Port the WebSocket server binds to (0 = OS-assigned).
    pub port: u16,

    /// Minimum number of new-tab signals (1..=4).
    pub threshold: u8,

    /// Wait between moving a tab and scrolling it into view.
    pub settle_delay: Duration,

    /// URL prefixes and placeholder titles recognized as new-tab pages.
    pub signals: NewTabSignals,

    /// Register the lifecycle event logger.
    pub log_events: bool,

    /// Register the new-tab repositioner.
    pub reposition: bool,

    /// Register the clipboard copier.
    pub clipboard: bool,

    /// Shortcut command the clipboard copier reacts to.
    pub copy_command: String,

    /// Timeout for each command sent to the extension.
    pub command_timeout: Duration,

    /// How long to wait for the extension to connect.
    pub accept_timeout: Duration,
}

impl Default for StewardOptions {
    fn default() -> Self {
        Self {
            ip: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 0,
            threshold: DEFAULT_THRESHOLD,
            settle_delay: DEFAULT_SETTLE_DELAY,
            signals: NewTabSignals::default(),
            log_events: true,
            reposition: true,
            clipboard: true,
            copy_command: DEFAULT_COPY_COMMAND.to_string(),
            command_timeout: DEFAULT_COMMAND_TIMEOUT,
            accept_timeout: CONNECTION_TIMEOUT,
        }
    }
}

impl StewardOptions {
    /// Validates the options.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the threshold is outside 1..=4, the copy
    /// command is empty while the copier is enabled, or a timeout is zero.
    pub fn validate(&self) -> Result<()> {
        validate_threshold(self.threshold)?;

        if self.clipboard && self.copy_command.trim().is_empty() {
            return Err(Error::config(
                "Copy command name must not be empty. Use .copy_command(\"copy-url\") or \
                 disable the copier with .clipboard(false).",
            ));
        }

        if self.command_timeout.is_zero() {
            return Err(Error::config("Command timeout must be greater than zero"));
        }

        if self.accept_timeout.is_zero() {
            return Err(Error::config("Accept timeout must be greater than zero"));
        }

        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
