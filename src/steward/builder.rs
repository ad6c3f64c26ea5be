//! Builder pattern for steward configuration.
//!
//! # Example
//!
//! ```no_run
//! use std::time::Duration;
//! use tab_steward::Steward;
//!
//! # fn example() -> tab_steward::Result<()> {
//! let steward = Steward::builder()
//!     .port(9222)
//!     .threshold(3)
//!     .settle_delay(Duration::from_millis(150))
//!     .clipboard(false)
//!     .build()?;
//! # Ok(())
//! # }
//! ```

// ============================================================================
// Imports
// ============================================================================

use std::fmt;
use std::net::IpAddr;
use std::sync::Arc;
use std::time::Duration;

use crate::dispatch::TabEventHandler;
use crate::error::Result;
use crate::newtab::NewTabSignals;

use super::core::Steward;
use super::options::StewardOptions;

// ============================================================================
// StewardBuilder
// ============================================================================

/// Builder for configuring a [`Steward`].
///
/// Use [`Steward::builder()`] to create a new builder.
#[derive(Default, Clone)]
pub struct StewardBuilder {
    options: StewardOptions,
    handlers: Vec<Arc<dyn TabEventHandler>>,
}

impl fmt::Debug for StewardBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let handlers: Vec<_> = self.handlers.iter().map(|h| h.name()).collect();
        f.debug_struct("StewardBuilder")
            .field("options", &self.options)
            .field("handlers", &handlers)
            .finish()
    }
}

// ============================================================================
// StewardBuilder Implementation
// ============================================================================

impl StewardBuilder {
    /// Creates a builder with default options.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the address the WebSocket server binds to.
    #[inline]
    #[must_use]
    pub fn bind(mut self, ip: IpAddr) -> Self {
        self.options.ip = ip;
        self
    }

    /// Sets the WebSocket port (0 lets the OS choose).
    #[inline]
    #[must_use]
    pub fn port(mut self, port: u16) -> Self {
        self.options.port = port;
        self
    }

    /// Sets how many of the four new-tab signals must hold.
    #[inline]
    #[must_use]
    pub fn threshold(mut self, threshold: u8) -> Self {
        self.options.threshold = threshold;
        self
    }

    /// Sets the wait between the move and the scroll sequence.
    #[inline]
    #[must_use]
    pub fn settle_delay(mut self, delay: Duration) -> Self {
        self.options.settle_delay = delay;
        self
    }

    /// Replaces the new-tab signal tables.
    #[inline]
    #[must_use]
    pub fn signals(mut self, signals: NewTabSignals) -> Self {
        self.options.signals = signals;
        self
    }

    /// Adds a new-tab page URL prefix to the default tables.
    #[inline]
    #[must_use]
    pub fn new_tab_url_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.options.signals = self.options.signals.with_url_prefix(prefix);
        self
    }

    /// Adds a placeholder title to the default tables.
    #[inline]
    #[must_use]
    pub fn placeholder_title(mut self, title: impl Into<String>) -> Self {
        self.options.signals = self.options.signals.with_placeholder_title(title);
        self
    }

    /// Enables or disables the lifecycle event logger.
    #[inline]
    #[must_use]
    pub fn log_events(mut self, enabled: bool) -> Self {
        self.options.log_events = enabled;
        self
    }

    /// Enables or disables the new-tab repositioner.
    #[inline]
    #[must_use]
    pub fn reposition(mut self, enabled: bool) -> Self {
        self.options.reposition = enabled;
        self
    }

    /// Enables or disables the clipboard copier.
    #[inline]
    #[must_use]
    pub fn clipboard(mut self, enabled: bool) -> Self {
        self.options.clipboard = enabled;
        self
    }

    /// Sets the shortcut command the clipboard copier reacts to.
    #[inline]
    #[must_use]
    pub fn copy_command(mut self, command: impl Into<String>) -> Self {
        self.options.copy_command = command.into();
        self
    }

    /// Sets the timeout for each command sent to the extension.
    #[inline]
    #[must_use]
    pub fn command_timeout(mut self, timeout: Duration) -> Self {
        self.options.command_timeout = timeout;
        self
    }

    /// Sets how long to wait for the extension to connect.
    #[inline]
    #[must_use]
    pub fn accept_timeout(mut self, timeout: Duration) -> Self {
        self.options.accept_timeout = timeout;
        self
    }

    /// Registers an additional handler after the built-in ones.
    #[inline]
    #[must_use]
    pub fn handler(mut self, handler: Arc<dyn TabEventHandler>) -> Self {
        self.handlers.push(handler);
        self
    }

    /// Validates the options and builds the steward.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`](crate::Error::Config) if validation fails.
    pub fn build(self) -> Result<Steward> {
        self.options.validate()?;
        Steward::new(self.options, self.handlers)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    use std::net::Ipv4Addr;

    use crate::tabs::EventKind;

    struct Noop;

    #[async_trait::async_trait]
    impl TabEventHandler for Noop {
        fn name(&self) -> &'static str {
            "noop"
        }

        fn kinds(&self) -> &'static [EventKind] {
            &[EventKind::Removed]
        }
    }

    #[test]
    fn test_builder_chain() {
        let builder = StewardBuilder::new()
            .bind(IpAddr::V4(Ipv4Addr::UNSPECIFIED))
            .port(9000)
            .threshold(2)
            .settle_delay(Duration::from_millis(250))
            .new_tab_url_prefix("opera://startpage")
            .placeholder_title("Speed Dial")
            .copy_command("copy-link")
            .command_timeout(Duration::from_secs(5));

        let options = &builder.options;
        assert_eq!(options.port, 9000);
        assert_eq!(options.threshold, 2);
        assert_eq!(options.settle_delay, Duration::from_millis(250));
        assert!(options.signals.is_new_tab_url(Some("opera://startpage/")));
        assert!(options.signals.is_placeholder_title(Some("Speed Dial")));
        assert!(options.signals.is_new_tab_url(Some("chrome://newtab/")));
        assert_eq!(options.copy_command, "copy-link");
        assert_eq!(options.command_timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_build_rejects_bad_threshold() {
        let err = StewardBuilder::new().threshold(0).build().unwrap_err();
        assert!(err.to_string().contains("threshold"));

        assert!(StewardBuilder::new().threshold(5).build().is_err());
    }

    #[test]
    fn test_build_rejects_empty_copy_command() {
        assert!(StewardBuilder::new().copy_command("").build().is_err());
        assert!(
            StewardBuilder::new()
                .copy_command("")
                .clipboard(false)
                .build()
                .is_ok()
        );
    }

    #[test]
    fn test_build_registers_handlers() {
        let steward = StewardBuilder::new()
            .handler(Arc::new(Noop))
            .build()
            .expect("build");

        let dispatcher = steward.dispatcher();
        assert_eq!(dispatcher.handler_count(EventKind::Created), 2);
        assert_eq!(dispatcher.handler_count(EventKind::Updated), 1);
        assert_eq!(dispatcher.handler_count(EventKind::Command), 1);
        assert_eq!(dispatcher.handler_count(EventKind::Removed), 2);
    }

    #[test]
    fn test_toggles_remove_builtin_handlers() {
        let steward = StewardBuilder::new()
            .log_events(false)
            .reposition(false)
            .clipboard(false)
            .build()
            .expect("build");

        for kind in EventKind::ALL {
            assert_eq!(steward.dispatcher().handler_count(*kind), 0, "{kind}");
        }
    }

    #[test]
    fn test_debug_lists_handler_names() {
        let builder = StewardBuilder::new().handler(Arc::new(Noop));
        assert!(format!("{builder:?}").contains("noop"));
    }
}
