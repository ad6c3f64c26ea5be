//! Four-signal "opened via the New Tab button" heuristic.
//!
//! A freshly created tab is scored against four independent signals:
//!
//! | Signal | True when |
//! |--------|-----------|
//! | URL | empty, `about:blank`, or starts with a known new-tab page prefix |
//! | Activity | the tab is the active tab of its window |
//! | No opener | no `openerTabId` is set |
//! | Title | empty or exactly one of the placeholder titles |
//!
//! The tab is classified as a new-tab-button tab when at least `threshold`
//! signals hold (3 by default). Classification is a pure function of the
//! snapshot.

// ============================================================================
// Imports
// ============================================================================

use std::borrow::Cow;
use std::fmt;

use crate::error::{Error, Result};
use crate::tabs::TabSnapshot;

// ============================================================================
// Constants
// ============================================================================

/// Default number of signals that must hold.
pub const DEFAULT_THRESHOLD: u8 = 3;

/// Number of signals scored.
pub const SIGNAL_COUNT: u8 = 4;

/// Blank page every browser opens before navigation.
const BLANK_URL: &str = "about:blank";

/// Internal new-tab page prefixes across browsers.
pub const DEFAULT_NEW_TAB_URL_PREFIXES: &[&str] = &[
    "chrome://newtab",
    "chrome://new-tab-page",
    "chrome-search://local-ntp",
    "edge://newtab",
    "brave://newtab",
    "vivaldi://newtab",
    "about:newtab",
    "about:home",
];

/// Titles browsers give a new-tab page before it loads.
pub const DEFAULT_PLACEHOLDER_TITLES: &[&str] = &["New Tab", "New tab", "New Private Tab"];

// ============================================================================
// NewTabSignals
// ============================================================================

/// String tables the URL and title signals match against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTabSignals {
    url_prefixes: Vec<Cow<'static, str>>,
    placeholder_titles: Vec<Cow<'static, str>>,
}

impl Default for NewTabSignals {
    fn default() -> Self {
        Self::new(DEFAULT_NEW_TAB_URL_PREFIXES, DEFAULT_PLACEHOLDER_TITLES)
    }
}

impl NewTabSignals {
    /// Creates tables from static string slices.
    #[must_use]
    pub fn new(url_prefixes: &[&'static str], placeholder_titles: &[&'static str]) -> Self {
        Self {
            url_prefixes: url_prefixes.iter().map(|s| Cow::Borrowed(*s)).collect(),
            placeholder_titles: placeholder_titles
                .iter()
                .map(|s| Cow::Borrowed(*s))
                .collect(),
        }
    }

    /// Adds a new-tab page URL prefix.
    #[must_use]
    pub fn with_url_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.url_prefixes.push(Cow::Owned(prefix.into()));
        self
    }

    /// Adds a placeholder title.
    #[must_use]
    pub fn with_placeholder_title(mut self, title: impl Into<String>) -> Self {
        self.placeholder_titles.push(Cow::Owned(title.into()));
        self
    }

    /// Returns the URL prefixes.
    pub fn url_prefixes(&self) -> impl Iterator<Item = &str> {
        self.url_prefixes.iter().map(AsRef::as_ref)
    }

    /// Returns the placeholder titles.
    pub fn placeholder_titles(&self) -> impl Iterator<Item = &str> {
        self.placeholder_titles.iter().map(AsRef::as_ref)
    }

    /// URL signal: empty, blank, or a known new-tab page.
    #[must_use]
    pub fn is_new_tab_url(&self, url: Option<&str>) -> bool {
        match url {
            None | Some("") | Some(BLANK_URL) => true,
            Some(url) => self.url_prefixes().any(|prefix| url.starts_with(prefix)),
        }
    }

    /// Title signal: empty or an exact, case-sensitive placeholder match.
    #[must_use]
    pub fn is_placeholder_title(&self, title: Option<&str>) -> bool {
        match title {
            None | Some("") => true,
            Some(title) => self.placeholder_titles().any(|p| p == title),
        }
    }
}

// ============================================================================
// NewTabScore
// ============================================================================

/// Which of the four signals a snapshot satisfied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NewTabScore {
    /// URL is empty, blank or a new-tab page.
    pub url: bool,
    /// Tab is active in its window.
    pub active: bool,
    /// Tab has no opener.
    pub no_opener: bool,
    /// Title is empty or a placeholder.
    pub title: bool,
}

impl NewTabScore {
    /// Number of signals that hold (0-4).
    #[inline]
    #[must_use]
    pub fn count(&self) -> u8 {
        [self.url, self.active, self.no_opener, self.title]
            .into_iter()
            .filter(|signal| *signal)
            .count() as u8
    }
}

impl fmt::Display for NewTabScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{} (url={}, active={}, no_opener={}, title={})",
            self.count(),
            SIGNAL_COUNT,
            self.url,
            self.active,
            self.no_opener,
            self.title
        )
    }
}

// ============================================================================
// NewTabClassifier
// ============================================================================

/// Decides whether a created tab came from the New Tab button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTabClassifier {
    signals: NewTabSignals,
    threshold: u8,
}

impl Default for NewTabClassifier {
    fn default() -> Self {
        Self {
            signals: NewTabSignals::default(),
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

impl NewTabClassifier {
    /// Creates a classifier.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if `threshold` is not in `1..=4`.
    pub fn new(signals: NewTabSignals, threshold: u8) -> Result<Self> {
        validate_threshold(threshold)?;
        Ok(Self { signals, threshold })
    }

    /// Returns the signal tables.
    #[inline]
    #[must_use]
    pub fn signals(&self) -> &NewTabSignals {
        &self.signals
    }

    /// Returns the number of signals required.
    #[inline]
    #[must_use]
    pub fn threshold(&self) -> u8 {
        self.threshold
    }

    /// Scores a snapshot against all four signals.
    #[must_use]
    pub fn score(&self, tab: &TabSnapshot) -> NewTabScore {
        NewTabScore {
            url: self.signals.is_new_tab_url(tab.url.as_deref()),
            active: tab.active,
            no_opener: tab.opener_tab_id.is_none(),
            title: self.signals.is_placeholder_title(tab.title.as_deref()),
        }
    }

    /// Returns `true` if the snapshot clears the threshold.
    #[inline]
    #[must_use]
    pub fn classify(&self, tab: &TabSnapshot) -> bool {
        self.score(tab).count() >= self.threshold
    }
}

/// Checks a threshold is reachable and non-trivial.
pub(crate) fn validate_threshold(threshold: u8) -> Result<()> {
    if threshold == 0 || threshold > SIGNAL_COUNT {
        return Err(Error::config(format!(
            "New-tab threshold must be between 1 and {SIGNAL_COUNT}, got {threshold}"
        )));
    }
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
