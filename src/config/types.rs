//! Configuration types for index-view.

use super::defaults::{
    DEFAULT_JITTER_RATIO, DEFAULT_MAX_BACKOFF_SECS, DEFAULT_PER_PAGE, DEFAULT_POLL_INTERVAL_SECS,
    DEFAULT_THEME, DEFAULT_TICK_RATE_MS,
};
use crate::notify::PollerConfig;
use crate::table::Labels;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

// ============================================================================
// Unified Application Configuration
// ============================================================================

/// Application configuration loaded from a config file and CLI flags.
///
/// Every section has defaults, so an empty file (or none at all) is a valid
/// configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppConfig {
    /// Terminal UI settings
    pub tui: TuiConfig,
    /// User-facing strings of the index page
    pub labels: Labels,
    /// Notification bell settings
    pub notifications: NotificationConfig,
}

impl AppConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }
}

// ============================================================================
// Builder for AppConfig
// ============================================================================

/// Fluent construction of an [`AppConfig`], used for CLI overrides.
#[derive(Debug, Default)]
#[must_use]
pub struct AppConfigBuilder {
    config: AppConfig,
}

impl AppConfigBuilder {
    pub fn theme(mut self, theme: impl Into<String>) -> Self {
        self.config.tui.theme = theme.into();
        self
    }

    pub const fn default_per_page(mut self, per_page: u32) -> Self {
        self.config.tui.default_per_page = per_page;
        self
    }

    pub const fn tick_rate_ms(mut self, tick_rate_ms: u64) -> Self {
        self.config.tui.tick_rate_ms = tick_rate_ms;
        self
    }

    pub fn labels(mut self, labels: Labels) -> Self {
        self.config.labels = labels;
        self
    }

    /// Enable the bell with the given feed file.
    pub fn notification_feed(mut self, feed: impl Into<PathBuf>) -> Self {
        self.config.notifications.enabled = true;
        self.config.notifications.feed = Some(feed.into());
        self
    }

    pub const fn poll_interval_secs(mut self, secs: u64) -> Self {
        self.config.notifications.poll_interval_secs = secs;
        self
    }

    #[must_use]
    pub fn build(self) -> AppConfig {
        self.config
    }
}

// ============================================================================
// Section Types
// ============================================================================

/// Terminal UI settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct TuiConfig {
    /// Theme name: "dark", "light", or "high-contrast"
    pub theme: String,
    /// Rows per page of the first request (10, 25, 50 or 100)
    pub default_per_page: u32,
    /// Event poll interval in milliseconds
    #[schemars(range(min = 16))]
    pub tick_rate_ms: u64,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            theme: DEFAULT_THEME.to_string(),
            default_per_page: DEFAULT_PER_PAGE,
            tick_rate_ms: DEFAULT_TICK_RATE_MS,
        }
    }
}

/// Notification bell settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct NotificationConfig {
    /// Show the bell and poll the feed
    pub enabled: bool,
    /// JSON file holding the notification list
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feed: Option<PathBuf>,
    /// Seconds between polls
    #[schemars(range(min = 1))]
    pub poll_interval_secs: u64,
    /// Random spread of each delay as a fraction (0.0-1.0)
    #[schemars(range(min = 0.0, max = 1.0))]
    pub jitter_ratio: f64,
    /// Upper bound of the delay after repeated failures, in seconds
    pub max_backoff_secs: u64,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            feed: None,
            poll_interval_secs: DEFAULT_POLL_INTERVAL_SECS,
            jitter_ratio: DEFAULT_JITTER_RATIO,
            max_backoff_secs: DEFAULT_MAX_BACKOFF_SECS,
        }
    }
}

impl NotificationConfig {
    /// Poll timing for [`Poller::spawn`](crate::notify::Poller::spawn).
    #[must_use]
    pub fn poller_config(&self) -> PollerConfig {
        PollerConfig {
            interval: Duration::from_secs(self.poll_interval_secs),
            jitter: self.jitter_ratio,
            max_backoff: Duration::from_secs(self.max_backoff_secs.max(self.poll_interval_secs)),
        }
    }

    /// Feed path when the bell is enabled.
    #[must_use]
    pub fn active_feed(&self) -> Option<&PathBuf> {
        self.feed.as_ref().filter(|_| self.enabled)
    }
}
