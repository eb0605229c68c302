//! Default values shared by the configuration types.

/// Default theme name.
pub const DEFAULT_THEME: &str = "dark";

/// Default rows per page for the first request.
pub const DEFAULT_PER_PAGE: u32 = crate::query::DEFAULT_PER_PAGE;

/// Default UI tick rate in milliseconds.
pub const DEFAULT_TICK_RATE_MS: u64 = 250;

/// Default notification poll interval in seconds.
pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 30;

/// Default poll jitter as a fraction of the delay.
pub const DEFAULT_JITTER_RATIO: f64 = 0.1;

/// Default ceiling of the poll backoff in seconds.
pub const DEFAULT_MAX_BACKOFF_SECS: u64 = 300;

/// Theme names accepted in `tui.theme`.
pub const THEME_NAMES: &[&str] = &["dark", "light", "high-contrast"];
