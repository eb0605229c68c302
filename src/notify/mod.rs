//! Notification bell: records, feeds and the recurring poll.

mod feed;
mod poller;

pub use feed::{FileFeed, Notification, NotificationFeed, unread_count};
pub use poller::{PollEvent, PollSchedule, Poller, PollerConfig, apply_jitter};

use crate::error::{IndexViewError, Result};
use std::time::Duration;

/// Parse a human-readable duration such as `30s`, `5m` or `1h`.
///
/// Supported suffixes: `ms`, `s`, `m`, `h`.
///
/// ```ignore
/// assert_eq!(parse_duration("30s")?, Duration::from_secs(30));
/// ```
pub fn parse_duration(s: &str) -> Result<Duration> {
    let s = s.trim();
    let invalid =
        || IndexViewError::validation(format!("invalid interval '{s}': expected e.g. 30s, 5m, 1h"));

    let (digits, unit) = if let Some(stripped) = s.strip_suffix("ms") {
        (stripped, "ms")
    } else if let Some(last) = s.chars().last()
        && matches!(last, 's' | 'm' | 'h')
    {
        (&s[..s.len() - 1], &s[s.len() - 1..])
    } else {
        return Err(invalid());
    };

    let value: u64 = digits.parse().map_err(|_| invalid())?;
    match unit {
        "ms" => Ok(Duration::from_millis(value)),
        "s" => Ok(Duration::from_secs(value)),
        "m" => Ok(Duration::from_secs(value * 60)),
        "h" => Ok(Duration::from_secs(value * 3600)),
        _ => Err(invalid()),
    }
}
