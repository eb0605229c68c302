//! Temporary status line messages.

use std::time::{Duration, Instant};

/// Severity of a status message, used for styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusLevel {
    #[default]
    Info,
    Error,
}

/// A status message that clears itself after a while.
///
/// ```ignore
/// let mut status = StatusMessage::with_auto_clear(Duration::from_secs(3));
/// status.set("Halaman 2 dimuat");
/// assert!(status.message().is_some());
/// ```
#[derive(Debug, Clone, Default)]
pub struct StatusMessage {
    message: Option<String>,
    level: StatusLevel,
    set_at: Option<Instant>,
    /// None = no auto-clear
    auto_clear_after: Option<Duration>,
}

impl StatusMessage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn with_auto_clear(duration: Duration) -> Self {
        Self {
            message: None,
            level: StatusLevel::Info,
            set_at: None,
            auto_clear_after: Some(duration),
        }
    }

    pub fn set(&mut self, msg: impl Into<String>) {
        self.message = Some(msg.into());
        self.level = StatusLevel::Info;
        self.set_at = Some(Instant::now());
    }

    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.set(msg);
        self.level = StatusLevel::Error;
    }

    pub fn clear(&mut self) {
        self.message = None;
        self.set_at = None;
    }

    /// Current message, dropping it first if it has expired.
    pub fn message(&mut self) -> Option<&str> {
        if let (Some(set_at), Some(duration)) = (self.set_at, self.auto_clear_after)
            && set_at.elapsed() >= duration
        {
            self.clear();
        }
        self.message.as_deref()
    }

    /// Current message without the expiry check.
    #[must_use]
    pub fn peek(&self) -> Option<&str> {
        self.message.as_deref()
    }

    #[must_use]
    pub const fn level(&self) -> StatusLevel {
        self.level
    }
}
