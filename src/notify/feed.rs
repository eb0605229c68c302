//! Notification records and feeds.

use crate::error::{IndexViewError, NotificationErrorKind, Result};
use crate::model::RowId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// One entry of the notification bell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: RowId,
    pub title: String,
    #[serde(default)]
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub read: bool,
}

impl Notification {
    /// Age relative to `now`, e.g. `"5 menit lalu"`.
    pub fn age_label(&self, now: DateTime<Utc>) -> String {
        let secs = (now - self.created_at).num_seconds().max(0);
        match secs {
            0..=59 => "baru saja".to_string(),
            60..=3599 => format!("{} menit lalu", secs / 60),
            3600..=86_399 => format!("{} jam lalu", secs / 3600),
            _ => format!("{} hari lalu", secs / 86_400),
        }
    }
}

/// Count of notifications not yet read.
pub fn unread_count(items: &[Notification]) -> usize {
    items.iter().filter(|n| !n.read).count()
}

/// Somewhere notifications can be fetched from.
pub trait NotificationFeed {
    fn fetch(&self) -> Result<Vec<Notification>>;
}

/// Feed reading a JSON array of notifications from a file on every fetch.
#[derive(Debug, Clone)]
pub struct FileFeed {
    path: PathBuf,
}

impl FileFeed {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl NotificationFeed for FileFeed {
    fn fetch(&self) -> Result<Vec<Notification>> {
        let content = std::fs::read_to_string(&self.path).map_err(|e| {
            IndexViewError::notification(
                format!("reading {}", self.path.display()),
                NotificationErrorKind::Unavailable(e.to_string()),
            )
        })?;
        let mut items: Vec<Notification> = serde_json::from_str(&content).map_err(|e| {
            IndexViewError::notification(
                format!("parsing {}", self.path.display()),
                NotificationErrorKind::InvalidResponse(e.to_string()),
            )
        })?;
        // Newest first
        items.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(items)
    }
}
