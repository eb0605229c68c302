//! Server-supplied pagination descriptor.

use serde::{Deserialize, Serialize};

/// Position of the current page within the full result set.
///
/// Field names match the server's JSON. `from`/`to` are the 1-based inclusive
/// range of rows on this page and are absent for empty pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub current_page: u32,
    pub last_page: u32,
    pub per_page: u32,
    pub total: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<u64>,
}

impl Pagination {
    /// Build a length-aware descriptor for `page` of `total` rows.
    ///
    /// `last_page` is never below 1. Pages past the end get no `from`/`to`.
    #[must_use]
    pub fn length_aware(page: u32, per_page: u32, total: u64) -> Self {
        let per_page = per_page.max(1);
        let page = page.max(1);
        let last_page = u32::try_from(total.div_ceil(u64::from(per_page)))
            .unwrap_or(u32::MAX)
            .max(1);

        let first_index = u64::from(page - 1) * u64::from(per_page);
        let (from, to) = if first_index < total {
            let to = (first_index + u64::from(per_page)).min(total);
            (Some(first_index + 1), Some(to))
        } else {
            (None, None)
        };

        Self {
            current_page: page,
            last_page,
            per_page,
            total,
            from,
            to,
        }
    }

    /// Whether there is nothing to paginate.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Number of rows on this page according to `from`/`to`.
    #[must_use]
    pub fn page_len(&self) -> usize {
        match (self.from, self.to) {
            (Some(from), Some(to)) if to >= from => usize::try_from(to - from + 1).unwrap_or(0),
            _ => 0,
        }
    }
}
