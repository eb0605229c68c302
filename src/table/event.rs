//! Output events of an index page.

use crate::model::{ActionTarget, FilterValues};

/// Intent emitted by the index page for its caller.
///
/// Every variant except [`IndexEvent::FilterChange`] and
/// [`IndexEvent::SearchChange`] is expected to trigger a fresh request to the
/// server, which replaces the page's rows and pagination wholesale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexEvent {
    /// Navigate to a page (1-based)
    PageChange(u32),
    /// Change the page size; the caller resets to page 1
    PerPageChange(u32),
    /// A single filter input changed
    FilterChange { key: String, value: String },
    /// Apply the current filter values
    FilterSubmit(FilterValues),
    /// Clear every filter
    FilterReset,
    /// The search text changed
    SearchChange(String),
    /// A page action was activated
    Action(ActionTarget),
}

impl IndexEvent {
    /// Short name used in logs and the status line.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::PageChange(_) => "page-change",
            Self::PerPageChange(_) => "per-page-change",
            Self::FilterChange { .. } => "filter-change",
            Self::FilterSubmit(_) => "filter-submit",
            Self::FilterReset => "filter-reset",
            Self::SearchChange(_) => "search-change",
            Self::Action(_) => "action",
        }
    }
}
