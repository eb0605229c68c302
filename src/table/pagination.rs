//! Pagination bar: range display and navigation intent.
//!
//! Rows are sliced by the server. This layer only shows where the current
//! page sits and turns clicks into [`IndexEvent`]s.

use super::event::IndexEvent;
use crate::model::Pagination;

/// Page sizes offered by the per-page selector.
pub const PER_PAGE_OPTIONS: [u32; 4] = [10, 25, 50, 100];

/// A navigation button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageControl {
    First,
    Prev,
    Next,
    Last,
}

impl PageControl {
    pub const ALL: [Self; 4] = [Self::First, Self::Prev, Self::Next, Self::Last];

    pub const fn symbol(self) -> &'static str {
        match self {
            Self::First => "«",
            Self::Prev => "‹",
            Self::Next => "›",
            Self::Last => "»",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationBar {
    pagination: Pagination,
    from: u64,
    to: u64,
}

impl PaginationBar {
    /// Build the bar, or `None` when there is nothing to paginate.
    ///
    /// Missing `from`/`to` fall back to `1` and `row_count`; those are only
    /// used for display.
    pub fn new(pagination: Option<&Pagination>, row_count: usize) -> Option<Self> {
        let pagination = *pagination?;
        if pagination.total == 0 {
            return None;
        }
        Some(Self {
            pagination,
            from: pagination.from.unwrap_or(1),
            to: pagination.to.unwrap_or(row_count as u64),
        })
    }

    pub const fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    pub const fn current_page(&self) -> u32 {
        self.pagination.current_page
    }

    pub const fn last_page(&self) -> u32 {
        self.pagination.last_page
    }

    pub const fn per_page(&self) -> u32 {
        self.pagination.per_page
    }

    pub const fn range(&self) -> (u64, u64) {
        (self.from, self.to)
    }

    /// `"11–20 dari 47"` style range text.
    pub fn range_label(&self, of: &str) -> String {
        format!("{}–{} {} {}", self.from, self.to, of, self.pagination.total)
    }

    /// `"Halaman 2 / 5"` style page text.
    pub fn page_label(&self, page: &str) -> String {
        format!(
            "{} {} / {}",
            page, self.pagination.current_page, self.pagination.last_page
        )
    }

    pub const fn is_enabled(&self, control: PageControl) -> bool {
        match control {
            PageControl::First | PageControl::Prev => self.pagination.current_page != 1,
            PageControl::Next | PageControl::Last => {
                self.pagination.current_page != self.pagination.last_page
            }
        }
    }

    /// Page a control navigates to.
    pub const fn target(&self, control: PageControl) -> u32 {
        let current = self.pagination.current_page;
        match control {
            PageControl::First => 1,
            PageControl::Prev => current.saturating_sub(1),
            PageControl::Next => current.saturating_add(1),
            PageControl::Last => self.pagination.last_page,
        }
    }

    /// Activate a control. Disabled controls produce nothing.
    pub fn activate(&self, control: PageControl) -> Option<IndexEvent> {
        self.is_enabled(control)
            .then(|| IndexEvent::PageChange(self.target(control)))
    }

    /// Choose a page size from [`PER_PAGE_OPTIONS`]; any other size yields
    /// nothing. Page reset is left to the caller.
    pub fn select_per_page(&self, per_page: u32) -> Option<IndexEvent> {
        PER_PAGE_OPTIONS
            .contains(&per_page)
            .then_some(IndexEvent::PerPageChange(per_page))
    }

    /// Neighbouring option in [`PER_PAGE_OPTIONS`], for +/- keys.
    pub fn step_per_page(&self, forward: bool) -> Option<u32> {
        step_per_page(self.pagination.per_page, forward)
    }
}

/// Next larger (or smaller) entry of [`PER_PAGE_OPTIONS`] relative to `current`.
pub fn step_per_page(current: u32, forward: bool) -> Option<u32> {
    if forward {
        PER_PAGE_OPTIONS.iter().copied().find(|&n| n > current)
    } else {
        PER_PAGE_OPTIONS.iter().rev().copied().find(|&n| n < current)
    }
}
