//! Client-side sorting of the current page's rows.
//!
//! Sorting only reorders what is already loaded; it never asks the server for
//! anything. Clicking a header cycles that column through
//! ascending → descending → unsorted.

use crate::model::{CellValue, Column};
use crate::utils::natural_cmp;
use std::cmp::Ordering;

/// Direction of an active sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

/// Indicator shown in a sortable header cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortIndicator {
    /// Sortable but not the active column
    Neutral,
    Ascending,
    Descending,
}

impl SortIndicator {
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Neutral => "↕",
            Self::Ascending => "▲",
            Self::Descending => "▼",
        }
    }
}

/// Active sort column and direction. Both are set or both are unset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortState {
    active: Option<(String, SortDirection)>,
}

impl SortState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a given key and direction.
    #[must_use]
    pub fn sorted_by(key: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            active: Some((key.into(), direction)),
        }
    }

    pub fn key(&self) -> Option<&str> {
        self.active.as_ref().map(|(k, _)| k.as_str())
    }

    pub fn direction(&self) -> Option<SortDirection> {
        self.active.as_ref().map(|(_, d)| *d)
    }

    pub const fn is_sorted(&self) -> bool {
        self.active.is_some()
    }

    /// Advance the cycle for `key`.
    ///
    /// A different column starts ascending; the same column goes
    /// ascending → descending → unsorted.
    pub fn cycle(&mut self, key: &str) {
        self.active = match self.active.take() {
            Some((current, SortDirection::Asc)) if current == key => {
                Some((current, SortDirection::Desc))
            }
            Some((current, SortDirection::Desc)) if current == key => None,
            _ => Some((key.to_string(), SortDirection::Asc)),
        };
    }

    pub fn clear(&mut self) {
        self.active = None;
    }

    /// Header indicator for the column `key`.
    pub fn indicator_for(&self, key: &str) -> SortIndicator {
        match &self.active {
            Some((current, SortDirection::Asc)) if current == key => SortIndicator::Ascending,
            Some((current, SortDirection::Desc)) if current == key => SortIndicator::Descending,
            _ => SortIndicator::Neutral,
        }
    }
}

/// Compare two cell values for sorting.
///
/// Nulls go last regardless of direction; `Desc` only flips the comparison
/// of two non-null values.
pub fn compare_cells(a: &CellValue, b: &CellValue, direction: SortDirection) -> Ordering {
    match (a.sort_text(), b.sort_text()) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(a), Some(b)) => {
            let ord = natural_cmp(&a, &b);
            match direction {
                SortDirection::Asc => ord,
                SortDirection::Desc => ord.reverse(),
            }
        }
    }
}

/// Sorted view over `rows`.
///
/// The input is left untouched. An unset sort, or a key that matches no
/// column, yields the rows in input order.
pub fn sort_rows<'a, T>(rows: &'a [T], columns: &[Column<T>], state: &SortState) -> Vec<&'a T> {
    let mut view: Vec<&T> = rows.iter().collect();
    let (Some(key), Some(direction)) = (state.key(), state.direction()) else {
        return view;
    };
    let Some(column) = columns.iter().find(|c| c.key() == key) else {
        return view;
    };

    // Read every value once rather than on each comparison.
    let mut keyed: Vec<(CellValue, &T)> = view.drain(..).map(|r| (column.value(r), r)).collect();
    keyed.sort_by(|(a, _), (b, _)| compare_cells(a, b, direction));
    keyed.into_iter().map(|(_, r)| r).collect()
}
