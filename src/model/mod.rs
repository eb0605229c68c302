//! Data model for index pages.
//!
//! Everything here is handed over fresh by the server on each navigation:
//! rows, the pagination descriptor and the filter field descriptions. The
//! table never mutates any of it.

mod action;
mod column;
mod document;
mod filter;
mod pagination;
mod record;
mod value;

pub use action::{ActionTarget, ActionVariant, PageAction};
pub use column::{Accessor, Align, CellRenderer, Column, ColumnSpec, ColumnStyle};
pub use document::IndexDocument;
pub use filter::{
    ALL_SENTINEL, FilterField, FilterKind, FilterOption, FilterValues, SEARCH_KEY,
    is_active_value,
};
pub use pagination::Pagination;
pub use record::{Record, Row};
pub use value::{CellValue, RowId};
