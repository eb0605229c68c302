//! Index table state: sorting, filters, pagination and presentation.
//!
//! Nothing in this module draws anything. Renderers read an [`IndexPage`]
//! and feed user input back into it; the page answers with
//! [`IndexEvent`]s for the caller to act on.

mod event;
mod filter;
mod page;
mod pagination;
mod presentation;
mod sort;

pub use event::IndexEvent;
pub use filter::FilterState;
pub use page::IndexPage;
pub use pagination::{PER_PAGE_OPTIONS, PageControl, PaginationBar, step_per_page};
pub use presentation::{
    BodyOptions, BodyRow, HeaderCell, Labels, TableArea, TableBody, header_cells, table_body,
};
pub use sort::{SortDirection, SortIndicator, SortState, compare_cells, sort_rows};
