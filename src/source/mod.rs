//! Data sources: where an index page's rows come from.
//!
//! A source plays the server's part of the round trip: given an
//! [`IndexQuery`] it returns one page of rows plus the pagination
//! descriptor, already searched and filtered.

mod memory;

pub use memory::MemorySource;

use crate::error::Result;
use crate::model::Pagination;
use crate::query::IndexQuery;

/// One page of results.
#[derive(Debug, Clone, PartialEq)]
pub struct PageResult<T> {
    pub rows: Vec<T>,
    pub pagination: Pagination,
}

impl<T> PageResult<T> {
    pub const fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Server side of an index page.
pub trait DataSource<T> {
    /// Fetch the page described by `query`.
    fn fetch(&self, query: &IndexQuery) -> Result<PageResult<T>>;
}

impl<T, S: DataSource<T> + ?Sized> DataSource<T> for Box<S> {
    fn fetch(&self, query: &IndexQuery) -> Result<PageResult<T>> {
        (**self).fetch(query)
    }
}
