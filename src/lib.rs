//! **Headless index-page state for admin-style tables, with a terminal renderer.**
//!
//! `index-view` models the page every back-office application has a hundred
//! of: a title with actions, a search box and filter panel, a sortable table
//! and a pagination bar. The server owns the data; the page owns only
//! ephemeral UI state and turns user interactions into events that describe
//! the next request.
//!
//! ## Core Concepts & Modules
//!
//! - **[`model`]**: Rows, typed [`Column`] accessors, cell values, filter
//!   fields, page actions, the [`Pagination`] descriptor and JSON index
//!   documents.
//! - **[`table`]**: The [`IndexPage`] state holder. Client-side sort of the
//!   current page (nulls last, natural collation), filter input state,
//!   pagination controls and the [`IndexEvent`]s they emit.
//! - **[`query`]**: [`IndexQuery`], the request an event stream folds into,
//!   with form-urlencoded query strings.
//! - **[`source`]**: The [`DataSource`] trait and an in-memory implementation
//!   that searches, filters and paginates like a server would.
//! - **[`notify`]**: Notification feeds and a cancellable background
//!   [`Poller`] with jitter and backoff.
//! - **[`tui`]**: A ratatui front end driving an `IndexPage` against a source.
//! - **[`render`]**: Plain-text rendering for non-interactive output.
//!
//! ## Getting Started
//!
//! ```no_run
//! use index_view::{Column, IndexPage, Pagination, Record};
//!
//! let rows = vec![
//!     Record::new(1).with("name", "Budi").with("code", serde_json::Value::Null),
//!     Record::new(2).with("name", "Ani").with("code", "A1"),
//! ];
//! let mut page = IndexPage::new("Karyawan")
//!     .with_columns(vec![Column::field("name", "Nama"), Column::field("code", "Kode")])
//!     .with_data(rows, Some(Pagination::length_aware(1, 10, 2)));
//!
//! page.click_header("code");
//! let order: Vec<_> = page.sorted_rows().iter().map(|r| r.id.clone()).collect();
//! println!("{order:?}");
//! ```
//!
//! ### Folding interactions into requests
//!
//! ```no_run
//! use index_view::{IndexEvent, IndexQuery};
//!
//! let mut query = IndexQuery::new();
//! if query.apply(&IndexEvent::PerPageChange(25)) {
//!     println!("GET /employees?{}", query.to_query_string());
//! }
//! ```
//!
//! ## Command-Line Interface (CLI)
//!
//! The `index-view` binary opens a document in the terminal UI (`view`),
//! prints a page as text (`render`) and manages the config file (`config`).

#![warn(clippy::unwrap_used)]
#![allow(
    // Layout math moves between usize, u16 and u64 with bounded values
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_possible_wrap,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    // TUI render functions are inherently long
    clippy::too_many_lines,
    clippy::struct_excessive_bools,
    clippy::fn_params_excessive_bools,
    clippy::similar_names
)]

pub mod cli;
pub mod config;
pub mod error;
pub mod model;
pub mod notify;
pub mod query;
pub mod render;
pub mod source;
pub mod table;
pub mod tui;
pub mod utils;

// Re-export main types for convenience
pub use config::{AppConfig, AppConfigBuilder, ConfigError, TuiConfig, Validatable};
pub use error::{ErrorContext, IndexViewError, Result};
pub use model::{
    ActionTarget, Align, CellValue, Column, ColumnSpec, FilterField, FilterOption, FilterValues,
    IndexDocument, PageAction, Pagination, Record, Row, RowId,
};
pub use notify::{FileFeed, Notification, NotificationFeed, PollEvent, Poller, PollerConfig};
pub use query::IndexQuery;
pub use render::{TextOptions, render_page};
pub use source::{DataSource, MemorySource, PageResult};
pub use table::{
    FilterState, IndexEvent, IndexPage, Labels, PageControl, PaginationBar, SortDirection,
    SortIndicator, SortState,
};
pub use tui::{ListNavigation, ListState, ScrollLock, ScrollLockGuard, StatusMessage};
