//! Interactive terminal UI using ratatui.
//!
//! The TUI drives an [`IndexPage`](crate::table::IndexPage) against a
//! [`DataSource`](crate::source::DataSource): keys become page interactions,
//! the resulting events become query changes, and every request due is a
//! full reload of rows and pagination.
//!
//! The notification bell opens a dropdown that holds a [`ScrollLock`] for as
//! long as it is open; table navigation is ignored meanwhile.

mod app;
mod events;
mod scroll_lock;
pub mod state;
mod status;
pub mod theme;
mod ui;
pub(crate) mod widgets;

pub use app::{BellState, Focus, IndexApp};
pub use events::{Event, EventHandler, TableCommand, handle_key_event, map_table_key};
pub use scroll_lock::{ScrollLock, ScrollLockGuard};
pub use state::{ListNavigation, ListState};
pub use status::{StatusLevel, StatusMessage};
pub use theme::{ColorScheme, Styles, Theme, colors, current_theme_name, set_theme, toggle_theme};
pub use ui::{PageView, draw_page, render, run_index_tui};
