//! Application state of the interactive index page.
//!
//! The app plays the part of the surrounding page: it folds every
//! [`IndexEvent`] into an [`IndexQuery`], and when a request is due it
//! fetches a fresh page from the [`DataSource`] and hands it to the
//! [`IndexPage`] as a full replacement.

use super::scroll_lock::{ScrollLock, ScrollLockGuard};
use super::state::{ListNavigation, ListState};
use super::status::StatusMessage;
use crate::model::{ALL_SENTINEL, ActionTarget, FilterKind, Record};
use crate::notify::{Notification, PollEvent, Poller, unread_count};
use crate::query::IndexQuery;
use crate::source::DataSource;
use crate::table::{IndexEvent, IndexPage, PageControl, step_per_page};
use std::time::Duration;

/// Where keyboard input goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Table,
    Search,
    /// Editing the filter field at this index
    Filter(usize),
}

/// Notification bell and its dropdown.
#[derive(Debug, Default)]
pub struct BellState {
    pub items: Vec<Notification>,
    pub list: ListState,
    pub last_error: Option<String>,
    guard: Option<ScrollLockGuard>,
}

impl BellState {
    pub const fn is_open(&self) -> bool {
        self.guard.is_some()
    }

    /// Open the dropdown, taking the scroll lock.
    pub fn open(&mut self, lock: &ScrollLock) {
        if self.guard.is_none() {
            self.guard = Some(lock.acquire());
            self.list.resize(self.items.len());
        }
    }

    /// Close the dropdown, releasing the scroll lock.
    pub fn close(&mut self) {
        self.guard = None;
    }

    pub fn unread(&self) -> usize {
        unread_count(&self.items)
    }

    /// Replace the items, keeping read marks made locally.
    pub fn update(&mut self, mut items: Vec<Notification>) {
        for item in &mut items {
            if self.items.iter().any(|old| old.id == item.id && old.read) {
                item.read = true;
            }
        }
        self.items = items;
        self.last_error = None;
        self.list.resize(self.items.len());
    }

    pub fn mark_selected_read(&mut self) {
        if let Some(item) = self.items.get_mut(self.list.selected()) {
            item.read = true;
        }
    }
}

pub struct IndexApp {
    pub page: IndexPage<Record>,
    pub query: IndexQuery,
    pub focus: Focus,
    /// Header cell under the keyboard cursor
    pub header_cursor: usize,
    pub rows: ListState,
    pub status: StatusMessage,
    pub bell: BellState,
    pub should_quit: bool,
    pub tick: u64,
    source: Box<dyn DataSource<Record>>,
    scroll_lock: ScrollLock,
    poller: Option<Poller>,
    pending_fetch: bool,
}

impl IndexApp {
    /// Create the app. The first page is fetched on the first frame.
    pub fn new(
        mut page: IndexPage<Record>,
        source: Box<dyn DataSource<Record>>,
        query: IndexQuery,
    ) -> Self {
        page.set_loading(true);
        page.set_filter_values(query.filter_values());
        page.change_search(query.search.clone());
        Self {
            page,
            query,
            focus: Focus::Table,
            header_cursor: 0,
            rows: ListState::new(),
            status: StatusMessage::with_auto_clear(Duration::from_secs(4)),
            bell: BellState::default(),
            should_quit: false,
            tick: 0,
            source,
            scroll_lock: ScrollLock::new(),
            poller: None,
            pending_fetch: true,
        }
    }

    #[must_use]
    pub fn with_poller(mut self, poller: Poller) -> Self {
        self.poller = Some(poller);
        self
    }

    pub const fn scroll_lock(&self) -> &ScrollLock {
        &self.scroll_lock
    }

    pub const fn is_fetch_pending(&self) -> bool {
        self.pending_fetch
    }

    /// Act on an event from the page.
    pub fn dispatch(&mut self, event: IndexEvent) {
        tracing::trace!(event = event.name(), "Dispatching");
        if let IndexEvent::Action(target) = &event {
            let message = match target {
                ActionTarget::Href(href) => format!("→ {href}"),
                ActionTarget::Command(command) => format!("▶ {command}"),
            };
            self.status.set(message);
            return;
        }
        if self.query.apply(&event) {
            self.request_reload();
        }
    }

    /// Mark the table as loading; the fetch happens after the next draw.
    pub fn request_reload(&mut self) {
        self.page.set_loading(true);
        self.pending_fetch = true;
    }

    /// Run a pending fetch and install the result.
    pub fn perform_fetch(&mut self) {
        if !std::mem::take(&mut self.pending_fetch) {
            return;
        }
        tracing::debug!(query = %self.query.to_query_string(), "Fetching page");
        match self.source.fetch(&self.query) {
            Ok(result) => {
                self.page.set_data(result.rows, Some(result.pagination));
                self.page.set_filter_values(self.query.filter_values());
                self.page.set_search_value(self.query.search.clone());
                self.rows.resize(self.page.data().len());
            }
            Err(e) => {
                tracing::warn!("Fetch failed: {e}");
                self.page.set_loading(false);
                self.status.set_error(e.to_string());
            }
        }
    }

    /// Drain notification poll results.
    pub fn poll_notifications(&mut self) {
        let Some(poller) = &self.poller else {
            return;
        };
        while let Some(event) = poller.try_recv() {
            match event {
                PollEvent::Updated(items) => self.bell.update(items),
                PollEvent::Failed(message) => self.bell.last_error = Some(message),
            }
        }
    }

    /// Whether table navigation is currently allowed.
    pub fn table_navigable(&self) -> bool {
        !self.scroll_lock.is_locked()
    }

    // Table

    pub fn sort_at_cursor(&mut self) {
        self.page.click_header_at(self.header_cursor);
    }

    /// Sort by the column at `index`, moving the header cursor there.
    pub fn sort_column(&mut self, index: usize) {
        if index < self.page.columns().len() {
            self.header_cursor = index;
            self.page.click_header_at(index);
        }
    }

    pub fn move_header_cursor(&mut self, forward: bool) {
        let count = self.page.columns().len();
        if count == 0 {
            return;
        }
        self.header_cursor = if forward {
            (self.header_cursor + 1).min(count - 1)
        } else {
            self.header_cursor.saturating_sub(1)
        };
    }

    pub fn go_page(&mut self, control: PageControl) {
        if let Some(event) = self.page.activate_page(control) {
            self.dispatch(event);
        }
    }

    pub fn step_per_page(&mut self, forward: bool) {
        let current = self
            .page
            .pagination()
            .map_or(self.query.per_page, |p| p.per_page);
        if let Some(per_page) = step_per_page(current, forward)
            && let Some(event) = self.page.select_per_page(per_page)
        {
            self.dispatch(event);
        }
    }

    pub fn activate_action(&mut self, index: usize) {
        if let Some(event) = self.page.activate_action(index) {
            self.dispatch(event);
        }
    }

    // Search and filters

    pub fn start_search(&mut self) {
        self.focus = Focus::Search;
    }

    pub fn search_push(&mut self, c: char) {
        let mut text = self.page.filters().search().to_string();
        text.push(c);
        let event = self.page.change_search(text);
        self.dispatch(event);
    }

    pub fn search_pop(&mut self) {
        let mut text = self.page.filters().search().to_string();
        text.pop();
        let event = self.page.change_search(text);
        self.dispatch(event);
    }

    /// Apply search and filters (Enter).
    pub fn submit(&mut self) {
        let event = self.page.submit_filters();
        self.focus = Focus::Table;
        self.dispatch(event);
    }

    pub fn reset_filters(&mut self) {
        let event = self.page.reset_filters();
        self.dispatch(event);
    }

    /// Show or hide the filter panel; opening it focuses the first field.
    pub fn toggle_filter_panel(&mut self) {
        self.page.toggle_filter_panel();
        self.focus = if self.page.filters().is_panel_open() && self.page.filters().has_fields() {
            Focus::Filter(0)
        } else {
            Focus::Table
        };
    }

    pub fn next_filter_field(&mut self) {
        let count = self.page.filters().fields().len();
        if let Focus::Filter(index) = self.focus
            && count > 0
        {
            self.focus = Focus::Filter((index + 1) % count);
        }
    }

    fn focused_filter(&self) -> Option<(String, FilterKind)> {
        let Focus::Filter(index) = self.focus else {
            return None;
        };
        self.page
            .filters()
            .fields()
            .get(index)
            .map(|f| (f.key.clone(), f.kind))
    }

    /// Type into a text or date filter.
    pub fn filter_push(&mut self, c: char) {
        if let Some((key, kind)) = self.focused_filter()
            && kind != FilterKind::Select
        {
            let mut value = self.page.filters().values().get(&key).to_string();
            value.push(c);
            let event = self.page.change_filter(&key, &value);
            self.dispatch(event);
        }
    }

    pub fn filter_pop(&mut self) {
        if let Some((key, kind)) = self.focused_filter()
            && kind != FilterKind::Select
        {
            let mut value = self.page.filters().values().get(&key).to_string();
            value.pop();
            let event = self.page.change_filter(&key, &value);
            self.dispatch(event);
        }
    }

    /// Step a select filter through "all" and its options.
    pub fn filter_cycle(&mut self, forward: bool) {
        let Some((key, FilterKind::Select)) = self.focused_filter() else {
            return;
        };
        let Some(field) = self.page.filters().field(&key) else {
            return;
        };
        let mut choices = vec![ALL_SENTINEL.to_string()];
        choices.extend(
            field
                .options
                .iter()
                .filter(|o| o.value != ALL_SENTINEL)
                .map(|o| o.value.clone()),
        );
        let current = self.page.filters().values().get(&key);
        let position = choices.iter().position(|c| c == current).unwrap_or(0);
        let next = if forward {
            (position + 1) % choices.len()
        } else {
            (position + choices.len() - 1) % choices.len()
        };
        let value = choices[next].clone();
        let event = self.page.change_filter(&key, &value);
        self.dispatch(event);
    }

    pub fn leave_input(&mut self) {
        self.focus = Focus::Table;
    }

    // Notifications

    pub fn toggle_bell(&mut self) {
        if self.bell.is_open() {
            self.bell.close();
        } else {
            self.bell.open(&self.scroll_lock);
        }
    }

    pub fn quit(&mut self) {
        self.bell.close();
        if let Some(mut poller) = self.poller.take() {
            poller.stop();
        }
        self.should_quit = true;
    }
}
