//! The index page: title, actions, filters, table and pagination composed
//! into one state holder.
//!
//! `IndexPage` owns only ephemeral UI state (the sort, the filter inputs,
//! the loading flag). Rows and pagination are replaced wholesale whenever
//! the caller gets a fresh page from the server.

use super::event::IndexEvent;
use super::filter::FilterState;
use super::pagination::{PageControl, PaginationBar};
use super::presentation::{
    BodyOptions, HeaderCell, Labels, TableArea, TableBody, header_cells, table_body,
};
use super::sort::{SortState, sort_rows};
use crate::model::{
    Column, FilterField, FilterValues, IndexDocument, PageAction, Pagination, Record, Row,
};

/// A complete index page.
///
/// ```ignore
/// let mut page = IndexPage::new("Karyawan")
///     .with_columns(vec![Column::field("name", "Nama")])
///     .with_data(rows, Some(pagination));
/// page.click_header("name");
/// let body = page.body();
/// ```
#[derive(Debug, Clone)]
pub struct IndexPage<T> {
    title: String,
    description: Option<String>,
    actions: Vec<PageAction>,
    data: Vec<T>,
    columns: Vec<Column<T>>,
    pagination: Option<Pagination>,
    filters: FilterState,
    is_loading: bool,
    empty_message: Option<String>,
    empty_icon: Option<String>,
    table_content: Option<Vec<String>>,
    labels: Labels,
    sort: SortState,
}

impl<T: Row> IndexPage<T> {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            actions: Vec::new(),
            data: Vec::new(),
            columns: Vec::new(),
            pagination: None,
            filters: FilterState::default(),
            is_loading: false,
            empty_message: None,
            empty_icon: None,
            table_content: None,
            labels: Labels::default(),
            sort: SortState::default(),
        }
    }

    // Builder methods

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_actions(mut self, actions: Vec<PageAction>) -> Self {
        self.actions = actions;
        self
    }

    #[must_use]
    pub fn with_columns(mut self, columns: Vec<Column<T>>) -> Self {
        self.columns = columns;
        self
    }

    #[must_use]
    pub fn with_data(mut self, data: Vec<T>, pagination: Option<Pagination>) -> Self {
        self.data = data;
        self.pagination = pagination;
        self
    }

    #[must_use]
    pub fn with_filter_fields(mut self, fields: Vec<FilterField>) -> Self {
        let values = self.filters.applied().clone();
        let search = self.filters.search().to_string();
        self.filters = FilterState::new(fields)
            .with_values(values)
            .with_search(search);
        self
    }

    #[must_use]
    pub fn with_filter_values(mut self, values: FilterValues) -> Self {
        self.filters.set_applied(values);
        self
    }

    #[must_use]
    pub fn with_search_value(mut self, search: impl Into<String>) -> Self {
        self.filters.set_search(search);
        self
    }

    #[must_use]
    pub const fn with_loading(mut self, is_loading: bool) -> Self {
        self.is_loading = is_loading;
        self
    }

    #[must_use]
    pub fn with_empty_message(mut self, message: impl Into<String>) -> Self {
        self.empty_message = Some(message.into());
        self
    }

    #[must_use]
    pub fn with_empty_icon(mut self, icon: impl Into<String>) -> Self {
        self.empty_icon = Some(icon.into());
        self
    }

    /// Replace the table area with caller-rendered lines.
    #[must_use]
    pub fn with_table_content(mut self, lines: Vec<String>) -> Self {
        self.table_content = Some(lines);
        self
    }

    #[must_use]
    pub fn with_labels(mut self, labels: Labels) -> Self {
        self.labels = labels;
        self
    }

    // Accessors

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn actions(&self) -> &[PageAction] {
        &self.actions
    }

    pub fn data(&self) -> &[T] {
        &self.data
    }

    pub fn columns(&self) -> &[Column<T>] {
        &self.columns
    }

    pub const fn pagination(&self) -> Option<&Pagination> {
        self.pagination.as_ref()
    }

    pub const fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub const fn labels(&self) -> &Labels {
        &self.labels
    }

    pub const fn sort_state(&self) -> &SortState {
        &self.sort
    }

    pub const fn is_loading(&self) -> bool {
        self.is_loading
    }

    // Updates from the caller

    /// Replace rows and pagination with a fresh server response.
    ///
    /// The sort state is kept: a column sorted on one page stays sorted on
    /// the next.
    pub fn set_data(&mut self, data: Vec<T>, pagination: Option<Pagination>) {
        self.data = data;
        self.pagination = pagination;
        self.is_loading = false;
    }

    pub fn set_loading(&mut self, is_loading: bool) {
        self.is_loading = is_loading;
    }

    /// Sync filter inputs with the values the server applied.
    pub fn set_filter_values(&mut self, values: FilterValues) {
        self.filters.set_applied(values);
    }

    /// Replace the search text shown in the input without emitting an event.
    pub fn set_search_value(&mut self, search: impl Into<String>) {
        self.filters.set_search(search);
    }

    pub fn set_table_content(&mut self, lines: Option<Vec<String>>) {
        self.table_content = lines;
    }

    // Derived views

    /// Rows in display order.
    pub fn sorted_rows(&self) -> Vec<&T> {
        sort_rows(&self.data, &self.columns, &self.sort)
    }

    pub fn header(&self) -> Vec<HeaderCell> {
        header_cells(&self.columns, &self.sort)
    }

    pub fn empty_message(&self) -> &str {
        self.empty_message
            .as_deref()
            .unwrap_or(&self.labels.no_data)
    }

    pub fn body(&self) -> TableBody {
        table_body(
            &self.data,
            &self.columns,
            &self.sort,
            BodyOptions {
                is_loading: self.is_loading,
                empty_message: self.empty_message(),
                empty_icon: self.empty_icon.as_deref(),
            },
        )
    }

    /// Table area, honouring a custom content override.
    pub fn table_area(&self) -> TableArea {
        match &self.table_content {
            Some(lines) => TableArea::Custom(lines.clone()),
            None => TableArea::Table {
                header: self.header(),
                body: self.body(),
            },
        }
    }

    pub fn pagination_bar(&self) -> Option<PaginationBar> {
        PaginationBar::new(self.pagination.as_ref(), self.data.len())
    }

    // User interactions

    /// Click a header cell. Returns whether the sort changed.
    ///
    /// Columns that are not sortable, and unknown keys, are ignored.
    pub fn click_header(&mut self, key: &str) -> bool {
        let sortable = self
            .columns
            .iter()
            .any(|c| c.key() == key && c.is_sortable());
        if sortable {
            self.sort.cycle(key);
            tracing::debug!(key, direction = ?self.sort.direction(), "Sort changed");
        }
        sortable
    }

    /// Click the header cell at a column index.
    pub fn click_header_at(&mut self, index: usize) -> bool {
        match self.columns.get(index).map(|c| c.key().to_string()) {
            Some(key) => self.click_header(&key),
            None => false,
        }
    }

    pub fn activate_page(&self, control: PageControl) -> Option<IndexEvent> {
        self.pagination_bar()?.activate(control)
    }

    /// Pick a page size. Without a pagination bar there is no selector, and
    /// sizes outside the offered options are ignored.
    pub fn select_per_page(&self, per_page: u32) -> Option<IndexEvent> {
        self.pagination_bar()?.select_per_page(per_page)
    }

    pub fn change_filter(&mut self, key: &str, value: &str) -> IndexEvent {
        self.filters.change(key, value)
    }

    pub fn change_search(&mut self, text: impl Into<String>) -> IndexEvent {
        self.filters.set_search(text)
    }

    /// Submit filters together with the current search text.
    pub fn submit_filters(&self) -> IndexEvent {
        let mut values = self.filters.values().clone();
        values.set(crate::model::SEARCH_KEY, self.filters.search());
        IndexEvent::FilterSubmit(values)
    }

    pub fn reset_filters(&mut self) -> IndexEvent {
        self.filters.reset()
    }

    pub fn toggle_filter_panel(&mut self) {
        self.filters.toggle_panel();
    }

    pub fn activate_action(&self, index: usize) -> Option<IndexEvent> {
        self.actions
            .get(index)
            .map(|a| IndexEvent::Action(a.target.clone()))
    }
}

impl IndexPage<Record> {
    /// Page chrome of a document: title, actions, columns and filters.
    ///
    /// Rows are left empty; they arrive from a data source.
    pub fn from_document(document: &IndexDocument) -> Self {
        let mut page = Self::new(document.title.clone())
            .with_actions(document.actions.clone())
            .with_columns(document.build_columns())
            .with_filter_fields(document.filters.clone());
        page.description.clone_from(&document.description);
        page.empty_message.clone_from(&document.empty_message);
        page
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_message_falls_back_to_label() {
        let page: IndexPage<Record> = IndexPage::new("Ruangan");
        assert_eq!(page.empty_message(), "Tidak ada data");
        let page: IndexPage<Record> = IndexPage::new("Ruangan").with_empty_message("Belum ada");
        assert_eq!(page.empty_message(), "Belum ada");
    }

    #[test]
    fn test_table_content_override() {
        let page: IndexPage<Record> =
            IndexPage::new("Ruangan").with_table_content(vec!["kartu".to_string()]);
        assert_eq!(page.table_area(), TableArea::Custom(vec!["kartu".to_string()]));
    }

    #[test]
    fn test_per_page_without_bar() {
        let page: IndexPage<Record> = IndexPage::new("Ruangan");
        assert_eq!(page.select_per_page(50), None);
    }

    #[test]
    fn test_submit_includes_search() {
        let mut page: IndexPage<Record> = IndexPage::new("Ruangan");
        page.change_search("budi");
        match page.submit_filters() {
            IndexEvent::FilterSubmit(values) => assert_eq!(values.get("search"), "budi"),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_from_document_copies_chrome() {
        let document = IndexDocument::from_json(
            r#"{
                "title": "Ruangan",
                "description": "Daftar ruang rapat",
                "actions": [{"label": "Tambah", "href": "/rooms/create"}],
                "columns": [{"key": "name", "label": "Nama"}],
                "empty_message": "Belum ada ruangan",
                "rows": [{"id": 1, "name": "Melati"}]
            }"#,
        )
        .unwrap();
        let page = IndexPage::from_document(&document);
        assert_eq!(page.title(), "Ruangan");
        assert_eq!(page.description(), Some("Daftar ruang rapat"));
        assert_eq!(page.actions().len(), 1);
        assert_eq!(page.columns().len(), 1);
        assert_eq!(page.empty_message(), "Belum ada ruangan");
        assert!(page.data().is_empty());
    }
}
