//! In-memory data source with server-style search, filters and pagination.

use super::{DataSource, PageResult};
use crate::error::{IndexViewError, Result, SourceErrorKind};
use crate::model::{FilterField, FilterKind, IndexDocument, Pagination, Record, is_active_value};
use crate::query::IndexQuery;
use chrono::NaiveDate;

/// Serves pages of a fixed record set.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    records: Vec<Record>,
    fields: Vec<FilterField>,
    searchable: Vec<String>,
}

impl MemorySource {
    pub fn new(records: Vec<Record>) -> Self {
        Self {
            records,
            ..Self::default()
        }
    }

    /// Source serving a document's rows with its filters and searchable fields.
    pub fn from_document(document: &IndexDocument) -> Self {
        Self {
            records: document.rows.clone(),
            fields: document.filters.clone(),
            searchable: document.searchable.clone(),
        }
    }

    #[must_use]
    pub fn with_filter_fields(mut self, fields: Vec<FilterField>) -> Self {
        self.fields = fields;
        self
    }

    /// Restrict search to these fields. Empty means all fields.
    #[must_use]
    pub fn with_searchable(mut self, fields: Vec<String>) -> Self {
        self.searchable = fields;
        self
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn matches_search(&self, record: &Record, needle: &str) -> bool {
        if needle.is_empty() {
            return true;
        }
        let needle = needle.to_lowercase();
        let contains = |key: &str| {
            record
                .get(key)
                .as_filter_string()
                .to_lowercase()
                .contains(&needle)
        };
        if self.searchable.is_empty() {
            record.fields.keys().any(|k| contains(k))
        } else {
            self.searchable.iter().any(|k| contains(k))
        }
    }

    fn matches_filter(&self, record: &Record, key: &str, wanted: &str) -> bool {
        let actual = record.get(key).as_filter_string();
        let kind = self
            .fields
            .iter()
            .find(|f| f.key == key)
            .map(|f| f.kind);
        match kind {
            Some(FilterKind::Text) => actual.to_lowercase().contains(&wanted.to_lowercase()),
            Some(FilterKind::Date) => match NaiveDate::parse_from_str(wanted, "%Y-%m-%d") {
                Ok(date) => actual.starts_with(&date.format("%Y-%m-%d").to_string()),
                Err(_) => false,
            },
            Some(FilterKind::Select) | None => actual == wanted,
        }
    }
}

impl DataSource<Record> for MemorySource {
    fn fetch(&self, query: &IndexQuery) -> Result<PageResult<Record>> {
        if query.per_page == 0 {
            return Err(IndexViewError::data_source(
                "fetching page",
                SourceErrorKind::InvalidQuery("per_page must be positive".to_string()),
            ));
        }

        let filters: Vec<(&str, &str)> = query
            .filters
            .iter()
            .filter(|(_, v)| is_active_value(v))
            .collect();

        let matching: Vec<&Record> = self
            .records
            .iter()
            .filter(|r| self.matches_search(r, &query.search))
            .filter(|r| filters.iter().all(|(k, v)| self.matches_filter(r, k, v)))
            .collect();

        let pagination =
            Pagination::length_aware(query.page, query.per_page, matching.len() as u64);
        let start = pagination.from.map_or(matching.len(), |from| (from - 1) as usize);
        let rows: Vec<Record> = matching
            .into_iter()
            .skip(start)
            .take(pagination.page_len())
            .cloned()
            .collect();

        tracing::debug!(
            page = pagination.current_page,
            per_page = pagination.per_page,
            total = pagination.total,
            rows = rows.len(),
            "Fetched page"
        );
        Ok(PageResult { rows, pagination })
    }
}
