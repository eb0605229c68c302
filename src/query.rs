//! Query-string convention between an index page and its server.
//!
//! The page itself never talks to the server. Its caller folds each
//! [`IndexEvent`] into an [`IndexQuery`] and, when [`IndexQuery::apply`]
//! says so, navigates to the same route with the new query string:
//!
//! ```text
//! ?page=2&per_page=25&search=budi&status=active
//! ```

use crate::model::{FilterValues, SEARCH_KEY, is_active_value};
use crate::table::IndexEvent;
use url::form_urlencoded;

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_PER_PAGE: u32 = 10;

/// Request parameters of one index page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexQuery {
    pub page: u32,
    pub per_page: u32,
    pub search: String,
    /// Every other filter, excluding `search`
    pub filters: FilterValues,
}

impl Default for IndexQuery {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            per_page: DEFAULT_PER_PAGE,
            search: String::new(),
            filters: FilterValues::new(),
        }
    }
}

impl IndexQuery {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn with_per_page(mut self, per_page: u32) -> Self {
        self.per_page = per_page;
        self
    }

    /// Fold an event into the query. Returns `true` when a request is due.
    pub fn apply(&mut self, event: &IndexEvent) -> bool {
        match event {
            IndexEvent::PageChange(page) => {
                self.page = (*page).max(1);
                true
            }
            IndexEvent::PerPageChange(per_page) => {
                self.per_page = (*per_page).max(1);
                self.page = 1;
                true
            }
            IndexEvent::FilterSubmit(values) => {
                let mut filters = values.clone();
                if let Some(search) = filters.remove(SEARCH_KEY) {
                    self.search = search;
                }
                self.filters = filters;
                self.page = 1;
                true
            }
            IndexEvent::FilterReset => {
                self.filters.clear();
                self.search.clear();
                self.page = 1;
                true
            }
            IndexEvent::SearchChange(search) => {
                self.search.clone_from(search);
                false
            }
            IndexEvent::FilterChange { .. } | IndexEvent::Action(_) => false,
        }
    }

    /// Filters plus the search text, as the server sees them.
    pub fn filter_values(&self) -> FilterValues {
        let mut values = self.filters.clone();
        if !self.search.is_empty() {
            values.set(SEARCH_KEY, self.search.as_str());
        }
        values
    }

    /// Encode as `application/x-www-form-urlencoded`, omitting empty and
    /// `"all"` values.
    pub fn to_query_string(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        serializer.append_pair("page", &self.page.to_string());
        serializer.append_pair("per_page", &self.per_page.to_string());
        if !self.search.is_empty() {
            serializer.append_pair(SEARCH_KEY, &self.search);
        }
        for (key, value) in self.filters.iter() {
            if key != SEARCH_KEY && is_active_value(value) {
                serializer.append_pair(key, value);
            }
        }
        serializer.finish()
    }

    /// Decode a query string. A leading `?` is allowed.
    ///
    /// Both `per_page` and `perPage` are accepted; invalid numbers fall back
    /// to the defaults and unknown keys become filters.
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let mut parsed = Self::default();
        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            match key.as_ref() {
                "page" => parsed.page = parse_positive(&value).unwrap_or(DEFAULT_PAGE),
                "per_page" | "perPage" => {
                    parsed.per_page = parse_positive(&value).unwrap_or(DEFAULT_PER_PAGE);
                }
                SEARCH_KEY => parsed.search = value.into_owned(),
                _ => {
                    if is_active_value(&value) {
                        parsed.filters.set(key.into_owned(), value.into_owned());
                    }
                }
            }
        }
        parsed
    }
}

fn parse_positive(value: &str) -> Option<u32> {
    value.trim().parse::<u32>().ok().filter(|&n| n > 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let query = IndexQuery::new();
        assert_eq!(query.to_query_string(), "page=1&per_page=10");
    }

    #[test]
    fn test_filter_submit_takes_search_and_resets_page() {
        let mut query = IndexQuery::new();
        query.page = 4;
        let values: FilterValues = [("search", "budi"), ("unit", "IT")].into_iter().collect();
        assert!(query.apply(&IndexEvent::FilterSubmit(values)));
        assert_eq!(query.page, 1);
        assert_eq!(query.search, "budi");
        assert_eq!(query.filters.get("unit"), "IT");
        assert_eq!(query.filters.get("search"), "");
    }

    #[test]
    fn test_search_change_does_not_request() {
        let mut query = IndexQuery::new();
        assert!(!query.apply(&IndexEvent::SearchChange("ani".into())));
        assert_eq!(query.search, "ani");
        assert!(!query.apply(&IndexEvent::FilterChange {
            key: "unit".into(),
            value: "HR".into()
        }));
        assert!(query.filters.is_empty());
    }

    #[test]
    fn test_encoding_skips_sentinels() {
        let mut query = IndexQuery::new();
        query.search = "budi santoso".into();
        query.filters.set("status", "all");
        query.filters.set("unit", "R&D");
        query.filters.set("category", "");
        assert_eq!(
            query.to_query_string(),
            "page=1&per_page=10&search=budi+santoso&unit=R%26D"
        );
    }

    #[test]
    fn test_parse_invalid_numbers_fall_back() {
        let query = IndexQuery::parse("?page=abc&perPage=0&status=all");
        assert_eq!(query.page, DEFAULT_PAGE);
        assert_eq!(query.per_page, DEFAULT_PER_PAGE);
        assert!(query.filters.is_empty());
    }
}
