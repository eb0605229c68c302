//! Filter field descriptions and filter value maps.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Reserved filter key holding the search text.
pub const SEARCH_KEY: &str = "search";

/// Sentinel used by select inputs for "no filter".
pub const ALL_SENTINEL: &str = "all";

/// Input type of a filter field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterKind {
    #[default]
    Text,
    Select,
    Date,
}

/// One choice of a select filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOption {
    pub value: String,
    pub label: String,
}

impl FilterOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// One filterable dimension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterField {
    pub key: String,
    #[serde(rename = "type", default)]
    pub kind: FilterKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<FilterOption>,
}

impl FilterField {
    pub fn text(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            kind: FilterKind::Text,
            label: None,
            placeholder: None,
            options: Vec::new(),
        }
    }

    pub fn date(key: impl Into<String>) -> Self {
        Self {
            kind: FilterKind::Date,
            ..Self::text(key)
        }
    }

    pub fn select(key: impl Into<String>, options: Vec<FilterOption>) -> Self {
        Self {
            kind: FilterKind::Select,
            options,
            ..Self::text(key)
        }
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    #[must_use]
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Label to display, falling back to the key.
    pub fn display_label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.key)
    }

    /// Label of the option holding `value`, if any.
    pub fn option_label(&self, value: &str) -> Option<&str> {
        self.options
            .iter()
            .find(|o| o.value == value)
            .map(|o| o.label.as_str())
    }
}

/// Whether a filter value constrains anything.
pub fn is_active_value(value: &str) -> bool {
    !value.is_empty() && value != ALL_SENTINEL
}

/// Current value of every filter, keyed by filter key.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilterValues(IndexMap<String, String>);

impl FilterValues {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Value for a key; unset keys read as the empty string.
    pub fn get(&self, key: &str) -> &str {
        self.0.get(key).map_or("", String::as_str)
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.0.shift_remove(key)
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Entries that actually constrain results, excluding the search key.
    pub fn active(&self) -> impl Iterator<Item = (&str, &str)> {
        self.iter()
            .filter(|(k, v)| *k != SEARCH_KEY && is_active_value(v))
    }

    /// Number of active filters, excluding search.
    pub fn active_count(&self) -> usize {
        self.active().count()
    }

    pub fn has_active(&self) -> bool {
        self.active().next().is_some()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FilterValues {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_count_excludes_search_and_sentinels() {
        let values: FilterValues = [
            ("search", "x"),
            ("status", "all"),
            ("category", ""),
            ("unit", "IT"),
        ]
        .into_iter()
        .collect();
        assert_eq!(values.active_count(), 1);
        assert!(values.has_active());
    }

    #[test]
    fn test_no_active_filters() {
        let values: FilterValues = [("search", "budi"), ("status", "all")].into_iter().collect();
        assert_eq!(values.active_count(), 0);
        assert!(!values.has_active());
    }

    #[test]
    fn test_get_unset_is_empty() {
        let values = FilterValues::new();
        assert_eq!(values.get("status"), "");
    }

    #[test]
    fn test_filter_field_deserialize() {
        let field: FilterField = serde_json::from_str(
            r#"{"key": "status", "type": "select", "label": "Status",
                "options": [{"value": "active", "label": "Aktif"}]}"#,
        )
        .unwrap();
        assert_eq!(field.kind, FilterKind::Select);
        assert_eq!(field.option_label("active"), Some("Aktif"));
        assert_eq!(FilterField::date("joined_at").display_label(), "joined_at");
    }

    #[test]
    fn test_values_serialize_as_map() {
        let values: FilterValues = [("unit", "IT")].into_iter().collect();
        assert_eq!(serde_json::to_string(&values).unwrap(), r#"{"unit":"IT"}"#);
    }
}
