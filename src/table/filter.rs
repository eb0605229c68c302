//! Filter and search state of an index page.
//!
//! The state holds the values currently shown in the inputs. Nothing is
//! validated here: the server decides what a filter means, and `""` is the
//! canonical "cleared" value.

use super::event::IndexEvent;
use crate::model::{ALL_SENTINEL, FilterField, FilterKind, FilterValues};

#[derive(Debug, Clone, Default)]
pub struct FilterState {
    fields: Vec<FilterField>,
    values: FilterValues,
    applied: FilterValues,
    search: String,
    panel_open: bool,
}

impl FilterState {
    pub fn new(fields: Vec<FilterField>) -> Self {
        Self {
            fields,
            ..Self::default()
        }
    }

    /// Seed from the values the server reports as applied.
    #[must_use]
    pub fn with_values(mut self, values: FilterValues) -> Self {
        self.set_applied(values);
        self
    }

    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn fields(&self) -> &[FilterField] {
        &self.fields
    }

    pub fn field(&self, key: &str) -> Option<&FilterField> {
        self.fields.iter().find(|f| f.key == key)
    }

    pub fn has_fields(&self) -> bool {
        !self.fields.is_empty()
    }

    /// Values currently shown in the inputs.
    pub const fn values(&self) -> &FilterValues {
        &self.values
    }

    /// Values last reported as applied by the caller.
    pub const fn applied(&self) -> &FilterValues {
        &self.applied
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub const fn is_panel_open(&self) -> bool {
        self.panel_open
    }

    pub fn toggle_panel(&mut self) {
        self.panel_open = !self.panel_open;
    }

    pub fn set_panel_open(&mut self, open: bool) {
        self.panel_open = open;
    }

    /// Replace both shown and applied values, e.g. after a server round trip.
    pub fn set_applied(&mut self, values: FilterValues) {
        self.values = values.clone();
        self.applied = values;
    }

    /// Record a new value for `key`.
    ///
    /// Select fields translate the `"all"` sentinel into `""`.
    pub fn change(&mut self, key: &str, value: &str) -> IndexEvent {
        let is_select = self
            .field(key)
            .is_some_and(|f| f.kind == FilterKind::Select);
        let value = if is_select && value == ALL_SENTINEL {
            ""
        } else {
            value
        };
        self.values.set(key, value);
        IndexEvent::FilterChange {
            key: key.to_string(),
            value: value.to_string(),
        }
    }

    /// Update the search text. Independent of whether the panel is open.
    pub fn set_search(&mut self, text: impl Into<String>) -> IndexEvent {
        self.search = text.into();
        IndexEvent::SearchChange(self.search.clone())
    }

    /// Apply the current values.
    pub fn submit(&self) -> IndexEvent {
        IndexEvent::FilterSubmit(self.values.clone())
    }

    /// Clear every filter value and the search text.
    pub fn reset(&mut self) -> IndexEvent {
        self.values.clear();
        self.search.clear();
        IndexEvent::FilterReset
    }

    pub fn active_filter_count(&self) -> usize {
        self.values.active_count()
    }

    pub fn has_active_filters(&self) -> bool {
        self.values.has_active()
    }

    /// Value of `key` for display; select fields show the option label.
    pub fn display_value(&self, key: &str) -> String {
        let value = self.values.get(key);
        match self.field(key) {
            Some(field) if field.kind == FilterKind::Select => field
                .option_label(value)
                .map_or_else(|| value.to_string(), str::to_string),
            _ => value.to_string(),
        }
    }
}
