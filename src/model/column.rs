//! Column definitions.
//!
//! A column is a named projection of a row. Instead of looking fields up by
//! name at render time, every column carries a typed accessor; the key is kept
//! separately as the column's identity for sorting and reconciliation.

use super::record::Record;
use super::value::CellValue;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Reads the sortable/displayable value of a column from a row.
pub type Accessor<T> = Arc<dyn Fn(&T) -> CellValue + Send + Sync>;

/// Custom cell renderer producing the displayed content of a cell.
pub type CellRenderer<T> = Arc<dyn Fn(&T) -> String + Send + Sync>;

/// Horizontal alignment hint for a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

/// Optional styling hints for a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ColumnStyle {
    /// Preferred width in terminal columns
    #[serde(default)]
    pub width: Option<u16>,
    /// Cell alignment
    #[serde(default)]
    pub align: Align,
}

/// One table column.
pub struct Column<T> {
    key: String,
    label: String,
    accessor: Accessor<T>,
    render: Option<CellRenderer<T>>,
    sortable: Option<bool>,
    style: ColumnStyle,
}

impl<T> Clone for Column<T> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            label: self.label.clone(),
            accessor: Arc::clone(&self.accessor),
            render: self.render.clone(),
            sortable: self.sortable,
            style: self.style,
        }
    }
}

impl<T> fmt::Debug for Column<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("key", &self.key)
            .field("label", &self.label)
            .field("custom_render", &self.render.is_some())
            .field("sortable", &self.sortable)
            .field("style", &self.style)
            .finish()
    }
}

impl<T> Column<T> {
    /// Create a column with a typed accessor.
    pub fn new<F>(key: impl Into<String>, label: impl Into<String>, accessor: F) -> Self
    where
        F: Fn(&T) -> CellValue + Send + Sync + 'static,
    {
        Self {
            key: key.into(),
            label: label.into(),
            accessor: Arc::new(accessor),
            render: None,
            sortable: None,
            style: ColumnStyle::default(),
        }
    }

    /// Attach a custom cell renderer.
    #[must_use]
    pub fn render<F>(mut self, render: F) -> Self
    where
        F: Fn(&T) -> String + Send + Sync + 'static,
    {
        self.render = Some(Arc::new(render));
        self
    }

    /// Explicitly enable or disable sorting.
    #[must_use]
    pub const fn sortable(mut self, sortable: bool) -> Self {
        self.sortable = Some(sortable);
        self
    }

    /// Set the preferred width.
    #[must_use]
    pub const fn width(mut self, width: u16) -> Self {
        self.style.width = Some(width);
        self
    }

    /// Set the alignment.
    #[must_use]
    pub const fn align(mut self, align: Align) -> Self {
        self.style.align = align;
        self
    }

    /// Replace all style hints.
    #[must_use]
    pub const fn style(mut self, style: ColumnStyle) -> Self {
        self.style = style;
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub const fn style_hint(&self) -> ColumnStyle {
        self.style
    }

    /// Sortable unless explicitly disabled or the label is empty.
    pub fn is_sortable(&self) -> bool {
        self.sortable != Some(false) && !self.label.is_empty()
    }

    /// Whether a custom renderer is attached.
    pub const fn has_custom_render(&self) -> bool {
        self.render.is_some()
    }

    /// Read the column's value from a row.
    pub fn value(&self, row: &T) -> CellValue {
        (self.accessor)(row)
    }

    /// Content of this column's cell for a row.
    pub fn cell_text(&self, row: &T) -> String {
        match &self.render {
            Some(render) => render(row),
            None => self.value(row).display(),
        }
    }
}

impl Column<Record> {
    /// Column reading the record field named `key`.
    pub fn field(key: impl Into<String>, label: impl Into<String>) -> Self {
        let key = key.into();
        let field = key.clone();
        Self::new(key, label, move |record: &Record| record.get(&field))
    }
}

/// Serializable column description, as found in index documents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSpec {
    pub key: String,
    #[serde(default)]
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sortable: Option<bool>,
    #[serde(flatten)]
    pub style: ColumnStyle,
    /// Render template, e.g. `"{name} ({code})"`; fields in braces are substituted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
}

impl ColumnSpec {
    /// Build a record column from this description.
    pub fn to_column(&self) -> Column<Record> {
        let mut column = Column::field(self.key.clone(), self.label.clone()).style(self.style);
        if let Some(sortable) = self.sortable {
            column = column.sortable(sortable);
        }
        if let Some(template) = &self.template {
            let template = template.clone();
            column = column.render(move |record: &Record| fill_template(&template, record));
        }
        column
    }
}

/// Substitute `{field}` placeholders with record values.
fn fill_template(template: &str, record: &Record) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        match after.find('}') {
            Some(end) => {
                out.push_str(&record.get(&after[..end]).display());
                rest = &after[end + 1..];
            }
            None => {
                out.push_str(&rest[start..]);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}
