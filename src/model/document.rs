//! Index documents: a JSON (or YAML) description of one index page and its rows.
//!
//! ```json
//! {
//!   "title": "Ruangan",
//!   "description": "Daftar ruang rapat",
//!   "actions": [{"label": "Tambah", "href": "/rooms/create"}],
//!   "columns": [{"key": "name", "label": "Nama"}, {"key": "code", "label": "Kode"}],
//!   "filters": [{"key": "floor", "type": "select", "options": [{"value": "1", "label": "Lantai 1"}]}],
//!   "searchable": ["name", "code"],
//!   "rows": [{"id": 1, "name": "Budi", "code": null}]
//! }
//! ```

use super::action::PageAction;
use super::column::{Column, ColumnSpec};
use super::filter::FilterField;
use super::record::Record;
use crate::error::{DocumentErrorKind, ErrorContext, IndexViewError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexDocument {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub actions: Vec<PageAction>,
    pub columns: Vec<ColumnSpec>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub filters: Vec<FilterField>,
    /// Fields the search box matches against; empty means every field
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub searchable: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub empty_message: Option<String>,
    #[serde(default)]
    pub rows: Vec<Record>,
}

impl IndexDocument {
    /// Parse and validate a document from a JSON string.
    pub fn from_json(content: &str) -> Result<Self> {
        let doc: Self = serde_json::from_str(content)?;
        doc.validate()?;
        Ok(doc)
    }

    /// Parse and validate a document from a YAML string.
    pub fn from_yaml(content: &str) -> Result<Self> {
        let doc: Self = serde_yaml::from_str(content).map_err(|e| {
            IndexViewError::document(
                "parsing YAML",
                DocumentErrorKind::InvalidYaml(e.to_string()),
            )
        })?;
        doc.validate()?;
        Ok(doc)
    }

    /// Load and validate a document from disk. `.yaml` and `.yml` files are
    /// read as YAML, everything else as JSON.
    pub fn load(path: &Path) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).map_err(|e| IndexViewError::io(path, e))?;
        let is_yaml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"));
        let parsed = if is_yaml {
            Self::from_yaml(&content)
        } else {
            Self::from_json(&content)
        };
        parsed.with_context(|| format!("loading {}", path.display()))
    }

    /// Reject duplicate row ids and duplicate column keys.
    pub fn validate(&self) -> Result<()> {
        let mut keys = HashSet::new();
        for column in &self.columns {
            if !keys.insert(column.key.as_str()) {
                return Err(IndexViewError::document(
                    "validating columns",
                    DocumentErrorKind::DuplicateColumn(column.key.clone()),
                ));
            }
        }

        let mut ids = HashSet::new();
        for row in &self.rows {
            if !ids.insert(&row.id) {
                return Err(IndexViewError::document(
                    "validating rows",
                    DocumentErrorKind::DuplicateId(row.id.to_string()),
                ));
            }
        }
        Ok(())
    }

    /// Record columns built from the column specs.
    pub fn build_columns(&self) -> Vec<Column<Record>> {
        self.columns.iter().map(ColumnSpec::to_column).collect()
    }
}
