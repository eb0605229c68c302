//! Row identifiers and cell values.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// Unique identifier of a row, as handed over by the server.
///
/// Ids are either numeric primary keys or strings (UUIDs, slugs).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RowId {
    Number(i64),
    Text(String),
}

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for RowId {
    fn from(n: i64) -> Self {
        Self::Number(n)
    }
}

impl From<&str> for RowId {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for RowId {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

/// A value read off a row by a column accessor.
///
/// A field that is missing from the row and a field that is explicitly
/// `null` both read as [`CellValue::Null`].
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CellValue {
    #[default]
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    Text(String),
}

impl CellValue {
    /// Check whether the value is null or missing.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Text form used for collation; `None` for null values.
    #[must_use]
    pub fn sort_text(&self) -> Option<Cow<'_, str>> {
        match self {
            Self::Null => None,
            Self::Text(s) => Some(Cow::Borrowed(s.as_str())),
            other => Some(Cow::Owned(other.display())),
        }
    }

    /// The value as it appears in a cell; null renders blank.
    #[must_use]
    pub fn display(&self) -> String {
        match self {
            Self::Null => String::new(),
            Self::Bool(b) => b.to_string(),
            Self::Integer(n) => n.to_string(),
            Self::Float(f) => format_float(*f),
            Self::Text(s) => s.clone(),
        }
    }

    /// The value as a filter/search string, matching how the server compares it.
    #[must_use]
    pub fn as_filter_string(&self) -> String {
        self.display()
    }
}

/// Whole floats print without a trailing `.0`.
fn format_float(f: f64) -> String {
    if f.is_finite() && f.fract() == 0.0 && f.abs() < 1e15 {
        format!("{}", f as i64)
    } else {
        format!("{f}")
    }
}

impl From<&serde_json::Value> for CellValue {
    fn from(value: &serde_json::Value) -> Self {
        use serde_json::Value;
        match value {
            Value::Null => Self::Null,
            Value::Bool(b) => Self::Bool(*b),
            Value::Number(n) => n
                .as_i64()
                .map(Self::Integer)
                .or_else(|| n.as_f64().map(Self::Float))
                .unwrap_or(Self::Null),
            Value::String(s) => Self::Text(s.clone()),
            Value::Array(_) | Value::Object(_) => Self::Text(value.to_string()),
        }
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<i64> for CellValue {
    fn from(n: i64) -> Self {
        Self::Integer(n)
    }
}

impl From<f64> for CellValue {
    fn from(f: f64) -> Self {
        Self::Float(f)
    }
}

impl From<bool> for CellValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl<T: Into<Self>> From<Option<T>> for CellValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_row_id_untagged() {
        let n: RowId = serde_json::from_value(json!(12)).unwrap();
        let s: RowId = serde_json::from_value(json!("emp-7")).unwrap();
        assert_eq!(n, RowId::Number(12));
        assert_eq!(s, RowId::Text("emp-7".to_string()));
        assert_eq!(n.to_string(), "12");
    }

    #[test]
    fn test_cell_value_from_json() {
        assert_eq!(CellValue::from(&json!(null)), CellValue::Null);
        assert_eq!(CellValue::from(&json!(3)), CellValue::Integer(3));
        assert_eq!(CellValue::from(&json!(2.5)), CellValue::Float(2.5));
        assert_eq!(CellValue::from(&json!("A1")), CellValue::Text("A1".into()));
        assert_eq!(
            CellValue::from(&json!(["x"])),
            CellValue::Text("[\"x\"]".into())
        );
    }

    #[test]
    fn test_display_and_sort_text() {
        assert_eq!(CellValue::Null.display(), "");
        assert!(CellValue::Null.sort_text().is_none());
        assert_eq!(CellValue::Float(4.0).display(), "4");
        assert_eq!(CellValue::Float(0.25).display(), "0.25");
        assert_eq!(CellValue::Bool(true).display(), "true");
        assert_eq!(CellValue::Integer(10).sort_text().as_deref(), Some("10"));
    }

    #[test]
    fn test_from_option() {
        let none: Option<&str> = None;
        assert!(CellValue::from(none).is_null());
        assert_eq!(CellValue::from(Some(5_i64)), CellValue::Integer(5));
    }
}
