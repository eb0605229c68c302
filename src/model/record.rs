//! Rows: the `Row` trait and the dynamic `Record` row type.

use super::value::{CellValue, RowId};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A record displayed as one table line.
///
/// The only requirement is a unique id, used to key rendered rows.
pub trait Row {
    /// The row's unique identifier.
    fn id(&self) -> RowId;
}

/// A dynamic row decoded from JSON: an id plus ordered named fields.
///
/// ```ignore
/// let record: Record = serde_json::from_str(r#"{"id": 1, "name": "Budi", "code": null}"#)?;
/// assert_eq!(record.get("name").display(), "Budi");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: RowId,
    #[serde(flatten)]
    pub fields: IndexMap<String, serde_json::Value>,
}

impl Record {
    /// Create an empty record.
    pub fn new(id: impl Into<RowId>) -> Self {
        Self {
            id: id.into(),
            fields: IndexMap::new(),
        }
    }

    /// Builder-style field setter.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// Read a field; missing fields read as null. `id` reads the row id.
    #[must_use]
    pub fn get(&self, key: &str) -> CellValue {
        if key == "id" {
            return match &self.id {
                RowId::Number(n) => CellValue::Integer(*n),
                RowId::Text(s) => CellValue::Text(s.clone()),
            };
        }
        self.fields.get(key).map_or(CellValue::Null, CellValue::from)
    }

    /// Check whether the record carries a field, including explicit nulls.
    #[must_use]
    pub fn has_field(&self, key: &str) -> bool {
        key == "id" || self.fields.contains_key(key)
    }
}

impl Row for Record {
    fn id(&self) -> RowId {
        self.id.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_record_deserialize_flattened() {
        let record: Record =
            serde_json::from_value(json!({"id": 1, "name": "Budi", "code": null})).unwrap();
        assert_eq!(record.id, RowId::Number(1));
        assert_eq!(record.get("name"), CellValue::Text("Budi".into()));
        assert!(record.get("code").is_null());
        assert!(record.has_field("code"));
        assert!(record.get("missing").is_null());
        assert!(!record.has_field("missing"));
    }

    #[test]
    fn test_record_field_order_preserved() {
        let record = Record::new(7).with("b", 1).with("a", 2);
        let keys: Vec<_> = record.fields.keys().cloned().collect();
        assert_eq!(keys, vec!["b", "a"]);
        assert_eq!(record.get("id"), CellValue::Integer(7));
    }
}
