//! Renderer-independent description of what the table shows.
//!
//! Both the terminal UI and the plain-text renderer draw from these types, so
//! loading/empty precedence and cell content are decided in one place.

use super::sort::{SortIndicator, SortState, sort_rows};
use crate::model::{Column, ColumnStyle, Row, RowId};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// User-facing strings of the index page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct Labels {
    /// Word between the range and the total ("11–20 dari 47")
    pub of: String,
    /// Prefix of the page indicator
    pub page: String,
    /// Label of the per-page selector
    pub per_page: String,
    /// Default empty-state message
    pub no_data: String,
    /// Loading indicator text
    pub loading: String,
    /// Search input placeholder
    pub search_placeholder: String,
    /// Filter toggle label
    pub filter: String,
    /// Reset button label
    pub reset: String,
    /// Bell dropdown title
    pub notifications: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            of: "dari".to_string(),
            page: "Halaman".to_string(),
            per_page: "Per halaman".to_string(),
            no_data: "Tidak ada data".to_string(),
            loading: "Memuat...".to_string(),
            search_placeholder: "Cari...".to_string(),
            filter: "Filter".to_string(),
            reset: "Reset".to_string(),
            notifications: "Notifikasi".to_string(),
        }
    }
}

/// One header cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderCell {
    pub key: String,
    pub label: String,
    /// `None` for columns that cannot be sorted
    pub indicator: Option<SortIndicator>,
    pub style: ColumnStyle,
}

impl HeaderCell {
    /// Label followed by the sort indicator, if any.
    pub fn text(&self) -> String {
        match self.indicator {
            Some(indicator) => format!("{} {}", self.label, indicator.symbol()),
            None => self.label.clone(),
        }
    }
}

/// One rendered body row, keyed by the row id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BodyRow {
    pub id: RowId,
    pub cells: Vec<String>,
}

/// Table body state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableBody {
    /// Spinner row spanning every column
    Loading,
    /// Single centered message row
    Empty {
        message: String,
        icon: Option<String>,
    },
    Rows(Vec<BodyRow>),
}

impl TableBody {
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn rows(&self) -> &[BodyRow] {
        match self {
            Self::Rows(rows) => rows,
            _ => &[],
        }
    }
}

/// What fills the table area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableArea {
    Table {
        header: Vec<HeaderCell>,
        body: TableBody,
    },
    /// Caller-rendered lines replacing the table
    Custom(Vec<String>),
}

pub fn header_cells<T>(columns: &[Column<T>], sort: &SortState) -> Vec<HeaderCell> {
    columns
        .iter()
        .map(|column| HeaderCell {
            key: column.key().to_string(),
            label: column.label().to_string(),
            indicator: column
                .is_sortable()
                .then(|| sort.indicator_for(column.key())),
            style: column.style_hint(),
        })
        .collect()
}

/// Settings deciding the body's non-row states.
#[derive(Debug, Clone, Copy)]
pub struct BodyOptions<'a> {
    pub is_loading: bool,
    pub empty_message: &'a str,
    pub empty_icon: Option<&'a str>,
}

/// Build the body. Loading wins over everything and skips sorting.
pub fn table_body<T: Row>(
    rows: &[T],
    columns: &[Column<T>],
    sort: &SortState,
    options: BodyOptions<'_>,
) -> TableBody {
    if options.is_loading {
        return TableBody::Loading;
    }
    let sorted = sort_rows(rows, columns, sort);
    if sorted.is_empty() {
        return TableBody::Empty {
            message: options.empty_message.to_string(),
            icon: options.empty_icon.map(str::to_string),
        };
    }
    TableBody::Rows(
        sorted
            .into_iter()
            .map(|row| BodyRow {
                id: row.id(),
                cells: columns.iter().map(|c| c.cell_text(row)).collect(),
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Record;
    use crate::table::sort::SortDirection;

    const OPTIONS: BodyOptions<'static> = BodyOptions {
        is_loading: false,
        empty_message: "Tidak ada data",
        empty_icon: None,
    };

    #[test]
    fn test_loading_takes_precedence_over_empty() {
        let columns = vec![Column::<Record>::field("name", "Nama")];
        let body = table_body(
            &[],
            &columns,
            &SortState::new(),
            BodyOptions {
                is_loading: true,
                ..OPTIONS
            },
        );
        assert_eq!(body, TableBody::Loading);
    }

    #[test]
    fn test_empty_message() {
        let columns = vec![Column::<Record>::field("name", "Nama")];
        let body = table_body(&[], &columns, &SortState::new(), OPTIONS);
        assert_eq!(
            body,
            TableBody::Empty {
                message: "Tidak ada data".to_string(),
                icon: None
            }
        );
    }

    #[test]
    fn test_rows_keyed_and_blank_for_missing_fields() {
        let columns = vec![
            Column::field("name", "Nama"),
            Column::field("nonexistent", "X"),
        ];
        let rows = vec![Record::new(5).with("name", "Budi")];
        let body = table_body(&rows, &columns, &SortState::new(), OPTIONS);
        assert_eq!(
            body.rows(),
            &[BodyRow {
                id: RowId::Number(5),
                cells: vec!["Budi".to_string(), String::new()],
            }]
        );
    }

    #[test]
    fn test_header_indicators() {
        let columns = vec![
            Column::<Record>::field("name", "Nama"),
            Column::field("code", "Kode").sortable(false),
            Column::field("actions", ""),
        ];
        let sort = SortState::sorted_by("name", SortDirection::Asc);
        let header = header_cells(&columns, &sort);
        assert_eq!(header[0].indicator, Some(SortIndicator::Ascending));
        assert_eq!(header[0].text(), "Nama ▲");
        assert_eq!(header[1].indicator, None);
        assert_eq!(header[2].indicator, None);
    }
}
