//! Property-based tests for the client-side sort.
//!
//! Cycle totality, null placement, non-mutation of the input and natural
//! ordering of numeric text.

use index_view::model::{Column, Record};
use index_view::table::{IndexPage, SortDirection, SortState, sort_rows};
use proptest::prelude::*;

/// A cell: missing field, explicit null, or a short value.
#[derive(Debug, Clone)]
enum Cell {
    Missing,
    Null,
    Text(String),
    Number(i64),
}

fn cell_strategy() -> impl Strategy<Value = Cell> {
    prop_oneof![
        Just(Cell::Missing),
        Just(Cell::Null),
        "[a-zA-Z0-9 ]{0,6}".prop_map(Cell::Text),
        (-500i64..500).prop_map(Cell::Number),
    ]
}

fn records(cells: &[Cell]) -> Vec<Record> {
    cells
        .iter()
        .enumerate()
        .map(|(i, cell)| {
            let record = Record::new(i as i64);
            match cell {
                Cell::Missing => record,
                Cell::Null => record.with("v", serde_json::Value::Null),
                Cell::Text(s) => record.with("v", s.as_str()),
                Cell::Number(n) => record.with("v", *n),
            }
        })
        .collect()
}

fn is_null(record: &Record) -> bool {
    record.get("v").is_null()
}

fn columns() -> Vec<Column<Record>> {
    vec![Column::field("v", "Nilai")]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn three_clicks_return_to_unsorted(label in "[A-Za-z]{1,12}") {
        let mut page: IndexPage<Record> = IndexPage::new("t")
            .with_columns(vec![Column::field("v", label)]);
        prop_assert!(page.click_header("v"));
        let first = page.sort_state().clone();
        page.click_header("v");
        page.click_header("v");
        prop_assert_eq!(page.sort_state(), &SortState::new());
        page.click_header("v");
        prop_assert_eq!(page.sort_state(), &first);
    }

    #[test]
    fn nulls_always_last(cells in prop::collection::vec(cell_strategy(), 0..40)) {
        let rows = records(&cells);
        let columns = columns();
        for direction in [SortDirection::Asc, SortDirection::Desc] {
            let sorted = sort_rows(&rows, &columns, &SortState::sorted_by("v", direction));
            prop_assert_eq!(sorted.len(), rows.len());
            if let Some(first_null) = sorted.iter().position(|r| is_null(r)) {
                prop_assert!(sorted[first_null..].iter().all(|r| is_null(r)));
            }
        }
    }

    #[test]
    fn sorting_leaves_input_untouched(cells in prop::collection::vec(cell_strategy(), 0..40)) {
        let rows = records(&cells);
        let before = rows.clone();
        let columns = columns();
        let _ = sort_rows(&rows, &columns, &SortState::sorted_by("v", SortDirection::Desc));
        prop_assert_eq!(&rows, &before);
    }

    #[test]
    fn integers_sort_numerically(values in prop::collection::vec(0u32..10_000, 1..30)) {
        let rows: Vec<Record> = values
            .iter()
            .enumerate()
            .map(|(i, v)| Record::new(i as i64).with("v", v.to_string()))
            .collect();
        let columns = columns();
        let sorted = sort_rows(&rows, &columns, &SortState::sorted_by("v", SortDirection::Asc));
        let got: Vec<u32> = sorted
            .iter()
            .map(|r| r.get("v").display().parse().unwrap())
            .collect();
        let mut expected = values.clone();
        expected.sort_unstable();
        prop_assert_eq!(got, expected);
    }
}

#[test]
fn numeric_text_is_not_lexicographic() {
    let rows = records(&[
        Cell::Text("2".to_string()),
        Cell::Text("10".to_string()),
        Cell::Text("1".to_string()),
    ]);
    let columns = columns();
    let sorted = sort_rows(&rows, &columns, &SortState::sorted_by("v", SortDirection::Asc));
    let order: Vec<String> = sorted.iter().map(|r| r.get("v").display()).collect();
    assert_eq!(order, vec!["1", "2", "10"]);
}

#[test]
fn sort_is_stable_for_equal_keys() {
    let rows = vec![
        Record::new(1).with("v", "a"),
        Record::new(2).with("v", "a"),
        Record::new(3).with("v", "a"),
    ];
    let columns = columns();
    let sorted = sort_rows(&rows, &columns, &SortState::sorted_by("v", SortDirection::Desc));
    let ids: Vec<i64> = sorted
        .iter()
        .map(|r| match r.id {
            index_view::RowId::Number(n) => n,
            index_view::RowId::Text(_) => -1,
        })
        .collect();
    assert_eq!(ids, vec![1, 2, 3]);
}
