//! Integration tests for the in-memory data source against the employee
//! fixture (47 rows, three units, six rows without a code).

use index_view::error::{IndexViewError, SourceErrorKind};
use index_view::model::IndexDocument;
use index_view::query::IndexQuery;
use index_view::source::{DataSource, MemorySource};
use std::path::{Path, PathBuf};

const FIXTURES_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures");

fn fixture_path(name: &str) -> PathBuf {
    Path::new(FIXTURES_DIR).join(name)
}

fn source() -> MemorySource {
    let document = IndexDocument::load(&fixture_path("employees.json")).expect("load fixture");
    MemorySource::from_document(&document)
}

fn query(raw: &str) -> IndexQuery {
    IndexQuery::parse(raw)
}

#[test]
fn test_fixture_loads() {
    assert_eq!(source().len(), 47);
}

#[test]
fn test_pages_of_ten() {
    let source = source();
    let first = source.fetch(&query("page=1&per_page=10")).unwrap();
    assert_eq!(first.pagination.last_page, 5);
    assert_eq!((first.pagination.from, first.pagination.to), (Some(1), Some(10)));
    assert_eq!(first.rows.len(), 10);

    let last = source.fetch(&query("page=5&per_page=10")).unwrap();
    assert_eq!((last.pagination.from, last.pagination.to), (Some(41), Some(47)));
    assert_eq!(last.rows.len(), 7);
}

#[test]
fn test_page_past_the_end_is_empty() {
    let result = source().fetch(&query("page=9&per_page=10")).unwrap();
    assert!(result.is_empty());
    assert_eq!(result.pagination.total, 47);
    assert_eq!(result.pagination.from, None);
}

#[test]
fn test_select_filter() {
    let result = source().fetch(&query("per_page=100&unit=IT")).unwrap();
    assert_eq!(result.pagination.total, 15);
    assert!(result.rows.iter().all(|r| r.get("unit").display() == "IT"));
}

#[test]
fn test_all_sentinel_is_ignored() {
    let result = source().fetch(&query("per_page=100&unit=all")).unwrap();
    assert_eq!(result.pagination.total, 47);
}

#[test]
fn test_search_is_case_insensitive_and_limited_to_searchable() {
    let source = source();
    let by_name = source.fetch(&query("search=ANI")).unwrap();
    assert!(by_name.pagination.total >= 1);
    assert!(
        by_name
            .rows
            .iter()
            .all(|r| r.get("name").display().to_lowercase().contains("ani"))
    );

    // "IT" only appears in the unit column, which is not searchable
    let by_unit = source.fetch(&query("search=IT&per_page=100")).unwrap();
    assert!(
        by_unit
            .rows
            .iter()
            .all(|r| r.get("name").display().to_lowercase().contains("it"))
    );
}

#[test]
fn test_date_filter() {
    let source = source();
    let result = source.fetch(&query("per_page=100&joined=2023-02-02")).unwrap();
    assert!(result.pagination.total >= 1);
    assert!(
        result
            .rows
            .iter()
            .all(|r| r.get("joined").display() == "2023-02-02")
    );

    let invalid = source.fetch(&query("joined=yesterday")).unwrap();
    assert!(invalid.is_empty());
    assert_eq!(invalid.pagination.last_page, 1);
}

#[test]
fn test_no_match_gives_single_empty_page() {
    let result = source().fetch(&query("search=zzz")).unwrap();
    assert!(result.is_empty());
    assert_eq!(result.pagination.total, 0);
    assert_eq!(result.pagination.last_page, 1);
    assert_eq!((result.pagination.from, result.pagination.to), (None, None));
}

#[test]
fn test_zero_per_page_is_rejected() {
    let mut query = IndexQuery::new();
    query.per_page = 0;
    let err = source().fetch(&query).unwrap_err();
    assert!(matches!(
        err,
        IndexViewError::Source {
            source: SourceErrorKind::InvalidQuery(_),
            ..
        }
    ));
}
