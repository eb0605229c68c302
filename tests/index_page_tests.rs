//! Integration tests for the index page state holder: filters, pagination
//! controls, loading/empty precedence and the end-to-end sort scenario.

use index_view::model::{Column, FilterField, FilterOption, FilterValues, Pagination, Record};
use index_view::query::IndexQuery;
use index_view::table::{IndexEvent, IndexPage, PageControl, SortIndicator, TableBody};
use index_view::RowId;

fn employees() -> Vec<Record> {
    vec![
        Record::new(1).with("name", "Budi").with("code", serde_json::Value::Null),
        Record::new(2).with("name", "Ani").with("code", "A1"),
        Record::new(3).with("name", "Citra").with("code", "B2"),
    ]
}

fn employee_page() -> IndexPage<Record> {
    IndexPage::new("Karyawan")
        .with_columns(vec![Column::field("name", "Nama"), Column::field("code", "Kode")])
        .with_data(employees(), None)
}

fn names(page: &IndexPage<Record>) -> Vec<String> {
    page.sorted_rows()
        .iter()
        .map(|r| r.get("name").display())
        .collect()
}

#[test]
fn test_code_column_click_cycle() {
    let mut page = employee_page();

    page.click_header("code");
    assert_eq!(names(&page), ["Ani", "Citra", "Budi"]);

    page.click_header("code");
    assert_eq!(names(&page), ["Citra", "Ani", "Budi"]);

    page.click_header("code");
    assert_eq!(names(&page), ["Budi", "Ani", "Citra"]);
    assert!(!page.sort_state().is_sorted());
}

#[test]
fn test_indicators_follow_sort() {
    let mut page = employee_page();
    page.click_header("name");
    let header = page.header();
    assert_eq!(header[0].indicator, Some(SortIndicator::Ascending));
    assert_eq!(header[1].indicator, Some(SortIndicator::Neutral));
    assert_eq!(header[0].text(), "Nama ▲");

    page.click_header("code");
    let header = page.header();
    assert_eq!(header[0].indicator, Some(SortIndicator::Neutral));
    assert_eq!(header[1].indicator, Some(SortIndicator::Ascending));
}

#[test]
fn test_unsortable_column_has_no_indicator_and_ignores_clicks() {
    let mut page: IndexPage<Record> = IndexPage::new("Karyawan")
        .with_columns(vec![Column::field("name", "Nama").sortable(false)])
        .with_data(employees(), None);
    assert!(!page.click_header("name"));
    assert!(!page.click_header("missing"));
    assert_eq!(page.header()[0].indicator, None);
    assert_eq!(names(&page), ["Budi", "Ani", "Citra"]);
}

#[test]
fn test_sort_survives_new_page_of_data() {
    let mut page = employee_page();
    page.click_header("code");
    page.set_data(
        vec![
            Record::new(4).with("name", "Dewi").with("code", "C3"),
            Record::new(5).with("name", "Eko").with("code", "A2"),
        ],
        Some(Pagination::length_aware(2, 2, 5)),
    );
    assert_eq!(page.sort_state().key(), Some("code"));
    assert_eq!(names(&page), ["Eko", "Dewi"]);
}

#[test]
fn test_active_filter_count_ignores_search_and_sentinels() {
    let values: FilterValues = [
        ("search", "x"),
        ("status", "all"),
        ("category", ""),
        ("unit", "IT"),
    ]
    .into_iter()
    .collect();
    let page: IndexPage<Record> = IndexPage::new("Karyawan")
        .with_filter_fields(vec![
            FilterField::select("status", vec![FilterOption::new("aktif", "Aktif")]),
            FilterField::text("category"),
            FilterField::text("unit"),
        ])
        .with_filter_values(values);
    assert_eq!(page.filters().active_filter_count(), 1);
}

#[test]
fn test_first_page_disables_back_controls() {
    let page = employee_page().with_data(employees(), Some(Pagination::length_aware(1, 10, 47)));
    let bar = page.pagination_bar().unwrap();
    assert!(!bar.is_enabled(PageControl::First));
    assert!(!bar.is_enabled(PageControl::Prev));
    assert_eq!(page.activate_page(PageControl::First), None);
    assert_eq!(page.activate_page(PageControl::Prev), None);
    assert_eq!(page.activate_page(PageControl::Next), Some(IndexEvent::PageChange(2)));
}

#[test]
fn test_last_page_disables_forward_controls() {
    let page = employee_page().with_data(employees(), Some(Pagination::length_aware(5, 10, 47)));
    assert_eq!(page.activate_page(PageControl::Next), None);
    assert_eq!(page.activate_page(PageControl::Last), None);
    assert_eq!(page.activate_page(PageControl::Prev), Some(IndexEvent::PageChange(4)));
    assert_eq!(page.activate_page(PageControl::First), Some(IndexEvent::PageChange(1)));
}

#[test]
fn test_middle_page_labels_and_controls() {
    let pagination = Pagination {
        current_page: 2,
        last_page: 5,
        per_page: 10,
        total: 47,
        from: Some(11),
        to: Some(20),
    };
    let page = employee_page().with_data(employees(), Some(pagination));
    let bar = page.pagination_bar().unwrap();
    assert_eq!(bar.range_label(&page.labels().of), "11–20 dari 47");
    assert_eq!(bar.page_label(&page.labels().page), "Halaman 2 / 5");
    for control in PageControl::ALL {
        assert!(bar.is_enabled(control), "{control:?} should be enabled");
    }
    assert_eq!(page.activate_page(PageControl::Last), Some(IndexEvent::PageChange(5)));
}

#[test]
fn test_per_page_selection_emits_one_event() {
    let page = employee_page().with_data(employees(), Some(Pagination::length_aware(2, 10, 47)));
    let event = page.select_per_page(50);
    assert_eq!(event, Some(IndexEvent::PerPageChange(50)));
    assert_eq!(page.select_per_page(30), None);

    let mut query = IndexQuery::new();
    query.page = 2;
    assert!(query.apply(&event.unwrap()));
    assert_eq!(query.per_page, 50);
    assert_eq!(query.page, 1);
}

#[test]
fn test_no_pagination_bar_for_empty_total() {
    let page = employee_page().with_data(Vec::new(), Some(Pagination::length_aware(1, 10, 0)));
    assert!(page.pagination_bar().is_none());
}

#[test]
fn test_loading_wins_over_empty() {
    let page: IndexPage<Record> = IndexPage::new("Karyawan")
        .with_columns(vec![Column::field("name", "Nama")])
        .with_loading(true);
    assert_eq!(page.body(), TableBody::Loading);

    let page = page.with_loading(false);
    assert!(matches!(page.body(), TableBody::Empty { ref message, .. } if message == "Tidak ada data"));
}

#[test]
fn test_body_rows_keyed_by_id() {
    let mut page = employee_page();
    page.click_header("name");
    let ids: Vec<RowId> = page.body().rows().iter().map(|r| r.id.clone()).collect();
    assert_eq!(ids, vec![RowId::Number(2), RowId::Number(1), RowId::Number(3)]);
}

#[test]
fn test_custom_render_column() {
    let page: IndexPage<Record> = IndexPage::new("Karyawan")
        .with_columns(vec![
            Column::field("name", "Nama").render(|r: &Record| r.get("name").display().to_uppercase()),
        ])
        .with_data(employees(), None);
    let cells: Vec<String> = page
        .body()
        .rows()
        .iter()
        .map(|r| r.cells[0].clone())
        .collect();
    assert_eq!(cells, ["BUDI", "ANI", "CITRA"]);
}

#[test]
fn test_filter_round_trip_into_query() {
    let mut page: IndexPage<Record> = IndexPage::new("Karyawan").with_filter_fields(vec![
        FilterField::select("unit", vec![FilterOption::new("IT", "IT")]),
    ]);
    page.change_filter("unit", "IT");
    page.change_search("ani");

    let mut query = IndexQuery::new();
    query.page = 3;
    assert!(query.apply(&page.submit_filters()));
    assert_eq!(query.page, 1);
    assert_eq!(query.search, "ani");
    assert_eq!(query.filters.get("unit"), "IT");
    assert_eq!(query.filters.get("search"), "");

    assert!(query.apply(&page.reset_filters()));
    assert!(query.search.is_empty());
    assert!(query.filters.is_empty());
}
