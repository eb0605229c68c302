//! Render tests for the terminal UI using ratatui's `TestBackend`.

use index_view::model::{Column, Pagination, Record};
use index_view::table::IndexPage;
use index_view::tui::{PageView, draw_page};
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::style::Modifier;
use ratatui::Terminal;

fn draw(page: &IndexPage<Record>, unread: Option<usize>) -> Buffer {
    let mut terminal = Terminal::new(TestBackend::new(100, 24)).unwrap();
    terminal
        .draw(|frame| draw_page(frame, frame.area(), page, &PageView::default(), unread))
        .unwrap();
    terminal.backend().buffer().clone()
}

fn text(buffer: &Buffer) -> String {
    let mut out = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            out.push_str(buffer[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}

/// Whether the control glyph is drawn dimmed (disabled).
fn control_dimmed(buffer: &Buffer, glyph: &str) -> Option<bool> {
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            let cell = &buffer[(x, y)];
            if cell.symbol() == glyph {
                return Some(cell.modifier.contains(Modifier::DIM));
            }
        }
    }
    None
}

fn rows(n: i64) -> Vec<Record> {
    (1..=n)
        .map(|i| Record::new(i).with("name", format!("Pegawai {i}")))
        .collect()
}

fn page() -> IndexPage<Record> {
    IndexPage::new("Karyawan")
        .with_description("Daftar pegawai")
        .with_columns(vec![Column::field("name", "Nama")])
}

#[test]
fn test_middle_page_shows_range_and_enables_all_controls() {
    let pagination = Pagination {
        current_page: 2,
        last_page: 5,
        per_page: 10,
        total: 47,
        from: Some(11),
        to: Some(20),
    };
    let buffer = draw(&page().with_data(rows(10), Some(pagination)), None);
    let screen = text(&buffer);
    assert!(screen.contains("11–20 dari 47"));
    assert!(screen.contains("Halaman 2 / 5"));
    assert!(screen.contains("[10]"));
    for glyph in ["«", "‹", "›", "»"] {
        assert_eq!(control_dimmed(&buffer, glyph), Some(false), "{glyph} dimmed");
    }
}

#[test]
fn test_first_page_dims_back_controls() {
    let buffer = draw(
        &page().with_data(rows(10), Some(Pagination::length_aware(1, 10, 47))),
        None,
    );
    assert_eq!(control_dimmed(&buffer, "«"), Some(true));
    assert_eq!(control_dimmed(&buffer, "‹"), Some(true));
    assert_eq!(control_dimmed(&buffer, "›"), Some(false));
    assert_eq!(control_dimmed(&buffer, "»"), Some(false));
}

#[test]
fn test_loading_hides_empty_message() {
    let buffer = draw(&page().with_loading(true), None);
    let screen = text(&buffer);
    assert!(screen.contains("Memuat..."));
    assert!(!screen.contains("Tidak ada data"));
}

#[test]
fn test_empty_state_message() {
    let buffer = draw(
        &page()
            .with_data(Vec::new(), Some(Pagination::length_aware(1, 10, 0)))
            .with_empty_message("Belum ada pegawai"),
        None,
    );
    let screen = text(&buffer);
    assert!(screen.contains("Belum ada pegawai"));
    assert!(!screen.contains("dari"));
}

#[test]
fn test_header_shows_sort_indicator() {
    let mut page = page().with_data(rows(3), None);
    page.click_header("name");
    let screen = text(&draw(&page, None));
    assert!(screen.contains("Nama ▲"));
    assert!(screen.contains("Pegawai 1"));
    assert!(screen.contains("Karyawan"));
    assert!(screen.contains("Daftar pegawai"));
}

#[test]
fn test_small_terminal_does_not_panic() {
    let mut terminal = Terminal::new(TestBackend::new(20, 5)).unwrap();
    let page = page().with_data(rows(30), Some(Pagination::length_aware(1, 30, 30)));
    terminal
        .draw(|frame| draw_page(frame, frame.area(), &page, &PageView::default(), Some(3)))
        .unwrap();
}
