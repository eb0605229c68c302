//! Drawing and the main terminal loop.

use super::app::{Focus, IndexApp};
use super::events::{Event, EventHandler, handle_key_event};
use super::state::ListNavigation;
use super::status::StatusLevel;
use super::theme::{FooterHints, Styles, action_button, colors, count_badge, render_footer_hints};
use super::widgets::{
    alignment, check_terminal_size, render_size_warning, spinner_frame, top_right_rect,
};
use crate::model::{FilterKind, Row as TableRow};
use crate::table::{HeaderCell, IndexPage, PER_PAGE_OPTIONS, PageControl, TableArea, TableBody};
use chrono::Utc;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Cell, Clear, List, ListItem, Paragraph, Row, Table, TableState},
};
use std::io::{self, stdout};

/// Restores the terminal when dropped, including on early returns and panics
/// that unwind through the loop.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        execute!(stdout(), EnterAlternateScreen)?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(e) = disable_raw_mode() {
            tracing::warn!("Failed to disable raw mode: {e}");
        }
        if let Err(e) = execute!(stdout(), LeaveAlternateScreen) {
            tracing::warn!("Failed to leave alternate screen: {e}");
        }
    }
}

/// Run the interactive index page until the user quits.
pub fn run_index_tui(app: &mut IndexApp, tick_rate_ms: u64) -> io::Result<()> {
    let _guard = TerminalGuard::enter()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
    let events = EventHandler::new(tick_rate_ms);

    loop {
        app.poll_notifications();
        terminal.draw(|frame| render(frame, app))?;

        // Fetch after drawing so the loading state is visible meanwhile
        if app.is_fetch_pending() {
            app.perform_fetch();
            continue;
        }

        match events.next()? {
            Event::Key(key) => handle_key_event(app, key),
            Event::Resize(_, _) => {}
            Event::Tick => app.tick = app.tick.wrapping_add(1),
        }

        if app.should_quit {
            break;
        }
    }

    terminal.show_cursor()?;
    Ok(())
}

/// View-only state needed to draw a page.
#[derive(Debug, Clone, Copy, Default)]
pub struct PageView {
    pub header_cursor: usize,
    pub selected_row: Option<usize>,
    pub tick: u64,
    pub focus: Focus,
}

/// Draw the whole app: page, status line, bell overlay.
pub fn render(frame: &mut Frame, app: &mut IndexApp) {
    let area = frame.area();
    if let Err((width, height)) = check_terminal_size(area.width, area.height) {
        render_size_warning(frame, area, width, height);
        return;
    }

    let chunks = Layout::vertical([Constraint::Min(5), Constraint::Length(1)]).split(area);
    let view = PageView {
        header_cursor: app.header_cursor,
        selected_row: (!app.page.data().is_empty()).then(|| app.rows.selected()),
        tick: app.tick,
        focus: app.focus,
    };
    draw_page(frame, chunks[0], &app.page, &view, Some(app.bell.unread()));
    draw_status_line(frame, chunks[1], app);

    if app.bell.is_open() {
        draw_bell(frame, chunks[0], app);
    }
}

/// Draw an index page into `area`.
///
/// `unread` adds the notification bell to the title bar.
pub fn draw_page<T: TableRow>(
    frame: &mut Frame,
    area: Rect,
    page: &IndexPage<T>,
    view: &PageView,
    unread: Option<usize>,
) {
    let filters = page.filters();
    let title_height = if page.description().is_some() { 2 } else { 1 };
    let panel_height = if filters.is_panel_open() && filters.has_fields() {
        filters.fields().len() as u16 + 2
    } else {
        0
    };
    let bar = page.pagination_bar();
    let bar_height = u16::from(bar.is_some());

    let chunks = Layout::vertical([
        Constraint::Length(title_height),
        Constraint::Length(3),
        Constraint::Length(panel_height),
        Constraint::Min(3),
        Constraint::Length(bar_height),
    ])
    .split(area);

    draw_title(frame, chunks[0], page, unread);
    draw_search_bar(frame, chunks[1], page, view);
    if panel_height > 0 {
        draw_filter_panel(frame, chunks[2], page, view);
    }
    draw_table(frame, chunks[3], page, view);
    if bar.is_some() {
        draw_pagination(frame, chunks[4], page);
    }
}

fn draw_title<T: TableRow>(frame: &mut Frame, area: Rect, page: &IndexPage<T>, unread: Option<usize>) {
    let mut first = vec![Span::styled(page.title().to_string(), Styles::header_title())];
    for action in page.actions() {
        first.push(Span::raw(" "));
        first.push(action_button(&action.label, action.icon.as_deref(), action.variant));
    }
    let mut lines = vec![Line::from(first)];
    if let Some(description) = page.description() {
        lines.push(Line::styled(description.to_string(), Styles::text_muted()));
    }
    frame.render_widget(Paragraph::new(lines), area);

    if let Some(unread) = unread {
        let mut spans = vec![Span::styled(
            format!("{} ", page.labels().notifications),
            Styles::text_muted(),
        )];
        if unread > 0 {
            spans.push(count_badge(unread, colors().warning));
        }
        frame.render_widget(
            Paragraph::new(Line::from(spans)).alignment(Alignment::Right),
            Rect { height: 1, ..area },
        );
    }
}

fn draw_search_bar<T: TableRow>(frame: &mut Frame, area: Rect, page: &IndexPage<T>, view: &PageView) {
    let filters = page.filters();
    let labels = page.labels();
    let editing = view.focus == Focus::Search;

    let content = if filters.search().is_empty() && !editing {
        Line::styled(labels.search_placeholder.clone(), Styles::text_muted())
    } else {
        let mut spans = vec![Span::styled(filters.search().to_string(), Styles::text())];
        if editing {
            spans.push(Span::styled("▏", Styles::shortcut_key()));
        }
        Line::from(spans)
    };

    let mut filter_title = vec![Span::raw(format!(" {} ", labels.filter))];
    if filters.has_active_filters() {
        filter_title.push(count_badge(filters.active_filter_count(), colors().accent));
        filter_title.push(Span::raw(" "));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(if editing {
            Styles::border_focused()
        } else {
            Styles::border()
        })
        .title(Line::from(" / ").left_aligned())
        .title(Line::from(filter_title).right_aligned());
    frame.render_widget(Paragraph::new(content).block(block), area);
}

fn draw_filter_panel<T: TableRow>(frame: &mut Frame, area: Rect, page: &IndexPage<T>, view: &PageView) {
    let filters = page.filters();
    let lines: Vec<Line> = filters
        .fields()
        .iter()
        .enumerate()
        .map(|(i, field)| {
            let focused = view.focus == Focus::Filter(i);
            let marker = if focused { "▶ " } else { "  " };
            let value = filters.display_value(&field.key);
            let shown = if value.is_empty() {
                let placeholder = match field.kind {
                    FilterKind::Select => "—".to_string(),
                    FilterKind::Date => "YYYY-MM-DD".to_string(),
                    FilterKind::Text => field.placeholder.clone().unwrap_or_default(),
                };
                Span::styled(placeholder, Styles::text_muted())
            } else {
                Span::styled(value, Styles::text())
            };
            let hint = if focused && field.kind == FilterKind::Select {
                Span::styled("  ←/→", Styles::shortcut_desc())
            } else {
                Span::raw("")
            };
            Line::from(vec![
                Span::styled(marker, Styles::shortcut_key()),
                Span::styled(format!("{}: ", field.display_label()), Styles::text_muted()),
                shown,
                hint,
            ])
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Styles::border())
        .title(format!(" {} ", page.labels().filter))
        .title(Line::from(format!(" [r] {} ", page.labels().reset)).right_aligned());
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn header_row(header: &[HeaderCell], cursor: usize) -> Row<'static> {
    Row::new(header.iter().enumerate().map(|(i, cell)| {
        let style = if i == cursor {
            Styles::table_header_focused()
        } else {
            Styles::table_header()
        };
        Cell::from(Line::from(cell.text()).alignment(alignment(cell.style.align))).style(style)
    }))
}

fn column_widths(header: &[HeaderCell]) -> Vec<Constraint> {
    header
        .iter()
        .map(|cell| cell.style.width.map_or(Constraint::Fill(1), Constraint::Length))
        .collect()
}

fn draw_table<T: TableRow>(frame: &mut Frame, area: Rect, page: &IndexPage<T>, view: &PageView) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Styles::border());

    let (header, body) = match page.table_area() {
        TableArea::Custom(lines) => {
            let lines: Vec<Line> = lines.into_iter().map(Line::from).collect();
            frame.render_widget(Paragraph::new(lines).block(block), area);
            return;
        }
        TableArea::Table { header, body } => (header, body),
    };

    let widths = column_widths(&header);
    let header_line = header_row(&header, view.header_cursor);

    let message = match body {
        TableBody::Rows(rows) => {
            let table_rows = rows.iter().map(|row| {
                Row::new(row.cells.iter().zip(&header).map(|(text, cell)| {
                    Cell::from(Line::from(text.clone()).alignment(alignment(cell.style.align)))
                }))
            });
            let table = Table::new(table_rows, widths)
                .header(header_line)
                .block(block)
                .row_highlight_style(Styles::selected());
            let mut state = TableState::default().with_selected(view.selected_row);
            frame.render_stateful_widget(table, area, &mut state);
            return;
        }
        TableBody::Loading => Line::from(vec![
            Span::styled(format!("{} ", spinner_frame(view.tick)), Styles::shortcut_key()),
            Span::styled(page.labels().loading.clone(), Styles::text_muted()),
        ]),
        TableBody::Empty { message, icon } => {
            let text = match icon {
                Some(icon) => format!("{icon} {message}"),
                None => message,
            };
            Line::styled(text, Styles::text_muted())
        }
    };

    // Header only, with a single message row spanning every column.
    let inner = block.inner(area);
    let table = Table::new(Vec::<Row>::new(), widths)
        .header(header_line)
        .block(block);
    frame.render_widget(table, area);
    if inner.height > 1 {
        let message_area = Rect {
            y: inner.y + 1 + (inner.height - 1) / 2,
            height: 1,
            ..inner
        };
        frame.render_widget(
            Paragraph::new(message).alignment(Alignment::Center),
            message_area,
        );
    }
}

fn draw_pagination<T: TableRow>(frame: &mut Frame, area: Rect, page: &IndexPage<T>) {
    let Some(bar) = page.pagination_bar() else {
        return;
    };
    let labels = page.labels();

    let mut spans = vec![
        Span::styled(bar.range_label(&labels.of), Styles::text()),
        Span::raw("  "),
    ];
    for control in PageControl::ALL {
        let style = if bar.is_enabled(control) {
            Styles::shortcut_key()
        } else {
            Styles::disabled()
        };
        spans.push(Span::styled(format!(" {} ", control.symbol()), style));
    }
    spans.push(Span::raw("  "));
    spans.push(Span::styled(bar.page_label(&labels.page), Styles::text()));
    spans.push(Span::raw("  "));
    spans.push(Span::styled(format!("{}: ", labels.per_page), Styles::text_muted()));
    for option in PER_PAGE_OPTIONS {
        if option == bar.per_page() {
            spans.push(Span::styled(format!("[{option}]"), Styles::shortcut_key()));
        } else {
            spans.push(Span::styled(format!(" {option} "), Styles::text_muted()));
        }
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn draw_status_line(frame: &mut Frame, area: Rect, app: &mut IndexApp) {
    let level = app.status.level();
    let line = if let Some(message) = app.status.message() {
        let style = match level {
            StatusLevel::Info => Styles::success(),
            StatusLevel::Error => Styles::error(),
        };
        Line::styled(message.to_string(), style)
    } else {
        let hints = if app.bell.is_open() {
            FooterHints::notifications()
        } else if app.focus == Focus::Table {
            FooterHints::table()
        } else {
            FooterHints::editing()
        };
        Line::from(render_footer_hints(&hints))
    };
    frame.render_widget(Paragraph::new(line).style(Styles::status_bar()), area);
}

fn draw_bell(frame: &mut Frame, area: Rect, app: &IndexApp) {
    let now = Utc::now();
    let bell = &app.bell;
    let mut items: Vec<ListItem> = bell
        .items
        .iter()
        .enumerate()
        .map(|(i, n)| {
            let marker = if n.read { "  " } else { "● " };
            let style = if i == bell.list.selected() {
                Styles::selected()
            } else if n.read {
                Styles::text_muted()
            } else {
                Styles::text()
            };
            ListItem::new(Line::from(vec![
                Span::styled(marker, Style::default().fg(colors().accent)),
                Span::styled(n.title.clone(), style),
                Span::styled(format!("  {}", n.age_label(now)), Styles::text_muted()),
            ]))
        })
        .collect();
    if let Some(error) = &bell.last_error {
        items.push(ListItem::new(Line::styled(error.clone(), Styles::error())));
    }
    if items.is_empty() {
        items.push(ListItem::new(Line::styled(
            app.page.labels().no_data.clone(),
            Styles::text_muted(),
        )));
    }

    let height = (items.len() as u16 + 2).min(14);
    let below_title = Rect {
        y: area.y + 1,
        height: area.height.saturating_sub(1),
        ..area
    };
    let popup = top_right_rect(52, height, below_title);
    frame.render_widget(Clear, popup);
    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Styles::border_focused())
            .title(format!(" {} ", app.page.labels().notifications)),
    );
    frame.render_widget(list, popup);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Column, Pagination, Record};
    use ratatui::backend::TestBackend;

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    fn draw(page: &IndexPage<Record>) -> String {
        let mut terminal = Terminal::new(TestBackend::new(90, 20)).unwrap();
        terminal
            .draw(|frame| draw_page(frame, frame.area(), page, &PageView::default(), None))
            .unwrap();
        buffer_text(&terminal)
    }

    #[test]
    fn test_custom_content_keeps_chrome() {
        let page = IndexPage::new("Ruangan")
            .with_columns(vec![Column::field("name", "Nama")])
            .with_data(
                vec![Record::new(1).with("name", "A")],
                Some(Pagination::length_aware(1, 10, 1)),
            )
            .with_table_content(vec!["Kartu ruangan".to_string()]);
        let text = draw(&page);
        assert!(text.contains("Kartu ruangan"));
        assert!(text.contains("1–1 dari 1"));
        assert!(text.contains("Cari..."));
    }
}
