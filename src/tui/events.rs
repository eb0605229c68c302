//! Terminal events and key bindings.

use super::app::{Focus, IndexApp};
use super::state::ListNavigation;
use super::theme::toggle_theme;
use crate::table::PageControl;
use crossterm::event::{self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;

/// Application event
#[derive(Debug)]
pub enum Event {
    Key(KeyEvent),
    /// Nothing happened within the tick rate
    Tick,
    Resize(u16, u16),
}

pub struct EventHandler {
    tick_rate: Duration,
}

impl EventHandler {
    pub const fn new(tick_rate_ms: u64) -> Self {
        Self {
            tick_rate: Duration::from_millis(tick_rate_ms),
        }
    }

    /// Wait for the next event, up to the tick rate.
    pub fn next(&self) -> std::io::Result<Event> {
        if event::poll(self.tick_rate)? {
            match event::read()? {
                CrosstermEvent::Key(key) if key.kind != KeyEventKind::Release => Ok(Event::Key(key)),
                CrosstermEvent::Resize(width, height) => Ok(Event::Resize(width, height)),
                _ => Ok(Event::Tick),
            }
        } else {
            Ok(Event::Tick)
        }
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new(250)
    }
}

/// What a key does while the table has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableCommand {
    /// Sort by the column at this index (digit keys, 1-based on the keyboard)
    SortColumn(usize),
    SortAtCursor,
    CursorLeft,
    CursorRight,
    RowUp,
    RowDown,
    Page(PageControl),
    /// Larger (`true`) or smaller page size
    PerPage(bool),
    Search,
    ToggleFilters,
    ResetFilters,
    /// Activate the page action at this index (F1..F9)
    Action(usize),
    Bell,
    Theme,
    Quit,
}

/// Map a key to a table command.
pub fn map_table_key(key: KeyEvent) -> Option<TableCommand> {
    let command = match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => TableCommand::Quit,
        KeyCode::Char(c @ '1'..='9') => TableCommand::SortColumn(c as usize - '1' as usize),
        KeyCode::Char('s') | KeyCode::Enter => TableCommand::SortAtCursor,
        KeyCode::Left | KeyCode::Char('h') => TableCommand::CursorLeft,
        KeyCode::Right | KeyCode::Char('l') => TableCommand::CursorRight,
        KeyCode::Up | KeyCode::Char('k') => TableCommand::RowUp,
        KeyCode::Down | KeyCode::Char('j') => TableCommand::RowDown,
        KeyCode::PageUp => TableCommand::Page(PageControl::Prev),
        KeyCode::PageDown => TableCommand::Page(PageControl::Next),
        KeyCode::Home => TableCommand::Page(PageControl::First),
        KeyCode::End => TableCommand::Page(PageControl::Last),
        KeyCode::Char('+' | '=') => TableCommand::PerPage(true),
        KeyCode::Char('-') => TableCommand::PerPage(false),
        KeyCode::Char('/') => TableCommand::Search,
        KeyCode::Char('f') => TableCommand::ToggleFilters,
        KeyCode::Char('r') => TableCommand::ResetFilters,
        KeyCode::F(n @ 1..=9) => TableCommand::Action(usize::from(n - 1)),
        KeyCode::Char('b') => TableCommand::Bell,
        KeyCode::Char('t') => TableCommand::Theme,
        KeyCode::Char('q') | KeyCode::Esc => TableCommand::Quit,
        _ => return None,
    };
    tracing::trace!(code = ?key.code, ?command, "Mapped key");
    Some(command)
}

/// Route a key press to the focused part of the app.
pub fn handle_key_event(app: &mut IndexApp, key: KeyEvent) {
    if app.bell.is_open() {
        handle_bell_key(app, key);
        return;
    }
    match app.focus {
        Focus::Search => handle_search_key(app, key),
        Focus::Filter(_) => handle_filter_key(app, key),
        Focus::Table => {
            if let Some(command) = map_table_key(key) {
                run_table_command(app, command);
            }
        }
    }
}

fn run_table_command(app: &mut IndexApp, command: TableCommand) {
    // Overlays hold the scroll lock; only leaving commands pass through
    if !app.table_navigable() && !matches!(command, TableCommand::Bell | TableCommand::Quit) {
        return;
    }
    match command {
        TableCommand::SortColumn(index) => app.sort_column(index),
        TableCommand::SortAtCursor => app.sort_at_cursor(),
        TableCommand::CursorLeft => app.move_header_cursor(false),
        TableCommand::CursorRight => app.move_header_cursor(true),
        TableCommand::RowUp => app.rows.select_prev(),
        TableCommand::RowDown => app.rows.select_next(),
        TableCommand::Page(control) => app.go_page(control),
        TableCommand::PerPage(forward) => app.step_per_page(forward),
        TableCommand::Search => app.start_search(),
        TableCommand::ToggleFilters => app.toggle_filter_panel(),
        TableCommand::ResetFilters => app.reset_filters(),
        TableCommand::Action(index) => app.activate_action(index),
        TableCommand::Bell => app.toggle_bell(),
        TableCommand::Theme => {
            let name = toggle_theme();
            app.status.set(format!("Tema: {name}"));
        }
        TableCommand::Quit => app.quit(),
    }
}

fn handle_search_key(app: &mut IndexApp, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => app.submit(),
        KeyCode::Esc => app.leave_input(),
        KeyCode::Backspace => app.search_pop(),
        KeyCode::Char(c) => app.search_push(c),
        _ => {}
    }
}

fn handle_filter_key(app: &mut IndexApp, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => app.submit(),
        KeyCode::Esc => app.leave_input(),
        KeyCode::Tab | KeyCode::Down => app.next_filter_field(),
        KeyCode::Left => app.filter_cycle(false),
        KeyCode::Right => app.filter_cycle(true),
        KeyCode::Backspace => app.filter_pop(),
        KeyCode::Char(c) => app.filter_push(c),
        _ => {}
    }
}

fn handle_bell_key(app: &mut IndexApp, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('b') => app.bell.close(),
        KeyCode::Char('q') => app.quit(),
        KeyCode::Up | KeyCode::Char('k') => app.bell.list.select_prev(),
        KeyCode::Down | KeyCode::Char('j') => app.bell.list.select_next(),
        KeyCode::Enter => app.bell.mark_selected_read(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_digit_keys_sort_zero_based() {
        assert_eq!(
            map_table_key(key(KeyCode::Char('1'))),
            Some(TableCommand::SortColumn(0))
        );
        assert_eq!(
            map_table_key(key(KeyCode::Char('9'))),
            Some(TableCommand::SortColumn(8))
        );
        assert_eq!(map_table_key(key(KeyCode::Char('0'))), None);
    }

    #[test]
    fn test_page_keys() {
        assert_eq!(
            map_table_key(key(KeyCode::PageDown)),
            Some(TableCommand::Page(PageControl::Next))
        );
        assert_eq!(
            map_table_key(key(KeyCode::Home)),
            Some(TableCommand::Page(PageControl::First))
        );
        assert_eq!(map_table_key(key(KeyCode::Char('+'))), Some(TableCommand::PerPage(true)));
    }

    #[test]
    fn test_ctrl_c_quits() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_table_key(ctrl_c), Some(TableCommand::Quit));
        assert_eq!(map_table_key(key(KeyCode::F(2))), Some(TableCommand::Action(1)));
    }
}
