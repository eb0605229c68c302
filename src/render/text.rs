//! Plain-text rendering of an index page.
//!
//! ```text
//! Karyawan
//! Nama ▲ | Kode ↕
//! -------+-------
//! Ani    | A1
//! Citra  | B2
//! Budi   |
//! 1–3 dari 3 · Halaman 1 / 1 · Per halaman: 10
//! ```

use crate::model::{Align, Row};
use crate::table::{HeaderCell, IndexPage, TableArea, TableBody};
use crate::utils::{display_width, pad_to_width, truncate_str};
use std::fmt::Write as _;

/// Layout settings for text output.
#[derive(Debug, Clone, Copy)]
pub struct TextOptions {
    /// Widest a column may grow when it has no width hint
    pub max_column_width: usize,
    /// Include title, description, actions and the filter summary
    pub chrome: bool,
}

impl Default for TextOptions {
    fn default() -> Self {
        Self {
            max_column_width: 32,
            chrome: true,
        }
    }
}

/// Render a page to a string, one line per row plus chrome.
pub fn render_page<T: Row>(page: &IndexPage<T>, options: &TextOptions) -> String {
    let mut out = String::new();

    if options.chrome {
        render_chrome(&mut out, page);
    }

    match page.table_area() {
        TableArea::Custom(lines) => {
            for line in lines {
                out.push_str(&line);
                out.push('\n');
            }
        }
        TableArea::Table { header, body } => render_table(&mut out, &header, &body, page, options),
    }

    if let Some(bar) = page.pagination_bar() {
        let labels = page.labels();
        let _ = writeln!(
            out,
            "{} · {} · {}: {}",
            bar.range_label(&labels.of),
            bar.page_label(&labels.page),
            labels.per_page,
            bar.per_page()
        );
    }
    out
}

fn render_chrome<T: Row>(out: &mut String, page: &IndexPage<T>) {
    out.push_str(page.title());
    out.push('\n');
    if let Some(description) = page.description() {
        out.push_str(description);
        out.push('\n');
    }
    if !page.actions().is_empty() {
        let actions: Vec<String> = page
            .actions()
            .iter()
            .map(|a| format!("[{}]", a.label))
            .collect();
        out.push_str(&actions.join(" "));
        out.push('\n');
    }

    let filters = page.filters();
    let labels = page.labels();
    let mut summary = Vec::new();
    if !filters.search().is_empty() {
        summary.push(format!("{} {}", labels.search_placeholder, filters.search()));
    }
    if filters.has_active_filters() {
        let active: Vec<String> = filters
            .values()
            .active()
            .map(|(key, _)| {
                let label = filters.field(key).map_or(key, |f| f.display_label());
                format!("{label}={}", filters.display_value(key))
            })
            .collect();
        summary.push(format!(
            "{} ({}): {}",
            labels.filter,
            filters.active_filter_count(),
            active.join(", ")
        ));
    }
    if !summary.is_empty() {
        out.push_str(&summary.join("   "));
        out.push('\n');
    }
}

fn render_table<T: Row>(
    out: &mut String,
    header: &[HeaderCell],
    body: &TableBody,
    page: &IndexPage<T>,
    options: &TextOptions,
) {
    let header_texts: Vec<String> = header.iter().map(HeaderCell::text).collect();
    let widths: Vec<usize> = header
        .iter()
        .enumerate()
        .map(|(i, cell)| {
            if let Some(width) = cell.style.width {
                return usize::from(width);
            }
            let content = body
                .rows()
                .iter()
                .filter_map(|row| row.cells.get(i))
                .map(|text| display_width(text))
                .max()
                .unwrap_or(0);
            display_width(&header_texts[i])
                .max(content)
                .min(options.max_column_width)
                .max(1)
        })
        .collect();

    let header_cells: Vec<String> = header_texts
        .iter()
        .zip(&widths)
        .map(|(text, &width)| fit(text, width, Align::Left))
        .collect();
    push_row(out, &header_cells);

    let rule: Vec<String> = widths.iter().map(|&w| "-".repeat(w)).collect();
    out.push_str(&rule.join("-+-"));
    out.push('\n');

    let total_width = widths.iter().sum::<usize>() + 3 * widths.len().saturating_sub(1);
    match body {
        TableBody::Loading => {
            push_line(out, &fit(&page.labels().loading, total_width, Align::Center));
        }
        TableBody::Empty { message, icon } => {
            let text = match icon {
                Some(icon) => format!("{icon} {message}"),
                None => message.clone(),
            };
            push_line(out, &fit(&text, total_width, Align::Center));
        }
        TableBody::Rows(rows) => {
            for row in rows {
                let cells: Vec<String> = row
                    .cells
                    .iter()
                    .zip(header.iter().zip(&widths))
                    .map(|(text, (cell, &width))| fit(text, width, cell.style.align))
                    .collect();
                push_row(out, &cells);
            }
        }
    }
}

fn push_row(out: &mut String, cells: &[String]) {
    push_line(out, &cells.join(" | "));
}

fn push_line(out: &mut String, line: &str) {
    out.push_str(line.trim_end());
    out.push('\n');
}

/// Truncate and pad `text` to exactly `width` columns.
fn fit(text: &str, width: usize, align: Align) -> String {
    let text = truncate_str(text, width);
    match align {
        Align::Left => pad_to_width(&text, width, false),
        Align::Right => pad_to_width(&text, width, true),
        Align::Center => {
            let slack = width.saturating_sub(display_width(&text));
            let left = slack / 2;
            format!("{}{}{}", " ".repeat(left), text, " ".repeat(slack - left))
        }
    }
}
