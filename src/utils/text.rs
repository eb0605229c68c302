//! Display-width aware text helpers for table cells.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Terminal display width of a string.
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Truncate a string to `max_width` display columns, marking the cut with `…`.
pub fn truncate_str(s: &str, max_width: usize) -> String {
    if display_width(s) <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let budget = max_width - 1;
    let mut width = 0;
    let mut truncated: String = s
        .chars()
        .take_while(|ch| {
            let w = UnicodeWidthChar::width(*ch).unwrap_or(0);
            if width + w > budget {
                return false;
            }
            width += w;
            true
        })
        .collect();
    truncated.push('…');
    truncated
}

/// Pad (or truncate) a string to exactly `width` display columns.
pub fn pad_to_width(s: &str, width: usize, right_align: bool) -> String {
    let cell = truncate_str(s, width);
    let fill = " ".repeat(width.saturating_sub(display_width(&cell)));
    if right_align {
        format!("{fill}{cell}")
    } else {
        format!("{cell}{fill}")
    }
}
