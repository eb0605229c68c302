//! Centralized theme and color scheme for the TUI.
//!
//! Themes are switchable at runtime (`t` cycles dark → light → high-contrast).

use crate::model::ActionVariant;
use ratatui::prelude::*;
use std::sync::{PoisonError, RwLock};

/// Semantic colors for UI elements.
#[derive(Debug, Clone, Copy)]
pub struct ColorScheme {
    // UI element colors
    pub primary: Color,
    pub secondary: Color,
    pub accent: Color,
    pub muted: Color,
    pub border: Color,
    pub border_focused: Color,
    pub background: Color,
    pub background_alt: Color,
    pub text: Color,
    pub text_muted: Color,
    pub highlight: Color,

    // Status colors
    pub success: Color,
    pub warning: Color,
    pub error: Color,

    // Badge foregrounds
    pub badge_fg_dark: Color,
    pub badge_fg_light: Color,

    pub selection_bg: Color,
    pub header_bg: Color,
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::dark()
    }
}

impl ColorScheme {
    /// Dark theme, usable in const context for the global default
    const fn dark_const() -> Self {
        Self {
            primary: Color::Cyan,
            secondary: Color::Blue,
            accent: Color::Yellow,
            muted: Color::DarkGray,
            border: Color::DarkGray,
            border_focused: Color::Cyan,
            background: Color::Reset,
            background_alt: Color::Rgb(30, 30, 40),
            text: Color::White,
            text_muted: Color::Gray,
            highlight: Color::Yellow,

            success: Color::Green,
            warning: Color::Yellow,
            error: Color::Red,

            badge_fg_dark: Color::Black,
            badge_fg_light: Color::White,

            selection_bg: Color::Rgb(60, 60, 80),
            header_bg: Color::Rgb(40, 40, 55),
        }
    }

    pub const fn dark() -> Self {
        Self::dark_const()
    }

    pub const fn light() -> Self {
        Self {
            primary: Color::Blue,
            secondary: Color::Cyan,
            accent: Color::Rgb(180, 100, 0),
            muted: Color::Gray,
            border: Color::Gray,
            border_focused: Color::Blue,
            background: Color::Reset,
            background_alt: Color::Rgb(235, 235, 240),
            text: Color::Black,
            text_muted: Color::DarkGray,
            highlight: Color::Rgb(180, 100, 0),

            success: Color::Rgb(0, 128, 0),
            warning: Color::Rgb(180, 100, 0),
            error: Color::Rgb(180, 0, 0),

            badge_fg_dark: Color::Black,
            badge_fg_light: Color::White,

            selection_bg: Color::Rgb(200, 210, 230),
            header_bg: Color::Rgb(220, 220, 230),
        }
    }

    pub const fn high_contrast() -> Self {
        Self {
            primary: Color::White,
            secondary: Color::Cyan,
            accent: Color::Yellow,
            muted: Color::Gray,
            border: Color::White,
            border_focused: Color::Yellow,
            background: Color::Black,
            background_alt: Color::Black,
            text: Color::White,
            text_muted: Color::Gray,
            highlight: Color::Yellow,

            success: Color::LightGreen,
            warning: Color::LightYellow,
            error: Color::LightRed,

            badge_fg_dark: Color::Black,
            badge_fg_light: Color::White,

            selection_bg: Color::Blue,
            header_bg: Color::Black,
        }
    }

    /// Background color of an action button.
    pub const fn action_color(&self, variant: ActionVariant) -> Color {
        match variant {
            ActionVariant::Default => self.primary,
            ActionVariant::Secondary => self.secondary,
            ActionVariant::Outline | ActionVariant::Ghost => self.background,
            ActionVariant::Destructive => self.error,
        }
    }
}

/// Global theme instance (runtime switchable)
static THEME: RwLock<Theme> = RwLock::new(Theme::dark_const());

#[derive(Debug, Clone)]
pub struct Theme {
    pub colors: ColorScheme,
    pub name: &'static str,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    const fn dark_const() -> Self {
        Self {
            colors: ColorScheme::dark_const(),
            name: "dark",
        }
    }

    pub const fn dark() -> Self {
        Self::dark_const()
    }

    pub const fn light() -> Self {
        Self {
            colors: ColorScheme::light(),
            name: "light",
        }
    }

    pub const fn high_contrast() -> Self {
        Self {
            colors: ColorScheme::high_contrast(),
            name: "high-contrast",
        }
    }

    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "light" => Self::light(),
            "high-contrast" | "highcontrast" | "hc" => Self::high_contrast(),
            _ => Self::dark(),
        }
    }

    /// Next theme in the rotation
    pub fn next(&self) -> Self {
        match self.name {
            "dark" => Self::light(),
            "light" => Self::high_contrast(),
            _ => Self::dark(),
        }
    }
}

pub fn current_theme_name() -> &'static str {
    THEME.read().unwrap_or_else(PoisonError::into_inner).name
}

pub fn set_theme(theme: Theme) {
    *THEME.write().unwrap_or_else(PoisonError::into_inner) = theme;
}

/// Switch to the next theme and return its name.
pub fn toggle_theme() -> &'static str {
    let mut theme = THEME.write().unwrap_or_else(PoisonError::into_inner);
    *theme = theme.next();
    theme.name
}

/// Colors of the current theme.
pub fn colors() -> ColorScheme {
    THEME.read().unwrap_or_else(PoisonError::into_inner).colors
}

// ============================================================================
// Style Helpers
// ============================================================================

/// Common style presets
pub struct Styles;

impl Styles {
    pub fn header_title() -> Style {
        Style::default().fg(colors().primary).bold()
    }

    pub fn text() -> Style {
        Style::default().fg(colors().text)
    }

    pub fn text_muted() -> Style {
        Style::default().fg(colors().text_muted)
    }

    pub fn table_header() -> Style {
        let scheme = colors();
        Style::default().fg(scheme.primary).bg(scheme.header_bg).bold()
    }

    /// Header cell under the keyboard cursor
    pub fn table_header_focused() -> Style {
        let scheme = colors();
        Style::default()
            .fg(scheme.badge_fg_dark)
            .bg(scheme.border_focused)
            .bold()
    }

    pub fn selected() -> Style {
        Style::default().bg(colors().selection_bg).bold()
    }

    pub fn border() -> Style {
        Style::default().fg(colors().border)
    }

    pub fn border_focused() -> Style {
        Style::default().fg(colors().border_focused)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(colors().text_muted).bg(colors().background_alt)
    }

    pub fn shortcut_key() -> Style {
        Style::default().fg(colors().accent).bold()
    }

    pub fn shortcut_desc() -> Style {
        Style::default().fg(colors().text_muted)
    }

    pub fn disabled() -> Style {
        Style::default().fg(colors().muted).dim()
    }

    pub fn success() -> Style {
        Style::default().fg(colors().success)
    }

    pub fn error() -> Style {
        Style::default().fg(colors().error).bold()
    }
}

// ============================================================================
// Badge Rendering Helpers
// ============================================================================

/// Count badge, e.g. active filters or unread notifications
pub fn count_badge(count: usize, bg_color: Color) -> Span<'static> {
    Span::styled(
        format!(" {count} "),
        Style::default()
            .fg(colors().badge_fg_dark)
            .bg(bg_color)
            .bold(),
    )
}

/// `label: value` badge for an applied filter
pub fn filter_badge(label: &str, value: &str) -> Vec<Span<'static>> {
    let scheme = colors();
    vec![
        Span::styled(format!("{label}: "), Style::default().fg(scheme.text_muted)),
        Span::styled(
            format!(" {value} "),
            Style::default()
                .fg(scheme.badge_fg_dark)
                .bg(scheme.accent)
                .bold(),
        ),
    ]
}

/// Button-like span for a page action
pub fn action_button(label: &str, icon: Option<&str>, variant: ActionVariant) -> Span<'static> {
    let scheme = colors();
    let text = match icon {
        Some(icon) => format!(" {icon} {label} "),
        None => format!(" {label} "),
    };
    let style = match variant {
        ActionVariant::Outline => Style::default().fg(scheme.primary).underlined(),
        ActionVariant::Ghost => Style::default().fg(scheme.text_muted),
        other => Style::default()
            .fg(scheme.badge_fg_light)
            .bg(scheme.action_color(other))
            .bold(),
    };
    Span::styled(text, style)
}

// ============================================================================
// Footer Hints
// ============================================================================

pub struct FooterHints;

impl FooterHints {
    /// Hints for the table view
    pub fn table() -> Vec<(&'static str, &'static str)> {
        let mut hints = vec![
            ("←→", "column"),
            ("s/1-9", "sort"),
            ("PgUp/PgDn", "page"),
            ("+/-", "per page"),
            ("/", "search"),
            ("f", "filter"),
            ("r", "reset"),
        ];
        hints.extend(Self::global());
        hints
    }

    /// Hints while typing into the search or a filter input
    pub fn editing() -> Vec<(&'static str, &'static str)> {
        vec![("Enter", "apply"), ("Esc", "cancel"), ("Tab", "next field")]
    }

    /// Hints while the bell dropdown is open
    pub fn notifications() -> Vec<(&'static str, &'static str)> {
        vec![("↑↓", "select"), ("Enter", "mark read"), ("Esc/b", "close")]
    }

    /// Global hints (always shown)
    pub fn global() -> Vec<(&'static str, &'static str)> {
        vec![("b", "notifications"), ("t", "theme"), ("q", "quit")]
    }
}

/// Render footer hints as spans
pub fn render_footer_hints(hints: &[(&str, &str)]) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(format!("[{key}]"), Styles::shortcut_key()));
        spans.push(Span::styled(desc.to_string(), Styles::shortcut_desc()));
    }
    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_rotation() {
        assert_eq!(Theme::dark().next().name, "light");
        assert_eq!(Theme::light().next().name, "high-contrast");
        assert_eq!(Theme::high_contrast().next().name, "dark");
        assert_eq!(Theme::from_name("HC").name, "high-contrast");
        assert_eq!(Theme::from_name("unknown").name, "dark");
    }

    #[test]
    fn test_footer_hints_render() {
        let spans = render_footer_hints(&[("q", "quit"), ("t", "theme")]);
        assert_eq!(spans.len(), 5);
        assert_eq!(spans[0].content, "[q]");
    }
}
