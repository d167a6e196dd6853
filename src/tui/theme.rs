// Theme system for the TUI
//
// Two built-in palettes, picked by name from config.

use ratatui::style::Color;
use ratatui::widgets::BorderType;

/// Available themes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeKind {
    #[default]
    Dark,
    Light,
}

impl ThemeKind {
    /// Look up a theme by config name; unknown names fall back to dark
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "light" => ThemeKind::Light,
            "dark" => ThemeKind::Dark,
            other => {
                tracing::warn!(theme = other, "Unknown theme, using dark");
                ThemeKind::Dark
            }
        }
    }

    pub fn theme(&self) -> Theme {
        match self {
            ThemeKind::Dark => Theme::dark(),
            ThemeKind::Light => Theme::light(),
        }
    }
}

/// Resolved colors for every element the view draws
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub foreground: Color,
    pub border: Color,
    pub border_type: BorderType,
    /// Border of the block that currently takes input
    pub highlight: Color,
    pub title: Color,

    pub selected_bg: Color,
    pub selected_fg: Color,
    pub done: Color,
    pub empty: Color,
    pub help: Color,

    pub log_error: Color,
    pub log_warn: Color,
    pub log_info: Color,
    pub log_debug: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            background: Color::Reset,
            foreground: Color::White,
            border: Color::Gray,
            border_type: BorderType::Rounded,
            highlight: Color::Cyan,
            title: Color::Cyan,

            selected_bg: Color::DarkGray,
            selected_fg: Color::Yellow,
            done: Color::Green,
            empty: Color::DarkGray,
            help: Color::Gray,

            log_error: Color::Red,
            log_warn: Color::Yellow,
            log_info: Color::Blue,
            log_debug: Color::DarkGray,
        }
    }

    pub fn light() -> Self {
        Self {
            background: Color::White,
            foreground: Color::Black,
            border: Color::DarkGray,
            border_type: BorderType::Plain,
            highlight: Color::Blue,
            title: Color::Blue,

            selected_bg: Color::LightBlue,
            selected_fg: Color::Black,
            done: Color::Rgb(0, 128, 0),
            empty: Color::Gray,
            help: Color::DarkGray,

            log_error: Color::Red,
            log_warn: Color::Rgb(184, 134, 11), // Dark goldenrod
            log_info: Color::Blue,
            log_debug: Color::Gray,
        }
    }
}
