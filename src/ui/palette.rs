//! Colors for the resolved light/dark theme.

use ratatui::style::{Color, Modifier, Style};

use crate::preferences::ResolvedTheme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub text: Color,
    pub muted: Color,
    pub accent: Color,
    pub border: Color,
    pub focus_border: Color,
    pub selection_bg: Color,
    pub cursor_bg: Color,
    pub error: Color,
    pub success: Color,
    pub warning: Color,
    pub comment: Color,
    pub key: Color,
    pub value: Color,
}

impl Palette {
    pub fn for_theme(theme: ResolvedTheme) -> Self {
        match theme {
            ResolvedTheme::Dark => Self {
                text: Color::White,
                muted: Color::DarkGray,
                accent: Color::Cyan,
                border: Color::Gray,
                focus_border: Color::Cyan,
                selection_bg: Color::Rgb(40, 60, 80),
                cursor_bg: Color::Rgb(60, 60, 60),
                error: Color::Red,
                success: Color::Green,
                warning: Color::Yellow,
                comment: Color::DarkGray,
                key: Color::LightBlue,
                value: Color::LightGreen,
            },
            ResolvedTheme::Light => Self {
                text: Color::Black,
                muted: Color::Gray,
                accent: Color::Blue,
                border: Color::DarkGray,
                focus_border: Color::Blue,
                selection_bg: Color::Rgb(200, 220, 240),
                cursor_bg: Color::Rgb(225, 225, 225),
                error: Color::Red,
                success: Color::Green,
                warning: Color::Rgb(180, 120, 0),
                comment: Color::Gray,
                key: Color::Blue,
                value: Color::Rgb(0, 120, 60),
            },
        }
    }

    /// Border style for a panel, highlighted when its zone has focus
    pub fn border_style(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.focus_border)
        } else {
            Style::default().fg(self.border)
        }
    }

    /// Row style for list items: keyboard cursor and/or current selection
    pub fn row_style(&self, is_cursor: bool, is_selected: bool, zone_active: bool) -> Style {
        let mut style = Style::default().fg(self.text);
        if is_selected {
            style = style.bg(self.selection_bg).add_modifier(Modifier::BOLD);
        }
        if is_cursor && zone_active {
            style = style.bg(self.cursor_bg).add_modifier(Modifier::BOLD);
        }
        style
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::for_theme(ResolvedTheme::Dark)
    }
}
