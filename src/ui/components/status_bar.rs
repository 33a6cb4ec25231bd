//! Status bar

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::shortcuts::{self, Platform, ShortcutRegistry};
use crate::ui::core::FocusZone;
use crate::ui::palette::Palette;

/// Bottom line with zone-specific keys and the configured global shortcuts
pub struct StatusBar;

impl StatusBar {
    fn zone_hints(zone: FocusZone) -> &'static [(&'static str, &'static str)] {
        match zone {
            FocusZone::Sidebar => &[
                ("↑↓", "move"),
                ("Enter", "open"),
                ("e", "edit"),
                ("Del", "remove"),
                ("Tab", "files"),
            ],
            FocusZone::EnvList => &[
                ("↑↓", "move"),
                ("Enter", "view"),
                ("a", "activate"),
                ("r", "refresh"),
                ("Tab", "projects"),
            ],
        }
    }

    pub fn render(
        f: &mut Frame,
        area: Rect,
        zone: FocusZone,
        registry: &ShortcutRegistry,
        platform: Platform,
        palette: &Palette,
    ) {
        let key_style = Style::default().fg(palette.accent).add_modifier(Modifier::BOLD);
        let text_style = Style::default().fg(palette.muted);

        let mut spans = Vec::new();
        let mut push = |key: String, desc: &str| {
            if !spans.is_empty() {
                spans.push(Span::styled(" • ", text_style));
            }
            spans.push(Span::styled(key, key_style));
            spans.push(Span::styled(format!(" {}", desc), text_style));
        };

        for (key, desc) in Self::zone_hints(zone) {
            push(key.to_string(), desc);
        }
        for (id, label) in [
            (shortcuts::ADD_PROJECT, "add"),
            (shortcuts::TOGGLE_SIDEBAR, "sidebar"),
            (shortcuts::OPEN_SETTINGS, "settings"),
            (shortcuts::SHOW_HELP, "help"),
            (shortcuts::QUIT, "quit"),
        ] {
            let key = registry.display(id, platform);
            if !key.is_empty() {
                push(key, label);
            }
        }

        let status_bar = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
        f.render_widget(status_bar, area);
    }
}
