//! Settings: theme, toasts, icon theme and the shortcut table.

use std::collections::BTreeMap;

use crate::icons::IconService;
use crate::preferences::Theme;
use crate::shortcuts::{self, Platform, Shortcut, ShortcutCategory};
use crate::ui::components::dialogs::common;
use crate::ui::layout::LayoutManager;
use crate::ui::palette::Palette;
use ratatui::{
    layout::{Constraint, Layout, Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph},
    Frame,
};

/// Rows of the settings dialog the cursor can land on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsRow {
    Theme,
    Toasts,
    IconTheme,
    ResetShortcuts,
}

impl SettingsRow {
    pub const ALL: [SettingsRow; 4] = [
        SettingsRow::Theme,
        SettingsRow::Toasts,
        SettingsRow::IconTheme,
        SettingsRow::ResetShortcuts,
    ];

    pub fn at(index: usize) -> SettingsRow {
        Self::ALL[index.min(Self::ALL.len() - 1)]
    }
}

/// Current values shown by the dialog, refreshed by the owner before drawing
#[derive(Debug, Clone)]
pub struct SettingsSnapshot {
    pub theme: Theme,
    pub toasts_enabled: bool,
    pub shortcuts: BTreeMap<ShortcutCategory, Vec<Shortcut>>,
    pub platform: Platform,
}

impl Default for SettingsSnapshot {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            toasts_enabled: true,
            shortcuts: BTreeMap::new(),
            platform: Platform::current(),
        }
    }
}

pub fn render_settings_dialog(
    f: &mut Frame,
    area: Rect,
    icons: &IconService,
    palette: &Palette,
    snapshot: &SettingsSnapshot,
    cursor: usize,
) {
    let dialog_area = LayoutManager::centered_rect(70, 80, area);
    f.render_widget(Clear, dialog_area);
    f.render_widget(
        common::create_dialog_block(format!(" {} Settings ", icons.settings()), palette.accent),
        dialog_area,
    );

    let chunks = Layout::vertical([
        Constraint::Length(SettingsRow::ALL.len() as u16 + 1),
        Constraint::Min(1),
        Constraint::Length(1),
    ])
    .split(dialog_area.inner(Margin::new(2, 1)));

    let label_style = Style::default().fg(palette.text);
    let value_style = Style::default().fg(palette.accent).add_modifier(Modifier::BOLD);

    let rows: Vec<Line> = SettingsRow::ALL
        .iter()
        .enumerate()
        .map(|(index, row)| {
            let (label, value) = match row {
                SettingsRow::Theme => ("Theme", snapshot.theme.label().to_string()),
                SettingsRow::Toasts => (
                    "Notifications",
                    if snapshot.toasts_enabled { "On" } else { "Off" }.to_string(),
                ),
                SettingsRow::IconTheme => ("Icons", icons.theme().label().to_string()),
                SettingsRow::ResetShortcuts => ("Reset shortcuts to defaults", String::new()),
            };
            let marker = if index == cursor { "› " } else { "  " };
            let mut line = Line::from(vec![
                Span::styled(marker, Style::default().fg(palette.accent)),
                Span::styled(format!("{:<30}", label), label_style),
                Span::styled(value, value_style),
            ]);
            if index == cursor {
                line = line.style(Style::default().bg(palette.cursor_bg));
            }
            line
        })
        .collect();
    f.render_widget(Paragraph::new(rows), chunks[0]);

    let separator = if snapshot.platform == Platform::Apple { "" } else { "+" };
    let mut shortcut_lines = Vec::new();
    for (category, group) in &snapshot.shortcuts {
        shortcut_lines.push(Line::styled(
            category.label().to_string(),
            Style::default().fg(palette.muted).add_modifier(Modifier::BOLD),
        ));
        for shortcut in group {
            shortcut_lines.push(Line::from(vec![
                Span::styled(format!("  {:<28}", shortcut.description), label_style),
                Span::styled(
                    shortcuts::format(shortcut, snapshot.platform).join(separator),
                    Style::default().fg(palette.key),
                ),
            ]));
        }
    }
    f.render_widget(Paragraph::new(shortcut_lines), chunks[1]);

    f.render_widget(
        common::create_instructions_paragraph(
            &[
                ("↑↓", Color::Cyan, " Move"),
                common::shortcuts::SEPARATOR,
                ("Enter/Space", Color::Green, " Change"),
                common::shortcuts::SEPARATOR,
                ("Esc", Color::Red, " Close"),
            ],
            palette,
        ),
        chunks[2],
    );
}
