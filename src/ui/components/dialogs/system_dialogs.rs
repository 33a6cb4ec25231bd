use std::collections::BTreeMap;

use crate::constants::DIALOG_TITLE_DEBUG_LOGS;
use crate::icons::IconService;
use crate::shortcuts::{self, Platform, Shortcut, ShortcutCategory};
use crate::ui::components::dialogs::common;
use crate::ui::components::scroll_behavior::ScrollView;
use crate::ui::layout::LayoutManager;
use crate::ui::palette::Palette;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph, Scrollbar, ScrollbarOrientation},
    Frame,
};

/// Focus keys are fixed; only the global shortcuts come from the registry
const NAVIGATION_HELP: &[(&str, &str)] = &[
    ("Tab", "Switch between projects and env files"),
    ("Ctrl+1 / Ctrl+2", "Jump to projects / env files"),
    ("↑/k ↓/j", "Move the cursor"),
    ("Home / End", "First / last item"),
    ("Enter", "Open project or view env file"),
    ("e", "Edit project"),
    ("Del / Backspace", "Remove project"),
    ("a", "Activate env file (copies it to .env)"),
    ("r", "Rescan env files"),
    ("PgUp / PgDn", "Scroll the viewer"),
    ("x", "Dismiss error banners"),
    ("i", "Cycle icon theme"),
    ("G", "Debug logs"),
];

/// Frame of a scrollable text popup
struct TextPopup<'a> {
    title: String,
    color: Color,
    footer: &'a str,
}

/// Bordered, scrollable text popup with a one-line footer
fn render_scrollable_text(
    f: &mut Frame,
    dialog_area: Rect,
    popup: TextPopup,
    lines: Vec<Line>,
    scroll: &mut ScrollView,
    palette: &Palette,
) {
    f.render_widget(Clear, dialog_area);
    f.render_widget(common::create_dialog_block(popup.title, popup.color), dialog_area);

    let inner = dialog_area.inner(Margin::new(2, 1));
    let chunks = Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).split(inner);

    let total_lines = lines.len();
    let visible_height = chunks[0].height as usize;
    scroll.fit(total_lines, visible_height);

    f.render_widget(
        Paragraph::new(lines)
            .style(Style::default().fg(palette.text))
            .scroll((scroll.offset() as u16, 0)),
        chunks[0],
    );
    f.render_widget(
        Paragraph::new(popup.footer.to_string())
            .style(Style::default().fg(palette.muted))
            .alignment(Alignment::Center),
        chunks[1],
    );

    if total_lines > visible_height {
        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .begin_symbol(Some("↑"))
            .end_symbol(Some("↓"))
            .track_symbol(Some("│"))
            .thumb_symbol("▐")
            .style(Style::default().fg(palette.muted))
            .thumb_style(Style::default().fg(palette.text));
        f.render_stateful_widget(
            scrollbar,
            dialog_area.inner(Margin::new(0, 1)),
            scroll.scrollbar_state_mut(),
        );
    }
}

pub fn render_error_dialog(
    f: &mut Frame,
    area: Rect,
    icons: &IconService,
    palette: &Palette,
    message: &str,
    scroll: &mut ScrollView,
) {
    let dialog_area = LayoutManager::centered_rect_lines(70, 12, area);
    let lines = message.lines().map(|l| Line::raw(l.to_string())).collect();
    render_scrollable_text(
        f,
        dialog_area,
        TextPopup {
            title: format!(" {} Error ", icons.error()),
            color: palette.error,
            footer: "Press any key to continue • j/k to scroll",
        },
        lines,
        scroll,
        palette,
    );
}

pub fn render_info_dialog(
    f: &mut Frame,
    area: Rect,
    icons: &IconService,
    palette: &Palette,
    message: &str,
    scroll: &mut ScrollView,
) {
    let dialog_area = LayoutManager::centered_rect_lines(60, 10, area);
    let lines = message.lines().map(|l| Line::raw(l.to_string())).collect();
    render_scrollable_text(
        f,
        dialog_area,
        TextPopup {
            title: format!(" {} Info ", icons.info()),
            color: palette.accent,
            footer: "Press any key to continue • j/k to scroll",
        },
        lines,
        scroll,
        palette,
    );
}

/// Help text: fixed navigation keys plus the current global shortcuts
pub fn help_lines(
    shortcut_groups: &BTreeMap<ShortcutCategory, Vec<Shortcut>>,
    platform: Platform,
    palette: &Palette,
) -> Vec<Line<'static>> {
    let heading = Style::default().fg(palette.accent).add_modifier(Modifier::BOLD);
    let key_style = Style::default().fg(palette.key);

    let row = |key: String, desc: String| {
        Line::from(vec![
            Span::styled(format!("  {:<20}", key), key_style),
            Span::raw(desc),
        ])
    };

    let mut lines = vec![Line::styled("NAVIGATION", heading)];
    lines.extend(
        NAVIGATION_HELP
            .iter()
            .map(|(key, desc)| row(key.to_string(), desc.to_string())),
    );

    for (category, group) in shortcut_groups {
        lines.push(Line::raw(""));
        lines.push(Line::styled(category.label().to_uppercase(), heading));
        for shortcut in group {
            let separator = if platform == Platform::Apple { "" } else { "+" };
            let keys = shortcuts::format(shortcut, platform).join(separator);
            lines.push(row(keys, shortcut.description.clone()));
        }
    }
    lines
}

pub fn render_help_dialog(f: &mut Frame, area: Rect, palette: &Palette, lines: Vec<Line>, scroll: &mut ScrollView) {
    let dialog_area = LayoutManager::centered_rect(80, 80, area);
    render_scrollable_text(
        f,
        dialog_area,
        TextPopup {
            title: " Keyboard Shortcuts ".to_string(),
            color: palette.accent,
            footer: "Press 'Esc', '?' or 'q' to close",
        },
        lines,
        scroll,
        palette,
    );
}

pub fn render_logs_dialog(f: &mut Frame, area: Rect, palette: &Palette, logs: &[String], scroll: &mut ScrollView) {
    let dialog_area = LayoutManager::centered_rect(90, 90, area);
    let lines = if logs.is_empty() {
        vec![Line::styled("No debug logs available", Style::default().fg(palette.muted))]
    } else {
        logs.iter().map(|l| Line::raw(l.clone())).collect()
    };
    render_scrollable_text(
        f,
        dialog_area,
        TextPopup {
            title: format!(" {} ", DIALOG_TITLE_DEBUG_LOGS),
            color: palette.border,
            footer: "j/k scroll • PgUp/PgDn page • Home/End jump",
        },
        lines,
        scroll,
        palette,
    );
}
