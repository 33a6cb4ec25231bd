//! Read-only viewer for the selected env file.

use crate::backend::EnvFile;
use crate::constants::NO_FILE_SELECTED_HINT;
use crate::icons::IconService;
use crate::ui::components::scroll_behavior::ScrollView;
use crate::ui::core::{actions::Action, Component};
use crate::ui::palette::Palette;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{block::BorderType, Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, Wrap},
    Frame,
};

/// How a single line of an env file is displayed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnvLine<'a> {
    Blank,
    Comment(&'a str),
    Variable { key: &'a str, value: &'a str },
    Invalid(&'a str),
}

/// Classify a line for highlighting. Not a full dotenv parser.
pub fn classify_line(line: &str) -> EnvLine<'_> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return EnvLine::Blank;
    }
    if trimmed.starts_with('#') {
        return EnvLine::Comment(line);
    }
    match line.split_once('=') {
        Some((key, value)) if !key.is_empty() => EnvLine::Variable { key, value },
        _ => EnvLine::Invalid(line),
    }
}

pub struct EnvViewerComponent {
    file: Option<EnvFile>,
    content: Option<String>,
    loading: bool,
    pub icons: IconService,
    pub palette: Palette,
    scroll: ScrollView,
    area: Rect,
}

impl Default for EnvViewerComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl EnvViewerComponent {
    pub fn new() -> Self {
        Self {
            file: None,
            content: None,
            loading: false,
            icons: IconService::default(),
            palette: Palette::default(),
            scroll: ScrollView::new(),
            area: Rect::default(),
        }
    }

    pub fn update_data(&mut self, file: Option<&EnvFile>, content: Option<&str>, loading: bool) {
        let changed_file = self.file.as_ref().map(|f| f.path.as_str()) != file.map(|f| f.path.as_str());
        if changed_file {
            self.scroll.reset();
        }
        self.file = file.cloned();
        self.content = content.map(str::to_string);
        self.loading = loading;
    }

    fn styled_line<'a>(&self, line: &'a str) -> Line<'a> {
        match classify_line(line) {
            EnvLine::Blank => Line::raw(""),
            EnvLine::Comment(text) => Line::styled(text, Style::default().fg(self.palette.comment)),
            EnvLine::Variable { key, value } => Line::from(vec![
                Span::styled(key, Style::default().fg(self.palette.key)),
                Span::styled("=", Style::default().fg(self.palette.muted)),
                Span::styled(value, Style::default().fg(self.palette.value)),
            ]),
            EnvLine::Invalid(text) => Line::styled(text, Style::default().fg(self.palette.warning)),
        }
    }
}

impl Component for EnvViewerComponent {
    /// PageUp/PageDown and Shift+arrows scroll the viewer from any zone
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if self.content.is_none() {
            return Action::None;
        }
        match key.code {
            KeyCode::PageUp | KeyCode::PageDown => {
                self.scroll.handle_key(key.code);
            }
            KeyCode::Up | KeyCode::Down if key.modifiers.contains(KeyModifiers::SHIFT) => {
                self.scroll.handle_key(key.code);
            }
            _ => {}
        }
        Action::None
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) -> Action {
        let area = self.area;
        let inside = mouse.column >= area.x
            && mouse.column < area.x + area.width
            && mouse.row >= area.y
            && mouse.row < area.y + area.height;
        if inside {
            match mouse.kind {
                MouseEventKind::ScrollUp => self.scroll.scroll_up(),
                MouseEventKind::ScrollDown => self.scroll.scroll_down(),
                _ => {}
            }
        }
        Action::None
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        self.area = rect;

        let title = match &self.file {
            Some(file) if file.is_active => format!(
                " {} {}  {} active ",
                self.icons.viewer_title(),
                file.name,
                self.icons.env_active()
            ),
            Some(file) => format!(" {} {} ", self.icons.viewer_title(), file.name),
            None => format!(" {} Viewer ", self.icons.viewer_title()),
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(self.palette.border))
            .title(title);

        let Some(file) = self.file.clone() else {
            let hint = Paragraph::new(NO_FILE_SELECTED_HINT)
                .style(Style::default().fg(self.palette.muted))
                .wrap(Wrap { trim: true })
                .block(block);
            f.render_widget(hint, rect);
            return;
        };

        let inner = block.inner(rect);
        f.render_widget(block, rect);

        let footer_height = if file.modified_at.is_some() { 1 } else { 0 };
        let chunks = Layout::vertical([Constraint::Min(1), Constraint::Length(footer_height)]).split(inner);

        if self.loading && self.content.is_none() {
            f.render_widget(
                Paragraph::new("Loading…").style(Style::default().fg(self.palette.muted)),
                chunks[0],
            );
        } else if let Some(content) = self.content.as_deref() {
            let lines: Vec<Line> = content.split('\n').map(|line| self.styled_line(line)).collect();
            let viewport = chunks[0].height as usize;
            let overflows = lines.len() > viewport;
            self.scroll.fit(lines.len(), viewport);

            let paragraph = Paragraph::new(lines).scroll((self.scroll.offset() as u16, 0));
            f.render_widget(paragraph, chunks[0]);

            if overflows {
                let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
                    .style(Style::default().fg(self.palette.muted));
                f.render_stateful_widget(scrollbar, rect, self.scroll.scrollbar_state_mut());
            }
        }

        if let Some(modified) = &file.modified_at {
            let footer = Paragraph::new(format!("Modified: {}", modified))
                .style(Style::default().fg(self.palette.muted).add_modifier(Modifier::ITALIC));
            f.render_widget(footer, chunks[1]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_lines() {
        assert_eq!(classify_line("   "), EnvLine::Blank);
        assert_eq!(classify_line("  # note"), EnvLine::Comment("  # note"));
        assert_eq!(
            classify_line("DATABASE_URL=postgres://localhost/db?a=b"),
            EnvLine::Variable {
                key: "DATABASE_URL",
                value: "postgres://localhost/db?a=b"
            }
        );
        assert_eq!(classify_line("EMPTY="), EnvLine::Variable { key: "EMPTY", value: "" });
        assert_eq!(classify_line("=orphan"), EnvLine::Invalid("=orphan"));
        assert_eq!(classify_line("export"), EnvLine::Invalid("export"));
    }
}
