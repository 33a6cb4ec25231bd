//! Env file list for the selected project, with a project header on top.

use crate::backend::{EnvFile, Project};
use crate::constants::{EMPTY_ENV_FILES_HINT, NO_PROJECT_SELECTED_HINT};
use crate::icons::IconService;
use crate::ui::components::scrollbar_helper::ScrollbarHelper;
use crate::ui::core::{actions::Action, Component};
use crate::ui::palette::Palette;
use crossterm::event::{KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{block::BorderType, Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

#[derive(Debug, Clone, Default)]
pub struct EnvListStatus {
    pub loading: bool,
    pub refreshing: bool,
    pub error: Option<String>,
}

pub struct EnvListComponent {
    project: Option<Project>,
    env_files: Vec<EnvFile>,
    selected_path: Option<String>,
    cursor: usize,
    zone_active: bool,
    status: EnvListStatus,
    pub icons: IconService,
    pub palette: Palette,
    list_state: ListState,
    list_area: Rect,
    scrollbar_helper: ScrollbarHelper,
}

impl Default for EnvListComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl EnvListComponent {
    pub fn new() -> Self {
        Self {
            project: None,
            env_files: Vec::new(),
            selected_path: None,
            cursor: 0,
            zone_active: false,
            status: EnvListStatus::default(),
            icons: IconService::default(),
            palette: Palette::default(),
            list_state: ListState::default(),
            list_area: Rect::default(),
            scrollbar_helper: ScrollbarHelper::new(),
        }
    }

    pub fn update_data(&mut self, project: Option<&Project>, env_files: &[EnvFile], selected_path: Option<&str>) {
        self.project = project.cloned();
        self.env_files = env_files.to_vec();
        self.selected_path = selected_path.map(str::to_string);
    }

    pub fn set_focus(&mut self, cursor: usize, zone_active: bool) {
        self.cursor = cursor;
        self.zone_active = zone_active;
    }

    pub fn set_status(&mut self, status: EnvListStatus) {
        self.status = status;
    }

    fn render_header(&self, f: &mut Frame, area: Rect, project: &Project) {
        let mut title = vec![Span::styled(
            project.name.as_str(),
            Style::default().fg(self.palette.text).add_modifier(Modifier::BOLD),
        )];
        if let Some(env) = &project.active_environment {
            title.push(Span::styled(
                format!("  {} {}", self.icons.env_active(), env),
                Style::default().fg(self.palette.success),
            ));
        }
        let lines = vec![
            Line::from(title),
            Line::from(Span::styled(project.path.as_str(), Style::default().fg(self.palette.muted))),
        ];
        f.render_widget(Paragraph::new(lines), area);
    }

    fn render_error(&self, f: &mut Frame, area: Rect, error: &str) {
        let banner = Paragraph::new(format!("{} {} (x to dismiss)", self.icons.error(), error))
            .style(Style::default().fg(self.palette.error))
            .wrap(Wrap { trim: true });
        f.render_widget(banner, area);
    }

    fn title(&self) -> String {
        let suffix = if self.status.refreshing {
            format!(" {}", self.icons.refreshing())
        } else if self.status.loading {
            " …".to_string()
        } else {
            String::new()
        };
        format!(" {} Environments{} ", self.icons.env_title(), suffix)
    }

    fn file_item(&self, index: usize, file: &EnvFile) -> ListItem<'static> {
        let is_selected = self.selected_path.as_deref() == Some(file.path.as_str());
        let style = self.palette.row_style(index == self.cursor, is_selected, self.zone_active);

        let (marker, marker_style) = if file.is_active {
            (self.icons.env_active(), Style::default().fg(self.palette.success))
        } else {
            (self.icons.env_inactive(), Style::default().fg(self.palette.muted))
        };

        let mut spans = vec![
            Span::styled(marker, marker_style),
            Span::raw(" "),
            Span::raw(file.name.clone()),
        ];
        if let Some(modified) = &file.modified_at {
            spans.push(Span::styled(
                format!("  {}", modified),
                Style::default().fg(self.palette.muted),
            ));
        }
        ListItem::new(Line::from(spans)).style(style)
    }
}

impl Component for EnvListComponent {
    fn handle_key_events(&mut self, _key: KeyEvent) -> Action {
        Action::None
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) -> Action {
        let area = self.list_area;
        let is_in_area = mouse.column >= area.x
            && mouse.column < area.x + area.width
            && mouse.row >= area.y
            && mouse.row < area.y + area.height;

        if !is_in_area {
            return Action::None;
        }

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) if mouse.row > area.y && mouse.row < area.y + area.height - 1 => {
                let clicked_index = self.list_state.offset() + (mouse.row - area.y - 1) as usize;
                if clicked_index < self.env_files.len() {
                    Action::FocusEnvListItem(clicked_index)
                } else {
                    Action::None
                }
            }
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.palette.border_style(self.zone_active))
            .title(self.title());

        let Some(project) = self.project.clone() else {
            self.list_area = Rect::default();
            let hint = Paragraph::new(NO_PROJECT_SELECTED_HINT)
                .style(Style::default().fg(self.palette.muted))
                .wrap(Wrap { trim: true })
                .block(block);
            f.render_widget(hint, rect);
            return;
        };

        let error_height = if self.status.error.is_some() { 2 } else { 0 };
        let chunks = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(error_height),
            Constraint::Min(3),
        ])
        .split(rect);

        self.render_header(f, chunks[0], &project);
        if let Some(error) = self.status.error.as_deref() {
            self.render_error(f, chunks[1], error);
        }

        let list_rect = chunks[2];
        self.list_area = list_rect;

        if self.env_files.is_empty() {
            let text = if self.status.loading { "" } else { EMPTY_ENV_FILES_HINT };
            let hint = Paragraph::new(text)
                .style(Style::default().fg(self.palette.muted))
                .wrap(Wrap { trim: true })
                .block(block);
            f.render_widget(hint, list_rect);
            return;
        }

        let items: Vec<ListItem> = self
            .env_files
            .iter()
            .enumerate()
            .map(|(index, file)| self.file_item(index, file))
            .collect();

        let total = items.len();
        let (content_area, scrollbar_area) = ScrollbarHelper::calculate_areas(list_rect, total);
        let viewport = content_area.height.saturating_sub(2) as usize;

        *self.list_state.offset_mut() = ScrollbarHelper::visible_offset(self.list_state.offset(), self.cursor, viewport);
        self.list_state.select(Some(self.cursor));

        self.scrollbar_helper.set_color(self.palette.muted);
        self.scrollbar_helper.update_state(total, self.cursor, Some(viewport));

        f.render_stateful_widget(List::new(items).block(block), content_area, &mut self.list_state);
        self.scrollbar_helper.render(f, scrollbar_area);
    }
}
