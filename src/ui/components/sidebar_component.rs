//! Project sidebar.
//!
//! Expanded, it lists every project with its icon and name. Collapsed, it
//! shrinks to a column of icons and the flyout takes over showing names. The
//! keyboard cursor is owned by the focus manager; this component only draws it
//! and turns mouse clicks into [`Action::FocusSidebarItem`].

use crate::backend::Project;
use crate::constants::EMPTY_PROJECTS_HINT;
use crate::icons::{parse_hex_color, IconService};
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

/// Icon plus name for one project, as shown in the sidebar and the flyout
pub(crate) fn project_line<'a>(icons: &IconService, project: &'a Project, with_name: bool) -> Line<'a> {
    let icon_style = match parse_hex_color(&project.icon_color) {
        Some(color) => Style::default().fg(color),
        None => Style::default(),
    };
    let mut spans = vec![Span::styled(icons.project_icon(&project.icon), icon_style)];
    if with_name {
        spans.push(Span::raw(" "));
        spans.push(Span::raw(project.name.as_str()));
    }
    Line::from(spans)
}

pub struct SidebarComponent {
    projects: Vec<Project>,
    selected_id: Option<i64>,
    cursor: usize,
    zone_active: bool,
    collapsed: bool,
    loading: bool,
    error: Option<String>,
    pub icons: IconService,
    pub palette: Palette,
    list_state: ListState,
    list_area: Rect,
    scrollbar_helper: ScrollbarHelper,
}

impl Default for SidebarComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl SidebarComponent {
    pub fn new() -> Self {
        Self {
            projects: Vec::new(),
            selected_id: None,
            cursor: 0,
            zone_active: true,
            collapsed: false,
            loading: false,
            error: None,
            icons: IconService::default(),
            palette: Palette::default(),
            list_state: ListState::default(),
            list_area: Rect::default(),
            scrollbar_helper: ScrollbarHelper::new(),
        }
    }

    pub fn update_data(&mut self, projects: &[Project], selected_id: Option<i64>) {
        self.projects = projects.to_vec();
        self.selected_id = selected_id;
    }

    pub fn set_focus(&mut self, cursor: usize, zone_active: bool) {
        self.cursor = cursor;
        self.zone_active = zone_active;
    }

    pub fn set_collapsed(&mut self, collapsed: bool) {
        self.collapsed = collapsed;
    }

    pub fn set_status(&mut self, loading: bool, error: Option<String>) {
        self.loading = loading;
        self.error = error;
    }

    fn title(&self) -> String {
        if self.collapsed {
            return String::new();
        }
        let suffix = if self.loading { " …" } else { "" };
        format!(" {} Projects{} ", self.icons.projects_title(), suffix)
    }

    fn render_error(&self, f: &mut Frame, area: Rect, error: &str) {
        let text = if self.collapsed {
            self.icons.error().to_string()
        } else {
            format!("{} {} (x to dismiss)", self.icons.error(), error)
        };
        let banner = Paragraph::new(text)
            .style(Style::default().fg(self.palette.error))
            .wrap(Wrap { trim: true });
        f.render_widget(banner, area);
    }
}

impl Component for SidebarComponent {
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
            MouseEventKind::Down(MouseButton::Left) => {
                if mouse.row > area.y && mouse.row < area.y + area.height - 1 {
                    let clicked_index = self.list_state.offset() + (mouse.row - area.y - 1) as usize;
                    if clicked_index >= self.projects.len() {
                        return Action::None;
                    }
                    Action::FocusSidebarItem(clicked_index)
                } else {
                    Action::None
                }
            }
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let (list_rect, banner_rect) = match (&self.error, self.collapsed) {
            (Some(_), false) => {
                let chunks = Layout::vertical([Constraint::Min(3), Constraint::Length(3)]).split(rect);
                (chunks[0], Some(chunks[1]))
            }
            (Some(_), true) => {
                let chunks = Layout::vertical([Constraint::Min(3), Constraint::Length(1)]).split(rect);
                (chunks[0], Some(chunks[1]))
            }
            (None, _) => (rect, None),
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.palette.border_style(self.zone_active))
            .title(self.title());

        self.list_area = list_rect;

        if self.projects.is_empty() {
            let hint = if self.collapsed { "" } else { EMPTY_PROJECTS_HINT };
            let paragraph = Paragraph::new(hint)
                .style(Style::default().fg(self.palette.muted))
                .wrap(Wrap { trim: true })
                .block(block);
            f.render_widget(paragraph, list_rect);
        } else {
            let items: Vec<ListItem> = self
                .projects
                .iter()
                .enumerate()
                .map(|(index, project)| {
                    let is_selected = self.selected_id == Some(project.id);
                    let style = self.palette.row_style(index == self.cursor, is_selected, self.zone_active);
                    let mut line = project_line(&self.icons, project, !self.collapsed);
                    if !self.collapsed {
                        if let Some(env) = &project.active_environment {
                            line.spans.push(Span::styled(
                                format!("  {}", env),
                                Style::default().fg(self.palette.muted).add_modifier(Modifier::ITALIC),
                            ));
                        }
                    } else {
                        line = line.centered();
                    }
                    ListItem::new(line).style(style)
                })
                .collect();

            let total = items.len();
            let (content_area, scrollbar_area) = ScrollbarHelper::calculate_areas(list_rect, total);
            let viewport = content_area.height.saturating_sub(2) as usize;

            let offset = ScrollbarHelper::visible_offset(self.list_state.offset(), self.cursor, viewport);
            *self.list_state.offset_mut() = offset;
            self.list_state.select(Some(self.cursor));

            self.scrollbar_helper.set_color(self.palette.muted);
            self.scrollbar_helper.update_state(total, self.cursor, Some(viewport));

            let list = List::new(items).block(block);
            f.render_stateful_widget(list, content_area, &mut self.list_state);
            self.scrollbar_helper.render(f, scrollbar_area);
        }

        if let (Some(area), Some(error)) = (banner_rect, self.error.as_deref()) {
            self.render_error(f, area, error);
        }
    }
}
