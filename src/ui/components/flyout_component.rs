//! Floating project list drawn beside the collapsed sidebar.

use crate::backend::Project;
use crate::constants::FLYOUT_WIDTH;
use crate::icons::IconService;
use crate::ui::components::sidebar_component::project_line;
use crate::ui::palette::Palette;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{block::BorderType, Block, Borders, Clear, List, ListItem, ListState},
    Frame,
};

/// What the overlay needs from the owner for one frame
pub struct FlyoutView<'a> {
    pub projects: &'a [Project],
    pub cursor: usize,
    pub selected_id: Option<i64>,
    /// False while mounted but still fading in or out
    pub visible: bool,
}

#[derive(Default)]
pub struct FlyoutComponent {
    pub icons: IconService,
    pub palette: Palette,
    list_state: ListState,
}

impl FlyoutComponent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overlay rect to the right of `sidebar`, clipped to `screen`
    pub fn area(sidebar: Rect, screen: Rect, item_count: usize) -> Rect {
        let x = sidebar.x + sidebar.width;
        let width = FLYOUT_WIDTH.min(screen.width.saturating_sub(x));
        let height = (item_count as u16 + 2).min(sidebar.height);
        Rect {
            x,
            y: sidebar.y,
            width,
            height,
        }
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect, view: &FlyoutView) {
        if area.width < 4 || area.height < 3 {
            return;
        }

        let mut base = Style::default().fg(self.palette.text);
        if !view.visible {
            base = base.add_modifier(Modifier::DIM);
        }

        let items: Vec<ListItem> = view
            .projects
            .iter()
            .enumerate()
            .map(|(index, project)| {
                let is_selected = view.selected_id == Some(project.id);
                let mut style = self.palette.row_style(index == view.cursor, is_selected, true);
                if !view.visible {
                    style = style.add_modifier(Modifier::DIM);
                }
                ListItem::new(project_line(&self.icons, project, true)).style(style)
            })
            .collect();

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.palette.border_style(view.visible))
            .title(format!(" {} Projects ", self.icons.projects_title()))
            .style(base);

        self.list_state.select(Some(view.cursor));

        f.render_widget(Clear, area);
        f.render_stateful_widget(List::new(items).block(block), area, &mut self.list_state);
    }
}
