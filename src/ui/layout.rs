//! Layout management and calculations

use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::constants::{MAIN_AREA_MIN_WIDTH, SIDEBAR_COLLAPSED_WIDTH, SIDEBAR_MAX_WIDTH, SIDEBAR_MIN_WIDTH};

/// Screen regions for one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppLayout {
    pub sidebar: Rect,
    pub env_list: Rect,
    pub viewer: Rect,
    pub status: Rect,
}

/// Manages layout calculations and constraints for the UI
pub struct LayoutManager;

impl LayoutManager {
    /// Split the screen into sidebar, env list, viewer and status bar
    #[must_use]
    pub fn app_layout(area: Rect, sidebar_width: u16, collapsed: bool) -> AppLayout {
        let rows = Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).split(area);
        let top = rows[0];

        let sidebar_width = Self::sidebar_width(top.width, sidebar_width, collapsed);
        let columns = Layout::horizontal([Constraint::Length(sidebar_width), Constraint::Min(0)]).split(top);

        let main = columns[1];
        let panes = if main.width >= 80 {
            Layout::horizontal([Constraint::Percentage(40), Constraint::Percentage(60)]).split(main)
        } else {
            Layout::vertical([Constraint::Percentage(45), Constraint::Percentage(55)]).split(main)
        };

        AppLayout {
            sidebar: columns[0],
            env_list: panes[0],
            viewer: panes[1],
            status: rows[1],
        }
    }

    /// Sidebar width after clamping to the configured range and the screen
    #[must_use]
    pub fn sidebar_width(screen_width: u16, configured: u16, collapsed: bool) -> u16 {
        if collapsed {
            return SIDEBAR_COLLAPSED_WIDTH.min(screen_width);
        }
        let width = configured.clamp(SIDEBAR_MIN_WIDTH, SIDEBAR_MAX_WIDTH);
        width.min(screen_width.saturating_sub(MAIN_AREA_MIN_WIDTH))
    }

    /// Calculate a centered rectangle within the given area
    #[must_use]
    pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
        let popup_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage((100 - percent_y) / 2),
                Constraint::Percentage(percent_y),
                Constraint::Percentage((100 - percent_y) / 2),
            ])
            .split(r);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(popup_layout[1])[1]
    }

    /// Calculate a centered rectangle with percentage width and fixed line height
    #[must_use]
    pub fn centered_rect_lines(percent_x: u16, height_lines: u16, r: Rect) -> Rect {
        let popup_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(height_lines),
                Constraint::Min(0),
            ])
            .split(r);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(popup_layout[1])[1]
    }
}
