//! Scrollbar state and layout shared by the scrollable panels.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

/// Scrollbar for a bordered panel.
///
/// The panels in envault draw a rounded border, so the scrollbar sits inside
/// the right border column between the top and bottom edges.
pub struct ScrollbarHelper {
    state: ScrollbarState,
    color: Color,
}

impl Default for ScrollbarHelper {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollbarHelper {
    pub fn new() -> Self {
        Self {
            state: ScrollbarState::new(0),
            color: Color::DarkGray,
        }
    }

    /// Track and thumb color, usually the palette's muted color
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    /// Update the scrollbar state with current content information.
    ///
    /// `viewport_height` is the number of rows visible inside the borders.
    pub fn update_state(&mut self, total_items: usize, current_position: usize, viewport_height: Option<usize>) {
        self.state = self.state.content_length(total_items).position(current_position);

        if let Some(height) = viewport_height {
            self.state = self.state.viewport_content_length(height);
        }
    }

    pub fn needs_scrollbar(total_items: usize, available_height: usize) -> bool {
        total_items > available_height
    }

    /// Split a bordered rect into the content area and an optional scrollbar column
    pub fn calculate_areas(rect: Rect, total_items: usize) -> (Rect, Option<Rect>) {
        let available_height = rect.height.saturating_sub(2) as usize;

        if Self::needs_scrollbar(total_items, available_height) {
            let content_area = Rect {
                width: rect.width.saturating_sub(1),
                ..rect
            };
            let scrollbar_area = Rect {
                x: rect.x + rect.width.saturating_sub(1),
                y: rect.y + 1,
                width: 1,
                height: rect.height.saturating_sub(2),
            };
            (content_area, Some(scrollbar_area))
        } else {
            (rect, None)
        }
    }

    /// First row to draw so that `cursor` stays inside a window of `height` rows
    pub fn visible_offset(current_offset: usize, cursor: usize, height: usize) -> usize {
        if height == 0 {
            return 0;
        }
        if cursor < current_offset {
            cursor
        } else if cursor >= current_offset + height {
            cursor + 1 - height
        } else {
            current_offset
        }
    }

    pub fn render(&mut self, f: &mut Frame, scrollbar_area: Option<Rect>) {
        if let Some(area) = scrollbar_area {
            let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .begin_symbol(Some("↑"))
                .end_symbol(Some("↓"))
                .track_symbol(Some("│"))
                .thumb_symbol("█")
                .style(Style::default().fg(self.color))
                .thumb_style(Style::default().fg(self.color));

            f.render_stateful_widget(scrollbar, area, &mut self.state);
        }
    }

    pub fn state_mut(&mut self) -> &mut ScrollbarState {
        &mut self.state
    }

    pub fn state(&self) -> &ScrollbarState {
        &self.state
    }
}
