//! Line-based scrolling for read-only text panels (viewer, help, logs).

use crossterm::event::KeyCode;
use ratatui::widgets::ScrollbarState;

const PAGE_SIZE: usize = 10;

/// Scroll offset plus its scrollbar state, clamped to the content on render
#[derive(Debug, Default, Clone)]
pub struct ScrollView {
    offset: usize,
    max_offset: Option<usize>,
    scrollbar_state: ScrollbarState,
}

impl ScrollView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    fn set(&mut self, offset: usize) {
        self.offset = match self.max_offset {
            Some(max) => offset.min(max),
            None => offset,
        };
        self.scrollbar_state = self.scrollbar_state.position(self.offset);
    }

    pub fn scroll_up(&mut self) {
        self.set(self.offset.saturating_sub(1));
    }

    pub fn scroll_down(&mut self) {
        self.set(self.offset.saturating_add(1));
    }

    pub fn page_up(&mut self) {
        self.set(self.offset.saturating_sub(PAGE_SIZE));
    }

    pub fn page_down(&mut self) {
        self.set(self.offset.saturating_add(PAGE_SIZE));
    }

    pub fn scroll_to_top(&mut self) {
        self.set(0);
    }

    /// Jumps past the end; the next `fit` pulls it back to the last page
    pub fn scroll_to_bottom(&mut self) {
        self.set(usize::MAX);
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Clamp to `content_len` lines shown through `viewport` rows
    pub fn fit(&mut self, content_len: usize, viewport: usize) {
        let max = content_len.saturating_sub(viewport);
        self.max_offset = Some(max);
        self.offset = self.offset.min(max);
        self.scrollbar_state = self
            .scrollbar_state
            .content_length(max + 1)
            .viewport_content_length(viewport)
            .position(self.offset);
    }

    pub fn scrollbar_state_mut(&mut self) -> &mut ScrollbarState {
        &mut self.scrollbar_state
    }

    /// Apply a navigation key; returns false for keys that do not scroll
    pub fn handle_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Up | KeyCode::Char('k') => self.scroll_up(),
            KeyCode::Down | KeyCode::Char('j') => self.scroll_down(),
            KeyCode::PageUp => self.page_up(),
            KeyCode::PageDown => self.page_down(),
            KeyCode::Home => self.scroll_to_top(),
            KeyCode::End => self.scroll_to_bottom(),
            _ => return false,
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_clamps_offset() {
        let mut view = ScrollView::new();
        view.scroll_to_bottom();
        view.fit(30, 10);
        assert_eq!(view.offset(), 20);

        view.scroll_down();
        assert_eq!(view.offset(), 20);

        view.page_up();
        assert_eq!(view.offset(), 10);
    }

    #[test]
    fn test_short_content_never_scrolls() {
        let mut view = ScrollView::new();
        view.fit(3, 10);
        view.page_down();
        assert_eq!(view.offset(), 0);
    }
}
