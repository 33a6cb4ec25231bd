//! Short-lived notifications in the top-right corner.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{block::BorderType, Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::constants::TOAST_DURATION_MS;
use crate::icons::IconService;
use crate::ui::core::ToastKind;
use crate::ui::palette::Palette;

const MAX_TOASTS: usize = 3;
const TOAST_WIDTH: u16 = 44;

#[derive(Debug, Clone)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
    pub expires_at: Instant,
}

#[derive(Debug)]
pub struct ToastManager {
    toasts: VecDeque<Toast>,
    duration: Duration,
}

impl Default for ToastManager {
    fn default() -> Self {
        Self::new(Duration::from_millis(TOAST_DURATION_MS))
    }
}

impl ToastManager {
    pub fn new(duration: Duration) -> Self {
        Self {
            toasts: VecDeque::new(),
            duration,
        }
    }

    pub fn push(&mut self, kind: ToastKind, message: String, now: Instant) {
        if self.toasts.len() == MAX_TOASTS {
            self.toasts.pop_front();
        }
        self.toasts.push_back(Toast {
            kind,
            message,
            expires_at: now + self.duration,
        });
    }

    /// Drop expired toasts; returns true if any were removed
    pub fn expire(&mut self, now: Instant) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|toast| toast.expires_at > now);
        before != self.toasts.len()
    }

    pub fn toasts(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    pub fn clear(&mut self) {
        self.toasts.clear();
    }

    pub fn render(&self, f: &mut Frame, screen: Rect, icons: &IconService, palette: &Palette) {
        let width = TOAST_WIDTH.min(screen.width);
        let mut y = screen.y + 1;

        for toast in &self.toasts {
            let (icon, color) = match toast.kind {
                ToastKind::Success => (icons.success(), palette.success),
                ToastKind::Error => (icons.error(), palette.error),
                ToastKind::Info => (icons.info(), palette.accent),
            };
            let text = format!("{} {}", icon, toast.message);
            let lines = (text.chars().count() as u16 / width.saturating_sub(4).max(1)) + 1;
            let height = lines + 2;
            if y + height > screen.y + screen.height {
                break;
            }

            let area = Rect {
                x: screen.x + screen.width - width,
                y,
                width,
                height,
            };
            let block = Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(color));

            f.render_widget(Clear, area);
            f.render_widget(
                Paragraph::new(text)
                    .style(Style::default().fg(palette.text))
                    .wrap(Wrap { trim: true })
                    .block(block),
                area,
            );
            y += height;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toasts_expire_and_cap() {
        let t0 = Instant::now();
        let mut manager = ToastManager::new(Duration::from_millis(100));
        for i in 0..4 {
            manager.push(ToastKind::Info, format!("toast {}", i), t0);
        }
        let messages: Vec<&str> = manager.toasts().map(|t| t.message.as_str()).collect();
        assert_eq!(messages, vec!["toast 1", "toast 2", "toast 3"]);

        assert!(!manager.expire(t0 + Duration::from_millis(99)));
        assert!(manager.expire(t0 + Duration::from_millis(100)));
        assert!(manager.is_empty());
    }
}
