use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::ui::palette::Palette;

/// Creates a styled main dialog block
pub fn create_dialog_block<'a>(title: String, theme_color: Color) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(title)
        .title_style(Style::default().fg(theme_color).add_modifier(Modifier::BOLD))
        .border_style(Style::default().fg(theme_color))
}

/// Input field with a visible block cursor at `cursor_position` (in chars)
pub fn create_input_paragraph<'a>(
    input_buffer: &str,
    cursor_position: usize,
    field_title: &str,
    palette: &Palette,
) -> Paragraph<'a> {
    let before: String = input_buffer.chars().take(cursor_position).collect();
    let under: Option<char> = input_buffer.chars().nth(cursor_position);
    let after: String = input_buffer.chars().skip(cursor_position + 1).collect();

    let cursor_style = Style::default().fg(palette.text).add_modifier(Modifier::REVERSED);
    let line = Line::from(vec![
        Span::raw(before),
        Span::styled(under.map_or_else(|| " ".to_string(), String::from), cursor_style),
        Span::raw(after),
    ]);

    let input_block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(format!(" {} ", field_title))
        .border_style(Style::default().fg(palette.border));

    Paragraph::new(line)
        .block(input_block)
        .style(Style::default().fg(palette.text))
}

/// Read-only field with a title, used for the icon and color pickers
pub fn create_selection_paragraph<'a>(value: Line<'a>, field_title: &str, palette: &Palette) -> Paragraph<'a> {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(format!(" {} ", field_title))
        .border_style(Style::default().fg(palette.border));

    Paragraph::new(value).block(block).style(Style::default().fg(palette.text))
}

/// Inline validation message under a form
pub fn render_validation_error(f: &mut Frame, area: Rect, error: Option<&str>, palette: &Palette) {
    if let Some(error) = error {
        f.render_widget(
            Paragraph::new(error).style(Style::default().fg(palette.error)),
            area,
        );
    }
}

/// Instruction shortcut definition: (key, color, description)
pub type InstructionShortcut = (&'static str, Color, &'static str);

/// Creates a paragraph with color-coded instruction shortcuts
pub fn create_instructions_paragraph<'a>(instructions: &[InstructionShortcut], palette: &Palette) -> Paragraph<'a> {
    let mut instruction_text = Vec::new();
    for (key, color, desc) in instructions {
        instruction_text.push(Span::styled(
            *key,
            Style::default().fg(*color).add_modifier(Modifier::BOLD),
        ));
        instruction_text.push(Span::styled(*desc, Style::default().fg(palette.muted)));
    }

    Paragraph::new(Line::from(instruction_text)).alignment(Alignment::Center)
}

/// Common instruction shortcuts used across dialogs
pub mod shortcuts {
    use super::*;

    pub const SEPARATOR: InstructionShortcut = (" • ", Color::Gray, "");
    pub const ESC_CANCEL: InstructionShortcut = ("Esc", Color::Red, " Cancel");
    pub const ENTER_SAVE: InstructionShortcut = ("Enter", Color::Green, " Save");
    pub const TAB_ICON: InstructionShortcut = ("Tab", Color::Cyan, " Icon");
    pub const BACKTAB_COLOR: InstructionShortcut = ("Shift+Tab", Color::Cyan, " Color");
}
