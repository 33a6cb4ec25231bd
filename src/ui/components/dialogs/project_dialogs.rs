use crate::icons::{parse_hex_color, IconService};
use crate::ui::components::dialogs::common::{self, shortcuts};
use crate::ui::layout::LayoutManager;
use crate::ui::palette::Palette;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Margin, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph, Wrap},
    Frame,
};

/// Editable fields of the project form
pub struct ProjectForm<'a> {
    pub input: &'a str,
    pub cursor_position: usize,
    pub validation_error: Option<&'a str>,
}

pub fn render_project_add_dialog(f: &mut Frame, area: Rect, icons: &IconService, palette: &Palette, form: &ProjectForm) {
    let dialog_area = LayoutManager::centered_rect_lines(60, 9, area);
    f.render_widget(Clear, dialog_area);

    let block = common::create_dialog_block(format!(" {} Add Project ", icons.info()), palette.accent);
    f.render_widget(block, dialog_area);

    let chunks = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .split(dialog_area.inner(Margin::new(1, 1)));

    f.render_widget(
        common::create_input_paragraph(form.input, form.cursor_position, "Project directory", palette),
        chunks[0],
    );
    f.render_widget(
        Paragraph::new("The directory name becomes the project name")
            .style(Style::default().fg(palette.muted)),
        chunks[1],
    );
    common::render_validation_error(f, chunks[2], form.validation_error, palette);
    f.render_widget(
        common::create_instructions_paragraph(
            &[
                ("Enter", Color::Green, " Add"),
                shortcuts::SEPARATOR,
                shortcuts::ESC_CANCEL,
            ],
            palette,
        ),
        chunks[3],
    );
}

pub fn render_project_edit_dialog(
    f: &mut Frame,
    area: Rect,
    icons: &IconService,
    palette: &Palette,
    form: &ProjectForm,
    icon_id: &str,
    icon_color: &str,
) {
    let dialog_area = LayoutManager::centered_rect_lines(60, 12, area);
    f.render_widget(Clear, dialog_area);

    let block = common::create_dialog_block(format!(" {} Edit Project ", icons.settings()), palette.accent);
    f.render_widget(block, dialog_area);

    let chunks = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .split(dialog_area.inner(Margin::new(1, 1)));

    f.render_widget(
        common::create_input_paragraph(form.input, form.cursor_position, "Name", palette),
        chunks[0],
    );

    let pickers = Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).split(chunks[1]);
    let color = parse_hex_color(icon_color).unwrap_or(palette.text);
    let icon_line = Line::from(vec![
        Span::styled(icons.project_icon(icon_id), Style::default().fg(color)),
        Span::raw(" "),
        Span::raw(icon_id.to_string()),
    ]);
    let color_line = Line::from(vec![
        Span::styled("■", Style::default().fg(color)),
        Span::raw(" "),
        Span::raw(icon_color.to_string()),
    ]);
    f.render_widget(common::create_selection_paragraph(icon_line, "Icon", palette), pickers[0]);
    f.render_widget(common::create_selection_paragraph(color_line, "Color", palette), pickers[1]);

    common::render_validation_error(f, chunks[2], form.validation_error, palette);
    f.render_widget(
        common::create_instructions_paragraph(
            &[
                shortcuts::ENTER_SAVE,
                shortcuts::SEPARATOR,
                shortcuts::TAB_ICON,
                shortcuts::SEPARATOR,
                shortcuts::BACKTAB_COLOR,
                shortcuts::SEPARATOR,
                shortcuts::ESC_CANCEL,
            ],
            palette,
        ),
        chunks[3],
    );
}

pub fn render_delete_confirmation_dialog(
    f: &mut Frame,
    area: Rect,
    icons: &IconService,
    palette: &Palette,
    project_name: &str,
) {
    let dialog_area = LayoutManager::centered_rect_lines(50, 7, area);
    f.render_widget(Clear, dialog_area);

    let block = common::create_dialog_block(format!(" {} Remove Project ", icons.warning()), palette.error);
    f.render_widget(block, dialog_area);

    let chunks = Layout::vertical([Constraint::Length(3), Constraint::Length(1)])
        .split(dialog_area.inner(Margin::new(1, 1)));

    let message = format!(
        "Remove \"{}\" from envault?\nFiles on disk are not touched.",
        project_name
    );
    f.render_widget(
        Paragraph::new(message)
            .style(Style::default().fg(palette.text))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        chunks[0],
    );
    f.render_widget(
        common::create_instructions_paragraph(
            &[
                ("Enter", Color::Red, " Remove"),
                shortcuts::SEPARATOR,
                shortcuts::ESC_CANCEL,
            ],
            palette,
        ),
        chunks[1],
    );
}
