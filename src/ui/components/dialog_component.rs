//! Modal dialog component.
//!
//! Hosts the project forms, the delete confirmation, settings and the
//! read-only popups (help, logs, error, info). While a dialog is open it owns
//! the keyboard; the owner disables focus navigation until it closes.

use crate::constants::{ERROR_EMPTY_NAME, ERROR_EMPTY_PATH};
use crate::icons::IconService;
use crate::ui::components::dialogs::{
    project_dialogs::{self, ProjectForm},
    settings_dialog, system_dialogs, SettingsRow, SettingsSnapshot,
};
use crate::ui::components::scroll_behavior::ScrollView;
use crate::ui::core::{
    actions::{Action, DialogType},
    Component,
};
use crate::ui::palette::Palette;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{layout::Rect, Frame};

pub struct DialogComponent {
    pub dialog_type: Option<DialogType>,
    pub input_buffer: String,
    pub cursor_position: usize,
    pub validation_error: Option<String>,
    pub edit_icon: String,
    pub edit_color: String,
    pub settings_cursor: usize,
    pub settings: SettingsSnapshot,
    pub logs: Vec<String>,
    pub icons: IconService,
    pub palette: Palette,
    scroll: ScrollView,
}

impl Default for DialogComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl DialogComponent {
    pub fn new() -> Self {
        Self {
            dialog_type: None,
            input_buffer: String::new(),
            cursor_position: 0,
            validation_error: None,
            edit_icon: String::new(),
            edit_color: String::new(),
            settings_cursor: 0,
            settings: SettingsSnapshot::default(),
            logs: Vec::new(),
            icons: IconService::default(),
            palette: Palette::default(),
            scroll: ScrollView::new(),
        }
    }

    pub fn is_visible(&self) -> bool {
        self.dialog_type.is_some()
    }

    /// Open a dialog, seeding form fields from it
    pub fn show(&mut self, dialog_type: DialogType) {
        self.clear_dialog();
        if let DialogType::ProjectEdit {
            name, icon, icon_color, ..
        } = &dialog_type
        {
            self.input_buffer = name.clone();
            self.cursor_position = name.chars().count();
            self.edit_icon = icon.clone();
            self.edit_color = icon_color.clone();
        }
        self.dialog_type = Some(dialog_type);
    }

    pub fn clear_dialog(&mut self) {
        self.dialog_type = None;
        self.input_buffer.clear();
        self.cursor_position = 0;
        self.validation_error = None;
        self.edit_icon.clear();
        self.edit_color.clear();
        self.settings_cursor = 0;
        self.scroll.reset();
    }

    fn handle_submit(&mut self) -> Action {
        match &self.dialog_type {
            Some(DialogType::ProjectAdd) => {
                let path = self.input_buffer.trim().to_string();
                if path.is_empty() {
                    self.validation_error = Some(ERROR_EMPTY_PATH.to_string());
                    return Action::None;
                }
                self.clear_dialog();
                Action::AddProject { path }
            }
            Some(DialogType::ProjectEdit { project_id, .. }) => {
                let name = self.input_buffer.trim().to_string();
                if name.is_empty() {
                    self.validation_error = Some(ERROR_EMPTY_NAME.to_string());
                    return Action::None;
                }
                let action = Action::UpdateProject {
                    id: *project_id,
                    name: Some(name),
                    icon: Some(self.edit_icon.clone()),
                    icon_color: Some(self.edit_color.clone()),
                };
                self.clear_dialog();
                action
            }
            Some(DialogType::DeleteConfirmation { project_id, .. }) => {
                let action = Action::DeleteProject(*project_id);
                self.clear_dialog();
                action
            }
            _ => Action::None,
        }
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.input_buffer
            .char_indices()
            .nth(char_index)
            .map_or(self.input_buffer.len(), |(i, _)| i)
    }

    /// Line editing shared by the add and edit forms
    fn handle_input_key(&mut self, key: KeyEvent) {
        let char_count = self.input_buffer.chars().count();
        match key.code {
            KeyCode::Char(c) => {
                let byte_pos = self.byte_index(self.cursor_position);
                self.input_buffer.insert(byte_pos, c);
                self.cursor_position += 1;
                self.validation_error = None;
            }
            KeyCode::Backspace if self.cursor_position > 0 => {
                self.cursor_position -= 1;
                let byte_pos = self.byte_index(self.cursor_position);
                self.input_buffer.remove(byte_pos);
                self.validation_error = None;
            }
            KeyCode::Delete if self.cursor_position < char_count => {
                let byte_pos = self.byte_index(self.cursor_position);
                self.input_buffer.remove(byte_pos);
            }
            KeyCode::Left => self.cursor_position = self.cursor_position.saturating_sub(1),
            KeyCode::Right => self.cursor_position = (self.cursor_position + 1).min(char_count),
            KeyCode::Home => self.cursor_position = 0,
            KeyCode::End => self.cursor_position = char_count,
            _ => {}
        }
    }

    fn settings_action(&self) -> Action {
        match SettingsRow::at(self.settings_cursor) {
            SettingsRow::Theme => Action::CycleTheme,
            SettingsRow::Toasts => Action::SetToastsEnabled(!self.settings.toasts_enabled),
            SettingsRow::IconTheme => Action::CycleIconTheme,
            SettingsRow::ResetShortcuts => Action::ResetShortcuts,
        }
    }
}

impl Component for DialogComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        let Some(dialog_type) = &self.dialog_type else {
            return Action::None;
        };

        match dialog_type {
            DialogType::Info(_) | DialogType::Error(_) => {
                if self.scroll.handle_key(key.code) {
                    Action::None
                } else {
                    Action::HideDialog
                }
            }
            DialogType::Help => match key.code {
                KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => Action::HideDialog,
                code => {
                    self.scroll.handle_key(code);
                    Action::None
                }
            },
            DialogType::Logs => match key.code {
                KeyCode::Esc | KeyCode::Char('G') | KeyCode::Char('q') => Action::HideDialog,
                code => {
                    self.scroll.handle_key(code);
                    Action::None
                }
            },
            DialogType::DeleteConfirmation { .. } => match key.code {
                KeyCode::Esc | KeyCode::Char('n') => Action::HideDialog,
                KeyCode::Enter | KeyCode::Char('y') => self.handle_submit(),
                _ => Action::None,
            },
            DialogType::Settings => match key.code {
                KeyCode::Esc | KeyCode::Char('q') => Action::HideDialog,
                KeyCode::Up | KeyCode::Char('k') => {
                    self.settings_cursor = self.settings_cursor.saturating_sub(1);
                    Action::None
                }
                KeyCode::Down | KeyCode::Char('j') => {
                    self.settings_cursor = (self.settings_cursor + 1).min(SettingsRow::ALL.len() - 1);
                    Action::None
                }
                KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Left | KeyCode::Right => self.settings_action(),
                _ => Action::None,
            },
            DialogType::ProjectAdd => match key.code {
                KeyCode::Esc => Action::HideDialog,
                KeyCode::Enter => self.handle_submit(),
                _ => {
                    self.handle_input_key(key);
                    Action::None
                }
            },
            DialogType::ProjectEdit { .. } => match key.code {
                KeyCode::Esc => Action::HideDialog,
                KeyCode::Enter => self.handle_submit(),
                KeyCode::Tab => {
                    self.edit_icon = IconService::next_project_icon(&self.edit_icon).to_string();
                    Action::None
                }
                KeyCode::BackTab => {
                    self.edit_color = IconService::next_project_color(&self.edit_color).to_string();
                    Action::None
                }
                _ => {
                    self.handle_input_key(key);
                    Action::None
                }
            },
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::ShowDialog(dialog_type) => {
                self.show(dialog_type);
                Action::None
            }
            Action::HideDialog => {
                self.clear_dialog();
                Action::None
            }
            other => other,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let Some(dialog_type) = self.dialog_type.clone() else {
            return;
        };
        let form = ProjectForm {
            input: &self.input_buffer,
            cursor_position: self.cursor_position,
            validation_error: self.validation_error.as_deref(),
        };

        match &dialog_type {
            DialogType::ProjectAdd => {
                project_dialogs::render_project_add_dialog(f, rect, &self.icons, &self.palette, &form);
            }
            DialogType::ProjectEdit { .. } => {
                project_dialogs::render_project_edit_dialog(
                    f,
                    rect,
                    &self.icons,
                    &self.palette,
                    &form,
                    &self.edit_icon,
                    &self.edit_color,
                );
            }
            DialogType::DeleteConfirmation { name, .. } => {
                project_dialogs::render_delete_confirmation_dialog(f, rect, &self.icons, &self.palette, name);
            }
            DialogType::Settings => {
                settings_dialog::render_settings_dialog(
                    f,
                    rect,
                    &self.icons,
                    &self.palette,
                    &self.settings,
                    self.settings_cursor,
                );
            }
            DialogType::Error(message) => {
                system_dialogs::render_error_dialog(f, rect, &self.icons, &self.palette, message, &mut self.scroll);
            }
            DialogType::Info(message) => {
                system_dialogs::render_info_dialog(f, rect, &self.icons, &self.palette, message, &mut self.scroll);
            }
            DialogType::Help => {
                let lines = system_dialogs::help_lines(&self.settings.shortcuts, self.settings.platform, &self.palette);
                system_dialogs::render_help_dialog(f, rect, &self.palette, lines, &mut self.scroll);
            }
            DialogType::Logs => {
                system_dialogs::render_logs_dialog(f, rect, &self.palette, &self.logs, &mut self.scroll);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn press(dialog: &mut DialogComponent, code: KeyCode) -> Action {
        dialog.handle_key_events(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_text(dialog: &mut DialogComponent, text: &str) {
        for c in text.chars() {
            press(dialog, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_empty_path_blocks_submit() {
        let mut dialog = DialogComponent::new();
        dialog.show(DialogType::ProjectAdd);
        type_text(&mut dialog, "   ");

        assert!(matches!(press(&mut dialog, KeyCode::Enter), Action::None));
        assert_eq!(dialog.validation_error.as_deref(), Some(ERROR_EMPTY_PATH));
        assert!(dialog.is_visible());
    }

    #[test]
    fn test_add_submits_trimmed_path() {
        let mut dialog = DialogComponent::new();
        dialog.show(DialogType::ProjectAdd);
        type_text(&mut dialog, " /tmp/app ");

        match press(&mut dialog, KeyCode::Enter) {
            Action::AddProject { path } => assert_eq!(path, "/tmp/app"),
            other => panic!("unexpected action: {:?}", other),
        }
        assert!(!dialog.is_visible());
    }

    #[test]
    fn test_edit_cycles_icon_and_color() {
        let mut dialog = DialogComponent::new();
        dialog.show(DialogType::ProjectEdit {
            project_id: 7,
            name: "api".to_string(),
            icon: "folder".to_string(),
            icon_color: "#737373".to_string(),
        });

        press(&mut dialog, KeyCode::Tab);
        press(&mut dialog, KeyCode::BackTab);
        press(&mut dialog, KeyCode::Backspace);

        match press(&mut dialog, KeyCode::Enter) {
            Action::UpdateProject {
                id,
                name,
                icon,
                icon_color,
            } => {
                assert_eq!(id, 7);
                assert_eq!(name.as_deref(), Some("ap"));
                assert_eq!(icon.as_deref(), Some("folder-open"));
                assert_eq!(icon_color.as_deref(), Some("#ef4444"));
            }
            other => panic!("unexpected action: {:?}", other),
        }
    }

    #[test]
    fn test_edit_rejects_blank_name() {
        let mut dialog = DialogComponent::new();
        dialog.show(DialogType::ProjectEdit {
            project_id: 1,
            name: "x".to_string(),
            icon: "folder".to_string(),
            icon_color: "#737373".to_string(),
        });
        press(&mut dialog, KeyCode::Backspace);

        assert!(matches!(press(&mut dialog, KeyCode::Enter), Action::None));
        assert_eq!(dialog.validation_error.as_deref(), Some(ERROR_EMPTY_NAME));
    }

    #[test]
    fn test_settings_toasts_row_toggles() {
        let mut dialog = DialogComponent::new();
        dialog.show(DialogType::Settings);
        dialog.settings.toasts_enabled = true;
        press(&mut dialog, KeyCode::Down);

        assert!(matches!(
            press(&mut dialog, KeyCode::Enter),
            Action::SetToastsEnabled(false)
        ));
    }
}
