//! Dialog rendering helpers used by [`super::DialogComponent`]

pub mod common;
pub mod project_dialogs;
pub mod settings_dialog;
pub mod system_dialogs;

pub use settings_dialog::{SettingsRow, SettingsSnapshot};
