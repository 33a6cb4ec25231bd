//! Constants used throughout the application
//!
//! This module centralizes magic strings, UI text, and other constant values
//! to improve maintainability and consistency.

// Persisted state keys
pub const STORAGE_KEY_THEME: &str = "theme";
pub const STORAGE_KEY_PREFERENCES: &str = "envault-preferences";
pub const STORAGE_KEY_SHORTCUTS: &str = "envault-shortcuts";

// Project defaults
pub const DEFAULT_PROJECT_ICON: &str = "folder";
pub const DEFAULT_PROJECT_ICON_COLOR: &str = "#737373";
pub const UNNAMED_PROJECT: &str = "Unnamed Project";

// Env file names
pub const ENV_FILE_PREFIX: &str = ".env";
pub const ENV_FILE_PRIMARY: &str = ".env";
pub const ENV_FILE_BACKUP: &str = ".env.backup";
pub const ENV_MODIFIED_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// Success Messages
pub const SUCCESS_PROJECT_ADDED: &str = "✅ Project added";
pub const SUCCESS_PROJECT_UPDATED: &str = "✅ Project updated";
pub const SUCCESS_PROJECT_DELETED: &str = "✅ Project deleted";
pub const SUCCESS_ENV_ACTIVATED: &str = "✅ Environment activated";
pub const SUCCESS_ENV_REFRESHED: &str = "✅ Environment files refreshed";
pub const SUCCESS_SHORTCUTS_RESET: &str = "✅ Shortcuts reset to defaults";

// Error Messages
pub const ERROR_PROJECT_LOAD_FAILED: &str = "❌ Failed to load projects";
pub const ERROR_PROJECT_ADD_FAILED: &str = "❌ Failed to add project";
pub const ERROR_PROJECT_UPDATE_FAILED: &str = "❌ Failed to update project";
pub const ERROR_PROJECT_DELETE_FAILED: &str = "❌ Failed to delete project";
pub const ERROR_ENV_SCAN_FAILED: &str = "❌ Failed to scan environment files";
pub const ERROR_ENV_READ_FAILED: &str = "❌ Failed to read environment file";
pub const ERROR_ENV_ACTIVATE_FAILED: &str = "❌ Failed to activate environment";

// Validation Error Messages
pub const ERROR_EMPTY_PATH: &str = "Path cannot be empty";
pub const ERROR_EMPTY_NAME: &str = "Name cannot be empty";

// UI Messages
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";
pub const DIALOG_TITLE_DEBUG_LOGS: &str = "🔍 Debug Logs - Press 'Esc', 'G' or 'q' to close";
pub const EMPTY_PROJECTS_HINT: &str = "No projects yet. Add one to get started.";
pub const EMPTY_ENV_FILES_HINT: &str = "No .env files found in this project";
pub const NO_PROJECT_SELECTED_HINT: &str = "Select a project to manage environments";
pub const NO_FILE_SELECTED_HINT: &str = "Select a file to view its contents";

// Timing defaults (milliseconds)
pub const FLYOUT_SHOW_DELAY_MS: u64 = 20;
pub const FLYOUT_HIDE_AFTER_MS: u64 = 1500;
pub const FLYOUT_UNMOUNT_AFTER_MS: u64 = 200;
pub const MIN_REFRESH_INDICATOR_MS: u64 = 500;
pub const TOAST_DURATION_MS: u64 = 3000;

// UI Layout Constants
/// Minimum sidebar width in columns
pub const SIDEBAR_MIN_WIDTH: u16 = 15;
/// Maximum sidebar width in columns
pub const SIDEBAR_MAX_WIDTH: u16 = 50;
/// Default sidebar width in columns
pub const SIDEBAR_DEFAULT_WIDTH: u16 = 30;
/// Width of the sidebar when collapsed to icons only
pub const SIDEBAR_COLLAPSED_WIDTH: u16 = 6;
/// Minimum main area width to preserve usability
pub const MAIN_AREA_MIN_WIDTH: u16 = 20;
/// Flyout overlay width in columns
pub const FLYOUT_WIDTH: u16 = 32;
