use crate::backend::{EnvFile, Project};
use crate::preferences::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

#[derive(Debug, Clone)]
pub enum Action {
    // Navigation
    SelectProject(i64),
    SelectEnvFile(String),
    FocusSidebarItem(usize),
    FocusEnvListItem(usize),

    // Project operations
    LoadProjects,
    AddProject {
        path: String,
    },
    UpdateProject {
        id: i64,
        name: Option<String>,
        icon: Option<String>,
        icon_color: Option<String>,
    },
    DeleteProject(i64),

    // Env file operations
    ActivateEnv {
        project_id: i64,
        env_name: String,
    },
    RefreshEnvFiles,

    // Background results
    ProjectsLoaded(Result<Vec<Project>, String>),
    ProjectAdded(Result<Project, String>),
    ProjectUpdated(Result<Project, String>),
    ProjectDeleted {
        id: i64,
        result: Result<(), String>,
    },
    EnvFilesScanned {
        project_id: i64,
        seq: u64,
        refresh: bool,
        result: Result<Vec<EnvFile>, String>,
    },
    EnvFileRead {
        path: String,
        result: Result<String, String>,
    },
    EnvActivated {
        project_id: i64,
        env_name: String,
        result: Result<(), String>,
    },

    // UI operations
    ToggleSidebar,
    SetTheme(Theme),
    CycleTheme,
    CycleIconTheme,
    SetToastsEnabled(bool),
    ResetShortcuts,
    ShowToast(ToastKind, String),
    DismissProjectError,
    DismissEnvError,
    ShowDialog(DialogType),
    HideDialog,

    // App control
    Quit,
    None,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogType {
    ProjectAdd,
    ProjectEdit {
        project_id: i64,
        name: String,
        icon: String,
        icon_color: String,
    },
    DeleteConfirmation {
        project_id: i64,
        name: String,
    },
    Settings,
    Error(String),
    Info(String),
    Help,
    Logs,
}
