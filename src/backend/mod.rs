//! Backend abstraction layer.
//!
//! The UI never touches the file system or the database directly. Everything it
//! needs (project records, env file scans, file contents, activation) goes
//! through the [`Backend`] trait so the view layer can be driven by the local
//! implementation or by a test double.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::constants::ENV_FILE_PRIMARY;
use crate::entities::project;

pub mod local;

pub use local::LocalBackend;

/// Common error types for backend operations.
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("{0}")]
    InvalidPath(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

/// A managed project directory.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: i64,
    pub name: String,
    pub path: String,
    pub icon: String,
    pub icon_color: String,
    pub active_environment: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<project::Model> for Project {
    fn from(model: project::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            path: model.path,
            icon: model.icon,
            icon_color: model.icon_color,
            active_environment: model.active_environment,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// An environment file found in a project directory.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvFile {
    pub name: String,
    pub path: String,
    pub is_active: bool,
    pub modified_at: Option<String>,
}

impl EnvFile {
    /// `.env` itself is the activation target and cannot be activated onto itself
    pub fn is_primary(&self) -> bool {
        self.name == ENV_FILE_PRIMARY
    }

    /// Only inactive files other than `.env` can be activated
    pub fn can_activate(&self) -> bool {
        !self.is_primary() && !self.is_active
    }
}

/// Arguments for registering a project directory.
#[derive(Clone, Debug, Default)]
pub struct AddProjectArgs {
    pub path: String,
    pub icon: Option<String>,
    pub icon_color: Option<String>,
}

/// Arguments for updating a project; `None` leaves a field unchanged.
#[derive(Clone, Debug, Default)]
pub struct UpdateProjectArgs {
    pub id: i64,
    pub name: Option<String>,
    pub icon: Option<String>,
    pub icon_color: Option<String>,
}

/// Request/response collaborator behind the UI.
#[async_trait]
pub trait Backend: Send + Sync {
    /// Returns the backend type identifier (e.g., "local").
    fn backend_type(&self) -> &str;

    // Project records
    async fn list_projects(&self) -> Result<Vec<Project>, BackendError>;
    async fn add_project(&self, args: AddProjectArgs) -> Result<Project, BackendError>;
    async fn update_project(&self, args: UpdateProjectArgs) -> Result<Project, BackendError>;
    async fn delete_project(&self, id: i64) -> Result<(), BackendError>;

    // Env files
    async fn scan_env_files(&self, project_path: &str, active_env: Option<&str>) -> Result<Vec<EnvFile>, BackendError>;
    async fn read_env_file(&self, path: &str) -> Result<String, BackendError>;
    async fn activate_env(&self, project_id: i64, env_name: &str) -> Result<(), BackendError>;
}
