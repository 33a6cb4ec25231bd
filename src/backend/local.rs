//! Local backend: SQLite for project records, the file system for env files.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::ActiveValue;
use std::path::Path;

use super::{AddProjectArgs, Backend, BackendError, EnvFile, Project, UpdateProjectArgs};
use crate::constants::{
    DEFAULT_PROJECT_ICON, DEFAULT_PROJECT_ICON_COLOR, ENV_FILE_BACKUP, ENV_FILE_PREFIX, ENV_FILE_PRIMARY,
    ENV_MODIFIED_FORMAT, ERROR_EMPTY_PATH, UNNAMED_PROJECT,
};
use crate::entities::project;
use crate::repositories::{EnvHistoryRepository, ProjectRepository};
use crate::storage::LocalStorage;

pub struct LocalBackend {
    storage: LocalStorage,
}

impl LocalBackend {
    pub fn new(storage: LocalStorage) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &LocalStorage {
        &self.storage
    }

    fn now() -> String {
        Utc::now().to_rfc3339()
    }

    async fn get_project(&self, id: i64) -> Result<project::Model, BackendError> {
        ProjectRepository::get_by_id(self.storage.conn(), id)
            .await?
            .ok_or_else(|| BackendError::NotFound(format!("Project {}", id)))
    }

    async fn set_active_environment(&self, model: project::Model, env_name: &str) -> Result<(), BackendError> {
        let now = Self::now();
        let mut active: project::ActiveModel = model.into();
        active.active_environment = ActiveValue::Set(Some(env_name.to_string()));
        active.updated_at = ActiveValue::Set(now.clone());

        let updated = ProjectRepository::update(self.storage.conn(), active).await?;
        EnvHistoryRepository::record(self.storage.conn(), updated.id, env_name, now).await?;
        Ok(())
    }
}

/// `.env` first, everything else alphabetically
fn sort_env_files(files: &mut [EnvFile]) {
    files.sort_by(|a, b| match (a.name == ENV_FILE_PRIMARY, b.name == ENV_FILE_PRIMARY) {
        (true, false) => std::cmp::Ordering::Less,
        (false, true) => std::cmp::Ordering::Greater,
        _ => a.name.cmp(&b.name),
    });
}

#[async_trait]
impl Backend for LocalBackend {
    fn backend_type(&self) -> &str {
        "local"
    }

    async fn list_projects(&self) -> Result<Vec<Project>, BackendError> {
        let models = ProjectRepository::get_all(self.storage.conn()).await?;
        Ok(models.into_iter().map(Project::from).collect())
    }

    async fn add_project(&self, args: AddProjectArgs) -> Result<Project, BackendError> {
        let path_str = args.path.trim();
        if path_str.is_empty() {
            return Err(BackendError::InvalidPath(ERROR_EMPTY_PATH.to_string()));
        }

        let path = Path::new(path_str);
        let metadata = tokio::fs::metadata(path)
            .await
            .map_err(|_| BackendError::InvalidPath("Path does not exist".to_string()))?;
        if !metadata.is_dir() {
            return Err(BackendError::InvalidPath("Path is not a directory".to_string()));
        }

        if ProjectRepository::get_by_path(self.storage.conn(), path_str)
            .await?
            .is_some()
        {
            return Err(BackendError::InvalidPath(format!("Project already exists: {}", path_str)));
        }

        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .filter(|n| !n.is_empty())
            .unwrap_or(UNNAMED_PROJECT)
            .to_string();

        let now = Self::now();
        let model = project::ActiveModel {
            name: ActiveValue::Set(name),
            path: ActiveValue::Set(path_str.to_string()),
            icon: ActiveValue::Set(args.icon.unwrap_or_else(|| DEFAULT_PROJECT_ICON.to_string())),
            icon_color: ActiveValue::Set(
                args.icon_color
                    .unwrap_or_else(|| DEFAULT_PROJECT_ICON_COLOR.to_string()),
            ),
            active_environment: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now.clone()),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        let created = ProjectRepository::create(self.storage.conn(), model).await?;
        Ok(created.into())
    }

    async fn update_project(&self, args: UpdateProjectArgs) -> Result<Project, BackendError> {
        let model = self.get_project(args.id).await?;
        let mut active: project::ActiveModel = model.into();

        if let Some(name) = args.name {
            let name = name.trim().to_string();
            if name.is_empty() {
                return Err(BackendError::InvalidData("Project name is required".to_string()));
            }
            active.name = ActiveValue::Set(name);
        }
        if let Some(icon) = args.icon {
            active.icon = ActiveValue::Set(icon);
        }
        if let Some(icon_color) = args.icon_color {
            active.icon_color = ActiveValue::Set(icon_color);
        }
        active.updated_at = ActiveValue::Set(Self::now());

        let updated = ProjectRepository::update(self.storage.conn(), active).await?;
        Ok(updated.into())
    }

    async fn delete_project(&self, id: i64) -> Result<(), BackendError> {
        EnvHistoryRepository::delete_for_project(self.storage.conn(), id).await?;
        if !ProjectRepository::delete(self.storage.conn(), id).await? {
            return Err(BackendError::NotFound(format!("Project {}", id)));
        }
        Ok(())
    }

    async fn scan_env_files(&self, project_path: &str, active_env: Option<&str>) -> Result<Vec<EnvFile>, BackendError> {
        let dir = Path::new(project_path);
        if !tokio::fs::metadata(dir).await.map(|m| m.is_dir()).unwrap_or(false) {
            return Err(BackendError::InvalidPath("Invalid project path".to_string()));
        }

        let mut entries = tokio::fs::read_dir(dir).await?;
        let mut files = Vec::new();

        while let Some(entry) = entries.next_entry().await? {
            let name = entry.file_name().to_string_lossy().to_string();
            if !name.starts_with(ENV_FILE_PREFIX) {
                continue;
            }

            let modified_at = entry
                .metadata()
                .await
                .ok()
                .and_then(|m| m.modified().ok())
                .map(|t| DateTime::<Utc>::from(t).format(ENV_MODIFIED_FORMAT).to_string());

            files.push(EnvFile {
                is_active: active_env == Some(name.as_str()),
                path: entry.path().to_string_lossy().to_string(),
                name,
                modified_at,
            });
        }

        sort_env_files(&mut files);
        Ok(files)
    }

    async fn read_env_file(&self, path: &str) -> Result<String, BackendError> {
        Ok(tokio::fs::read_to_string(path).await?)
    }

    async fn activate_env(&self, project_id: i64, env_name: &str) -> Result<(), BackendError> {
        let model = self.get_project(project_id).await?;
        let project_dir = Path::new(&model.path).to_path_buf();
        let source = project_dir.join(env_name);
        let target = project_dir.join(ENV_FILE_PRIMARY);

        if !tokio::fs::try_exists(&source).await.unwrap_or(false) {
            return Err(BackendError::NotFound(format!(
                "Environment file {} does not exist",
                env_name
            )));
        }

        if env_name != ENV_FILE_PRIMARY {
            if tokio::fs::try_exists(&target).await.unwrap_or(false) {
                tokio::fs::copy(&target, project_dir.join(ENV_FILE_BACKUP)).await?;
            }
            tokio::fs::copy(&source, &target).await?;
        }

        self.set_active_environment(model, env_name).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(name: &str) -> EnvFile {
        EnvFile {
            name: name.to_string(),
            path: format!("/tmp/{}", name),
            is_active: false,
            modified_at: None,
        }
    }

    #[test]
    fn test_primary_env_sorts_first() {
        let mut files = vec![file(".env.production"), file(".env.local"), file(".env"), file(".env.backup")];
        sort_env_files(&mut files);
        let names: Vec<&str> = files.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec![".env", ".env.backup", ".env.local", ".env.production"]);
    }
}
