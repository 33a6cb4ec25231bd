//! Project repository for database operations.

use anyhow::Result;
use sea_orm::{ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder};

use crate::entities::project;

/// Repository for project-related database operations.
pub struct ProjectRepository;

impl ProjectRepository {
    /// Get all projects, most recently updated first.
    pub async fn get_all<C>(conn: &C) -> Result<Vec<project::Model>>
    where
        C: ConnectionTrait,
    {
        Ok(project::Entity::find()
            .order_by_desc(project::Column::UpdatedAt)
            .order_by_desc(project::Column::Id)
            .all(conn)
            .await?)
    }

    /// Get a single project by id.
    pub async fn get_by_id<C>(conn: &C, id: i64) -> Result<Option<project::Model>>
    where
        C: ConnectionTrait,
    {
        Ok(project::Entity::find_by_id(id).one(conn).await?)
    }

    /// Get a single project by its directory path.
    pub async fn get_by_path<C>(conn: &C, path: &str) -> Result<Option<project::Model>>
    where
        C: ConnectionTrait,
    {
        Ok(project::Entity::find()
            .filter(project::Column::Path.eq(path))
            .one(conn)
            .await?)
    }

    /// Insert a new project.
    pub async fn create<C>(conn: &C, project: project::ActiveModel) -> Result<project::Model>
    where
        C: ConnectionTrait,
    {
        Ok(project.insert(conn).await?)
    }

    /// Update a project in the database.
    pub async fn update<C>(conn: &C, project: project::ActiveModel) -> Result<project::Model>
    where
        C: ConnectionTrait,
    {
        Ok(project.update(conn).await?)
    }

    /// Delete a project by id, returning whether a row was removed.
    pub async fn delete<C>(conn: &C, id: i64) -> Result<bool>
    where
        C: ConnectionTrait,
    {
        let result = project::Entity::delete_by_id(id).exec(conn).await?;
        Ok(result.rows_affected > 0)
    }
}
