//! Activation history repository.

use anyhow::Result;
use sea_orm::{ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder};

use crate::entities::env_history;

pub struct EnvHistoryRepository;

impl EnvHistoryRepository {
    /// Record that `env_name` was activated for a project.
    pub async fn record<C>(conn: &C, project_id: i64, env_name: &str, activated_at: String) -> Result<env_history::Model>
    where
        C: ConnectionTrait,
    {
        let entry = env_history::ActiveModel {
            project_id: ActiveValue::Set(project_id),
            env_name: ActiveValue::Set(env_name.to_string()),
            activated_at: ActiveValue::Set(activated_at),
            ..Default::default()
        };
        Ok(entry.insert(conn).await?)
    }

    /// Activation history for a project, newest first.
    pub async fn get_for_project<C>(conn: &C, project_id: i64) -> Result<Vec<env_history::Model>>
    where
        C: ConnectionTrait,
    {
        Ok(env_history::Entity::find()
            .filter(env_history::Column::ProjectId.eq(project_id))
            .order_by_desc(env_history::Column::Id)
            .all(conn)
            .await?)
    }

    pub async fn delete_for_project<C>(conn: &C, project_id: i64) -> Result<u64>
    where
        C: ConnectionTrait,
    {
        let result = env_history::Entity::delete_many()
            .filter(env_history::Column::ProjectId.eq(project_id))
            .exec(conn)
            .await?;
        Ok(result.rows_affected)
    }
}
