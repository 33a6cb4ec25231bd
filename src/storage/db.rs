use anyhow::{Context, Result};
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, EntityTrait, Schema};
use std::path::Path;

use crate::entities::{env_history, project};

/// SQLite database holding projects and their activation history
#[derive(Clone)]
pub struct LocalStorage {
    pub(crate) conn: DatabaseConnection,
}

impl LocalStorage {
    /// Open (creating if needed) the database file at `path`
    pub async fn new(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create database directory: {}", parent.display()))?;
        }

        let url = format!("sqlite://{}?mode=rwc", path.display());
        Self::connect(ConnectOptions::new(url)).await
    }

    /// Private in-memory database, used by tests
    pub async fn in_memory() -> Result<Self> {
        let url = format!("sqlite:file:envault_{}?mode=memory&cache=shared", uuid::Uuid::new_v4());
        let mut options = ConnectOptions::new(url);
        options.min_connections(1).max_connections(1);
        Self::connect(options).await
    }

    async fn connect(mut options: ConnectOptions) -> Result<Self> {
        options.sqlx_logging(false);
        let conn = Database::connect(options)
            .await
            .context("Failed to connect to SQLite")?;

        let storage = Self { conn };
        storage.init_schema().await?;
        Ok(storage)
    }

    pub fn conn(&self) -> &DatabaseConnection {
        &self.conn
    }

    /// Create tables from the entity definitions
    async fn init_schema(&self) -> Result<()> {
        self.create_table(project::Entity).await?;
        self.create_table(env_history::Entity).await?;
        Ok(())
    }

    async fn create_table<E>(&self, entity: E) -> Result<()>
    where
        E: EntityTrait,
    {
        let backend = self.conn.get_database_backend();
        let schema = Schema::new(backend);
        let mut statement = schema.create_table_from_entity(entity);
        statement.if_not_exists();

        self.conn
            .execute(backend.build(&statement))
            .await
            .with_context(|| format!("Failed to create table {}", entity.table_name()))?;
        Ok(())
    }
}
