use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "projects")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    #[sea_orm(unique)]
    pub path: String,
    pub icon: String,
    pub icon_color: String,
    pub active_environment: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::env_history::Entity")]
    EnvHistory,
}

impl Related<super::env_history::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EnvHistory.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
