use sea_orm::entity::prelude::*;

/// One uploaded cover image. Public identity is `base_url/salt.extension`.
/// Immutable after creation.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "assets")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub base_url: Option<String>,
    pub salt: String,
    pub extension: String,
    pub width: i32,
    pub height: i32,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
