use sea_orm::entity::prelude::*;

/// User↔vinyl association row. `kind` carries the per-user shelf tag
/// ("collection" or "wishlist"); `id` preserves insertion order.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "association")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub vinyl_id: i32,
    pub user_id: i32,
    pub kind: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id",
        on_delete = "Cascade"
    )]
    User,
    #[sea_orm(
        belongs_to = "super::vinyls::Entity",
        from = "Column::VinylId",
        to = "super::vinyls::Column::Id",
        on_delete = "Cascade"
    )]
    Vinyl,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::vinyls::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Vinyl.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
