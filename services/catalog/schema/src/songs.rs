use sea_orm::entity::prelude::*;

/// A track on a vinyl. Deleted together with its owning vinyl.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "song")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub vinyl_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::vinyls::Entity",
        from = "Column::VinylId",
        to = "super::vinyls::Column::Id",
        on_delete = "Cascade"
    )]
    Vinyl,
}

impl Related<super::vinyls::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Vinyl.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
