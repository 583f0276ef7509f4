use sea_orm::entity::prelude::*;

/// A catalog entry for one record. Shared across users; the per-user
/// collection/wishlist tag lives on the association row.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "vinyl")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub artist: String,
    pub year: Option<String>,
    pub img: Option<String>,
    /// Tag assigned at creation time, "collection" or "wishlist".
    #[sea_orm(column_name = "type")]
    pub kind: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::songs::Entity")]
    Songs,
    #[sea_orm(has_many = "super::associations::Entity")]
    Associations,
}

impl Related<super::songs::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Songs.def()
    }
}

impl Related<super::associations::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Associations.def()
    }
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        super::associations::Relation::User.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::associations::Relation::Vinyl.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
