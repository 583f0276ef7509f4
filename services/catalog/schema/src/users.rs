use sea_orm::entity::prelude::*;

/// Collector profile. Vinyls are attached through the `association` table.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub username: String,
    pub bio: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::associations::Entity")]
    Associations,
}

impl Related<super::associations::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Associations.def()
    }
}

impl Related<super::vinyls::Entity> for Entity {
    fn to() -> RelationDef {
        super::associations::Relation::Vinyl.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::associations::Relation::User.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
