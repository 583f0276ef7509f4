use sea_orm_migration::prelude::*;

mod m20260801_000001_create_user;
mod m20260801_000002_create_vinyl;
mod m20260801_000003_create_song;
mod m20260801_000004_create_association;
mod m20260801_000005_create_assets;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260801_000001_create_user::Migration),
            Box::new(m20260801_000002_create_vinyl::Migration),
            Box::new(m20260801_000003_create_song::Migration),
            Box::new(m20260801_000004_create_association::Migration),
            Box::new(m20260801_000005_create_assets::Migration),
        ]
    }
}
