use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Song::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Song::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Song::Name).string().not_null())
                    .col(ColumnDef::new(Song::VinylId).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Song::Table, Song::VinylId)
                            .to(Vinyl::Table, Vinyl::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Song::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Song {
    Table,
    Id,
    Name,
    VinylId,
}

#[derive(Iden)]
enum Vinyl {
    Table,
    Id,
}
