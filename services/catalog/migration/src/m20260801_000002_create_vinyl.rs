use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Vinyl::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Vinyl::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Vinyl::Name).string().not_null())
                    .col(ColumnDef::new(Vinyl::Artist).string().not_null())
                    .col(ColumnDef::new(Vinyl::Year).string())
                    .col(ColumnDef::new(Vinyl::Img).string())
                    .col(ColumnDef::new(Vinyl::Type).string())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Vinyl::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Vinyl {
    Table,
    Id,
    Name,
    Artist,
    Year,
    Img,
    Type,
}
