use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Assets::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Assets::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Assets::BaseUrl).string())
                    .col(ColumnDef::new(Assets::Salt).string().not_null())
                    .col(ColumnDef::new(Assets::Extension).string().not_null())
                    .col(ColumnDef::new(Assets::Width).integer().not_null())
                    .col(ColumnDef::new(Assets::Height).integer().not_null())
                    .col(
                        ColumnDef::new(Assets::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Assets::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Assets {
    Table,
    Id,
    BaseUrl,
    Salt,
    Extension,
    Width,
    Height,
    CreatedAt,
}
