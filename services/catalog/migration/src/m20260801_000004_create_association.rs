use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Association::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Association::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Association::VinylId).integer().not_null())
                    .col(ColumnDef::new(Association::UserId).integer().not_null())
                    .col(ColumnDef::new(Association::Kind).string().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Association::Table, Association::VinylId)
                            .to(Vinyl::Table, Vinyl::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Association::Table, Association::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One row per (user, vinyl) pairing; the serial id keeps
        // insertion order.
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_association_user_vinyl")
                    .table(Association::Table)
                    .col(Association::UserId)
                    .col(Association::VinylId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Association::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Association {
    Table,
    Id,
    VinylId,
    UserId,
    Kind,
}

#[derive(Iden)]
enum Vinyl {
    Table,
    Id,
}

#[derive(Iden)]
enum User {
    Table,
    Id,
}
