//! Migration to create check_outs table

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CheckOuts::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CheckOuts::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(CheckOuts::CheckedOutBy).integer().not_null())
                    .col(
                        ColumnDef::new(CheckOuts::CheckInId)
                            .integer()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(CheckOuts::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_check_outs_check_in")
                            .from(CheckOuts::Table, CheckOuts::CheckInId)
                            .to(CheckIns::Table, CheckIns::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_check_outs_user")
                            .from(CheckOuts::Table, CheckOuts::CheckedOutBy)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CheckOuts::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum CheckOuts {
    Table,
    Id,
    CheckedOutBy,
    CheckInId,
    CreatedAt,
}

#[derive(Iden)]
enum CheckIns {
    Table,
    Id,
}

#[derive(Iden)]
enum Users {
    Table,
    Id,
}
