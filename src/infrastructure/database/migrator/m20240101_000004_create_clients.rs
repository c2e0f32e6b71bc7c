//! Migration to create clients (guests) table

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Clients::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Clients::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Clients::FirstName).string_len(64).not_null())
                    .col(ColumnDef::new(Clients::LastName).string_len(64).not_null())
                    .col(ColumnDef::new(Clients::PhoneNum).string_len(32).null())
                    .col(ColumnDef::new(Clients::Address).string_len(255).null())
                    .col(ColumnDef::new(Clients::Email).string_len(255).null())
                    .col(ColumnDef::new(Clients::IdentityType).string_len(64).null())
                    .col(ColumnDef::new(Clients::IdentityNum).string_len(64).null())
                    .col(ColumnDef::new(Clients::IdentityPic).string_len(255).null())
                    .col(
                        ColumnDef::new(Clients::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Clients::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Clients {
    Table,
    Id,
    FirstName,
    LastName,
    PhoneNum,
    Address,
    Email,
    IdentityType,
    IdentityNum,
    IdentityPic,
    CreatedAt,
}
