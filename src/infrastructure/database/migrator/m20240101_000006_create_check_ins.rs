//! Migration to create check_ins table
//!
//! Partial unique indexes allow at most one open check-in per room and per
//! client. Referenced rows cannot be deleted while history points at them.

use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::ConnectionTrait;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CheckIns::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CheckIns::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(CheckIns::RoomId).integer().not_null())
                    .col(ColumnDef::new(CheckIns::CheckedInBy).integer().not_null())
                    .col(ColumnDef::new(CheckIns::ClientId).integer().not_null())
                    .col(ColumnDef::new(CheckIns::HotelId).integer().not_null())
                    .col(
                        ColumnDef::new(CheckIns::IsOpen)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(CheckIns::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_check_ins_room")
                            .from(CheckIns::Table, CheckIns::RoomId)
                            .to(Rooms::Table, Rooms::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_check_ins_user")
                            .from(CheckIns::Table, CheckIns::CheckedInBy)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_check_ins_client")
                            .from(CheckIns::Table, CheckIns::ClientId)
                            .to(Clients::Table, Clients::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_check_ins_hotel")
                            .from(CheckIns::Table, CheckIns::HotelId)
                            .to(Hotels::Table, Hotels::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_check_ins_room_id")
                    .table(CheckIns::Table)
                    .col(CheckIns::RoomId)
                    .to_owned(),
            )
            .await?;

        // sea-query has no portable partial-index builder
        let db = manager.get_connection();
        db.execute_unprepared(
            "CREATE UNIQUE INDEX IF NOT EXISTS uq_check_ins_open_room \
             ON check_ins (room_id) WHERE is_open = 1",
        )
        .await?;
        db.execute_unprepared(
            "CREATE UNIQUE INDEX IF NOT EXISTS uq_check_ins_open_client \
             ON check_ins (client_id) WHERE is_open = 1",
        )
        .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CheckIns::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum CheckIns {
    Table,
    Id,
    RoomId,
    CheckedInBy,
    ClientId,
    HotelId,
    IsOpen,
    CreatedAt,
}

#[derive(Iden)]
enum Rooms {
    Table,
    Id,
}

#[derive(Iden)]
enum Users {
    Table,
    Id,
}

#[derive(Iden)]
enum Clients {
    Table,
    Id,
}

#[derive(Iden)]
enum Hotels {
    Table,
    Id,
}
