//! Create reservas table
//!
//! Stores room reservations owned by authenticated users.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Reservas::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Reservas::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Reservas::Usuario).string().not_null())
                    .col(ColumnDef::new(Reservas::Fecha).date().not_null())
                    .col(ColumnDef::new(Reservas::Sala).string().not_null())
                    .col(ColumnDef::new(Reservas::Hora).string().not_null())
                    .col(
                        ColumnDef::new(Reservas::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // No uniqueness over (fecha, sala, hora): double bookings of the
        // same slot by different users are allowed.
        manager
            .create_index(
                Index::create()
                    .name("idx_reservas_usuario")
                    .table(Reservas::Table)
                    .col(Reservas::Usuario)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Reservas::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Reservas {
    Table,
    Id,
    Usuario,
    Fecha,
    Sala,
    Hora,
    CreatedAt,
}
