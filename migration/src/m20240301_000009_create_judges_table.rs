use crate::utils::{drop_tables, id};
use entity::judges;
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(judges::Entity)
                    .if_not_exists()
                    .col(&mut id(judges::Column::Id))
                    .col(ColumnDef::new(judges::Column::Name).string_len(255).not_null())
                    .col(
                        ColumnDef::new(judges::Column::Hostname)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(ColumnDef::new(judges::Column::Ip).string_len(45).null())
                    .col(
                        ColumnDef::new(judges::Column::Status)
                            .small_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(judges::Column::LastRun)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        drop_tables!(manager, judges::Entity);
        Ok(())
    }
}
