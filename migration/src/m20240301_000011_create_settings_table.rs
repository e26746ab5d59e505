use crate::utils::{drop_tables, id};
use entity::settings;
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(settings::Entity)
                    .if_not_exists()
                    .col(&mut id(settings::Column::Id))
                    .col(ColumnDef::new(settings::Column::Key).string_len(100).not_null())
                    .col(
                        ColumnDef::new(settings::Column::Value)
                            .string_len(255)
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        drop_tables!(manager, settings::Entity);
        Ok(())
    }
}
