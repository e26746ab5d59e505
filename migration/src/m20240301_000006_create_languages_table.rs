use crate::utils::{drop_tables, id};
use entity::languages::{self, constraints::*, DEFAULT_MULTIPLIER};
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(languages::Entity)
                    .if_not_exists()
                    .col(&mut id(languages::Column::Id))
                    .col(ColumnDef::new(languages::Column::Name).string_len(50).not_null())
                    .col(
                        ColumnDef::new(languages::Column::ShortName)
                            .string_len(50)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(languages::Column::TimeMul)
                            .double()
                            .not_null()
                            .default(DEFAULT_MULTIPLIER),
                    )
                    .col(
                        ColumnDef::new(languages::Column::MemoryMul)
                            .double()
                            .not_null()
                            .default(DEFAULT_MULTIPLIER),
                    )
                    .col(
                        ColumnDef::new(languages::Column::Extensions)
                            .string_len(255)
                            .not_null(),
                    )
                    .index(
                        Index::create()
                            .name(UC_LANGUAGES_NAME)
                            .col(languages::Column::Name)
                            .unique(),
                    )
                    .index(
                        Index::create()
                            .name(UC_LANGUAGES_SHORT_NAME)
                            .col(languages::Column::ShortName)
                            .unique(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        drop_tables!(manager, languages::Entity);
        Ok(())
    }
}
