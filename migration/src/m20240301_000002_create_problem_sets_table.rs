use crate::utils::{drop_tables, id};
use entity::problem_sets::{self, constraints::*};
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(problem_sets::Entity)
                    .if_not_exists()
                    .col(&mut id(problem_sets::Column::Id))
                    .col(
                        ColumnDef::new(problem_sets::Column::Name)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(ColumnDef::new(problem_sets::Column::Description).text().null())
                    .col(
                        ColumnDef::new(problem_sets::Column::CreatedTime)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .index(
                        Index::create()
                            .name(UC_PROBLEM_SETS_NAME)
                            .col(problem_sets::Column::Name)
                            .unique(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        drop_tables!(manager, problem_sets::Entity);
        Ok(())
    }
}
