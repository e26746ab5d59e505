use crate::utils::{drop_tables, id};
use entity::{
    contests, judges, languages, problems,
    submissions::{self, constraints::*},
    users,
};
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(submissions::Entity)
                    .if_not_exists()
                    .col(&mut id(submissions::Column::Id))
                    .col(ColumnDef::new(submissions::Column::Problem).integer().not_null())
                    .col(ColumnDef::new(submissions::Column::User).integer().not_null())
                    .col(ColumnDef::new(submissions::Column::Contest).integer().null())
                    .col(
                        ColumnDef::new(submissions::Column::Language)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(submissions::Column::Code).text().not_null())
                    .col(
                        ColumnDef::new(submissions::Column::Status)
                            .small_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(submissions::Column::Result)
                            .small_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(submissions::Column::Error)
                            .small_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(submissions::Column::Detail).text().null())
                    .col(
                        ColumnDef::new(submissions::Column::CreatedTime)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(submissions::Column::UpdateTime)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(submissions::Column::Locked)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(submissions::Column::Judge).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_SUBMISSIONS_PROBLEM)
                            .from(submissions::Entity, submissions::Column::Problem)
                            .to(problems::Entity, problems::Column::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_SUBMISSIONS_USER)
                            .from(submissions::Entity, submissions::Column::User)
                            .to(users::Entity, users::Column::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_SUBMISSIONS_CONTEST)
                            .from(submissions::Entity, submissions::Column::Contest)
                            .to(contests::Entity, contests::Column::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_SUBMISSIONS_LANGUAGE)
                            .from(submissions::Entity, submissions::Column::Language)
                            .to(languages::Entity, languages::Column::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_SUBMISSIONS_JUDGE)
                            .from(submissions::Entity, submissions::Column::Judge)
                            .to(judges::Entity, judges::Column::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("IX_submissions_status")
                    .table(submissions::Entity)
                    .col(submissions::Column::Status)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        drop_tables!(manager, submissions::Entity);
        Ok(())
    }
}
