use crate::utils::{drop_tables, id};
use entity::{contest_languages, contest_problems, contests, languages, problems};
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(contests::Entity)
                    .if_not_exists()
                    .col(&mut id(contests::Column::Id))
                    .col(ColumnDef::new(contests::Column::Name).string_len(255).not_null())
                    .col(ColumnDef::new(contests::Column::Description).text().null())
                    .col(
                        ColumnDef::new(contests::Column::BeginTime)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(contests::Column::EndTime)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(contests::Column::ContestType)
                            .small_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(contests::Column::Open)
                            .small_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(contests::Column::Password).string_len(100).null())
                    .col(
                        ColumnDef::new(contests::Column::NeedApprove)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .index(
                        Index::create()
                            .name(contests::constraints::UC_CONTESTS_NAME)
                            .col(contests::Column::Name)
                            .unique(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(contest_problems::Entity)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(contest_problems::Column::ContestId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(contest_problems::Column::ProblemId)
                            .integer()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .name(contest_problems::constraints::PK_CONTEST_PROBLEMS)
                            .col(contest_problems::Column::ContestId)
                            .col(contest_problems::Column::ProblemId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(contest_problems::constraints::FK_CONTEST_PROBLEMS_CONTEST_ID)
                            .from(contest_problems::Entity, contest_problems::Column::ContestId)
                            .to(contests::Entity, contests::Column::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(contest_problems::constraints::FK_CONTEST_PROBLEMS_PROBLEM_ID)
                            .from(contest_problems::Entity, contest_problems::Column::ProblemId)
                            .to(problems::Entity, problems::Column::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(contest_languages::Entity)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(contest_languages::Column::ContestId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(contest_languages::Column::LanguageId)
                            .integer()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .name(contest_languages::constraints::PK_CONTEST_LANGUAGES)
                            .col(contest_languages::Column::ContestId)
                            .col(contest_languages::Column::LanguageId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(contest_languages::constraints::FK_CONTEST_LANGUAGES_CONTEST_ID)
                            .from(contest_languages::Entity, contest_languages::Column::ContestId)
                            .to(contests::Entity, contests::Column::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(contest_languages::constraints::FK_CONTEST_LANGUAGES_LANGUAGE_ID)
                            .from(contest_languages::Entity, contest_languages::Column::LanguageId)
                            .to(languages::Entity, languages::Column::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        drop_tables!(
            manager,
            contest_languages::Entity,
            contest_problems::Entity,
            contests::Entity,
        );
        Ok(())
    }
}
