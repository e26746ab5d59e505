use crate::utils::{drop_tables, id};
use entity::{
    problem_attributes,
    problem_sets,
    problems::{self, constraints::*},
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
                    .table(problems::Entity)
                    .if_not_exists()
                    .col(&mut id(problems::Column::Id))
                    .col(
                        ColumnDef::new(problems::Column::Title)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(ColumnDef::new(problems::Column::Description).text().not_null())
                    .col(ColumnDef::new(problems::Column::Hint).text().null())
                    .col(ColumnDef::new(problems::Column::InputFormat).text().not_null())
                    .col(ColumnDef::new(problems::Column::OutputFormat).text().not_null())
                    .col(ColumnDef::new(problems::Column::InputSample).text().null())
                    .col(ColumnDef::new(problems::Column::OutputSample).text().not_null())
                    .col(ColumnDef::new(problems::Column::InputJudge).text().null())
                    .col(ColumnDef::new(problems::Column::OutputJudge).text().not_null())
                    .col(ColumnDef::new(problems::Column::TimeLimit).integer().not_null())
                    .col(
                        ColumnDef::new(problems::Column::MemoryLimit)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(problems::Column::CustomJudgeType)
                            .small_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(problems::Column::CustomJudgeCode).text().null())
                    .col(ColumnDef::new(problems::Column::Author).integer().null())
                    .col(ColumnDef::new(problems::Column::ProblemSet).integer().null())
                    .col(ColumnDef::new(problems::Column::Source).string_len(100).null())
                    .col(ColumnDef::new(problems::Column::SourceUrl).string_len(200).null())
                    .col(
                        ColumnDef::new(problems::Column::CreatedTime)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(problems::Column::Approved)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .index(
                        Index::create()
                            .name(UC_PROBLEMS_TITLE)
                            .col(problems::Column::Title)
                            .unique(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_PROBLEMS_AUTHOR)
                            .from(problems::Entity, problems::Column::Author)
                            .to(users::Entity, users::Column::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_PROBLEMS_PROBLEM_SET)
                            .from(problems::Entity, problems::Column::ProblemSet)
                            .to(problem_sets::Entity, problem_sets::Column::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(problem_attributes::Entity)
                    .if_not_exists()
                    .col(&mut id(problem_attributes::Column::Id))
                    .col(
                        ColumnDef::new(problem_attributes::Column::Problem)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(problem_attributes::Column::Key)
                            .string_len(100)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(problem_attributes::Column::Value)
                            .string_len(255)
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(problem_attributes::constraints::FK_PROBLEM_ATTRIBUTES_PROBLEM)
                            .from(problem_attributes::Entity, problem_attributes::Column::Problem)
                            .to(problems::Entity, problems::Column::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        drop_tables!(manager, problem_attributes::Entity, problems::Entity);
        Ok(())
    }
}
