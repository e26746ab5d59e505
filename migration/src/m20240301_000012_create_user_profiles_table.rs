use crate::utils::{drop_tables, id};
use entity::{
    problems,
    starred_problems::{self, constraints::*},
    user_profiles::{self, constraints::*},
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
                    .table(user_profiles::Entity)
                    .if_not_exists()
                    .col(&mut id(user_profiles::Column::Id))
                    .col(ColumnDef::new(user_profiles::Column::User).integer().not_null())
                    .col(
                        ColumnDef::new(user_profiles::Column::Realname)
                            .string_len(50)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(user_profiles::Column::Gender)
                            .string_len(1)
                            .not_null(),
                    )
                    .col(ColumnDef::new(user_profiles::Column::Bio).string_len(100).not_null())
                    .col(ColumnDef::new(user_profiles::Column::Photo).string_len(255).null())
                    .col(ColumnDef::new(user_profiles::Column::Thumb24).string_len(255).null())
                    .col(ColumnDef::new(user_profiles::Column::Thumb48).string_len(255).null())
                    .col(ColumnDef::new(user_profiles::Column::Thumb96).string_len(255).null())
                    .index(
                        Index::create()
                            .name(UC_USER_PROFILES_USER)
                            .col(user_profiles::Column::User)
                            .unique(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_USER_PROFILES_USER)
                            .from(user_profiles::Entity, user_profiles::Column::User)
                            .to(users::Entity, users::Column::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(starred_problems::Entity)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(starred_problems::Column::ProfileId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(starred_problems::Column::ProblemId)
                            .integer()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .name(PK_STARRED_PROBLEMS)
                            .col(starred_problems::Column::ProfileId)
                            .col(starred_problems::Column::ProblemId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_STARRED_PROBLEMS_PROFILE_ID)
                            .from(starred_problems::Entity, starred_problems::Column::ProfileId)
                            .to(user_profiles::Entity, user_profiles::Column::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_STARRED_PROBLEMS_PROBLEM_ID)
                            .from(starred_problems::Entity, starred_problems::Column::ProblemId)
                            .to(problems::Entity, problems::Column::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        drop_tables!(manager, starred_problems::Entity, user_profiles::Entity);
        Ok(())
    }
}
