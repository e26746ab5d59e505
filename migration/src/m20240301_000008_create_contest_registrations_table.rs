use crate::utils::{drop_tables, id};
use entity::{contest_teams, contest_users, contests, teams, users};
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        use contest_users::constraints::*;

        manager
            .create_table(
                Table::create()
                    .table(contest_users::Entity)
                    .if_not_exists()
                    .col(&mut id(contest_users::Column::Id))
                    .col(
                        ColumnDef::new(contest_users::Column::Contest)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(contest_users::Column::User).integer().not_null())
                    .col(
                        ColumnDef::new(contest_users::Column::JoinTime)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(contest_users::Column::Approved)
                            .small_integer()
                            .not_null()
                            .default(0),
                    )
                    .index(
                        Index::create()
                            .name(UC_CONTEST_USERS_CONTEST_USER)
                            .col(contest_users::Column::Contest)
                            .col(contest_users::Column::User)
                            .unique(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_CONTEST_USERS_CONTEST)
                            .from(contest_users::Entity, contest_users::Column::Contest)
                            .to(contests::Entity, contests::Column::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_CONTEST_USERS_USER)
                            .from(contest_users::Entity, contest_users::Column::User)
                            .to(users::Entity, users::Column::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        use contest_teams::constraints::*;

        manager
            .create_table(
                Table::create()
                    .table(contest_teams::Entity)
                    .if_not_exists()
                    .col(&mut id(contest_teams::Column::Id))
                    .col(
                        ColumnDef::new(contest_teams::Column::Contest)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(contest_teams::Column::Team).integer().not_null())
                    .col(
                        ColumnDef::new(contest_teams::Column::JoinTime)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(contest_teams::Column::Approved)
                            .small_integer()
                            .not_null()
                            .default(0),
                    )
                    .index(
                        Index::create()
                            .name(UC_CONTEST_TEAMS_CONTEST_TEAM)
                            .col(contest_teams::Column::Contest)
                            .col(contest_teams::Column::Team)
                            .unique(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_CONTEST_TEAMS_CONTEST)
                            .from(contest_teams::Entity, contest_teams::Column::Contest)
                            .to(contests::Entity, contests::Column::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_CONTEST_TEAMS_TEAM)
                            .from(contest_teams::Entity, contest_teams::Column::Team)
                            .to(teams::Entity, teams::Column::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        drop_tables!(manager, contest_teams::Entity, contest_users::Entity);
        Ok(())
    }
}
