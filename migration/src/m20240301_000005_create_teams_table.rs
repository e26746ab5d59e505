use crate::utils::{drop_tables, id};
use entity::{
    team_members::{self, constraints::*},
    teams::{self, constraints::UC_TEAMS_NAME},
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
                    .table(teams::Entity)
                    .if_not_exists()
                    .col(&mut id(teams::Column::Id))
                    .col(ColumnDef::new(teams::Column::Name).string_len(255).not_null())
                    .col(ColumnDef::new(teams::Column::Intro).text().null())
                    .col(
                        ColumnDef::new(teams::Column::CreatedTime)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .index(
                        Index::create()
                            .name(UC_TEAMS_NAME)
                            .col(teams::Column::Name)
                            .unique(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(team_members::Entity)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(team_members::Column::TeamId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(team_members::Column::UserId)
                            .integer()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .name(PK_TEAM_MEMBERS)
                            .col(team_members::Column::TeamId)
                            .col(team_members::Column::UserId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_TEAM_MEMBERS_TEAM_ID)
                            .from(team_members::Entity, team_members::Column::TeamId)
                            .to(teams::Entity, teams::Column::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_TEAM_MEMBERS_USER_ID)
                            .from(team_members::Entity, team_members::Column::UserId)
                            .to(users::Entity, users::Column::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        drop_tables!(manager, team_members::Entity, teams::Entity);
        Ok(())
    }
}
