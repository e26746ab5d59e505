pub use super::contest_users::ApprovalStatus;

use super::{contests, teams};
use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{entity::prelude::*, ConnectionTrait, Set};
use serde::Serialize;
use std::fmt;

pub mod constraints {
    pub const UC_CONTEST_TEAMS_CONTEST_TEAM: &str = "UC_contest_teams_contest_team";
    pub const FK_CONTEST_TEAMS_CONTEST: &str = "FK_contest_teams_contest";
    pub const FK_CONTEST_TEAMS_TEAM: &str = "FK_contest_teams_team";
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "contest_teams")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub contest: i32,
    pub team: i32,
    pub join_time: DateTimeUtc,
    pub approved: ApprovalStatus,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Contest,
    Team,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Self::Contest => Entity::belongs_to(contests::Entity)
                .from(Column::Contest)
                .to(contests::Column::Id)
                .into(),
            Self::Team => Entity::belongs_to(teams::Entity)
                .from(Column::Team)
                .to(teams::Column::Id)
                .into(),
        }
    }
}

#[async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        if insert && self.join_time.is_not_set() {
            self.join_time = Set(Utc::now());
        }

        Ok(self)
    }
}

impl Entity {
    #[inline]
    pub fn find_in_contest(contest: i32) -> Select<Entity> {
        Self::find().filter(Column::Contest.eq(contest))
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.contest, self.team)
    }
}
