use super::{team_members, users};
use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{entity::prelude::*, ConnectionTrait, Set};
use serde::Serialize;
use std::fmt;

pub mod constraints {
    pub const UC_TEAMS_NAME: &str = "UC_teams_name";
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "teams")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub intro: Option<String>,
    pub created_time: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl Related<users::Entity> for Entity {
    fn to() -> RelationDef {
        team_members::Relation::User.def()
    }

    fn via() -> Option<RelationDef> {
        Some(team_members::Relation::Team.def().rev())
    }
}

#[async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        if insert && self.created_time.is_not_set() {
            self.created_time = Set(Utc::now());
        }

        Ok(self)
    }
}

impl Entity {
    #[inline]
    pub fn find_from_member(user_id: i32) -> Select<Entity> {
        users::Entity::find_related().filter(users::Column::Id.eq(user_id))
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
