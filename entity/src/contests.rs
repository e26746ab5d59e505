use super::{contest_languages, contest_problems, languages, problems};
use sea_orm::entity::prelude::*;
use serde::Serialize;
use serde_repr::{Deserialize_repr, Serialize_repr};
use std::fmt;

pub mod constraints {
    pub const UC_CONTESTS_NAME: &str = "UC_contests_name";
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "contests")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub begin_time: DateTimeUtc,
    pub end_time: DateTimeUtc,
    #[sea_orm(column_name = "type")]
    #[serde(rename = "type")]
    pub contest_type: ContestType,
    pub open: OpenMode,
    pub password: Option<String>,
    pub need_approve: bool,
}

#[derive(
    EnumIter, DeriveActiveEnum, PartialEq, Eq, Clone, Copy, Debug, Serialize_repr, Deserialize_repr,
)]
#[repr(i16)]
#[sea_orm(rs_type = "i16", db_type = "SmallInteger")]
pub enum ContestType {
    Personal = 0,
    Team = 1,
}

#[derive(
    EnumIter,
    DeriveActiveEnum,
    PartialEq,
    Eq,
    Clone,
    Copy,
    Debug,
    Default,
    Serialize_repr,
    Deserialize_repr,
)]
#[repr(i16)]
#[sea_orm(rs_type = "i16", db_type = "SmallInteger")]
pub enum OpenMode {
    #[default]
    Private = 0,
    Public = 1,
    Password = 2,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl Related<problems::Entity> for Entity {
    fn to() -> RelationDef {
        contest_problems::Relation::Problem.def()
    }

    fn via() -> Option<RelationDef> {
        Some(contest_problems::Relation::Contest.def().rev())
    }
}

impl Related<languages::Entity> for Entity {
    fn to() -> RelationDef {
        contest_languages::Relation::Language.def()
    }

    fn via() -> Option<RelationDef> {
        Some(contest_languages::Relation::Contest.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Whether `time` falls into the contest window, bounds included.
    pub fn is_running_at(&self, time: DateTimeUtc) -> bool {
        self.begin_time <= time && time <= self.end_time
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
