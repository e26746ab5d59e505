use super::{contests, judges, languages, problems, users};
use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{entity::prelude::*, ConnectionTrait, Set};
use serde::Serialize;
use serde_repr::{Deserialize_repr, Serialize_repr};
use std::fmt;

pub mod constraints {
    pub const FK_SUBMISSIONS_PROBLEM: &str = "FK_submissions_problem";
    pub const FK_SUBMISSIONS_USER: &str = "FK_submissions_user";
    pub const FK_SUBMISSIONS_CONTEST: &str = "FK_submissions_contest";
    pub const FK_SUBMISSIONS_LANGUAGE: &str = "FK_submissions_language";
    pub const FK_SUBMISSIONS_JUDGE: &str = "FK_submissions_judge";
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "submissions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub problem: i32,
    pub user: i32,
    pub contest: Option<i32>,
    pub language: i32,
    #[sea_orm(column_type = "Text")]
    pub code: String,
    pub status: SubmissionStatus,
    pub result: SubmissionResult,
    pub error: SubmissionError,
    #[sea_orm(column_type = "Text", nullable)]
    pub detail: Option<String>,
    pub created_time: DateTimeUtc,
    pub update_time: DateTimeUtc,
    pub locked: bool,
    pub judge: i32,
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
pub enum SubmissionStatus {
    #[default]
    Queueing = 0,
    Compiling = 1,
    Judging = 2,
    Completed = 3,
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
pub enum SubmissionResult {
    #[default]
    None = 0,
    Accepted = 1,
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
pub enum SubmissionError {
    #[default]
    None = 0,
    StackOverflow = 1,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Problem,
    User,
    Contest,
    Language,
    Judge,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Self::Problem => Entity::belongs_to(problems::Entity)
                .from(Column::Problem)
                .to(problems::Column::Id)
                .into(),
            Self::User => Entity::belongs_to(users::Entity)
                .from(Column::User)
                .to(users::Column::Id)
                .into(),
            Self::Contest => Entity::belongs_to(contests::Entity)
                .from(Column::Contest)
                .to(contests::Column::Id)
                .into(),
            Self::Language => Entity::belongs_to(languages::Entity)
                .from(Column::Language)
                .to(languages::Column::Id)
                .into(),
            Self::Judge => Entity::belongs_to(judges::Entity)
                .from(Column::Judge)
                .to(judges::Column::Id)
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
        let now = Utc::now();

        if insert && self.created_time.is_not_set() {
            self.created_time = Set(now);
        }
        self.update_time = Set(now);

        Ok(self)
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}
