use super::{contest_problems, contests, problem_attributes, problem_sets, users};
use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{entity::prelude::*, ConnectionTrait, Set};
use serde::Serialize;
use serde_repr::{Deserialize_repr, Serialize_repr};
use std::fmt;

pub mod constraints {
    pub const UC_PROBLEMS_TITLE: &str = "UC_problems_title";
    pub const FK_PROBLEMS_AUTHOR: &str = "FK_problems_author";
    pub const FK_PROBLEMS_PROBLEM_SET: &str = "FK_problems_problem_set";
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "problems")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub hint: Option<String>,
    #[sea_orm(column_type = "Text")]
    pub input_format: String,
    #[sea_orm(column_type = "Text")]
    pub output_format: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub input_sample: Option<String>,
    #[sea_orm(column_type = "Text")]
    pub output_sample: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub input_judge: Option<String>,
    #[sea_orm(column_type = "Text")]
    pub output_judge: String,
    /// Milliseconds.
    pub time_limit: i32,
    /// Kilobytes.
    pub memory_limit: i32,
    pub custom_judge_type: CustomJudgeType,
    #[sea_orm(column_type = "Text", nullable)]
    pub custom_judge_code: Option<String>,
    pub author: Option<i32>,
    pub problem_set: Option<i32>,
    pub source: Option<String>,
    pub source_url: Option<String>,
    pub created_time: DateTimeUtc,
    pub approved: bool,
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
pub enum CustomJudgeType {
    #[default]
    None = 0,
    CCode = 1,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Author,
    ProblemSet,
    Attributes,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Self::Author => Entity::belongs_to(users::Entity)
                .from(Column::Author)
                .to(users::Column::Id)
                .into(),
            Self::ProblemSet => Entity::belongs_to(problem_sets::Entity)
                .from(Column::ProblemSet)
                .to(problem_sets::Column::Id)
                .into(),
            Self::Attributes => Entity::has_many(problem_attributes::Entity).into(),
        }
    }
}

impl Related<problem_sets::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProblemSet.def()
    }
}

impl Related<problem_attributes::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Attributes.def()
    }
}

impl Related<contests::Entity> for Entity {
    fn to() -> RelationDef {
        contest_problems::Relation::Contest.def()
    }

    fn via() -> Option<RelationDef> {
        Some(contest_problems::Relation::Problem.def().rev())
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

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.id, self.title)
    }
}
