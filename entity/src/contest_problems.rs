use super::{contests, problems};
use sea_orm::entity::prelude::*;
use serde::Serialize;

pub mod constraints {
    pub const PK_CONTEST_PROBLEMS: &str = "PK_contest_problems";
    pub const FK_CONTEST_PROBLEMS_CONTEST_ID: &str = "FK_contest_problems_contest_id";
    pub const FK_CONTEST_PROBLEMS_PROBLEM_ID: &str = "FK_contest_problems_problem_id";
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "contest_problems")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub contest_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub problem_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Contest,
    Problem,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Self::Contest => Entity::belongs_to(contests::Entity)
                .from(Column::ContestId)
                .to(contests::Column::Id)
                .into(),
            Self::Problem => Entity::belongs_to(problems::Entity)
                .from(Column::ProblemId)
                .to(problems::Column::Id)
                .into(),
        }
    }
}

impl ActiveModelBehavior for ActiveModel {}
