use super::{problems, user_profiles};
use sea_orm::entity::prelude::*;
use serde::Serialize;

pub mod constraints {
    pub const PK_STARRED_PROBLEMS: &str = "PK_starred_problems";
    pub const FK_STARRED_PROBLEMS_PROFILE_ID: &str = "FK_starred_problems_profile_id";
    pub const FK_STARRED_PROBLEMS_PROBLEM_ID: &str = "FK_starred_problems_problem_id";
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "starred_problems")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub profile_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub problem_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Profile,
    Problem,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Self::Profile => Entity::belongs_to(user_profiles::Entity)
                .from(Column::ProfileId)
                .to(user_profiles::Column::Id)
                .into(),
            Self::Problem => Entity::belongs_to(problems::Entity)
                .from(Column::ProblemId)
                .to(problems::Column::Id)
                .into(),
        }
    }
}

impl ActiveModelBehavior for ActiveModel {}
