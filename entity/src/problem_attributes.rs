use super::problems;
use sea_orm::entity::prelude::*;
use serde::Serialize;
use std::fmt;

pub mod constraints {
    pub const FK_PROBLEM_ATTRIBUTES_PROBLEM: &str = "FK_problem_attributes_problem";
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "problem_attributes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub problem: i32,
    pub key: String,
    pub value: String,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Problem,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Self::Problem => Entity::belongs_to(problems::Entity)
                .from(Column::Problem)
                .to(problems::Column::Id)
                .into(),
        }
    }
}

impl Related<problems::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Problem.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.problem, self.key)
    }
}
