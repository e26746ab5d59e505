use super::{problems, starred_problems, users};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;

pub mod constraints {
    pub const UC_USER_PROFILES_USER: &str = "UC_user_profiles_user";
    pub const FK_USER_PROFILES_USER: &str = "FK_user_profiles_user";
}

/// Profile photos live under this directory of the media root.
pub const PHOTO_UPLOAD_TO: &str = "profile/photo";

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "user_profiles")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub user: i32,
    pub realname: String,
    pub gender: Gender,
    pub bio: String,
    pub photo: Option<String>,
    pub thumb_24: Option<String>,
    pub thumb_48: Option<String>,
    pub thumb_96: Option<String>,
}

#[derive(EnumIter, DeriveActiveEnum, PartialEq, Eq, Clone, Copy, Debug, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(Some(1))")]
pub enum Gender {
    #[sea_orm(string_value = "M")]
    #[serde(rename = "M")]
    Male,
    #[sea_orm(string_value = "F")]
    #[serde(rename = "F")]
    Female,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    User,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Self::User => Entity::belongs_to(users::Entity)
                .from(Column::User)
                .to(users::Column::Id)
                .into(),
        }
    }
}

impl Related<problems::Entity> for Entity {
    fn to() -> RelationDef {
        starred_problems::Relation::Problem.def()
    }

    fn via() -> Option<RelationDef> {
        Some(starred_problems::Relation::Profile.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Entity {
    #[inline]
    pub fn find_by_user(user: i32) -> Select<Entity> {
        Self::find().filter(Column::User.eq(user))
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} Profile", self.user)
    }
}
