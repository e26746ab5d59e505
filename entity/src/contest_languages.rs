use super::{contests, languages};
use sea_orm::entity::prelude::*;
use serde::Serialize;

pub mod constraints {
    pub const PK_CONTEST_LANGUAGES: &str = "PK_contest_languages";
    pub const FK_CONTEST_LANGUAGES_CONTEST_ID: &str = "FK_contest_languages_contest_id";
    pub const FK_CONTEST_LANGUAGES_LANGUAGE_ID: &str = "FK_contest_languages_language_id";
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "contest_languages")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub contest_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub language_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Contest,
    Language,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Self::Contest => Entity::belongs_to(contests::Entity)
                .from(Column::ContestId)
                .to(contests::Column::Id)
                .into(),
            Self::Language => Entity::belongs_to(languages::Entity)
                .from(Column::LanguageId)
                .to(languages::Column::Id)
                .into(),
        }
    }
}

impl ActiveModelBehavior for ActiveModel {}
