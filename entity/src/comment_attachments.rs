use super::comments;
use sea_orm::entity::prelude::*;
use serde::Serialize;
use std::fmt;

pub mod constraints {
    pub const FK_COMMENT_ATTACHMENTS_COMMENT: &str = "FK_comment_attachments_comment";
}

/// Uploaded files live under this directory of the media root.
pub const UPLOAD_TO: &str = "attachments";

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "comment_attachments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub comment: i32,
    /// Path relative to the media root.
    pub file: String,
    pub filename: String,
    pub size: i32,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Comment,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Self::Comment => Entity::belongs_to(comments::Entity)
                .from(Column::Comment)
                .to(comments::Column::Id)
                .into(),
        }
    }
}

impl Related<comments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Comment.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.filename)
    }
}
