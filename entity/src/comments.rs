use super::{comment_attachments, problems, users};
use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{entity::prelude::*, ConnectionTrait, QueryOrder, Set};
use serde::Serialize;
use std::fmt;

pub mod constraints {
    pub const FK_COMMENTS_AUTHOR: &str = "FK_comments_author";
    pub const FK_COMMENTS_PARENT: &str = "FK_comments_parent";
    pub const FK_COMMENTS_PROBLEM: &str = "FK_comments_problem";
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "comments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub author: i32,
    pub time: DateTimeUtc,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub parent: Option<i32>,
    pub problem: i32,
    pub agreement: i32,
    pub disagreement: i32,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Author,
    Parent,
    Problem,
    Attachments,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Self::Author => Entity::belongs_to(users::Entity)
                .from(Column::Author)
                .to(users::Column::Id)
                .into(),
            Self::Parent => Entity::belongs_to(Entity)
                .from(Column::Parent)
                .to(Column::Id)
                .into(),
            Self::Problem => Entity::belongs_to(problems::Entity)
                .from(Column::Problem)
                .to(problems::Column::Id)
                .into(),
            Self::Attachments => Entity::has_many(comment_attachments::Entity).into(),
        }
    }
}

impl Related<comment_attachments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Attachments.def()
    }
}

#[async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        if insert {
            if self.time.is_not_set() {
                self.time = Set(Utc::now());
            }
            if self.agreement.is_not_set() {
                self.agreement = Set(0);
            }
            if self.disagreement.is_not_set() {
                self.disagreement = Set(0);
            }
        }

        Ok(self)
    }
}

impl Entity {
    /// Replies to a comment, oldest first.
    #[inline]
    pub fn find_children(id: i32) -> Select<Entity> {
        Self::find()
            .filter(Column::Parent.eq(id))
            .order_by_asc(Column::Id)
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.author, self.content)
    }
}
