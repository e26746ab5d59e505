use super::{contests, users};
use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{entity::prelude::*, ConnectionTrait, Set};
use serde::Serialize;
use serde_repr::{Deserialize_repr, Serialize_repr};
use std::fmt;

pub mod constraints {
    pub const UC_CONTEST_USERS_CONTEST_USER: &str = "UC_contest_users_contest_user";
    pub const FK_CONTEST_USERS_CONTEST: &str = "FK_contest_users_contest";
    pub const FK_CONTEST_USERS_USER: &str = "FK_contest_users_user";
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "contest_users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub contest: i32,
    pub user: i32,
    pub join_time: DateTimeUtc,
    pub approved: ApprovalStatus,
}

/// Shared by user and team registrations.
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
pub enum ApprovalStatus {
    #[default]
    Pending = 0,
    Approved = 1,
    Denied = 2,
}

impl ApprovalStatus {
    /// Initial status of a new registration.
    pub fn initial(need_approve: bool) -> Self {
        if need_approve {
            Self::Pending
        } else {
            Self::Approved
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Contest,
    User,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Self::Contest => Entity::belongs_to(contests::Entity)
                .from(Column::Contest)
                .to(contests::Column::Id)
                .into(),
            Self::User => Entity::belongs_to(users::Entity)
                .from(Column::User)
                .to(users::Column::Id)
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
        if insert && self.join_time.is_not_set() {
            self.join_time = Set(Utc::now());
        }

        Ok(self)
    }
}

impl Entity {
    #[inline]
    pub fn find_in_contest(contest: i32) -> Select<Entity> {
        Self::find().filter(Column::Contest.eq(contest))
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.contest, self.user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registrations_skip_approval_when_not_required() {
        assert_eq!(ApprovalStatus::initial(true), ApprovalStatus::Pending);
        assert_eq!(ApprovalStatus::initial(false), ApprovalStatus::Approved);
        assert_eq!(ApprovalStatus::default(), ApprovalStatus::Pending);
    }

    #[test]
    fn display_links_contest_and_user() {
        let registration = Model {
            id: 1,
            contest: 3,
            user: 7,
            join_time: Utc::now(),
            approved: ApprovalStatus::Pending,
        };

        assert_eq!(registration.to_string(), "3 -> 7");
    }
}
