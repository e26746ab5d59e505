use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{entity::prelude::*, ConnectionTrait, Set};
use serde::Serialize;
use serde_repr::{Deserialize_repr, Serialize_repr};
use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "judges")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub hostname: String,
    pub ip: Option<String>,
    pub status: JudgeStatus,
    /// Refreshed on every save.
    pub last_run: DateTimeUtc,
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
pub enum JudgeStatus {
    #[default]
    Stopped = 0,
    Running = 1,
    Unknown = 2,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

#[async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, _insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        self.last_run = Set(Utc::now());
        Ok(self)
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.name, self.hostname)
    }
}
