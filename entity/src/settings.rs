use sea_orm::{entity::prelude::*, QueryOrder};
use serde::Serialize;
use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "settings")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub key: String,
    pub value: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Entity {
    /// Keys are not unique, the oldest row wins.
    #[inline]
    pub fn find_by_key(key: &str) -> Select<Entity> {
        Self::find()
            .filter(Column::Key.eq(key))
            .order_by_asc(Column::Id)
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.key, self.value)
    }
}
