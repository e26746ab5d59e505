use crate::error::{Error, Result};
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, PrimaryKeyTrait, Value,
};

pub fn set_option<T>(value: Option<T>) -> ActiveValue<T>
where
    T: Into<Value>,
{
    match value {
        Some(value) => ActiveValue::Set(value),
        None => ActiveValue::NotSet,
    }
}

/// Loads a row by its id, or fails with `not_found`.
pub async fn find_or<E, C>(db: &C, id: i32, not_found: Error<'static>) -> Result<E::Model>
where
    E: EntityTrait,
    <E::PrimaryKey as PrimaryKeyTrait>::ValueType: From<i32>,
    C: ConnectionTrait,
{
    E::find_by_id(id).one(db).await?.ok_or(not_found)
}

/// Deletes a row by its id, or fails with `not_found` when nothing was deleted.
pub async fn delete_or<E, C>(db: &C, id: i32, not_found: Error<'static>) -> Result
where
    E: EntityTrait,
    <E::PrimaryKey as PrimaryKeyTrait>::ValueType: From<i32>,
    C: ConnectionTrait,
{
    let res = E::delete_by_id(id).exec(db).await?;

    if res.rows_affected == 0 {
        return Err(not_found);
    }

    Ok(())
}

/// Saves `active` unless nothing was set on it, in which case `current` is
/// returned as is. An update without columns is not valid SQL.
pub async fn update_changed<'a, A, C>(
    db: &'a C,
    current: <A::Entity as EntityTrait>::Model,
    active: A,
) -> std::result::Result<<A::Entity as EntityTrait>::Model, DbErr>
where
    A: ActiveModelTrait + ActiveModelBehavior + Send + 'a,
    <A::Entity as EntityTrait>::Model: IntoActiveModel<A>,
    C: ConnectionTrait,
{
    if !active.is_changed() {
        return Ok(current);
    }

    active.update(db).await
}
