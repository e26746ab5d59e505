//! Handlers shared by user and team registrations.

use crate::{
    error::{self, DatabaseError, Error, Result},
    extractors::{Json, Path, Query},
    utils::{delete_or, find_or, update_changed, Pagination},
    StateTrait,
};
use axum::{extract::State, http::StatusCode};
use entity::{
    contest_users::ApprovalStatus,
    contests::{self, ContestType},
};
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, PrimaryKeyTrait, QueryFilter, QueryOrder, Select,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A table with one row per contest and registered member.
pub(super) trait Registration: EntityTrait {
    type Active: ActiveModelTrait<Entity = Self> + ActiveModelBehavior + Send + 'static;
    type Member: EntityTrait;

    /// Members of this kind only register for contests of this type.
    const CONTEST_TYPE: ContestType;
    const MEMBER_NOT_FOUND: Error<'static>;

    fn registration(contest: i32, member: i32, approved: ApprovalStatus) -> Self::Active;
    fn set_approved(active: &mut Self::Active, approved: ApprovalStatus);
    fn find_member(id: i32) -> Select<Self::Member>;
    fn member_name(member: &<Self::Member as EntityTrait>::Model) -> &str;
    fn contest_column() -> Self::Column;
    fn id_column() -> Self::Column;
}

#[derive(Deserialize)]
pub struct UpdateRequest {
    approved: Option<ApprovalStatus>,
}

fn map_db_err<E: Registration>(err: DbErr) -> Error<'static> {
    if err.unique_violation() {
        return error::ALREADY_REGISTERED;
    }
    if err.foreign_key_violation() {
        return E::MEMBER_NOT_FOUND;
    }

    err.into()
}

fn find_in_contest<E: Registration>(contest: i32) -> Select<E> {
    E::find()
        .filter(E::contest_column().eq(contest))
        .order_by_asc(E::id_column())
}

pub(super) async fn register<E, C>(
    db: &C,
    contest: i32,
    member: i32,
    approved: Option<ApprovalStatus>,
) -> Result<E::Model>
where
    E: Registration,
    E::Model: IntoActiveModel<E::Active> + fmt::Display,
    C: ConnectionTrait,
{
    let contest = find_or::<contests::Entity, _>(db, contest, error::CONTEST_NOT_FOUND).await?;

    if contest.contest_type != E::CONTEST_TYPE {
        return Err(error::CONTEST_TYPE_MISMATCH);
    }

    let name = E::find_member(member)
        .one(db)
        .await?
        .map(|member| E::member_name(&member).to_owned())
        .ok_or(E::MEMBER_NOT_FOUND)?;

    let approved = approved.unwrap_or(ApprovalStatus::initial(contest.need_approve));
    let registration = E::registration(contest.id, member, approved)
        .insert(db)
        .await
        .map_err(map_db_err::<E>)?;

    info!(?approved, "registered {name} for {contest} ({registration})");

    Ok(registration)
}

/// Whether anyone is registered for the contest in `E`.
pub(super) async fn any_in_contest<E, C>(db: &C, contest: i32) -> Result<bool>
where
    E: Registration,
    C: ConnectionTrait,
{
    let registration = find_in_contest::<E>(contest).one(db).await?;

    Ok(registration.is_some())
}

pub(super) async fn list_for_contest<S, E>(
    State(state): State<S>,
    Path(id): Path<i32>,
) -> Result<Json<Vec<E::Model>>>
where
    S: StateTrait,
    E: Registration,
    E::Model: Serialize,
{
    find_or::<contests::Entity, _>(state.db(), id, error::CONTEST_NOT_FOUND).await?;

    let registrations = find_in_contest::<E>(id).all(state.db()).await?;

    Ok(Json(registrations))
}

pub(super) async fn list_registrations<S, E>(
    State(state): State<S>,
    Query(pagination): Query<Pagination>,
) -> Result<Json<Vec<E::Model>>>
where
    S: StateTrait,
    E: Registration,
    E::Model: Serialize,
{
    let registrations = pagination
        .apply(E::find(), E::id_column())
        .all(state.db())
        .await?;

    Ok(Json(registrations))
}

pub(super) async fn get_registration<S, E>(
    State(state): State<S>,
    Path(id): Path<i32>,
) -> Result<Json<E::Model>>
where
    S: StateTrait,
    E: Registration,
    E::Model: Serialize,
    <E::PrimaryKey as PrimaryKeyTrait>::ValueType: From<i32>,
{
    let registration = find_or::<E, _>(state.db(), id, error::REGISTRATION_NOT_FOUND).await?;

    Ok(Json(registration))
}

/// Only the approval status of a registration can change.
pub(super) async fn update_registration<S, E>(
    State(state): State<S>,
    Path(id): Path<i32>,
    Json(request): Json<UpdateRequest>,
) -> Result<Json<E::Model>>
where
    S: StateTrait,
    E: Registration,
    E::Model: IntoActiveModel<E::Active> + Serialize + fmt::Display,
    <E::PrimaryKey as PrimaryKeyTrait>::ValueType: From<i32>,
{
    let registration = find_or::<E, _>(state.db(), id, error::REGISTRATION_NOT_FOUND).await?;

    let mut active_model = registration.clone().into_active_model();
    if let Some(approved) = request.approved {
        E::set_approved(&mut active_model, approved);
    }

    let registration = update_changed(state.db(), registration, active_model).await?;

    info!(approved = ?request.approved, "updated registration {registration}");

    Ok(Json(registration))
}

pub(super) async fn delete_registration<S, E>(
    State(state): State<S>,
    Path(id): Path<i32>,
) -> Result<StatusCode>
where
    S: StateTrait,
    E: Registration,
    <E::PrimaryKey as PrimaryKeyTrait>::ValueType: From<i32>,
{
    delete_or::<E, _>(state.db(), id, error::REGISTRATION_NOT_FOUND).await?;

    Ok(StatusCode::NO_CONTENT)
}
