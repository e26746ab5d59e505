use super::registrations::{self, Registration};
use crate::{
    error::{self, Error, Result},
    extractors::{Json, Path},
    StateTrait,
};
use axum::{extract::State, http::StatusCode, routing::get, Router};
use entity::{
    contest_users::{self, ApprovalStatus},
    contests::ContestType,
    users,
};
use sea_orm::{EntityTrait, Select, Set};
use serde::Deserialize;

type Entity = contest_users::Entity;

impl Registration for contest_users::Entity {
    type Active = contest_users::ActiveModel;
    type Member = users::Entity;

    const CONTEST_TYPE: ContestType = ContestType::Personal;
    const MEMBER_NOT_FOUND: Error<'static> = error::USER_NOT_FOUND;

    fn registration(contest: i32, member: i32, approved: ApprovalStatus) -> Self::Active {
        contest_users::ActiveModel {
            contest: Set(contest),
            user: Set(member),
            approved: Set(approved),
            ..Default::default()
        }
    }

    fn set_approved(active: &mut Self::Active, approved: ApprovalStatus) {
        active.approved = Set(approved);
    }

    fn find_member(id: i32) -> Select<users::Entity> {
        users::Entity::find_by_id(id)
    }

    fn member_name(member: &users::Model) -> &str {
        &member.username
    }

    fn contest_column() -> contest_users::Column {
        contest_users::Column::Contest
    }

    fn id_column() -> contest_users::Column {
        contest_users::Column::Id
    }
}

/// GET    /contest_users
/// POST   /contest_users
/// GET    /contest_users/:id
/// PATCH  /contest_users/:id
/// DELETE /contest_users/:id
pub fn routes<S: StateTrait>() -> Router<S> {
    Router::new()
        .route(
            "/",
            get(registrations::list_registrations::<S, Entity>).post(create_registration::<S>),
        )
        .route(
            "/:id",
            get(registrations::get_registration::<S, Entity>)
                .patch(registrations::update_registration::<S, Entity>)
                .delete(registrations::delete_registration::<S, Entity>),
        )
}

#[derive(Deserialize)]
pub struct CreateRequest {
    contest: i32,
    user: i32,
    /// Defaults to what the contest's `need_approve` implies.
    approved: Option<ApprovalStatus>,
}

#[derive(Deserialize)]
pub struct RegisterRequest {
    user: i32,
    approved: Option<ApprovalStatus>,
}

pub(super) async fn list_for_contest<S: StateTrait>(
    state: State<S>,
    id: Path<i32>,
) -> Result<Json<Vec<contest_users::Model>>> {
    registrations::list_for_contest::<S, Entity>(state, id).await
}

pub(super) async fn register_in_contest<S: StateTrait>(
    State(state): State<S>,
    Path(id): Path<i32>,
    Json(request): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<contest_users::Model>)> {
    let registration =
        registrations::register::<Entity, _>(state.db(), id, request.user, request.approved)
            .await?;

    Ok((StatusCode::CREATED, Json(registration)))
}

async fn create_registration<S: StateTrait>(
    State(state): State<S>,
    Json(request): Json<CreateRequest>,
) -> Result<(StatusCode, Json<contest_users::Model>)> {
    let registration = registrations::register::<Entity, _>(
        state.db(),
        request.contest,
        request.user,
        request.approved,
    )
    .await?;

    Ok((StatusCode::CREATED, Json(registration)))
}
