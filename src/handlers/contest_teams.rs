use super::registrations::{self, Registration};
use crate::{
    error::{self, Error, Result},
    extractors::{Json, Path},
    StateTrait,
};
use axum::{extract::State, http::StatusCode, routing::get, Router};
use entity::{
    contest_teams::{self, ApprovalStatus},
    contests::ContestType,
    teams,
};
use sea_orm::{EntityTrait, Select, Set};
use serde::Deserialize;

type Entity = contest_teams::Entity;

impl Registration for contest_teams::Entity {
    type Active = contest_teams::ActiveModel;
    type Member = teams::Entity;

    const CONTEST_TYPE: ContestType = ContestType::Team;
    const MEMBER_NOT_FOUND: Error<'static> = error::TEAM_NOT_FOUND;

    fn registration(contest: i32, member: i32, approved: ApprovalStatus) -> Self::Active {
        contest_teams::ActiveModel {
            contest: Set(contest),
            team: Set(member),
            approved: Set(approved),
            ..Default::default()
        }
    }

    fn set_approved(active: &mut Self::Active, approved: ApprovalStatus) {
        active.approved = Set(approved);
    }

    fn find_member(id: i32) -> Select<teams::Entity> {
        teams::Entity::find_by_id(id)
    }

    fn member_name(member: &teams::Model) -> &str {
        &member.name
    }

    fn contest_column() -> contest_teams::Column {
        contest_teams::Column::Contest
    }

    fn id_column() -> contest_teams::Column {
        contest_teams::Column::Id
    }
}

/// GET    /contest_teams
/// POST   /contest_teams
/// GET    /contest_teams/:id
/// PATCH  /contest_teams/:id
/// DELETE /contest_teams/:id
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
    team: i32,
    /// Defaults to what the contest's `need_approve` implies.
    approved: Option<ApprovalStatus>,
}

#[derive(Deserialize)]
pub struct RegisterRequest {
    team: i32,
    approved: Option<ApprovalStatus>,
}

pub(super) async fn list_for_contest<S: StateTrait>(
    state: State<S>,
    id: Path<i32>,
) -> Result<Json<Vec<contest_teams::Model>>> {
    registrations::list_for_contest::<S, Entity>(state, id).await
}

pub(super) async fn register_in_contest<S: StateTrait>(
    State(state): State<S>,
    Path(id): Path<i32>,
    Json(request): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<contest_teams::Model>)> {
    let registration =
        registrations::register::<Entity, _>(state.db(), id, request.team, request.approved)
            .await?;

    Ok((StatusCode::CREATED, Json(registration)))
}

async fn create_registration<S: StateTrait>(
    State(state): State<S>,
    Json(request): Json<CreateRequest>,
) -> Result<(StatusCode, Json<contest_teams::Model>)> {
    let registration = registrations::register::<Entity, _>(
        state.db(),
        request.contest,
        request.team,
        request.approved,
    )
    .await?;

    Ok((StatusCode::CREATED, Json(registration)))
}
