use crate::{
    error::{self, DatabaseError, Error, Result},
    extractors::{Json, Path, Query, ValidatedJson},
    utils::{delete_or, find_or, set_option, update_changed, Pagination},
    StateTrait,
};
use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, put},
    Router,
};
use entity::{team_members, teams, users};
use sea_orm::{
    ActiveModelTrait, DbErr, EntityTrait, IntoActiveModel, ModelTrait, QueryOrder, Set,
    TransactionTrait,
};
use serde::Deserialize;
use validator::Validate;

/// GET    /teams
/// POST   /teams
/// GET    /teams/:id
/// PATCH  /teams/:id
/// DELETE /teams/:id
///
/// GET    /teams/:id/members
/// PUT    /teams/:id/members/:user_id
/// DELETE /teams/:id/members/:user_id
pub fn routes<S: StateTrait>() -> Router<S> {
    Router::new()
        .route("/", get(list_teams::<S>).post(create_team::<S>))
        .route(
            "/:id",
            get(get_team::<S>)
                .patch(update_team::<S>)
                .delete(delete_team::<S>),
        )
        .route("/:id/members", get(list_members::<S>))
        .route(
            "/:id/members/:user_id",
            put(add_member::<S>).delete(remove_member::<S>),
        )
}

#[derive(Deserialize, Validate)]
pub struct CreateRequest {
    #[validate(length(min = 1, max = 255))]
    name: String,
    intro: Option<String>,
    /// Initial members.
    #[serde(default)]
    members: Vec<i32>,
}

#[derive(Deserialize, Validate)]
pub struct UpdateRequest {
    #[validate(length(min = 1, max = 255))]
    name: Option<String>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    intro: Option<Option<String>>,
}

fn map_db_err(err: DbErr) -> Error<'static> {
    if err.unique_violation_on("name") {
        return error::DUPLICATE_TEAM_NAME;
    }

    err.into()
}

fn map_member_err(err: DbErr) -> Error<'static> {
    if err.unique_violation() {
        return error::ALREADY_IN_TEAM;
    }
    if err.foreign_key_violation() {
        return error::USER_NOT_FOUND;
    }

    err.into()
}

async fn list_teams<S: StateTrait>(
    State(state): State<S>,
    Query(pagination): Query<Pagination>,
) -> Result<Json<Vec<teams::Model>>> {
    let teams = pagination
        .apply(teams::Entity::find(), teams::Column::Id)
        .all(state.db())
        .await?;

    Ok(Json(teams))
}

async fn get_team<S: StateTrait>(
    State(state): State<S>,
    Path(id): Path<i32>,
) -> Result<Json<teams::Model>> {
    let team = find_or::<teams::Entity, _>(state.db(), id, error::TEAM_NOT_FOUND).await?;

    Ok(Json(team))
}

async fn create_team<S: StateTrait>(
    State(state): State<S>,
    ValidatedJson(request): ValidatedJson<CreateRequest>,
) -> Result<(StatusCode, Json<teams::Model>)> {
    let txn = state.db().begin().await?;

    let team = teams::ActiveModel {
        name: Set(request.name),
        intro: Set(request.intro),
        ..Default::default()
    }
    .insert(&txn)
    .await
    .map_err(map_db_err)?;

    for user_id in request.members {
        team_members::ActiveModel {
            team_id: Set(team.id),
            user_id: Set(user_id),
        }
        .insert(&txn)
        .await
        .map_err(map_member_err)?;
    }

    txn.commit().await?;

    info!("created team {team} ({})", team.id);

    Ok((StatusCode::CREATED, Json(team)))
}

async fn update_team<S: StateTrait>(
    State(state): State<S>,
    Path(id): Path<i32>,
    ValidatedJson(request): ValidatedJson<UpdateRequest>,
) -> Result<Json<teams::Model>> {
    let team = find_or::<teams::Entity, _>(state.db(), id, error::TEAM_NOT_FOUND).await?;

    let mut active_model = team.clone().into_active_model();
    active_model.name = set_option(request.name);
    active_model.intro = set_option(request.intro);

    let team = update_changed(state.db(), team, active_model)
        .await
        .map_err(map_db_err)?;

    Ok(Json(team))
}

async fn delete_team<S: StateTrait>(
    State(state): State<S>,
    Path(id): Path<i32>,
) -> Result<StatusCode> {
    delete_or::<teams::Entity, _>(state.db(), id, error::TEAM_NOT_FOUND).await?;

    info!("deleted team {id}");

    Ok(StatusCode::NO_CONTENT)
}

async fn list_members<S: StateTrait>(
    State(state): State<S>,
    Path(id): Path<i32>,
) -> Result<Json<Vec<users::Model>>> {
    let team = find_or::<teams::Entity, _>(state.db(), id, error::TEAM_NOT_FOUND).await?;

    let members = team
        .find_related(users::Entity)
        .order_by_asc(users::Column::Id)
        .all(state.db())
        .await?;

    Ok(Json(members))
}

async fn add_member<S: StateTrait>(
    State(state): State<S>,
    Path((id, user_id)): Path<(i32, i32)>,
) -> Result<StatusCode> {
    find_or::<teams::Entity, _>(state.db(), id, error::TEAM_NOT_FOUND).await?;

    team_members::ActiveModel {
        team_id: Set(id),
        user_id: Set(user_id),
    }
    .insert(state.db())
    .await
    .map_err(map_member_err)?;

    info!("user {user_id} joined team {id}");

    Ok(StatusCode::NO_CONTENT)
}

async fn remove_member<S: StateTrait>(
    State(state): State<S>,
    Path((id, user_id)): Path<(i32, i32)>,
) -> Result<StatusCode> {
    let res = team_members::Entity::delete_by_id((id, user_id))
        .exec(state.db())
        .await?;

    if res.rows_affected == 0 {
        return Err(error::NO_SUCH_MEMBER);
    }

    info!("user {user_id} left team {id}");

    Ok(StatusCode::NO_CONTENT)
}
