use super::comment_attachments;
use crate::{
    error::{self, DatabaseError, Error, Result},
    extractors::{Json, Path, Query, ValidatedJson},
    utils::{delete_or, find_or, remove_uploads, set_option, update_changed, Pagination},
    StateTrait,
};
use axum::{extract::State, http::StatusCode, routing::get, Router};
use entity::{comments, teams, user_profiles, users};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DbErr, EntityTrait, IntoActiveModel, Set,
    TransactionTrait,
};
use serde::Deserialize;
use validator::Validate;

/// GET    /users
/// POST   /users
/// GET    /users/:id
/// PATCH  /users/:id
/// DELETE /users/:id
/// GET    /users/:id/teams
pub fn routes<S: StateTrait>() -> Router<S> {
    Router::new()
        .route("/", get(list_users::<S>).post(create_user::<S>))
        .route(
            "/:id",
            get(get_user::<S>)
                .patch(update_user::<S>)
                .delete(delete_user::<S>),
        )
        .route("/:id/teams", get(list_user_teams::<S>))
}

#[derive(Deserialize, Validate)]
pub struct CreateRequest {
    #[validate(length(min = 1, max = 150))]
    username: String,
    #[serde(default)]
    is_staff: bool,
}

#[derive(Deserialize, Validate)]
pub struct UpdateRequest {
    #[validate(length(min = 1, max = 150))]
    username: Option<String>,
    is_staff: Option<bool>,
}

fn map_db_err(err: DbErr) -> Error<'static> {
    if err.unique_violation_on("username") {
        return error::DUPLICATE_USERNAME;
    }

    err.into()
}

async fn list_users<S: StateTrait>(
    State(state): State<S>,
    Query(pagination): Query<Pagination>,
) -> Result<Json<Vec<users::Model>>> {
    let users = pagination
        .apply(users::Entity::find(), users::Column::Id)
        .all(state.db())
        .await?;

    Ok(Json(users))
}

async fn get_user<S: StateTrait>(
    State(state): State<S>,
    Path(id): Path<i32>,
) -> Result<Json<users::Model>> {
    let user = find_or::<users::Entity, _>(state.db(), id, error::USER_NOT_FOUND).await?;

    Ok(Json(user))
}

async fn create_user<S: StateTrait>(
    State(state): State<S>,
    ValidatedJson(request): ValidatedJson<CreateRequest>,
) -> Result<(StatusCode, Json<users::Model>)> {
    let user = users::ActiveModel {
        username: Set(request.username),
        is_staff: Set(request.is_staff),
        ..Default::default()
    }
    .insert(state.db())
    .await
    .map_err(map_db_err)?;

    info!("created user {} ({})", user.username, user.id);

    Ok((StatusCode::CREATED, Json(user)))
}

async fn update_user<S: StateTrait>(
    State(state): State<S>,
    Path(id): Path<i32>,
    ValidatedJson(request): ValidatedJson<UpdateRequest>,
) -> Result<Json<users::Model>> {
    let user = find_or::<users::Entity, _>(state.db(), id, error::USER_NOT_FOUND).await?;

    let mut active_model = user.clone().into_active_model();
    active_model.username = set_option(request.username);
    active_model.is_staff = set_option(request.is_staff);

    let user = update_changed(state.db(), user, active_model)
        .await
        .map_err(map_db_err)?;

    Ok(Json(user))
}

async fn delete_user<S: StateTrait>(
    State(state): State<S>,
    Path(id): Path<i32>,
) -> Result<StatusCode> {
    let txn = state.db().begin().await?;

    // Comments and the profile of the user go with it.
    let mut files = comment_attachments::files_of_comments(
        &txn,
        Condition::all().add(comments::Column::Author.eq(id)),
    )
    .await?;
    let profile = user_profiles::Entity::find_by_user(id).one(&txn).await?;
    files.extend(profile.and_then(|profile| profile.photo));

    delete_or::<users::Entity, _>(&txn, id, error::USER_NOT_FOUND).await?;

    txn.commit().await?;
    remove_uploads(state.media_root(), &files).await;

    info!("deleted user {id}");

    Ok(StatusCode::NO_CONTENT)
}

async fn list_user_teams<S: StateTrait>(
    State(state): State<S>,
    Path(id): Path<i32>,
) -> Result<Json<Vec<teams::Model>>> {
    find_or::<users::Entity, _>(state.db(), id, error::USER_NOT_FOUND).await?;
    let teams = teams::Entity::find_from_member(id).all(state.db()).await?;

    Ok(Json(teams))
}
