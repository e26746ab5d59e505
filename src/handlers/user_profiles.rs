use crate::{
    error::{self, DatabaseError, Error, Result},
    extractors::{Json, Path, Query, ValidatedJson},
    utils::{find_or, remove_upload, set_option, store_upload, update_changed, Pagination},
    StateTrait,
};
use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    routing::{get, put},
    Router,
};
use entity::{
    problems, starred_problems,
    user_profiles::{self, Gender, PHOTO_UPLOAD_TO},
};
use sea_orm::{
    ActiveModelTrait, DbErr, EntityTrait, IntoActiveModel, ModelTrait, QueryOrder, Set,
};
use serde::Deserialize;
use validator::Validate;

/// GET    /user_profiles
/// POST   /user_profiles
/// GET    /user_profiles/:id
/// PATCH  /user_profiles/:id
/// DELETE /user_profiles/:id
/// GET    /user_profiles/user/:user_id
///
/// PUT    /user_profiles/:id/photo?filename=
/// DELETE /user_profiles/:id/photo
///
/// GET    /user_profiles/:id/starred
/// PUT    /user_profiles/:id/starred/:problem_id
/// DELETE /user_profiles/:id/starred/:problem_id
pub fn routes<S: StateTrait>() -> Router<S> {
    Router::new()
        .route("/", get(list_profiles::<S>).post(create_profile::<S>))
        .route(
            "/:id",
            get(get_profile::<S>)
                .patch(update_profile::<S>)
                .delete(delete_profile::<S>),
        )
        .route("/user/:user_id", get(get_profile_of_user::<S>))
        .route(
            "/:id/photo",
            put(upload_photo::<S>).delete(delete_photo::<S>),
        )
        .route("/:id/starred", get(list_starred::<S>))
        .route(
            "/:id/starred/:problem_id",
            put(star_problem::<S>).delete(unstar_problem::<S>),
        )
}

#[derive(Deserialize, Validate)]
pub struct CreateRequest {
    user: i32,
    #[validate(length(max = 50))]
    realname: String,
    gender: Gender,
    #[validate(length(max = 100))]
    #[serde(default)]
    bio: String,
}

/// Thumbnails are derived from the photo and cannot be set directly.
#[derive(Deserialize, Validate)]
pub struct UpdateRequest {
    #[validate(length(max = 50))]
    realname: Option<String>,
    gender: Option<Gender>,
    #[validate(length(max = 100))]
    bio: Option<String>,
}

#[derive(Deserialize)]
pub struct UploadParams {
    filename: Option<String>,
}

fn map_db_err(err: DbErr) -> Error<'static> {
    if err.unique_violation_on("user") {
        return error::DUPLICATE_PROFILE;
    }
    if err.foreign_key_violation() {
        return error::USER_NOT_FOUND;
    }

    err.into()
}

async fn list_profiles<S: StateTrait>(
    State(state): State<S>,
    Query(pagination): Query<Pagination>,
) -> Result<Json<Vec<user_profiles::Model>>> {
    let profiles = pagination
        .apply(user_profiles::Entity::find(), user_profiles::Column::Id)
        .all(state.db())
        .await?;

    Ok(Json(profiles))
}

async fn get_profile<S: StateTrait>(
    State(state): State<S>,
    Path(id): Path<i32>,
) -> Result<Json<user_profiles::Model>> {
    let profile =
        find_or::<user_profiles::Entity, _>(state.db(), id, error::PROFILE_NOT_FOUND).await?;

    Ok(Json(profile))
}

async fn get_profile_of_user<S: StateTrait>(
    State(state): State<S>,
    Path(user_id): Path<i32>,
) -> Result<Json<user_profiles::Model>> {
    let profile = user_profiles::Entity::find_by_user(user_id)
        .one(state.db())
        .await?
        .ok_or(error::PROFILE_NOT_FOUND)?;

    Ok(Json(profile))
}

async fn create_profile<S: StateTrait>(
    State(state): State<S>,
    ValidatedJson(request): ValidatedJson<CreateRequest>,
) -> Result<(StatusCode, Json<user_profiles::Model>)> {
    let profile = user_profiles::ActiveModel {
        user: Set(request.user),
        realname: Set(request.realname),
        gender: Set(request.gender),
        bio: Set(request.bio),
        photo: Set(None),
        thumb_24: Set(None),
        thumb_48: Set(None),
        thumb_96: Set(None),
        ..Default::default()
    }
    .insert(state.db())
    .await
    .map_err(map_db_err)?;

    info!("created {profile} ({})", profile.id);

    Ok((StatusCode::CREATED, Json(profile)))
}

async fn update_profile<S: StateTrait>(
    State(state): State<S>,
    Path(id): Path<i32>,
    ValidatedJson(request): ValidatedJson<UpdateRequest>,
) -> Result<Json<user_profiles::Model>> {
    let profile =
        find_or::<user_profiles::Entity, _>(state.db(), id, error::PROFILE_NOT_FOUND).await?;

    let mut active_model = profile.clone().into_active_model();
    active_model.realname = set_option(request.realname);
    active_model.gender = set_option(request.gender);
    active_model.bio = set_option(request.bio);

    let profile = update_changed(state.db(), profile, active_model).await?;

    Ok(Json(profile))
}

async fn delete_profile<S: StateTrait>(
    State(state): State<S>,
    Path(id): Path<i32>,
) -> Result<StatusCode> {
    let profile =
        find_or::<user_profiles::Entity, _>(state.db(), id, error::PROFILE_NOT_FOUND).await?;

    profile.clone().delete(state.db()).await?;

    if let Some(photo) = &profile.photo {
        remove_upload(state.media_root(), photo).await;
    }

    info!("deleted profile {profile}");

    Ok(StatusCode::NO_CONTENT)
}

/// Replaces the profile photo with the raw request body.
async fn upload_photo<S: StateTrait>(
    State(state): State<S>,
    Path(id): Path<i32>,
    Query(params): Query<UploadParams>,
    body: Bytes,
) -> Result<Json<user_profiles::Model>> {
    let filename = params
        .filename
        .filter(|filename| !filename.is_empty())
        .ok_or(error::MISSING_FILENAME)?;

    let profile =
        find_or::<user_profiles::Entity, _>(state.db(), id, error::PROFILE_NOT_FOUND).await?;
    let old_photo = profile.photo.clone();

    let photo = store_upload(state.media_root(), PHOTO_UPLOAD_TO, &filename, &body).await?;

    let mut active_model = profile.into_active_model();
    active_model.photo = Set(Some(photo.clone()));

    let profile = match active_model.update(state.db()).await {
        Ok(profile) => profile,
        Err(err) => {
            remove_upload(state.media_root(), &photo).await;
            return Err(err.into());
        }
    };

    if let Some(old_photo) = old_photo {
        remove_upload(state.media_root(), &old_photo).await;
    }

    info!("updated photo of profile {id}");

    Ok(Json(profile))
}

async fn delete_photo<S: StateTrait>(
    State(state): State<S>,
    Path(id): Path<i32>,
) -> Result<Json<user_profiles::Model>> {
    let profile =
        find_or::<user_profiles::Entity, _>(state.db(), id, error::PROFILE_NOT_FOUND).await?;

    let Some(photo) = profile.photo.clone() else {
        return Ok(Json(profile));
    };

    let mut active_model = profile.into_active_model();
    active_model.photo = Set(None);

    let profile = active_model.update(state.db()).await?;
    remove_upload(state.media_root(), &photo).await;

    Ok(Json(profile))
}

async fn list_starred<S: StateTrait>(
    State(state): State<S>,
    Path(id): Path<i32>,
) -> Result<Json<Vec<problems::Model>>> {
    let profile =
        find_or::<user_profiles::Entity, _>(state.db(), id, error::PROFILE_NOT_FOUND).await?;

    let problems = profile
        .find_related(problems::Entity)
        .order_by_asc(problems::Column::Id)
        .all(state.db())
        .await?;

    Ok(Json(problems))
}

/// Starring a problem twice is a no-op.
async fn star_problem<S: StateTrait>(
    State(state): State<S>,
    Path((id, problem_id)): Path<(i32, i32)>,
) -> Result<StatusCode> {
    find_or::<user_profiles::Entity, _>(state.db(), id, error::PROFILE_NOT_FOUND).await?;
    find_or::<problems::Entity, _>(state.db(), problem_id, error::PROBLEM_NOT_FOUND).await?;

    let starred = starred_problems::Entity::find_by_id((id, problem_id))
        .one(state.db())
        .await?;

    if starred.is_none() {
        starred_problems::ActiveModel {
            profile_id: Set(id),
            problem_id: Set(problem_id),
        }
        .insert(state.db())
        .await?;
    }

    Ok(StatusCode::NO_CONTENT)
}

async fn unstar_problem<S: StateTrait>(
    State(state): State<S>,
    Path((id, problem_id)): Path<(i32, i32)>,
) -> Result<StatusCode> {
    find_or::<user_profiles::Entity, _>(state.db(), id, error::PROFILE_NOT_FOUND).await?;

    starred_problems::Entity::delete_by_id((id, problem_id))
        .exec(state.db())
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
