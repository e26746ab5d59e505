use crate::{
    error::{self, Result},
    extractors::{Json, Path, Query, ValidatedJson},
    utils::{delete_or, find_or, set_option, update_changed, Pagination},
    StateTrait,
};
use axum::{extract::State, http::StatusCode, routing::get, Router};
use entity::settings;
use sea_orm::{ActiveModelTrait, EntityTrait, IntoActiveModel, Set};
use serde::Deserialize;
use validator::Validate;

/// GET    /settings
/// POST   /settings
/// GET    /settings/:id
/// PATCH  /settings/:id
/// DELETE /settings/:id
/// GET    /settings/key/:key
pub fn routes<S: StateTrait>() -> Router<S> {
    Router::new()
        .route("/", get(list_settings::<S>).post(create_setting::<S>))
        .route(
            "/:id",
            get(get_setting::<S>)
                .patch(update_setting::<S>)
                .delete(delete_setting::<S>),
        )
        .route("/key/:key", get(get_setting_by_key::<S>))
}

#[derive(Deserialize, Validate)]
pub struct CreateRequest {
    #[validate(length(min = 1, max = 100))]
    key: String,
    #[validate(length(max = 255))]
    value: String,
}

#[derive(Deserialize, Validate)]
pub struct UpdateRequest {
    #[validate(length(min = 1, max = 100))]
    key: Option<String>,
    #[validate(length(max = 255))]
    value: Option<String>,
}

async fn list_settings<S: StateTrait>(
    State(state): State<S>,
    Query(pagination): Query<Pagination>,
) -> Result<Json<Vec<settings::Model>>> {
    let settings = pagination
        .apply(settings::Entity::find(), settings::Column::Id)
        .all(state.db())
        .await?;

    Ok(Json(settings))
}

async fn get_setting<S: StateTrait>(
    State(state): State<S>,
    Path(id): Path<i32>,
) -> Result<Json<settings::Model>> {
    let setting = find_or::<settings::Entity, _>(state.db(), id, error::SETTING_NOT_FOUND).await?;

    Ok(Json(setting))
}

async fn get_setting_by_key<S: StateTrait>(
    State(state): State<S>,
    Path(key): Path<String>,
) -> Result<Json<settings::Model>> {
    let setting = settings::Entity::find_by_key(&key)
        .one(state.db())
        .await?
        .ok_or(error::SETTING_NOT_FOUND)?;

    Ok(Json(setting))
}

async fn create_setting<S: StateTrait>(
    State(state): State<S>,
    ValidatedJson(request): ValidatedJson<CreateRequest>,
) -> Result<(StatusCode, Json<settings::Model>)> {
    let setting = settings::ActiveModel {
        key: Set(request.key),
        value: Set(request.value),
        ..Default::default()
    }
    .insert(state.db())
    .await?;

    info!("set {setting}");

    Ok((StatusCode::CREATED, Json(setting)))
}

async fn update_setting<S: StateTrait>(
    State(state): State<S>,
    Path(id): Path<i32>,
    ValidatedJson(request): ValidatedJson<UpdateRequest>,
) -> Result<Json<settings::Model>> {
    let setting = find_or::<settings::Entity, _>(state.db(), id, error::SETTING_NOT_FOUND).await?;

    let mut active_model = setting.clone().into_active_model();
    active_model.key = set_option(request.key);
    active_model.value = set_option(request.value);

    let setting = update_changed(state.db(), setting, active_model).await?;

    info!("set {setting}");

    Ok(Json(setting))
}

async fn delete_setting<S: StateTrait>(
    State(state): State<S>,
    Path(id): Path<i32>,
) -> Result<StatusCode> {
    delete_or::<settings::Entity, _>(state.db(), id, error::SETTING_NOT_FOUND).await?;

    Ok(StatusCode::NO_CONTENT)
}
