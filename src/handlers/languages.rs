use crate::{
    error::{self, DatabaseError, Error, Result},
    extractors::{Json, Path, Query, ValidatedJson},
    utils::{delete_or, find_or, set_option, update_changed, Pagination},
    StateTrait,
};
use axum::{extract::State, http::StatusCode, routing::get, Router};
use entity::languages::{self, DEFAULT_MULTIPLIER};
use sea_orm::{ActiveModelTrait, DbErr, EntityTrait, IntoActiveModel, Set};
use serde::Deserialize;
use validator::Validate;

pub fn routes<S: StateTrait>() -> Router<S> {
    Router::new()
        .route("/", get(list_languages::<S>).post(create_language::<S>))
        .route(
            "/:id",
            get(get_language::<S>)
                .patch(update_language::<S>)
                .delete(delete_language::<S>),
        )
}

fn default_multiplier() -> f64 {
    DEFAULT_MULTIPLIER
}

#[derive(Deserialize, Validate)]
pub struct CreateRequest {
    #[validate(length(min = 1, max = 50))]
    name: String,
    #[validate(length(min = 1, max = 50))]
    short_name: String,
    #[serde(default = "default_multiplier")]
    #[validate(range(exclusive_min = 0.0))]
    time_mul: f64,
    #[serde(default = "default_multiplier")]
    #[validate(range(exclusive_min = 0.0))]
    memory_mul: f64,
    #[validate(length(max = 255))]
    extensions: String,
}

#[derive(Deserialize, Validate)]
pub struct UpdateRequest {
    #[validate(length(min = 1, max = 50))]
    name: Option<String>,
    #[validate(length(min = 1, max = 50))]
    short_name: Option<String>,
    #[validate(range(exclusive_min = 0.0))]
    time_mul: Option<f64>,
    #[validate(range(exclusive_min = 0.0))]
    memory_mul: Option<f64>,
    #[validate(length(max = 255))]
    extensions: Option<String>,
}

fn map_db_err(err: DbErr) -> Error<'static> {
    // `short_name` contains `name`, so it is checked first.
    if err.unique_violation_on("short_name") {
        return error::DUPLICATE_LANGUAGE_SHORT_NAME;
    }
    if err.unique_violation_on("name") {
        return error::DUPLICATE_LANGUAGE_NAME;
    }

    err.into()
}

async fn list_languages<S: StateTrait>(
    State(state): State<S>,
    Query(pagination): Query<Pagination>,
) -> Result<Json<Vec<languages::Model>>> {
    let languages = pagination
        .apply(languages::Entity::find(), languages::Column::Id)
        .all(state.db())
        .await?;

    Ok(Json(languages))
}

async fn get_language<S: StateTrait>(
    State(state): State<S>,
    Path(id): Path<i32>,
) -> Result<Json<languages::Model>> {
    let language =
        find_or::<languages::Entity, _>(state.db(), id, error::LANGUAGE_NOT_FOUND).await?;

    Ok(Json(language))
}

async fn create_language<S: StateTrait>(
    State(state): State<S>,
    ValidatedJson(request): ValidatedJson<CreateRequest>,
) -> Result<(StatusCode, Json<languages::Model>)> {
    let language = languages::ActiveModel {
        name: Set(request.name),
        short_name: Set(request.short_name),
        time_mul: Set(request.time_mul),
        memory_mul: Set(request.memory_mul),
        extensions: Set(request.extensions),
        ..Default::default()
    }
    .insert(state.db())
    .await
    .map_err(map_db_err)?;

    info!(
        extensions = ?language.extensions().collect::<Vec<_>>(),
        "created language {language}"
    );

    Ok((StatusCode::CREATED, Json(language)))
}

async fn update_language<S: StateTrait>(
    State(state): State<S>,
    Path(id): Path<i32>,
    ValidatedJson(request): ValidatedJson<UpdateRequest>,
) -> Result<Json<languages::Model>> {
    let language =
        find_or::<languages::Entity, _>(state.db(), id, error::LANGUAGE_NOT_FOUND).await?;

    let mut active_model = language.clone().into_active_model();
    active_model.name = set_option(request.name);
    active_model.short_name = set_option(request.short_name);
    active_model.time_mul = set_option(request.time_mul);
    active_model.memory_mul = set_option(request.memory_mul);
    active_model.extensions = set_option(request.extensions);

    let language = update_changed(state.db(), language, active_model)
        .await
        .map_err(map_db_err)?;

    Ok(Json(language))
}

async fn delete_language<S: StateTrait>(
    State(state): State<S>,
    Path(id): Path<i32>,
) -> Result<StatusCode> {
    delete_or::<languages::Entity, _>(state.db(), id, error::LANGUAGE_NOT_FOUND).await?;

    info!("deleted language {id}");

    Ok(StatusCode::NO_CONTENT)
}
