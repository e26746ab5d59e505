use crate::{
    error::{self, DatabaseError, Error, Result},
    extractors::{Json, Path, Query, ValidatedJson},
    utils::{delete_or, find_or, set_option, update_changed, Pagination},
    StateTrait,
};
use axum::{extract::State, http::StatusCode, routing::get, Router};
use entity::problem_attributes;
use sea_orm::{ActiveModelTrait, DbErr, EntityTrait, IntoActiveModel, Set};
use serde::Deserialize;
use validator::Validate;

pub fn routes<S: StateTrait>() -> Router<S> {
    Router::new()
        .route(
            "/",
            get(list_attributes::<S>).post(create_attribute::<S>),
        )
        .route(
            "/:id",
            get(get_attribute::<S>)
                .patch(update_attribute::<S>)
                .delete(delete_attribute::<S>),
        )
}

#[derive(Deserialize, Validate)]
pub struct CreateRequest {
    problem: i32,
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

fn map_db_err(err: DbErr) -> Error<'static> {
    if err.foreign_key_violation() {
        return error::PROBLEM_NOT_FOUND;
    }

    err.into()
}

async fn list_attributes<S: StateTrait>(
    State(state): State<S>,
    Query(pagination): Query<Pagination>,
) -> Result<Json<Vec<problem_attributes::Model>>> {
    let attributes = pagination
        .apply(
            problem_attributes::Entity::find(),
            problem_attributes::Column::Id,
        )
        .all(state.db())
        .await?;

    Ok(Json(attributes))
}

async fn get_attribute<S: StateTrait>(
    State(state): State<S>,
    Path(id): Path<i32>,
) -> Result<Json<problem_attributes::Model>> {
    let attribute = find_or::<problem_attributes::Entity, _>(
        state.db(),
        id,
        error::PROBLEM_ATTRIBUTE_NOT_FOUND,
    )
    .await?;

    Ok(Json(attribute))
}

async fn create_attribute<S: StateTrait>(
    State(state): State<S>,
    ValidatedJson(request): ValidatedJson<CreateRequest>,
) -> Result<(StatusCode, Json<problem_attributes::Model>)> {
    let attribute = problem_attributes::ActiveModel {
        problem: Set(request.problem),
        key: Set(request.key),
        value: Set(request.value),
        ..Default::default()
    }
    .insert(state.db())
    .await
    .map_err(map_db_err)?;

    info!("created problem attribute {attribute}");

    Ok((StatusCode::CREATED, Json(attribute)))
}

async fn update_attribute<S: StateTrait>(
    State(state): State<S>,
    Path(id): Path<i32>,
    ValidatedJson(request): ValidatedJson<UpdateRequest>,
) -> Result<Json<problem_attributes::Model>> {
    let attribute = find_or::<problem_attributes::Entity, _>(
        state.db(),
        id,
        error::PROBLEM_ATTRIBUTE_NOT_FOUND,
    )
    .await?;

    let mut active_model = attribute.clone().into_active_model();
    active_model.key = set_option(request.key);
    active_model.value = set_option(request.value);

    let attribute = update_changed(state.db(), attribute, active_model).await?;

    Ok(Json(attribute))
}

async fn delete_attribute<S: StateTrait>(
    State(state): State<S>,
    Path(id): Path<i32>,
) -> Result<StatusCode> {
    delete_or::<problem_attributes::Entity, _>(
        state.db(),
        id,
        error::PROBLEM_ATTRIBUTE_NOT_FOUND,
    )
    .await?;

    Ok(StatusCode::NO_CONTENT)
}
