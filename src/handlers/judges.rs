use crate::{
    error::{self, Result},
    extractors::{Json, Path, Query, ValidatedJson},
    utils::{delete_or, find_or, set_option, update_changed, Pagination},
    StateTrait,
};
use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Router,
};
use entity::judges::{self, JudgeStatus};
use sea_orm::{ActiveModelTrait, EntityTrait, IntoActiveModel, Set};
use serde::Deserialize;
use validator::Validate;

/// GET    /judges
/// POST   /judges
/// GET    /judges/:id
/// PATCH  /judges/:id
/// DELETE /judges/:id
/// POST   /judges/:id/status
pub fn routes<S: StateTrait>() -> Router<S> {
    Router::new()
        .route("/", get(list_judges::<S>).post(create_judge::<S>))
        .route(
            "/:id",
            get(get_judge::<S>)
                .patch(update_judge::<S>)
                .delete(delete_judge::<S>),
        )
        .route("/:id/status", post(report_status::<S>))
}

#[derive(Deserialize, Validate)]
pub struct CreateRequest {
    #[validate(length(min = 1, max = 255))]
    name: String,
    #[validate(length(min = 1, max = 255))]
    hostname: String,
    #[validate(ip)]
    ip: Option<String>,
    #[serde(default)]
    status: JudgeStatus,
}

#[derive(Deserialize, Validate)]
pub struct UpdateRequest {
    #[validate(length(min = 1, max = 255))]
    name: Option<String>,
    #[validate(length(min = 1, max = 255))]
    hostname: Option<String>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[validate(ip)]
    ip: Option<Option<String>>,
    status: Option<JudgeStatus>,
}

#[derive(Deserialize)]
pub struct StatusRequest {
    status: JudgeStatus,
}

async fn list_judges<S: StateTrait>(
    State(state): State<S>,
    Query(pagination): Query<Pagination>,
) -> Result<Json<Vec<judges::Model>>> {
    let judges = pagination
        .apply(judges::Entity::find(), judges::Column::Id)
        .all(state.db())
        .await?;

    Ok(Json(judges))
}

async fn get_judge<S: StateTrait>(
    State(state): State<S>,
    Path(id): Path<i32>,
) -> Result<Json<judges::Model>> {
    let judge = find_or::<judges::Entity, _>(state.db(), id, error::JUDGE_NOT_FOUND).await?;

    Ok(Json(judge))
}

async fn create_judge<S: StateTrait>(
    State(state): State<S>,
    ValidatedJson(request): ValidatedJson<CreateRequest>,
) -> Result<(StatusCode, Json<judges::Model>)> {
    let judge = judges::ActiveModel {
        name: Set(request.name),
        hostname: Set(request.hostname),
        ip: Set(request.ip),
        status: Set(request.status),
        ..Default::default()
    }
    .insert(state.db())
    .await?;

    info!("registered judge {judge}");

    Ok((StatusCode::CREATED, Json(judge)))
}

async fn update_judge<S: StateTrait>(
    State(state): State<S>,
    Path(id): Path<i32>,
    ValidatedJson(request): ValidatedJson<UpdateRequest>,
) -> Result<Json<judges::Model>> {
    let judge = find_or::<judges::Entity, _>(state.db(), id, error::JUDGE_NOT_FOUND).await?;

    let mut active_model = judge.clone().into_active_model();
    active_model.name = set_option(request.name);
    active_model.hostname = set_option(request.hostname);
    active_model.ip = set_option(request.ip);
    active_model.status = set_option(request.status);

    let judge = update_changed(state.db(), judge, active_model).await?;

    Ok(Json(judge))
}

async fn delete_judge<S: StateTrait>(
    State(state): State<S>,
    Path(id): Path<i32>,
) -> Result<StatusCode> {
    delete_or::<judges::Entity, _>(state.db(), id, error::JUDGE_NOT_FOUND).await?;

    info!("removed judge {id}");

    Ok(StatusCode::NO_CONTENT)
}

/// Heartbeat of a judge host. Always refreshes `last_run`.
async fn report_status<S: StateTrait>(
    State(state): State<S>,
    Path(id): Path<i32>,
    Json(request): Json<StatusRequest>,
) -> Result<Json<judges::Model>> {
    let judge = find_or::<judges::Entity, _>(state.db(), id, error::JUDGE_NOT_FOUND).await?;

    if judge.status != request.status {
        info!(
            "judge {judge} changed status from {:?} to {:?}",
            judge.status, request.status
        );
    }

    let mut active_model = judge.into_active_model();
    active_model.status = Set(request.status);

    let judge = active_model.update(state.db()).await?;

    Ok(Json(judge))
}
