use super::comment_attachments;
use crate::{
    error::{self, DatabaseError, Error, Result},
    extractors::{Json, Path, Query, ValidatedJson},
    utils::{delete_or, find_or, remove_uploads, set_option, update_changed, Pagination},
    StateTrait,
};
use axum::{extract::State, http::StatusCode, routing::get, Router};
use entity::{comments, problem_sets, problems};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DbErr, EntityTrait, IntoActiveModel, ModelTrait,
    QueryFilter, QueryOrder, QuerySelect, QueryTrait, Set, TransactionTrait,
};
use serde::Deserialize;
use validator::Validate;

/// GET    /problem_sets
/// POST   /problem_sets
/// GET    /problem_sets/:id
/// PATCH  /problem_sets/:id
/// DELETE /problem_sets/:id
/// GET    /problem_sets/:id/problems
pub fn routes<S: StateTrait>() -> Router<S> {
    Router::new()
        .route("/", get(list_problem_sets::<S>).post(create_problem_set::<S>))
        .route(
            "/:id",
            get(get_problem_set::<S>)
                .patch(update_problem_set::<S>)
                .delete(delete_problem_set::<S>),
        )
        .route("/:id/problems", get(list_problems_in_set::<S>))
}

#[derive(Deserialize, Validate)]
pub struct CreateRequest {
    #[validate(length(min = 1, max = 255))]
    name: String,
    description: Option<String>,
}

#[derive(Deserialize, Validate)]
pub struct UpdateRequest {
    #[validate(length(min = 1, max = 255))]
    name: Option<String>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    description: Option<Option<String>>,
}

fn map_db_err(err: DbErr) -> Error<'static> {
    if err.unique_violation_on("name") {
        return error::DUPLICATE_PROBLEM_SET_NAME;
    }

    err.into()
}

async fn list_problem_sets<S: StateTrait>(
    State(state): State<S>,
    Query(pagination): Query<Pagination>,
) -> Result<Json<Vec<problem_sets::Model>>> {
    let problem_sets = pagination
        .apply(problem_sets::Entity::find(), problem_sets::Column::Id)
        .all(state.db())
        .await?;

    Ok(Json(problem_sets))
}

async fn get_problem_set<S: StateTrait>(
    State(state): State<S>,
    Path(id): Path<i32>,
) -> Result<Json<problem_sets::Model>> {
    let problem_set =
        find_or::<problem_sets::Entity, _>(state.db(), id, error::PROBLEM_SET_NOT_FOUND).await?;

    Ok(Json(problem_set))
}

async fn create_problem_set<S: StateTrait>(
    State(state): State<S>,
    ValidatedJson(request): ValidatedJson<CreateRequest>,
) -> Result<(StatusCode, Json<problem_sets::Model>)> {
    let problem_set = problem_sets::ActiveModel {
        name: Set(request.name),
        description: Set(request.description),
        ..Default::default()
    }
    .insert(state.db())
    .await
    .map_err(map_db_err)?;

    info!("created problem set {problem_set}");

    Ok((StatusCode::CREATED, Json(problem_set)))
}

async fn update_problem_set<S: StateTrait>(
    State(state): State<S>,
    Path(id): Path<i32>,
    ValidatedJson(request): ValidatedJson<UpdateRequest>,
) -> Result<Json<problem_sets::Model>> {
    let problem_set =
        find_or::<problem_sets::Entity, _>(state.db(), id, error::PROBLEM_SET_NOT_FOUND).await?;

    let mut active_model = problem_set.clone().into_active_model();
    active_model.name = set_option(request.name);
    active_model.description = set_option(request.description);

    let problem_set = update_changed(state.db(), problem_set, active_model)
        .await
        .map_err(map_db_err)?;

    Ok(Json(problem_set))
}

async fn delete_problem_set<S: StateTrait>(
    State(state): State<S>,
    Path(id): Path<i32>,
) -> Result<StatusCode> {
    let txn = state.db().begin().await?;

    let problems_in_set = problems::Entity::find()
        .select_only()
        .column(problems::Column::Id)
        .filter(problems::Column::ProblemSet.eq(id))
        .into_query();
    let files = comment_attachments::files_of_comments(
        &txn,
        Condition::all().add(comments::Column::Problem.in_subquery(problems_in_set)),
    )
    .await?;
    delete_or::<problem_sets::Entity, _>(&txn, id, error::PROBLEM_SET_NOT_FOUND).await?;

    txn.commit().await?;
    remove_uploads(state.media_root(), &files).await;

    info!("deleted problem set {id} with {} attachments", files.len());

    Ok(StatusCode::NO_CONTENT)
}

async fn list_problems_in_set<S: StateTrait>(
    State(state): State<S>,
    Path(id): Path<i32>,
) -> Result<Json<Vec<problems::Model>>> {
    let problem_set =
        find_or::<problem_sets::Entity, _>(state.db(), id, error::PROBLEM_SET_NOT_FOUND).await?;

    let problems = problem_set
        .find_related(problems::Entity)
        .order_by_asc(problems::Column::Id)
        .all(state.db())
        .await?;

    Ok(Json(problems))
}
