use super::comment_attachments;
use crate::{
    error::{self, DatabaseError, Error, Result},
    extractors::{Json, Path, Query, UserID, ValidatedJson},
    utils::{delete_or, find_or, remove_uploads, set_option, update_changed, Pagination},
    StateTrait,
};
use axum::{extract::State, http::StatusCode, routing::get, Router};
use entity::{comments, problem_attributes, problems, problems::CustomJudgeType};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DbErr, EntityTrait, IntoActiveModel, ModelTrait,
    QueryOrder, Set, TransactionTrait,
};
use serde::Deserialize;
use validator::Validate;

/// GET    /problems
/// POST   /problems
/// GET    /problems/:id
/// PATCH  /problems/:id
/// DELETE /problems/:id
///
/// GET    /problems/:id/attributes
/// POST   /problems/:id/attributes
pub fn routes<S: StateTrait>() -> Router<S> {
    Router::new()
        .route("/", get(list_problems::<S>).post(create_problem::<S>))
        .route(
            "/:id",
            get(get_problem::<S>)
                .patch(update_problem::<S>)
                .delete(delete_problem::<S>),
        )
        .route(
            "/:id/attributes",
            get(list_attributes::<S>).post(add_attribute::<S>),
        )
}

#[derive(Deserialize, Validate)]
pub struct CreateRequest {
    #[validate(length(min = 1, max = 255))]
    title: String,
    description: String,
    hint: Option<String>,
    input_format: String,
    output_format: String,
    input_sample: Option<String>,
    output_sample: String,
    input_judge: Option<String>,
    output_judge: String,
    #[validate(range(min = 1))]
    time_limit: i32,
    #[validate(range(min = 1))]
    memory_limit: i32,
    #[serde(default)]
    custom_judge_type: CustomJudgeType,
    custom_judge_code: Option<String>,
    /// Defaults to the requesting user.
    author: Option<i32>,
    problem_set: Option<i32>,
    #[validate(length(max = 100))]
    source: Option<String>,
    #[validate(url)]
    source_url: Option<String>,
    #[serde(default)]
    approved: bool,
}

#[derive(Deserialize, Validate)]
pub struct UpdateRequest {
    #[validate(length(min = 1, max = 255))]
    title: Option<String>,
    description: Option<String>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    hint: Option<Option<String>>,
    input_format: Option<String>,
    output_format: Option<String>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    input_sample: Option<Option<String>>,
    output_sample: Option<String>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    input_judge: Option<Option<String>>,
    output_judge: Option<String>,
    #[validate(range(min = 1))]
    time_limit: Option<i32>,
    #[validate(range(min = 1))]
    memory_limit: Option<i32>,
    custom_judge_type: Option<CustomJudgeType>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    custom_judge_code: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    author: Option<Option<i32>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    problem_set: Option<Option<i32>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[validate(length(max = 100))]
    source: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[validate(url)]
    source_url: Option<Option<String>>,
    approved: Option<bool>,
}

#[derive(Deserialize, Validate)]
pub struct AttributeRequest {
    #[validate(length(min = 1, max = 100))]
    key: String,
    #[validate(length(max = 255))]
    value: String,
}

fn map_db_err(err: DbErr) -> Error<'static> {
    if err.unique_violation_on("title") {
        return error::DUPLICATE_PROBLEM_TITLE;
    }
    if err.foreign_key_violation() {
        return error::INVALID_REFERENCE;
    }

    err.into()
}

async fn list_problems<S: StateTrait>(
    State(state): State<S>,
    Query(pagination): Query<Pagination>,
) -> Result<Json<Vec<problems::Model>>> {
    let problems = pagination
        .apply(problems::Entity::find(), problems::Column::Id)
        .all(state.db())
        .await?;

    Ok(Json(problems))
}

async fn get_problem<S: StateTrait>(
    State(state): State<S>,
    Path(id): Path<i32>,
) -> Result<Json<problems::Model>> {
    let problem = find_or::<problems::Entity, _>(state.db(), id, error::PROBLEM_NOT_FOUND).await?;

    Ok(Json(problem))
}

async fn create_problem<S: StateTrait>(
    State(state): State<S>,
    user_id: UserID,
    ValidatedJson(request): ValidatedJson<CreateRequest>,
) -> Result<(StatusCode, Json<problems::Model>)> {
    let problem = problems::ActiveModel {
        title: Set(request.title),
        description: Set(request.description),
        hint: Set(request.hint),
        input_format: Set(request.input_format),
        output_format: Set(request.output_format),
        input_sample: Set(request.input_sample),
        output_sample: Set(request.output_sample),
        input_judge: Set(request.input_judge),
        output_judge: Set(request.output_judge),
        time_limit: Set(request.time_limit),
        memory_limit: Set(request.memory_limit),
        custom_judge_type: Set(request.custom_judge_type),
        custom_judge_code: Set(request.custom_judge_code),
        author: Set(Some(request.author.unwrap_or(*user_id))),
        problem_set: Set(request.problem_set),
        source: Set(request.source),
        source_url: Set(request.source_url),
        approved: Set(request.approved),
        ..Default::default()
    }
    .insert(state.db())
    .await
    .map_err(map_db_err)?;

    info!("created problem {problem}");

    Ok((StatusCode::CREATED, Json(problem)))
}

async fn update_problem<S: StateTrait>(
    State(state): State<S>,
    Path(id): Path<i32>,
    ValidatedJson(request): ValidatedJson<UpdateRequest>,
) -> Result<Json<problems::Model>> {
    let problem = find_or::<problems::Entity, _>(state.db(), id, error::PROBLEM_NOT_FOUND).await?;

    let mut active_model = problem.clone().into_active_model();
    active_model.title = set_option(request.title);
    active_model.description = set_option(request.description);
    active_model.hint = set_option(request.hint);
    active_model.input_format = set_option(request.input_format);
    active_model.output_format = set_option(request.output_format);
    active_model.input_sample = set_option(request.input_sample);
    active_model.output_sample = set_option(request.output_sample);
    active_model.input_judge = set_option(request.input_judge);
    active_model.output_judge = set_option(request.output_judge);
    active_model.time_limit = set_option(request.time_limit);
    active_model.memory_limit = set_option(request.memory_limit);
    active_model.custom_judge_type = set_option(request.custom_judge_type);
    active_model.custom_judge_code = set_option(request.custom_judge_code);
    active_model.author = set_option(request.author);
    active_model.problem_set = set_option(request.problem_set);
    active_model.source = set_option(request.source);
    active_model.source_url = set_option(request.source_url);
    active_model.approved = set_option(request.approved);

    let problem = update_changed(state.db(), problem, active_model)
        .await
        .map_err(map_db_err)?;

    info!("updated problem {problem}");

    Ok(Json(problem))
}

async fn delete_problem<S: StateTrait>(
    State(state): State<S>,
    Path(id): Path<i32>,
) -> Result<StatusCode> {
    let txn = state.db().begin().await?;

    let files = comment_attachments::files_of_comments(
        &txn,
        Condition::all().add(comments::Column::Problem.eq(id)),
    )
    .await?;
    delete_or::<problems::Entity, _>(&txn, id, error::PROBLEM_NOT_FOUND).await?;

    txn.commit().await?;
    remove_uploads(state.media_root(), &files).await;

    info!("deleted problem {id} with {} attachments", files.len());

    Ok(StatusCode::NO_CONTENT)
}

async fn list_attributes<S: StateTrait>(
    State(state): State<S>,
    Path(id): Path<i32>,
) -> Result<Json<Vec<problem_attributes::Model>>> {
    let problem = find_or::<problems::Entity, _>(state.db(), id, error::PROBLEM_NOT_FOUND).await?;

    let attributes = problem
        .find_related(problem_attributes::Entity)
        .order_by_asc(problem_attributes::Column::Id)
        .all(state.db())
        .await?;

    Ok(Json(attributes))
}

async fn add_attribute<S: StateTrait>(
    State(state): State<S>,
    Path(id): Path<i32>,
    ValidatedJson(request): ValidatedJson<AttributeRequest>,
) -> Result<(StatusCode, Json<problem_attributes::Model>)> {
    find_or::<problems::Entity, _>(state.db(), id, error::PROBLEM_NOT_FOUND).await?;

    let attribute = problem_attributes::ActiveModel {
        problem: Set(id),
        key: Set(request.key),
        value: Set(request.value),
        ..Default::default()
    }
    .insert(state.db())
    .await?;

    info!("added problem attribute {attribute}");

    Ok((StatusCode::CREATED, Json(attribute)))
}
