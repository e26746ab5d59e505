use crate::{
    error::{self, DatabaseError, Error, Result},
    extractors::{Json, Path, Query, ValidatedJson},
    utils::{delete_or, find_or, set_option, update_changed, Pagination},
    StateTrait,
};
use axum::{extract::State, http::StatusCode, routing::get, Router};
use chrono::Utc;
use entity::{
    contest_languages, contest_problems, contests,
    submissions::{self, SubmissionError, SubmissionResult, SubmissionStatus},
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, IntoActiveModel,
    QueryFilter, Set,
};
use serde::Deserialize;
use validator::Validate;

/// GET    /submissions?user=&problem=&contest=&status=
/// POST   /submissions
/// GET    /submissions/:id
/// PATCH  /submissions/:id
/// DELETE /submissions/:id
pub fn routes<S: StateTrait>() -> Router<S> {
    Router::new()
        .route("/", get(list_submissions::<S>).post(create_submission::<S>))
        .route(
            "/:id",
            get(get_submission::<S>)
                .patch(update_submission::<S>)
                .delete(delete_submission::<S>),
        )
}

#[derive(Deserialize)]
pub struct Filter {
    user: Option<i32>,
    problem: Option<i32>,
    contest: Option<i32>,
    status: Option<i16>,
}

#[derive(Deserialize, Validate)]
pub struct CreateRequest {
    problem: i32,
    user: i32,
    contest: Option<i32>,
    language: i32,
    #[validate(length(min = 1))]
    code: String,
    judge: i32,
    #[serde(default)]
    status: SubmissionStatus,
    #[serde(default)]
    result: SubmissionResult,
    #[serde(default)]
    error: SubmissionError,
    detail: Option<String>,
    #[serde(default)]
    locked: bool,
}

#[derive(Deserialize, Validate)]
pub struct UpdateRequest {
    problem: Option<i32>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    contest: Option<Option<i32>>,
    language: Option<i32>,
    #[validate(length(min = 1))]
    code: Option<String>,
    judge: Option<i32>,
    status: Option<SubmissionStatus>,
    result: Option<SubmissionResult>,
    error: Option<SubmissionError>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    detail: Option<Option<String>>,
    locked: Option<bool>,
}

impl UpdateRequest {
    /// Only a request that unlocks the submission may touch a locked one.
    fn unlocks(&self) -> bool {
        self.locked == Some(false)
    }
}

fn map_db_err(err: DbErr) -> Error<'static> {
    if err.foreign_key_violation() {
        return error::INVALID_REFERENCE;
    }

    err.into()
}

/// A contest submission must use a problem and a language of the contest.
async fn check_contest<C: ConnectionTrait>(
    db: &C,
    contest: i32,
    problem: i32,
    language: i32,
) -> Result<contests::Model> {
    let contest = find_or::<contests::Entity, _>(db, contest, error::CONTEST_NOT_FOUND).await?;

    let has_problem = contest_problems::Entity::find_by_id((contest.id, problem))
        .one(db)
        .await?
        .is_some();
    if !has_problem {
        return Err(error::PROBLEM_NOT_IN_CONTEST);
    }

    let has_language = contest_languages::Entity::find_by_id((contest.id, language))
        .one(db)
        .await?
        .is_some();
    if !has_language {
        return Err(error::LANGUAGE_NOT_IN_CONTEST);
    }

    Ok(contest)
}

async fn list_submissions<S: StateTrait>(
    State(state): State<S>,
    Query(filter): Query<Filter>,
    Query(pagination): Query<Pagination>,
) -> Result<Json<Vec<submissions::Model>>> {
    let mut select = submissions::Entity::find();

    if let Some(user) = filter.user {
        select = select.filter(submissions::Column::User.eq(user));
    }
    if let Some(problem) = filter.problem {
        select = select.filter(submissions::Column::Problem.eq(problem));
    }
    if let Some(contest) = filter.contest {
        select = select.filter(submissions::Column::Contest.eq(contest));
    }
    if let Some(status) = filter.status {
        select = select.filter(submissions::Column::Status.eq(status));
    }

    let submissions = pagination
        .apply(select, submissions::Column::Id)
        .all(state.db())
        .await?;

    Ok(Json(submissions))
}

async fn get_submission<S: StateTrait>(
    State(state): State<S>,
    Path(id): Path<i32>,
) -> Result<Json<submissions::Model>> {
    let submission =
        find_or::<submissions::Entity, _>(state.db(), id, error::SUBMISSION_NOT_FOUND).await?;

    Ok(Json(submission))
}

async fn create_submission<S: StateTrait>(
    State(state): State<S>,
    ValidatedJson(request): ValidatedJson<CreateRequest>,
) -> Result<(StatusCode, Json<submissions::Model>)> {
    if let Some(contest) = request.contest {
        let contest = check_contest(state.db(), contest, request.problem, request.language).await?;

        if !contest.is_running_at(Utc::now()) {
            warn!("submission to contest {contest} outside of its window");
        }
    }

    let submission = submissions::ActiveModel {
        problem: Set(request.problem),
        user: Set(request.user),
        contest: Set(request.contest),
        language: Set(request.language),
        code: Set(request.code),
        status: Set(request.status),
        result: Set(request.result),
        error: Set(request.error),
        detail: Set(request.detail),
        locked: Set(request.locked),
        judge: Set(request.judge),
        ..Default::default()
    }
    .insert(state.db())
    .await
    .map_err(map_db_err)?;

    info!(
        "created submission {submission} of user {} for problem {}",
        submission.user, submission.problem
    );

    Ok((StatusCode::CREATED, Json(submission)))
}

async fn update_submission<S: StateTrait>(
    State(state): State<S>,
    Path(id): Path<i32>,
    ValidatedJson(request): ValidatedJson<UpdateRequest>,
) -> Result<Json<submissions::Model>> {
    let submission =
        find_or::<submissions::Entity, _>(state.db(), id, error::SUBMISSION_NOT_FOUND).await?;

    if submission.locked && !request.unlocks() {
        return Err(error::LOCKED_SUBMISSION);
    }

    let contest = request.contest.unwrap_or(submission.contest);
    let problem = request.problem.unwrap_or(submission.problem);
    let language = request.language.unwrap_or(submission.language);

    let target_changed =
        request.contest.is_some() || request.problem.is_some() || request.language.is_some();
    if target_changed {
        if let Some(contest) = contest {
            check_contest(state.db(), contest, problem, language).await?;
        }
    }

    let mut active_model = submission.clone().into_active_model();
    active_model.problem = set_option(request.problem);
    active_model.contest = set_option(request.contest);
    active_model.language = set_option(request.language);
    active_model.code = set_option(request.code);
    active_model.judge = set_option(request.judge);
    active_model.status = set_option(request.status);
    active_model.result = set_option(request.result);
    active_model.error = set_option(request.error);
    active_model.detail = set_option(request.detail);
    active_model.locked = set_option(request.locked);

    let submission = update_changed(state.db(), submission, active_model)
        .await
        .map_err(map_db_err)?;

    debug!(status = ?submission.status, "updated submission {submission}");

    Ok(Json(submission))
}

async fn delete_submission<S: StateTrait>(
    State(state): State<S>,
    Path(id): Path<i32>,
) -> Result<StatusCode> {
    delete_or::<submissions::Entity, _>(state.db(), id, error::SUBMISSION_NOT_FOUND).await?;

    info!("deleted submission {id}");

    Ok(StatusCode::NO_CONTENT)
}
