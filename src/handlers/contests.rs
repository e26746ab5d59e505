use super::{contest_teams, contest_users, registrations};
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
use chrono::{DateTime, Utc};
use entity::{
    contest_languages, contest_problems, contests,
    contests::{ContestType, OpenMode},
    languages, problems,
};
use sea_orm::{
    ActiveModelTrait, ConnectionTrait, DbErr, EntityTrait, IntoActiveModel, ModelTrait,
    QueryOrder, Set, TransactionTrait,
};
use serde::Deserialize;
use validator::Validate;

/// GET    /contests
/// POST   /contests
/// GET    /contests/:id
/// PATCH  /contests/:id
/// DELETE /contests/:id
///
/// GET    /contests/:id/problems
/// PUT    /contests/:id/problems/:problem_id
/// DELETE /contests/:id/problems/:problem_id
/// GET    /contests/:id/languages
/// PUT    /contests/:id/languages/:language_id
/// DELETE /contests/:id/languages/:language_id
///
/// GET    /contests/:id/users
/// POST   /contests/:id/users
/// GET    /contests/:id/teams
/// POST   /contests/:id/teams
pub fn routes<S: StateTrait>() -> Router<S> {
    Router::new()
        .route("/", get(list_contests::<S>).post(create_contest::<S>))
        .route(
            "/:id",
            get(get_contest::<S>)
                .patch(update_contest::<S>)
                .delete(delete_contest::<S>),
        )
        .route("/:id/problems", get(list_contest_problems::<S>))
        .route(
            "/:id/problems/:problem_id",
            put(add_contest_problem::<S>).delete(remove_contest_problem::<S>),
        )
        .route("/:id/languages", get(list_contest_languages::<S>))
        .route(
            "/:id/languages/:language_id",
            put(add_contest_language::<S>).delete(remove_contest_language::<S>),
        )
        .route(
            "/:id/users",
            get(contest_users::list_for_contest::<S>).post(contest_users::register_in_contest::<S>),
        )
        .route(
            "/:id/teams",
            get(contest_teams::list_for_contest::<S>).post(contest_teams::register_in_contest::<S>),
        )
}

#[derive(Deserialize, Validate)]
pub struct CreateRequest {
    #[validate(length(min = 1, max = 255))]
    name: String,
    description: Option<String>,
    begin_time: DateTime<Utc>,
    end_time: DateTime<Utc>,
    #[serde(rename = "type")]
    contest_type: ContestType,
    #[serde(default)]
    open: OpenMode,
    #[validate(length(max = 100))]
    password: Option<String>,
    #[serde(default = "default_need_approve")]
    need_approve: bool,
    #[serde(default)]
    problems: Vec<i32>,
    #[serde(default)]
    languages: Vec<i32>,
}

fn default_need_approve() -> bool {
    true
}

#[derive(Deserialize, Validate)]
pub struct UpdateRequest {
    #[validate(length(min = 1, max = 255))]
    name: Option<String>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    description: Option<Option<String>>,
    begin_time: Option<DateTime<Utc>>,
    end_time: Option<DateTime<Utc>>,
    #[serde(rename = "type")]
    contest_type: Option<ContestType>,
    open: Option<OpenMode>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[validate(length(max = 100))]
    password: Option<Option<String>>,
    need_approve: Option<bool>,
}

fn map_db_err(err: DbErr) -> Error<'static> {
    if err.unique_violation_on("name") {
        return error::DUPLICATE_CONTEST_NAME;
    }
    if err.foreign_key_violation() {
        return error::INVALID_REFERENCE;
    }

    err.into()
}

/// The window must not be empty and a password protected contest needs a
/// password.
fn check_contest(
    begin_time: DateTime<Utc>,
    end_time: DateTime<Utc>,
    open: OpenMode,
    password: Option<&str>,
) -> Result {
    if end_time <= begin_time {
        return Err(error::INVALID_CONTEST_TIME);
    }

    if open == OpenMode::Password && password.map_or(true, str::is_empty) {
        return Err(error::CONTEST_PASSWORD_REQUIRED);
    }

    Ok(())
}

async fn list_contests<S: StateTrait>(
    State(state): State<S>,
    Query(pagination): Query<Pagination>,
) -> Result<Json<Vec<contests::Model>>> {
    let contests = pagination
        .apply(contests::Entity::find(), contests::Column::Id)
        .all(state.db())
        .await?;

    Ok(Json(contests))
}

async fn get_contest<S: StateTrait>(
    State(state): State<S>,
    Path(id): Path<i32>,
) -> Result<Json<contests::Model>> {
    let contest = find_or::<contests::Entity, _>(state.db(), id, error::CONTEST_NOT_FOUND).await?;

    Ok(Json(contest))
}

async fn create_contest<S: StateTrait>(
    State(state): State<S>,
    ValidatedJson(request): ValidatedJson<CreateRequest>,
) -> Result<(StatusCode, Json<contests::Model>)> {
    check_contest(
        request.begin_time,
        request.end_time,
        request.open,
        request.password.as_deref(),
    )?;

    let txn = state.db().begin().await?;

    let contest = contests::ActiveModel {
        name: Set(request.name),
        description: Set(request.description),
        begin_time: Set(request.begin_time),
        end_time: Set(request.end_time),
        contest_type: Set(request.contest_type),
        open: Set(request.open),
        password: Set(request.password),
        need_approve: Set(request.need_approve),
        ..Default::default()
    }
    .insert(&txn)
    .await
    .map_err(map_db_err)?;

    for problem_id in request.problems {
        link_problem(&txn, contest.id, problem_id).await?;
    }
    for language_id in request.languages {
        link_language(&txn, contest.id, language_id).await?;
    }

    txn.commit().await?;

    info!("created contest {contest} ({})", contest.id);

    Ok((StatusCode::CREATED, Json(contest)))
}

async fn update_contest<S: StateTrait>(
    State(state): State<S>,
    Path(id): Path<i32>,
    ValidatedJson(request): ValidatedJson<UpdateRequest>,
) -> Result<Json<contests::Model>> {
    let contest = find_or::<contests::Entity, _>(state.db(), id, error::CONTEST_NOT_FOUND).await?;

    let password = match &request.password {
        Some(password) => password.as_deref(),
        None => contest.password.as_deref(),
    };
    check_contest(
        request.begin_time.unwrap_or(contest.begin_time),
        request.end_time.unwrap_or(contest.end_time),
        request.open.unwrap_or(contest.open),
        password,
    )?;

    let type_changed = request
        .contest_type
        .is_some_and(|contest_type| contest_type != contest.contest_type);
    if type_changed && has_registrations(state.db(), &contest).await? {
        return Err(error::CONTEST_TYPE_MISMATCH);
    }

    let mut active_model = contest.clone().into_active_model();
    active_model.name = set_option(request.name);
    active_model.description = set_option(request.description);
    active_model.begin_time = set_option(request.begin_time);
    active_model.end_time = set_option(request.end_time);
    active_model.contest_type = set_option(request.contest_type);
    active_model.open = set_option(request.open);
    active_model.password = set_option(request.password);
    active_model.need_approve = set_option(request.need_approve);

    let contest = update_changed(state.db(), contest, active_model)
        .await
        .map_err(map_db_err)?;

    info!("updated contest {contest}");

    Ok(Json(contest))
}

/// Registrations of the contest's current kind pin its type.
async fn has_registrations<C: ConnectionTrait>(db: &C, contest: &contests::Model) -> Result<bool> {
    match contest.contest_type {
        ContestType::Personal => {
            registrations::any_in_contest::<entity::contest_users::Entity, _>(db, contest.id).await
        }
        ContestType::Team => {
            registrations::any_in_contest::<entity::contest_teams::Entity, _>(db, contest.id).await
        }
    }
}

async fn delete_contest<S: StateTrait>(
    State(state): State<S>,
    Path(id): Path<i32>,
) -> Result<StatusCode> {
    delete_or::<contests::Entity, _>(state.db(), id, error::CONTEST_NOT_FOUND).await?;

    info!("deleted contest {id}");

    Ok(StatusCode::NO_CONTENT)
}

/// Adds the problem to the contest. Adding it twice is a no-op.
async fn link_problem<C: ConnectionTrait>(db: &C, contest_id: i32, problem_id: i32) -> Result {
    find_or::<problems::Entity, _>(db, problem_id, error::PROBLEM_NOT_FOUND).await?;

    let linked = contest_problems::Entity::find_by_id((contest_id, problem_id))
        .one(db)
        .await?;

    if linked.is_none() {
        contest_problems::ActiveModel {
            contest_id: Set(contest_id),
            problem_id: Set(problem_id),
        }
        .insert(db)
        .await?;
    }

    Ok(())
}

/// Allows the language in the contest. Allowing it twice is a no-op.
async fn link_language<C: ConnectionTrait>(db: &C, contest_id: i32, language_id: i32) -> Result {
    find_or::<languages::Entity, _>(db, language_id, error::LANGUAGE_NOT_FOUND).await?;

    let linked = contest_languages::Entity::find_by_id((contest_id, language_id))
        .one(db)
        .await?;

    if linked.is_none() {
        contest_languages::ActiveModel {
            contest_id: Set(contest_id),
            language_id: Set(language_id),
        }
        .insert(db)
        .await?;
    }

    Ok(())
}

async fn list_contest_problems<S: StateTrait>(
    State(state): State<S>,
    Path(id): Path<i32>,
) -> Result<Json<Vec<problems::Model>>> {
    let contest = find_or::<contests::Entity, _>(state.db(), id, error::CONTEST_NOT_FOUND).await?;

    let problems = contest
        .find_related(problems::Entity)
        .order_by_asc(problems::Column::Id)
        .all(state.db())
        .await?;

    Ok(Json(problems))
}

async fn add_contest_problem<S: StateTrait>(
    State(state): State<S>,
    Path((id, problem_id)): Path<(i32, i32)>,
) -> Result<StatusCode> {
    find_or::<contests::Entity, _>(state.db(), id, error::CONTEST_NOT_FOUND).await?;
    link_problem(state.db(), id, problem_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

async fn remove_contest_problem<S: StateTrait>(
    State(state): State<S>,
    Path((id, problem_id)): Path<(i32, i32)>,
) -> Result<StatusCode> {
    let res = contest_problems::Entity::delete_by_id((id, problem_id))
        .exec(state.db())
        .await?;

    if res.rows_affected == 0 {
        return Err(error::PROBLEM_NOT_IN_CONTEST);
    }

    Ok(StatusCode::NO_CONTENT)
}

async fn list_contest_languages<S: StateTrait>(
    State(state): State<S>,
    Path(id): Path<i32>,
) -> Result<Json<Vec<languages::Model>>> {
    let contest = find_or::<contests::Entity, _>(state.db(), id, error::CONTEST_NOT_FOUND).await?;

    let languages = contest
        .find_related(languages::Entity)
        .order_by_asc(languages::Column::Id)
        .all(state.db())
        .await?;

    Ok(Json(languages))
}

async fn add_contest_language<S: StateTrait>(
    State(state): State<S>,
    Path((id, language_id)): Path<(i32, i32)>,
) -> Result<StatusCode> {
    find_or::<contests::Entity, _>(state.db(), id, error::CONTEST_NOT_FOUND).await?;
    link_language(state.db(), id, language_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

async fn remove_contest_language<S: StateTrait>(
    State(state): State<S>,
    Path((id, language_id)): Path<(i32, i32)>,
) -> Result<StatusCode> {
    let res = contest_languages::Entity::delete_by_id((id, language_id))
        .exec(state.db())
        .await?;

    if res.rows_affected == 0 {
        return Err(error::LANGUAGE_NOT_IN_CONTEST);
    }

    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn contest_window_must_not_be_empty() {
        let now = Utc::now();

        assert!(check_contest(now, now + Duration::hours(2), OpenMode::Public, None).is_ok());

        let err = check_contest(now, now, OpenMode::Public, None).unwrap_err();
        assert_eq!(err.code(), error::INVALID_CONTEST_TIME.code());

        let err = check_contest(now, now - Duration::hours(1), OpenMode::Public, None).unwrap_err();
        assert_eq!(err.code(), error::INVALID_CONTEST_TIME.code());
    }

    #[test]
    fn password_contest_needs_password() {
        let begin = Utc::now();
        let end = begin + Duration::hours(1);

        let err = check_contest(begin, end, OpenMode::Password, None).unwrap_err();
        assert_eq!(err.code(), error::CONTEST_PASSWORD_REQUIRED.code());

        let err = check_contest(begin, end, OpenMode::Password, Some("")).unwrap_err();
        assert_eq!(err.code(), error::CONTEST_PASSWORD_REQUIRED.code());

        assert!(check_contest(begin, end, OpenMode::Password, Some("hunter2")).is_ok());
        assert!(check_contest(begin, end, OpenMode::Private, None).is_ok());
    }
}
