use super::comment_attachments;
use crate::{
    error::{self, DatabaseError, Error, Result},
    extractors::{Json, Path, Query, UserID, ValidatedJson},
    utils::{delete_or, find_or, set_option, update_changed, Pagination},
    StateTrait,
};
use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Router,
};
use entity::comments;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, Set,
};
use serde::Deserialize;
use validator::Validate;

/// GET    /comments?problem=
/// POST   /comments
/// GET    /comments/:id
/// PATCH  /comments/:id
/// DELETE /comments/:id
///
/// GET    /comments/:id/replies
/// POST   /comments/:id/agree
/// POST   /comments/:id/disagree
/// GET    /comments/:id/attachments
/// POST   /comments/:id/attachments?filename=
pub fn routes<S: StateTrait>() -> Router<S> {
    Router::new()
        .route("/", get(list_comments::<S>).post(create_comment::<S>))
        .route(
            "/:id",
            get(get_comment::<S>)
                .patch(update_comment::<S>)
                .delete(delete_comment::<S>),
        )
        .route("/:id/replies", get(list_replies::<S>))
        .route("/:id/agree", post(agree::<S>))
        .route("/:id/disagree", post(disagree::<S>))
        .route(
            "/:id/attachments",
            get(comment_attachments::list_for_comment::<S>)
                .post(comment_attachments::upload_attachment::<S>),
        )
}

#[derive(Deserialize)]
pub struct Filter {
    problem: Option<i32>,
}

#[derive(Deserialize, Validate)]
pub struct CreateRequest {
    /// Defaults to the requesting user.
    author: Option<i32>,
    #[validate(length(min = 1))]
    content: String,
    parent: Option<i32>,
    problem: i32,
}

#[derive(Deserialize, Validate)]
pub struct UpdateRequest {
    #[validate(length(min = 1))]
    content: Option<String>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    parent: Option<Option<i32>>,
}

fn map_db_err(err: DbErr) -> Error<'static> {
    if err.foreign_key_violation() {
        return error::INVALID_REFERENCE;
    }

    err.into()
}

/// Fails when `id` would become its own ancestor by replying to `parent`.
async fn check_not_ancestor<C: ConnectionTrait>(db: &C, id: i32, parent: i32) -> Result {
    let mut next = Some(parent);

    while let Some(current) = next {
        if current == id {
            return Err(error::COMMENT_CYCLE);
        }

        next = comments::Entity::find_by_id(current)
            .one(db)
            .await?
            .and_then(|comment| comment.parent);
    }

    Ok(())
}

/// A reply must stay on the problem of the comment it answers.
async fn check_parent<C: ConnectionTrait>(db: &C, parent: i32, problem: i32) -> Result {
    let parent = find_or::<comments::Entity, _>(db, parent, error::COMMENT_NOT_FOUND).await?;

    if parent.problem != problem {
        return Err(error::PARENT_COMMENT_MISMATCH);
    }

    Ok(())
}

async fn list_comments<S: StateTrait>(
    State(state): State<S>,
    Query(filter): Query<Filter>,
    Query(pagination): Query<Pagination>,
) -> Result<Json<Vec<comments::Model>>> {
    let mut select = comments::Entity::find();

    if let Some(problem) = filter.problem {
        select = select.filter(comments::Column::Problem.eq(problem));
    }

    let comments = pagination
        .apply(select, comments::Column::Id)
        .all(state.db())
        .await?;

    Ok(Json(comments))
}

async fn get_comment<S: StateTrait>(
    State(state): State<S>,
    Path(id): Path<i32>,
) -> Result<Json<comments::Model>> {
    let comment = find_or::<comments::Entity, _>(state.db(), id, error::COMMENT_NOT_FOUND).await?;

    Ok(Json(comment))
}

async fn create_comment<S: StateTrait>(
    State(state): State<S>,
    user_id: UserID,
    ValidatedJson(request): ValidatedJson<CreateRequest>,
) -> Result<(StatusCode, Json<comments::Model>)> {
    if let Some(parent) = request.parent {
        check_parent(state.db(), parent, request.problem).await?;
    }

    let comment = comments::ActiveModel {
        author: Set(request.author.unwrap_or(*user_id)),
        content: Set(request.content),
        parent: Set(request.parent),
        problem: Set(request.problem),
        ..Default::default()
    }
    .insert(state.db())
    .await
    .map_err(map_db_err)?;

    info!("created comment {} on problem {}", comment.id, comment.problem);

    Ok((StatusCode::CREATED, Json(comment)))
}

async fn update_comment<S: StateTrait>(
    State(state): State<S>,
    Path(id): Path<i32>,
    ValidatedJson(request): ValidatedJson<UpdateRequest>,
) -> Result<Json<comments::Model>> {
    let comment = find_or::<comments::Entity, _>(state.db(), id, error::COMMENT_NOT_FOUND).await?;

    if let Some(Some(parent)) = request.parent {
        check_parent(state.db(), parent, comment.problem).await?;
        check_not_ancestor(state.db(), id, parent).await?;
    }

    let mut active_model = comment.clone().into_active_model();
    active_model.content = set_option(request.content);
    active_model.parent = set_option(request.parent);

    let comment = update_changed(state.db(), comment, active_model)
        .await
        .map_err(map_db_err)?;

    Ok(Json(comment))
}

async fn delete_comment<S: StateTrait>(
    State(state): State<S>,
    Path(id): Path<i32>,
) -> Result<StatusCode> {
    let attachments = comment_attachments::find_for_comment(state.db(), id).await?;

    delete_or::<comments::Entity, _>(state.db(), id, error::COMMENT_NOT_FOUND).await?;

    for attachment in attachments {
        comment_attachments::remove_file(&state, &attachment).await;
    }

    info!("deleted comment {id}");

    Ok(StatusCode::NO_CONTENT)
}

async fn list_replies<S: StateTrait>(
    State(state): State<S>,
    Path(id): Path<i32>,
) -> Result<Json<Vec<comments::Model>>> {
    find_or::<comments::Entity, _>(state.db(), id, error::COMMENT_NOT_FOUND).await?;

    let replies = comments::Entity::find_children(id).all(state.db()).await?;

    Ok(Json(replies))
}

async fn vote<C: ConnectionTrait>(db: &C, id: i32, column: comments::Column) -> Result<comments::Model> {
    let res = comments::Entity::update_many()
        .col_expr(column, Expr::col(column).add(1))
        .filter(comments::Column::Id.eq(id))
        .exec(db)
        .await?;

    if res.rows_affected == 0 {
        return Err(error::COMMENT_NOT_FOUND);
    }

    find_or::<comments::Entity, _>(db, id, error::COMMENT_NOT_FOUND).await
}

async fn agree<S: StateTrait>(
    State(state): State<S>,
    Path(id): Path<i32>,
) -> Result<Json<comments::Model>> {
    let comment = vote(state.db(), id, comments::Column::Agreement).await?;

    Ok(Json(comment))
}

async fn disagree<S: StateTrait>(
    State(state): State<S>,
    Path(id): Path<i32>,
) -> Result<Json<comments::Model>> {
    let comment = vote(state.db(), id, comments::Column::Disagreement).await?;

    Ok(Json(comment))
}
