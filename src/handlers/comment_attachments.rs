use crate::{
    error::{self, Error, Result},
    extractors::{Json, Path, Query, ValidatedJson},
    utils::{
        find_or, remove_upload, sanitize_filename, set_option, store_upload, update_changed,
        Pagination,
    },
    StateTrait,
};
use axum::{
    body::Bytes,
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    routing::get,
    Router,
};
use entity::{comment_attachments, comments};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, ModelTrait, QueryFilter, QueryOrder, QuerySelect, Set,
};
use serde::Deserialize;
use validator::Validate;

/// GET    /comment_attachments
/// GET    /comment_attachments/:id
/// PATCH  /comment_attachments/:id
/// DELETE /comment_attachments/:id
/// GET    /comment_attachments/:id/file
///
/// Uploads go through `POST /comments/:id/attachments`.
pub fn routes<S: StateTrait>() -> Router<S> {
    Router::new()
        .route("/", get(list_attachments::<S>))
        .route(
            "/:id",
            get(get_attachment::<S>)
                .patch(update_attachment::<S>)
                .delete(delete_attachment::<S>),
        )
        .route("/:id/file", get(download_attachment::<S>))
}

#[derive(Deserialize)]
pub struct UploadParams {
    filename: Option<String>,
}

#[derive(Deserialize, Validate)]
pub struct UpdateRequest {
    #[validate(length(min = 1, max = 255))]
    filename: Option<String>,
}

pub(super) async fn find_for_comment<C: ConnectionTrait>(
    db: &C,
    comment: i32,
) -> std::result::Result<Vec<comment_attachments::Model>, DbErr> {
    comment_attachments::Entity::find()
        .filter(comment_attachments::Column::Comment.eq(comment))
        .order_by_asc(comment_attachments::Column::Id)
        .all(db)
        .await
}

/// Stored files of the attachments on comments matching `condition`.
///
/// Collected before deleting rows whose removal cascades to attachments.
pub(super) async fn files_of_comments<C: ConnectionTrait>(
    db: &C,
    condition: Condition,
) -> std::result::Result<Vec<String>, DbErr> {
    comment_attachments::Entity::find()
        .select_only()
        .column(comment_attachments::Column::File)
        .inner_join(comments::Entity)
        .filter(condition)
        .into_tuple()
        .all(db)
        .await
}

pub(super) async fn remove_file<S: StateTrait>(state: &S, attachment: &comment_attachments::Model) {
    remove_upload(state.media_root(), &attachment.file).await;
}

pub(super) async fn list_for_comment<S: StateTrait>(
    State(state): State<S>,
    Path(id): Path<i32>,
) -> Result<Json<Vec<comment_attachments::Model>>> {
    let comment = find_or::<comments::Entity, _>(state.db(), id, error::COMMENT_NOT_FOUND).await?;

    let attachments = comment
        .find_related(comment_attachments::Entity)
        .order_by_asc(comment_attachments::Column::Id)
        .all(state.db())
        .await?;

    Ok(Json(attachments))
}

/// Stores the raw request body as a new attachment of the comment.
pub(super) async fn upload_attachment<S: StateTrait>(
    State(state): State<S>,
    Path(id): Path<i32>,
    Query(params): Query<UploadParams>,
    body: Bytes,
) -> Result<(StatusCode, Json<comment_attachments::Model>)> {
    let filename = params
        .filename
        .filter(|filename| !filename.is_empty() && filename.len() <= 255)
        .ok_or(error::MISSING_FILENAME)?;

    find_or::<comments::Entity, _>(state.db(), id, error::COMMENT_NOT_FOUND).await?;

    let size = i32::try_from(body.len()).map_err(Error::internal)?;
    let file = store_upload(
        state.media_root(),
        comment_attachments::UPLOAD_TO,
        &filename,
        &body,
    )
    .await?;

    let res = comment_attachments::ActiveModel {
        comment: Set(id),
        file: Set(file.clone()),
        filename: Set(filename),
        size: Set(size),
        ..Default::default()
    }
    .insert(state.db())
    .await;

    let attachment = match res {
        Ok(attachment) => attachment,
        Err(err) => {
            remove_upload(state.media_root(), &file).await;
            return Err(err.into());
        }
    };

    info!("stored attachment {attachment} for comment {id}");

    Ok((StatusCode::CREATED, Json(attachment)))
}

async fn list_attachments<S: StateTrait>(
    State(state): State<S>,
    Query(pagination): Query<Pagination>,
) -> Result<Json<Vec<comment_attachments::Model>>> {
    let attachments = pagination
        .apply(
            comment_attachments::Entity::find(),
            comment_attachments::Column::Id,
        )
        .all(state.db())
        .await?;

    Ok(Json(attachments))
}

async fn get_attachment<S: StateTrait>(
    State(state): State<S>,
    Path(id): Path<i32>,
) -> Result<Json<comment_attachments::Model>> {
    let attachment =
        find_or::<comment_attachments::Entity, _>(state.db(), id, error::ATTACHMENT_NOT_FOUND)
            .await?;

    Ok(Json(attachment))
}

async fn update_attachment<S: StateTrait>(
    State(state): State<S>,
    Path(id): Path<i32>,
    ValidatedJson(request): ValidatedJson<UpdateRequest>,
) -> Result<Json<comment_attachments::Model>> {
    let attachment =
        find_or::<comment_attachments::Entity, _>(state.db(), id, error::ATTACHMENT_NOT_FOUND)
            .await?;

    let mut active_model = attachment.clone().into_active_model();
    active_model.filename = set_option(request.filename);

    let attachment = update_changed(state.db(), attachment, active_model).await?;

    Ok(Json(attachment))
}

async fn delete_attachment<S: StateTrait>(
    State(state): State<S>,
    Path(id): Path<i32>,
) -> Result<StatusCode> {
    let attachment =
        find_or::<comment_attachments::Entity, _>(state.db(), id, error::ATTACHMENT_NOT_FOUND)
            .await?;

    attachment.clone().delete(state.db()).await?;
    remove_file(&state, &attachment).await;

    info!("deleted attachment {attachment}");

    Ok(StatusCode::NO_CONTENT)
}

async fn download_attachment<S: StateTrait>(
    State(state): State<S>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse> {
    let attachment =
        find_or::<comment_attachments::Entity, _>(state.db(), id, error::ATTACHMENT_NOT_FOUND)
            .await?;

    let contents = match tokio::fs::read(state.media_root().join(&attachment.file)).await {
        Ok(contents) => contents,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            warn!("attachment {} is missing from the media root", attachment.id);
            return Err(error::ATTACHMENT_NOT_FOUND);
        }
        Err(err) => return Err(err.into()),
    };

    let disposition = format!(
        "attachment; filename=\"{}\"",
        sanitize_filename(&attachment.filename)
    );

    Ok((
        [
            (header::CONTENT_TYPE, mime::APPLICATION_OCTET_STREAM.to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        contents,
    ))
}
