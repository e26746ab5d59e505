mod admin;
mod comment_attachments;
mod comments;
mod contest_teams;
mod contest_users;
mod contests;
mod judges;
mod languages;
mod problem_attributes;
mod problem_sets;
mod problems;
mod registrations;
mod settings;
mod submissions;
mod teams;
mod user_profiles;
mod users;

use crate::{error::Result, middlewares::RequireStaffLayer, StateTrait};
use axum::{extract::State, http::StatusCode, routing::get, Router};
use sea_orm::ConnectionTrait;

pub fn routes<S: StateTrait>() -> Router<S> {
    Router::new()
        .nest("/v1", admin_routes::<S>())
        .route("/livez", get(livez::<S>))
        .route("/readyz", get(|| async {}))
}

/// Every route of the admin interface requires a staff token.
fn admin_routes<S: StateTrait>() -> Router<S> {
    Router::new()
        .route("/admin", get(admin::registry))
        .nest("/users", users::routes::<S>())
        .nest("/problem_sets", problem_sets::routes::<S>())
        .nest("/problems", problems::routes::<S>())
        .nest("/problem_attributes", problem_attributes::routes::<S>())
        .nest("/comments", comments::routes::<S>())
        .nest("/comment_attachments", comment_attachments::routes::<S>())
        .nest("/teams", teams::routes::<S>())
        .nest("/languages", languages::routes::<S>())
        .nest("/contests", contests::routes::<S>())
        .nest("/contest_users", contest_users::routes::<S>())
        .nest("/contest_teams", contest_teams::routes::<S>())
        .nest("/judges", judges::routes::<S>())
        .nest("/submissions", submissions::routes::<S>())
        .nest("/settings", settings::routes::<S>())
        .nest("/user_profiles", user_profiles::routes::<S>())
        .route_layer(RequireStaffLayer)
}

async fn livez<S: StateTrait>(State(state): State<S>) -> Result<StatusCode> {
    state.db().execute_unprepared("SELECT 1").await?;

    Ok(StatusCode::OK)
}
