use anyhow::Context;
use chrono::{Duration, Utc};
use dotenvy::dotenv;
use entity::users;
use oj_backend::{
    auth::{Claims, Jwt},
    config::Config,
};
use sea_orm::{ActiveModelTrait, Database, IntoActiveModel, Set};
use std::env::args;

const TOKEN_LIFETIME_DAYS: i64 = 30;

/// Creates (or promotes) a staff user and prints a bearer token for it.
#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let username = args().nth(1).context("no username given")?;
    let config = Config::from_env()?;
    let database = Database::connect(&config.database_url).await?;

    let user = match users::Entity::find_by_username(&username)
        .one(&database)
        .await?
    {
        Some(user) if user.is_staff => user,
        Some(user) => {
            let mut active_model = user.into_active_model();
            active_model.is_staff = Set(true);
            active_model.update(&database).await?
        }
        None => {
            users::ActiveModel {
                username: Set(username),
                is_staff: Set(true),
                ..Default::default()
            }
            .insert(&database)
            .await?
        }
    };

    let claims = Claims {
        subject: user.id,
        staff: true,
        expires_at: (Utc::now() + Duration::days(TOKEN_LIFETIME_DAYS)).timestamp(),
    };

    let token = Jwt::new(config.jwt_secret.as_bytes())
        .issue(&claims)
        .map_err(|err| anyhow::anyhow!("failed to issue token: {}", err.message()))?;

    println!("user: {} ({})", user.username, user.id);
    println!("token: {token}");

    Ok(())
}
