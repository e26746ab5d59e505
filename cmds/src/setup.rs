use anyhow::Context;
use dotenvy::dotenv;
use migration::{Migrator, MigratorTrait};
use sea_orm::Database;
use std::env;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let database_url = env::var("DATABASE_URL").context("DATABASE_URL is not set")?;
    let database = Database::connect(&database_url).await?;

    let pending = Migrator::get_pending_migrations(&database).await?;

    if pending.is_empty() {
        println!("Database is up to date. Exiting...");
        return Ok(());
    }

    println!("Applying {} migration(s)", pending.len());
    Migrator::up(&database, None).await?;

    Ok(())
}
