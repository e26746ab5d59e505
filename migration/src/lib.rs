mod utils;

pub use sea_orm_migration::prelude::*;

mod m20240301_000001_create_users_table;
mod m20240301_000002_create_problem_sets_table;
mod m20240301_000003_create_problems_table;
mod m20240301_000004_create_comments_table;
mod m20240301_000005_create_teams_table;
mod m20240301_000006_create_languages_table;
mod m20240301_000007_create_contests_table;
mod m20240301_000008_create_contest_registrations_table;
mod m20240301_000009_create_judges_table;
mod m20240301_000010_create_submissions_table;
mod m20240301_000011_create_settings_table;
mod m20240301_000012_create_user_profiles_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240301_000001_create_users_table::Migration),
            Box::new(m20240301_000002_create_problem_sets_table::Migration),
            Box::new(m20240301_000003_create_problems_table::Migration),
            Box::new(m20240301_000004_create_comments_table::Migration),
            Box::new(m20240301_000005_create_teams_table::Migration),
            Box::new(m20240301_000006_create_languages_table::Migration),
            Box::new(m20240301_000007_create_contests_table::Migration),
            Box::new(m20240301_000008_create_contest_registrations_table::Migration),
            Box::new(m20240301_000009_create_judges_table::Migration),
            Box::new(m20240301_000010_create_submissions_table::Migration),
            Box::new(m20240301_000011_create_settings_table::Migration),
            Box::new(m20240301_000012_create_user_profiles_table::Migration),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm_migration::sea_orm::{ConnectOptions, Database};

    #[tokio::test]
    async fn migrations_apply_and_revert() {
        let mut opts = ConnectOptions::new("sqlite::memory:");
        opts.max_connections(1).sqlx_logging(false);
        let db = Database::connect(opts).await.unwrap();

        Migrator::up(&db, None).await.expect("failed to apply migrations");
        assert!(Migrator::get_pending_migrations(&db).await.unwrap().is_empty());

        let manager = SchemaManager::new(&db);
        for table in ["problems", "submissions", "contest_languages", "starred_problems"] {
            assert!(manager.has_table(table).await.unwrap(), "missing {table}");
        }

        Migrator::down(&db, None).await.expect("failed to revert migrations");
        assert!(!manager.has_table("problems").await.unwrap());
    }
}
