use sea_orm::{DbErr, SqlErr};

/// Classifies constraint violations independently of the database backend.
pub trait DatabaseError {
    fn unique_violation(&self) -> bool;

    /// A unique violation naming `column`.
    ///
    /// Postgres reports the constraint (`UC_<table>_<column>`), SQLite reports
    /// `<table>.<column>`. Both contain the column name.
    fn unique_violation_on(&self, column: &str) -> bool;

    fn foreign_key_violation(&self) -> bool;
}

impl DatabaseError for DbErr {
    fn unique_violation(&self) -> bool {
        matches!(self.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
    }

    fn unique_violation_on(&self, column: &str) -> bool {
        matches!(
            self.sql_err(),
            Some(SqlErr::UniqueConstraintViolation(message)) if message.contains(column)
        )
    }

    fn foreign_key_violation(&self) -> bool {
        matches!(self.sql_err(), Some(SqlErr::ForeignKeyConstraintViolation(_)))
    }
}
