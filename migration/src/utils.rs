use sea_orm_migration::prelude::*;

/// Auto-increment integer primary key.
///
/// The key is declared on the column itself, SQLite only accepts
/// `AUTOINCREMENT` there.
pub(crate) fn id<T>(column: T) -> ColumnDef
where
    T: IntoIden,
{
    ColumnDef::new(column)
        .integer()
        .not_null()
        .auto_increment()
        .primary_key()
        .to_owned()
}

macro_rules! drop_tables {
    ($manager:expr, $($entity:expr),+ $(,)?) => {
        $(
            $manager
                .drop_table(Table::drop().if_exists().table($entity).to_owned())
                .await?;
        )+
    };
}

pub(crate) use drop_tables;
