use crate::utils::{drop_tables, id};
use entity::{
    comment_attachments,
    comments::{self, constraints::*},
    problems, users,
};
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(comments::Entity)
                    .if_not_exists()
                    .col(&mut id(comments::Column::Id))
                    .col(ColumnDef::new(comments::Column::Author).integer().not_null())
                    .col(
                        ColumnDef::new(comments::Column::Time)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(comments::Column::Content).text().not_null())
                    .col(ColumnDef::new(comments::Column::Parent).integer().null())
                    .col(ColumnDef::new(comments::Column::Problem).integer().not_null())
                    .col(
                        ColumnDef::new(comments::Column::Agreement)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(comments::Column::Disagreement)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_COMMENTS_AUTHOR)
                            .from(comments::Entity, comments::Column::Author)
                            .to(users::Entity, users::Column::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_COMMENTS_PARENT)
                            .from(comments::Entity, comments::Column::Parent)
                            .to(comments::Entity, comments::Column::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_COMMENTS_PROBLEM)
                            .from(comments::Entity, comments::Column::Problem)
                            .to(problems::Entity, problems::Column::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(comment_attachments::Entity)
                    .if_not_exists()
                    .col(&mut id(comment_attachments::Column::Id))
                    .col(
                        ColumnDef::new(comment_attachments::Column::Comment)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(comment_attachments::Column::File)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(comment_attachments::Column::Filename)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(comment_attachments::Column::Size)
                            .integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(comment_attachments::constraints::FK_COMMENT_ATTACHMENTS_COMMENT)
                            .from(
                                comment_attachments::Entity,
                                comment_attachments::Column::Comment,
                            )
                            .to(comments::Entity, comments::Column::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        drop_tables!(manager, comment_attachments::Entity, comments::Entity);
        Ok(())
    }
}
