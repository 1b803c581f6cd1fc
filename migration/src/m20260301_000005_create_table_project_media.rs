use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ProjectMedia::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(ProjectMedia::ProjectId).integer().not_null())
                    .col(ColumnDef::new(ProjectMedia::MediaId).integer().not_null())
                    .col(
                        ColumnDef::new(ProjectMedia::Position)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .primary_key(
                        Index::create()
                            .col(ProjectMedia::ProjectId)
                            .col(ProjectMedia::MediaId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_project_media_project_id")
                            .from(ProjectMedia::Table, ProjectMedia::ProjectId)
                            .to(Projects::Table, Projects::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_project_media_media_id")
                            .from(ProjectMedia::Table, ProjectMedia::MediaId)
                            .to(Media::Table, Media::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_project_media_position
                ON project_media (project_id, position);
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_project_media_media_id
                ON project_media (media_id);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP INDEX IF EXISTS idx_project_media_position;
                DROP INDEX IF EXISTS idx_project_media_media_id;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(ProjectMedia::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ProjectMedia {
    Table,
    ProjectId,
    MediaId,
    Position,
}

#[derive(DeriveIden)]
enum Projects {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Media {
    Table,
    Id,
}
