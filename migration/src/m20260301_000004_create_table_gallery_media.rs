//! # Gallery Media Join Table Migration
//!
//! Ordered membership of media in a gallery. `position` is a sort key:
//! appends take `max(position) + 1`, reorders shift neighbours inside one
//! transaction, and unlinking may leave a gap. Readers must order by
//! `(position, media_id)` and never treat `position` as an index.
//!
//! `project_media` has the identical shape; both are driven by the same
//! position rules.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GalleryMedia::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(GalleryMedia::GalleryId).integer().not_null())
                    .col(ColumnDef::new(GalleryMedia::MediaId).integer().not_null())
                    .col(
                        ColumnDef::new(GalleryMedia::Position)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    // A media item appears at most once per gallery
                    .primary_key(
                        Index::create()
                            .col(GalleryMedia::GalleryId)
                            .col(GalleryMedia::MediaId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_gallery_media_gallery_id")
                            .from(GalleryMedia::Table, GalleryMedia::GalleryId)
                            .to(Galleries::Table, Galleries::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_gallery_media_media_id")
                            .from(GalleryMedia::Table, GalleryMedia::MediaId)
                            .to(Media::Table, Media::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // Indexes
        // =====================================================

        // Ordered listing: "media of gallery X by position"
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_gallery_media_position
                ON gallery_media (gallery_id, position);
                "#,
            )
            .await?;

        // Reverse lookup: "which galleries use this media?"
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_gallery_media_media_id
                ON gallery_media (media_id);
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
                DROP INDEX IF EXISTS idx_gallery_media_position;
                DROP INDEX IF EXISTS idx_gallery_media_media_id;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(GalleryMedia::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum GalleryMedia {
    Table,
    GalleryId,
    MediaId,
    Position,
}

#[derive(DeriveIden)]
enum Galleries {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Media {
    Table,
    Id,
}
