//! # Media Table Migration
//!
//! ## Purpose
//! The `media` table is the library of uploaded assets. A media row knows
//! nothing about where it is used; galleries and projects reference it
//! through their own join tables (`gallery_media`, `project_media`), so one
//! file can appear in many places.
//!
//! ## Key Columns
//! - `full_url`: Public URL of the original file.
//! - `thumbnail_url`: Optional preview used by the admin grid.
//! - `embed_url`: Optional player URL for hosted videos.
//! - `mime_type`: Drives how the front end renders the item.
//!
//! Deleting a media row cascades to both join tables.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // updated_at trigger function (shared by parent tables)
        // =====================================================
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE OR REPLACE FUNCTION update_updated_at_column()
                RETURNS TRIGGER AS $$
                BEGIN
                    NEW.updated_at = CURRENT_TIMESTAMP;
                    RETURN NEW;
                END;
                $$ language 'plpgsql';
                "#,
            )
            .await?;

        // =====================================================
        // Create media table
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(Media::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Media::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Media::FileName).text().not_null())
                    .col(ColumnDef::new(Media::FullUrl).text().not_null())
                    .col(ColumnDef::new(Media::ThumbnailUrl).text())
                    .col(ColumnDef::new(Media::EmbedUrl).text())
                    .col(ColumnDef::new(Media::MimeType).string_len(127))
                    .col(
                        ColumnDef::new(Media::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // For MIME type filtering (e.g., "show only images")
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_media_mime_type
                ON media (mime_type);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP INDEX IF EXISTS idx_media_mime_type")
            .await?;

        manager
            .drop_table(Table::drop().table(Media::Table).to_owned())
            .await?;

        manager
            .get_connection()
            .execute_unprepared("DROP FUNCTION IF EXISTS update_updated_at_column")
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Media {
    Table,
    Id,
    FileName,
    FullUrl,
    ThumbnailUrl,
    EmbedUrl,
    MimeType,
    CreatedAt,
}
