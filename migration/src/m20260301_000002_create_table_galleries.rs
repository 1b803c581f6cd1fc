use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // Create galleries table
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(Galleries::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Galleries::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Galleries::Title).string_len(150).not_null())
                    .col(ColumnDef::new(Galleries::Slug).string_len(150).not_null())
                    .col(ColumnDef::new(Galleries::Description).text())
                    .col(
                        ColumnDef::new(Galleries::Published)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Galleries::Featured)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    // Must point at media attached to this gallery, enforced by
                    // the cover image use case.
                    .col(ColumnDef::new(Galleries::CoverImageId).integer())
                    .col(
                        ColumnDef::new(Galleries::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Galleries::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_galleries_cover_image_id")
                            .from(Galleries::Table, Galleries::CoverImageId)
                            .to(Media::Table, Media::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // Indexes
        // =====================================================

        // Case-insensitive slug uniqueness
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE UNIQUE INDEX IF NOT EXISTS idx_galleries_slug_unique
                ON galleries (lower(slug));
                "#,
            )
            .await?;

        // =====================================================
        // updated_at trigger
        // =====================================================
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER update_galleries_updated_at
                BEFORE UPDATE ON galleries
                FOR EACH ROW
                EXECUTE FUNCTION update_updated_at_column();
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
                DROP TRIGGER IF EXISTS update_galleries_updated_at ON galleries;
                DROP INDEX IF EXISTS idx_galleries_slug_unique;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Galleries::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Galleries {
    Table,
    Id,
    Title,
    Slug,
    Description,
    Published,
    Featured,
    CoverImageId,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Media {
    Table,
    Id,
}
