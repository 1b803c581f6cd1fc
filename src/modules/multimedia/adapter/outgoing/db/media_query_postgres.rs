use async_trait::async_trait;
use sea_orm::{ConnectionTrait, DatabaseBackend, DatabaseConnection, DbErr, QueryResult, Statement};
use std::sync::Arc;

use crate::multimedia::application::{
    domain::entities::{AttachedMedia, MediaItem, PageRequest, PageResult, ParentRef},
    ports::outgoing::db::{MediaQuery, MediaQueryError},
};

// ============================================================================
// Query Implementation (Production)
// ============================================================================

#[derive(Clone)]
pub struct MediaQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl MediaQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    // =====================================================
    // SQL builders
    // =====================================================

    fn list_attached_stmt(parent: ParentRef, page: PageRequest) -> Statement {
        Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            format!(
                r#"
                SELECT
                    m.id,
                    m.file_name,
                    m.full_url,
                    m.thumbnail_url,
                    m.embed_url,
                    m.mime_type,
                    j.position
                FROM {table} j
                INNER JOIN media m ON m.id = j.media_id
                WHERE j.{column} = $1
                ORDER BY j.position ASC, m.id ASC
                LIMIT $2 OFFSET $3
                "#,
                table = parent.kind.join_table(),
                column = parent.kind.parent_column(),
            ),
            vec![parent.id.into(), page.limit().into(), page.offset().into()],
        )
    }

    fn count_attached_stmt(parent: ParentRef) -> Statement {
        Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            format!(
                r#"
                SELECT COUNT(*) AS total
                FROM {table}
                WHERE {column} = $1
                "#,
                table = parent.kind.join_table(),
                column = parent.kind.parent_column(),
            ),
            vec![parent.id.into()],
        )
    }

    fn list_unlinked_stmt(parent: ParentRef, page: PageRequest) -> Statement {
        Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            format!(
                r#"
                SELECT
                    m.id,
                    m.file_name,
                    m.full_url,
                    m.thumbnail_url,
                    m.embed_url,
                    m.mime_type
                FROM media m
                WHERE NOT EXISTS (
                    SELECT 1
                    FROM {table} j
                    WHERE j.media_id = m.id
                      AND j.{column} = $1
                )
                ORDER BY m.id DESC
                LIMIT $2 OFFSET $3
                "#,
                table = parent.kind.join_table(),
                column = parent.kind.parent_column(),
            ),
            vec![parent.id.into(), page.limit().into(), page.offset().into()],
        )
    }

    fn count_unlinked_stmt(parent: ParentRef) -> Statement {
        Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            format!(
                r#"
                SELECT COUNT(*) AS total
                FROM media m
                WHERE NOT EXISTS (
                    SELECT 1
                    FROM {table} j
                    WHERE j.media_id = m.id
                      AND j.{column} = $1
                )
                "#,
                table = parent.kind.join_table(),
                column = parent.kind.parent_column(),
            ),
            vec![parent.id.into()],
        )
    }

    fn map_db_err(e: DbErr) -> MediaQueryError {
        MediaQueryError::DatabaseError(e.to_string())
    }

    fn media_from_row(row: &QueryResult) -> Result<MediaItem, MediaQueryError> {
        Ok(MediaItem {
            id: row.try_get("", "id").map_err(Self::map_db_err)?,
            file_name: row.try_get("", "file_name").map_err(Self::map_db_err)?,
            full_url: row.try_get("", "full_url").map_err(Self::map_db_err)?,
            thumbnail_url: row.try_get("", "thumbnail_url").map_err(Self::map_db_err)?,
            embed_url: row.try_get("", "embed_url").map_err(Self::map_db_err)?,
            mime_type: row.try_get("", "mime_type").map_err(Self::map_db_err)?,
        })
    }

    async fn count(&self, stmt: Statement) -> Result<u64, MediaQueryError> {
        let row = self
            .db
            .query_one(stmt)
            .await
            .map_err(Self::map_db_err)?
            .ok_or_else(|| {
                MediaQueryError::DatabaseError("Count query returned no rows".to_string())
            })?;

        let total: i64 = row.try_get("", "total").map_err(Self::map_db_err)?;
        Ok(u64::try_from(total).unwrap_or_default())
    }
}

#[async_trait]
impl MediaQuery for MediaQueryPostgres {
    async fn list_attached(
        &self,
        parent: ParentRef,
        page: PageRequest,
    ) -> Result<PageResult<AttachedMedia>, MediaQueryError> {
        let rows = self
            .db
            .query_all(Self::list_attached_stmt(parent, page))
            .await
            .map_err(Self::map_db_err)?;

        let mut items = Vec::with_capacity(rows.len());
        for row in rows {
            items.push(AttachedMedia {
                media: Self::media_from_row(&row)?,
                position: row.try_get("", "position").map_err(Self::map_db_err)?,
            });
        }

        let total = self.count(Self::count_attached_stmt(parent)).await?;

        Ok(PageResult {
            items,
            page: page.page,
            per_page: page.per_page,
            total,
        })
    }

    async fn list_unlinked(
        &self,
        parent: ParentRef,
        page: PageRequest,
    ) -> Result<PageResult<MediaItem>, MediaQueryError> {
        let rows = self
            .db
            .query_all(Self::list_unlinked_stmt(parent, page))
            .await
            .map_err(Self::map_db_err)?;

        let items = rows
            .iter()
            .map(Self::media_from_row)
            .collect::<Result<Vec<_>, _>>()?;

        let total = self.count(Self::count_unlinked_stmt(parent)).await?;

        Ok(PageResult {
            items,
            page: page.page,
            per_page: page.per_page,
            total,
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
