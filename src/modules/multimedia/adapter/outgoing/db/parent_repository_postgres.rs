use async_trait::async_trait;
use sea_orm::{ConnectionTrait, DatabaseBackend, DatabaseConnection, DbErr, Statement};
use std::sync::Arc;

use crate::multimedia::application::{
    domain::entities::ParentRef,
    ports::outgoing::db::{ParentRepository, ParentRepositoryError},
};

#[derive(Clone)]
pub struct ParentRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ParentRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    // =====================================================
    // SQL builders
    // =====================================================

    /// Guarded update: only points the cover at media attached to the parent.
    fn guarded_set_cover_stmt(parent: ParentRef, media_id: i32) -> Statement {
        Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            format!(
                r#"
                UPDATE {parent_table} p
                SET cover_image_id = $2
                WHERE p.id = $1
                  AND EXISTS (
                    SELECT 1
                    FROM {join_table} j
                    WHERE j.{column} = $1
                      AND j.media_id = $2
                  )
                "#,
                parent_table = parent.kind.parent_table(),
                join_table = parent.kind.join_table(),
                column = parent.kind.parent_column(),
            ),
            vec![parent.id.into(), media_id.into()],
        )
    }

    fn clear_cover_stmt(parent: ParentRef) -> Statement {
        Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            format!(
                r#"
                UPDATE {parent_table}
                SET cover_image_id = NULL
                WHERE id = $1
                "#,
                parent_table = parent.kind.parent_table(),
            ),
            vec![parent.id.into()],
        )
    }

    /// Deterministic probe:
    /// - parent_ok: parent row exists
    /// - attached: media is attached to the parent
    fn probe_stmt(parent: ParentRef, media_id: i32) -> Statement {
        Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            format!(
                r#"
                SELECT
                  EXISTS (
                    SELECT 1 FROM {parent_table} p WHERE p.id = $1
                  ) AS parent_ok,
                  EXISTS (
                    SELECT 1
                    FROM {join_table} j
                    WHERE j.{column} = $1
                      AND j.media_id = $2
                  ) AS attached
                "#,
                parent_table = parent.kind.parent_table(),
                join_table = parent.kind.join_table(),
                column = parent.kind.parent_column(),
            ),
            vec![parent.id.into(), media_id.into()],
        )
    }

    fn map_db_err(e: DbErr) -> ParentRepositoryError {
        ParentRepositoryError::DatabaseError(e.to_string())
    }

    /// Resolve why the guarded update affected 0 rows.
    /// A missing parent wins over a missing attachment.
    async fn resolve_set_cover_failure(
        &self,
        parent: ParentRef,
        media_id: i32,
    ) -> ParentRepositoryError {
        let row = match self.db.query_one(Self::probe_stmt(parent, media_id)).await {
            Ok(Some(row)) => row,
            Ok(None) => {
                return ParentRepositoryError::DatabaseError(
                    "Probe query returned no rows".to_string(),
                )
            }
            Err(e) => return Self::map_db_err(e),
        };

        let parent_ok: bool = row.try_get("", "parent_ok").unwrap_or(false);
        let attached: bool = row.try_get("", "attached").unwrap_or(false);

        if !parent_ok {
            ParentRepositoryError::ParentNotFound
        } else if !attached {
            ParentRepositoryError::MediaNotAttached
        } else {
            // Row vanished between the update and the probe.
            ParentRepositoryError::DatabaseError("Cover image was not updated".to_string())
        }
    }
}

#[async_trait]
impl ParentRepository for ParentRepositoryPostgres {
    async fn set_cover_image(
        &self,
        parent: ParentRef,
        media_id: i32,
    ) -> Result<(), ParentRepositoryError> {
        let res = self
            .db
            .execute(Self::guarded_set_cover_stmt(parent, media_id))
            .await
            .map_err(Self::map_db_err)?;

        if res.rows_affected() > 0 {
            return Ok(());
        }
        Err(self.resolve_set_cover_failure(parent, media_id).await)
    }

    async fn clear_cover_image(&self, parent: ParentRef) -> Result<(), ParentRepositoryError> {
        let res = self
            .db
            .execute(Self::clear_cover_stmt(parent))
            .await
            .map_err(Self::map_db_err)?;

        if res.rows_affected() == 0 {
            return Err(ParentRepositoryError::ParentNotFound);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{MockDatabase, MockExecResult, Value};
    use std::collections::BTreeMap;

    fn ok_exec(rows: u64) -> MockExecResult {
        MockExecResult {
            last_insert_id: 0,
            rows_affected: rows,
        }
    }

    fn probe_row(parent_ok: bool, attached: bool) -> BTreeMap<String, Value> {
        BTreeMap::from([
            ("parent_ok".to_string(), Value::Bool(Some(parent_ok))),
            ("attached".to_string(), Value::Bool(Some(attached))),
        ])
    }

    #[tokio::test]
    async fn set_cover_success() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([ok_exec(1)])
            .into_connection();

        let repo = ParentRepositoryPostgres::new(Arc::new(db));

        assert!(repo.set_cover_image(ParentRef::gallery(1), 5).await.is_ok());
    }

    #[tokio::test]
    async fn set_cover_parent_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([ok_exec(0)])
            .append_query_results(vec![vec![probe_row(false, false)]])
            .into_connection();

        let repo = ParentRepositoryPostgres::new(Arc::new(db));

        let res = repo.set_cover_image(ParentRef::gallery(404), 5).await;
        assert!(matches!(
            res.unwrap_err(),
            ParentRepositoryError::ParentNotFound
        ));
    }

    #[tokio::test]
    async fn set_cover_media_not_attached() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([ok_exec(0)])
            .append_query_results(vec![vec![probe_row(true, false)]])
            .into_connection();

        let repo = ParentRepositoryPostgres::new(Arc::new(db));

        let res = repo.set_cover_image(ParentRef::project(1), 5).await;
        assert!(matches!(
            res.unwrap_err(),
            ParentRepositoryError::MediaNotAttached
        ));
    }

    #[tokio::test]
    async fn set_cover_database_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_errors([DbErr::Custom("connection error".to_string())])
            .into_connection();

        let repo = ParentRepositoryPostgres::new(Arc::new(db));

        let res = repo.set_cover_image(ParentRef::project(1), 5).await;
        assert!(matches!(
            res.unwrap_err(),
            ParentRepositoryError::DatabaseError(_)
        ));
    }

    #[tokio::test]
    async fn clear_cover_success_and_missing_parent() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([ok_exec(1), ok_exec(0)])
            .into_connection();

        let repo = ParentRepositoryPostgres::new(Arc::new(db));

        assert!(repo.clear_cover_image(ParentRef::gallery(1)).await.is_ok());
        assert!(matches!(
            repo.clear_cover_image(ParentRef::gallery(2)).await,
            Err(ParentRepositoryError::ParentNotFound)
        ));
    }

    #[test]
    fn guarded_statement_checks_attachment() {
        let stmt = ParentRepositoryPostgres::guarded_set_cover_stmt(ParentRef::project(2), 9);

        assert!(stmt.sql.contains("UPDATE projects p"));
        assert!(stmt.sql.contains("FROM project_media j"));
        assert!(stmt.sql.contains("j.project_id = $1"));
    }
}
