use async_trait::async_trait;
use sea_orm::{
    ConnectionTrait, DatabaseBackend, DatabaseConnection, DatabaseTransaction, DbErr, Statement,
    TransactionTrait,
};
use std::sync::Arc;

use crate::multimedia::application::{
    domain::{entities::ParentRef, policies::ordering_policy::PositionShift},
    ports::outgoing::db::{PositionStore, PositionStoreError, PositionTxn},
};

// ============================================================================
// Store (connection level)
// ============================================================================

#[derive(Clone)]
pub struct PositionStorePostgres {
    db: Arc<DatabaseConnection>,
}

impl PositionStorePostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(e: DbErr) -> PositionStoreError {
    PositionStoreError::DatabaseError(e.to_string())
}

// =====================================================
// SQL builders
// =====================================================
//
// Table and column names come from `ParentKind` and are never user input.

fn lock_parent_stmt(parent: ParentRef) -> Statement {
    Statement::from_sql_and_values(
        DatabaseBackend::Postgres,
        "SELECT pg_advisory_xact_lock($1, $2)",
        vec![parent.kind.lock_namespace().into(), parent.id.into()],
    )
}

fn next_position_stmt(parent: ParentRef) -> Statement {
    Statement::from_sql_and_values(
        DatabaseBackend::Postgres,
        format!(
            r#"
            SELECT COALESCE(MAX(position), -1) + 1 AS next_position
            FROM {table}
            WHERE {column} = $1
            "#,
            table = parent.kind.join_table(),
            column = parent.kind.parent_column(),
        ),
        vec![parent.id.into()],
    )
}

fn current_position_stmt(parent: ParentRef, media_id: i32) -> Statement {
    Statement::from_sql_and_values(
        DatabaseBackend::Postgres,
        format!(
            r#"
            SELECT position
            FROM {table}
            WHERE {column} = $1
              AND media_id = $2
            "#,
            table = parent.kind.join_table(),
            column = parent.kind.parent_column(),
        ),
        vec![parent.id.into(), media_id.into()],
    )
}

fn max_position_stmt(parent: ParentRef) -> Statement {
    Statement::from_sql_and_values(
        DatabaseBackend::Postgres,
        format!(
            r#"
            SELECT MAX(position) AS max_position
            FROM {table}
            WHERE {column} = $1
            "#,
            table = parent.kind.join_table(),
            column = parent.kind.parent_column(),
        ),
        vec![parent.id.into()],
    )
}

fn attached_media_ids_stmt(parent: ParentRef) -> Statement {
    Statement::from_sql_and_values(
        DatabaseBackend::Postgres,
        format!(
            r#"
            SELECT media_id
            FROM {table}
            WHERE {column} = $1
            ORDER BY position ASC, media_id ASC
            "#,
            table = parent.kind.join_table(),
            column = parent.kind.parent_column(),
        ),
        vec![parent.id.into()],
    )
}

/// Insert or move: an existing pair keeps its row and takes the new position.
fn upsert_position_stmt(parent: ParentRef, media_id: i32, position: i32) -> Statement {
    Statement::from_sql_and_values(
        DatabaseBackend::Postgres,
        format!(
            r#"
            INSERT INTO {table} ({column}, media_id, position)
            VALUES ($1, $2, $3)
            ON CONFLICT ({column}, media_id) DO UPDATE
              SET position = EXCLUDED.position
            "#,
            table = parent.kind.join_table(),
            column = parent.kind.parent_column(),
        ),
        vec![parent.id.into(), media_id.into(), position.into()],
    )
}

fn set_position_stmt(parent: ParentRef, media_id: i32, position: i32) -> Statement {
    Statement::from_sql_and_values(
        DatabaseBackend::Postgres,
        format!(
            r#"
            UPDATE {table}
            SET position = $3
            WHERE {column} = $1
              AND media_id = $2
            "#,
            table = parent.kind.join_table(),
            column = parent.kind.parent_column(),
        ),
        vec![parent.id.into(), media_id.into(), position.into()],
    )
}

fn shift_positions_stmt(parent: ParentRef, shift: PositionShift) -> Statement {
    Statement::from_sql_and_values(
        DatabaseBackend::Postgres,
        format!(
            r#"
            UPDATE {table}
            SET position = position + $2
            WHERE {column} = $1
              AND position BETWEEN $3 AND $4
            "#,
            table = parent.kind.join_table(),
            column = parent.kind.parent_column(),
        ),
        vec![
            parent.id.into(),
            shift.delta.into(),
            shift.from.into(),
            shift.to.into(),
        ],
    )
}

fn delete_attachment_stmt(parent: ParentRef, media_id: i32) -> Statement {
    Statement::from_sql_and_values(
        DatabaseBackend::Postgres,
        format!(
            r#"
            DELETE FROM {table}
            WHERE {column} = $1
              AND media_id = $2
            "#,
            table = parent.kind.join_table(),
            column = parent.kind.parent_column(),
        ),
        vec![parent.id.into(), media_id.into()],
    )
}

fn clear_cover_if_stmt(parent: ParentRef, media_id: i32) -> Statement {
    Statement::from_sql_and_values(
        DatabaseBackend::Postgres,
        format!(
            r#"
            UPDATE {table}
            SET cover_image_id = NULL
            WHERE id = $1
              AND cover_image_id = $2
            "#,
            table = parent.kind.parent_table(),
        ),
        vec![parent.id.into(), media_id.into()],
    )
}

async fn query_next_position<C>(conn: &C, parent: ParentRef) -> Result<i32, PositionStoreError>
where
    C: ConnectionTrait,
{
    let row = conn
        .query_one(next_position_stmt(parent))
        .await
        .map_err(map_db_err)?
        .ok_or_else(|| {
            PositionStoreError::DatabaseError("Next position query returned no rows".to_string())
        })?;

    row.try_get("", "next_position").map_err(map_db_err)
}

async fn execute<C>(conn: &C, stmt: Statement) -> Result<u64, PositionStoreError>
where
    C: ConnectionTrait,
{
    let res = conn.execute(stmt).await.map_err(map_db_err)?;
    Ok(res.rows_affected())
}

#[async_trait]
impl PositionStore for PositionStorePostgres {
    type Txn = PositionTxnPostgres;

    async fn begin(&self) -> Result<Self::Txn, PositionStoreError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;
        Ok(PositionTxnPostgres { txn })
    }

    async fn next_position(&self, parent: ParentRef) -> Result<i32, PositionStoreError> {
        query_next_position(self.db.as_ref(), parent).await
    }
}

// ============================================================================
// Transaction
// ============================================================================

/// Dropping it without `commit` rolls the transaction back.
pub struct PositionTxnPostgres {
    txn: DatabaseTransaction,
}

#[async_trait]
impl PositionTxn for PositionTxnPostgres {
    async fn lock_parent(&mut self, parent: ParentRef) -> Result<(), PositionStoreError> {
        execute(&self.txn, lock_parent_stmt(parent)).await?;
        Ok(())
    }

    async fn next_position(&mut self, parent: ParentRef) -> Result<i32, PositionStoreError> {
        query_next_position(&self.txn, parent).await
    }

    async fn current_position(
        &mut self,
        parent: ParentRef,
        media_id: i32,
    ) -> Result<Option<i32>, PositionStoreError> {
        let row = self
            .txn
            .query_one(current_position_stmt(parent, media_id))
            .await
            .map_err(map_db_err)?;

        match row {
            Some(row) => Ok(Some(row.try_get("", "position").map_err(map_db_err)?)),
            None => Ok(None),
        }
    }

    async fn max_position(&mut self, parent: ParentRef) -> Result<Option<i32>, PositionStoreError> {
        let row = self
            .txn
            .query_one(max_position_stmt(parent))
            .await
            .map_err(map_db_err)?;

        match row {
            Some(row) => row.try_get("", "max_position").map_err(map_db_err),
            None => Ok(None),
        }
    }

    async fn attached_media_ids(
        &mut self,
        parent: ParentRef,
    ) -> Result<Vec<i32>, PositionStoreError> {
        let rows = self
            .txn
            .query_all(attached_media_ids_stmt(parent))
            .await
            .map_err(map_db_err)?;

        rows.into_iter()
            .map(|row| row.try_get("", "media_id").map_err(map_db_err))
            .collect()
    }

    async fn upsert_position(
        &mut self,
        parent: ParentRef,
        media_id: i32,
        position: i32,
    ) -> Result<(), PositionStoreError> {
        execute(&self.txn, upsert_position_stmt(parent, media_id, position)).await?;
        Ok(())
    }

    async fn set_position(
        &mut self,
        parent: ParentRef,
        media_id: i32,
        position: i32,
    ) -> Result<u64, PositionStoreError> {
        execute(&self.txn, set_position_stmt(parent, media_id, position)).await
    }

    async fn shift_positions(
        &mut self,
        parent: ParentRef,
        shift: PositionShift,
    ) -> Result<u64, PositionStoreError> {
        execute(&self.txn, shift_positions_stmt(parent, shift)).await
    }

    async fn delete_attachment(
        &mut self,
        parent: ParentRef,
        media_id: i32,
    ) -> Result<u64, PositionStoreError> {
        execute(&self.txn, delete_attachment_stmt(parent, media_id)).await
    }

    async fn clear_cover_if(
        &mut self,
        parent: ParentRef,
        media_id: i32,
    ) -> Result<u64, PositionStoreError> {
        execute(&self.txn, clear_cover_if_stmt(parent, media_id)).await
    }

    async fn commit(self) -> Result<(), PositionStoreError> {
        self.txn.commit().await.map_err(map_db_err)
    }

    async fn rollback(self) -> Result<(), PositionStoreError> {
        self.txn.rollback().await.map_err(map_db_err)
    }
}

// ============================================================================
// Tests
// ============================================================================
