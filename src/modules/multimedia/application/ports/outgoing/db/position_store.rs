use async_trait::async_trait;

use crate::multimedia::application::domain::{
    entities::ParentRef, policies::ordering_policy::PositionShift,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum PositionStoreError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Connection-level access to the attachment positions of a parent kind.
#[async_trait]
pub trait PositionStore: Send + Sync {
    type Txn: PositionTxn;

    async fn begin(&self) -> Result<Self::Txn, PositionStoreError>;

    /// `max(position) + 1` over the parent's attachments, or 0 when it has
    /// none. Computed on every call, there is no cached counter.
    async fn next_position(&self, parent: ParentRef) -> Result<i32, PositionStoreError>;
}

/// One open transaction over the join table of a parent.
///
/// Nothing written through a transaction is visible to other readers before
/// `commit`. Dropping it without committing rolls back.
#[async_trait]
pub trait PositionTxn: Send {
    /// Serializes writers of the same parent until the transaction ends.
    async fn lock_parent(&mut self, parent: ParentRef) -> Result<(), PositionStoreError>;

    async fn next_position(&mut self, parent: ParentRef) -> Result<i32, PositionStoreError>;

    /// `None` means the media is not attached to this parent.
    async fn current_position(
        &mut self,
        parent: ParentRef,
        media_id: i32,
    ) -> Result<Option<i32>, PositionStoreError>;

    async fn max_position(&mut self, parent: ParentRef) -> Result<Option<i32>, PositionStoreError>;

    /// Attached media ids ordered by position.
    async fn attached_media_ids(
        &mut self,
        parent: ParentRef,
    ) -> Result<Vec<i32>, PositionStoreError>;

    /// Inserts the attachment or overwrites the position of an existing one.
    async fn upsert_position(
        &mut self,
        parent: ParentRef,
        media_id: i32,
        position: i32,
    ) -> Result<(), PositionStoreError>;

    /// Returns the number of rows written.
    async fn set_position(
        &mut self,
        parent: ParentRef,
        media_id: i32,
        position: i32,
    ) -> Result<u64, PositionStoreError>;

    async fn shift_positions(
        &mut self,
        parent: ParentRef,
        shift: PositionShift,
    ) -> Result<u64, PositionStoreError>;

    async fn delete_attachment(
        &mut self,
        parent: ParentRef,
        media_id: i32,
    ) -> Result<u64, PositionStoreError>;

    /// Clears the parent's cover image when it points at `media_id`.
    async fn clear_cover_if(
        &mut self,
        parent: ParentRef,
        media_id: i32,
    ) -> Result<u64, PositionStoreError>;

    async fn commit(self) -> Result<(), PositionStoreError>;

    async fn rollback(self) -> Result<(), PositionStoreError>;
}
