use async_trait::async_trait;

use crate::multimedia::application::{
    domain::entities::{AttachmentPosition, ParentRef},
    ports::outgoing::db::PositionStoreError,
};

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum AttachMediaError {
    #[error("No media selected")]
    EmptySelection,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<PositionStoreError> for AttachMediaError {
    fn from(err: PositionStoreError) -> Self {
        match err {
            PositionStoreError::DatabaseError(msg) => AttachMediaError::RepositoryError(msg),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct AttachMediaCommand {
    pub parent: ParentRef,
    /// Attached in this order after the parent's current last position.
    pub media_ids: Vec<i32>,
}

impl AttachMediaCommand {
    pub fn single(parent: ParentRef, media_id: i32) -> Self {
        Self {
            parent,
            media_ids: vec![media_id],
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait AttachMediaUseCase: Send + Sync {
    /// Attaches each media at the end of the parent's ordering.
    /// Media that is already attached is moved to the end instead.
    async fn execute(
        &self,
        command: AttachMediaCommand,
    ) -> Result<Vec<AttachmentPosition>, AttachMediaError>;
}
