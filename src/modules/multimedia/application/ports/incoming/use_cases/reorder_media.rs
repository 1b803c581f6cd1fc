use async_trait::async_trait;

use crate::multimedia::application::{
    domain::{entities::ParentRef, policies::ordering_policy::OrderingViolation},
    ports::outgoing::db::PositionStoreError,
};

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum ReorderMediaError {
    #[error("Media is not attached to this parent")]
    AttachmentNotFound,

    #[error("Invalid ordering: {0}")]
    InvalidOrdering(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<PositionStoreError> for ReorderMediaError {
    fn from(err: PositionStoreError) -> Self {
        match err {
            PositionStoreError::DatabaseError(msg) => ReorderMediaError::RepositoryError(msg),
        }
    }
}

impl From<OrderingViolation> for ReorderMediaError {
    fn from(err: OrderingViolation) -> Self {
        ReorderMediaError::InvalidOrdering(err.to_string())
    }
}

//
// ──────────────────────────────────────────────────────────
// Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy)]
pub struct ReorderMediaCommand {
    pub parent: ParentRef,
    pub media_id: i32,
    pub new_position: i32,
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait ReorderMediaUseCase: Send + Sync {
    /// Moves one attachment and shifts its neighbours, all or nothing.
    async fn execute(&self, command: ReorderMediaCommand) -> Result<(), ReorderMediaError>;
}
