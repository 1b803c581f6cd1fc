use async_trait::async_trait;

use crate::multimedia::application::{
    domain::{
        entities::{AttachmentPosition, ParentRef},
        policies::ordering_policy::OrderingViolation,
    },
    ports::outgoing::db::PositionStoreError,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdatePositionsError {
    #[error("Invalid ordering: {0}")]
    InvalidOrdering(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<PositionStoreError> for UpdatePositionsError {
    fn from(err: PositionStoreError) -> Self {
        match err {
            PositionStoreError::DatabaseError(msg) => UpdatePositionsError::RepositoryError(msg),
        }
    }
}

impl From<OrderingViolation> for UpdatePositionsError {
    fn from(err: OrderingViolation) -> Self {
        UpdatePositionsError::InvalidOrdering(err.to_string())
    }
}

#[derive(Debug, Clone)]
pub struct UpdatePositionsCommand {
    pub parent: ParentRef,
    /// The complete attachment list of the parent in its new order.
    /// Repeated ids are ignored after their first occurrence.
    pub ordered_media_ids: Vec<i32>,
}

#[async_trait]
pub trait UpdatePositionsUseCase: Send + Sync {
    async fn execute(
        &self,
        command: UpdatePositionsCommand,
    ) -> Result<Vec<AttachmentPosition>, UpdatePositionsError>;
}
