use async_trait::async_trait;

use crate::multimedia::application::{
    domain::entities::ParentRef, ports::outgoing::db::PositionStoreError,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum UnlinkMediaError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<PositionStoreError> for UnlinkMediaError {
    fn from(err: PositionStoreError) -> Self {
        match err {
            PositionStoreError::DatabaseError(msg) => UnlinkMediaError::RepositoryError(msg),
        }
    }
}

#[async_trait]
pub trait UnlinkMediaUseCase: Send + Sync {
    /// Removes the attachment. Unlinking media that is not attached succeeds.
    async fn execute(&self, parent: ParentRef, media_id: i32) -> Result<(), UnlinkMediaError>;
}
