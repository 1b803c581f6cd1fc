use async_trait::async_trait;

use crate::multimedia::application::{
    domain::entities::ParentRef, ports::outgoing::db::PositionStoreError,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum NextPositionError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<PositionStoreError> for NextPositionError {
    fn from(err: PositionStoreError) -> Self {
        match err {
            PositionStoreError::DatabaseError(msg) => NextPositionError::RepositoryError(msg),
        }
    }
}

#[async_trait]
pub trait NextPositionUseCase: Send + Sync {
    async fn execute(&self, parent: ParentRef) -> Result<i32, NextPositionError>;
}
