use async_trait::async_trait;

use crate::multimedia::application::{
    domain::entities::ParentRef, ports::outgoing::db::ParentRepositoryError,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum SetCoverImageError {
    #[error("Parent not found")]
    ParentNotFound,

    #[error("Media is not attached to this parent")]
    MediaNotAttached,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<ParentRepositoryError> for SetCoverImageError {
    fn from(err: ParentRepositoryError) -> Self {
        match err {
            ParentRepositoryError::ParentNotFound => SetCoverImageError::ParentNotFound,
            ParentRepositoryError::MediaNotAttached => SetCoverImageError::MediaNotAttached,
            ParentRepositoryError::DatabaseError(msg) => SetCoverImageError::RepositoryError(msg),
        }
    }
}

#[async_trait]
pub trait SetCoverImageUseCase: Send + Sync {
    /// `None` clears the cover.
    async fn execute(
        &self,
        parent: ParentRef,
        media_id: Option<i32>,
    ) -> Result<(), SetCoverImageError>;
}
