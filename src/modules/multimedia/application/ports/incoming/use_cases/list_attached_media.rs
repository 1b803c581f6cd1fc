use async_trait::async_trait;

use crate::multimedia::application::{
    domain::entities::{AttachedMedia, PageRequest, PageResult, ParentRef},
    ports::outgoing::db::MediaQueryError,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListMediaError {
    #[error("Invalid pagination: page must be >= 1 and per_page between 1 and {max}")]
    InvalidPagination { max: u32 },

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<MediaQueryError> for ListMediaError {
    fn from(err: MediaQueryError) -> Self {
        Self::RepositoryError(err.to_string())
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ListMediaCommand {
    pub parent: ParentRef,
    pub page: PageRequest,
}

#[async_trait]
pub trait ListAttachedMediaUseCase: Send + Sync {
    async fn execute(
        &self,
        command: ListMediaCommand,
    ) -> Result<PageResult<AttachedMedia>, ListMediaError>;
}
