use async_trait::async_trait;

use crate::multimedia::application::domain::entities::{
    AttachedMedia, MediaItem, PageRequest, PageResult, ParentRef,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum MediaQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait MediaQuery: Send + Sync {
    /// Media attached to `parent`, ordered by position.
    async fn list_attached(
        &self,
        parent: ParentRef,
        page: PageRequest,
    ) -> Result<PageResult<AttachedMedia>, MediaQueryError>;

    /// Media from the library that are not attached to `parent`, newest first.
    async fn list_unlinked(
        &self,
        parent: ParentRef,
        page: PageRequest,
    ) -> Result<PageResult<MediaItem>, MediaQueryError>;
}
