use async_trait::async_trait;

use crate::multimedia::application::domain::entities::ParentRef;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ParentRepositoryError {
    #[error("Parent not found")]
    ParentNotFound,

    #[error("Media is not attached to this parent")]
    MediaNotAttached,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Command-side access to the gallery/project rows themselves.
#[async_trait]
pub trait ParentRepository: Send + Sync {
    /// Points the parent's cover at an attached media item.
    async fn set_cover_image(
        &self,
        parent: ParentRef,
        media_id: i32,
    ) -> Result<(), ParentRepositoryError>;

    async fn clear_cover_image(&self, parent: ParentRef) -> Result<(), ParentRepositoryError>;
}
