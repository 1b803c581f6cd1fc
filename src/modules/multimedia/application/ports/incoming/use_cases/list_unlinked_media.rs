use async_trait::async_trait;

use crate::multimedia::application::{
    domain::entities::{MediaItem, PageResult},
    ports::incoming::use_cases::{ListMediaCommand, ListMediaError},
};

/// Library picker: media that could still be attached to the parent.
#[async_trait]
pub trait ListUnlinkedMediaUseCase: Send + Sync {
    async fn execute(
        &self,
        command: ListMediaCommand,
    ) -> Result<PageResult<MediaItem>, ListMediaError>;
}
