use async_trait::async_trait;
use tracing::info;

use crate::multimedia::application::{
    domain::entities::ParentRef,
    ports::{
        incoming::use_cases::{SetCoverImageError, SetCoverImageUseCase},
        outgoing::db::ParentRepository,
    },
};

pub struct SetCoverImageService<R>
where
    R: ParentRepository,
{
    repo: R,
}

impl<R> SetCoverImageService<R>
where
    R: ParentRepository,
{
    pub fn new(repo: R) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R> SetCoverImageUseCase for SetCoverImageService<R>
where
    R: ParentRepository,
{
    async fn execute(
        &self,
        parent: ParentRef,
        media_id: Option<i32>,
    ) -> Result<(), SetCoverImageError> {
        match media_id {
            Some(media_id) => self.repo.set_cover_image(parent, media_id).await?,
            None => self.repo.clear_cover_image(parent).await?,
        }
        info!(%parent, ?media_id, "Cover image updated");
        Ok(())
    }
}
