use async_trait::async_trait;

use super::list_attached_media_service::ensure_page;
use crate::multimedia::application::{
    domain::entities::{MediaItem, PageResult},
    ports::{
        incoming::use_cases::{ListMediaCommand, ListMediaError, ListUnlinkedMediaUseCase},
        outgoing::db::MediaQuery,
    },
};

pub struct ListUnlinkedMediaService<Q>
where
    Q: MediaQuery,
{
    query: Q,
}

impl<Q> ListUnlinkedMediaService<Q>
where
    Q: MediaQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ListUnlinkedMediaUseCase for ListUnlinkedMediaService<Q>
where
    Q: MediaQuery,
{
    async fn execute(
        &self,
        command: ListMediaCommand,
    ) -> Result<PageResult<MediaItem>, ListMediaError> {
        ensure_page(command.page)?;
        Ok(self
            .query
            .list_unlinked(command.parent, command.page)
            .await?)
    }
}
