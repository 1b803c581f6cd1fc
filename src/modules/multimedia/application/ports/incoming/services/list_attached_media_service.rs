use async_trait::async_trait;

use crate::multimedia::application::{
    domain::entities::{AttachedMedia, PageRequest, PageResult},
    ports::{
        incoming::use_cases::{ListAttachedMediaUseCase, ListMediaCommand, ListMediaError},
        outgoing::db::MediaQuery,
    },
};

pub struct ListAttachedMediaService<Q>
where
    Q: MediaQuery,
{
    query: Q,
}

impl<Q> ListAttachedMediaService<Q>
where
    Q: MediaQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

pub(super) fn ensure_page(page: PageRequest) -> Result<(), ListMediaError> {
    if page.is_valid() {
        Ok(())
    } else {
        Err(ListMediaError::InvalidPagination {
            max: PageRequest::MAX_PER_PAGE,
        })
    }
}

#[async_trait]
impl<Q> ListAttachedMediaUseCase for ListAttachedMediaService<Q>
where
    Q: MediaQuery,
{
    async fn execute(
        &self,
        command: ListMediaCommand,
    ) -> Result<PageResult<AttachedMedia>, ListMediaError> {
        ensure_page(command.page)?;
        Ok(self.query.list_attached(command.parent, command.page).await?)
    }
}
