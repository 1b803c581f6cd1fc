use async_trait::async_trait;

use crate::multimedia::application::domain::entities::{
    AttachedMedia, AttachmentPosition, MediaItem, PageResult, ParentRef,
};
use crate::multimedia::application::ports::incoming::use_cases::{
    AttachMediaCommand, AttachMediaError, AttachMediaUseCase, ListAttachedMediaUseCase,
    ListMediaCommand, ListMediaError, ListUnlinkedMediaUseCase, NextPositionError,
    NextPositionUseCase, ReorderMediaCommand, ReorderMediaError, ReorderMediaUseCase,
    SetCoverImageError, SetCoverImageUseCase, UnlinkMediaError, UnlinkMediaUseCase,
    UpdatePositionsCommand, UpdatePositionsError, UpdatePositionsUseCase,
};

fn empty_page<T>(command: &ListMediaCommand) -> PageResult<T> {
    PageResult {
        items: vec![],
        page: command.page.page,
        per_page: command.page.per_page,
        total: 0,
    }
}

#[derive(Clone)]
pub struct StubAttachMediaUseCase;

#[async_trait]
impl AttachMediaUseCase for StubAttachMediaUseCase {
    async fn execute(
        &self,
        _command: AttachMediaCommand,
    ) -> Result<Vec<AttachmentPosition>, AttachMediaError> {
        Ok(vec![])
    }
}

#[derive(Clone)]
pub struct StubUnlinkMediaUseCase;

#[async_trait]
impl UnlinkMediaUseCase for StubUnlinkMediaUseCase {
    async fn execute(&self, _parent: ParentRef, _media_id: i32) -> Result<(), UnlinkMediaError> {
        Ok(())
    }
}

#[derive(Clone)]
pub struct StubReorderMediaUseCase;

#[async_trait]
impl ReorderMediaUseCase for StubReorderMediaUseCase {
    async fn execute(&self, _command: ReorderMediaCommand) -> Result<(), ReorderMediaError> {
        Ok(())
    }
}

#[derive(Clone)]
pub struct StubUpdatePositionsUseCase;

#[async_trait]
impl UpdatePositionsUseCase for StubUpdatePositionsUseCase {
    async fn execute(
        &self,
        _command: UpdatePositionsCommand,
    ) -> Result<Vec<AttachmentPosition>, UpdatePositionsError> {
        Ok(vec![])
    }
}

#[derive(Clone)]
pub struct StubNextPositionUseCase;

#[async_trait]
impl NextPositionUseCase for StubNextPositionUseCase {
    async fn execute(&self, _parent: ParentRef) -> Result<i32, NextPositionError> {
        Ok(0)
    }
}

#[derive(Clone)]
pub struct StubListAttachedMediaUseCase;

#[async_trait]
impl ListAttachedMediaUseCase for StubListAttachedMediaUseCase {
    async fn execute(
        &self,
        command: ListMediaCommand,
    ) -> Result<PageResult<AttachedMedia>, ListMediaError> {
        Ok(empty_page(&command))
    }
}

#[derive(Clone)]
pub struct StubListUnlinkedMediaUseCase;

#[async_trait]
impl ListUnlinkedMediaUseCase for StubListUnlinkedMediaUseCase {
    async fn execute(
        &self,
        command: ListMediaCommand,
    ) -> Result<PageResult<MediaItem>, ListMediaError> {
        Ok(empty_page(&command))
    }
}

#[derive(Clone)]
pub struct StubSetCoverImageUseCase;

#[async_trait]
impl SetCoverImageUseCase for StubSetCoverImageUseCase {
    async fn execute(
        &self,
        _parent: ParentRef,
        _media_id: Option<i32>,
    ) -> Result<(), SetCoverImageError> {
        Ok(())
    }
}
