use std::sync::Arc;

use crate::multimedia::application::ports::incoming::use_cases::{
    AttachMediaUseCase, ListAttachedMediaUseCase, ListUnlinkedMediaUseCase, NextPositionUseCase,
    ReorderMediaUseCase, SetCoverImageUseCase, UnlinkMediaUseCase, UpdatePositionsUseCase,
};

#[derive(Clone)]
pub struct MultimediaUseCases {
    pub attach: Arc<dyn AttachMediaUseCase + Send + Sync>,
    pub unlink: Arc<dyn UnlinkMediaUseCase + Send + Sync>,
    pub reorder: Arc<dyn ReorderMediaUseCase + Send + Sync>,
    pub update_positions: Arc<dyn UpdatePositionsUseCase + Send + Sync>,
    pub next_position: Arc<dyn NextPositionUseCase + Send + Sync>,
    pub list_attached: Arc<dyn ListAttachedMediaUseCase + Send + Sync>,
    pub list_unlinked: Arc<dyn ListUnlinkedMediaUseCase + Send + Sync>,
    pub set_cover: Arc<dyn SetCoverImageUseCase + Send + Sync>,
}
