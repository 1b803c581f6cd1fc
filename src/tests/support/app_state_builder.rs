use crate::multimedia::application::media_use_cases::MultimediaUseCases;
use crate::multimedia::application::ports::incoming::use_cases::{
    AttachMediaUseCase, ListAttachedMediaUseCase, ListUnlinkedMediaUseCase, NextPositionUseCase,
    ReorderMediaUseCase, SetCoverImageUseCase, UnlinkMediaUseCase, UpdatePositionsUseCase,
};
use crate::tests::support::stubs::*;
use crate::AppState;
use actix_web::web;
use std::sync::Arc;

pub struct TestAppStateBuilder {
    multimedia: MultimediaUseCases,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            multimedia: MultimediaUseCases {
                attach: Arc::new(StubAttachMediaUseCase),
                unlink: Arc::new(StubUnlinkMediaUseCase),
                reorder: Arc::new(StubReorderMediaUseCase),
                update_positions: Arc::new(StubUpdatePositionsUseCase),
                next_position: Arc::new(StubNextPositionUseCase),
                list_attached: Arc::new(StubListAttachedMediaUseCase),
                list_unlinked: Arc::new(StubListUnlinkedMediaUseCase),
                set_cover: Arc::new(StubSetCoverImageUseCase),
            },
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_attach_media(
        mut self,
        uc: impl AttachMediaUseCase + Send + Sync + 'static,
    ) -> Self {
        self.multimedia.attach = Arc::new(uc);
        self
    }

    pub fn with_unlink_media(
        mut self,
        uc: impl UnlinkMediaUseCase + Send + Sync + 'static,
    ) -> Self {
        self.multimedia.unlink = Arc::new(uc);
        self
    }

    pub fn with_reorder_media(
        mut self,
        uc: impl ReorderMediaUseCase + Send + Sync + 'static,
    ) -> Self {
        self.multimedia.reorder = Arc::new(uc);
        self
    }

    pub fn with_update_positions(
        mut self,
        uc: impl UpdatePositionsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.multimedia.update_positions = Arc::new(uc);
        self
    }

    pub fn with_next_position(
        mut self,
        uc: impl NextPositionUseCase + Send + Sync + 'static,
    ) -> Self {
        self.multimedia.next_position = Arc::new(uc);
        self
    }

    pub fn with_list_attached_media(
        mut self,
        uc: impl ListAttachedMediaUseCase + Send + Sync + 'static,
    ) -> Self {
        self.multimedia.list_attached = Arc::new(uc);
        self
    }

    pub fn with_list_unlinked_media(
        mut self,
        uc: impl ListUnlinkedMediaUseCase + Send + Sync + 'static,
    ) -> Self {
        self.multimedia.list_unlinked = Arc::new(uc);
        self
    }

    pub fn with_set_cover_image(
        mut self,
        uc: impl SetCoverImageUseCase + Send + Sync + 'static,
    ) -> Self {
        self.multimedia.set_cover = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            multimedia: self.multimedia,
        })
    }
}
