pub mod attach_media;
pub mod list_media;
pub mod list_unlinked_media;
pub mod next_position;
pub mod reorder_media;
pub mod set_cover_image;
pub mod unlink_media;
pub mod update_positions;

pub use attach_media::{attach_media_handler, AttachMediaRequest};
pub use list_media::{list_media_handler, AttachedMediaPage, ListMediaQuery};
pub use list_unlinked_media::{list_unlinked_media_handler, UnlinkedMediaPage};
pub use next_position::{next_position_handler, NextPositionResponse};
pub use reorder_media::{reorder_media_handler, ReorderMediaRequest};
pub use set_cover_image::{set_cover_image_handler, SetCoverImageRequest};
pub use unlink_media::unlink_media_handler;
pub use update_positions::{update_positions_handler, UpdatePositionsRequest};

use actix_web::HttpResponse;

use crate::{
    multimedia::application::domain::entities::{ParentKind, ParentRef},
    shared::api::ApiResponse,
};

/// Client events announced through `HX-Trigger`.
pub mod events {
    pub const MEDIA_ATTACHED: &str = "media-attached";
    pub const MEDIA_UNLINKED: &str = "media-unlinked";
    pub const MEDIA_REORDERED: &str = "media-reordered";
    pub const COVER_UPDATED: &str = "cover-updated";
}

fn parse_parent(parent_kind: &str, parent_id: i32) -> Result<ParentRef, HttpResponse> {
    match ParentKind::from_path_segment(parent_kind) {
        Some(kind) => Ok(ParentRef::new(kind, parent_id)),
        None => Err(ApiResponse::not_found(
            "PARENT_KIND_NOT_FOUND",
            "Media can only be attached to galleries or projects",
        )),
    }
}
