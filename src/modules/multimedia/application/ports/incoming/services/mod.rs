mod attach_media_service;
mod list_attached_media_service;
mod list_unlinked_media_service;
mod next_position_service;
mod reorder_media_service;
mod set_cover_image_service;
mod unlink_media_service;
mod update_positions_service;

pub use attach_media_service::AttachMediaService;
pub use list_attached_media_service::ListAttachedMediaService;
pub use list_unlinked_media_service::ListUnlinkedMediaService;
pub use next_position_service::NextPositionService;
pub use reorder_media_service::ReorderMediaService;
pub use set_cover_image_service::SetCoverImageService;
pub use unlink_media_service::UnlinkMediaService;
pub use update_positions_service::UpdatePositionsService;
