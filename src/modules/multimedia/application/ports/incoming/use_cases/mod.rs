mod attach_media;
mod list_attached_media;
mod list_unlinked_media;
mod next_position;
mod reorder_media;
mod set_cover_image;
mod unlink_media;
mod update_positions;

pub use attach_media::{AttachMediaCommand, AttachMediaError, AttachMediaUseCase};
pub use list_attached_media::{ListAttachedMediaUseCase, ListMediaCommand, ListMediaError};
pub use list_unlinked_media::ListUnlinkedMediaUseCase;
pub use next_position::{NextPositionError, NextPositionUseCase};
pub use reorder_media::{ReorderMediaCommand, ReorderMediaError, ReorderMediaUseCase};
pub use set_cover_image::{SetCoverImageError, SetCoverImageUseCase};
pub use unlink_media::{UnlinkMediaError, UnlinkMediaUseCase};
pub use update_positions::{UpdatePositionsCommand, UpdatePositionsError, UpdatePositionsUseCase};
