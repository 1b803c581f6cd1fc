use actix_web::{get, HttpResponse, Responder};
use utoipa::OpenApi;

use crate::api::schemas::{ErrorDetail, ErrorResponse, SuccessResponse};
use crate::multimedia::adapter::incoming::web::routes::{
    AttachMediaRequest, AttachedMediaPage, NextPositionResponse, ReorderMediaRequest,
    SetCoverImageRequest, UnlinkedMediaPage, UpdatePositionsRequest,
};
use crate::multimedia::application::domain::entities::{
    AttachedMedia, AttachmentPosition, MediaItem, ParentKind,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portfolio CMS API",
        version = "1.0.0",
        description = "Ordered media attachments for galleries and projects",
        contact(
            name = "API Support",
            email = "support@example.com"
        )
    ),
    paths(
        // Media endpoints
        crate::multimedia::adapter::incoming::web::routes::attach_media::attach_media_handler,
        crate::multimedia::adapter::incoming::web::routes::unlink_media::unlink_media_handler,
        crate::multimedia::adapter::incoming::web::routes::reorder_media::reorder_media_handler,
        crate::multimedia::adapter::incoming::web::routes::update_positions::update_positions_handler,
        crate::multimedia::adapter::incoming::web::routes::list_media::list_media_handler,
        crate::multimedia::adapter::incoming::web::routes::list_unlinked_media::list_unlinked_media_handler,
        crate::multimedia::adapter::incoming::web::routes::next_position::next_position_handler,

        // Cover endpoints
        crate::multimedia::adapter::incoming::web::routes::set_cover_image::set_cover_image_handler,
    ),
    components(
        schemas(
            // Response wrappers
            SuccessResponse<AttachedMediaPage>,
            ErrorResponse,
            ErrorDetail,

            // Media DTOs
            ParentKind,
            MediaItem,
            AttachedMedia,
            AttachmentPosition,
            AttachMediaRequest,
            ReorderMediaRequest,
            UpdatePositionsRequest,
            SetCoverImageRequest,
            AttachedMediaPage,
            UnlinkedMediaPage,
            NextPositionResponse
        )
    ),
    tags(
        (name = "media", description = "Ordered media of galleries and projects"),
    )
)]
pub struct ApiDoc;

#[get("/api-docs/openapi.json")]
pub async fn openapi_json() -> impl Responder {
    HttpResponse::Ok().json(ApiDoc::openapi())
}
