use actix_web::{delete, web, Responder};
use tracing::error;

use super::{events, parse_parent};
use crate::{
    api::schemas::ErrorResponse,
    multimedia::application::ports::incoming::use_cases::UnlinkMediaError,
    shared::api::ApiResponse, AppState,
};

#[utoipa::path(
    delete,
    path = "/api/{parent_kind}/{parent_id}/media/{media_id}",
    tag = "media",
    params(
        ("parent_kind" = String, Path, description = "`galleries` or `projects`"),
        ("parent_id" = i32, Path, description = "Gallery or project id"),
        ("media_id" = i32, Path, description = "Attached media id"),
    ),
    responses(
        (status = 200, description = "Media unlinked (also when it was not attached), `HX-Trigger: media-unlinked`"),
        (status = 404, description = "Unknown parent kind", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[delete("/api/{parent_kind}/{parent_id}/media/{media_id}")]
pub async fn unlink_media_handler(
    path: web::Path<(String, i32, i32)>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (parent_kind, parent_id, media_id) = path.into_inner();
    let parent = match parse_parent(&parent_kind, parent_id) {
        Ok(parent) => parent,
        Err(resp) => return resp,
    };

    match data.multimedia.unlink.execute(parent, media_id).await {
        Ok(()) => ApiResponse::triggered(events::MEDIA_UNLINKED),

        Err(UnlinkMediaError::RepositoryError(msg)) => {
            error!(%parent, media_id, "Failed to unlink media: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
