use actix_web::{patch, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::ToSchema;

use super::{events, parse_parent};
use crate::{
    api::schemas::ErrorResponse,
    multimedia::application::ports::incoming::use_cases::{
        ReorderMediaCommand, ReorderMediaError,
    },
    shared::api::ApiResponse,
    AppState,
};

#[derive(Debug, Deserialize, ToSchema)]
pub struct ReorderMediaRequest {
    /// Zero-based target slot.
    #[schema(example = 2)]
    pub position: i32,
}

#[utoipa::path(
    patch,
    path = "/api/{parent_kind}/{parent_id}/media/{media_id}/position",
    tag = "media",
    params(
        ("parent_kind" = String, Path, description = "`galleries` or `projects`"),
        ("parent_id" = i32, Path, description = "Gallery or project id"),
        ("media_id" = i32, Path, description = "Attached media id"),
    ),
    request_body = ReorderMediaRequest,
    responses(
        (status = 200, description = "Media moved, `HX-Trigger: media-reordered`"),
        (status = 400, description = "Position out of range", body = ErrorResponse),
        (status = 404, description = "Media not attached to this parent", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[patch("/api/{parent_kind}/{parent_id}/media/{media_id}/position")]
pub async fn reorder_media_handler(
    path: web::Path<(String, i32, i32)>,
    body: web::Json<ReorderMediaRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (parent_kind, parent_id, media_id) = path.into_inner();
    let parent = match parse_parent(&parent_kind, parent_id) {
        Ok(parent) => parent,
        Err(resp) => return resp,
    };

    let command = ReorderMediaCommand {
        parent,
        media_id,
        new_position: body.position,
    };

    match data.multimedia.reorder.execute(command).await {
        Ok(()) => ApiResponse::triggered(events::MEDIA_REORDERED),

        Err(ReorderMediaError::AttachmentNotFound) => ApiResponse::not_found(
            "ATTACHMENT_NOT_FOUND",
            "Media is not attached to this parent",
        ),

        Err(ReorderMediaError::InvalidOrdering(msg)) => {
            ApiResponse::bad_request("INVALID_ORDERING", &msg)
        }

        Err(ReorderMediaError::RepositoryError(msg)) => {
            error!(%parent, media_id, "Failed to reorder media: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
