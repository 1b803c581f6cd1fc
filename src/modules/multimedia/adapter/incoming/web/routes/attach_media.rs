use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::ToSchema;

use super::{events, parse_parent};
use crate::{
    api::schemas::ErrorResponse,
    multimedia::application::ports::incoming::use_cases::{AttachMediaCommand, AttachMediaError},
    shared::api::ApiResponse,
    AppState,
};

#[derive(Debug, Deserialize, ToSchema)]
pub struct AttachMediaRequest {
    /// Appended in this order after the current last item.
    #[schema(example = json!([12, 15]))]
    pub media_ids: Vec<i32>,
}

#[utoipa::path(
    post,
    path = "/api/{parent_kind}/{parent_id}/media",
    tag = "media",
    params(
        ("parent_kind" = String, Path, description = "`galleries` or `projects`"),
        ("parent_id" = i32, Path, description = "Gallery or project id"),
    ),
    request_body = AttachMediaRequest,
    responses(
        (status = 200, description = "Media attached, `HX-Trigger: media-attached`"),
        (status = 400, description = "No media selected", body = ErrorResponse),
        (status = 404, description = "Unknown parent kind", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[post("/api/{parent_kind}/{parent_id}/media")]
pub async fn attach_media_handler(
    path: web::Path<(String, i32)>,
    body: web::Json<AttachMediaRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (parent_kind, parent_id) = path.into_inner();
    let parent = match parse_parent(&parent_kind, parent_id) {
        Ok(parent) => parent,
        Err(resp) => return resp,
    };

    let command = AttachMediaCommand {
        parent,
        media_ids: body.into_inner().media_ids,
    };

    match data.multimedia.attach.execute(command).await {
        Ok(_) => ApiResponse::triggered(events::MEDIA_ATTACHED),

        Err(AttachMediaError::EmptySelection) => {
            ApiResponse::bad_request("EMPTY_SELECTION", "Select at least one media item")
        }

        Err(AttachMediaError::RepositoryError(msg)) => {
            error!(%parent, "Failed to attach media: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
