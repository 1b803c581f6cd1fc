use actix_web::{get, web, Responder};
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;

use super::parse_parent;
use crate::{
    api::schemas::ErrorResponse,
    multimedia::application::ports::incoming::use_cases::NextPositionError,
    shared::api::ApiResponse, AppState,
};

#[derive(Debug, Serialize, ToSchema)]
pub struct NextPositionResponse {
    /// `max(position) + 1`, or 0 for a parent without media.
    pub next_position: i32,
}

#[utoipa::path(
    get,
    path = "/api/{parent_kind}/{parent_id}/media/next-position",
    tag = "media",
    params(
        ("parent_kind" = String, Path, description = "`galleries` or `projects`"),
        ("parent_id" = i32, Path, description = "Gallery or project id"),
    ),
    responses(
        (status = 200, description = "Position the next attachment would take", body = inline(crate::api::schemas::SuccessResponse<NextPositionResponse>)),
        (status = 404, description = "Unknown parent kind", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[get("/api/{parent_kind}/{parent_id}/media/next-position")]
pub async fn next_position_handler(
    path: web::Path<(String, i32)>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (parent_kind, parent_id) = path.into_inner();
    let parent = match parse_parent(&parent_kind, parent_id) {
        Ok(parent) => parent,
        Err(resp) => return resp,
    };

    match data.multimedia.next_position.execute(parent).await {
        Ok(next_position) => ApiResponse::success(NextPositionResponse { next_position }),

        Err(NextPositionError::RepositoryError(msg)) => {
            error!(%parent, "Failed to compute next position: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
