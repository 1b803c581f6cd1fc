use actix_web::{put, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::ToSchema;

use super::{events, parse_parent};
use crate::{
    api::schemas::ErrorResponse,
    multimedia::application::ports::incoming::use_cases::{
        UpdatePositionsCommand, UpdatePositionsError,
    },
    shared::api::ApiResponse,
    AppState,
};

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdatePositionsRequest {
    /// Every attached media id in its new order. Positions become the
    /// indices of this list.
    #[schema(example = json!([7, 3, 9]))]
    pub order: Vec<i32>,
}

#[utoipa::path(
    put,
    path = "/api/{parent_kind}/{parent_id}/media/order",
    tag = "media",
    params(
        ("parent_kind" = String, Path, description = "`galleries` or `projects`"),
        ("parent_id" = i32, Path, description = "Gallery or project id"),
    ),
    request_body = UpdatePositionsRequest,
    responses(
        (status = 200, description = "Order stored, `HX-Trigger: media-reordered`"),
        (status = 400, description = "Order does not cover exactly the attached media", body = ErrorResponse),
        (status = 404, description = "Unknown parent kind", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[put("/api/{parent_kind}/{parent_id}/media/order")]
pub async fn update_positions_handler(
    path: web::Path<(String, i32)>,
    body: web::Json<UpdatePositionsRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (parent_kind, parent_id) = path.into_inner();
    let parent = match parse_parent(&parent_kind, parent_id) {
        Ok(parent) => parent,
        Err(resp) => return resp,
    };

    let command = UpdatePositionsCommand {
        parent,
        ordered_media_ids: body.into_inner().order,
    };

    match data.multimedia.update_positions.execute(command).await {
        Ok(_) => ApiResponse::triggered(events::MEDIA_REORDERED),

        Err(UpdatePositionsError::InvalidOrdering(msg)) => {
            ApiResponse::bad_request("INVALID_ORDERING", &msg)
        }

        Err(UpdatePositionsError::RepositoryError(msg)) => {
            error!(%parent, "Failed to update media positions: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
