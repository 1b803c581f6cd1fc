use actix_web::{get, web, Responder};
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;

use super::{list_media::invalid_pagination, parse_parent, ListMediaQuery};
use crate::{
    api::schemas::ErrorResponse,
    multimedia::application::{
        domain::entities::{MediaItem, PageResult},
        ports::incoming::use_cases::{ListMediaCommand, ListMediaError},
    },
    shared::api::ApiResponse,
    AppState,
};

#[derive(Debug, Serialize, ToSchema)]
pub struct UnlinkedMediaPage {
    pub items: Vec<MediaItem>,
    pub page: u32,
    pub per_page: u32,
    pub total: u64,
}

impl From<PageResult<MediaItem>> for UnlinkedMediaPage {
    fn from(result: PageResult<MediaItem>) -> Self {
        Self {
            items: result.items,
            page: result.page,
            per_page: result.per_page,
            total: result.total,
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/{parent_kind}/{parent_id}/media/unlinked",
    tag = "media",
    params(
        ("parent_kind" = String, Path, description = "`galleries` or `projects`"),
        ("parent_id" = i32, Path, description = "Gallery or project id"),
        ListMediaQuery,
    ),
    responses(
        (status = 200, description = "Media not yet attached to the parent, newest first", body = inline(crate::api::schemas::SuccessResponse<UnlinkedMediaPage>)),
        (status = 400, description = "Invalid pagination", body = ErrorResponse),
        (status = 404, description = "Unknown parent kind", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[get("/api/{parent_kind}/{parent_id}/media/unlinked")]
pub async fn list_unlinked_media_handler(
    path: web::Path<(String, i32)>,
    query: web::Query<ListMediaQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (parent_kind, parent_id) = path.into_inner();
    let parent = match parse_parent(&parent_kind, parent_id) {
        Ok(parent) => parent,
        Err(resp) => return resp,
    };

    let command = ListMediaCommand {
        parent,
        page: query.into_inner().into(),
    };

    match data.multimedia.list_unlinked.execute(command).await {
        Ok(result) => ApiResponse::success(UnlinkedMediaPage::from(result)),

        Err(ListMediaError::InvalidPagination { max }) => invalid_pagination(max),

        Err(ListMediaError::RepositoryError(msg)) => {
            error!(%parent, "Failed to list unlinked media: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
