use actix_web::{get, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::{IntoParams, ToSchema};

use super::parse_parent;
use crate::{
    api::schemas::ErrorResponse,
    multimedia::application::{
        domain::entities::{AttachedMedia, PageRequest, PageResult},
        ports::incoming::use_cases::{ListMediaCommand, ListMediaError},
    },
    shared::api::ApiResponse,
    AppState,
};

//
// ──────────────────────────────────────────────────────────
// Query DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListMediaQuery {
    /// 1-based page, defaults to 1.
    pub page: Option<u32>,
    /// Defaults to 24, at most 100.
    pub per_page: Option<u32>,
}

impl From<ListMediaQuery> for PageRequest {
    fn from(q: ListMediaQuery) -> Self {
        PageRequest {
            page: q.page.unwrap_or(1),
            per_page: q.per_page.unwrap_or(PageRequest::DEFAULT_PER_PAGE),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AttachedMediaPage {
    pub items: Vec<AttachedMedia>,
    pub page: u32,
    pub per_page: u32,
    pub total: u64,
}

impl From<PageResult<AttachedMedia>> for AttachedMediaPage {
    fn from(result: PageResult<AttachedMedia>) -> Self {
        Self {
            items: result.items,
            page: result.page,
            per_page: result.per_page,
            total: result.total,
        }
    }
}

pub(super) fn invalid_pagination(max: u32) -> actix_web::HttpResponse {
    ApiResponse::bad_request(
        "INVALID_PAGINATION",
        &format!("page must be at least 1 and per_page between 1 and {max}"),
    )
}

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

#[utoipa::path(
    get,
    path = "/api/{parent_kind}/{parent_id}/media",
    tag = "media",
    params(
        ("parent_kind" = String, Path, description = "`galleries` or `projects`"),
        ("parent_id" = i32, Path, description = "Gallery or project id"),
        ListMediaQuery,
    ),
    responses(
        (status = 200, description = "Attached media ordered by position", body = inline(crate::api::schemas::SuccessResponse<AttachedMediaPage>)),
        (status = 400, description = "Invalid pagination", body = ErrorResponse),
        (status = 404, description = "Unknown parent kind", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[get("/api/{parent_kind}/{parent_id}/media")]
pub async fn list_media_handler(
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

    match data.multimedia.list_attached.execute(command).await {
        Ok(result) => ApiResponse::success(AttachedMediaPage::from(result)),

        Err(ListMediaError::InvalidPagination { max }) => invalid_pagination(max),

        Err(ListMediaError::RepositoryError(msg)) => {
            error!(%parent, "Failed to list attached media: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
