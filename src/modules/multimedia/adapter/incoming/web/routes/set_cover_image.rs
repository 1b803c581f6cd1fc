use actix_web::{put, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::ToSchema;

use super::{events, parse_parent};
use crate::{
    api::schemas::ErrorResponse,
    multimedia::application::ports::incoming::use_cases::SetCoverImageError,
    shared::api::ApiResponse, AppState,
};

#[derive(Debug, Deserialize, ToSchema)]
pub struct SetCoverImageRequest {
    /// Attached media to use as cover, `null` to clear it.
    #[schema(example = 12)]
    pub media_id: Option<i32>,
}

#[utoipa::path(
    put,
    path = "/api/{parent_kind}/{parent_id}/cover",
    tag = "media",
    params(
        ("parent_kind" = String, Path, description = "`galleries` or `projects`"),
        ("parent_id" = i32, Path, description = "Gallery or project id"),
    ),
    request_body = SetCoverImageRequest,
    responses(
        (status = 200, description = "Cover updated, `HX-Trigger: cover-updated`"),
        (status = 404, description = "Parent not found", body = ErrorResponse),
        (status = 409, description = "Media is not attached to the parent", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[put("/api/{parent_kind}/{parent_id}/cover")]
pub async fn set_cover_image_handler(
    path: web::Path<(String, i32)>,
    body: web::Json<SetCoverImageRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (parent_kind, parent_id) = path.into_inner();
    let parent = match parse_parent(&parent_kind, parent_id) {
        Ok(parent) => parent,
        Err(resp) => return resp,
    };

    match data.multimedia.set_cover.execute(parent, body.media_id).await {
        Ok(()) => ApiResponse::triggered(events::COVER_UPDATED),

        Err(SetCoverImageError::ParentNotFound) => {
            ApiResponse::not_found("PARENT_NOT_FOUND", "Parent not found")
        }

        Err(SetCoverImageError::MediaNotAttached) => ApiResponse::conflict(
            "MEDIA_NOT_ATTACHED",
            "Only attached media can be used as cover image",
        ),

        Err(SetCoverImageError::RepositoryError(msg)) => {
            error!(%parent, "Failed to update cover image: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use serde_json::{json, Value};
    use std::sync::{Arc, Mutex};

    use crate::multimedia::application::domain::entities::ParentRef;
    use crate::multimedia::application::ports::incoming::use_cases::SetCoverImageUseCase;
    use crate::shared::api::HX_TRIGGER;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;

    #[derive(Clone)]
    struct MockSetCoverImageUseCase {
        result: Result<(), SetCoverImageError>,
        calls: Arc<Mutex<Vec<(ParentRef, Option<i32>)>>>,
    }

    impl MockSetCoverImageUseCase {
        fn new(result: Result<(), SetCoverImageError>) -> Self {
            Self {
                result,
                calls: Arc::new(Mutex::new(vec![])),
            }
        }
    }

    #[async_trait]
    impl SetCoverImageUseCase for MockSetCoverImageUseCase {
        async fn execute(
            &self,
            parent: ParentRef,
            media_id: Option<i32>,
        ) -> Result<(), SetCoverImageError> {
            self.calls.lock().unwrap().push((parent, media_id));
            self.result.clone()
        }
    }

    async fn put_cover(mock: MockSetCoverImageUseCase, body: Value) -> (StatusCode, Option<String>, Value) {
        let app_state = TestAppStateBuilder::default()
            .with_set_cover_image(mock)
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(set_cover_image_handler),
        )
        .await;

        let req = test::TestRequest::put()
            .uri("/api/projects/3/cover")
            .set_json(body)
            .to_request();

        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        let trigger = resp
            .headers()
            .get(HX_TRIGGER)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let bytes = test::read_body(resp).await;
        let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, trigger, json)
    }

    #[actix_web::test]
    async fn test_set_cover_image_success() {
        let mock = MockSetCoverImageUseCase::new(Ok(()));
        let (status, trigger, _) = put_cover(mock.clone(), json!({ "media_id": 12 })).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(trigger.as_deref(), Some(events::COVER_UPDATED));
        assert_eq!(
            mock.calls.lock().unwrap().as_slice(),
            &[(ParentRef::project(3), Some(12))]
        );
    }

    #[actix_web::test]
    async fn test_set_cover_image_null_clears() {
        let mock = MockSetCoverImageUseCase::new(Ok(()));
        let (status, _, _) = put_cover(mock.clone(), json!({ "media_id": null })).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            mock.calls.lock().unwrap().as_slice(),
            &[(ParentRef::project(3), None)]
        );
    }

    #[actix_web::test]
    async fn test_set_cover_image_parent_not_found() {
        let (status, _, body) = put_cover(
            MockSetCoverImageUseCase::new(Err(SetCoverImageError::ParentNotFound)),
            json!({ "media_id": 12 }),
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "PARENT_NOT_FOUND");
    }

    #[actix_web::test]
    async fn test_set_cover_image_media_not_attached() {
        let (status, trigger, body) = put_cover(
            MockSetCoverImageUseCase::new(Err(SetCoverImageError::MediaNotAttached)),
            json!({ "media_id": 99 }),
        )
        .await;

        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(trigger, None);
        assert_eq!(body["error"]["code"], "MEDIA_NOT_ATTACHED");
    }

    #[actix_web::test]
    async fn test_set_cover_image_repository_error() {
        let (status, _, _) = put_cover(
            MockSetCoverImageUseCase::new(Err(SetCoverImageError::RepositoryError(
                "db down".to_string(),
            ))),
            json!({ "media_id": 12 }),
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
