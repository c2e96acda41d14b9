use actix_web::{http::header, post, web, HttpRequest, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::analytics::application::ports::incoming::use_cases::{
    RecordVisitCommand, RecordVisitError,
};
use crate::modules::analytics::domain::VisitRecord;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Page view reported by the browser
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecordVisitRequest {
    /// Path of the page that was viewed
    #[schema(example = "/projects")]
    pub page: String,

    /// `document.referrer`; omitted or empty for direct traffic
    #[schema(example = "https://www.google.com/")]
    pub referrer: Option<String>,

    /// Per-tab session id kept by the browser
    #[schema(example = "2f1c6a0e-3f7b-4a51-9d55-5c2b8f0e9a11")]
    pub session_id: Option<String>,
}

/// Record a page visit
///
/// The user agent is taken from the request header.
#[utoipa::path(
    post,
    path = "/api/analytics/visits",
    tag = "analytics",
    request_body = RecordVisitRequest,
    responses(
        (status = 201, description = "Visit stored", body = inline(SuccessResponse<VisitRecord>)),
        (
            status = 400,
            description = "Page is not an absolute path",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": { "code": "INVALID_PAGE", "message": "Page must be an absolute path" }
            })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/analytics/visits")]
pub async fn record_visit_handler(
    req: HttpRequest,
    payload: web::Json<RecordVisitRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let user_agent = req
        .headers()
        .get(header::USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    let dto = payload.into_inner();

    let command = RecordVisitCommand {
        page: dto.page,
        referrer: dto.referrer,
        user_agent,
        session_id: dto.session_id,
    };

    match data.record_visit.execute(command).await {
        Ok(visit) => ApiResponse::created(visit),
        Err(RecordVisitError::InvalidPage(_)) => {
            ApiResponse::bad_request("INVALID_PAGE", "Page must be an absolute path")
        }
        Err(RecordVisitError::Storage(msg)) => {
            error!("Failed to store visit: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test as actix_test, App};
    use async_trait::async_trait;
    use serde_json::{json, Value};
    use std::sync::{Arc, Mutex};

    use crate::modules::analytics::application::ports::incoming::use_cases::RecordVisitUseCase;
    use crate::modules::analytics::domain::DeviceKind;
    use crate::shared::api::custom_json_config;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;

    /* --------------------------------------------------
     * Mock RecordVisitUseCase
     * -------------------------------------------------- */

    #[derive(Clone)]
    struct MockRecordVisitUseCase {
        result: Result<VisitRecord, RecordVisitError>,
        seen: Arc<Mutex<Vec<RecordVisitCommand>>>,
    }

    impl MockRecordVisitUseCase {
        fn success(visit: VisitRecord) -> Self {
            Self {
                result: Ok(visit),
                seen: Arc::new(Mutex::new(Vec::new())),
            }
        }

        fn error(err: RecordVisitError) -> Self {
            Self {
                result: Err(err),
                seen: Arc::new(Mutex::new(Vec::new())),
            }
        }
    }

    #[async_trait]
    impl RecordVisitUseCase for MockRecordVisitUseCase {
        async fn execute(
            &self,
            command: RecordVisitCommand,
        ) -> Result<VisitRecord, RecordVisitError> {
            self.seen.lock().unwrap().push(command);
            self.result.clone()
        }
    }

    fn sample_visit() -> VisitRecord {
        VisitRecord {
            id: "visit-1".to_string(),
            timestamp_ms: 1_736_000_000_000,
            iso_date: "2025-01-04".to_string(),
            user_agent: "test-agent".to_string(),
            referrer: "Direct".to_string(),
            page: "/projects".to_string(),
            session_id: "tab-1".to_string(),
            device: DeviceKind::Desktop,
            browser: "Other".to_string(),
            os: "Other".to_string(),
            country: None,
            city: None,
        }
    }

    /* --------------------------------------------------
     * Tests
     * -------------------------------------------------- */

    #[actix_web::test]
    async fn test_record_visit_success_passes_user_agent_header() {
        let mock = MockRecordVisitUseCase::success(sample_visit());
        let seen = Arc::clone(&mock.seen);

        let app_state = TestAppStateBuilder::default().with_record_visit(mock).build();
        let app = actix_test::init_service(
            App::new()
                .app_data(app_state)
                .service(record_visit_handler),
        )
        .await;

        let req = actix_test::TestRequest::post()
            .uri("/api/analytics/visits")
            .insert_header((header::USER_AGENT, "test-agent"))
            .set_json(json!({ "page": "/projects", "sessionId": "tab-1" }))
            .to_request();
        let resp = actix_test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let body: Value = actix_test::read_body_json(resp).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["sessionId"], "tab-1");
        assert_eq!(body["data"]["timestampMs"], 1_736_000_000_000i64);

        let seen = seen.lock().unwrap();
        assert_eq!(seen[0].user_agent, "test-agent");
        assert_eq!(seen[0].session_id.as_deref(), Some("tab-1"));
        assert_eq!(seen[0].referrer, None);
    }

    #[actix_web::test]
    async fn test_record_visit_invalid_page_is_bad_request() {
        let app_state = TestAppStateBuilder::default()
            .with_record_visit(MockRecordVisitUseCase::error(RecordVisitError::InvalidPage(
                "projects".to_string(),
            )))
            .build();
        let app = actix_test::init_service(
            App::new()
                .app_data(app_state)
                .service(record_visit_handler),
        )
        .await;

        let req = actix_test::TestRequest::post()
            .uri("/api/analytics/visits")
            .set_json(json!({ "page": "projects" }))
            .to_request();
        let resp = actix_test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = actix_test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "INVALID_PAGE");
    }

    #[actix_web::test]
    async fn test_record_visit_storage_error_is_internal_error() {
        let app_state = TestAppStateBuilder::default()
            .with_record_visit(MockRecordVisitUseCase::error(RecordVisitError::Storage(
                "quota".to_string(),
            )))
            .build();
        let app = actix_test::init_service(
            App::new()
                .app_data(app_state)
                .service(record_visit_handler),
        )
        .await;

        let req = actix_test::TestRequest::post()
            .uri("/api/analytics/visits")
            .set_json(json!({ "page": "/" }))
            .to_request();
        let resp = actix_test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body: Value = actix_test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "INTERNAL_ERROR");
    }

    #[actix_web::test]
    async fn test_record_visit_malformed_body_is_validation_error() {
        let app_state = TestAppStateBuilder::default().build();
        let app = actix_test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(custom_json_config())
                .service(record_visit_handler),
        )
        .await;

        let req = actix_test::TestRequest::post()
            .uri("/api/analytics/visits")
            .insert_header((header::CONTENT_TYPE, "application/json"))
            .set_payload("{\"page\": ")
            .to_request();
        let resp = actix_test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = actix_test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }
}
