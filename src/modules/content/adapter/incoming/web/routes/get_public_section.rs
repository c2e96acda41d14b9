use actix_web::{get, web, Responder};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::content::application::ports::incoming::use_cases::SectionContent;
use crate::modules::content::domain::PublicSection;
use crate::shared::api::ApiResponse;
use crate::AppState;

fn parse_section(raw: &str) -> Option<PublicSection> {
    match raw {
        "personal" => Some(PublicSection::Personal),
        "experience" => Some(PublicSection::Experience),
        "projects" => Some(PublicSection::Projects),
        "skills" => Some(PublicSection::Skills),
        "education" => Some(PublicSection::Education),
        _ => None,
    }
}

/// One public section
#[utoipa::path(
    get,
    path = "/api/public/{section}",
    tag = "public",
    params(
        ("section" = PublicSection, Path, description = "personal, experience, projects, skills or education")
    ),
    responses(
        (
            status = 200,
            description = "Section content in its stored shape",
            body = inline(SuccessResponse<SectionContent>)
        ),
        (
            status = 404,
            description = "Unknown section",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "SECTION_NOT_FOUND",
                    "message": "Unknown section 'blog'"
                }
            })
        ),
    )
)]
#[get("/api/public/{section}")]
pub async fn get_public_section_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let raw = path.into_inner();
    let Some(section) = parse_section(&raw) else {
        return ApiResponse::not_found("SECTION_NOT_FOUND", &format!("Unknown section '{}'", raw));
    };

    let content = data.public_content.section(section).await;
    ApiResponse::success(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test as actix_test, App};
    use serde_json::Value;
    use std::sync::Arc;

    use crate::modules::content::adapter::outgoing::MemoryStorage;
    use crate::modules::content::application::ports::outgoing::StorageAdapter;
    use crate::modules::content::application::services::{ContentStorage, PublicContentService};
    use crate::modules::content::domain::PortfolioContent;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;

    #[actix_web::test]
    async fn test_get_public_section_returns_bare_section_shape() {
        let memory = MemoryStorage::new();
        let storage = ContentStorage::new(Arc::new(memory.clone()));
        let defaults = Arc::new(PortfolioContent::builtin());
        // Corrupt cache must not leak into the response.
        memory.set_item("portfolio_skills_data", "{not json").unwrap();

        let app_state = TestAppStateBuilder::default()
            .with_public_content(PublicContentService::new(storage, Arc::clone(&defaults)))
            .build();
        let app = actix_test::init_service(
            App::new()
                .app_data(app_state)
                .service(get_public_section_handler),
        )
        .await;

        let req = actix_test::TestRequest::get().uri("/api/public/skills").to_request();
        let resp = actix_test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = actix_test::read_body_json(resp).await;
        assert!(body["data"].is_array());
        assert_eq!(
            body["data"].as_array().unwrap().len(),
            defaults.skills.len()
        );
        assert_eq!(body["data"][0]["iconRef"], "code");
    }

    #[actix_web::test]
    async fn test_get_public_section_unknown_section_is_not_found() {
        let app_state = TestAppStateBuilder::default().build();
        let app = actix_test::init_service(
            App::new()
                .app_data(app_state)
                .service(get_public_section_handler),
        )
        .await;

        let req = actix_test::TestRequest::get().uri("/api/public/blog").to_request();
        let resp = actix_test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body: Value = actix_test::read_body_json(resp).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["error"]["code"], "SECTION_NOT_FOUND");
    }

    #[test]
    fn test_parse_section_accepts_only_lowercase_names() {
        assert_eq!(parse_section("projects"), Some(PublicSection::Projects));
        assert_eq!(parse_section("Projects"), None);
    }
}
