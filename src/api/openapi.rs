use crate::api::schemas::{ErrorDetail, ErrorResponse, SuccessResponse};
use utoipa::OpenApi;

use crate::analytics::adapter::incoming::web::routes::RecordVisitRequest;
use crate::analytics::domain::{DeviceKind, VisitRecord};
use crate::contact::domain::NewContactMessage;
use crate::content::application::ports::incoming::use_cases::SectionContent;
use crate::content::domain::{
    CareerGoals, ContactInfo, EducationRecord, ExperienceEntry, LinkKind, PersonalData,
    PortfolioContent, ProjectEntry, ProjectLink, PublicSection, SkillCategory, SkillIcon,
};
use crate::email::adapter::incoming::web::routes::EmailSentResponse;
use crate::health::HealthResponse;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portfolio CMS API",
        version = "1.0.0",
        description = "Public read side, contact mail and visit recording for a single-owner portfolio",
        contact(
            name = "API Support",
            email = "support@example.com"
        )
    ),
    paths(
        crate::health::health,

        // Public content
        crate::content::adapter::incoming::web::routes::get_public_portfolio_handler,
        crate::content::adapter::incoming::web::routes::get_public_section_handler,

        // Contact
        crate::email::adapter::incoming::web::routes::send_email_handler,

        // Analytics
        crate::analytics::adapter::incoming::web::routes::record_visit_handler,
    ),
    components(
        schemas(
            // Response wrappers
            SuccessResponse<PortfolioContent>,
            ErrorResponse,
            ErrorDetail,
            HealthResponse,

            // Content
            PortfolioContent,
            PersonalData,
            ContactInfo,
            CareerGoals,
            ExperienceEntry,
            ProjectEntry,
            ProjectLink,
            LinkKind,
            SkillCategory,
            SkillIcon,
            EducationRecord,
            PublicSection,
            SectionContent,

            // Contact
            NewContactMessage,
            EmailSentResponse,

            // Analytics
            RecordVisitRequest,
            VisitRecord,
            DeviceKind,
        )
    ),
    tags(
        (name = "health", description = "Liveness probe"),
        (name = "public", description = "Portfolio content as shown to visitors"),
        (name = "contact", description = "Contact form delivery"),
        (name = "analytics", description = "Visit recording"),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_every_route() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();

        for expected in [
            "/api/health",
            "/api/public/portfolio",
            "/api/public/{section}",
            "/api/send-email",
            "/api/analytics/visits",
        ] {
            assert!(
                paths.iter().any(|p| p.as_str() == expected),
                "missing {} in {:?}",
                expected,
                paths
            );
        }
    }
}
