use actix_web::{post, web, Responder};
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::contact::domain::NewContactMessage;
use crate::modules::email::application::ports::incoming::use_cases::ContactMailError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Serialize, ToSchema)]
pub struct EmailSentResponse {
    #[schema(example = "Email sent successfully")]
    pub message: String,
}

/// Forward a contact form submission to the site owner
#[utoipa::path(
    post,
    path = "/api/send-email",
    tag = "contact",
    request_body = NewContactMessage,
    responses(
        (status = 200, description = "Email sent", body = inline(SuccessResponse<EmailSentResponse>)),
        (
            status = 400,
            description = "Missing fields or malformed address",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "VALIDATION_ERROR",
                    "message": "Missing required fields: name, subject"
                }
            })
        ),
        (
            status = 502,
            description = "Mail relay failed",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "EMAIL_DELIVERY_FAILED",
                    "message": "Failed to send email. Please try again later."
                }
            })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/send-email")]
pub async fn send_email_handler(
    payload: web::Json<NewContactMessage>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.send_contact_email.execute(payload.into_inner()).await {
        Ok(()) => ApiResponse::success(EmailSentResponse {
            message: "Email sent successfully".to_string(),
        }),
        Err(ContactMailError::Validation(e)) => {
            ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string())
        }
        Err(ContactMailError::InvalidEmail(_)) => {
            ApiResponse::bad_request("INVALID_EMAIL", "Please provide a valid email address")
        }
        Err(ContactMailError::Delivery(_)) => ApiResponse::bad_gateway(
            "EMAIL_DELIVERY_FAILED",
            "Failed to send email. Please try again later.",
        ),
        Err(ContactMailError::Template(msg)) => {
            error!("Failed to render contact notification: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
