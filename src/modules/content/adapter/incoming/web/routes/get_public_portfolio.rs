use actix_web::{get, web, Responder};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::content::domain::PortfolioContent;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Whole public portfolio
///
/// Every section comes from saved content when it is readable, otherwise
/// from the default dataset.
#[utoipa::path(
    get,
    path = "/api/public/portfolio",
    tag = "public",
    responses(
        (
            status = 200,
            description = "Portfolio content",
            body = inline(SuccessResponse<PortfolioContent>)
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/public/portfolio")]
pub async fn get_public_portfolio_handler(data: web::Data<AppState>) -> impl Responder {
    let portfolio = data.public_content.portfolio().await;
    ApiResponse::success(portfolio)
}
