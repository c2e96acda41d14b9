pub mod api;
pub mod config;
pub mod health;
pub mod modules;
pub mod shared;

pub use modules::admin;
pub use modules::analytics;
pub use modules::auth;
pub use modules::contact;
pub use modules::content;
pub use modules::email;

use actix_web::web;
use chrono::{DateTime, Utc};
use std::sync::Arc;

use crate::admin::application::ports::outgoing::Confirmation;
use crate::admin::application::services::{AdminDashboard, ScreenContext};
use crate::analytics::application::ports::incoming::use_cases::RecordVisitUseCase;
use crate::auth::adapter::outgoing::DisabledCredentialChecker;
use crate::auth::application::ports::outgoing::CredentialChecker;
use crate::auth::application::services::SessionGate;
use crate::config::AppConfig;
use crate::content::application::services::ContentStorage;
use crate::content::domain::PortfolioContent;
use crate::shared::events::ChangeNotifier;
use crate::content::application::ports::incoming::use_cases::GetPublicContentUseCase;
use crate::email::application::ports::incoming::use_cases::SendContactEmailUseCase;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub public_content: Arc<dyn GetPublicContentUseCase + Send + Sync>,
    pub send_contact_email: Arc<dyn SendContactEmailUseCase + Send + Sync>,
    pub record_visit: Arc<dyn RecordVisitUseCase + Send + Sync>,
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    // Public content; the fixed portfolio path must win over {section}
    cfg.service(crate::content::adapter::incoming::web::routes::get_public_portfolio_handler);
    cfg.service(crate::content::adapter::incoming::web::routes::get_public_section_handler);
    // Contact mail
    cfg.service(crate::email::adapter::incoming::web::routes::send_email_handler);
    // Analytics
    cfg.service(crate::analytics::adapter::incoming::web::routes::record_visit_handler);
}

/// Builds the admin shell on top of the shared storage. Save latency,
/// notice lifetime, session TTL and the credential pair come from `config`;
/// without an admin password every login is rejected.
pub fn open_admin_dashboard(
    config: &AppConfig,
    storage: ContentStorage,
    notifier: ChangeNotifier,
    defaults: Arc<PortfolioContent>,
    confirm: Arc<dyn Confirmation>,
    now: DateTime<Utc>,
) -> AdminDashboard {
    let checker: Arc<dyn CredentialChecker> = match config.credential_checker() {
        Some(checker) => Arc::new(checker),
        None => Arc::new(DisabledCredentialChecker),
    };
    let gate = SessionGate::new(storage.clone(), notifier.clone(), checker)
        .with_ttl(config.session_ttl());

    let ctx = ScreenContext {
        storage,
        notifier,
        confirm,
        defaults,
        settings: config.screen_settings(),
    };
    AdminDashboard::open(ctx, gate, now)
}
