use portfolio_cms::analytics::application::services::{AnalyticsRecorder, RecordVisitService};
use portfolio_cms::api::openapi::ApiDoc;
use portfolio_cms::config::{AppConfig, MailTransport};
use portfolio_cms::content::adapter::outgoing::JsonFileStorage;
use portfolio_cms::content::application::services::{ContentStorage, PublicContentService};
use portfolio_cms::content::domain::PortfolioContent;
use portfolio_cms::email::adapter::outgoing::{RecordingEmailSender, SmtpEmailSender};
use portfolio_cms::email::application::ports::outgoing::EmailSender;
use portfolio_cms::email::application::services::ContactMailService;
use portfolio_cms::shared::api::custom_json_config;
use portfolio_cms::shared::events::ChangeNotifier;
use portfolio_cms::{init_routes, AppState};

use actix_web::{web, App, HttpServer};
use anyhow::Context;
use std::sync::Arc;

use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

fn load_defaults(config: &AppConfig) -> PortfolioContent {
    match &config.defaults_file {
        Some(path) => match PortfolioContent::from_json_file(path) {
            Ok(defaults) => defaults,
            Err(e) => {
                warn!("{}; using built-in defaults", e);
                PortfolioContent::builtin()
            }
        },
        None => PortfolioContent::builtin(),
    }
}

/// Picks the mail transport and the address contact notifications go to.
fn build_email_sender(
    config: &AppConfig,
) -> anyhow::Result<(Arc<dyn EmailSender + Send + Sync>, String)> {
    let from = config.email_from.clone().unwrap_or_default();
    let inbox = config
        .contact_inbox
        .clone()
        .unwrap_or_else(|| "owner@localhost".to_string());

    let sender: Arc<dyn EmailSender + Send + Sync> = match &config.mail {
        MailTransport::Relay {
            server,
            username,
            password,
        } => {
            let smtp = SmtpEmailSender::new(server, username, password, &from)
                .map_err(anyhow::Error::msg)?;
            Arc::new(smtp)
        }
        MailTransport::Local { host, port } => {
            info!("Sending contact mail through local SMTP at {}:{}", host, port);
            Arc::new(SmtpEmailSender::new_local(host, *port, &from))
        }
        MailTransport::Disabled => {
            warn!("SMTP is not configured; contact mail is kept in memory only");
            Arc::new(RecordingEmailSender::new())
        }
    };

    Ok((sender, inbox))
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    let config = AppConfig::from_env().context("invalid configuration")?;
    info!(
        environment = %config.environment,
        content_dir = %config.content_dir.display(),
        "Configuration loaded"
    );
    if config.admin.is_none() {
        warn!("ADMIN_PASSWORD is not set; the admin gate rejects every login");
    }

    let file_storage = JsonFileStorage::new(config.content_dir.clone())?;
    let storage = ContentStorage::new(Arc::new(file_storage));
    let notifier = ChangeNotifier::new();
    let defaults = Arc::new(load_defaults(&config));

    let (email_sender, inbox) = build_email_sender(&config)?;

    let public_content = PublicContentService::new(storage.clone(), Arc::clone(&defaults));
    let send_contact_email = ContactMailService::new(email_sender, &inbox);
    let record_visit = RecordVisitService::new(AnalyticsRecorder::new(storage, notifier));

    let app_state = web::Data::new(AppState {
        public_content: Arc::new(public_content),
        send_contact_email: Arc::new(send_contact_email),
        record_visit: Arc::new(record_visit),
    });

    let server_url = config.server_url();
    info!("Server run on: {}", server_url);

    HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .app_data(custom_json_config())
            .configure(init_routes)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
    })
    .bind(&server_url)
    .with_context(|| format!("cannot bind {}", server_url))?
    .run()
    .await?;

    Ok(())
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e:#}");
    }
}
