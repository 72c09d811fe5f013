pub mod api;
pub mod config;
pub mod health;
pub mod modules;
pub mod shared;

use crate::api::openapi::ApiDoc;
use crate::config::{AppConfig, SmtpSettings};
use crate::modules::catalog::adapter::outgoing::JsonMessageCatalog;
use crate::modules::catalog::application::ports::outgoing::MessageCatalog;
use crate::modules::content::adapter::outgoing::{ContentQueryPostgres, ContentRepositoryPostgres};
use crate::modules::content::application::domain::{Bilingual, CompanyInfoKey};
use crate::modules::content::application::ports::incoming::use_cases::{
    BrowseContentUseCase, RegisterContentUseCase, UpsertCompanyInfoCommand,
};
use crate::modules::content::application::service::{
    BrowseContentService, ContentSeeder, RegisterContentService,
};
use crate::modules::inquiry::adapter::outgoing::SmtpEmailSender;
use crate::modules::inquiry::application::ports::incoming::use_cases::SubmitInquiryUseCase;
use crate::modules::inquiry::application::ports::outgoing::EmailSender;
use crate::modules::inquiry::application::service::SubmitInquiryService;
use crate::modules::locale::application::domain::Locale;
use crate::modules::site::application::domain::BusinessProfile;
use crate::modules::site::application::service::PageComposer;
use crate::modules::site::application::SiteUseCases;
use crate::shared::api::{custom_json_config, ApiResponse};

use actix_web::{web, App, HttpServer};
use anyhow::Context;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database};
use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub site: SiteUseCases,
    pub submit_inquiry: Arc<dyn SubmitInquiryUseCase + Send + Sync>,
    pub catalog: Arc<dyn MessageCatalog + Send + Sync>,
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

    // Try .env.{environment} first, then fall back to .env
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let config = AppConfig::from_env().context("Invalid configuration")?;
    let server_url = config.server_url();

    let catalog: Arc<dyn MessageCatalog + Send + Sync> =
        Arc::new(JsonMessageCatalog::embedded().context("Message catalog failed to load")?);

    let profile = BusinessProfile::default().with_settings(&config.site);

    // Database connection
    let mut opt = ConnectOptions::new(config.database_url.clone());
    opt.max_connections(50)
        .min_connections(10)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .context("Failed to connect to database")?;

    Migrator::up(&conn, None)
        .await
        .context("Database migrations failed")?;

    let db_arc = Arc::new(conn);

    let browse: Arc<dyn BrowseContentUseCase + Send + Sync> = Arc::new(
        BrowseContentService::new(ContentQueryPostgres::new(Arc::clone(&db_arc))),
    );

    if config.seed_content {
        let register: Arc<dyn RegisterContentUseCase + Send + Sync> = Arc::new(
            RegisterContentService::new(ContentRepositoryPostgres::new(Arc::clone(&db_arc))),
        );
        let facts = company_facts(&profile, catalog.as_ref()).context("Seed facts unavailable")?;
        ContentSeeder::new(register, Arc::clone(&browse), Arc::clone(&catalog))
            .seed(facts)
            .await
            .context("Content seeding failed")?;
    }

    // SMTP SETUPS
    let smtp_sender: Arc<dyn EmailSender + Send + Sync> = match &config.smtp {
        SmtpSettings::Relay {
            server,
            username,
            password,
        } => Arc::new(
            SmtpEmailSender::new(server, username, password, &config.email_from)
                .map_err(anyhow::Error::msg)?,
        ),
        SmtpSettings::Local { host, port } => {
            warn!("Inquiry mail goes to local SMTP {}:{}", host, port);
            Arc::new(SmtpEmailSender::new_local(host, *port, &config.email_from))
        }
    };

    let recipient = config
        .inquiry_recipient
        .clone()
        .unwrap_or_else(|| profile.email.clone());

    let submit_inquiry = SubmitInquiryService::new(
        Arc::clone(&browse),
        Arc::clone(&catalog),
        smtp_sender,
        recipient,
    );

    let composer = PageComposer::new(
        browse,
        Arc::clone(&catalog),
        profile,
        config.projects_visible_count,
    );

    let state = AppState {
        site: SiteUseCases::from_composer(composer),
        submit_inquiry: Arc::new(submit_inquiry),
        catalog,
    };

    info!("Server run on: {}", server_url);

    let db_for_server = Arc::clone(&db_arc);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .app_data(custom_json_config())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
            .configure(init_routes)
            .default_service(web::to(|| async {
                ApiResponse::not_found("NOT_FOUND", "Resource not found")
            }))
    })
    .bind(&server_url)?
    .run()
    .await?;

    Ok(())
}

/// Business contact facts written to `company_info` on seeding.
fn company_facts(
    profile: &BusinessProfile,
    catalog: &(dyn MessageCatalog + Send + Sync),
) -> anyhow::Result<Vec<UpsertCompanyInfoCommand>> {
    let same = |value: &str| Bilingual::new(value.to_string(), value.to_string());
    let address = match &profile.address {
        Some(address) => address.clone(),
        None => Bilingual::new(
            catalog.message(Locale::Ar, "ContactSection.info.address")?,
            catalog.message(Locale::En, "ContactSection.info.address")?,
        ),
    };

    Ok(vec![
        UpsertCompanyInfoCommand {
            key: CompanyInfoKey::PHONE.to_string(),
            value: same(&profile.phone),
        },
        UpsertCompanyInfoCommand {
            key: CompanyInfoKey::WHATSAPP.to_string(),
            value: same(&profile.whatsapp),
        },
        UpsertCompanyInfoCommand {
            key: CompanyInfoKey::EMAIL.to_string(),
            value: same(&profile.email),
        },
        UpsertCompanyInfoCommand {
            key: CompanyInfoKey::ADDRESS.to_string(),
            value: address,
        },
    ])
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Contact
    cfg.service(crate::modules::inquiry::adapter::incoming::web::routes::submit_inquiry_handler);
    // Site, after the fixed paths so `/{locale}` never captures them
    cfg.service(crate::modules::site::adapter::incoming::web::routes::get_projects_handler);
    cfg.service(crate::modules::site::adapter::incoming::web::routes::get_service_page_handler);
    cfg.service(crate::modules::site::adapter::incoming::web::routes::get_home_page_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e:#}");
    }
}
