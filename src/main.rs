mod config;
mod core;
mod models;
mod routes;
mod services;

use actix_cors::Cors;
use actix_web::{error, http::StatusCode, middleware, web, App, HttpResponse, HttpServer};
use std::sync::Arc;
use tracing::{error, info};

use crate::config::Settings;
use crate::core::Ranker;
use crate::routes::recommend::AppState;
use crate::services::{CatalogStore, ContributionStore, FeedbackIndex, GeminiClient};

/// JSON error response for JSON payload errors
#[derive(Debug, serde::Serialize)]
pub struct JsonError {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

impl std::fmt::Display for JsonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error, self.message)
    }
}

impl std::error::Error for JsonError {}

impl error::ResponseError for JsonError {
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::BAD_REQUEST))
            .content_type("application/json")
            .body(serde_json::to_string(self).unwrap())
    }
}

/// Handle JSON payload errors
pub fn handle_json_payload_error(
    err: error::JsonPayloadError,
    req: &actix_web::HttpRequest,
) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    JsonError {
        error: "invalid_json".to_string(),
        message: format!("Invalid JSON: {}", err),
        status_code: 400,
    }
    .into()
}

/// Handle query payload errors
pub fn handle_query_payload_error(
    err: error::QueryPayloadError,
    _req: &actix_web::HttpRequest,
) -> actix_web::Error {
    JsonError {
        error: "invalid_query".to_string(),
        message: format!("Invalid query: {}", err),
        status_code: 400,
    }
    .into()
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Initialize logging
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "json".to_string());

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&log_level))
        .with_target(false)
        .with_level(true);

    if log_format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.init();
    }

    info!("Starting Foil Advisor recommendation service...");

    // Load configuration
    let settings = Settings::load().unwrap_or_else(|e| {
        error!("Failed to load configuration: {}", e);
        panic!("Configuration error: {}", e);
    });

    info!("Configuration loaded successfully");

    // Load the static catalog once; it is immutable for the process lifetime
    let catalog = CatalogStore::load(&settings.catalog.path).unwrap_or_else(|e| {
        error!("Failed to load catalog from {}: {}", settings.catalog.path, e);
        panic!("Catalog error: {}", e);
    });

    if catalog.is_empty() {
        error!("Catalog loaded but contains no usable front wings");
    }

    // Community feedback is optional; an absent file disables the boost
    let feedback = FeedbackIndex::load(&settings.feedback.path);

    // Text-generation collaborator (works without a key via local fallback)
    let gemini = GeminiClient::new(
        settings.generation.endpoint.clone(),
        settings.generation.model.clone(),
        settings.generation.api_key.clone(),
        settings.generation.timeout_secs,
    );

    if settings.generation.api_key.is_none() {
        info!("No generation API key configured; pros/cons use the local fallback");
    }

    let contributions = ContributionStore::new(
        settings.contributions.path.clone().into(),
        settings.contributions.discord_webhook.clone(),
        settings.contributions.resend_api_key.clone(),
        settings.contributions.notify_email.clone(),
    );

    let ranker = Ranker::new(settings.recommend.top_n, settings.recommend.min_score);

    info!(
        "Ranker initialized (top {} above {} points, {:?} performance model)",
        settings.recommend.top_n, settings.recommend.min_score, settings.recommend.model_generation
    );

    // Build application state
    let app_state = AppState {
        catalog: Arc::new(catalog),
        feedback: Arc::new(feedback),
        gemini: Arc::new(gemini),
        contributions: Arc::new(contributions),
        ranker,
        generation: settings.recommend.model_generation,
        admin_key: settings.contributions.admin_key.clone(),
    };

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
            .app_data(web::QueryConfig::default().error_handler(handle_query_payload_error))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
