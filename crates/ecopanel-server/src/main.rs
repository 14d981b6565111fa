use anyhow::Context;
use axum::{routing::get, Json, Router};
use serde::Serialize;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;
use utoipa::{OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

mod adapters;
mod application;
mod config;
mod cors;
mod models;
mod routes;

use adapters::GeminiClient;
use application::AdvisorService;
use config::{EnvSecrets, SecretSource, ServerConfig};
use cors::CorsPolicy;
use ecopanel::Locale;

/// Type alias for the advisor with the concrete model client
pub type AppAdvisorService = AdvisorService<GeminiClient>;

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub advisor: Arc<AppAdvisorService>,
    pub locale: Locale,
}

#[derive(Serialize, ToSchema)]
struct HealthCheck {
    status: String,
    message: String,
    version: String,
}

/// Liveness check
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Server is running", body = HealthCheck)
    ),
    tag = "Health"
)]
async fn health_check() -> Json<HealthCheck> {
    Json(HealthCheck {
        status: "ok".to_string(),
        message: "Ecopanel API is running".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Build the full router with documentation, tracing and CORS layers
pub fn build_router(state: AppState, cors: &CorsPolicy) -> Router {
    let openapi = routes::swagger::ApiDoc::openapi();

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .route("/health", get(health_check))
        .merge(routes::ask::router())
        .merge(routes::dashboard::router())
        .layer(TraceLayer::new_for_http())
        .layer(cors.layer())
        .with_state(state)
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,ecopanel=debug,ecopanel_server=debug"));

    // A subscriber may already be installed when embedded in another runtime
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

#[shuttle_runtime::main]
async fn main(
    #[shuttle_runtime::Secrets] secrets: shuttle_runtime::SecretStore,
) -> shuttle_axum::ShuttleAxum {
    let _ = dotenvy::dotenv();
    init_tracing();

    tracing::info!("🌱 Ecopanel API initializing...");

    let sources: [&dyn SecretSource; 2] = [&secrets, &EnvSecrets];
    let config = ServerConfig::load(&sources).context("Failed to load configuration")?;

    tracing::info!(
        "🤖 Model: {} via {} (timeout {:?})",
        config.gemini.model,
        config.gemini.base_url,
        config.gemini.timeout
    );
    tracing::info!("🌐 Locale: {}", config.locale);
    match &config.cors {
        CorsPolicy::Any => tracing::warn!("⚠️  CORS allows any origin"),
        policy => tracing::info!("🔒 CORS origins: {}", policy),
    }

    let client = GeminiClient::new(&config.gemini).context("Failed to build Gemini client")?;
    let advisor = Arc::new(AdvisorService::new(Arc::new(client), config.locale));

    let state = AppState {
        advisor,
        locale: config.locale,
    };

    let router = build_router(state, &config.cors);

    tracing::info!("📚 Swagger UI: /swagger-ui");
    tracing::info!("✅ Ecopanel API ready");

    Ok(router.into())
}
