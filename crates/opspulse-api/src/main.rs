// OpsPulse API server
// Decision: header-presence authorization with a no-auth mode for local demos
// Decision: read paths mask storage failures behind 200 seed fallbacks

mod alerts;
mod audit;
mod auth;
mod chat;
mod common;
mod diagnostics;
mod init;
mod metrics;
mod notifications;
mod projects;
mod services;
mod users;

use anyhow::{Context, Result};
use axum::http::{header, HeaderValue, Method};
use axum::{routing::get, Json, Router};
use chrono::{DateTime, Utc};
use opspulse_core::{
    Alert, AlertSeverity, AlertStatus, AuditEvent, DashboardMetrics, KvStore, Notification,
    NotificationSeverity, Project, ProjectStatus, ResponseCategory, RiskLevel, UserPreferences,
    UserProfile, UserRole,
};
use opspulse_storage::{Database, PgKvStore};
use serde::Serialize;
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::services::{
    AlertsService, AuditService, DiagnosticsService, InitService, MetricsService,
    NotificationsService, ProbeResult, ProjectsService, UsersService,
};

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    timestamp: DateTime<Utc>,
    service: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        timestamp: Utc::now(),
        service: "opspulse-api",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        metrics::dashboard,
        alerts::current,
        alerts::update_status,
        projects::list,
        projects::update_progress,
        notifications::list,
        notifications::mark_read,
        notifications::mark_all_read,
        chat::post_message,
        users::profile,
        users::dashboard,
        users::update_preferences,
        audit::list_events,
        audit::record_event,
        init::seed_data,
        diagnostics::connectivity,
    ),
    components(
        schemas(
            DashboardMetrics,
            Alert, AlertSeverity, AlertStatus,
            Project, ProjectStatus,
            Notification, NotificationSeverity,
            UserProfile, UserPreferences, UserRole,
            AuditEvent, RiskLevel,
            ResponseCategory,
            common::SuccessResponse, common::ErrorResponse,
            alerts::AlertsResponse, alerts::UpdateAlertStatusRequest,
            projects::ProjectsResponse, projects::UpdateProgressRequest,
            notifications::NotificationsResponse,
            chat::ChatMessageRequest, chat::ChatMessageResponse,
            users::UserDashboard, users::UpdatePreferencesRequest,
            audit::AuditEventsResponse, audit::RecordAuditEventRequest,
            init::InitDataResponse,
            diagnostics::ConnectivityResponse, ProbeResult,
        )
    ),
    tags(
        (name = "metrics", description = "Synthesized dashboard metrics"),
        (name = "alerts", description = "Alert list and status updates"),
        (name = "projects", description = "Tracked initiatives"),
        (name = "notifications", description = "Notification feed"),
        (name = "chat", description = "Canned assistant replies"),
        (name = "users", description = "User profiles and per-user dashboards"),
        (name = "audit", description = "Audit trail"),
        (name = "init", description = "Demo data seeding"),
        (name = "diagnostics", description = "Upstream connectivity probes")
    ),
    info(
        title = "OpsPulse API",
        version = "0.2.0",
        description = "Demo IT operations / FinOps / ESG dashboard backend",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    )
)]
struct ApiDoc;

/// Per-module states bundled for router assembly
#[derive(Clone)]
struct AppStates {
    metrics: metrics::AppState,
    alerts: alerts::AppState,
    projects: projects::AppState,
    notifications: notifications::AppState,
    users: users::AppState,
    audit: audit::AppState,
    init: init::AppState,
    diagnostics: diagnostics::AppState,
}

impl AppStates {
    fn new(store: Arc<dyn KvStore>, probes: DiagnosticsService) -> Self {
        let metrics_service = Arc::new(MetricsService::new(store.clone()));
        let audit_service = Arc::new(AuditService::new(store.clone()));
        let users_service = Arc::new(UsersService::new(
            store.clone(),
            metrics_service.clone(),
            audit_service.clone(),
        ));

        Self {
            metrics: metrics::AppState::new(metrics_service),
            alerts: alerts::AppState::new(Arc::new(AlertsService::new(store.clone()))),
            projects: projects::AppState::new(Arc::new(ProjectsService::new(store.clone()))),
            notifications: notifications::AppState::new(Arc::new(NotificationsService::new(
                store.clone(),
            ))),
            users: users::AppState::new(users_service),
            audit: audit::AppState::new(audit_service),
            init: init::AppState::new(Arc::new(InitService::new(store))),
            diagnostics: diagnostics::AppState::new(Arc::new(probes)),
        }
    }
}

/// Assemble every /v1 route behind the authorization gate
fn build_api_router(states: AppStates, auth_state: auth::AuthState) -> Router {
    Router::new()
        .merge(metrics::routes(states.metrics))
        .merge(alerts::routes(states.alerts))
        .merge(projects::routes(states.projects))
        .merge(notifications::routes(states.notifications))
        .merge(chat::routes())
        .merge(users::routes(states.users))
        .merge(audit::routes(states.audit))
        .merge(init::routes(states.init))
        .merge(diagnostics::routes(states.diagnostics))
        .layer(axum::middleware::from_fn_with_state(
            auth_state,
            auth::require_auth,
        ))
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "opspulse_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("opspulse-api starting...");

    // Initialize the store
    let database_url =
        std::env::var("DATABASE_URL").context("DATABASE_URL environment variable required")?;
    let db = Database::from_url(&database_url)
        .await
        .context("Failed to connect to database")?;
    db.ensure_schema()
        .await
        .context("Failed to prepare kv_entries schema")?;
    tracing::info!("Connected to database");

    let store: Arc<dyn KvStore> = Arc::new(PgKvStore::new(db));

    // Load authorization configuration
    let auth_config = auth::AuthConfig::from_env();
    tracing::info!(mode = ?auth_config.mode, "Authorization configured");
    let auth_state = auth::AuthState::new(auth_config);

    // Diagnostic probe targets (optional)
    let probes = DiagnosticsService::from_env();
    if probes.target_count() > 0 {
        tracing::info!(count = probes.target_count(), "Diagnostic probes configured");
    }

    let states = AppStates::new(store, probes);

    // Load API prefix from environment (default: empty)
    // Example: API_PREFIX="/api" results in routes like /api/v1/projects
    let api_prefix = std::env::var("API_PREFIX").unwrap_or_default();
    if !api_prefix.is_empty() {
        tracing::info!(prefix = %api_prefix, "API prefix configured");
    }

    // Load CORS allowed origins from environment (optional)
    // Only needed when the UI is served from a different origin than the API
    let cors_origins: Vec<HeaderValue> = std::env::var("CORS_ALLOWED_ORIGINS")
        .ok()
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.split(',')
                .filter_map(|s| s.trim().parse().ok())
                .collect()
        })
        .unwrap_or_default();

    if cors_origins.is_empty() {
        tracing::info!("CORS not configured (same-origin requests only)");
    } else {
        tracing::info!(origins = ?cors_origins, "CORS origins configured");
    }

    let api_routes = build_api_router(states, auth_state);

    // Build main router with the open health route plus prefixed API routes
    let mut app = Router::new().route("/health", get(health));
    app = app.merge(build_router_with_prefix(api_routes, &api_prefix));

    // Add Swagger UI
    let app =
        app.merge(SwaggerUi::new("/swagger-ui").url("/api-doc/openapi.json", ApiDoc::openapi()));

    // Add CORS layer only if origins are configured
    let app = if !cors_origins.is_empty() {
        app.layer(
            CorsLayer::new()
                .allow_origin(AllowOrigin::list(cors_origins))
                .allow_methods([
                    Method::GET,
                    Method::POST,
                    Method::PUT,
                    Method::OPTIONS,
                ])
                .allow_headers([
                    header::CONTENT_TYPE,
                    header::AUTHORIZATION,
                    header::ACCEPT,
                    header::ORIGIN,
                ])
                .allow_credentials(true),
        )
    } else {
        app
    };

    // Add tracing
    let app = app.layer(TraceLayer::new_for_http());

    // Start server
    let addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:9000".to_string());
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context("Failed to bind to address")?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}

/// Build router with optional API prefix (extracted for testing)
fn build_router_with_prefix<S: Clone + Send + Sync + 'static>(
    api_routes: Router<S>,
    api_prefix: &str,
) -> Router<S> {
    if api_prefix.is_empty() {
        api_routes
    } else {
        Router::new().nest(api_prefix, api_routes)
    }
}
