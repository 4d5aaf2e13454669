// Mergington Activities API Library
// Decision: Router assembly lives in the library so tests drive the same app as main

// API routes and types (shared for OpenAPI generation)
pub mod api;

// Environment configuration
pub mod config;

// Services layer
pub mod services;
pub use services::ActivityService;

// OpenAPI spec generation
pub mod openapi;

use anyhow::Result;
use axum::http::{header, Method};
use axum::response::Redirect;
use axum::{routing::get, Json, Router};
use mergington_core::{seed, Activities, ActivityStore, InMemoryActivityStore};
use serde::Serialize;
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::ServerConfig;
use crate::openapi::ApiDoc;

/// Landing page of the bundled front-end
pub const INDEX_PATH: &str = "/static/index.html";

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// GET / - Temporary redirect (307) to the front-end
async fn root() -> Redirect {
    Redirect::temporary(INDEX_PATH)
}

/// Activities the directory starts with: the seed file if configured,
/// otherwise the built-in set
pub fn initial_activities(config: &ServerConfig) -> Result<Activities> {
    match &config.seed_file {
        Some(path) => seed::load_from_file(path),
        None => Ok(seed::default_activities()),
    }
}

/// Build the in-memory directory for this configuration
pub fn build_store(config: &ServerConfig) -> Result<Arc<dyn ActivityStore>> {
    let activities = initial_activities(config)?;
    tracing::info!(count = activities.len(), "Activity directory initialized");
    Ok(Arc::new(InMemoryActivityStore::new(activities)))
}

/// Build the full application router
pub fn build_app(store: Arc<dyn ActivityStore>, config: &ServerConfig) -> Router {
    let activities_state = api::activities::AppState::new(store);
    let api_routes = api::activities::routes(activities_state);

    // Root, health and static files are never prefixed
    let app = Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .merge(build_router_with_prefix(api_routes, &config.api_prefix))
        .nest_service("/static", ServeDir::new(&config.static_dir))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-doc/openapi.json", ApiDoc::openapi()));

    let app = if config.cors_origins.is_empty() {
        app
    } else {
        app.layer(
            CorsLayer::new()
                .allow_origin(AllowOrigin::list(config.cors_origins.clone()))
                .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
                .allow_headers([header::CONTENT_TYPE, header::ACCEPT, header::ORIGIN]),
        )
    };

    app.layer(TraceLayer::new_for_http())
}

/// Build router with optional API prefix
pub fn build_router_with_prefix<S: Clone + Send + Sync + 'static>(
    api_routes: Router<S>,
    api_prefix: &str,
) -> Router<S> {
    if api_prefix.is_empty() {
        api_routes
    } else {
        Router::new().nest(api_prefix, api_routes)
    }
}
