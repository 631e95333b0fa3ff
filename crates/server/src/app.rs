//! # Application
//!
//! Router assembly, shared state and the server entry point.

use anyhow::{Context, Result};
use axum::{
    http::header,
    response::IntoResponse,
    routing::{any, get},
    Router,
};
use designkit_core::CatalogSource;
use std::sync::Arc;
use tokio::net::TcpListener;
use utoipa::OpenApi;

use crate::api::{self, about, projects, search};
use crate::assets;
use crate::config::ServerConfig;

/// Application state
///
/// Read-only after startup. Every request loads its own catalog from
/// `catalog`, so handlers share nothing mutable.
pub struct AppState {
    pub catalog: Arc<dyn CatalogSource>,
}

pub type SharedState = Arc<AppState>;

impl AppState {
    pub fn new(catalog: Arc<dyn CatalogSource>) -> SharedState {
        Arc::new(Self { catalog })
    }
}

// === OpenAPI Definition ===

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Base Dapps Design Kit API",
        version = "1.0.0",
        description = "Search and browse design kits of decentralized-application projects"
    ),
    paths(
        search::search,
        projects::list_projects,
        projects::grouped_projects,
        projects::get_project,
        about::get_about
    ),
    components(
        schemas(
            api::ProjectResponse,
            api::Suggestion,
            projects::GroupedResponse,
            projects::CategoryGroupResponse,
            projects::ProjectDetailResponse,
            about::SiteInfo
        )
    ),
    tags(
        (name = "search", description = "Name search over the catalog"),
        (name = "projects", description = "Catalog browsing"),
        (name = "about", description = "Site metadata")
    )
)]
pub struct ApiDoc;

async fn serve_openapi() -> impl IntoResponse {
    let spec = ApiDoc::openapi().to_json().unwrap_or_default();
    ([(header::CONTENT_TYPE, "application/json")], spec)
}

/// Build the full router
pub fn router(state: SharedState) -> Router {
    let project_routes = Router::new()
        .route("/", get(projects::list_projects))
        .route("/grouped", get(projects::grouped_projects))
        .route("/:name", get(projects::get_project));

    Router::new()
        // Method dispatch happens inside the handler so non-GET gets a plain-text 405
        .route("/api/search", any(search::search))
        .nest("/api/v1/projects", project_routes)
        // Nesting does not register the trailing-slash form
        .route("/api/v1/projects/", get(projects::list_projects))
        .route("/api/v1/about", get(about::get_about))
        .route("/api/v1/openapi.json", get(serve_openapi))
        .route("/projects.json", get(projects::raw_catalog))
        .fallback(get(assets::serve_static))
        .with_state(state)
}

/// Bind and serve until the process is stopped
pub async fn serve(config: &ServerConfig) -> Result<()> {
    let source = config.catalog_source();
    tracing::info!(catalog = %source.describe(), "Using catalog source");

    // Startup check only; each request still loads and reports on its own
    match source.load().await {
        Ok(catalog) => tracing::info!(records = catalog.len(), "Catalog ready"),
        Err(e) => tracing::warn!(error = %e, "Catalog failed to load at startup"),
    }

    let app = router(AppState::new(source));

    let addr = config.socket_addr();
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    tracing::info!(%addr, "Design kit server listening");
    tracing::info!("Routes: /api/search, /api/v1/projects, /api/v1/projects/grouped, /api/v1/projects/:name, /api/v1/about");

    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}
