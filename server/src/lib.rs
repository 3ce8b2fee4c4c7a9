pub mod session;
pub mod webhook;

use anyhow::Result;
use axum::{extract::{Path, State}, http::StatusCode, routing::{get, post}, Json, Router};
use engine::persist::{load_catalog, CatalogPaths};
use engine::{Catalog, PropertyRecord, RawCriteria, ScoredProperty, SearchEngine};
use serde_json::{json, Value};
use session::SessionStore;
use std::path::Path as FsPath;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer, AllowOrigin};
use tower_http::trace::TraceLayer;

type ApiError = (StatusCode, Json<Value>);

#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<SearchEngine>,
    pub sessions: Arc<SessionStore>,
}

impl AppState {
    pub fn new(engine: SearchEngine) -> Self {
        Self { engine: Arc::new(engine), sessions: Arc::new(SessionStore::new()) }
    }
}

pub fn build_app<P: AsRef<FsPath>>(catalog_path: P) -> Result<Router> {
    // Load the catalog once at startup; it is read-only afterwards
    let records = load_catalog(&CatalogPaths::new(catalog_path.as_ref()))?;
    let catalog = Catalog::new(records)?;
    tracing::info!(path = %catalog_path.as_ref().display(), properties = catalog.len(), "catalog loaded");
    Ok(build_router(AppState::new(SearchEngine::new(catalog))))
}

pub fn build_router(app_state: AppState) -> Router {
    // CORS: read CORS_ALLOW_ORIGIN (comma-separated) or allow Any by default
    let cors = match std::env::var("CORS_ALLOW_ORIGIN") {
        Ok(val) => {
            let origins: Vec<_> = val
                .split(',')
                .filter_map(|s| s.trim().parse().ok())
                .collect();
            if origins.is_empty() {
                CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any)
            } else {
                CorsLayer::new().allow_origin(AllowOrigin::list(origins)).allow_methods(Any).allow_headers(Any)
            }
        }
        Err(_) => CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any),
    };

    Router::new()
        .route("/health", get(health_handler))
        .route("/api/properties", get(list_handler))
        .route("/api/properties/search", post(search_handler))
        .route("/api/properties/:id", get(detail_handler))
        .route("/api/vapi/webhook", post(webhook::webhook_handler))
        .with_state(app_state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

async fn health_handler() -> Json<Value> {
    let timestamp = time::OffsetDateTime::now_utc()
        .format(&time::format_description::well_known::Rfc3339)
        .unwrap_or_default();
    Json(json!({ "status": "ok", "timestamp": timestamp }))
}

pub async fn list_handler(State(state): State<AppState>) -> Json<Vec<PropertyRecord>> {
    Json(state.engine.get_all().to_vec())
}

pub async fn detail_handler(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<PropertyRecord>, ApiError> {
    id.trim()
        .parse()
        .ok()
        .and_then(|id| state.engine.get_by_id(id))
        .cloned()
        .map(Json)
        .ok_or_else(|| (StatusCode::NOT_FOUND, Json(json!({ "error": "Property not found" }))))
}

pub async fn search_handler(State(state): State<AppState>, Json(body): Json<Value>) -> Result<Json<Vec<ScoredProperty>>, ApiError> {
    let bad_request = |error: String| {
        tracing::debug!(%error, "rejected search criteria");
        (StatusCode::BAD_REQUEST, Json(json!({ "error": error })))
    };
    let raw: RawCriteria = serde_json::from_value(body).map_err(|e| bad_request(e.to_string()))?;
    let criteria = raw.normalize().map_err(|e| bad_request(e.to_string()))?;
    Ok(Json(state.engine.search(&criteria)))
}
