//! HTTP status API for uptime monitoring.
//!
//! Read-only endpoints reporting connection state, counters and cache size.
//! Spawned as a background task in the gateway, same pattern as the sweeper.

use axum::{
    extract::State,
    http::{HeaderName, HeaderValue, StatusCode},
    response::{IntoResponse, Json},
    routing::get,
    Router,
};
use chrono::Utc;
use polyglot_core::{
    cache::DedupCache,
    config::ApiConfig,
    languages::{supported_languages, trigger_count},
    stats::{format_uptime, Stats},
    traits::Channel,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, set_header::SetResponseHeaderLayer};
use tracing::{error, info};

/// Shared state for API handlers.
#[derive(Clone)]
pub struct ApiState {
    pub channel: Arc<dyn Channel>,
    pub cache: DedupCache,
    pub stats: Arc<Stats>,
}

fn connection_status(state: &ApiState) -> &'static str {
    if state.channel.is_connected() {
        "connected"
    } else {
        "disconnected"
    }
}

/// `GET /` — Overall status.
async fn root(State(state): State<ApiState>) -> Json<Value> {
    let snap = state.stats.snapshot();
    Json(json!({
        "status": "OK",
        "version": env!("CARGO_PKG_VERSION"),
        "uptime": format_uptime(snap.uptime_secs),
        "uptimeSecs": snap.uptime_secs,
        "bot": connection_status(&state),
        "supportedLanguages": trigger_count(),
        "stats": snap,
        "cacheSize": state.cache.len(),
        "timestamp": Utc::now().to_rfc3339(),
    }))
}

/// `GET /health` — 200 when the chat connection is up, 503 otherwise.
async fn health(State(state): State<ApiState>) -> (StatusCode, Json<Value>) {
    let connected = state.channel.is_connected();
    let code = if connected {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };
    (
        code,
        Json(json!({
            "status": if connected { "healthy" } else { "unhealthy" },
            "bot": connection_status(&state),
            "timestamp": Utc::now().to_rfc3339(),
        })),
    )
}

/// `GET /ping`
async fn ping() -> &'static str {
    "pong"
}

/// `GET /languages` — Supported trigger symbols.
async fn languages() -> Json<Value> {
    let languages = supported_languages();
    Json(json!({
        "total": languages.len(),
        "languages": languages,
    }))
}

/// `GET /stats` — Counters and live cache entries.
async fn stats(State(state): State<ApiState>) -> Json<Value> {
    let snap = state.stats.snapshot();
    let entries = state.cache.snapshot();
    Json(json!({
        "translationsProcessed": snap.translations_processed,
        "duplicatesPrevented": snap.duplicates_prevented,
        "errorsHandled": snap.errors_handled,
        "uptimeSecs": snap.uptime_secs,
        "startedAt": snap.started_at,
        "cacheSize": entries.len(),
        "cacheEntries": entries,
    }))
}

async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "error": "Not Found",
            "availableEndpoints": ["/", "/health", "/ping", "/languages", "/stats"],
        })),
    )
}

/// Build the router (separated for testing).
fn build_router(state: ApiState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/ping", get(ping))
        .route("/languages", get(languages))
        .route("/stats", get(stats))
        .fallback(not_found)
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("x-powered-by"),
            HeaderValue::from_static("Polyglot"),
        ))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Start the API server. Called from `Gateway::run()`.
pub async fn serve(config: ApiConfig, state: ApiState) {
    let app = build_router(state);
    let addr = format!("{}:{}", config.host, config.port);

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(l) => l,
        Err(e) => {
            error!("API server failed to bind to {addr}: {e}");
            return;
        }
    };

    info!("API server listening on {addr}");

    if let Err(e) = axum::serve(listener, app).await {
        error!("API server error: {e}");
    }
}
