//! HTTP adapters - REST API implementations.
//!
//! Each diagnostic engine has its own HTTP adapter for endpoint exposure;
//! this module assembles them into the application router.

pub mod marriage_mbti;
pub mod personality;

use std::time::Duration;

use axum::http::HeaderValue;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

pub use marriage_mbti::marriage_mbti_routes;
pub use personality::personality_routes;

/// Builds the full application router with cross-cutting layers applied.
pub fn app_router(config: &ServerConfig) -> Router {
    let cors = cors_layer(config);

    Router::new()
        .merge(personality_routes())
        .merge(marriage_mbti_routes())
        .route("/health", get(health_check))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.request_timeout_secs,
        )))
        .layer(cors)
}

fn cors_layer(config: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .cors_origins_list()
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    if origins.is_empty() {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    }
}

/// GET /health
async fn health_check() -> Json<serde_json::Value> {
    Json(json!({
        "status": "healthy",
        "service": "Match Compass API",
        "version": env!("CARGO_PKG_VERSION"),
        "features": [
            "personality assessment",
            "Marriage MBTI+ assessment",
            "compatibility analysis",
            "personalized advice",
        ],
    }))
}
