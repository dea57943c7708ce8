//! HTTP routes for the personality assessment endpoints.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{analyze, get_questions, list_types};

/// Creates the personality router with all routes.
pub fn personality_routes() -> Router {
    Router::new()
        .route("/api/personality/questions", get(get_questions))
        .route("/api/personality/analyze", post(analyze))
        .route("/api/personality/types", get(list_types))
}
