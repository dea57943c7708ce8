//! HTTP routes for the Marriage MBTI+ endpoints.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{analyze, get_questions, list_marriage_categories, list_mbti_types};

/// Creates the Marriage MBTI+ router with all routes.
pub fn marriage_mbti_routes() -> Router {
    Router::new()
        .route("/api/marriage-mbti/questions", get(get_questions))
        .route("/api/marriage-mbti/analyze", post(analyze))
        .route("/api/marriage-mbti/mbti-types", get(list_mbti_types))
        .route(
            "/api/marriage-mbti/marriage-categories",
            get(list_marriage_categories),
        )
}
