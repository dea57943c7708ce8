//! HTTP handlers for the personality assessment endpoints.

use axum::extract::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use tracing::{info, warn};

use crate::domain::foundation::ValidationError;
use crate::domain::personality::{self, PersonalityReport, PersonalityType};

use super::dto::{AnalyzeRequest, ErrorResponse, QuestionsResponse, TypeInfo, TypesResponse};

/// Personality API error that implements IntoResponse.
pub enum PersonalityApiError {
    BadRequest(String),
}

impl IntoResponse for PersonalityApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error) = match self {
            PersonalityApiError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, ErrorResponse::bad_request(msg))
            }
        };
        (status, Json(error)).into_response()
    }
}

impl From<ValidationError> for PersonalityApiError {
    fn from(error: ValidationError) -> Self {
        PersonalityApiError::BadRequest(error.to_string())
    }
}

/// GET /api/personality/questions
///
/// Returns the full question bank for client rendering.
pub async fn get_questions() -> Json<QuestionsResponse> {
    let questions = personality::question_bank();
    Json(QuestionsResponse {
        questions,
        total_questions: questions.len(),
    })
}

/// POST /api/personality/analyze
///
/// Runs the assessment over the submitted answers.
pub async fn analyze(
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<PersonalityReport>, PersonalityApiError> {
    let report = personality::analyze(&request.answers).map_err(|error| {
        warn!(%error, "personality answers rejected");
        PersonalityApiError::from(error)
    })?;

    info!(personality_type = report.personality_type, "personality assessment served");
    Ok(Json(report))
}

/// GET /api/personality/types
///
/// Returns the catalog of the six archetypes.
pub async fn list_types() -> Json<TypesResponse> {
    let personality_types = PersonalityType::ALL
        .iter()
        .map(|pt| {
            let profile = pt.profile();
            (
                pt.label(),
                TypeInfo {
                    title: profile.title,
                    summary: profile.summary,
                    compatible_types: pt.compatible_types().iter().map(|t| t.label()).collect(),
                },
            )
        })
        .collect();

    Json(TypesResponse {
        personality_types,
        total_types: PersonalityType::ALL.len(),
    })
}
