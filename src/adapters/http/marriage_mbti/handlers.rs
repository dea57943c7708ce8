//! HTTP handlers for the Marriage MBTI+ endpoints.

use axum::extract::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use tracing::{info, warn};

use crate::domain::foundation::ValidationError;
use crate::domain::marriage_mbti::{
    self, MarriageAnswer, MarriageCategory, MarriageMbtiReport, MbtiAnswer, MbtiType,
};

use super::dto::{
    AnalyzeRequest, CategoriesResponse, ErrorResponse, MbtiTypeInfo, MbtiTypesResponse,
    QuestionsResponse,
};

/// Marriage MBTI+ API error that implements IntoResponse.
pub enum MarriageMbtiApiError {
    BadRequest(String),
}

impl IntoResponse for MarriageMbtiApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error) = match self {
            MarriageMbtiApiError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, ErrorResponse::bad_request(msg))
            }
        };
        (status, Json(error)).into_response()
    }
}

impl From<ValidationError> for MarriageMbtiApiError {
    fn from(error: ValidationError) -> Self {
        MarriageMbtiApiError::BadRequest(error.to_string())
    }
}

/// GET /api/marriage-mbti/questions
///
/// Returns both question banks for client rendering.
pub async fn get_questions() -> Json<QuestionsResponse> {
    let mbti_questions = marriage_mbti::mbti_question_bank();
    let marriage_questions = marriage_mbti::marriage_question_bank();

    Json(QuestionsResponse {
        mbti_questions,
        marriage_questions,
        total_mbti_questions: mbti_questions.len(),
        total_marriage_questions: marriage_questions.len(),
    })
}

/// POST /api/marriage-mbti/analyze
///
/// Runs the combined assessment over both answer lists.
pub async fn analyze(
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<MarriageMbtiReport>, MarriageMbtiApiError> {
    let mbti_answers: Vec<MbtiAnswer> =
        request.mbti_answers.into_iter().map(Into::into).collect();
    let marriage_answers: Vec<MarriageAnswer> =
        request.marriage_answers.into_iter().map(Into::into).collect();

    let report = marriage_mbti::analyze(&mbti_answers, &marriage_answers).map_err(|error| {
        warn!(%error, "marriage MBTI+ answers rejected");
        MarriageMbtiApiError::from(error)
    })?;

    info!(mbti_type = report.mbti_type, "marriage MBTI+ assessment served");
    Ok(Json(report))
}

/// GET /api/marriage-mbti/mbti-types
///
/// Returns the catalog of the sixteen MBTI codes.
pub async fn list_mbti_types() -> Json<MbtiTypesResponse> {
    let mbti_types = MbtiType::ALL
        .iter()
        .map(|t| {
            let profile = t.profile();
            (
                t.code(),
                MbtiTypeInfo {
                    name: profile.name,
                    description: profile.description,
                    love_characteristics: profile.love_characteristics,
                    compatible_types: profile
                        .compatible_types
                        .iter()
                        .map(|c| c.mbti)
                        .collect(),
                },
            )
        })
        .collect();

    Json(MbtiTypesResponse {
        mbti_types,
        total_types: MbtiType::ALL.len(),
    })
}

/// GET /api/marriage-mbti/marriage-categories
///
/// Returns the five relationship-values categories.
pub async fn list_marriage_categories() -> Json<CategoriesResponse> {
    let categories = MarriageCategory::ALL
        .iter()
        .map(|c| (c.key(), c.label()))
        .collect();

    Json(CategoriesResponse {
        categories,
        total_categories: MarriageCategory::ALL.len(),
    })
}
