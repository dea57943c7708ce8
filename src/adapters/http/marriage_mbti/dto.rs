//! HTTP DTOs for the Marriage MBTI+ endpoints.
//!
//! The wire format is camelCase, matching the client contract; request
//! DTOs convert into the domain answer types before analysis.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::marriage_mbti::{
    MarriageAnswer, MarriageQuestion, MbtiAnswer, MbtiQuestion,
};

/// POST /api/marriage-mbti/analyze request body.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    pub mbti_answers: Vec<MbtiAnswerDto>,
    pub marriage_answers: Vec<MarriageAnswerDto>,
}

/// One submitted MBTI answer.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MbtiAnswerDto {
    pub question_id: u8,
    pub answer: String,
}

impl From<MbtiAnswerDto> for MbtiAnswer {
    fn from(dto: MbtiAnswerDto) -> Self {
        MbtiAnswer::new(dto.question_id, dto.answer)
    }
}

/// One submitted relationship-values answer.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarriageAnswerDto {
    pub question_id: u8,
    pub answer: i64,
}

impl From<MarriageAnswerDto> for MarriageAnswer {
    fn from(dto: MarriageAnswerDto) -> Self {
        MarriageAnswer::new(dto.question_id, dto.answer)
    }
}

/// GET /api/marriage-mbti/questions response.
#[derive(Debug, Serialize)]
pub struct QuestionsResponse {
    #[serde(rename = "mbtiQuestions")]
    pub mbti_questions: &'static [MbtiQuestion],
    #[serde(rename = "marriageQuestions")]
    pub marriage_questions: &'static [MarriageQuestion],
    #[serde(rename = "totalMBTIQuestions")]
    pub total_mbti_questions: usize,
    #[serde(rename = "totalMarriageQuestions")]
    pub total_marriage_questions: usize,
}

/// One catalog entry of GET /api/marriage-mbti/mbti-types.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MbtiTypeInfo {
    pub name: &'static str,
    pub description: &'static str,
    pub love_characteristics: &'static [&'static str],
    pub compatible_types: Vec<&'static str>,
}

/// GET /api/marriage-mbti/mbti-types response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MbtiTypesResponse {
    pub mbti_types: BTreeMap<&'static str, MbtiTypeInfo>,
    pub total_types: usize,
}

/// GET /api/marriage-mbti/marriage-categories response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoriesResponse {
    pub categories: BTreeMap<&'static str, &'static str>,
    pub total_categories: usize,
}

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
        }
    }
}
