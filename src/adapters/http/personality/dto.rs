//! HTTP DTOs for the personality assessment endpoints.
//!
//! The domain report types are already designed for serialization, so
//! responses reuse them directly; only the request envelope and the
//! catalog/error shapes live here.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::personality::Question;

/// POST /api/personality/analyze request body.
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    /// question id -> selected option index
    pub answers: BTreeMap<u8, usize>,
}

/// GET /api/personality/questions response.
#[derive(Debug, Serialize)]
pub struct QuestionsResponse {
    pub questions: &'static [Question],
    pub total_questions: usize,
}

/// One catalog entry of GET /api/personality/types.
#[derive(Debug, Serialize)]
pub struct TypeInfo {
    pub title: &'static str,
    pub summary: &'static str,
    pub compatible_types: Vec<&'static str>,
}

/// GET /api/personality/types response.
#[derive(Debug, Serialize)]
pub struct TypesResponse {
    pub personality_types: BTreeMap<&'static str, TypeInfo>,
    pub total_types: usize,
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
