//! Integration tests for the personality HTTP endpoints.
//!
//! These drive the assembled router end to end: question bank retrieval,
//! analysis of valid answer sets, and the 400 responses for invalid input.

use std::collections::BTreeMap;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use match_compass::adapters::http::app_router;
use match_compass::config::ServerConfig;

fn app() -> Router {
    app_router(&ServerConfig::default())
}

async fn get(path: &str) -> (StatusCode, Value) {
    let response = app()
        .oneshot(Request::get(path).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn post_json(path: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::post(path)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    let response = app().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn full_answers(index: usize) -> Value {
    let answers: BTreeMap<String, usize> = (1..=10).map(|id| (id.to_string(), index)).collect();
    json!({ "answers": answers })
}

#[tokio::test]
async fn questions_endpoint_returns_the_full_bank() {
    let (status, body) = get("/api/personality/questions").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_questions"], 10);

    let questions = body["questions"].as_array().unwrap();
    assert_eq!(questions.len(), 10);
    assert_eq!(questions[0]["id"], 1);
    assert_eq!(questions[0]["dimension"], "extroversion");
    assert_eq!(questions[0]["options"].as_array().unwrap().len(), 4);
    assert_eq!(questions[0]["options"][0]["score"], 4);
}

#[tokio::test]
async fn analyze_returns_a_full_report_for_valid_answers() {
    let (status, body) = post_json("/api/personality/analyze", full_answers(0)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["personality_type"], "Communicator");
    assert_eq!(body["scores"]["extroversion"], 100.0);
    assert_eq!(body["scores"]["commitment"], 100.0);
    assert_eq!(body["description"]["title"], "Communicator");
    assert_eq!(
        body["compatible_types"],
        json!(["Supporter", "Analyst", "Reliable Partner"])
    );
}

#[tokio::test]
async fn analyze_classifies_bottom_answers_as_reliable() {
    let (status, body) = post_json("/api/personality/analyze", full_answers(3)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["personality_type"], "Reliable Partner");
    assert_eq!(body["scores"]["empathy"], 0.0);
}

#[tokio::test]
async fn analyze_rejects_an_empty_answer_map() {
    let (status, body) =
        post_json("/api/personality/analyze", json!({ "answers": {} })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "BAD_REQUEST");
    assert!(body["message"]
        .as_str()
        .unwrap()
        .contains("No personality answers"));
}

#[tokio::test]
async fn analyze_reports_missing_question_ids() {
    let answers: BTreeMap<String, usize> =
        (1..=8).map(|id| (id.to_string(), 0)).collect();
    let (status, body) =
        post_json("/api/personality/analyze", json!({ "answers": answers })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let message = body["message"].as_str().unwrap();
    assert!(message.contains("Unanswered"));
    assert!(message.contains("9") && message.contains("10"));
}

#[tokio::test]
async fn analyze_reports_out_of_bounds_option_index() {
    let mut answers: BTreeMap<String, usize> =
        (1..=10).map(|id| (id.to_string(), 0)).collect();
    answers.insert("5".to_string(), 7);

    let (status, body) =
        post_json("/api/personality/analyze", json!({ "answers": answers })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let message = body["message"].as_str().unwrap();
    assert!(message.contains("question 5"));
    assert!(message.contains("7"));
}

#[tokio::test]
async fn types_endpoint_lists_all_six_archetypes() {
    let (status, body) = get("/api/personality/types").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_types"], 6);
    let types = body["personality_types"].as_object().unwrap();
    assert!(types.contains_key("Communicator"));
    assert!(types.contains_key("Reliable Partner"));
    assert_eq!(
        types["Leader"]["compatible_types"].as_array().unwrap().len(),
        3
    );
}

#[tokio::test]
async fn health_endpoint_reports_healthy() {
    let (status, body) = get("/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "Match Compass API");
}
