//! Integration tests for the Marriage MBTI+ HTTP endpoints.
//!
//! These exercise the camelCase wire contract end to end: question bank
//! retrieval, full assessments, catalog endpoints, and the 400 responses
//! for malformed answer sets.

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

fn mbti_answers(letter: &str) -> Vec<Value> {
    (0..16)
        .map(|id| json!({ "questionId": id, "answer": letter }))
        .collect()
}

fn marriage_answers(value: i64) -> Vec<Value> {
    (0..10)
        .map(|id| json!({ "questionId": id, "answer": value }))
        .collect()
}

fn analyze_body(mbti: Vec<Value>, marriage: Vec<Value>) -> Value {
    json!({ "mbtiAnswers": mbti, "marriageAnswers": marriage })
}

#[tokio::test]
async fn questions_endpoint_returns_both_banks() {
    let (status, body) = get("/api/marriage-mbti/questions").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["totalMBTIQuestions"], 16);
    assert_eq!(body["totalMarriageQuestions"], 10);

    let mbti = body["mbtiQuestions"].as_array().unwrap();
    assert_eq!(mbti.len(), 16);
    assert_eq!(mbti[0]["id"], 0);
    assert_eq!(mbti[0]["axis"], "EI");
    assert!(mbti[0]["optionA"].is_string());
    assert!(mbti[0]["optionB"].is_string());

    let marriage = body["marriageQuestions"].as_array().unwrap();
    assert_eq!(marriage.len(), 10);
    assert_eq!(marriage[0]["category"], "communication");
    assert_eq!(marriage[0]["options"].as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn analyze_returns_estj_for_all_first_options() {
    let (status, body) = post_json(
        "/api/marriage-mbti/analyze",
        analyze_body(mbti_answers("A"), marriage_answers(3)),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["mbtiType"], "ESTJ");
    assert_eq!(body["typeName"], "Executive");
    assert_eq!(body["mbtiScores"]["E"], 4);
    assert_eq!(body["mbtiScores"]["I"], 0);
    assert_eq!(body["marriageScores"]["communication"], 3.0);
    assert_eq!(body["advice"], json!([]));
    assert_eq!(body["compatibleTypes"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn analyze_returns_infp_for_all_second_options() {
    let (status, body) = post_json(
        "/api/marriage-mbti/analyze",
        analyze_body(mbti_answers("B"), marriage_answers(5)),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["mbtiType"], "INFP");
    assert_eq!(body["typeName"], "Mediator");
    assert_eq!(body["marriageScores"]["intimacy"], 5.0);
    // All of the first four answers sit at 5, so every advice rule fires
    // with its high framing.
    assert_eq!(body["advice"].as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn analyze_emits_low_advice_for_weak_early_answers() {
    let mut marriage = marriage_answers(3);
    marriage[0] = json!({ "questionId": 0, "answer": 2 });

    let (status, body) = post_json(
        "/api/marriage-mbti/analyze",
        analyze_body(mbti_answers("A"), marriage),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let advice = body["advice"].as_array().unwrap();
    assert_eq!(advice.len(), 1);
    assert_eq!(advice[0]["category"], "Communication");
}

#[tokio::test]
async fn analyze_rejects_a_short_mbti_answer_list() {
    let mut mbti = mbti_answers("A");
    mbti.pop();

    let (status, body) = post_json(
        "/api/marriage-mbti/analyze",
        analyze_body(mbti, marriage_answers(3)),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "BAD_REQUEST");
    let message = body["message"].as_str().unwrap();
    assert!(message.contains("16"));
    assert!(message.contains("15"));
}

#[tokio::test]
async fn analyze_rejects_an_empty_marriage_answer_list() {
    let (status, body) = post_json(
        "/api/marriage-mbti/analyze",
        analyze_body(mbti_answers("A"), Vec::new()),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().unwrap().contains("No marriage"));
}

#[tokio::test]
async fn analyze_rejects_an_unknown_mbti_letter() {
    let mut mbti = mbti_answers("A");
    mbti[3] = json!({ "questionId": 3, "answer": "C" });

    let (status, body) = post_json(
        "/api/marriage-mbti/analyze",
        analyze_body(mbti, marriage_answers(3)),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let message = body["message"].as_str().unwrap();
    assert!(message.contains("'A' or 'B'"));
    assert!(message.contains("'C'"));
}

#[tokio::test]
async fn analyze_rejects_an_out_of_range_marriage_answer() {
    let mut marriage = marriage_answers(3);
    marriage[7] = json!({ "questionId": 7, "answer": 6 });

    let (status, body) = post_json(
        "/api/marriage-mbti/analyze",
        analyze_body(mbti_answers("A"), marriage),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let message = body["message"].as_str().unwrap();
    assert!(message.contains("1-5"));
    assert!(message.contains("6"));
}

#[tokio::test]
async fn analyze_rejects_answers_out_of_id_order() {
    let mut mbti = mbti_answers("A");
    mbti.swap(0, 1);

    let (status, body) = post_json(
        "/api/marriage-mbti/analyze",
        analyze_body(mbti, marriage_answers(3)),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().unwrap().contains("ascending"));
}

#[tokio::test]
async fn mbti_types_endpoint_lists_all_sixteen() {
    let (status, body) = get("/api/marriage-mbti/mbti-types").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["totalTypes"], 16);
    let types = body["mbtiTypes"].as_object().unwrap();
    assert_eq!(types.len(), 16);
    assert_eq!(types["INTJ"]["name"], "Architect");
    assert_eq!(
        types["ESTJ"]["compatibleTypes"].as_array().unwrap().len(),
        3
    );
}

#[tokio::test]
async fn marriage_categories_endpoint_lists_all_five() {
    let (status, body) = get("/api/marriage-mbti/marriage-categories").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["totalCategories"], 5);
    let categories = body["categories"].as_object().unwrap();
    assert_eq!(categories["communication"], "Communication");
    assert_eq!(categories["future"], "Future plans");
}
