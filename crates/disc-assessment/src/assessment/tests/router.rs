use super::common::*;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde_json::json;
use tower::ServiceExt;

use crate::assessment::bank::QuestionBank;
use crate::assessment::router::{assessment_router, bank_handler, score_handler, ScoreRequest};

fn score_request(body: serde_json::Value) -> axum::http::Request<axum::body::Body> {
    axum::http::Request::post("/api/v1/assessments/score")
        .header(axum::http::header::CONTENT_TYPE, "application/json")
        .body(axum::body::Body::from(
            serde_json::to_vec(&body).expect("serialize body"),
        ))
        .expect("request")
}

#[tokio::test]
async fn score_route_returns_result_and_description() {
    let bank = QuestionBank::long_form();
    let router = assessment_router(service());

    let response = router
        .oneshot(score_request(json!({
            "responses": respond_as(&bank, &DRIVER),
        })))
        .await
        .expect("router response");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["result"]["variant"], "long_form");
    assert_eq!(payload["result"]["profile"]["dominance"], 70);
    assert_eq!(payload["result"]["validity"]["validity_score"], 100);
    assert_eq!(payload["result"]["points_awarded"], 100);
    assert_eq!(payload["description"]["label"], "The Trailblazer");
}

#[tokio::test]
async fn score_route_honors_requested_variant() {
    let bank = QuestionBank::short_form();
    let router = assessment_router(service());

    let response = router
        .oneshot(score_request(json!({
            "variant": "short",
            "responses": zigzag(&bank),
        })))
        .await
        .expect("router response");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["result"]["variant"], "short_form");
    assert_eq!(payload["result"]["anomalies"], json!(["alternating"]));
    assert_eq!(payload["result"]["validity"]["is_reliable"], false);
}

#[tokio::test]
async fn score_route_rejects_empty_submissions() {
    let router = assessment_router(service());

    let response = router
        .oneshot(score_request(json!({ "responses": [] })))
        .await
        .expect("router response");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let payload = read_json_body(response).await;
    assert!(payload["error"]
        .as_str()
        .expect("error message")
        .contains("no responses"));
}

#[tokio::test]
async fn score_handler_rejects_unknown_variant() {
    let request = ScoreRequest {
        variant: Some("extended".to_string()),
        responses: uniform(&QuestionBank::short_form()),
    };

    let response = score_handler(State(service()), axum::Json(request)).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let payload = read_json_body(response).await;
    assert_eq!(payload["error"], "unknown assessment variant 'extended'");
}

#[tokio::test]
async fn bank_route_hides_option_weights() {
    let router = assessment_router(service());

    let response = router
        .oneshot(
            axum::http::Request::get("/api/v1/assessments/banks/short")
                .body(axum::body::Body::empty())
                .expect("request"),
        )
        .await
        .expect("router response");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["version"], "short-form/2.0.0");
    let questions = payload["questions"].as_array().expect("questions");
    assert_eq!(questions.len(), 15);
    assert_eq!(questions[0]["id"], "s01");
    assert_eq!(questions[0]["options"].as_array().map(Vec::len), Some(4));
    assert!(questions[0]["options"][0].is_string());
}

#[tokio::test]
async fn bank_handler_returns_not_found_for_unknown_variant() {
    let response = bank_handler(State(service()), Path("medium".to_string())).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
