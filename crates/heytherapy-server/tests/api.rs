use std::sync::Arc;

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Method, Request, StatusCode};
use futures::FutureExt;
use futures::future::BoxFuture;
use jiff::civil::{Date, date};
use serde_json::{Value, json};
use tower::ServiceExt;
use uuid::Uuid;

use heytherapy_bedrock::error::BedrockError;
use heytherapy_bedrock::models::{ChatModel, ModelSelection};
use heytherapy_bedrock::prompt::ReportRequest;
use heytherapy_bedrock::report::{GeneratedReport, ReportGenerator};
use heytherapy_core::models::usage::TokenUsage;
use heytherapy_server::router;
use heytherapy_server::state::AppState;
use heytherapy_storage::memory::InMemoryStore;

struct Healthy;

impl ReportGenerator for Healthy {
    fn generate<'a>(
        &'a self,
        request: &'a ReportRequest,
    ) -> BoxFuture<'a, Result<GeneratedReport, BedrockError>> {
        async move {
            Ok(GeneratedReport {
                transaction_id: Uuid::nil(),
                model_id: "us.anthropic.claude-sonnet-4-5".to_string(),
                text: format!("Latest score {:.2}.", request.latest_score),
                usage: TokenUsage::default(),
            })
        }
        .boxed()
    }
}

struct Broken;

impl ReportGenerator for Broken {
    fn generate<'a>(
        &'a self,
        _request: &'a ReportRequest,
    ) -> BoxFuture<'a, Result<GeneratedReport, BedrockError>> {
        async move { Err(BedrockError::Invocation("service unavailable".to_string())) }.boxed()
    }
}

fn fixed_day() -> Date {
    date(2026, 4, 1)
}

fn app(reports: Arc<dyn ReportGenerator>) -> Router {
    let selection = ModelSelection::Resolved {
        model: ChatModel {
            model_id: "us.anthropic.claude-sonnet-4-5".to_string(),
            name: "Claude Sonnet 4.5".to_string(),
        },
    };
    let mut state = AppState::new(Arc::new(InMemoryStore::new()), reports, selection);
    state.today = fixed_day;
    router(state)
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header("content-type", "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

async fn submit(app: &Router, patient_id: &str, value: u8, narrative: &str) -> (StatusCode, Value) {
    send(
        app,
        Method::POST,
        "/check-ins",
        Some(json!({
            "patient_id": patient_id,
            "responses": vec![value; 20],
            "narrative": narrative,
        })),
    )
    .await
}

#[tokio::test]
async fn health_reports_selected_model() {
    let app = app(Arc::new(Healthy));
    let (status, body) = send(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["model"], "us.anthropic.claude-sonnet-4-5");

    let (_, body) = send(&app, Method::GET, "/model", None).await;
    assert_eq!(body["status"], "resolved");
}

#[tokio::test]
async fn questions_are_listed_in_order() {
    let app = app(Arc::new(Healthy));
    let (status, body) = send(&app, Method::GET, "/questions", None).await;
    assert_eq!(status, StatusCode::OK);
    let questions = body.as_array().unwrap();
    assert_eq!(questions.len(), 20);
    assert_eq!(questions[0]["label"], "Mood stability");
}

#[tokio::test]
async fn check_ins_create_then_append() {
    let app = app(Arc::new(Healthy));

    let (status, body) = submit(&app, "p-1", 3, "").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["history_len"], 1);
    assert_eq!(body["check_in"]["score"], 3.0);
    assert_eq!(body["check_in"]["date"], "2026-04-01");
    assert_eq!(body["risk_band"], "moderate");
    assert!(body.get("emergency_notice").is_none());

    let (_, body) = submit(&app, "p-1", 5, "better").await;
    assert_eq!(body["history_len"], 2);

    let (_, body) = send(&app, Method::GET, "/patients/p-1", None).await;
    assert_eq!(body["latest"]["score"], 5.0);
    assert_eq!(body["latest"]["narrative"], "better");
    assert_eq!(body["trend"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn invalid_responses_are_rejected_and_not_stored() {
    let app = app(Arc::new(Healthy));

    let (status, body) = send(
        &app,
        Method::POST,
        "/check-ins",
        Some(json!({ "patient_id": "p-1", "responses": [3, 3, 3] })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("expected 20 responses"));

    let (status, _) = send(&app, Method::GET, "/patients/p-1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn self_harm_keyword_warns_without_blocking() {
    let app = app(Arc::new(Healthy));
    let (status, body) = submit(&app, "p-2", 1, "Thinking about SUICIDE a lot").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["emergency_notice"].is_string());
    assert_eq!(body["history_len"], 1);
}

#[tokio::test]
async fn overview_has_one_row_per_patient() {
    let app = app(Arc::new(Healthy));

    let (_, body) = send(&app, Method::GET, "/patients", None).await;
    assert_eq!(body["rows"].as_array().unwrap().len(), 0);
    assert!(body["warning"].is_string());

    submit(&app, "carol", 5, "").await;
    submit(&app, "alex", 2, "").await;
    submit(&app, "carol", 1, "").await;
    submit(&app, "alex", 4, "").await;

    let (status, body) = send(&app, Method::GET, "/patients", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.get("warning").is_none());
    let rows = body["rows"].as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["patient_id"], "carol");
    assert_eq!(rows[0]["latest_score"], 1.0);
    assert_eq!(rows[0]["risk_band"], "high");
    assert_eq!(rows[1]["patient_id"], "alex");
    assert_eq!(rows[1]["risk_band"], "low");
}

#[tokio::test]
async fn dashboard_includes_generated_report() {
    let app = app(Arc::new(Healthy));
    submit(&app, "p-1", 4, "").await;

    let (status, body) = send(&app, Method::GET, "/patients/p-1/dashboard", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["risk_band"], "low");
    assert_eq!(body["report"]["status"], "generated");
    assert_eq!(body["report"]["text"], "Latest score 4.00.");
}

#[tokio::test]
async fn report_failure_leaves_rest_of_dashboard_intact() {
    let app = app(Arc::new(Broken));
    submit(&app, "p-1", 2, "").await;

    let (status, body) = send(&app, Method::GET, "/patients/p-1/dashboard", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["latest"]["score"], 2.0);
    assert_eq!(body["risk_band"], "high");
    assert_eq!(body["trend"].as_array().unwrap().len(), 1);
    assert_eq!(body["verified"], false);
    assert_eq!(body["clinical_notes"], "");
    assert_eq!(body["report"]["status"], "unavailable");
    assert_eq!(body["report"]["reason"], "invocation");

    let (status, body) = send(&app, Method::POST, "/patients/p-1/report", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "unavailable");
}

#[tokio::test]
async fn review_edits_persist_across_reads() {
    let app = app(Arc::new(Healthy));
    submit(&app, "p-1", 3, "").await;

    let (status, body) = send(
        &app,
        Method::PUT,
        "/patients/p-1/review",
        Some(json!({ "verified": true, "clinical_notes": "Call on Friday." })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["verified"], true);

    send(
        &app,
        Method::PUT,
        "/patients/p-1/review",
        Some(json!({ "clinical_notes": "Called, doing fine." })),
    )
    .await;

    let (_, body) = send(&app, Method::GET, "/patients/p-1", None).await;
    assert_eq!(body["verified"], true);
    assert_eq!(body["clinical_notes"], "Called, doing fine.");

    // A new process starts with an empty store.
    let fresh = self::app(Arc::new(Healthy));
    let (status, _) = send(&fresh, Method::GET, "/patients/p-1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unknown_patient_is_not_found() {
    let app = app(Arc::new(Healthy));
    for (method, uri) in [
        (Method::GET, "/patients/nobody"),
        (Method::GET, "/patients/nobody/trend"),
        (Method::GET, "/patients/nobody/dashboard"),
        (Method::POST, "/patients/nobody/report"),
    ] {
        let (status, body) = send(&app, method, uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
        assert!(body["error"].as_str().unwrap().contains("nobody"));
    }

    let (status, _) = send(
        &app,
        Method::PUT,
        "/patients/nobody/review",
        Some(json!({ "verified": true })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn out_of_range_values_are_validation_errors() {
    let app = app(Arc::new(Healthy));

    let mut responses = vec![3i64; 20];
    responses[0] = 300;
    responses[1] = -1;
    let (status, body) = send(
        &app,
        Method::POST,
        "/check-ins",
        Some(json!({ "patient_id": "p-1", "responses": responses })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let error = body["error"].as_str().unwrap();
    assert!(error.contains("Mood stability: response 300"));
    assert!(error.contains("Anxiety intensity: response -1"));

    let (status, _) = send(&app, Method::GET, "/patients/p-1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn malformed_bodies_get_json_bad_request() {
    let app = app(Arc::new(Healthy));

    let (status, body) = send(
        &app,
        Method::POST,
        "/check-ins",
        Some(json!({ "responses": [3] })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("patient_id"));

    let (status, body) = send(
        &app,
        Method::POST,
        "/check-ins",
        Some(json!({ "patient_id": "p-1", "responses": ["high"] })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/check-ins")
                .header("content-type", "application/json")
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert!(body["error"].is_string());

    submit(&app, "p-1", 3, "").await;
    let (status, body) = send(
        &app,
        Method::PUT,
        "/patients/p-1/review",
        Some(json!({ "verified": "yes" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn empty_identifier_is_reachable_through_sub_routes_only() {
    let app = app(Arc::new(Healthy));
    let (status, _) = submit(&app, "", 2, "").await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = send(&app, Method::GET, "/patients", None).await;
    assert_eq!(body["rows"][0]["patient_id"], "");

    let (status, body) = send(&app, Method::GET, "/patients//dashboard", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["patient_id"], "");

    let (status, body) = send(
        &app,
        Method::PUT,
        "/patients//review",
        Some(json!({ "verified": true })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["verified"], true);

    // `/patients/` has no identifier segment at all.
    let (status, _) = send(&app, Method::GET, "/patients/", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
